// Shared helpers for export-loading tests.

use std::io::Write;

use camino::Utf8PathBuf;
use tempfile::NamedTempFile;

/// Write `contents` to a temporary `.json` file and return its handle.
pub fn write_export(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp export");
    file.write_all(contents.as_bytes())
        .expect("write temp export");
    file
}

/// UTF-8 path of a temporary export.
pub fn utf8_path(file: &NamedTempFile) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(file.path().to_path_buf()).expect("temp path should be UTF-8")
}

/// A small gift export mixing both field spellings and value encodings.
pub const GIFT_EXPORT: &str = r#"[
  {"Id": 1, "Title": "Trail Running Shoes", "Category": "Sports & Fitness",
   "Tags": "hiking, outdoor", "Reasoning": "great for trails",
   "MatchScore": 70, "Price": 89.0},
  {"id": 2, "title": "Burr Coffee Grinder", "category": "Food & Drinks",
   "tags": ["coffee", "kitchen"], "price": "49.5"},
  {"Id": 3, "Title": "Mystery Box", "Price": {"amount": 10}},
  {"Title": "No Identifier", "Price": 5},
  {"Id": 4, "Title": "Gift Card", "MatchScore": "abc"}
]"#;

/// A recipient export with string-encoded history.
pub const RECIPIENT_EXPORT: &str = r#"[
  {"Id": 7, "Name": "Sam", "Interests": "coffee, hiking",
   "GiftHistory": "[\"Burr Coffee Grinder\"]"},
  {"id": 8, "name": "Alex", "interests": ["reading"], "giftHistory": []},
  {"Name": "Nobody"}
]"#;
