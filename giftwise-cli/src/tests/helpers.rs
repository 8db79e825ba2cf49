//! Test helpers for writing catalogue and recipient exports.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const GIFTS_JSON: &str = r#"[
  {"Id": 1, "Title": "Trail Running Shoes", "Category": "Sports & Fitness",
   "Tags": "hiking, outdoor", "Reasoning": "great for trails",
   "MatchScore": 70, "Price": 89.0},
  {"Id": 2, "Title": "Burr Coffee Grinder", "Category": "Food & Drinks",
   "Tags": "coffee, kitchen", "Price": 49.0},
  {"Id": 3, "Title": "Designer Watch", "Category": "Accessories",
   "Tags": "luxury", "MatchScore": 95, "Price": 900.0}
]"#;

pub(super) const RECIPIENTS_JSON: &str = r#"[
  {"Id": 7, "Name": "Sam", "Interests": "coffee",
   "GiftHistory": "[\"Burr Coffee Grinder\"]"}
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding a gift export and a recipient export.
#[derive(Debug)]
pub(super) struct ExportFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
    gifts: Utf8PathBuf,
    recipients: Utf8PathBuf,
}

impl ExportFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let gifts = root.join("gifts.json");
        let recipients = root.join("recipients.json");
        write_utf8(&gifts, GIFTS_JSON.as_bytes());
        write_utf8(&recipients, RECIPIENTS_JSON.as_bytes());
        Self {
            _dir: dir,
            root,
            gifts,
            recipients,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn gifts(&self) -> &Utf8Path {
        &self.gifts
    }

    pub(super) fn recipients(&self) -> &Utf8Path {
        &self.recipients
    }
}
