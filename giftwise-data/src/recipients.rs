//! Recipient lookup backed by a JSON export.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use camino::Utf8Path;
use log::warn;

use crate::{DataError, Recipient, RemoteRecipient, source::read_records};

/// Recipients keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientDirectory {
    recipients: BTreeMap<u64, Recipient>,
}

impl RecipientDirectory {
    /// Load recipients from a JSON array of remote recipient records.
    ///
    /// Malformed records are skipped with a warning. When an identifier
    /// repeats, the last record wins.
    ///
    /// # Errors
    /// Returns [`DataError`] when the file cannot be opened or is not a JSON
    /// array.
    pub fn open(path: &Utf8Path) -> Result<Self, DataError> {
        let records = read_records(path)?;
        let recipients = records
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, raw)| match serde_json::from_value::<RemoteRecipient>(raw) {
                    Ok(remote) => Some(Recipient::from(remote)),
                    Err(err) => {
                        warn!("Skipped recipient record: path={path}, index={index} ({err})");
                        None
                    }
                },
            );
        Ok(Self::from_recipients(recipients))
    }

    /// Build a directory from canonical recipients.
    pub fn from_recipients<I>(recipients: I) -> Self
    where
        I: IntoIterator<Item = Recipient>,
    {
        Self {
            recipients: recipients
                .into_iter()
                .map(|recipient| (recipient.id, recipient))
                .collect(),
        }
    }

    /// Look up a recipient by identifier.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Recipient> {
        self.recipients.get(&id)
    }

    /// Return the number of recipients held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    /// Report whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }
}
