//! Data-source collaborators for Giftwise.
//!
//! Catalogue and recipient exports come from a remote store whose records
//! mix field spellings and encode lists as strings. This crate maps them onto
//! the canonical [`giftwise_core`] types once, at the boundary:
//!
//! - [`load_gifts`] and [`JsonGiftCatalogue`] read gift exports and implement
//!   [`GiftCatalogue`](giftwise_core::GiftCatalogue).
//! - [`RecipientDirectory`] reads recipient exports for gift-history lookups.
//!
//! Individual malformed records are logged and skipped; only unreadable or
//! non-array files are errors.

#![forbid(unsafe_code)]

mod catalogue;
mod error;
mod recipients;
pub mod records;
pub mod source;

pub use catalogue::{JsonGiftCatalogue, load_gifts};
pub use error::{DataError, RecordError};
pub use recipients::RecipientDirectory;
pub use records::{Recipient, RemoteGift, RemoteRecipient};
