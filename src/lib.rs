//! data structures for prometheus alertmanager webhook payloads
//!
//! Features:
//! - the webhook payload schema ([Alert], [AlertGroup], [Silence]) accepting
//!   both the camelCase wire spelling and snake_case field names on input
//! - per alert specific annotations and labels, derived automatically when a
//!   payload is deserialized
//! - reconciliation operations keeping the common/specific partition of an
//!   alert group consistent while entries are added, overwritten, prefixed or
//!   removed, by exact name or by pattern

pub mod alert;
pub mod alert_group;
pub mod error;
pub mod intersect;
pub mod pattern;
pub mod silence;
pub mod target;

pub use alert::Alert;
pub use alert_group::{AlertGroup, RawAlertGroup};
pub use error::{ModelError, Result};
pub use intersect::intersect;
pub use pattern::NamePattern;
pub use silence::{Matcher, Silence};
pub use target::Target;
