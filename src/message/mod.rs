//! The `message` module defines the message data model.
//!
//! - `record`: `MessageRecord`, the display and voting state of one message.
//! - `entry`: `BackendEntry`, one entry as the Q&A backend serializes it, and
//!   its conversion into a `MessageRecord`.

pub mod entry;
pub mod record;

pub use entry::{BackendEntry, EntryType};
pub use record::MessageRecord;
