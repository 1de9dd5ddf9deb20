//! The `feed` module converts between JSON payloads and `MessageRecord`s.
//!
//! A feed is the JSON array the Q&A backend returns from its listing
//! endpoints. The backend writes `null` when a listing is empty.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::message::{BackendEntry, MessageRecord};
use crate::utils::CompereError;

/// Reads a feed from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String, CompereError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Reading feed file");
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            debug!("Reading feed from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Decodes a backend feed into records.
pub fn decode_entries(json: &str) -> Result<Vec<MessageRecord>, CompereError> {
    let entries: Option<Vec<BackendEntry>> =
        serde_json::from_str(json).map_err(CompereError::Decode)?;

    let Some(entries) = entries else {
        warn!("Feed is null, treating it as empty");
        return Ok(Vec::new());
    };

    debug!(count = entries.len(), "Decoded backend entries");
    Ok(entries.into_iter().map(MessageRecord::from).collect())
}

/// Decodes a JSON array already in record shape.
pub fn decode_records(json: &str) -> Result<Vec<MessageRecord>, CompereError> {
    serde_json::from_str(json).map_err(CompereError::Decode)
}

/// Assigns `avatar` to every record that has no avatar yet.
pub fn apply_default_avatar(records: &mut [MessageRecord], avatar: &str) {
    for record in records.iter_mut().filter(|r| r.avatar_image.is_none()) {
        record.avatar_image = Some(avatar.to_string());
    }
}

/// Encodes one record as a single JSON line.
pub fn encode_record(record: &MessageRecord) -> Result<String, CompereError> {
    serde_json::to_string(record).map_err(CompereError::Encode)
}

#[cfg(test)]
mod tests;
