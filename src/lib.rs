//! # Compere
//!
//! `compere` holds the message data model of a live Q&A / chat client.
//! A `MessageRecord` carries one message's author, body, avatar and vote state.
//!
//! ## Core Modules
//!
//! - `message`: `MessageRecord` and the backend entry shape it is built from.
//! - `feed`: Decoding backend feeds into records and encoding records as JSON.
//! - `config`: Handles loading settings from files and the environment.
//! - `utils`: Contains shared utilities, such as error handling and logging.

pub mod config;
pub mod feed;
pub mod message;
pub mod utils;
