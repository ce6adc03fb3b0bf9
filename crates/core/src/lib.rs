//! Core types and traits for modelkit
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: Unified value enum with strict, no-coercion equality
//! - Record: Open-shape mapping from field names to values
//! - Model / Assign: How collections read identities and merge updates
//! - Key: Per-call identity resolution (field names or accessors)
//! - ListConfig: Key and load policy for keyed lists
//! - Error: Error type for the surfaces around collection operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod key;
pub mod record;
pub mod value;

pub use config::{ListConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use key::{by, By, Key, SortValue, DEFAULT_KEY};
pub use record::{Assign, Model, Record};
pub use value::Value;
