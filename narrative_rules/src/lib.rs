//! # Narrative Rules
//!
//! The "vocabulary bible" crate - the fixed narrative definitions, the static
//! idea table, source kinds, and the payload shapes handed over by collectors.
//! This crate is the single source of truth for classification data and does
//! not contain any scoring logic.

pub mod definitions;
pub mod ideas;
pub mod payloads;
pub mod sources;

pub use definitions::*;
pub use ideas::*;
pub use payloads::*;
pub use sources::*;
