//! Signals - the normalized unit of evidence.
//!
//! A signal is produced from exactly one raw collected item:
//! - **Keywords**: vocabulary entries the item matched (never empty)
//! - **Weight**: source-local strength of evidence in (0, 1]
//! - **Metadata**: display-only details about the item

mod matcher;
mod signal;

pub use matcher::*;
pub use signal::*;
