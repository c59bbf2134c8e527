//! Signal extractors - one per source kind.
//!
//! Each extractor turns an already-collected payload into signals. The weight
//! formulas are source-specific and deliberately kept apart: a weight is only
//! meaningful relative to other signals from the same source.

mod on_chain;
mod repository;
mod social;

pub use on_chain::*;
pub use repository::*;
pub use social::*;

use chrono::{DateTime, Utc};
use narrative_rules::SourceKind;

use crate::signals::Signal;

/// Converts one source's payload into signals.
///
/// Implementations never emit a signal without keywords and always emit
/// weights in (0, 1].
pub trait SignalExtractor {
    type Payload;

    /// The source this extractor reads.
    fn source(&self) -> SourceKind;

    /// Extract signals, stamping them with `observed_at` when the payload
    /// carries no timestamp of its own.
    fn extract(&self, payload: &Self::Payload, observed_at: DateTime<Utc>) -> Vec<Signal>;
}
