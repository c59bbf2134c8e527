//! # Narrative Core
//!
//! The signal extraction and narrative scoring engine. This crate consumes the
//! payloads and vocabularies defined in `narrative_rules`, turns raw collector
//! output into weighted signals, and scores every narrative from them.
//!
//! ## Core Components
//!
//! - **signals**: The normalized evidence unit and the shared keyword matcher
//! - **extractors**: One extractor per source kind, each with its own weighting
//! - **aggregator**: Groups signals by narrative and derives confidence and evidence
//! - **pipeline**: Runs collectors, extractors and the aggregator, and shapes the report
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: Classification is plain keyword matching with linear weight sums
//! - **Fixed Cardinality**: Every run emits exactly one narrative per definition
//! - **Degrade, Don't Fail**: A failing collector contributes an empty payload

pub mod aggregator;
pub mod error;
pub mod extractors;
pub mod pipeline;
pub mod signals;

pub use aggregator::*;
pub use error::*;
pub use extractors::*;
pub use pipeline::*;
pub use signals::*;
