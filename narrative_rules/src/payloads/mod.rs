//! Payload shapes handed over by collectors.
//!
//! Collectors are permissive: every array and optional field defaults to empty,
//! so a partial or absent document still deserializes. Explicit `null`s are
//! read as the field's default as well.

mod on_chain;
mod repository;
mod social;

pub use on_chain::*;
pub use repository::*;
pub use social::*;

use serde::{Deserialize, Deserializer};

/// Deserialize a field, reading `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
