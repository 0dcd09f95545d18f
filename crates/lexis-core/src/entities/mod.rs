//! Entity structs for the Lexis data collections.
//!
//! Both collections are loaded from loosely-shaped JSON. Every field except
//! the identifying text is optional, and even the identifying text falls back
//! to an empty string rather than rejecting the entry. An explicit `null`
//! is read the same way as a missing key.

use serde::{Deserialize, Deserializer};

mod fact;
mod term;

pub use fact::Fact;
pub use term::{Source, Term};

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
