//! # lexis-data
//!
//! Everything in Lexis that touches the filesystem or the network:
//! - [`Loader`]: fetches the term and fact collections concurrently from
//!   file paths or HTTP URLs and hands back a read-only
//!   [`DataContext`](lexis_core::DataContext)
//! - [`FilePreferenceStore`]: a JSON-file implementation of
//!   [`PreferenceStore`](lexis_core::PreferenceStore)

mod error;
mod loader;
mod preferences;
mod source;

pub use error::{LoadError, PreferenceError};
pub use loader::Loader;
pub use preferences::FilePreferenceStore;
pub use source::DataSource;
