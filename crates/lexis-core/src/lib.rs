//! # lexis-core
//!
//! Core types and the pure logic behind Lexis.
//!
//! This crate provides everything that does not touch the filesystem, the
//! network or a terminal:
//! - Entity structs for the two data collections (terms and facts)
//! - The read-only [`DataContext`] handed to every component
//! - Deterministic per-day index selection
//! - Multiple-choice quiz generation
//! - Case-insensitive term search
//! - Citation aggregation across terms
//! - Theme preference handling behind a [`PreferenceStore`] seam
//! - View models that map data to a structured, renderer-agnostic shape

pub mod context;
pub mod entities;
pub mod errors;
pub mod quiz;
pub mod search;
pub mod selector;
pub mod sources;
pub mod theme;
pub mod view;

pub use context::DataContext;
pub use entities::{Fact, Source, Term};
pub use errors::CoreError;
pub use theme::{MemoryPreferenceStore, PreferenceStore, Theme};
