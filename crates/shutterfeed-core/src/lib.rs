//! shutterfeed-core — photo feed pipeline library.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! Fetcher ──► Store ──► Search ──► Consumer
//!               │
//!               └──► Normalizer (on demand)
//! ```
//!
//! The fetcher (in `shutterfeed-feeds`) replaces the store's raw list
//! wholesale on every fetch. Everything downstream of the store is
//! synchronous and pure: the normalizer derives presentation fields per item,
//! and the search layer filters and sorts the derived list on every query.
//! Nothing is cached between queries.

pub mod config;
pub mod normalizer;
pub mod search;
pub mod store;
pub mod types;

pub use store::FeedStore;
pub use types::{Media, PresentationItem, RawItem, Rgb, SortKey};
