//! shutterfeed-feeds — feed source adapters for shutterfeed.
//!
//! A feed adapter issues the network request, decodes raw records, and
//! replaces the [`shutterfeed_core::FeedStore`] contents wholesale. All
//! fetch-path failures are swallowed at the adapter boundary and surface to
//! the consumer only as an empty feed.

pub mod flickr;

pub use flickr::{FeedError, FlickrFeed};
