//! Collaborators outside the settings core.
//!
//! Nothing in `core` or the composer/binder path depends on this module.

pub mod gallery;

pub use gallery::{
    ChartData, ChartDisplayKind, GalleryConfig, GalleryFetchError, GalleryItem, GalleryLoader,
    GalleryRecord, GallerySource, GalleryState, PageRequest, parse_page, record_title,
};
