//! Melody Catalog
//!
//! In-memory catalog of marketplace tracks plus the per-user membership
//! sets (owned library, likes) that gate actions like download.
//!
//! Views are pure and recomputed on demand; nothing here is persisted.
//! The track list is expected to arrive from the backend ordered
//! newest-first; the `Newest` sort order relies on that.
//!
//! # Example
//!
//! ```rust
//! use melody_catalog::{CatalogStore, SortOrder};
//! use melody_core::types::{GenreFilter, Track};
//!
//! let mut catalog = CatalogStore::new();
//! catalog.set_tracks(vec![
//!     Track::new("Sunrise", "Thandi", "Dawn"),
//!     Track::new("Midnight", "Sipho", "Dusk"),
//! ]);
//!
//! let view = catalog.browse(&GenreFilter::All, SortOrder::TitleAsc);
//! assert_eq!(view[0].title, "Midnight");
//! ```

#![forbid(unsafe_code)]

mod browse;
mod discover;
mod store;

pub use browse::SortOrder;
pub use discover::{FEATURED_KEYWORD, RAIL_SIZE};
pub use store::CatalogStore;
