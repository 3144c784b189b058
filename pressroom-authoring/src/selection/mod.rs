//! Selection managers for auxiliary entities
//!
//! Each manager holds the currently chosen subset/value for one entity
//! kind and enforces that kind's selection rules. Resolved option lists
//! come from [`crate::resolvers`]; the managers never fetch anything
//! themselves.

mod gallery;
mod images;
mod named_list;
mod regions;

pub use gallery::GallerySelection;
pub use images::ImageGalleryList;
pub use named_list::NamedListSelection;
pub use regions::{filter_regions, RegionSelection, ALL_REGIONS};
