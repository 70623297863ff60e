//! An online best-fit allocator for a single fixed-size texture atlas page.
//!
//! A [`TextureAtlas`] hands out ids for virtual textures, places each one
//! into a free rectangle on the page, and reclaims space lazily: destroying
//! a texture only marks it invalidated, and the hole list is rebuilt from
//! the surviving placements the next time space is allocated.
#![warn(missing_docs)]

mod atlas;
mod error;
mod placement;
mod rectangle;
mod vtex;

pub use atlas::TextureAtlas;
pub use error::AtlasError;
pub use rectangle::Rect;
pub use vtex::TextureId;
