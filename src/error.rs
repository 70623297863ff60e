//! Error types returned by the atlas's public operations.

use std::fmt;

/// Failure conditions for [`TextureAtlas`](crate::TextureAtlas) operations.
///
/// Every variant is local and recoverable: an operation that returns an
/// `AtlasError` never leaves the atlas in a partially-mutated state, and the
/// atlas remains fully usable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtlasError {
    /// The given id does not name a live virtual texture.
    UnknownId,
    /// No hole was large enough to fit the requested (padded) size.
    NoSpaceAvailable,
    /// The atlas already holds as many virtual textures as it was
    /// configured to allow.
    CapacityExceeded,
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::UnknownId => write!(f, "no virtual texture exists for the given id"),
            AtlasError::NoSpaceAvailable => write!(f, "no hole large enough to fit the requested size"),
            AtlasError::CapacityExceeded => write!(f, "the atlas has reached its maximum number of live textures"),
        }
    }
}

impl std::error::Error for AtlasError {}
