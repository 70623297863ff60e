//! The virtual-texture id and table entry.

use crate::rectangle::Rect;

/// A handle to a virtual texture slot reserved with
/// [`TextureAtlas::gen_texture`](crate::TextureAtlas::gen_texture).
///
/// Ids are dense and monotonically increasing, starting at 1; an id is never
/// reused even after the slot that held it is purged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureId(u32);

impl TextureId {
    pub(crate) fn new(id: u32) -> Self {
        debug_assert!(id > 0, "id 0 is reserved to mean \"none\"");
        Self(id)
    }

    /// Returns the raw id value.
    pub fn get(self) -> u32 {
        self.0
    }
}

/// A single entry in the virtual-texture table.
///
/// Entries are looked up by linear scan over `id`, not by table index: the
/// index an entry lives at is never meaningful to callers and can change
/// under them (entries are compacted with swap-remove).
#[derive(Debug, Copy, Clone)]
pub(crate) struct VirtualTexture {
    pub id: TextureId,
    pub rect: Rect,
    pub invalidated: bool,
}

impl VirtualTexture {
    pub fn new(id: TextureId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
            invalidated: false,
        }
    }
}
