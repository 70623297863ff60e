//! The atlas: public surface, virtual-texture table, and lazy reclamation.

use crate::error::AtlasError;
use crate::placement::{apply_cut, best_fit};
use crate::rectangle::Rect;
use crate::vtex::{TextureId, VirtualTexture};

/// Initial reservation for the hole list, mirroring the original
/// `ATLAS_MIN_RESERVED_HOLES` constant this allocator was distilled from.
const INITIAL_HOLE_CAPACITY: usize = 32;
/// Initial reservation for the virtual-texture table, mirroring the original
/// `ATLAS_MIN_RESERVED_VTEXES` constant.
const INITIAL_VTEX_CAPACITY: usize = 32;

/// An online best-fit allocator for a single fixed-size square texture page.
///
/// The atlas hands out [`TextureId`]s for virtual textures, places them into
/// free holes on the page with [`allocate_space`](Self::allocate_space), and
/// reclaims the space lazily: [`destroy_vtex`](Self::destroy_vtex) only marks
/// an id as invalidated, and the actual hole-list rebuild happens on the
/// next `allocate_space` call. See the crate documentation for the full
/// set of invariants this maintains.
pub struct TextureAtlas {
    holes: Vec<Rect>,
    vtexes: Vec<VirtualTexture>,
    last_id: u32,
    dim: u16,
    padding: u16,
    holes_dirty: bool,
    max_vtexes: u32,
}

impl TextureAtlas {
    /// Creates a new atlas of `dim x dim` pixels with the given per-texture
    /// padding, and no limit on the number of live virtual textures.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is zero.
    pub fn new(dim: u16, padding: u16) -> Self {
        Self::with_max_textures(dim, padding, u32::MAX)
    }

    /// Creates a new atlas that additionally rejects [`gen_texture`](Self::gen_texture)
    /// once `max_textures` virtual textures are live at the same time.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is zero.
    pub fn with_max_textures(dim: u16, padding: u16, max_textures: u32) -> Self {
        assert!(dim > 0, "atlas dimension must be non-zero");

        let mut holes = Vec::with_capacity(INITIAL_HOLE_CAPACITY);
        holes.push(Rect::new(0, 0, dim, dim));

        Self {
            holes,
            vtexes: Vec::with_capacity(INITIAL_VTEX_CAPACITY),
            last_id: 0,
            dim,
            padding,
            holes_dirty: false,
            max_vtexes: max_textures,
        }
    }

    /// Reserves a fresh virtual-texture slot with a zero-area rect and
    /// returns its id. The id is strictly greater than every id returned
    /// before it and is never reused.
    pub fn gen_texture(&mut self) -> Result<TextureId, AtlasError> {
        if self.vtexes.len() as u32 >= self.max_vtexes {
            log::warn!(
                "texture atlas rejected gen_texture: {} live textures already at the configured limit",
                self.vtexes.len()
            );
            return Err(AtlasError::CapacityExceeded);
        }

        self.last_id += 1;
        let id = TextureId::new(self.last_id);
        self.vtexes.push(VirtualTexture::new(id));

        Ok(id)
    }

    /// Marks `id` for reclamation. The slot still occupies its placed space
    /// until the next `allocate_space` call triggers a rebuild.
    pub fn destroy_vtex(&mut self, id: TextureId) -> Result<(), AtlasError> {
        let entry = self.vtexes.iter_mut().find(|vtex| vtex.id == id).ok_or(AtlasError::UnknownId)?;

        entry.invalidated = true;
        self.holes_dirty = true;

        Ok(())
    }

    /// Finds space for `id` and places a `width x height` rectangle (plus
    /// padding on every side) into it.
    ///
    /// If any texture was destroyed since the last call, this first rebuilds
    /// the hole list from scratch before attempting the placement.
    pub fn allocate_space(&mut self, id: TextureId, width: u16, height: u16) -> Result<(), AtlasError> {
        if self.holes_dirty {
            self.rebuild_holes();
        }

        let index = self.vtexes.iter().position(|vtex| vtex.id == id).ok_or(AtlasError::UnknownId)?;

        let padded_width = width.saturating_add(self.padding * 2);
        let padded_height = height.saturating_add(self.padding * 2);

        let hole_index = match best_fit(&self.holes, padded_width, padded_height) {
            Some(index) => index,
            None => {
                log::warn!(
                    "texture atlas found no hole for a {padded_width}x{padded_height} request (padding included)"
                );
                return Err(AtlasError::NoSpaceAvailable);
            }
        };

        let hole = self.holes[hole_index];
        let placed = Rect::new(hole.left, hole.up, hole.left + padded_width, hole.up + padded_height);

        self.vtexes[index].rect = placed;
        apply_cut(&mut self.holes, placed);

        Ok(())
    }

    /// Resets the hole list to the full page and replays every surviving
    /// virtual texture's placement, compacting invalidated entries out of
    /// the table along the way. Clears `holes_dirty` before the walk so a
    /// failed placement inside the walk does not force another rebuild.
    fn rebuild_holes(&mut self) {
        self.holes_dirty = false;

        self.holes.clear();
        self.holes.push(Rect::new(0, 0, self.dim, self.dim));

        let mut purged = 0u32;
        let mut replayed = 0u32;

        let mut i = 0;
        while i < self.vtexes.len() {
            if self.vtexes[i].invalidated {
                self.vtexes.swap_remove(i);
                purged += 1;
                // Re-examine the same index: it now holds the former last entry.
                continue;
            }

            if !self.vtexes[i].rect.is_empty() {
                let rect = self.vtexes[i].rect;
                apply_cut(&mut self.holes, rect);
                replayed += 1;
            }

            i += 1;
        }

        log::debug!(
            "texture atlas rebuilt hole list: purged {purged} invalidated textures, replayed {replayed} placements, {} live textures remain",
            self.vtexes.len()
        );
    }

    /// Returns the placed rectangle for `id` in raw pixel coordinates.
    ///
    /// If `include_padding` is `false`, the padding border is stripped,
    /// yielding the usable image region.
    pub fn get_xywh_coords(&self, id: TextureId, include_padding: bool) -> Result<(u16, u16, u16, u16), AtlasError> {
        let rect = self.lookup(id)?.rect;

        if include_padding {
            return Ok((rect.left, rect.up, rect.width(), rect.height()));
        }

        let padding = self.padding;
        Ok((
            rect.left + padding,
            rect.up + padding,
            rect.width().saturating_sub(2 * padding),
            rect.height().saturating_sub(2 * padding),
        ))
    }

    /// Returns the placed rectangle for `id` as normalized sampling
    /// coordinates `(u0, v0, u1, v1)`.
    pub fn get_uvst_coords(&self, id: TextureId, include_padding: bool) -> Result<(f32, f32, f32, f32), AtlasError> {
        let (x, y, width, height) = self.get_xywh_coords(id, include_padding)?;
        let dim = self.dim as f32;

        Ok((
            x as f32 / dim,
            y as f32 / dim,
            (x + width) as f32 / dim,
            (y + height) as f32 / dim,
        ))
    }

    /// Returns the atlas page's dimension in pixels.
    pub fn dimensions(&self) -> u16 {
        self.dim
    }

    /// Returns the per-texture padding configured at creation.
    pub fn padding(&self) -> u16 {
        self.padding
    }

    fn lookup(&self, id: TextureId) -> Result<&VirtualTexture, AtlasError> {
        self.vtexes.iter().find(|vtex| vtex.id == id).ok_or(AtlasError::UnknownId)
    }

    #[cfg(test)]
    pub(crate) fn holes(&self) -> &[Rect] {
        &self.holes
    }

    #[cfg(test)]
    pub(crate) fn live_vtex_rects(&self) -> Vec<Rect> {
        self.vtexes
            .iter()
            .filter(|vtex| !vtex.invalidated && !vtex.rect.is_empty())
            .map(|vtex| vtex.rect)
            .collect()
    }
}
