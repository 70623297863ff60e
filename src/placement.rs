//! Best-fit search, hole splitting and dominance pruning.
//!
//! These three free functions are the placement engine described in the
//! allocator's design: [`best_fit`] chooses which hole to place into,
//! [`apply_cut`] carves that placement out of the hole list and restores the
//! antichain invariant (no hole strictly contained in another). `apply_cut`
//! is called once per placed rectangle, whether that placement comes from a
//! live [`allocate_space`](crate::TextureAtlas::allocate_space) call or from
//! replaying a surviving virtual texture during a lazy rebuild.

use crate::rectangle::Rect;

/// Scans every hole and returns the index of the smallest-area hole that can
/// fit a `width x height` rectangle, breaking ties by first encountered.
pub(crate) fn best_fit(holes: &[Rect], width: u16, height: u16) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;

    for (index, hole) in holes.iter().enumerate() {
        if hole.width() < width || hole.height() < height {
            continue;
        }

        let area = hole.area();
        match best {
            Some((_, best_area)) if area >= best_area => {}
            _ => best = Some((index, area)),
        }
    }

    best.map(|(index, _)| index)
}

/// Splits every hole that overlaps `cut` into up to four candidate holes
/// (one per side), then prunes holes that ended up strictly contained in
/// another hole. This is the single unit of hole-list maintenance performed
/// for every placed rectangle, live or replayed.
pub(crate) fn apply_cut(holes: &mut Vec<Rect>, cut: Rect) {
    split_holes(holes, cut);
    prune_dominated(holes);
}

fn split_holes(holes: &mut Vec<Rect>, cut: Rect) {
    let mut i = 0;

    while i < holes.len() {
        let hole = holes[i];

        if !hole.overlaps(&cut) {
            i += 1;
            continue;
        }

        let top = Rect::new(hole.left, hole.up, hole.right, cut.up);
        let bottom = Rect::new(hole.left, cut.down, hole.right, hole.down);
        let left = Rect::new(hole.left, hole.up, cut.left, hole.down);
        let right = Rect::new(cut.right, hole.up, hole.right, hole.down);

        holes.swap_remove(i);

        for candidate in [top, bottom, left, right] {
            if !candidate.is_empty() {
                holes.push(candidate);
            }
        }

        // Do not advance `i`: whatever now occupies this slot (the former
        // last hole, swapped in by `swap_remove`) may itself overlap `cut`
        // and must be re-examined.
    }
}

fn prune_dominated(holes: &mut Vec<Rect>) {
    let mut j = 0;

    while j < holes.len() {
        let mut k = j + 1;

        while k < holes.len() {
            if holes[j].contains(&holes[k]) {
                holes.swap_remove(k);
                // Re-examine the same `k`: it now holds the former last hole.
            } else if holes[k].contains(&holes[j]) {
                holes.swap_remove(j);
                k = j + 1;
            } else {
                k += 1;
            }
        }

        j += 1;
    }
}
