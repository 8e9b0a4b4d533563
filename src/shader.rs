//! Region shading: in-place palette remapping of framebuffer regions.
//!
//! Two traversal modes exist. [`fill_rect`] remaps every in-bounds pixel
//! of a rectangle unconditionally; [`shade_masked`] remaps only the pixels
//! covered by a non-transparent mask pixel. Both clip silently against the
//! target bounds and never fail. [`blit`] is the companion default draw
//! path for unshaded sprite images.
//!
//! All three operate at column granularity: one full column of the target
//! (and mask) is read into reusable scratch buffers, mutated, and written
//! back in one batched call. Per-pixel random access to the buffers is
//! deliberately avoided; the buffer accessor is optimized for column
//! batches.

use crate::grid::{ColumnBuffer, IndexGrid};
use crate::palette::ShadeTable;

/// Reusable column buffers for the region shader.
///
/// Owned by the rendering subsystem and passed into every call rather than
/// living in process-wide state, so tests and parallel hosts each get their
/// own. Buffers grow lazily to the tallest target/mask seen and never
/// shrink. Each call fully overwrites the portion it reads, so reuse
/// across sprites and frames cannot leak stale data.
#[derive(Debug, Default)]
pub struct ShadeScratch {
    target_col: Vec<u8>,
    mask_col: Vec<u8>,
}

impl ShadeScratch {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_target(&mut self, height: usize) {
        if self.target_col.len() < height {
            self.target_col.resize(height, 0);
        }
    }

    fn ensure_mask(&mut self, height: usize) {
        if self.mask_col.len() < height {
            self.mask_col.resize(height, 0);
        }
    }

    /// Current capacity of the target column buffer.
    pub fn target_capacity(&self) -> usize {
        self.target_col.len()
    }
}

/// Remap every pixel of the rectangle `[x, x+width) x [y, y+height)`,
/// intersected with the target bounds, through `table`.
///
/// Paints unconditionally: every in-bounds pixel of the rectangle is
/// rewritten regardless of its current value, including index 0. Pixels
/// outside the target are silently skipped; a zero or negative extent is a
/// no-op. Never fails.
pub fn fill_rect<B: ColumnBuffer + ?Sized>(
    target: &mut B,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    table: &ShadeTable,
    scratch: &mut ShadeScratch,
) {
    if width <= 0 || height <= 0 {
        return;
    }
    let tw = target.width() as i32;
    let th = target.height() as i32;
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(width).min(tw);
    let y1 = y.saturating_add(height).min(th);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    scratch.ensure_target(target.height());
    for tx in x0..x1 {
        target.read_column(tx as usize, &mut scratch.target_col);
        for cell in &mut scratch.target_col[y0 as usize..y1 as usize] {
            *cell = table.apply(*cell);
        }
        target.write_column(tx as usize, &scratch.target_col);
    }
}

/// Remap the target pixels covered by `mask`, placed at (x, y), through
/// `table`.
///
/// A target pixel is rewritten iff its mask pixel is non-zero and the
/// target coordinates are in bounds; zero mask pixels leave the target
/// untouched. Columns and rows increase monotonically, so the scan stops
/// once it passes the right or bottom edge, while positions left of or
/// above the target are skipped individually. Never fails; an empty or
/// fully-clipped mask performs zero writes.
pub fn shade_masked<B: ColumnBuffer + ?Sized>(
    target: &mut B,
    x: i32,
    y: i32,
    mask: &IndexGrid,
    table: &ShadeTable,
    scratch: &mut ShadeScratch,
) {
    let tw = target.width() as i32;
    let th = target.height() as i32;
    scratch.ensure_target(target.height());
    scratch.ensure_mask(mask.height());

    let mut tx = x;
    for mx in 0..mask.width() {
        if tx >= tw {
            break;
        }
        if tx >= 0 {
            mask.read_column(mx, &mut scratch.mask_col);
            target.read_column(tx as usize, &mut scratch.target_col);

            let mut ty = y;
            for my in 0..mask.height() {
                if ty >= th {
                    break;
                }
                if ty >= 0 && scratch.mask_col[my] != 0 {
                    let cell = &mut scratch.target_col[ty as usize];
                    *cell = table.apply(*cell);
                }
                ty += 1;
            }

            target.write_column(tx as usize, &scratch.target_col);
        }
        tx += 1;
    }
}

/// Copy the non-zero pixels of `image` onto the target at (x, y).
///
/// Index 0 is transparent and leaves the target untouched. Same clipping
/// and column-batching discipline as [`shade_masked`].
pub fn blit<B: ColumnBuffer + ?Sized>(
    target: &mut B,
    x: i32,
    y: i32,
    image: &IndexGrid,
    scratch: &mut ShadeScratch,
) {
    let tw = target.width() as i32;
    let th = target.height() as i32;
    scratch.ensure_target(target.height());
    scratch.ensure_mask(image.height());

    let mut tx = x;
    for sx in 0..image.width() {
        if tx >= tw {
            break;
        }
        if tx >= 0 {
            image.read_column(sx, &mut scratch.mask_col);
            target.read_column(tx as usize, &mut scratch.target_col);

            let mut ty = y;
            for sy in 0..image.height() {
                if ty >= th {
                    break;
                }
                if ty >= 0 && scratch.mask_col[sy] != 0 {
                    scratch.target_col[ty as usize] = scratch.mask_col[sy];
                }
                ty += 1;
            }

            target.write_column(tx as usize, &scratch.target_col);
        }
        tx += 1;
    }
}
