//! Drawable entities and the shading behavior component.
//!
//! An [`Entity`] is a generic drawable: position, motion state, a flag
//! field, and an image. Shading is composition, not inheritance: an entity
//! optionally carries a [`Shading`] component, and the per-frame draw step
//! invokes the region shader instead of the default image blit when the
//! component is present.

use crate::camera::{Camera, Rect};
use crate::grid::IndexGrid;
use crate::overlay;
use crate::palette::{ShadeLevel, ShadeTable};
use crate::shader::{blit, fill_rect, shade_masked, ShadeScratch};

/// Sprite behavior flags, a bit-flag field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteFlags(u32);

impl SpriteFlags {
    /// Draw at world coordinates, ignoring the camera offset.
    pub const RELATIVE_TO_CAMERA: SpriteFlags = SpriteFlags(1 << 0);
    /// Render the position/velocity/acceleration readout under the sprite.
    pub const SHOW_PHYSICS: SpriteFlags = SpriteFlags(1 << 1);

    pub const fn empty() -> Self {
        SpriteFlags(0)
    }

    pub const fn contains(self, other: SpriteFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: SpriteFlags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: SpriteFlags) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for SpriteFlags {
    type Output = SpriteFlags;

    fn bitor(self, rhs: SpriteFlags) -> SpriteFlags {
        SpriteFlags(self.0 | rhs.0)
    }
}

/// How a shading entity covers the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadeMode {
    /// Shade every pixel of the entity's rectangular extent.
    Rectangle,
    /// Shade only pixels covered by a non-zero pixel of the entity's image.
    Masked,
}

/// The shading behavior component: a traversal mode plus a shade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shading {
    pub mode: ShadeMode,
    pub level: ShadeLevel,
}

impl Shading {
    /// The remap table for the component's current level.
    pub fn table(&self) -> &'static ShadeTable {
        self.level.table()
    }
}

/// A drawable entity with optional shading behavior.
///
/// Position is the sprite center; the image provides both the drawn
/// artwork and, for a masked shader, the coverage mask. Velocity and
/// acceleration are integrated by the scene and consumed by the debug
/// readout.
#[derive(Debug, Clone)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub ax: f32,
    pub ay: f32,
    pub flags: SpriteFlags,
    image: IndexGrid,
    shading: Option<Shading>,
}

impl Entity {
    fn with_image(image: IndexGrid, shading: Option<Shading>) -> Self {
        Entity {
            x: image.width() as f32 / 2.0,
            y: image.height() as f32 / 2.0,
            vx: 0.0,
            vy: 0.0,
            ax: 0.0,
            ay: 0.0,
            flags: SpriteFlags::empty(),
            image,
            shading,
        }
    }

    /// A plain sprite drawn with the default image blit.
    pub fn sprite(image: IndexGrid) -> Self {
        Self::with_image(image, None)
    }

    /// A rectangle-mode shader covering `width` x `height` pixels.
    ///
    /// The backing image is filled with index 3; rectangle mode never
    /// reads it, but switching the entity to masked mode makes the full
    /// extent the mask.
    pub fn shader_rect(width: usize, height: usize, level: ShadeLevel) -> Self {
        let image = IndexGrid::filled(width, height, 3);
        Self::with_image(image, Some(Shading { mode: ShadeMode::Rectangle, level }))
    }

    /// A mask-mode shader: every non-zero pixel of `image` shades the
    /// pixel underneath it.
    pub fn shader_masked(image: IndexGrid, level: ShadeLevel) -> Self {
        Self::with_image(image, Some(Shading { mode: ShadeMode::Masked, level }))
    }

    /// The entity's image (artwork, mask, or rectangular extent).
    pub fn image(&self) -> &IndexGrid {
        &self.image
    }

    /// The shading component, if any.
    pub fn shading(&self) -> Option<&Shading> {
        self.shading.as_ref()
    }

    /// Replace the image. On a masked shader this changes the mask shape
    /// without changing mode; on a rectangle shader it changes the extent.
    pub fn set_image(&mut self, image: IndexGrid) {
        self.image = image;
    }

    /// Swap the shade level at any time, keeping the mode.
    ///
    /// No-op on an entity without a shading component.
    pub fn set_shade_level(&mut self, level: ShadeLevel) {
        if let Some(shading) = self.shading.as_mut() {
            shading.level = level;
        }
    }

    /// Toggle between rectangle and masked traversal.
    ///
    /// No-op on an entity without a shading component.
    pub fn set_shade_mode(&mut self, mode: ShadeMode) {
        if let Some(shading) = self.shading.as_mut() {
            shading.mode = mode;
        }
    }

    /// Center the entity so its top-left corner lands at (left, top).
    pub fn set_top_left(&mut self, left: i32, top: i32) {
        self.x = left as f32 + self.image.width() as f32 / 2.0;
        self.y = top as f32 + self.image.height() as f32 / 2.0;
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Rect {
        let w = self.image.width() as i32;
        let h = self.image.height() as i32;
        Rect::new(
            (self.x - w as f32 / 2.0).floor() as i32,
            (self.y - h as f32 / 2.0).floor() as i32,
            w,
            h,
        )
    }

    /// Hitbox descriptor used by the debug outline.
    pub fn hitbox(&self) -> Rect {
        self.bounds()
    }

    /// Per-frame draw hook.
    ///
    /// Resolves screen placement, culls against the camera viewport,
    /// applies the shading component (or the default blit), then renders
    /// the debug overlays when requested.
    pub fn draw(
        &self,
        target: &mut IndexGrid,
        camera: &Camera,
        scratch: &mut ShadeScratch,
        debug: bool,
    ) {
        let bounds = self.bounds();
        let (ox, oy) = if self.flags.contains(SpriteFlags::RELATIVE_TO_CAMERA) {
            (0, 0)
        } else {
            (camera.offset_x, camera.offset_y)
        };
        let screen = Rect::new(bounds.left - ox, bounds.top - oy, bounds.width, bounds.height);
        if Camera::new(camera.width, camera.height).is_outside(&screen) {
            return;
        }
        let left = screen.left;
        let top = screen.top;

        match self.shading {
            Some(Shading { mode: ShadeMode::Rectangle, level }) => {
                fill_rect(
                    target,
                    left,
                    top,
                    self.image.width() as i32,
                    self.image.height() as i32,
                    level.table(),
                    scratch,
                );
            }
            Some(Shading { mode: ShadeMode::Masked, level }) => {
                shade_masked(target, left, top, &self.image, level.table(), scratch);
            }
            None => blit(target, left, top, &self.image, scratch),
        }

        if self.flags.contains(SpriteFlags::SHOW_PHYSICS) {
            overlay::draw_physics_readout(target, self, left, top);
        }
        if debug {
            let hitbox = self.hitbox();
            let outline =
                Rect::new(hitbox.left - ox, hitbox.top - oy, hitbox.width, hitbox.height);
            overlay::draw_outline(target, &outline, 1);
        }
    }
}
