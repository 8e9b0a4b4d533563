//! Data models for scene files: the JSON shapes and their conversion
//! into a live [`Scene`] plus its render target.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::Camera;
use crate::grid::{GridError, IndexGrid};
use crate::palette::ShadeLevel;
use crate::scene::Scene;
use crate::sprite::Entity;

/// A shade level as written in a scene file: an integer key or a name.
///
/// Integer keys resolve like every other key lookup, falling back to
/// level 1 when unrecognized. Names must match a known level exactly;
/// a typo in a name is an error rather than a silent fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LevelKey {
    Number(i32),
    Name(String),
}

impl LevelKey {
    pub fn resolve(&self) -> Result<ShadeLevel, ModelError> {
        match self {
            LevelKey::Number(key) => Ok(ShadeLevel::from_key(*key)),
            LevelKey::Name(name) => name
                .parse()
                .map_err(|_| ModelError::UnknownLevel(name.clone())),
        }
    }
}

/// One sprite in a scene file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SpriteDef {
    /// A rectangle-mode shader.
    Rect {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        level: LevelKey,
    },
    /// A mask-mode shader; `grid` is the coverage mask.
    Mask {
        x: i32,
        y: i32,
        grid: Vec<String>,
        level: LevelKey,
    },
    /// A plain sprite; `grid` is the artwork.
    Sprite { x: i32, y: i32, grid: Vec<String> },
}

/// A complete scene file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneDef {
    pub width: u32,
    pub height: u32,
    /// Background color index for the render target.
    #[serde(default)]
    pub background: u8,
    /// Explicit background artwork; overrides `background` when present.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rows: Option<Vec<String>>,
    #[serde(default)]
    pub sprites: Vec<SpriteDef>,
}

/// Errors turning a scene file into a live scene.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown shade level name '{0}'")]
    UnknownLevel(String),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("background is {got_w}x{got_h}, scene is {want_w}x{want_h}")]
    BackgroundSize {
        got_w: usize,
        got_h: usize,
        want_w: usize,
        want_h: usize,
    },
}

impl SceneDef {
    /// Build the scene and its render target.
    ///
    /// Sprites keep file order, so later entries draw over earlier ones.
    /// Positions in the file are top-left corners.
    pub fn build(&self) -> Result<(Scene, IndexGrid), ModelError> {
        let target = match &self.rows {
            Some(rows) => {
                let grid = IndexGrid::from_rows(rows)?;
                if grid.width() != self.width as usize || grid.height() != self.height as usize {
                    return Err(ModelError::BackgroundSize {
                        got_w: grid.width(),
                        got_h: grid.height(),
                        want_w: self.width as usize,
                        want_h: self.height as usize,
                    });
                }
                grid
            }
            None => IndexGrid::filled(self.width as usize, self.height as usize, self.background),
        };

        let mut scene = Scene::new(Camera::new(self.width, self.height));
        for def in &self.sprites {
            let (mut entity, x, y) = match def {
                SpriteDef::Rect { x, y, width, height, level } => {
                    (Entity::shader_rect(*width, *height, level.resolve()?), *x, *y)
                }
                SpriteDef::Mask { x, y, grid, level } => {
                    let mask = IndexGrid::from_rows(grid)?;
                    (Entity::shader_masked(mask, level.resolve()?), *x, *y)
                }
                SpriteDef::Sprite { x, y, grid } => {
                    let image = IndexGrid::from_rows(grid)?;
                    (Entity::sprite(image), *x, *y)
                }
            };
            entity.set_top_left(x, y);
            scene.add(entity);
        }
        Ok((scene, target))
    }
}
