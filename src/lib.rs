//! pxshade - Library for shading palette-indexed sprite scenes
//!
//! This library provides functionality to:
//! - Remap 4-bit color indices through built-in shade tables
//! - Shade rectangular regions and mask-covered regions of a pixel buffer
//! - Compose sprites and shaders into scenes viewed through a camera
//! - Render scenes to PNG images

pub mod camera;
pub mod cli;
pub mod grid;
pub mod models;
pub mod output;
pub mod overlay;
pub mod palette;
pub mod scene;
pub mod shader;
pub mod sprite;
