//! Command-line interface implementation

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::camera::Camera;
use crate::grid::IndexGrid;
use crate::models::SceneDef;
use crate::output::{render_image, save_png, scale_image};
use crate::palette::ShadeLevel;
use crate::scene::Scene;
use crate::sprite::Entity;

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Seconds per physics step when previewing with --steps.
const STEP_DT: f32 = 1.0 / 60.0;

/// pxs - shade palette-indexed sprite scenes and render them to PNG
#[derive(Parser)]
#[command(name = "pxs")]
#[command(about = "pxs - shade palette-indexed sprite scenes and render them to PNG")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a scene file (or the built-in demo scene) to PNG
    Preview {
        /// Scene JSON file. Omit to render the built-in demo scene.
        scene: Option<PathBuf>,

        /// Output PNG path.
        /// Defaults to the scene file with a .png extension, or
        /// preview.png for the demo scene.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scale output by integer factor (1-16, default: 1)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=16))]
        scale: u8,

        /// Override every shader's level (a key 1-8 or a name like "dark two")
        #[arg(short, long)]
        level: Option<String>,

        /// Advance the scene this many physics steps before drawing
        #[arg(long, default_value = "0")]
        steps: u32,

        /// Draw hitbox outlines over every sprite
        #[arg(long)]
        debug: bool,
    },

    /// List the built-in shade levels and their remap tables
    Levels,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview {
            scene,
            output,
            scale,
            level,
            steps,
            debug,
        } => run_preview(scene.as_deref(), output, scale, level.as_deref(), steps, debug),
        Commands::Levels => run_levels(),
    }
}

/// The scene rendered when no input file is given: a checkerboard
/// backdrop with one rectangle shader and one diamond-mask shader.
fn demo_scene() -> (Scene, IndexGrid) {
    let mut target = IndexGrid::new(32, 24);
    for y in 0..24 {
        for x in 0..32 {
            let index = if (x / 4 + y / 4) % 2 == 0 { 3 } else { 5 };
            target.set(x, y, index);
        }
    }

    let mut scene = Scene::new(Camera::new(32, 24));

    let mut rect = Entity::shader_rect(12, 8, ShadeLevel::Dark2);
    rect.set_top_left(2, 2);
    scene.add(rect);

    let mut mask = IndexGrid::new(7, 7);
    for y in 0i32..7 {
        for x in 0i32..7 {
            if (x - 3).abs() + (y - 3).abs() <= 3 {
                mask.set(x, y, 1);
            }
        }
    }
    let mut diamond = Entity::shader_masked(mask, ShadeLevel::Light2);
    diamond.set_top_left(20, 12);
    scene.add(diamond);

    (scene, target)
}

fn load_scene(path: &Path) -> Result<(Scene, IndexGrid), ExitCode> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: Cannot open scene file '{}': {}", path.display(), e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };
    let def: SceneDef = match serde_json::from_reader(BufReader::new(file)) {
        Ok(def) => def,
        Err(e) => {
            eprintln!("Error: '{}' is not a valid scene file: {}", path.display(), e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    };
    match def.build() {
        Ok(built) => Ok(built),
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

/// Execute the preview command
fn run_preview(
    scene_path: Option<&Path>,
    output: Option<PathBuf>,
    scale: u8,
    level: Option<&str>,
    steps: u32,
    debug: bool,
) -> ExitCode {
    let (mut scene, mut target) = match scene_path {
        Some(path) => match load_scene(path) {
            Ok(built) => built,
            Err(code) => return code,
        },
        None => demo_scene(),
    };

    if let Some(name) = level {
        let level: ShadeLevel = match name.parse() {
            Ok(level) => level,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        };
        for handle in 0..scene.len() {
            if let Some(entity) = scene.entity_mut(handle) {
                entity.set_shade_level(level);
            }
        }
    }

    scene.debug = debug;
    for _ in 0..steps {
        scene.step(STEP_DT);
    }
    scene.draw(&mut target);

    let image = scale_image(render_image(&target), scale);

    let output_path = output.unwrap_or_else(|| match scene_path {
        Some(path) => path.with_extension("png"),
        None => PathBuf::from("preview.png"),
    });
    if let Err(e) = save_png(&image, &output_path) {
        eprintln!("Error: Failed to save '{}': {}", output_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved: {}", output_path.display());
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the levels command
fn run_levels() -> ExitCode {
    println!("key  name         table");
    for level in ShadeLevel::ALL {
        let entries: String = level
            .table()
            .entries()
            .iter()
            .map(|entry| format!("{:x}", entry))
            .collect();
        println!("{:<4} {:<12} {}", level.key(), level.name(), entries);
    }
    ExitCode::from(EXIT_SUCCESS)
}
