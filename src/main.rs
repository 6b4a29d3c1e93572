use anyhow::Context;
use clap::{ArgAction, Parser};
use erdraw::{Config, Scene, export};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "erdraw")]
#[command(version, about = "Render Entity-Relationship Diagram shapes to PNG")]
struct Cli {
    /// Scene file listing the shapes to draw (.toml or .json)
    #[arg(value_name = "SCENE", required_unless_present = "init_config")]
    scene: Option<PathBuf>,

    /// Output PNG path (defaults to the scene path with a .png extension)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/erdraw/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "scene")]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    let Some(scene_path) = cli.scene else {
        return Err(anyhow::anyhow!("No scene file given"));
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            log::warn!("Failed to load config, using defaults: {:#}", err);
            Config::default()
        }),
    };

    let scene = Scene::load(&scene_path)?;
    if scene.shapes.is_empty() {
        log::warn!("Scene {} has no shapes", scene_path.display());
    }

    let output = cli
        .output
        .unwrap_or_else(|| scene_path.with_extension("png"));

    export::write_png(&scene, &config, &output)
        .with_context(|| format!("Failed to render {}", scene_path.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}
