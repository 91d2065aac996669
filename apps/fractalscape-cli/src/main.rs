mod config;
mod frame_loop;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fractalscape_kernel::World;
use fractalscape_render::{DebugTextRenderer, RenderView, Renderer};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::frame_loop::FrameLoop;

#[derive(Parser)]
#[command(name = "fractalscape-cli", about = "Headless driver for the fractalscape demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON demo configuration; defaults are used for missing fields
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Populate the demo scene and step it
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Wall-clock seconds per frame, before capping
        #[arg(short, long, default_value = "0.016666668")]
        dt: f32,
        /// Print a frame summary every N frames
        #[arg(short, long, default_value = "30")]
        every: u64,
    },
    /// List the standalone exhibits with their mesh sizes
    Bestiary,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("fractalscape-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("geometry: {}", fractalscape_geometry::crate_info());
            println!("render: {}", fractalscape_render::crate_info());
            println!("scene: {}", fractalscape_scene::crate_info());
            println!("max frame dt: {:.4}s", config.max_frame_dt);
        }
        Commands::Run { frames, dt, every } => {
            let mut world = World::new();
            world.init();
            let ids = fractalscape_scene::populate(&mut world, &config.params())?;
            tracing::info!(entities = ids.len(), frames, dt, "scene populated");

            let mut frame_loop = FrameLoop::new(world, config.max_frame_dt)?;
            let renderer = DebugTextRenderer::new();
            let every = every.max(1);
            for n in 1..=frames {
                frame_loop.tick(dt)?;
                if n % every == 0 || n == frames {
                    let world = frame_loop.world();
                    print!("{}", renderer.render(world, &RenderView::from_world(world)));
                }
            }
            println!(
                "Done: wall={:.3}s world={:.3}s",
                frame_loop.wall_time(),
                frame_loop.world().time()
            );
        }
        Commands::Bestiary => {
            for exhibit in fractalscape_scene::bestiary()? {
                println!(
                    "{:<18} vertices={:<8} faces={}",
                    exhibit.name,
                    exhibit.shape.vertex_count(),
                    exhibit.shape.face_count()
                );
            }
        }
    }

    Ok(())
}
