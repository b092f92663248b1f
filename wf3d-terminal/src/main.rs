/// WF3D Terminal Demo - Wireframe viewer
///
/// Shows an OBJ mesh (or a cube) with world and object axes.
/// Controls:
///   - Arrow Keys: Turn the camera
///   - W/S, A/D, Q/E: Move forward/back, left/right, up/down
///   - ESC: Quit
use anyhow::{ensure, Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wf3d_core::{obj, RenderConfig};
use wf3d_terminal::{demo_cube, TerminalApp};

#[derive(Parser)]
#[command(name = "wf3d-terminal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Software wireframe renderer for the terminal", long_about = None)]
struct Cli {
    /// OBJ mesh to display; a cube is shown when omitted
    mesh: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewport width in cells (defaults to the terminal width)
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in cells (defaults to the terminal height)
    #[arg(long)]
    height: Option<u32>,

    /// Camera start position as x,y,z
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    camera: Option<Vec<f32>>,

    /// Write logs to this file (RUST_LOG filters, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then command-line overrides
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(camera) = &self.camera {
            ensure!(camera.len() == 3, "--camera takes exactly three values, got {}", camera.len());
            config.camera_position = [camera[0], camera[1], camera[2]];
        }
        Ok(config)
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    // The terminal belongs to the renderer, so logs only ever go to a file.
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = cli.render_config()?;
    let mesh = match &cli.mesh {
        Some(path) => obj::load_obj(path)
            .with_context(|| format!("Failed to load mesh {}", path.display()))?,
        None => demo_cube(),
    };
    info!(?config, "starting");

    let mut app = TerminalApp::new(&config, mesh)?;
    app.run()?;

    println!("Thank you for using WF3D Terminal Renderer!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = Cli::parse_from(["wf3d-terminal", "--width", "100", "--camera", "0.5,1.2,-6"]);
        let config = cli.render_config().unwrap();
        assert_eq!(config.width, 100);
        assert_eq!(config.height, 0);
        assert_eq!(config.camera_position, [0.5, 1.2, -6.0]);
        assert!(cli.mesh.is_none());
    }

    #[test]
    fn test_cli_camera_needs_three_values() {
        let cli = Cli::parse_from(["wf3d-terminal", "--camera", "1,2"]);
        assert!(cli.render_config().is_err());

        let cli = Cli::parse_from(["wf3d-terminal", "--camera", "-5,6,-55"]);
        assert_eq!(cli.render_config().unwrap().camera_position, [-5.0, 6.0, -55.0]);
    }

    #[test]
    fn test_cli_mesh_path() {
        let cli = Cli::parse_from(["wf3d-terminal", "models/tank.obj", "--log-file", "wf3d.log"]);
        assert_eq!(cli.mesh, Some(PathBuf::from("models/tank.obj")));
        assert_eq!(cli.log_file, Some(PathBuf::from("wf3d.log")));
    }
}
