use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use glam::{Mat4, Vec3};
use origins_camera::{FlyCamera, OrientationCamera, Projection, View, view_projection};
use origins_common::{Format, OriginsConfig};
use origins_input::{CameraController, InputScript, InputState};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "origins-cli", about = "Inspect and drive the origins camera without a window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (.yaml, .yml or .json); defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the effective configuration
    Config {
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: OutputFormat,
    },
    /// Print view, projection and view-projection matrices for a pose
    Matrix {
        #[arg(long, value_enum, default_value = "fly")]
        camera: CameraKind,
        #[arg(long, allow_hyphen_values = true)]
        x: Option<f32>,
        #[arg(long, allow_hyphen_values = true)]
        y: Option<f32>,
        #[arg(long, allow_hyphen_values = true)]
        z: Option<f32>,
        /// Degrees; fly camera only
        #[arg(long, allow_hyphen_values = true)]
        yaw: Option<f32>,
        /// Degrees; fly camera only
        #[arg(long, allow_hyphen_values = true)]
        pitch: Option<f32>,
    },
    /// Replay an input script through the camera controller
    Replay {
        /// Script file (.yaml, .yml or .json)
        script: PathBuf,
        #[arg(long, value_enum, default_value = "fly")]
        camera: CameraKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Yaml => Format::Yaml,
            OutputFormat::Json => Format::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CameraKind {
    Fly,
    Orientation,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => OriginsConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => OriginsConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("origins-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", origins_common::crate_info());
            println!("camera: {}", origins_camera::crate_info());
            println!("input: {}", origins_input::crate_info());
        }
        Commands::Config { format } => {
            print!("{}", config.render(format.into())?);
        }
        Commands::Matrix {
            camera,
            x,
            y,
            z,
            yaw,
            pitch,
        } => {
            let start = config.camera.position;
            let position = Vec3::new(
                x.unwrap_or(start.x),
                y.unwrap_or(start.y),
                z.unwrap_or(start.z),
            );
            match camera {
                CameraKind::Fly => {
                    let mut settings = config.camera;
                    settings.position = position;
                    if let Some(yaw) = yaw {
                        settings.yaw_degrees = yaw;
                    }
                    if let Some(pitch) = pitch {
                        settings.pitch_degrees = pitch;
                    }
                    let cam = FlyCamera::from_settings(&settings)
                        .with_fov_degrees(config.projection.fov_degrees);
                    let p = &config.projection;
                    let projection = cam.projection(config.viewport, p.near, p.far)?;
                    print_pose(&cam);
                    print_matrix("view", &cam.view_matrix());
                    print_matrix("projection", &projection.matrix());
                    print_matrix("view_projection", &view_projection(&cam, &projection));
                }
                CameraKind::Orientation => {
                    if yaw.is_some() || pitch.is_some() {
                        tracing::warn!("--yaw/--pitch are ignored for the orientation camera");
                    }
                    let mut cam = OrientationCamera::new(config.viewport, position);
                    let p = &config.projection;
                    cam.update_matrix(p.fov_degrees, p.near, p.far)?;
                    let projection = Projection::from_settings(p, config.viewport)?;
                    print_pose(&cam);
                    print_matrix("view", &cam.view_matrix());
                    print_matrix("projection", &projection.matrix());
                    print_matrix("view_projection", &cam.matrix());
                }
            }
        }
        Commands::Replay { script, camera } => {
            let script = InputScript::load(&script)
                .with_context(|| format!("loading script {}", script.display()))?;
            let controller = CameraController::new(config.bindings.clone());
            let mut input = InputState::new();
            let p = &config.projection;

            match camera {
                CameraKind::Fly => {
                    let mut cam = FlyCamera::from_settings(&config.camera)
                        .with_fov_degrees(p.fov_degrees);
                    let report = script.replay(&controller, &mut cam, &mut input);
                    let projection = cam.projection(config.viewport, p.near, p.far)?;
                    println!(
                        "Replay: frames={}, elapsed={:.3}s, quit={}",
                        report.frames, report.elapsed, report.quit
                    );
                    print_pose(&cam);
                    println!("fov: {:.2}", cam.fov_degrees());
                    print_matrix("view_projection", &view_projection(&cam, &projection));
                }
                CameraKind::Orientation => {
                    let mut cam = OrientationCamera::new(config.viewport, config.camera.position);
                    let report = script.replay(&controller, &mut cam, &mut input);
                    cam.update_matrix(p.fov_degrees, p.near, p.far)?;
                    println!(
                        "Replay: frames={}, elapsed={:.3}s, quit={}",
                        report.frames, report.elapsed, report.quit
                    );
                    print_pose(&cam);
                    println!("fov: {:.2}", p.fov_degrees);
                    print_matrix("view_projection", &cam.matrix());
                }
            }
        }
    }

    Ok(())
}

fn print_pose(view: &impl View) {
    let p = view.position();
    let f = view.forward();
    println!("position: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
    println!("forward: ({:.3}, {:.3}, {:.3})", f.x, f.y, f.z);
}

/// Row-major printout of a column-major matrix.
fn print_matrix(label: &str, m: &Mat4) {
    println!("{label}:");
    for r in 0..4 {
        let row = m.row(r);
        println!(
            "  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]",
            row.x, row.y, row.z, row.w
        );
    }
}
