//! Path Drawer (Kommandozeile).
//!
//! Liest Bahn-Code aus einer Datei, normalisiert ihn und gibt den
//! Bewegungsplan im Log aus. Die grafische Oberfläche ist ein externer Host.

use anyhow::{bail, Context, Result};
use path_drawer::{AppState, EditorOptions, MotionArgs};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Path Drawer v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let options = match &args.options_path {
        Some(path) => EditorOptions::load_from_file(path),
        None => EditorOptions::load_from_file(&EditorOptions::config_path()),
    };

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Datei {} nicht lesbar", args.input.display()))?;

    let mut state = AppState::with_options(options);
    let model = path_drawer::parse_path_code(&content, &state.transform)
        .with_context(|| format!("Bahn-Code in {} ungültig", args.input.display()))?;
    state.path.replace_with(model);

    log::info!(
        "{} Segmente, {} Knoten geladen",
        state.path.segment_count(),
        state.path.node_count()
    );
    for (index, command) in state.path.motion_plan(&state.transform).iter().enumerate() {
        let target = match command.args {
            MotionArgs::VectorAngle { end, angle } => {
                format!("({:.2}, {:.2}) @ {:.3}", end.x, end.y, angle)
            }
            MotionArgs::Vector { end } => format!("({:.2}, {:.2})", end.x, end.y),
            MotionArgs::PoseAngle { pose, angle } => format!(
                "({:.2}, {:.2}, {:.3}) @ {:.3}",
                pose.position.x, pose.position.y, pose.heading, angle
            ),
        };
        log::info!("#{} {} → {}", index, command.kind, target);
    }

    println!("{}", state.get_text());
    Ok(())
}

/// Kommandozeilen-Argumente: `<datei> [--options <toml>]`
struct CliArgs {
    input: PathBuf,
    options_path: Option<PathBuf>,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut input = None;
        let mut options_path = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--options" => {
                    let Some(path) = args.next() else {
                        bail!("--options erwartet einen Pfad");
                    };
                    options_path = Some(PathBuf::from(path));
                }
                _ if input.is_none() => input = Some(PathBuf::from(arg)),
                other => bail!("Unerwartetes Argument: {}", other),
            }
        }
        let Some(input) = input else {
            bail!("Aufruf: path-drawer <datei> [--options <toml>]");
        };
        Ok(Self {
            input,
            options_path,
        })
    }
}
