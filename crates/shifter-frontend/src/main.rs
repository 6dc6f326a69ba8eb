//! Shape Shifter session runner
//!
//! `shifter [script.ron]` replays a scripted session against the headless
//! scene and logs what it produced. Without a script the built-in demo runs.

use std::path::PathBuf;
use std::process::ExitCode;

use shifter_frontend::config::create_shared_config;
use shifter_frontend::session::demo_script;
use shifter_frontend::{Session, load_script};

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shifter_frontend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Shape Shifter");

    let shared_config = create_shared_config();
    let config = {
        let manager = shared_config.read();
        tracing::debug!("Using config {:?}", manager.config_file_path());
        manager.config().clone()
    };

    let steps = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match load_script(&path) {
            Ok(steps) => {
                tracing::info!("Loaded {} steps from {:?}", steps.len(), path);
                steps
            }
            Err(e) => {
                tracing::error!("Failed to load script {:?}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            tracing::info!("No script given, running the demo");
            demo_script()
        }
    };

    let mut session = Session::new(config);
    let summary = session.run(&steps);
    tracing::info!("Session finished: {}", summary);

    ExitCode::SUCCESS
}
