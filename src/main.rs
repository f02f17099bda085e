//! `arcam` trace replay tool.
//!
//! Feeds a recorded JSON Lines input trace through the orbit controller
//! and logs the resolved camera poses.
//!
//! ```text
//! RUST_LOG=debug arcam session.jsonl [options.toml]
//! ```

use std::path::Path;

use arcam::input::{parse_trace, replay};
use arcam::{ArcamError, OrbitController, Options};

fn run(trace_path: &Path, options_path: Option<&Path>) -> Result<(), ArcamError> {
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let content = std::fs::read_to_string(trace_path)?;
    let records = parse_trace(&content)?;
    log::info!(
        "Replaying {} events from {}",
        records.len(),
        trace_path.display()
    );

    let mut controller = OrbitController::new(&options)?;
    let poses = replay(&mut controller, &records);

    if let Some(pose) = poses.last() {
        log::info!(
            "{} frames, final eye ({:.3}, {:.3}, {:.3}) at distance {:.3}",
            poses.len(),
            pose.eye.x,
            pose.eye.y,
            pose.eye.z,
            pose.distance()
        );
    }
    log::info!("{}", controller.debug_snapshot());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let Some(trace) = args.next() else {
        log::error!("Usage: arcam <trace.jsonl> [options.toml]");
        std::process::exit(1);
    };
    let options = args.next();

    if let Err(e) = run(Path::new(&trace), options.as_deref().map(Path::new)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
