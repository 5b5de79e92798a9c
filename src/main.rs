use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use gesture_estimator::{
    EstimatorConfig, GestureEstimator, GestureLibrary,
    driver::{self, FrameResult, JsonLinesSource},
};

#[derive(Parser, Debug)]
#[command(version, about = "Recognize static hand gestures from landmark frames")]
struct Cli {
    /// JSON-lines landmark frames; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Estimator config (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Extra gesture definitions (TOML).
    #[arg(long)]
    gestures: Option<PathBuf>,
    /// Use only the gestures from --gestures.
    #[arg(long, requires = "gestures")]
    no_builtin: bool,
    /// Minimum raw score (0-5) a gesture needs to be reported.
    #[arg(long)]
    min_score: Option<f32>,
    /// Sampling interval in milliseconds.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,
    /// Print the registered gestures and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EstimatorConfig::load(path)?,
        None => EstimatorConfig::default(),
    };
    if let Some(min_score) = cli.min_score {
        config.min_score = min_score;
    }
    config.validate()?;

    let library = build_library(&cli)?;
    if cli.list {
        for name in library.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let estimator = Arc::new(GestureEstimator::new(library, config));
    let reader: Box<dyn BufRead + Send> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let (frame_tx, frame_rx) = bounded(1);
    let (result_tx, result_rx) = bounded(8);

    let worker = driver::start_estimator(estimator, frame_rx, result_tx);
    let sampler = driver::start_sampler(
        JsonLinesSource::new(reader),
        Duration::from_millis(cli.interval_ms),
        frame_tx,
    );

    for result in result_rx.iter() {
        print_result(&result);
    }

    sampler.join();
    if worker.join().is_err() {
        anyhow::bail!("estimator worker panicked");
    }
    Ok(())
}

fn build_library(cli: &Cli) -> Result<GestureLibrary> {
    let mut builder = GestureLibrary::builder();
    if !cli.no_builtin {
        builder = builder.extend(GestureLibrary::builtin())?;
    }
    if let Some(path) = &cli.gestures {
        builder = builder.extend(GestureLibrary::load(path)?)?;
    }
    Ok(builder.build())
}

fn print_result(result: &FrameResult) {
    if result.hands.is_empty() {
        println!("frame {} -> no hand detected", result.sequence);
        return;
    }

    for (idx, hand) in result.hands.iter().enumerate() {
        match hand {
            Ok(estimation) => {
                println!(
                    "frame {} hand {idx} -> {}",
                    result.sequence,
                    estimation.display_text()
                );
                let fingers = estimation
                    .poses
                    .iter()
                    .map(|pose| pose.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                log::debug!("frame {} hand {idx} fingers: {fingers}", result.sequence);
            }
            Err(err) => println!("frame {} hand {idx} -> skipped: {err}", result.sequence),
        }
    }
}
