// std
use std::path::{Path, PathBuf};
// crates
use anyhow::ensure;
use chrono::Utc;
use clap::Parser;
use lotto::Amount;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;
// internal
use crate::iteration::{run_iteration, Summary, ITERATION_CSV_COLUMNS};
use crate::settings::{load_json_from_file, SimSettings};

mod iteration;
mod log;
mod report;
mod settings;

/// Buys lottery tickets with a fixed budget and measures how much comes back.
#[derive(Debug, Parser)]
#[command(name = "Lotto Return Rate Simulation")]
pub struct SimulationApp {
    /// Json file path, on `SimSettings` format. Flags given on the command line override it.
    #[clap(long, short)]
    input_settings: Option<PathBuf>,
    /// Money spent on tickets in each iteration
    #[clap(long, short)]
    amount: Option<Amount>,
    #[clap(long)]
    unit_price: Option<Amount>,
    /// Six comma-separated numbers, e.g. `1,2,3,4,5,6`. Drawn at random when omitted.
    #[clap(long, short, value_delimiter = ',')]
    winning_numbers: Option<Vec<u8>>,
    #[clap(long, short)]
    bonus_number: Option<u8>,
    #[clap(long, short)]
    seed: Option<u64>,
    #[clap(long, short = 'n')]
    iterations: Option<usize>,
    /// Directory to write per-iteration results into, as CSV
    #[clap(long, short)]
    outdir: Option<PathBuf>,
    #[clap(long, default_value = "plain")]
    log_format: log::LogFormat,
    #[clap(long, default_value = "stderr")]
    log_to: log::LogOutput,
}

impl SimulationApp {
    pub fn run(self) -> anyhow::Result<()> {
        let Self {
            input_settings,
            amount,
            unit_price,
            winning_numbers,
            bonus_number,
            seed,
            iterations,
            outdir,
            log_format: _,
            log_to: _,
        } = self;

        let file_settings: SimSettings = match input_settings {
            Some(path) => load_json_from_file(&path)?,
            None => SimSettings::default(),
        };
        let settings = file_settings
            .merge(SimSettings {
                amount,
                unit_price,
                winning_numbers,
                bonus_number,
                seed,
                iterations,
            })
            .resolve()?;
        tracing::info!("Settings: {:?}", settings);

        let mut writer = outdir.as_deref().map(create_csv_writer).transpose()?;

        let mut stdout = std::io::stdout().lock();
        let mut seed_rng = ChaCha12Rng::seed_from_u64(settings.seed);
        let mut summary = Summary::default();
        for i in 0..settings.iterations {
            let outcome = run_iteration(&settings, i, seed_rng.next_u64())?;

            if settings.iterations == 1 {
                report::write_tickets(&mut stdout, &outcome)?;
                report::write_statistics(&mut stdout, &outcome)?;
            }
            if let Some(writer) = writer.as_mut() {
                writer.write_record(outcome.as_csv_record()?)?;
                writer.flush()?;
            }
            tracing::debug!("Winning: {}", serde_json::to_string(&outcome.winning)?);
            summary.add(&outcome.statistics)?;
            tracing::info!(
                "Iteration:{} completed. tickets:{}, prize:{}",
                i,
                outcome.batch.len(),
                outcome.statistics.total_prize()
            );
        }

        if settings.iterations > 1 {
            report::write_summary(&mut stdout, &summary)?;
        }
        if let Some(mean) = summary.mean_rate() {
            tracing::info!("Session completed. Mean return rate: {}", mean);
        }
        Ok(())
    }
}

/// Creates `lotto_<timestamp>.csv` in `outdir` with only a header.
fn create_csv_writer(outdir: &Path) -> anyhow::Result<csv::Writer<std::fs::File>> {
    ensure!(
        outdir.is_dir(),
        "Output directory does not exist: {}",
        outdir.display()
    );
    let path = outdir.join(format!("lotto_{}.csv", Utc::now().format("%Y%m%dT%H%M%S%.3f")));
    create_csv_writer_at(&path)
}

/// Never overwrites an existing file.
fn create_csv_writer_at(path: &Path) -> anyhow::Result<csv::Writer<std::fs::File>> {
    ensure!(!path.exists(), "File already exists at path: {}", path.display());

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(ITERATION_CSV_COLUMNS)?;
    writer.flush()?;
    tracing::info!("Writing results to {}", path.display());
    Ok(writer)
}

fn main() -> anyhow::Result<()> {
    let app = SimulationApp::parse();
    let guard = log::config_tracing(app.log_format, &app.log_to)?;

    if let Err(e) = app.run() {
        tracing::error!("error: {}", e);
        drop(guard);
        std::process::exit(1);
    }
    Ok(())
}
