use lotto::{Amount, PrizeTier, TicketBatch, TicketMachine, WinningContext, WinningStatistics};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;

use crate::settings::RunSettings;

pub const ITERATION_CSV_COLUMNS: &[&str] = &[
    "iteration",
    "seed",
    "num_tickets",
    "fifth",
    "fourth",
    "third",
    "second",
    "first",
    "total_prize",
    "purchase_amount",
    "return_rate",
];

pub struct Outcome {
    pub iteration: usize,
    pub seed: u64,
    pub batch: TicketBatch,
    pub winning: WinningContext,
    pub statistics: WinningStatistics,
}

/// One purchase evaluated against one draw. The same seed always yields the same outcome.
pub fn run_iteration(settings: &RunSettings, iteration: usize, seed: u64) -> lotto::Result<Outcome> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let batch = TicketMachine::new(&mut rng, settings.unit_price)?.purchase(settings.amount)?;
    let winning = match &settings.winning {
        Some(winning) => winning.clone(),
        None => WinningContext::random(&mut rng),
    };
    let statistics = batch.statistics(&winning, settings.unit_price)?;

    Ok(Outcome {
        iteration,
        seed,
        batch,
        winning,
        statistics,
    })
}

impl Outcome {
    pub fn as_csv_record(&self) -> lotto::Result<Vec<String>> {
        let mut record = vec![
            self.iteration.to_string(),
            self.seed.to_string(),
            self.batch.len().to_string(),
        ];
        record.extend(
            self.statistics
                .winning_counts()
                .map(|(_, count)| count.to_string()),
        );
        record.extend([
            self.statistics.total_prize().to_string(),
            self.statistics.purchase_amount().to_string(),
            self.statistics.return_rate()?.to_string(),
        ]);
        Ok(record)
    }
}

/// Totals over all iterations of a run.
#[derive(Debug, Default)]
pub struct Summary {
    iterations: usize,
    counts: FxHashMap<PrizeTier, usize>,
    total_prize: Amount,
    purchase_amount: Amount,
    rate_sum: f64,
}

impl Summary {
    pub fn add(&mut self, statistics: &WinningStatistics) -> lotto::Result<()> {
        let rate = statistics.return_rate()?;
        for tier in PrizeTier::iter() {
            *self.counts.entry(tier).or_default() += statistics.count(tier);
        }
        self.iterations += 1;
        self.total_prize += statistics.total_prize();
        self.purchase_amount += statistics.purchase_amount();
        self.rate_sum += rate;
        Ok(())
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn count(&self, tier: PrizeTier) -> usize {
        self.counts.get(&tier).copied().unwrap_or(0)
    }

    pub fn total_prize(&self) -> Amount {
        self.total_prize
    }

    pub fn purchase_amount(&self) -> Amount {
        self.purchase_amount
    }

    /// Total winnings over total spending across every iteration.
    pub fn overall_rate(&self) -> lotto::Result<f64> {
        lotto::return_rate(self.total_prize, self.purchase_amount)
    }

    pub fn truncated_overall_rate(&self) -> lotto::Result<f64> {
        lotto::truncated_return_rate(self.total_prize, self.purchase_amount)
    }

    pub fn mean_rate(&self) -> Option<f64> {
        (self.iterations > 0).then(|| self.rate_sum / self.iterations as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(winning: Option<WinningContext>) -> RunSettings {
        RunSettings {
            amount: 5_500,
            unit_price: 1_000,
            winning,
            seed: 0,
            iterations: 1,
        }
    }

    #[test]
    fn test_run_iteration() {
        let winning = WinningContext::from_values(&[1, 2, 3, 4, 5, 6], 7).unwrap();
        let outcome = run_iteration(&settings(Some(winning.clone())), 0, 42).unwrap();

        assert_eq!(outcome.batch.len(), 5);
        assert_eq!(outcome.winning, winning);
        assert_eq!(outcome.statistics.purchase_amount(), 5_000);
        assert_eq!(
            outcome.statistics.total_prize(),
            outcome.batch.total_prize(&winning)
        );
    }

    #[test]
    fn test_run_iteration_is_reproducible() {
        let a = run_iteration(&settings(None), 0, 7).unwrap();
        let b = run_iteration(&settings(None), 0, 7).unwrap();
        assert_eq!(a.batch, b.batch);
        assert_eq!(a.winning, b.winning);
    }

    #[test]
    fn test_run_iteration_insufficient_amount() {
        let mut settings = settings(None);
        settings.amount = 999;
        assert!(matches!(
            run_iteration(&settings, 0, 0),
            Err(lotto::Error::InsufficientAmount { .. })
        ));
    }

    #[test]
    fn test_csv_record_layout() {
        let outcome = run_iteration(&settings(None), 3, 11).unwrap();
        let record = outcome.as_csv_record().unwrap();

        assert_eq!(record.len(), ITERATION_CSV_COLUMNS.len());
        assert_eq!(record[0], "3");
        assert_eq!(record[1], "11");
        assert_eq!(record[2], "5");
        assert_eq!(record[9], "5000");
    }

    #[test]
    fn test_summary() {
        let mut summary = Summary::default();
        assert_eq!(summary.mean_rate(), None);

        for seed in 0..4 {
            let outcome = run_iteration(&settings(None), 0, seed).unwrap();
            summary.add(&outcome.statistics).unwrap();
        }
        assert_eq!(summary.iterations(), 4);
        assert_eq!(summary.purchase_amount(), 20_000);

        let tickets: usize = PrizeTier::iter().map(|tier| summary.count(tier)).sum();
        assert_eq!(tickets, 20);
        assert!(summary.mean_rate().is_some());
        assert_eq!(
            summary.overall_rate().unwrap(),
            summary.total_prize() as f64 / 20_000.0
        );
        assert_eq!(
            summary.truncated_overall_rate().unwrap(),
            (summary.total_prize() as u128 * 100 / 20_000) as f64 / 100.0
        );
    }
}
