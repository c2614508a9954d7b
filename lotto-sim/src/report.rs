use std::io::Write;

use lotto::{PrizeTier, WinningStatistics};
use strum::IntoEnumIterator;

use crate::iteration::{Outcome, Summary};

pub fn write_tickets<W: Write>(out: &mut W, outcome: &Outcome) -> anyhow::Result<()> {
    writeln!(out, "Purchased {} tickets.", outcome.batch.len())?;
    for ticket in outcome.batch.tickets() {
        writeln!(out, "{ticket}")?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_statistics<W: Write>(out: &mut W, outcome: &Outcome) -> anyhow::Result<()> {
    writeln!(
        out,
        "Winning numbers: {} + bonus {}",
        outcome.winning.ticket(),
        outcome.winning.bonus()
    )?;
    writeln!(out)?;
    writeln!(out, "Winning statistics")?;
    writeln!(out, "---")?;
    write_counts(out, &outcome.statistics)?;
    writeln!(
        out,
        "Total return rate: {:.2}",
        outcome.statistics.truncated_rate()?
    )?;
    Ok(())
}

fn write_counts<W: Write>(out: &mut W, statistics: &WinningStatistics) -> anyhow::Result<()> {
    for (tier, count) in statistics.winning_counts() {
        writeln!(out, "{tier} - {count} tickets")?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> anyhow::Result<()> {
    writeln!(out, "Summary of {} iterations", summary.iterations())?;
    writeln!(out, "---")?;
    for tier in PrizeTier::iter().filter(PrizeTier::is_winning) {
        writeln!(out, "{tier} - {} tickets", summary.count(tier))?;
    }
    writeln!(
        out,
        "Total prize: {} / spent: {}",
        lotto::prize::group_thousands(summary.total_prize()),
        lotto::prize::group_thousands(summary.purchase_amount())
    )?;
    writeln!(
        out,
        "Overall return rate: {:.2}",
        summary.truncated_overall_rate()?
    )?;
    Ok(())
}
