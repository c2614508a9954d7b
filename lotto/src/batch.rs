use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;

use crate::{
    error::{Error, Result},
    prize::{prize, Amount, PrizeTier},
    ticket::Ticket,
    winning::WinningContext,
};

/// Tickets bought in a single purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketBatch {
    tickets: Vec<Ticket>,
}

impl TicketBatch {
    /// `count` is the number of tickets that were paid for and must match `tickets`.
    pub fn new(tickets: Vec<Ticket>, count: usize) -> Result<Self> {
        if tickets.len() != count {
            return Err(Error::InconsistentCount {
                expected: count,
                actual: tickets.len(),
            });
        }
        Self::from_tickets(tickets)
    }

    pub fn from_tickets(tickets: Vec<Ticket>) -> Result<Self> {
        if tickets.is_empty() {
            return Err(Error::EmptyBatch);
        }
        Ok(Self { tickets })
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn total_prize(&self, context: &WinningContext) -> Amount {
        self.tickets
            .iter()
            .map(|ticket| {
                prize(
                    ticket.match_count(context.ticket()),
                    ticket.contains_bonus(context.bonus()),
                )
            })
            .sum()
    }

    pub fn total_purchase_amount(&self, unit_price: Amount) -> Result<Amount> {
        (self.tickets.len() as Amount)
            .checked_mul(unit_price)
            .ok_or(Error::AmountOverflow {
                count: self.tickets.len(),
                unit_price,
            })
    }

    pub fn statistics(
        &self,
        context: &WinningContext,
        unit_price: Amount,
    ) -> Result<WinningStatistics> {
        let purchase_amount = self.total_purchase_amount(unit_price)?;
        let mut counts: FxHashMap<PrizeTier, usize> = FxHashMap::default();
        for ticket in self.tickets.iter() {
            *counts.entry(context.rank(ticket)).or_default() += 1;
        }
        Ok(WinningStatistics {
            counts,
            total_prize: self.total_prize(context),
            purchase_amount,
        })
    }
}

/// Ratio of winnings to spending. `1.0` means the purchase broke even.
pub fn return_rate(total_prize: Amount, total_purchase_amount: Amount) -> Result<f64> {
    if total_purchase_amount == 0 {
        return Err(Error::DivisionByZero);
    }
    Ok(total_prize as f64 / total_purchase_amount as f64)
}

/// Return rate cut down to two decimal places. The cut happens on the integer ratio,
/// so a rate of exactly `0.29` stays `0.29`.
pub fn truncated_return_rate(total_prize: Amount, total_purchase_amount: Amount) -> Result<f64> {
    if total_purchase_amount == 0 {
        return Err(Error::DivisionByZero);
    }
    let hundredths = total_prize as u128 * 100 / total_purchase_amount as u128;
    Ok(hundredths as f64 / 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct WinningStatistics {
    counts: FxHashMap<PrizeTier, usize>,
    total_prize: Amount,
    purchase_amount: Amount,
}

impl WinningStatistics {
    pub fn count(&self, tier: PrizeTier) -> usize {
        self.counts.get(&tier).copied().unwrap_or(0)
    }

    /// Winning tiers with their counts, from the lowest payout to the highest.
    pub fn winning_counts(&self) -> impl Iterator<Item = (PrizeTier, usize)> + '_ {
        PrizeTier::iter()
            .filter(PrizeTier::is_winning)
            .map(|tier| (tier, self.count(tier)))
    }

    pub fn total_prize(&self) -> Amount {
        self.total_prize
    }

    pub fn purchase_amount(&self) -> Amount {
        self.purchase_amount
    }

    pub fn return_rate(&self) -> Result<f64> {
        return_rate(self.total_prize, self.purchase_amount)
    }

    pub fn truncated_rate(&self) -> Result<f64> {
        truncated_return_rate(self.total_prize, self.purchase_amount)
    }
}
