use std::fmt;

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

use crate::{
    error::{Error, InvalidTicketReason, Result},
    number::{LottoNumber, NumberPool},
};

pub const TICKET_SIZE: usize = 6;

/// Six distinct numbers, kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ticket {
    numbers: [LottoNumber; TICKET_SIZE],
}

impl Ticket {
    pub fn new(numbers: impl IntoIterator<Item = LottoNumber>) -> Result<Self> {
        let mut numbers: Vec<LottoNumber> = numbers.into_iter().collect();
        if numbers.len() != TICKET_SIZE {
            return Err(Error::InvalidTicket(InvalidTicketReason::WrongSize {
                expected: TICKET_SIZE,
                actual: numbers.len(),
            }));
        }
        numbers.sort_unstable();
        if let Some(dup) = numbers.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::InvalidTicket(InvalidTicketReason::Duplicate(
                dup[0].value(),
            )));
        }
        let mut sorted = [numbers[0]; TICKET_SIZE];
        sorted.copy_from_slice(&numbers);
        Ok(Self { numbers: sorted })
    }

    /// Builds a ticket from raw values, checking the range of each one.
    pub fn from_values(values: &[u8]) -> Result<Self> {
        let numbers = values
            .iter()
            .map(|&value| NumberPool::get(value))
            .collect::<Result<Vec<_>>>()?;
        Self::new(numbers)
    }

    /// Draws `TICKET_SIZE` numbers from the pool without replacement.
    /// Every 6-combination of the pool is equally likely.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (ticket, _) = Self::random_with_extra(rng, 0);
        ticket
    }

    /// Draws a ticket together with `extra` more distinct numbers that are not on it.
    pub(crate) fn random_with_extra<R: Rng + ?Sized>(
        rng: &mut R,
        extra: usize,
    ) -> (Self, Vec<LottoNumber>) {
        let mut drawn: Vec<LottoNumber> = NumberPool::all()
            .choose_multiple(rng, TICKET_SIZE + extra)
            .copied()
            .collect();
        let rest = drawn.split_off(TICKET_SIZE);

        let mut numbers = [drawn[0]; TICKET_SIZE];
        numbers.copy_from_slice(&drawn);
        numbers.sort_unstable();
        tracing::debug!("Drawn ticket: {:?}", numbers);
        (Self { numbers }, rest)
    }

    pub fn numbers(&self) -> &[LottoNumber] {
        &self.numbers
    }

    /// Number of values both tickets share, in `[0, TICKET_SIZE]`.
    pub fn match_count(&self, other: &Ticket) -> usize {
        // Both sides are sorted, so a single merge pass is enough.
        let (mut i, mut j, mut count) = (0, 0, 0);
        while i < TICKET_SIZE && j < TICKET_SIZE {
            match self.numbers[i].cmp(&other.numbers[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    count += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        count
    }

    pub fn contains_bonus(&self, bonus: LottoNumber) -> bool {
        self.numbers.binary_search(&bonus).is_ok()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers: Vec<String> = self.numbers.iter().map(|n| n.to_string()).collect();
        write!(f, "[{}]", numbers.join(", "))
    }
}
