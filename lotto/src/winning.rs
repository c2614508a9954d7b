use rand::Rng;
use serde::Serialize;

use crate::{
    error::{Error, Result},
    number::{LottoNumber, NumberPool},
    prize::PrizeTier,
    ticket::Ticket,
};

/// The drawn combination: a winning ticket plus a bonus number outside of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningContext {
    ticket: Ticket,
    bonus: LottoNumber,
}

impl WinningContext {
    pub fn new(ticket: Ticket, bonus: LottoNumber) -> Result<Self> {
        if ticket.contains_bonus(bonus) {
            return Err(Error::BonusInWinningTicket(bonus.value()));
        }
        Ok(Self { ticket, bonus })
    }

    pub fn from_values(numbers: &[u8], bonus: u8) -> Result<Self> {
        Self::new(Ticket::from_values(numbers)?, NumberPool::get(bonus)?)
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (ticket, extra) = Ticket::random_with_extra(rng, 1);
        Self {
            ticket,
            bonus: extra[0],
        }
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn bonus(&self) -> LottoNumber {
        self.bonus
    }

    pub fn rank(&self, ticket: &Ticket) -> PrizeTier {
        PrizeTier::of(
            ticket.match_count(&self.ticket),
            ticket.contains_bonus(self.bonus),
        )
    }
}
