use rand::Rng;

use crate::{
    batch::TicketBatch,
    error::{Error, Result},
    prize::Amount,
    ticket::Ticket,
};

pub const DEFAULT_UNIT_PRICE: Amount = 1_000;
/// Upper bound on tickets issued by a single purchase.
pub const MAX_TICKETS: usize = 1_000_000;

/// Turns money into randomly drawn tickets.
pub struct TicketMachine<R> {
    rng: R,
    unit_price: Amount,
}

impl<R> TicketMachine<R>
where
    R: Rng,
{
    pub fn new(rng: R, unit_price: Amount) -> Result<Self> {
        if unit_price == 0 {
            return Err(Error::InvalidUnitPrice);
        }
        Ok(Self { rng, unit_price })
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    pub fn issue(&mut self) -> Ticket {
        Ticket::random(&mut self.rng)
    }

    /// Buys as many tickets as `amount` covers. Change is not returned.
    pub fn purchase(&mut self, amount: Amount) -> Result<TicketBatch> {
        create_batch(amount, self.unit_price, &mut self.rng)
    }
}

pub fn create_batch<R: Rng + ?Sized>(
    amount: Amount,
    unit_price: Amount,
    rng: &mut R,
) -> Result<TicketBatch> {
    if unit_price == 0 {
        return Err(Error::InvalidUnitPrice);
    }
    if amount < unit_price {
        return Err(Error::InsufficientAmount { amount, unit_price });
    }
    let count = amount / unit_price;
    let count = usize::try_from(count)
        .ok()
        .filter(|&count| count <= MAX_TICKETS)
        .ok_or(Error::TooManyTickets {
            count,
            max: MAX_TICKETS,
        })?;
    tracing::debug!("Issuing {} tickets for {}", count, amount);

    let tickets = (0..count).map(|_| Ticket::random(&mut *rng)).collect();
    TicketBatch::new(tickets, count)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_purchase_counts() {
        let mut machine =
            TicketMachine::new(StdRng::seed_from_u64(0), DEFAULT_UNIT_PRICE).unwrap();
        let cases = vec![(10_000, 10), (20_000, 20), (5_000, 5), (1_000, 1), (3_000, 3)];
        for (amount, expected) in cases {
            let batch = machine.purchase(amount).unwrap();
            assert_eq!(batch.len(), expected);
            assert_eq!(
                batch.len() as Amount,
                amount / machine.unit_price()
            );
        }
    }

    #[test]
    fn test_purchase_floors_change() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(create_batch(3_999, 1_000, &mut rng).unwrap().len(), 3);
    }

    #[test]
    fn test_insufficient_amount() {
        let mut rng = StdRng::seed_from_u64(2);
        for amount in [0, 1, 999] {
            assert_eq!(
                create_batch(amount, 1_000, &mut rng),
                Err(Error::InsufficientAmount {
                    amount,
                    unit_price: 1_000
                })
            );
        }
    }

    #[test]
    fn test_too_many_tickets() {
        let mut rng = StdRng::seed_from_u64(5);
        let cases = vec![
            (u64::MAX, 1, u64::MAX),
            (MAX_TICKETS as Amount + 1, 1, MAX_TICKETS as Amount + 1),
            ((MAX_TICKETS as Amount + 1) * 1_000, 1_000, MAX_TICKETS as Amount + 1),
        ];
        for (amount, unit_price, count) in cases {
            assert_eq!(
                create_batch(amount, unit_price, &mut rng),
                Err(Error::TooManyTickets {
                    count,
                    max: MAX_TICKETS
                })
            );
        }
    }

    #[test]
    fn test_zero_unit_price() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            create_batch(1_000, 0, &mut rng),
            Err(Error::InvalidUnitPrice)
        );
        assert!(TicketMachine::new(StdRng::seed_from_u64(3), 0).is_err());
    }

    #[test]
    fn test_same_seed_same_batch() {
        let a = create_batch(5_000, 1_000, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = create_batch(5_000, 1_000, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_issue() {
        let mut machine = TicketMachine::new(StdRng::seed_from_u64(4), 1_000).unwrap();
        assert_eq!(machine.issue().numbers().len(), crate::ticket::TICKET_SIZE);
    }
}
