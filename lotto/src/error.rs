use std::fmt;

use crate::number::{MAX_NUMBER, MIN_NUMBER};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("number {0} is out of range [{min}, {max}]", min = MIN_NUMBER, max = MAX_NUMBER)]
    OutOfRange(u8),
    #[error("invalid ticket: {0}")]
    InvalidTicket(InvalidTicketReason),
    #[error("bonus number {0} is already part of the winning ticket")]
    BonusInWinningTicket(u8),
    #[error("purchase amount {amount} is below the unit price {unit_price}")]
    InsufficientAmount { amount: u64, unit_price: u64 },
    #[error("{count} tickets exceed the limit of {max} per purchase")]
    TooManyTickets { count: u64, max: usize },
    #[error("amount overflows: {count} tickets at {unit_price} each")]
    AmountOverflow { count: usize, unit_price: u64 },
    #[error("unit price must be positive")]
    InvalidUnitPrice,
    #[error("batch holds {actual} tickets, but {expected} were purchased")]
    InconsistentCount { expected: usize, actual: usize },
    #[error("a batch needs at least one ticket")]
    EmptyBatch,
    #[error("return rate is undefined for a zero purchase amount")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTicketReason {
    WrongSize { expected: usize, actual: usize },
    Duplicate(u8),
}

impl fmt::Display for InvalidTicketReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongSize { expected, actual } => {
                write!(f, "expected {expected} numbers, got {actual}")
            }
            Self::Duplicate(number) => write!(f, "number {number} appears more than once"),
        }
    }
}
