pub mod batch;
pub mod error;
pub mod machine;
pub mod number;
pub mod prize;
pub mod ticket;
pub mod winning;

pub use batch::{return_rate, truncated_return_rate, TicketBatch, WinningStatistics};
pub use error::{Error, InvalidTicketReason, Result};
pub use machine::{create_batch, TicketMachine, DEFAULT_UNIT_PRICE, MAX_TICKETS};
pub use number::{LottoNumber, NumberPool, MAX_NUMBER, MIN_NUMBER};
pub use prize::{prize, Amount, PrizeTier};
pub use ticket::{Ticket, TICKET_SIZE};
pub use winning::WinningContext;
