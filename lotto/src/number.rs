use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const POOL_SIZE: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

/// A single lottery number in `[MIN_NUMBER, MAX_NUMBER]`.
///
/// Values can only be obtained through [`NumberPool`], so holding a `LottoNumber` means
/// the range check already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LottoNumber(u8);

impl LottoNumber {
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LottoNumber {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        NumberPool::get(value)
    }
}

impl From<LottoNumber> for u8 {
    fn from(number: LottoNumber) -> Self {
        number.0
    }
}

impl fmt::Display for LottoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Built at compile time, never modified.
static POOL: [LottoNumber; POOL_SIZE] = build_pool();

const fn build_pool() -> [LottoNumber; POOL_SIZE] {
    let mut pool = [LottoNumber(MIN_NUMBER); POOL_SIZE];
    let mut i = 0;
    while i < POOL_SIZE {
        pool[i] = LottoNumber(MIN_NUMBER + i as u8);
        i += 1;
    }
    pool
}

/// The universe of valid numbers, indexed by value.
pub struct NumberPool;

impl NumberPool {
    pub fn get(value: u8) -> Result<LottoNumber> {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            return Err(Error::OutOfRange(value));
        }
        Ok(POOL[(value - MIN_NUMBER) as usize])
    }

    /// All numbers of the pool in ascending order.
    pub fn all() -> &'static [LottoNumber] {
        &POOL
    }
}
