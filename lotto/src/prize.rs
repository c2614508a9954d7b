use std::fmt;

use strum_macros::EnumIter;

/// Prize amounts are in currency units.
pub type Amount = u64;

/// Variants are declared from the lowest to the highest payout, so `PrizeTier::iter()`
/// walks the table in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum PrizeTier {
    Miss,
    Fifth,
    Fourth,
    Third,
    Second,
    First,
}

impl PrizeTier {
    pub fn of(match_count: usize, bonus_matched: bool) -> Self {
        match (match_count, bonus_matched) {
            // Six matches leave no room for the bonus, but the flag is tolerated.
            (6, _) => PrizeTier::First,
            (5, true) => PrizeTier::Second,
            (5, false) => PrizeTier::Third,
            (4, _) => PrizeTier::Fourth,
            (3, _) => PrizeTier::Fifth,
            _ => PrizeTier::Miss,
        }
    }

    pub const fn amount(&self) -> Amount {
        match self {
            PrizeTier::Miss => 0,
            PrizeTier::Fifth => 5_000,
            PrizeTier::Fourth => 50_000,
            PrizeTier::Third => 1_500_000,
            PrizeTier::Second => 30_000_000,
            PrizeTier::First => 2_000_000_000,
        }
    }

    pub const fn match_count(&self) -> usize {
        match self {
            PrizeTier::Miss => 0,
            PrizeTier::Fifth => 3,
            PrizeTier::Fourth => 4,
            PrizeTier::Third | PrizeTier::Second => 5,
            PrizeTier::First => 6,
        }
    }

    pub const fn requires_bonus(&self) -> bool {
        matches!(self, PrizeTier::Second)
    }

    pub const fn is_winning(&self) -> bool {
        !matches!(self, PrizeTier::Miss)
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_winning() {
            return write!(f, "no prize");
        }
        let bonus = if self.requires_bonus() { " + bonus" } else { "" };
        write!(
            f,
            "{} matches{bonus} ({})",
            self.match_count(),
            group_thousands(self.amount())
        )
    }
}

/// Payout for one ticket with `match_count` matching numbers.
pub fn prize(match_count: usize, bonus_matched: bool) -> Amount {
    PrizeTier::of(match_count, bonus_matched).amount()
}

pub fn group_thousands(amount: Amount) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
