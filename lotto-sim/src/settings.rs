use std::{
    fs::File,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{anyhow, bail};
use lotto::{Amount, WinningContext, DEFAULT_UNIT_PRICE};
use serde::{de::DeserializeOwned, Deserialize};

/// Settings as they come from a JSON file or the command line. Every field is optional
/// so that the two sources can be layered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimSettings {
    pub amount: Option<Amount>,
    pub unit_price: Option<Amount>,
    pub winning_numbers: Option<Vec<u8>>,
    pub bonus_number: Option<u8>,
    pub seed: Option<u64>,
    pub iterations: Option<usize>,
}

impl SimSettings {
    /// Values set in `overrides` win over the ones in `self`.
    pub fn merge(self, overrides: SimSettings) -> SimSettings {
        SimSettings {
            amount: overrides.amount.or(self.amount),
            unit_price: overrides.unit_price.or(self.unit_price),
            winning_numbers: overrides.winning_numbers.or(self.winning_numbers),
            bonus_number: overrides.bonus_number.or(self.bonus_number),
            seed: overrides.seed.or(self.seed),
            iterations: overrides.iterations.or(self.iterations),
        }
    }

    pub fn resolve(self) -> anyhow::Result<RunSettings> {
        let amount = self
            .amount
            .ok_or_else(|| anyhow!("Purchase amount is not set"))?;
        let iterations = self.iterations.unwrap_or(1);
        if iterations == 0 {
            bail!("At least one iteration is required");
        }
        let winning = match (self.winning_numbers, self.bonus_number) {
            (Some(numbers), Some(bonus)) => Some(WinningContext::from_values(&numbers, bonus)?),
            (None, None) => None,
            _ => bail!("Winning numbers and bonus number must be given together"),
        };
        let seed = self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        });

        Ok(RunSettings {
            amount,
            unit_price: self.unit_price.unwrap_or(DEFAULT_UNIT_PRICE),
            winning,
            seed,
            iterations,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub amount: Amount,
    pub unit_price: Amount,
    /// Drawn at random for every iteration when not set.
    pub winning: Option<WinningContext>,
    pub seed: u64,
    pub iterations: usize,
}

/// Generically load a json file
pub fn load_json_from_file<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let f = File::open(path).map_err(|e| anyhow!("Failed to open {}: {e}", path.display()))?;
    Ok(serde_json::from_reader(f)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let settings: SimSettings = serde_json::from_str(
            r#"{"amount": 14000, "winning_numbers": [1, 2, 3, 4, 5, 6], "bonus_number": 7}"#,
        )
        .unwrap();
        assert_eq!(
            settings,
            SimSettings {
                amount: Some(14_000),
                winning_numbers: Some(vec![1, 2, 3, 4, 5, 6]),
                bonus_number: Some(7),
                ..Default::default()
            }
        );

        assert!(serde_json::from_str::<SimSettings>(r#"{"amnt": 1}"#).is_err());
    }

    #[test]
    fn test_merge() {
        let file = SimSettings {
            amount: Some(10_000),
            unit_price: Some(500),
            seed: Some(1),
            ..Default::default()
        };
        let cli = SimSettings {
            amount: Some(3_000),
            iterations: Some(4),
            ..Default::default()
        };
        assert_eq!(
            file.merge(cli),
            SimSettings {
                amount: Some(3_000),
                unit_price: Some(500),
                seed: Some(1),
                iterations: Some(4),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = SimSettings {
            amount: Some(5_000),
            seed: Some(0),
            ..Default::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(
            settings,
            RunSettings {
                amount: 5_000,
                unit_price: DEFAULT_UNIT_PRICE,
                winning: None,
                seed: 0,
                iterations: 1,
            }
        );
    }

    #[test]
    fn test_resolve_winning_numbers() {
        let settings = SimSettings {
            amount: Some(5_000),
            winning_numbers: Some(vec![6, 5, 4, 3, 2, 1]),
            bonus_number: Some(7),
            ..Default::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(
            settings.winning,
            Some(WinningContext::from_values(&[1, 2, 3, 4, 5, 6], 7).unwrap())
        );
    }

    #[test]
    fn test_resolve_errors() {
        let cases = vec![
            SimSettings::default(),
            SimSettings {
                amount: Some(1_000),
                iterations: Some(0),
                ..Default::default()
            },
            SimSettings {
                amount: Some(1_000),
                winning_numbers: Some(vec![1, 2, 3, 4, 5, 6]),
                ..Default::default()
            },
            SimSettings {
                amount: Some(1_000),
                winning_numbers: Some(vec![1, 2, 3, 4, 5, 6]),
                bonus_number: Some(6),
                ..Default::default()
            },
        ];
        for settings in cases {
            assert!(settings.resolve().is_err());
        }
    }
}
