use std::str::FromStr;

use crate::error::{UnveilError, UnveilResult};

/// Order in which the nine grid cells become visible, as 1-based cell
/// numbers in row-major grid numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Permutation([u8; 9]);

impl Permutation {
    /// Parse a permutation from one of the accepted string forms: a
    /// contiguous digit string (`"123546789"`), comma-separated, or
    /// whitespace-separated numbers.
    pub fn parse(s: &str) -> UnveilResult<Self> {
        let trimmed = s.trim();

        let values: Vec<u8> = if trimmed.contains(',') || trimmed.contains(char::is_whitespace) {
            trimmed
                .replace(',', " ")
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<u8>().map_err(|_| {
                        UnveilError::permutation(format!("'{tok}' is not a number"))
                    })
                })
                .collect::<UnveilResult<_>>()?
        } else {
            trimmed
                .chars()
                .map(|c| {
                    c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                        UnveilError::permutation(format!("'{c}' is not a digit"))
                    })
                })
                .collect::<UnveilResult<_>>()?
        };

        if values.len() != 9 {
            return Err(UnveilError::permutation(format!(
                "must contain exactly 9 numbers, got {}",
                values.len()
            )));
        }

        // One membership pass catches duplicates, out-of-range and missing
        // values alike.
        let mut seen = [false; 9];
        for &v in &values {
            if !(1..=9).contains(&v) || seen[usize::from(v) - 1] {
                return Err(UnveilError::permutation(
                    "must contain the numbers 1-9 exactly once each",
                ));
            }
            seen[usize::from(v) - 1] = true;
        }

        let mut cells = [0u8; 9];
        cells.copy_from_slice(&values);
        Ok(Self(cells))
    }

    /// The 1-based cell number revealed at step `i` (0..9).
    pub fn cell_number(&self, i: usize) -> u8 {
        self.0[i]
    }

    /// 0-based grid-cell indices in reveal order.
    pub fn cell_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&v| usize::from(v) - 1)
    }

    pub fn identity() -> Self {
        Self([1, 2, 3, 4, 5, 6, 7, 8, 9])
    }
}

impl FromStr for Permutation {
    type Err = UnveilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
