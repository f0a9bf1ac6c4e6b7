use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A user's star rating, always within `1..=5`.
///
/// Serializes as a bare integer. Deserialization goes through the same range
/// check as [`Rating::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::RatingOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Render as filled/empty stars, e.g. `★★★☆☆`.
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX) - filled;
        format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(empty))
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for v in 1..=5 {
            assert_eq!(Rating::new(v).unwrap().value(), v as u8);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Rating::new(0), Err(ValidationError::RatingOutOfRange(0)));
        assert_eq!(Rating::new(6), Err(ValidationError::RatingOutOfRange(6)));
        assert_eq!(Rating::new(-3), Err(ValidationError::RatingOutOfRange(-3)));
    }

    #[test]
    fn serializes_as_integer() {
        let r = Rating::new(4).unwrap();
        assert_eq!(serde_json::to_string(&r).unwrap(), "4");
        let back: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(back, r);
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn stars_rendering() {
        assert_eq!(Rating::new(3).unwrap().stars(), "\u{2605}\u{2605}\u{2605}\u{2606}\u{2606}");
    }
}
