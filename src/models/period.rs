//! Projection period representation
//!
//! The projection always covers the same three consecutive months.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of periods in every projection
pub const PERIOD_COUNT: usize = 3;

/// One of the three months covered by a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "Month 1")]
    Month1,
    #[serde(rename = "Month 2")]
    Month2,
    #[serde(rename = "Month 3")]
    Month3,
}

impl Period {
    /// All periods in evaluation order
    pub const ALL: [Period; PERIOD_COUNT] = [Period::Month1, Period::Month2, Period::Month3];

    /// Zero-based position of this period
    pub const fn index(&self) -> usize {
        match self {
            Self::Month1 => 0,
            Self::Month2 => 1,
            Self::Month3 => 2,
        }
    }

    /// Look up a period by zero-based position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The period before this one, if any
    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Whether this is the opening period of the projection
    pub const fn is_first(&self) -> bool {
        matches!(self, Self::Month1)
    }

    /// Display label ("Month 1".."Month 3")
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Month1 => "Month 1",
            Self::Month2 => "Month 2",
            Self::Month3 => "Month 3",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert_eq!(Period::ALL.len(), PERIOD_COUNT);
        assert!(Period::Month1 < Period::Month2);
        assert!(Period::Month2 < Period::Month3);
        for (i, period) in Period::ALL.iter().enumerate() {
            assert_eq!(period.index(), i);
        }
    }

    #[test]
    fn test_navigation() {
        assert_eq!(Period::Month1.previous(), None);
        assert_eq!(Period::Month2.previous(), Some(Period::Month1));
        assert_eq!(Period::Month3.previous(), Some(Period::Month2));
        assert_eq!(Period::from_index(3), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::Month1.to_string(), "Month 1");
        assert_eq!(Period::Month3.label(), "Month 3");
        assert!(Period::Month1.is_first());
        assert!(!Period::Month2.is_first());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Period::Month2).unwrap();
        assert_eq!(json, "\"Month 2\"");
        let parsed: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Period::Month2);
    }
}
