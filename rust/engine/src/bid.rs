use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The amounts a player may bid, from `Pass` up to shooting the moon.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidAmount {
    Pass = 0,
    Fifteen = 15,
    Twenty = 20,
    TwentyFive = 25,
    Thirty = 30,
    /// Take every trick for 60 points.
    ShootTheMoon = 60,
}

impl BidAmount {
    pub fn value(self) -> i32 {
        self as i32
    }

    /// All amounts in ascending order.
    pub fn all() -> [BidAmount; 6] {
        [
            BidAmount::Pass,
            BidAmount::Fifteen,
            BidAmount::Twenty,
            BidAmount::TwentyFive,
            BidAmount::Thirty,
            BidAmount::ShootTheMoon,
        ]
    }

    /// Map a numeric amount back to a bid, if it names one.
    pub fn from_value(value: i32) -> Option<BidAmount> {
        BidAmount::all().into_iter().find(|a| a.value() == value)
    }
}

impl fmt::Display for BidAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A bid placed by a player. Two bids compare equal when their amounts do,
/// regardless of who placed them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub identifier: String,
    pub amount: BidAmount,
}

impl Bid {
    pub fn new(identifier: impl Into<String>, amount: BidAmount) -> Self {
        Self {
            identifier: identifier.into(),
            amount,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.amount == BidAmount::Pass
    }
}

impl PartialEq for Bid {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl Eq for Bid {}

impl PartialOrd for Bid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount.cmp(&other.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bids_compare_by_amount_only() {
        let a = Bid::new("a", BidAmount::Twenty);
        let b = Bid::new("b", BidAmount::Twenty);
        assert_eq!(a, b);
        assert!(Bid::new("a", BidAmount::Fifteen) < Bid::new("b", BidAmount::ShootTheMoon));
    }

    #[test]
    fn only_pass_is_falsy() {
        for amount in BidAmount::all() {
            assert_eq!(Bid::new("x", amount).is_pass(), amount == BidAmount::Pass);
        }
    }

    #[test]
    fn display_prints_the_numeric_value() {
        assert_eq!(BidAmount::TwentyFive.to_string(), "25");
        assert_eq!(BidAmount::from_value(60), Some(BidAmount::ShootTheMoon));
        assert_eq!(BidAmount::from_value(35), None);
    }
}
