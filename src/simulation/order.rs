use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The order a general passes along: the two literal values of the
/// oral-message problem.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Order {
    Attack,
    Retreat,
}

impl Order {
    /// The logical opposite, used by the faulty-relay substitution rule.
    pub fn opposite(self) -> Self {
        match self {
            Order::Attack => Order::Retreat,
            Order::Retreat => Order::Attack,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Order::Attack => "ATTACK",
            Order::Retreat => "RETREAT",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order '{0}', expected ATTACK or RETREAT")]
pub struct ParseOrderError(String);

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ATTACK") {
            Ok(Order::Attack)
        } else if s.eq_ignore_ascii_case("RETREAT") {
            Ok(Order::Retreat)
        } else {
            Err(ParseOrderError(s.to_string()))
        }
    }
}
