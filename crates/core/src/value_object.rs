//! Value objects: equality by value, validated at construction.
//!
//! The projector and the scoring functions assume well-formed inputs, so the
//! bounds live here. Anything that holds an `AnnualEarnings` or a `RiskLevel`
//! has already passed validation, including values deserialized from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Expected annual earnings for one career, in whole currency units.
///
/// Always finite and within `[0, AnnualEarnings::MAX]`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AnnualEarnings(f64);

impl AnnualEarnings {
    /// Keeps compounded projections far from `f64` overflow.
    pub const MAX: f64 = 1e15;

    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("earnings must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!(
                "earnings must be non-negative (got {amount})"
            )));
        }
        if amount > Self::MAX {
            return Err(DomainError::validation(format!(
                "earnings must not exceed {:e} (got {amount})",
                Self::MAX
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for AnnualEarnings {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnnualEarnings> for f64 {
    fn from(value: AnnualEarnings) -> Self {
        value.0
    }
}

impl core::fmt::Display for AnnualEarnings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Risk score on a 1 (safest) to 10 (riskiest) scale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RiskLevel(u8);

impl RiskLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(level: u8) -> DomainResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            return Err(DomainError::validation(format!(
                "risk level must be within [{}, {}] (got {level})",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(level))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Growth dampening factor `1 - level/10`, in `[0.0, 0.9]`.
    pub fn adjustment(self) -> f64 {
        1.0 - f64::from(self.0) / 10.0
    }

    /// Inverse of the risk level on a 0..=9 scale.
    pub fn stability(self) -> u8 {
        Self::MAX - self.0
    }
}

impl Default for RiskLevel {
    /// Midpoint of the scale, matching the form's initial slider position.
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RiskLevel> for u8 {
    fn from(value: RiskLevel) -> Self {
        value.0
    }
}

impl core::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/10", self.0)
    }
}
