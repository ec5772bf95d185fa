use crate::domain::model::OverflowPolicy;
use crate::utils::error::{CalcError, Result};

/// Stateless namespace for the two arithmetic operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Returns `a + b`.
    ///
    /// Overflow wraps around in two's complement in every build profile, so
    /// `Calculator::add(i32::MAX, 1) == i32::MIN`. Use [`Calculator::add_with`]
    /// to pick another policy.
    pub fn add(a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    /// Returns `x * y` under IEEE-754 double semantics. NaN and infinities
    /// propagate; nothing is trapped.
    pub fn multiply(x: f64, y: f64) -> f64 {
        x * y
    }

    pub fn add_with(a: i32, b: i32, policy: OverflowPolicy) -> Result<i32> {
        match policy {
            OverflowPolicy::Wrapping => Ok(Self::add(a, b)),
            OverflowPolicy::Saturating => Ok(a.saturating_add(b)),
            OverflowPolicy::Checked => a
                .checked_add(b)
                .ok_or(CalcError::OverflowError { a, b }),
        }
    }
}

pub fn add(a: i32, b: i32) -> i32 {
    Calculator::add(a, b)
}

pub fn multiply(x: f64, y: f64) -> f64 {
    Calculator::multiply(x, y)
}
