//! # Growth Policy
//!
//! Decides how large the backing buffer becomes when an append finds it full.
//!
//! The factor is stored as an integer ratio rather than a float, so
//! `floor(capacity * factor)` is exact and identical on every platform.
//!
//! ## Progress Guarantee
//!
//! A naive `floor(capacity * 1.5)` returns `1` for a capacity of `1`, which
//! would leave a full buffer full forever. [`next_capacity`] therefore never
//! returns less than `capacity + 1`.

use serde::{Deserialize, Serialize};

use crate::error::{ArrayListError, ArrayListResult};

/// Growth factor expressed as `numerator / denominator`.
///
/// # Example
///
/// ```rust,ignore
/// let factor = GrowthFactor::new(3, 2); // 1.5
/// assert_eq!(next_capacity(10, factor)?, 15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthFactor {
    /// Multiplier applied to the current capacity.
    pub numerator: u32,
    /// Divisor applied after multiplication. Must be non-zero.
    pub denominator: u32,
}

impl GrowthFactor {
    /// The default factor of 1.5.
    pub const ONE_AND_A_HALF: Self = Self::new(3, 2);

    /// Creates a growth factor from a ratio.
    #[inline]
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns true if the ratio is strictly greater than one.
    ///
    /// A zero denominator is never valid.
    #[inline]
    #[must_use]
    pub const fn is_expanding(&self) -> bool {
        self.denominator != 0 && self.numerator > self.denominator
    }
}

impl Default for GrowthFactor {
    fn default() -> Self {
        Self::ONE_AND_A_HALF
    }
}

/// Computes the capacity to grow to from a full buffer of `current` slots.
///
/// Returns `max(floor(current * factor), current + 1)`.
///
/// # Errors
///
/// Returns [`ArrayListError::Allocation`] if the target does not fit in a
/// `usize` or the factor has a zero denominator. Either way nothing could be
/// allocated for it.
pub fn next_capacity(current: usize, factor: GrowthFactor) -> ArrayListResult<usize> {
    let overflow = ArrayListError::Allocation {
        requested: usize::MAX,
    };

    if factor.denominator == 0 {
        return Err(overflow);
    }

    let minimum = current.checked_add(1).ok_or_else(|| overflow.clone())?;

    let scaled = (current as u128) * u128::from(factor.numerator) / u128::from(factor.denominator);
    let scaled = usize::try_from(scaled).map_err(|_| overflow)?;

    Ok(scaled.max(minimum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factor_is_one_and_a_half() {
        let factor = GrowthFactor::default();
        assert_eq!(factor, GrowthFactor::new(3, 2));
        assert!(factor.is_expanding());
    }

    #[test]
    fn test_floor_of_one_and_a_half() {
        let factor = GrowthFactor::default();
        assert_eq!(next_capacity(10, factor).unwrap(), 15);
        assert_eq!(next_capacity(15, factor).unwrap(), 22);
        assert_eq!(next_capacity(22, factor).unwrap(), 33);
    }

    #[test]
    fn test_small_capacity_always_progresses() {
        let factor = GrowthFactor::default();
        // floor(1 * 1.5) == 1 would never make room
        assert_eq!(next_capacity(1, factor).unwrap(), 2);
        assert_eq!(next_capacity(0, factor).unwrap(), 1);
        assert_eq!(next_capacity(2, factor).unwrap(), 3);
    }

    #[test]
    fn test_overflow_reports_allocation_error() {
        let factor = GrowthFactor::default();
        assert_eq!(
            next_capacity(usize::MAX, factor),
            Err(ArrayListError::Allocation {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let factor = GrowthFactor::new(3, 0);
        assert!(!factor.is_expanding());
        assert!(next_capacity(10, factor).is_err());
    }

    #[test]
    fn test_non_expanding_factor_still_progresses() {
        assert!(!GrowthFactor::new(1, 1).is_expanding());
        assert_eq!(next_capacity(10, GrowthFactor::new(1, 1)).unwrap(), 11);
    }
}
