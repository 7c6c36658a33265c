use std::cmp::Ordering;

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in the lower-open unit interval: `0 < x ≤ 1`.
///
/// This is the natural domain of a design margin: some fraction of a limit,
/// possibly all of it, but never none.
///
/// # Examples
///
/// ```
/// use twine_demister::support::constraint::{ConstraintError, UnitIntervalLowerOpen};
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let margin = UnitIntervalLowerOpen::new(Ratio::new::<percent>(80.0)).unwrap();
/// assert!((margin.as_ref().get::<ratio>() - 0.8).abs() < 1e-12);
///
/// // The upper endpoint is included:
/// assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
///
/// // Error cases:
/// assert_eq!(UnitIntervalLowerOpen::new(0.0).unwrap_err(), ConstraintError::BelowMinimum);
/// assert_eq!(UnitIntervalLowerOpen::new(1.01).unwrap_err(), ConstraintError::AboveMaximum);
/// assert_eq!(UnitIntervalLowerOpen::new(f64::NAN).unwrap_err(), ConstraintError::NotANumber);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Constructs `Constrained<T, UnitIntervalLowerOpen>` if `0 < value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLowerOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLowerOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::*;

    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    fn margins_in_range() {
        for margin in [0.01, 0.4, 0.8, 0.95, 1.0] {
            assert!(UnitIntervalLowerOpen::new(Ratio::new::<ratio>(margin)).is_ok());
        }
    }

    #[test]
    fn margins_out_of_range() {
        assert!(matches!(
            UnitIntervalLowerOpen::new(Ratio::new::<ratio>(0.0)),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitIntervalLowerOpen::new(Ratio::new::<ratio>(-0.2)),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitIntervalLowerOpen::new(Ratio::new::<ratio>(1.01)),
            Err(ConstraintError::AboveMaximum)
        ));
    }

    #[test]
    fn nan_is_not_a_number() {
        assert!(matches!(
            UnitIntervalLowerOpen::new(Ratio::new::<ratio>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        ));
    }
}
