use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Works with plain numbers and with any [`uom`] quantity, so flow rates,
/// densities, and lengths can all be checked the same way.
///
/// # Examples
///
/// ```
/// use twine_demister::support::constraint::StrictlyPositive;
/// use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
///
/// let m_dot = StrictlyPositive::new(MassRate::new::<kilogram_per_second>(5.0)).unwrap();
/// assert_eq!(m_dot.as_ref().get::<kilogram_per_second>(), 5.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`], [`ConstraintError::Negative`], or
    /// [`ConstraintError::NotANumber`] depending on how the value fails.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
