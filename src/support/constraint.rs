//! Type-level numeric constraints checked once at construction.
//!
//! A [`Constrained<T, C>`] value is proof that the wrapped `T` satisfied the
//! marker constraint `C` when it was built, so downstream code can rely on the
//! invariant without re-checking it.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero (flows, densities, lengths)
//! - [`UnitIntervalLowerOpen`]: Lower-open unit interval `0 < x ≤ 1` (margins)
//!
//! Each marker also provides an associated `new()` constructor
//! (e.g., `StrictlyPositive::new(2.0)`).
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for your own zero-sized marker type to define
//! additional invariants.

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalLowerOpen};

/// A numeric invariant enforced at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing how the value fails the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The reason a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value must be finite")]
    Infinite,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_demister::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};
///
/// let rho = MassDensity::new::<kilogram_per_cubic_meter>(2.0);
/// let rho = Constrained::<_, StrictlyPositive>::new(rho).unwrap();
/// assert_eq!(rho.into_inner().get::<kilogram_per_cubic_meter>(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
