use thiserror::Error;
use uom::si::f64::{Area, MassDensity, Velocity};

use crate::support::constraint::ConstraintError;

/// Errors that can occur while sizing a demister.
///
/// The first four variants are input preconditions, reported in declaration
/// order when several inputs are invalid. [`SizingError::Degenerate`] covers
/// valid inputs whose design point under- or overflows `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum SizingError {
    /// The vapor mass flow rate is not strictly positive and finite.
    #[error("vapor mass flow rate must be strictly positive and finite")]
    MassFlow(#[source] ConstraintError),

    /// The vapor density is not strictly positive and finite.
    #[error("vapor density must be strictly positive and finite")]
    VaporDensity(#[source] ConstraintError),

    /// The liquid density is not finite and greater than the vapor density.
    #[error(
        "liquid density must be finite and exceed vapor density: liquid={liquid:?}, vapor={vapor:?}"
    )]
    DensityOrder {
        /// Liquid density as given.
        liquid: MassDensity,
        /// Vapor density as given.
        vapor: MassDensity,
    },

    /// The design margin lies outside `(0, 1]`.
    #[error("design margin must be in (0, 1]")]
    DesignMargin(#[source] ConstraintError),

    /// The design velocity or required area is zero or not finite.
    #[error(
        "degenerate design point: design_velocity={design_velocity:?}, required_area={required_area:?}"
    )]
    Degenerate {
        /// Computed design velocity.
        design_velocity: Velocity,
        /// Computed required area.
        required_area: Area,
    },
}
