//! Demister sizing with the Souders-Brown correlation.
//!
//! The flooding velocity of a demister pad is
//!
//! ```text
//! v_max = K · sqrt((ρ_liquid − ρ_vapor) / ρ_vapor)
//! ```
//!
//! where `K` depends on the pad type and orientation. The design velocity is a
//! fixed fraction (the design margin) of `v_max`, and the required flow area
//! follows from the volumetric vapor flow at that velocity.

mod error;
mod geometry;
mod input;
mod kind;
mod loading;
mod results;
mod table;

#[cfg(test)]
mod test_support;

pub use error::SizingError;
pub use geometry::Geometry;
pub use input::{DemisterInput, VesselGeometry};
pub use kind::{DemisterType, Orientation, ParseTagError};
pub use loading::{HIGH_LOADING_THRESHOLD, LOW_LOADING_THRESHOLD, LoadingStatus};
pub use results::Sizing;
pub use table::{K_FACTORS, PRESSURE_DROPS, PressureDropRange};

use crate::support::constraint::{ConstraintError, StrictlyPositive, UnitIntervalLowerOpen};
use num_traits::Zero;
use uom::si::{
    area::square_meter,
    f64::{Area, MassDensity, MassRate, Ratio, Velocity, VolumeRate},
    ratio::ratio,
    velocity::meter_per_second,
};

/// Sizes a demister for the given conditions.
///
/// Inputs are checked in a fixed order (mass flow, vapor density, density
/// ordering, design margin) and the first failure is returned.
///
/// # Errors
///
/// Returns a [`SizingError`] if any input precondition is violated, or
/// [`SizingError::Degenerate`] if the design point under- or overflows.
pub fn size(input: &DemisterInput) -> Result<Sizing, SizingError> {
    let checked = Checked::new(input).inspect_err(|err| {
        tracing::debug!(error = %err, "demister input rejected");
    })?;

    let k_factor = input.demister_type.k_factor(input.orientation);

    let density_ratio: Ratio = checked.density_difference / checked.vapor_density;
    let max_velocity: Velocity = k_factor * density_ratio.get::<ratio>().sqrt();
    let design_velocity: Velocity = max_velocity * checked.design_margin.get::<ratio>();

    let volumetric_flow: VolumeRate = checked.mass_flow / checked.vapor_density;
    let required_area: Area = volumetric_flow / design_velocity;

    if positive_finite(design_velocity, |v: Velocity| v.is_finite()).is_err()
        || positive_finite(required_area, |a: Area| a.is_finite()).is_err()
    {
        let err = SizingError::Degenerate {
            design_velocity,
            required_area,
        };
        tracing::debug!(error = %err, "demister design point rejected");
        return Err(err);
    }

    let loading_fraction = checked.design_margin;
    let loading_status = LoadingStatus::from_fraction(loading_fraction);

    tracing::debug!(
        demister_type = %input.demister_type,
        orientation = %input.orientation,
        k_factor = k_factor.get::<meter_per_second>(),
        max_velocity = max_velocity.get::<meter_per_second>(),
        design_velocity = design_velocity.get::<meter_per_second>(),
        required_area = required_area.get::<square_meter>(),
        %loading_status,
        "demister sized"
    );

    Ok(Sizing {
        k_factor,
        max_velocity,
        design_velocity,
        volumetric_flow,
        required_area,
        geometry: Geometry::from_area(required_area, input.geometry),
        pressure_drop: input.demister_type.pressure_drop(),
        loading_fraction,
        loading_status,
    })
}

/// Input values that passed every precondition.
struct Checked {
    mass_flow: MassRate,
    vapor_density: MassDensity,
    density_difference: MassDensity,
    design_margin: Ratio,
}

impl Checked {
    fn new(input: &DemisterInput) -> Result<Self, SizingError> {
        let mass_flow = positive_finite(input.vapor_mass_flow, |m: MassRate| m.is_finite())
            .map_err(SizingError::MassFlow)?;

        let vapor_density =
            positive_finite(input.vapor_density, |rho: MassDensity| rho.is_finite())
                .map_err(SizingError::VaporDensity)?;

        // Vapor density is finite here, so the difference is finite exactly
        // when the liquid density is.
        let density_difference = positive_finite(
            input.liquid_density - input.vapor_density,
            |rho: MassDensity| rho.is_finite(),
        )
        .map_err(|_| SizingError::DensityOrder {
            liquid: input.liquid_density,
            vapor: input.vapor_density,
        })?;

        let design_margin =
            UnitIntervalLowerOpen::new(input.design_margin).map_err(SizingError::DesignMargin)?;

        Ok(Self {
            mass_flow,
            vapor_density,
            density_difference,
            design_margin: design_margin.into_inner(),
        })
    }
}

/// Checks that a value is strictly positive and finite.
fn positive_finite<T: PartialOrd + Zero + Copy>(
    value: T,
    is_finite: impl Fn(T) -> bool,
) -> Result<T, ConstraintError> {
    let value = StrictlyPositive::new(value)?.into_inner();
    if is_finite(value) {
        Ok(value)
    } else {
        Err(ConstraintError::Infinite)
    }
}
