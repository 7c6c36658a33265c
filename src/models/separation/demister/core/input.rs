use uom::si::f64::{Length, MassDensity, MassRate, Ratio};

use super::{DemisterType, Orientation};

/// Vessel cross-section requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VesselGeometry {
    /// Round vessel; the sizing reports a diameter.
    Circular,

    /// Rectangular housing; the sizing reports a height for the given width.
    ///
    /// A missing or non-positive width leaves the height unset, which lets
    /// callers defer the choice of width.
    Rectangular { width: Option<Length> },
}

/// Physical conditions and design choices for sizing a demister.
///
/// Fields are not validated on construction; [`size`](super::size) checks
/// them before computing anything.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemisterInput {
    /// Vapor mass flow rate through the demister.
    pub vapor_mass_flow: MassRate,

    /// Vapor density at operating conditions.
    pub vapor_density: MassDensity,

    /// Density of the entrained liquid.
    pub liquid_density: MassDensity,

    /// Pad construction, which selects the K-factor row.
    pub demister_type: DemisterType,

    /// Pad orientation, which selects the K-factor column.
    pub orientation: Orientation,

    /// Fraction of the flooding velocity used as the design velocity.
    pub design_margin: Ratio,

    /// Vessel cross-section to size.
    pub geometry: VesselGeometry,
}

impl DemisterInput {
    /// Creates an input for a circular vessel.
    ///
    /// Use [`DemisterInput::with_geometry`] to size a rectangular housing instead.
    #[must_use]
    pub fn new(
        vapor_mass_flow: MassRate,
        vapor_density: MassDensity,
        liquid_density: MassDensity,
        demister_type: DemisterType,
        orientation: Orientation,
        design_margin: Ratio,
    ) -> Self {
        Self {
            vapor_mass_flow,
            vapor_density,
            liquid_density,
            demister_type,
            orientation,
            design_margin,
            geometry: VesselGeometry::Circular,
        }
    }

    /// Returns a copy of this input with a different vessel geometry.
    #[must_use]
    pub fn with_geometry(self, geometry: VesselGeometry) -> Self {
        Self { geometry, ..self }
    }
}
