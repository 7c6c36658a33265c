//! Results of a demister sizing.

use uom::si::f64::{Area, Ratio, Velocity, VolumeRate};

use super::{Geometry, LoadingStatus, PressureDropRange};

/// Sizing of a demister for one set of conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sizing {
    /// Souders-Brown K-factor for the chosen type and orientation.
    pub k_factor: Velocity,

    /// Flooding velocity from the Souders-Brown correlation.
    pub max_velocity: Velocity,

    /// Design velocity, the flooding velocity scaled by the design margin.
    pub design_velocity: Velocity,

    /// Volumetric vapor flow rate.
    pub volumetric_flow: VolumeRate,

    /// Flow area needed to hold the design velocity.
    pub required_area: Area,

    /// Vessel dimension matching the requested geometry.
    pub geometry: Geometry,

    /// Empirical pressure-drop bracket for the demister type.
    pub pressure_drop: PressureDropRange,

    /// Design velocity over flooding velocity.
    ///
    /// This equals the input design margin exactly.
    pub loading_fraction: Ratio,

    /// Classification of the loading fraction.
    pub loading_status: LoadingStatus,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    use crate::models::separation::demister::core::{
        DemisterInput, DemisterType, VesselGeometry, size, test_support::wire_mesh_input,
    };

    #[test]
    fn sizing_round_trips_through_json() {
        let input = wire_mesh_input(0.8).with_geometry(VesselGeometry::Rectangular {
            width: Some(Length::new::<meter>(1.5)),
        });
        let sizing = size(&input).unwrap();

        let json = serde_json::to_string(&sizing).unwrap();
        let back: Sizing = serde_json::from_str(&json).unwrap();

        assert_eq!(back, sizing);
    }

    #[test]
    fn rectangular_input_round_trips_through_json() {
        let input = wire_mesh_input(0.6).with_geometry(VesselGeometry::Rectangular {
            width: Some(Length::new::<meter>(2.0)),
        });

        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["demister_type"], "wire_mesh");
        assert_eq!(json["orientation"], "horizontal");
        assert_eq!(json["geometry"]["rectangular"]["width"], 2.0);

        let back: DemisterInput = serde_json::from_value(json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn tags_serialize_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&DemisterType::WireMeshHighCapacity).unwrap(),
            r#""wire_mesh_high_capacity""#
        );
        assert_eq!(
            serde_json::to_string(&LoadingStatus::Ok).unwrap(),
            r#""ok""#
        );
        assert_eq!(
            serde_json::from_str::<LoadingStatus>(r#""high""#).unwrap(),
            LoadingStatus::High
        );
    }
}
