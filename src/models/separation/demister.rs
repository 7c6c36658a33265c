//! Demister (mist eliminator) sizing.
//!
//! [`Demister`] is a [`twine_core::Model`] that sizes a demister pad with the
//! Souders-Brown correlation. The same computation is available directly as
//! [`size`].
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_demister::models::separation::demister::{
//!     Demister, DemisterInput, DemisterType, LoadingStatus, Orientation,
//! };
//! use uom::si::{
//!     f64::{MassDensity, MassRate, Ratio},
//!     length::meter,
//!     mass_density::kilogram_per_cubic_meter,
//!     mass_rate::kilogram_per_second,
//!     ratio::ratio,
//! };
//!
//! let input = DemisterInput::new(
//!     MassRate::new::<kilogram_per_second>(5.0),
//!     MassDensity::new::<kilogram_per_cubic_meter>(2.0),
//!     MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
//!     DemisterType::WireMesh,
//!     Orientation::Horizontal,
//!     Ratio::new::<ratio>(0.8),
//! );
//!
//! let sizing = Demister.call(&input).unwrap();
//!
//! let diameter = sizing.geometry.diameter().unwrap().get::<meter>();
//! assert!((diameter - 1.29).abs() < 1e-2);
//! assert_eq!(sizing.loading_status, LoadingStatus::Ok);
//! ```

mod core;

pub use self::core::{
    DemisterInput, DemisterType, Geometry, HIGH_LOADING_THRESHOLD, K_FACTORS,
    LOW_LOADING_THRESHOLD, LoadingStatus, Orientation, PRESSURE_DROPS, ParseTagError,
    PressureDropRange, Sizing, SizingError, VesselGeometry, size,
};

use twine_core::Model;

/// Demister sizing model.
///
/// Stateless; a single value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Demister;

impl Model for Demister {
    type Input = DemisterInput;
    type Output = Sizing;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        size(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{MassDensity, MassRate, Ratio},
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        ratio::ratio,
    };

    fn input(margin: f64) -> DemisterInput {
        DemisterInput::new(
            MassRate::new::<kilogram_per_second>(2.0),
            MassDensity::new::<kilogram_per_cubic_meter>(4.5),
            MassDensity::new::<kilogram_per_cubic_meter>(850.0),
            DemisterType::StructuredPacking,
            Orientation::Horizontal,
            Ratio::new::<ratio>(margin),
        )
    }

    #[test]
    fn model_matches_size() {
        let input = input(0.7);
        assert_eq!(Demister.call(&input), size(&input));
    }

    #[test]
    fn model_reports_errors() {
        assert!(matches!(
            Demister.call(&input(0.0)),
            Err(SizingError::DesignMargin(_))
        ));
    }

    #[test]
    fn model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Demister>();
        assert_send_sync::<Sizing>();
        assert_send_sync::<SizingError>();
    }
}
