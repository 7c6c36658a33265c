use std::f64::consts::PI;

use uom::si::f64::{Area, Length};

use crate::support::constraint::StrictlyPositive;

use super::VesselGeometry;

/// Vessel dimension derived from the required flow area.
///
/// The variant always matches the requested [`VesselGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Geometry {
    /// Diameter of a round vessel with the required area.
    Circular { diameter: Length },

    /// Height of a rectangle with the required area, if a width was given.
    Rectangular { height: Option<Length> },
}

impl Geometry {
    /// Derives the vessel dimension for a flow area.
    pub(super) fn from_area(area: Area, requested: VesselGeometry) -> Self {
        match requested {
            VesselGeometry::Circular => Self::Circular {
                diameter: (area * 4.0 / PI).sqrt(),
            },
            VesselGeometry::Rectangular { width } => Self::Rectangular {
                height: width
                    .and_then(|w| StrictlyPositive::new(w).ok())
                    .map(|w| area / w.into_inner()),
            },
        }
    }

    /// Returns the vessel diameter for circular geometry.
    #[must_use]
    pub fn diameter(&self) -> Option<Length> {
        match *self {
            Self::Circular { diameter } => Some(diameter),
            Self::Rectangular { .. } => None,
        }
    }

    /// Returns the rectangle height for rectangular geometry with a width.
    #[must_use]
    pub fn height(&self) -> Option<Length> {
        match *self {
            Self::Rectangular { height } => height,
            Self::Circular { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, length::meter};

    #[test]
    fn circle_area_round_trips() {
        let area = Area::new::<square_meter>(PI);
        let geometry = Geometry::from_area(area, VesselGeometry::Circular);

        assert_relative_eq!(geometry.diameter().unwrap().get::<meter>(), 2.0);
        assert!(geometry.height().is_none());
    }

    #[test]
    fn rectangle_height_from_width() {
        let area = Area::new::<square_meter>(3.0);
        let geometry = Geometry::from_area(
            area,
            VesselGeometry::Rectangular {
                width: Some(Length::new::<meter>(1.5)),
            },
        );

        assert_relative_eq!(geometry.height().unwrap().get::<meter>(), 2.0);
        assert!(geometry.diameter().is_none());
    }

    #[test]
    fn rectangle_without_usable_width_has_no_height() {
        let area = Area::new::<square_meter>(3.0);

        for width in [None, Some(0.0), Some(-1.0), Some(f64::NAN)] {
            let geometry = Geometry::from_area(
                area,
                VesselGeometry::Rectangular {
                    width: width.map(Length::new::<meter>),
                },
            );
            assert_eq!(geometry, Geometry::Rectangular { height: None });
        }
    }
}
