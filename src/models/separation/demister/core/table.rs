//! Fixed Souders-Brown coefficients and pressure-drop brackets.
//!
//! Values are in SI base units so the tables can stay `const`; the accessor
//! methods on [`DemisterType`] wrap them in [`uom`] quantities.

use uom::si::{
    f64::{Pressure, Velocity},
    pressure::pascal,
    velocity::meter_per_second,
};

use super::{DemisterType, Orientation};

/// Souders-Brown K-factors in m/s, one entry per (type, orientation).
pub const K_FACTORS: [(DemisterType, Orientation, f64); 8] = [
    (DemisterType::WireMesh, Orientation::Horizontal, 0.107),
    (DemisterType::WireMesh, Orientation::Vertical, 0.080),
    (DemisterType::WireMeshHighCapacity, Orientation::Horizontal, 0.150),
    (DemisterType::WireMeshHighCapacity, Orientation::Vertical, 0.110),
    (DemisterType::Vane, Orientation::Horizontal, 0.200),
    (DemisterType::Vane, Orientation::Vertical, 0.150),
    (DemisterType::StructuredPacking, Orientation::Horizontal, 0.170),
    (DemisterType::StructuredPacking, Orientation::Vertical, 0.130),
];

/// Empirical pressure-drop brackets in Pa as `(type, min, max)`.
pub const PRESSURE_DROPS: [(DemisterType, f64, f64); 4] = [
    (DemisterType::WireMesh, 100.0, 250.0),
    (DemisterType::WireMeshHighCapacity, 150.0, 350.0),
    (DemisterType::Vane, 50.0, 200.0),
    (DemisterType::StructuredPacking, 100.0, 300.0),
];

/// Expected pressure drop across a demister, as an empirical bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressureDropRange {
    /// Lower bound of the bracket.
    pub min: Pressure,
    /// Upper bound of the bracket.
    pub max: Pressure,
}

impl DemisterType {
    /// Returns the Souders-Brown K-factor for this type in the given orientation.
    ///
    /// ```
    /// use twine_demister::models::separation::demister::{DemisterType, Orientation};
    /// use uom::si::velocity::meter_per_second;
    ///
    /// let k = DemisterType::WireMesh.k_factor(Orientation::Horizontal);
    /// assert_eq!(k.get::<meter_per_second>(), 0.107);
    /// ```
    #[must_use]
    pub fn k_factor(self, orientation: Orientation) -> Velocity {
        let index = self.index() * Orientation::ALL.len() + orientation.index();
        Velocity::new::<meter_per_second>(K_FACTORS[index].2)
    }

    /// Returns the empirical pressure-drop bracket for this type.
    #[must_use]
    pub fn pressure_drop(self) -> PressureDropRange {
        let (_, min, max) = PRESSURE_DROPS[self.index()];
        PressureDropRange {
            min: Pressure::new::<pascal>(min),
            max: Pressure::new::<pascal>(max),
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::WireMesh => 0,
            Self::WireMeshHighCapacity => 1,
            Self::Vane => 2,
            Self::StructuredPacking => 3,
        }
    }
}

impl Orientation {
    const fn index(self) -> usize {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_factor_rows_match_their_keys() {
        for demister_type in DemisterType::ALL {
            for orientation in Orientation::ALL {
                let k = demister_type.k_factor(orientation).get::<meter_per_second>();
                let row = K_FACTORS
                    .iter()
                    .find(|(t, o, _)| *t == demister_type && *o == orientation)
                    .expect("every combination has a row");
                assert_eq!(k, row.2);
                assert!(k > 0.0);
            }
        }
    }

    #[test]
    fn pressure_drop_rows_match_their_keys() {
        for (index, demister_type) in DemisterType::ALL.into_iter().enumerate() {
            assert_eq!(PRESSURE_DROPS[index].0, demister_type);

            let range = demister_type.pressure_drop();
            assert!(range.min > Pressure::new::<pascal>(0.0));
            assert!(range.min < range.max);
        }
    }
}
