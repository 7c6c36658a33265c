use uom::si::{
    f64::{MassDensity, MassRate, Ratio},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    ratio::ratio,
};

use super::{DemisterInput, DemisterType, Orientation};

/// Wire mesh pad, horizontal, 5 kg/s of 2 kg/m³ vapor over a 1000 kg/m³ liquid.
pub(super) fn wire_mesh_input(margin: f64) -> DemisterInput {
    DemisterInput::new(
        MassRate::new::<kilogram_per_second>(5.0),
        density(2.0),
        density(1000.0),
        DemisterType::WireMesh,
        Orientation::Horizontal,
        Ratio::new::<ratio>(margin),
    )
}

pub(super) fn density(kg_per_m3: f64) -> MassDensity {
    MassDensity::new::<kilogram_per_cubic_meter>(kg_per_m3)
}
