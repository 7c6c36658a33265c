use std::{fmt, str::FromStr};

use thiserror::Error;

/// Demister pad construction.
///
/// Each type carries its own Souders-Brown K-factors and an empirical
/// pressure-drop bracket; see [`K_FACTORS`](super::K_FACTORS) and
/// [`PRESSURE_DROPS`](super::PRESSURE_DROPS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DemisterType {
    /// Knitted wire mesh pad.
    WireMesh,
    /// High-capacity (open-knit) wire mesh pad.
    WireMeshHighCapacity,
    /// Chevron vane pack.
    Vane,
    /// Structured packing element.
    StructuredPacking,
}

impl DemisterType {
    /// Every demister type, in table order.
    pub const ALL: [Self; 4] = [
        Self::WireMesh,
        Self::WireMeshHighCapacity,
        Self::Vane,
        Self::StructuredPacking,
    ];

    /// Returns the snake_case tag for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WireMesh => "wire_mesh",
            Self::WireMeshHighCapacity => "wire_mesh_high_capacity",
            Self::Vane => "vane",
            Self::StructuredPacking => "structured_packing",
        }
    }
}

/// Orientation of the demister pad in the vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Pad lies horizontally, with vapor flowing up through it.
    Horizontal,
    /// Pad stands vertically, with vapor flowing across it.
    Vertical,
}

impl Orientation {
    /// Both orientations, in table order.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the snake_case tag for this orientation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// A tag string that does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} tag: {tag:?}")]
pub struct ParseTagError {
    /// The kind of tag that was expected (e.g., `"demister type"`).
    pub kind: &'static str,
    /// The rejected input.
    pub tag: String,
}

impl fmt::Display for DemisterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DemisterType {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTagError {
                kind: "demister type",
                tag: s.to_owned(),
            })
    }
}

impl FromStr for Orientation {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ParseTagError {
                kind: "orientation",
                tag: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_back() {
        for demister_type in DemisterType::ALL {
            let tag = demister_type.to_string();
            assert_eq!(tag.parse::<DemisterType>().unwrap(), demister_type);
        }
        for orientation in Orientation::ALL {
            let tag = orientation.to_string();
            assert_eq!(tag.parse::<Orientation>().unwrap(), orientation);
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let err = "WireMesh".parse::<DemisterType>().unwrap_err();
        assert_eq!(err.kind, "demister type");
        assert_eq!(err.tag, "WireMesh");
        assert_eq!(err.to_string(), "unknown demister type tag: \"WireMesh\"");

        assert!("diagonal".parse::<Orientation>().is_err());
    }
}
