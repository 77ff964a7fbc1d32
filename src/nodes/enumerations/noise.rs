//! Native noise enumeration types
//!
//! Four closed enumerations shared by the noise toolchain. Variant order is
//! part of the contract: ordinals are zero-based declaration positions and
//! the wire names are fixed, so downstream patches can rely on both.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected value while decoding an open representation into a closed
/// enumeration. Selection widgets only offer valid entries, so this can only
/// arise from hand-edited documents or wire data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumValueError {
    #[error("{enumeration} has no entry named \"{name}\"")]
    UnknownName {
        enumeration: &'static str,
        name: String,
    },
    #[error("{enumeration} ordinal {ordinal} is out of range (0..{count})")]
    OrdinalOutOfRange {
        enumeration: &'static str,
        ordinal: i32,
        count: usize,
    },
}

/// Basis function used to generate raw noise values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseBasis {
    Random,
    Sine,
    ValueNoise,
    Perlin,
    Simplex,
    WorleyFast,
    Worley,
}

impl NoiseBasis {
    /// Every entry in declaration order. Drives selection widgets.
    pub const ALL: &'static [NoiseBasis] = &[
        Self::Random,
        Self::Sine,
        Self::ValueNoise,
        Self::Perlin,
        Self::Simplex,
        Self::WorleyFast,
        Self::Worley,
    ];

    /// Wire name of this entry.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sine => "sine",
            Self::ValueNoise => "valueNoise",
            Self::Perlin => "perlin",
            Self::Simplex => "simplex",
            Self::WorleyFast => "worleyFast",
            Self::Worley => "worley",
        }
    }

    /// Zero-based declaration position.
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Decode a raw ordinal, rejecting anything outside the declared range.
    pub fn from_ordinal(ordinal: i32) -> Result<Self, EnumValueError> {
        match ordinal {
            0 => Ok(Self::Random),
            1 => Ok(Self::Sine),
            2 => Ok(Self::ValueNoise),
            3 => Ok(Self::Perlin),
            4 => Ok(Self::Simplex),
            5 => Ok(Self::WorleyFast),
            6 => Ok(Self::Worley),
            _ => Err(EnumValueError::OrdinalOutOfRange {
                enumeration: "NoiseBasis",
                ordinal,
                count: Self::ALL.len(),
            }),
        }
    }

    /// Decode a wire name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, EnumValueError> {
        Self::ALL
            .iter()
            .copied()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| EnumValueError::UnknownName {
                enumeration: "NoiseBasis",
                name: name.to_string(),
            })
    }
}

impl Default for NoiseBasis {
    fn default() -> Self {
        Self::Perlin
    }
}

impl fmt::Display for NoiseBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shaping applied on top of the basis signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseInflection {
    None,
    Billow,
    Ridge,
}

impl NoiseInflection {
    pub const ALL: &'static [NoiseInflection] = &[Self::None, Self::Billow, Self::Ridge];

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Billow => "Billow",
            Self::Ridge => "Ridge",
        }
    }

    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn from_ordinal(ordinal: i32) -> Result<Self, EnumValueError> {
        match ordinal {
            0 => Ok(Self::None),
            1 => Ok(Self::Billow),
            2 => Ok(Self::Ridge),
            _ => Err(EnumValueError::OrdinalOutOfRange {
                enumeration: "NoiseInflection",
                ordinal,
                count: Self::ALL.len(),
            }),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, EnumValueError> {
        Self::ALL
            .iter()
            .copied()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| EnumValueError::UnknownName {
                enumeration: "NoiseInflection",
                name: name.to_string(),
            })
    }
}

impl Default for NoiseInflection {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for NoiseInflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Distance metric for Worley cell lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorleyDistanceMetric {
    EuclideanSquared,
    Euclidean,
    Chebyshev,
    Manhattan,
    Minkowski,
    Cubes,
}

impl WorleyDistanceMetric {
    pub const ALL: &'static [WorleyDistanceMetric] = &[
        Self::EuclideanSquared,
        Self::Euclidean,
        Self::Chebyshev,
        Self::Manhattan,
        Self::Minkowski,
        Self::Cubes,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::EuclideanSquared => "EuclideanSquared",
            Self::Euclidean => "Euclidean",
            Self::Chebyshev => "Chebyshev",
            Self::Manhattan => "Manhattan",
            Self::Minkowski => "Minkowski",
            Self::Cubes => "Cubes",
        }
    }

    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn from_ordinal(ordinal: i32) -> Result<Self, EnumValueError> {
        match ordinal {
            0 => Ok(Self::EuclideanSquared),
            1 => Ok(Self::Euclidean),
            2 => Ok(Self::Chebyshev),
            3 => Ok(Self::Manhattan),
            4 => Ok(Self::Minkowski),
            5 => Ok(Self::Cubes),
            _ => Err(EnumValueError::OrdinalOutOfRange {
                enumeration: "WorleyDistanceMetric",
                ordinal,
                count: Self::ALL.len(),
            }),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, EnumValueError> {
        Self::ALL
            .iter()
            .copied()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| EnumValueError::UnknownName {
                enumeration: "WorleyDistanceMetric",
                name: name.to_string(),
            })
    }
}

impl Default for WorleyDistanceMetric {
    fn default() -> Self {
        Self::EuclideanSquared
    }
}

impl fmt::Display for WorleyDistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feature combination applied to the Worley distance samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorleyFunction {
    F1,
    F2,
    F2MinusF1,
    F1PlusF2,
    Average,
    Crackle,
}

impl WorleyFunction {
    pub const ALL: &'static [WorleyFunction] = &[
        Self::F1,
        Self::F2,
        Self::F2MinusF1,
        Self::F1PlusF2,
        Self::Average,
        Self::Crackle,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F2MinusF1 => "F2MinusF1",
            Self::F1PlusF2 => "F1PlusF2",
            Self::Average => "Average",
            Self::Crackle => "Crackle",
        }
    }

    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn from_ordinal(ordinal: i32) -> Result<Self, EnumValueError> {
        match ordinal {
            0 => Ok(Self::F1),
            1 => Ok(Self::F2),
            2 => Ok(Self::F2MinusF1),
            3 => Ok(Self::F1PlusF2),
            4 => Ok(Self::Average),
            5 => Ok(Self::Crackle),
            _ => Err(EnumValueError::OrdinalOutOfRange {
                enumeration: "WorleyFunction",
                ordinal,
                count: Self::ALL.len(),
            }),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, EnumValueError> {
        Self::ALL
            .iter()
            .copied()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| EnumValueError::UnknownName {
                enumeration: "WorleyFunction",
                name: name.to_string(),
            })
    }
}

impl Default for WorleyFunction {
    fn default() -> Self {
        Self::F2MinusF1
    }
}

impl fmt::Display for WorleyFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_names() {
        let expected = [
            "random",
            "sine",
            "valueNoise",
            "perlin",
            "simplex",
            "worleyFast",
            "worley",
        ];
        for (entry, name) in NoiseBasis::ALL.iter().zip(expected) {
            assert_eq!(entry.name(), name);
        }
    }

    #[test]
    fn test_inflection_ordinals() {
        assert_eq!(NoiseInflection::None.ordinal(), 0);
        assert_eq!(NoiseInflection::Billow.ordinal(), 1);
        assert_eq!(NoiseInflection::Ridge.ordinal(), 2);
    }

    #[test]
    fn test_worley_metric_names() {
        let expected = [
            "EuclideanSquared",
            "Euclidean",
            "Chebyshev",
            "Manhattan",
            "Minkowski",
            "Cubes",
        ];
        for (entry, name) in WorleyDistanceMetric::ALL.iter().zip(expected) {
            assert_eq!(entry.name(), name);
        }
    }

    #[test]
    fn test_worley_function_names() {
        let expected = ["F1", "F2", "F2MinusF1", "F1PlusF2", "Average", "Crackle"];
        for (entry, name) in WorleyFunction::ALL.iter().zip(expected) {
            assert_eq!(entry.name(), name);
        }
    }

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (index, entry) in NoiseBasis::ALL.iter().enumerate() {
            assert_eq!(entry.ordinal(), index as i32);
        }
        for (index, entry) in WorleyDistanceMetric::ALL.iter().enumerate() {
            assert_eq!(entry.ordinal(), index as i32);
        }
        for (index, entry) in WorleyFunction::ALL.iter().enumerate() {
            assert_eq!(entry.ordinal(), index as i32);
        }
    }

    #[test]
    fn test_decode_by_ordinal_and_name() {
        for &entry in NoiseBasis::ALL {
            assert_eq!(NoiseBasis::from_ordinal(entry.ordinal()), Ok(entry));
            assert_eq!(NoiseBasis::from_name(entry.name()), Ok(entry));
        }
        assert_eq!(NoiseInflection::from_ordinal(2), Ok(NoiseInflection::Ridge));
        assert_eq!(
            WorleyFunction::from_name("F2MinusF1"),
            Ok(WorleyFunction::F2MinusF1)
        );
    }

    #[test]
    fn test_decode_rejects_out_of_range_ordinals() {
        assert!(matches!(
            NoiseBasis::from_ordinal(7),
            Err(EnumValueError::OrdinalOutOfRange { ordinal: 7, .. })
        ));
        assert!(matches!(
            NoiseInflection::from_ordinal(-1),
            Err(EnumValueError::OrdinalOutOfRange { ordinal: -1, .. })
        ));
        assert!(matches!(
            WorleyDistanceMetric::from_ordinal(6),
            Err(EnumValueError::OrdinalOutOfRange { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_names() {
        // Wire names are case-sensitive; "Perlin" is not an entry.
        assert!(NoiseBasis::from_name("Perlin").is_err());
        assert!(WorleyFunction::from_name("F3").is_err());
        assert!(NoiseInflection::from_name("").is_err());
    }

    #[test]
    fn test_defaults_match_declared_pin_defaults() {
        assert_eq!(NoiseBasis::default(), NoiseBasis::Perlin);
        assert_eq!(NoiseInflection::default(), NoiseInflection::None);
        assert_eq!(
            WorleyDistanceMetric::default(),
            WorleyDistanceMetric::EuclideanSquared
        );
        assert_eq!(WorleyFunction::default(), WorleyFunction::F2MinusF1);
    }

    #[test]
    fn test_display_uses_wire_names() {
        assert_eq!(NoiseBasis::ValueNoise.to_string(), "valueNoise");
        assert_eq!(WorleyDistanceMetric::EuclideanSquared.to_string(), "EuclideanSquared");
    }
}
