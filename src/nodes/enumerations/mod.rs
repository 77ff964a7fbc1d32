//! Enumeration nodes - native enumeration definitions exposed to the graph

pub mod define_noise_basis;
pub mod noise;

pub use define_noise_basis::{DefineNoiseBasisLogic, DefineNoiseBasisNode};
pub use noise::{
    EnumValueError, NoiseBasis, NoiseInflection, WorleyDistanceMetric, WorleyFunction,
};
