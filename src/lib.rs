//! Noise enumeration nodes for node-based visual programming
//!
//! This library packages the Define Noise Basis node: the native noise
//! enumeration types, their selection interface, and the change-gated
//! projection of the selected entries onto output pins.

pub mod nodes;

// Re-export commonly used types
pub use nodes::{
    DataType, Node, NodeCategory, NodeData, NodeFactory, NodeMetadata, NodeRegistry,
    ParameterChange,
};

// Re-export commonly used egui types
pub use egui::{Color32, Pos2, Vec2};
