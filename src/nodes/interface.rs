//! Node interface types for parameter control

use serde::{Deserialize, Serialize};

/// Types of interface panels that nodes can specify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelType {
    /// Parameter panels for node settings (default)
    Parameter,
    /// Viewer panels for displaying output/results
    Viewer,
    /// Editor panels for complex editing interfaces
    Editor,
}

/// Core data types that flow through parameter maps and pins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeData {
    Float(f32),
    Integer(i32),
    String(String),
    Boolean(bool),
    None,
}

impl NodeData {
    /// Get a human-readable name for this value's type
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeData::Float(_) => "Float",
            NodeData::Integer(_) => "Integer",
            NodeData::String(_) => "String",
            NodeData::Boolean(_) => "Boolean",
            NodeData::None => "None",
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            NodeData::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            NodeData::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeData::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            NodeData::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

/// Parameter change notification emitted by interface widgets
#[derive(Debug, Clone)]
pub struct ParameterChange {
    pub parameter: String,
    pub value: NodeData,
}
