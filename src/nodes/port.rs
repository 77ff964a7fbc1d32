//! Port types and functionality for node pins

use egui::Pos2;
use serde::{Deserialize, Serialize};

use super::factory::DataType;

/// Unique identifier for a port
pub type PortId = usize;

/// Type of port (input or output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortType {
    Input,
    Output,
}

/// A named pin on a node. Carries the data type it accepts or produces so
/// the host can validate wiring without consulting the node's metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub port_type: PortType,
    pub data_type: DataType,
    #[serde(with = "pos2_serde")]
    pub position: Pos2,
}

impl Port {
    /// Creates a new port
    pub fn new(id: PortId, name: impl Into<String>, port_type: PortType, data_type: DataType) -> Self {
        Self {
            id,
            name: name.into(),
            port_type,
            data_type,
            position: Pos2::ZERO,
        }
    }

    /// Checks if this port is an input
    pub fn is_input(&self) -> bool {
        matches!(self.port_type, PortType::Input)
    }

    /// Checks if this port is an output
    pub fn is_output(&self) -> bool {
        matches!(self.port_type, PortType::Output)
    }
}

// Serde helper module for Pos2
mod pos2_serde {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(pos: &Pos2, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [pos.x, pos.y].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pos2, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = <[f32; 2]>::deserialize(deserializer)?;
        Ok(Pos2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_direction() {
        let input = Port::new(0, "Basis", PortType::Input, DataType::Enum);
        let output = Port::new(0, "Basis", PortType::Output, DataType::String);
        assert!(input.is_input());
        assert!(!input.is_output());
        assert!(output.is_output());
        assert_eq!(output.data_type, DataType::String);
    }
}
