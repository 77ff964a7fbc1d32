//! Define Noise Basis node module

pub mod logic;
pub mod parameters;

pub use logic::DefineNoiseBasisLogic;
pub use parameters::DefineNoiseBasisNode;

use crate::nodes::interface::NodeData;
use crate::nodes::NodeFactory;

// Pin names, shared by the metadata and the evaluation logic
pub const PIN_BASIS: &str = "Basis";
pub const PIN_INFLECTION: &str = "Inflection";
pub const PIN_WORLEY_METRIC: &str = "Worley Distance Metric";
pub const PIN_WORLEY_FUNCTION: &str = "Worley Function";
pub const PIN_DEFINES: &str = "Defines";

impl NodeFactory for parameters::DefineNoiseBasisNode {
    fn metadata() -> crate::nodes::NodeMetadata {
        use crate::nodes::{DataType, PortDefinition};

        crate::nodes::NodeMetadata::new(
            "Enumerations_DefineNoiseBasis",
            "Define Noise Basis",
            crate::nodes::NodeCategory::enumerations(),
            "Exposes the native noise enumeration types as selectable inputs and emits the selected entries downstream",
        )
        .with_color(egui::Color32::from_rgb(110, 130, 90))
        .with_icon("🎛️")
        .with_tags(vec!["noise", "enumerations", "worley"])
        .with_inputs(vec![
            PortDefinition::optional(PIN_BASIS, DataType::Enum)
                .with_description("Noise basis entry, defaults to perlin"),
            PortDefinition::optional(PIN_INFLECTION, DataType::Enum)
                .with_description("Inflection entry, defaults to None"),
            PortDefinition::optional(PIN_WORLEY_METRIC, DataType::Enum)
                .with_description("Worley distance metric entry, defaults to EuclideanSquared"),
            PortDefinition::optional(PIN_WORLEY_FUNCTION, DataType::Enum)
                .with_description("Worley function entry, defaults to F2MinusF1"),
        ])
        .with_outputs(vec![
            PortDefinition::optional(PIN_BASIS, DataType::String)
                .with_description("Wire name of the selected basis"),
            PortDefinition::optional(PIN_INFLECTION, DataType::Integer)
                .with_description("Ordinal of the selected inflection"),
            PortDefinition::optional(PIN_WORLEY_METRIC, DataType::String)
                .with_description("Wire name of the selected distance metric"),
            PortDefinition::optional(PIN_WORLEY_FUNCTION, DataType::String)
                .with_description("Wire name of the selected function"),
            PortDefinition::optional(PIN_DEFINES, DataType::String)
                .with_description("Declared but not driven by evaluation"),
        ])
    }

    fn create(position: egui::Pos2) -> crate::nodes::Node {
        let meta = Self::metadata();
        let mut node =
            crate::nodes::Node::new(0, meta.display_name, position).with_size(meta.size_hint);
        node.set_type_id(meta.node_type);
        node.color = meta.color;

        for input in &meta.inputs {
            node.add_input(&input.name, input.data_type);
        }
        for output in &meta.outputs {
            node.add_output(&output.name, output.data_type);
        }
        node.set_panel_type(meta.panel_type);

        // Seed the parameter map with the declared enum defaults
        let defaults = parameters::DefineNoiseBasisNode::default();
        node.parameters.insert(
            parameters::PARAM_BASIS.to_string(),
            NodeData::String(defaults.basis.name().to_string()),
        );
        node.parameters.insert(
            parameters::PARAM_INFLECTION.to_string(),
            NodeData::String(defaults.inflection.name().to_string()),
        );
        node.parameters.insert(
            parameters::PARAM_WORLEY_METRIC.to_string(),
            NodeData::String(defaults.worley_metric.name().to_string()),
        );
        node.parameters.insert(
            parameters::PARAM_WORLEY_FUNCTION.to_string(),
            NodeData::String(defaults.worley_function.name().to_string()),
        );

        node.update_port_positions();
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::DataType;
    use egui::Pos2;

    #[test]
    fn test_node_creation() {
        let node = DefineNoiseBasisNode::create(Pos2::new(100.0, 100.0));
        assert_eq!(node.title, "Define Noise Basis");
        assert_eq!(node.type_id, "Enumerations_DefineNoiseBasis");
        assert_eq!(node.inputs.len(), 4);
        assert_eq!(node.outputs.len(), 5);

        let input_names: Vec<&str> = node.inputs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            input_names,
            vec![PIN_BASIS, PIN_INFLECTION, PIN_WORLEY_METRIC, PIN_WORLEY_FUNCTION]
        );

        let output_names: Vec<&str> = node.outputs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            output_names,
            vec![
                PIN_BASIS,
                PIN_INFLECTION,
                PIN_WORLEY_METRIC,
                PIN_WORLEY_FUNCTION,
                PIN_DEFINES
            ]
        );
    }

    #[test]
    fn test_node_creation_seeds_default_parameters() {
        let node = DefineNoiseBasisNode::create(Pos2::ZERO);
        assert_eq!(
            node.parameter(parameters::PARAM_BASIS),
            Some(&NodeData::String("perlin".to_string()))
        );
        assert_eq!(
            node.parameter(parameters::PARAM_INFLECTION),
            Some(&NodeData::String("None".to_string()))
        );
        assert_eq!(
            node.parameter(parameters::PARAM_WORLEY_METRIC),
            Some(&NodeData::String("EuclideanSquared".to_string()))
        );
        assert_eq!(
            node.parameter(parameters::PARAM_WORLEY_FUNCTION),
            Some(&NodeData::String("F2MinusF1".to_string()))
        );
    }

    #[test]
    fn test_metadata_pin_types() {
        let meta = DefineNoiseBasisNode::metadata();
        assert!(meta.inputs.iter().all(|pin| pin.data_type == DataType::Enum));
        assert_eq!(meta.outputs[1].data_type, DataType::Integer);
        assert_eq!(meta.outputs[4].name, PIN_DEFINES);
    }
}
