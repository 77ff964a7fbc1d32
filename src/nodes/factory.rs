//! Node factory system with self-registration and rich metadata

use std::collections::{BTreeMap, HashMap};

use egui::{Color32, Pos2, Vec2};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::nodes::interface::PanelType;
use crate::nodes::Node;

/// Data types that can flow through ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Floating point number
    Float,
    /// Integer number
    Integer,
    /// Text string
    String,
    /// Boolean value
    Boolean,
    /// Entry of a closed enumeration
    Enum,
    /// Any type (for generic ports)
    Any,
}

impl DataType {
    /// Check if this data type can connect to another
    pub fn can_connect_to(&self, other: &DataType) -> bool {
        self == other || *self == DataType::Any || *other == DataType::Any
    }

    /// Get a human-readable name for this data type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Float => "Float",
            DataType::Integer => "Integer",
            DataType::String => "String",
            DataType::Boolean => "Boolean",
            DataType::Enum => "Enum",
            DataType::Any => "Any",
        }
    }

    /// Get a color representing this data type
    pub fn color(&self) -> Color32 {
        match self {
            DataType::Float => Color32::from_rgb(100, 150, 255),  // Blue
            DataType::Integer => Color32::from_rgb(255, 150, 50), // Orange
            DataType::String => Color32::from_rgb(100, 255, 100), // Green
            DataType::Boolean => Color32::from_rgb(255, 100, 255), // Magenta
            DataType::Enum => Color32::from_rgb(200, 180, 90),    // Gold
            DataType::Any => Color32::from_rgb(150, 150, 150),    // Gray
        }
    }
}

/// Hierarchical category system for organizing nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeCategory {
    path: Vec<String>,
}

impl NodeCategory {
    /// Create a new category from path components
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get the full path as a slice
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Get the category name (last component)
    pub fn name(&self) -> &str {
        self.path.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Get display string for UI
    pub fn display_string(&self) -> String {
        self.path.join(" > ")
    }

    /// Get standard enumerations category
    pub fn enumerations() -> Self {
        Self::new(&["Enumerations"])
    }
}

/// Port definition for node creation
#[derive(Debug, Clone)]
pub struct PortDefinition {
    pub name: String,
    pub data_type: DataType,
    pub optional: bool,
    pub description: Option<String>,
}

impl PortDefinition {
    /// Create a required port
    pub fn required(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            optional: false,
            description: None,
        }
    }

    /// Create an optional port
    pub fn optional(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            optional: true,
            description: None,
        }
    }

    /// Add description to port
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Rich metadata for nodes - the single source of truth for node behavior
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    // Core identity
    pub node_type: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,

    // Visual appearance
    pub color: Color32,
    pub icon: &'static str,
    pub size_hint: Vec2,

    // Organization
    pub category: NodeCategory,
    pub tags: Vec<&'static str>,

    // Interface behavior
    pub panel_type: PanelType,

    // Connectivity
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,
}

impl NodeMetadata {
    /// Create node metadata with sensible defaults
    pub fn new(
        node_type: &'static str,
        display_name: &'static str,
        category: NodeCategory,
        description: &'static str,
    ) -> Self {
        Self {
            node_type,
            display_name,
            description,
            version: "1.0",
            color: Color32::from_rgb(100, 100, 100),
            icon: "⚡",
            size_hint: Vec2::new(150.0, 30.0),
            category,
            tags: vec![],
            panel_type: PanelType::Parameter,
            inputs: vec![],
            outputs: vec![],
        }
    }

    /// Builder pattern methods for fluent configuration
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_size_hint(mut self, size: Vec2) -> Self {
        self.size_hint = size;
        self
    }

    pub fn with_panel_type(mut self, panel_type: PanelType) -> Self {
        self.panel_type = panel_type;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_tags(mut self, tags: Vec<&'static str>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }
}

/// Node factory trait with rich metadata
pub trait NodeFactory: Send + Sync {
    /// Get comprehensive node metadata
    fn metadata() -> NodeMetadata
    where
        Self: Sized;

    /// Create a node instance at the given position
    fn create(position: Pos2) -> Node
    where
        Self: Sized,
    {
        let meta = Self::metadata();
        let mut node = Node::new(0, meta.display_name, position).with_size(meta.size_hint);
        node.set_type_id(meta.node_type);
        node.color = meta.color;

        for input in &meta.inputs {
            node.add_input(&input.name, input.data_type);
        }

        for output in &meta.outputs {
            node.add_output(&output.name, output.data_type);
        }

        node.set_panel_type(meta.panel_type);
        node.update_port_positions();
        node
    }
}

/// Function pointer types for creating nodes
type NodeCreator = fn(Pos2) -> Node;
type MetadataProvider = fn() -> NodeMetadata;

/// Registry the host uses to instantiate nodes by type name
pub struct NodeRegistry {
    creators: BTreeMap<String, NodeCreator>,
    metadata_providers: BTreeMap<String, MetadataProvider>,
    categories: HashMap<NodeCategory, Vec<String>>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            creators: BTreeMap::new(),
            metadata_providers: BTreeMap::new(),
            categories: HashMap::new(),
        }
    }

    /// Register a node factory
    pub fn register<T: NodeFactory + 'static>(&mut self) {
        let metadata = T::metadata();
        let node_type = metadata.node_type.to_string();
        debug!("Registering node type: {}", node_type);

        self.creators.insert(node_type.clone(), T::create);
        self.metadata_providers.insert(node_type.clone(), T::metadata);

        self.categories
            .entry(metadata.category.clone())
            .or_default()
            .push(node_type);
    }

    /// Create a node by type name
    pub fn create_node(&self, node_type: &str, position: Pos2) -> Option<Node> {
        match self.creators.get(node_type) {
            Some(creator) => {
                debug!("Creating node of type: {}", node_type);
                Some(creator(position))
            }
            None => {
                warn!("No factory registered for node type: {}", node_type);
                None
            }
        }
    }

    /// Get metadata for a node type without creating the node
    pub fn get_node_metadata(&self, node_type: &str) -> Option<NodeMetadata> {
        self.metadata_providers.get(node_type).map(|provider| provider())
    }

    /// All registered node type names, sorted
    pub fn node_types(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(|key| key.as_str())
    }

    /// Node type names registered under a category
    pub fn nodes_in_category(&self, category: &NodeCategory) -> &[String] {
        self.categories
            .get(category)
            .map(|types| types.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_connectivity() {
        assert!(DataType::String.can_connect_to(&DataType::String));
        assert!(DataType::Enum.can_connect_to(&DataType::Any));
        assert!(!DataType::Enum.can_connect_to(&DataType::Integer));
    }

    #[test]
    fn test_category_display() {
        let category = NodeCategory::enumerations();
        assert_eq!(category.name(), "Enumerations");
        assert_eq!(category.display_string(), "Enumerations");
        assert_eq!(NodeCategory::new(&["Noise", "Worley"]).display_string(), "Noise > Worley");
    }

    #[test]
    fn test_registry_rejects_unknown_type() {
        let registry = NodeRegistry::new();
        assert!(registry.create_node("Enumerations_Missing", Pos2::ZERO).is_none());
        assert!(registry.get_node_metadata("Enumerations_Missing").is_none());
    }
}
