//! Node system - core data structures and the enumeration nodes

// Core node system modules
pub mod factory;
pub mod interface;
pub mod node;
pub mod port;

// Node implementations
pub mod enumerations;

// Re-export core types
pub use node::{Node, NodeId};
pub use port::{Port, PortId, PortType};

// Re-export factory types
pub use factory::{
    DataType, NodeCategory, NodeFactory, NodeMetadata, NodeRegistry, PortDefinition,
};

// Re-export interface types
pub use interface::{NodeData, PanelType, ParameterChange};
