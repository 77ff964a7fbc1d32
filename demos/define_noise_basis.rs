//! Headless driver for the Define Noise Basis node
//!
//! Creates the node through the registry, runs a few evaluation passes with
//! changing selections, and prints the retained output slots as JSON.

use egui::Pos2;
use noise_enums::nodes::enumerations::define_noise_basis::{
    DefineNoiseBasisLogic, DefineNoiseBasisNode, PIN_INFLECTION,
};
use noise_enums::nodes::enumerations::{NoiseBasis, WorleyFunction};
use noise_enums::nodes::{NodeData, NodeRegistry};

fn main() {
    env_logger::init();

    let mut registry = NodeRegistry::new();
    registry.register::<DefineNoiseBasisNode>();

    let node = registry
        .create_node("Enumerations_DefineNoiseBasis", Pos2::new(120.0, 80.0))
        .expect("node type is registered");
    println!(
        "created \"{}\" with {} inputs and {} outputs",
        node.title,
        node.inputs.len(),
        node.outputs.len()
    );

    let mut logic = DefineNoiseBasisLogic::new();

    // First pass projects the defaults.
    logic.evaluate();
    println!("defaults:\n{}", dump(logic.outputs()));

    // Select a different basis and Worley function.
    logic.set_basis(NoiseBasis::Worley);
    logic.set_worley_function(WorleyFunction::Crackle);
    logic.evaluate();
    println!("after selection:\n{}", dump(logic.outputs()));

    // Feed an ordinal over the Inflection pin, as a wire would.
    logic
        .apply_input(PIN_INFLECTION, &NodeData::Integer(2))
        .expect("ordinal 2 is in range");
    logic.evaluate();
    println!("after wire input:\n{}", dump(logic.outputs()));
}

fn dump(outputs: &std::collections::HashMap<String, NodeData>) -> String {
    serde_json::to_string_pretty(outputs).expect("outputs serialize")
}
