//! Define Noise Basis node parameters

use egui::ComboBox;
use log::warn;
use serde::{Deserialize, Serialize};

use super::super::noise::{
    EnumValueError, NoiseBasis, NoiseInflection, WorleyDistanceMetric, WorleyFunction,
};
use crate::nodes::interface::{NodeData, ParameterChange};
use crate::nodes::Node;

// Parameter map keys
pub const PARAM_BASIS: &str = "basis";
pub const PARAM_INFLECTION: &str = "inflection";
pub const PARAM_WORLEY_METRIC: &str = "worley_metric";
pub const PARAM_WORLEY_FUNCTION: &str = "worley_function";

/// Current selection of the four noise enumerations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineNoiseBasisNode {
    pub basis: NoiseBasis,
    pub inflection: NoiseInflection,
    pub worley_metric: WorleyDistanceMetric,
    pub worley_function: WorleyFunction,
}

impl Default for DefineNoiseBasisNode {
    fn default() -> Self {
        Self {
            basis: NoiseBasis::default(),
            inflection: NoiseInflection::default(),
            worley_metric: WorleyDistanceMetric::default(),
            worley_function: WorleyFunction::default(),
        }
    }
}

/// Decode a parameter value into an enumeration entry. Entries may be stored
/// as wire names or raw ordinals; any other representation keeps the
/// fallback.
fn decode_entry<T: Copy>(
    data: &NodeData,
    from_name: impl Fn(&str) -> Result<T, EnumValueError>,
    from_ordinal: impl Fn(i32) -> Result<T, EnumValueError>,
    fallback: T,
) -> Result<T, EnumValueError> {
    match data {
        NodeData::String(name) => from_name(name),
        NodeData::Integer(ordinal) => from_ordinal(*ordinal),
        _ => Ok(fallback),
    }
}

impl DefineNoiseBasisNode {
    /// Read the current selection out of a node's parameter map.
    ///
    /// Missing parameters fall back to the declared defaults. Present but
    /// invalid values surface a configuration error instead of producing an
    /// undefined entry.
    pub fn from_node(node: &Node) -> Result<Self, EnumValueError> {
        let mut selection = Self::default();
        if let Some(data) = node.parameter(PARAM_BASIS) {
            selection.basis = decode_entry(
                data,
                NoiseBasis::from_name,
                NoiseBasis::from_ordinal,
                selection.basis,
            )?;
        }
        if let Some(data) = node.parameter(PARAM_INFLECTION) {
            selection.inflection = decode_entry(
                data,
                NoiseInflection::from_name,
                NoiseInflection::from_ordinal,
                selection.inflection,
            )?;
        }
        if let Some(data) = node.parameter(PARAM_WORLEY_METRIC) {
            selection.worley_metric = decode_entry(
                data,
                WorleyDistanceMetric::from_name,
                WorleyDistanceMetric::from_ordinal,
                selection.worley_metric,
            )?;
        }
        if let Some(data) = node.parameter(PARAM_WORLEY_FUNCTION) {
            selection.worley_function = decode_entry(
                data,
                WorleyFunction::from_name,
                WorleyFunction::from_ordinal,
                selection.worley_function,
            )?;
        }
        Ok(selection)
    }

    /// Build the parameter panel: one combo box per enumeration, offering
    /// exactly the declared entries. Selecting an entry emits a
    /// `ParameterChange` carrying its wire name.
    pub fn build_interface(node: &mut Node, ui: &mut egui::Ui) -> Vec<ParameterChange> {
        let mut changes = Vec::new();

        let current = match Self::from_node(node) {
            Ok(selection) => selection,
            Err(err) => {
                warn!("Define Noise Basis: {}; showing defaults", err);
                Self::default()
            }
        };

        ui.horizontal(|ui| {
            ui.label("Basis:");
            let mut basis = current.basis;
            ComboBox::from_id_salt("basis")
                .selected_text(basis.name())
                .show_ui(ui, |ui| {
                    for &entry in NoiseBasis::ALL {
                        if ui.selectable_value(&mut basis, entry, entry.name()).changed() {
                            changes.push(ParameterChange {
                                parameter: PARAM_BASIS.to_string(),
                                value: NodeData::String(basis.name().to_string()),
                            });
                        }
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Inflection:");
            let mut inflection = current.inflection;
            ComboBox::from_id_salt("inflection")
                .selected_text(inflection.name())
                .show_ui(ui, |ui| {
                    for &entry in NoiseInflection::ALL {
                        if ui
                            .selectable_value(&mut inflection, entry, entry.name())
                            .changed()
                        {
                            changes.push(ParameterChange {
                                parameter: PARAM_INFLECTION.to_string(),
                                value: NodeData::String(inflection.name().to_string()),
                            });
                        }
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Worley Distance Metric:");
            let mut metric = current.worley_metric;
            ComboBox::from_id_salt("worley_metric")
                .selected_text(metric.name())
                .show_ui(ui, |ui| {
                    for &entry in WorleyDistanceMetric::ALL {
                        if ui.selectable_value(&mut metric, entry, entry.name()).changed() {
                            changes.push(ParameterChange {
                                parameter: PARAM_WORLEY_METRIC.to_string(),
                                value: NodeData::String(metric.name().to_string()),
                            });
                        }
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Worley Function:");
            let mut function = current.worley_function;
            ComboBox::from_id_salt("worley_function")
                .selected_text(function.name())
                .show_ui(ui, |ui| {
                    for &entry in WorleyFunction::ALL {
                        if ui
                            .selectable_value(&mut function, entry, entry.name())
                            .changed()
                        {
                            changes.push(ParameterChange {
                                parameter: PARAM_WORLEY_FUNCTION.to_string(),
                                value: NodeData::String(function.name().to_string()),
                            });
                        }
                    }
                });
        });

        changes
    }
}
