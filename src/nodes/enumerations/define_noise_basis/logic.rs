//! Define Noise Basis evaluation logic

use std::collections::HashMap;

use log::{debug, warn};

use super::parameters::DefineNoiseBasisNode;
use super::super::noise::{
    EnumValueError, NoiseBasis, NoiseInflection, WorleyDistanceMetric, WorleyFunction,
};
use super::{PIN_BASIS, PIN_INFLECTION, PIN_WORLEY_FUNCTION, PIN_WORLEY_METRIC};
use crate::nodes::interface::NodeData;

/// Evaluation state for the Define Noise Basis node.
///
/// Output slots are retained across evaluations. Each evaluation pass
/// rewrites a slot only when its input differs from the value observed at
/// the previous pass; unchanged inputs leave their slots untouched. The
/// first pass treats every input as changed.
#[derive(Debug, Clone, Default)]
pub struct DefineNoiseBasisLogic {
    current: DefineNoiseBasisNode,
    seen: Option<DefineNoiseBasisNode>,
    outputs: HashMap<String, NodeData>,
}

impl DefineNoiseBasisLogic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input selection
    pub fn selection(&self) -> DefineNoiseBasisNode {
        self.current
    }

    pub fn set_basis(&mut self, basis: NoiseBasis) {
        self.current.basis = basis;
    }

    pub fn set_inflection(&mut self, inflection: NoiseInflection) {
        self.current.inflection = inflection;
    }

    pub fn set_worley_metric(&mut self, metric: WorleyDistanceMetric) {
        self.current.worley_metric = metric;
    }

    pub fn set_worley_function(&mut self, function: WorleyFunction) {
        self.current.worley_function = function;
    }

    /// Replace the whole selection, as read from the node's parameters
    pub fn set_selection(&mut self, selection: DefineNoiseBasisNode) {
        self.current = selection;
    }

    /// Apply a value delivered on an input pin.
    ///
    /// Enumeration entries may arrive as wire names or raw ordinals.
    /// Invalid names and out-of-range ordinals are rejected; values for
    /// unknown pins or with unusable types are ignored with a warning.
    pub fn apply_input(&mut self, pin: &str, data: &NodeData) -> Result<(), EnumValueError> {
        match (pin, data) {
            (PIN_BASIS, NodeData::String(name)) => {
                self.current.basis = NoiseBasis::from_name(name)?;
            }
            (PIN_BASIS, NodeData::Integer(ordinal)) => {
                self.current.basis = NoiseBasis::from_ordinal(*ordinal)?;
            }
            (PIN_INFLECTION, NodeData::String(name)) => {
                self.current.inflection = NoiseInflection::from_name(name)?;
            }
            (PIN_INFLECTION, NodeData::Integer(ordinal)) => {
                self.current.inflection = NoiseInflection::from_ordinal(*ordinal)?;
            }
            (PIN_WORLEY_METRIC, NodeData::String(name)) => {
                self.current.worley_metric = WorleyDistanceMetric::from_name(name)?;
            }
            (PIN_WORLEY_METRIC, NodeData::Integer(ordinal)) => {
                self.current.worley_metric = WorleyDistanceMetric::from_ordinal(*ordinal)?;
            }
            (PIN_WORLEY_FUNCTION, NodeData::String(name)) => {
                self.current.worley_function = WorleyFunction::from_name(name)?;
            }
            (PIN_WORLEY_FUNCTION, NodeData::Integer(ordinal)) => {
                self.current.worley_function = WorleyFunction::from_ordinal(*ordinal)?;
            }
            _ => {
                warn!(
                    "ignoring {} value on pin \"{}\"",
                    data.type_name(),
                    pin
                );
            }
        }
        Ok(())
    }

    /// Run one evaluation pass and return the retained output slots.
    ///
    /// Basis, Worley Distance Metric, and Worley Function project to their
    /// wire names; Inflection projects to its ordinal. The "Defines" pin is
    /// declared on the node but nothing drives it.
    pub fn evaluate(&mut self) -> &HashMap<String, NodeData> {
        let seen = self.seen;

        if seen.map_or(true, |s| s.basis != self.current.basis) {
            debug!("basis -> {}", self.current.basis);
            self.outputs.insert(
                PIN_BASIS.to_string(),
                NodeData::String(self.current.basis.name().to_string()),
            );
        }
        if seen.map_or(true, |s| s.inflection != self.current.inflection) {
            debug!("inflection -> {}", self.current.inflection.ordinal());
            self.outputs.insert(
                PIN_INFLECTION.to_string(),
                NodeData::Integer(self.current.inflection.ordinal()),
            );
        }
        if seen.map_or(true, |s| s.worley_metric != self.current.worley_metric) {
            debug!("worley distance metric -> {}", self.current.worley_metric);
            self.outputs.insert(
                PIN_WORLEY_METRIC.to_string(),
                NodeData::String(self.current.worley_metric.name().to_string()),
            );
        }
        if seen.map_or(true, |s| s.worley_function != self.current.worley_function) {
            debug!("worley function -> {}", self.current.worley_function);
            self.outputs.insert(
                PIN_WORLEY_FUNCTION.to_string(),
                NodeData::String(self.current.worley_function.name().to_string()),
            );
        }

        self.seen = Some(self.current);
        &self.outputs
    }

    /// Retained output slots
    pub fn outputs(&self) -> &HashMap<String, NodeData> {
        &self.outputs
    }
}

#[cfg(test)]
mod tests {
    use super::super::PIN_DEFINES;
    use super::*;

    #[test]
    fn test_first_evaluation_writes_all_mapped_outputs() {
        let mut logic = DefineNoiseBasisLogic::new();
        let outputs = logic.evaluate();

        assert_eq!(outputs.len(), 4);
        assert_eq!(
            outputs.get(PIN_BASIS),
            Some(&NodeData::String("perlin".to_string()))
        );
        assert_eq!(outputs.get(PIN_INFLECTION), Some(&NodeData::Integer(0)));
        assert_eq!(
            outputs.get(PIN_WORLEY_METRIC),
            Some(&NodeData::String("EuclideanSquared".to_string()))
        );
        assert_eq!(
            outputs.get(PIN_WORLEY_FUNCTION),
            Some(&NodeData::String("F2MinusF1".to_string()))
        );
    }

    #[test]
    fn test_defines_is_never_written() {
        let mut logic = DefineNoiseBasisLogic::new();
        logic.evaluate();
        logic.set_basis(NoiseBasis::Worley);
        logic.set_inflection(NoiseInflection::Ridge);
        logic.set_worley_metric(WorleyDistanceMetric::Manhattan);
        logic.set_worley_function(WorleyFunction::Crackle);
        logic.evaluate();
        assert!(logic.outputs().get(PIN_DEFINES).is_none());
    }

    #[test]
    fn test_unchanged_inputs_leave_outputs_untouched() {
        let mut logic = DefineNoiseBasisLogic::new();
        logic.evaluate();
        let before = logic.outputs().clone();

        // Nothing changed between the passes.
        logic.evaluate();
        assert_eq!(logic.outputs(), &before);

        // Re-setting the same values does not count as a change either.
        logic.set_basis(NoiseBasis::Perlin);
        logic.set_inflection(NoiseInflection::None);
        logic.evaluate();
        assert_eq!(logic.outputs(), &before);
    }

    #[test]
    fn test_single_change_updates_only_its_output() {
        let mut logic = DefineNoiseBasisLogic::new();
        logic.evaluate();

        logic.set_inflection(NoiseInflection::Billow);
        let outputs = logic.evaluate();

        assert_eq!(outputs.get(PIN_INFLECTION), Some(&NodeData::Integer(1)));
        // The other three slots keep their previous values.
        assert_eq!(
            outputs.get(PIN_BASIS),
            Some(&NodeData::String("perlin".to_string()))
        );
        assert_eq!(
            outputs.get(PIN_WORLEY_METRIC),
            Some(&NodeData::String("EuclideanSquared".to_string()))
        );
        assert_eq!(
            outputs.get(PIN_WORLEY_FUNCTION),
            Some(&NodeData::String("F2MinusF1".to_string()))
        );
    }

    #[test]
    fn test_all_changed_updates_independently() {
        let mut logic = DefineNoiseBasisLogic::new();
        logic.evaluate();

        logic.set_basis(NoiseBasis::Simplex);
        logic.set_inflection(NoiseInflection::Ridge);
        logic.set_worley_metric(WorleyDistanceMetric::Chebyshev);
        logic.set_worley_function(WorleyFunction::Average);
        let outputs = logic.evaluate();

        assert_eq!(
            outputs.get(PIN_BASIS),
            Some(&NodeData::String("simplex".to_string()))
        );
        assert_eq!(outputs.get(PIN_INFLECTION), Some(&NodeData::Integer(2)));
        assert_eq!(
            outputs.get(PIN_WORLEY_METRIC),
            Some(&NodeData::String("Chebyshev".to_string()))
        );
        assert_eq!(
            outputs.get(PIN_WORLEY_FUNCTION),
            Some(&NodeData::String("Average".to_string()))
        );
    }

    #[test]
    fn test_revert_before_evaluation_is_not_a_change() {
        let mut logic = DefineNoiseBasisLogic::new();
        logic.set_basis(NoiseBasis::Sine);
        logic.evaluate();
        let before = logic.outputs().clone();

        // Flip away and back between passes; the net value is unchanged.
        logic.set_basis(NoiseBasis::Worley);
        logic.set_basis(NoiseBasis::Sine);
        logic.evaluate();
        assert_eq!(logic.outputs(), &before);
    }

    #[test]
    fn test_apply_input_decodes_names_and_ordinals() {
        let mut logic = DefineNoiseBasisLogic::new();
        logic
            .apply_input(PIN_BASIS, &NodeData::String("valueNoise".to_string()))
            .unwrap();
        logic.apply_input(PIN_INFLECTION, &NodeData::Integer(2)).unwrap();

        let selection = logic.selection();
        assert_eq!(selection.basis, NoiseBasis::ValueNoise);
        assert_eq!(selection.inflection, NoiseInflection::Ridge);
    }

    #[test]
    fn test_apply_input_rejects_invalid_values() {
        let mut logic = DefineNoiseBasisLogic::new();
        assert!(logic
            .apply_input(PIN_BASIS, &NodeData::String("Perlin".to_string()))
            .is_err());
        assert!(logic
            .apply_input(PIN_WORLEY_METRIC, &NodeData::Integer(-1))
            .is_err());
        // Rejected values leave the selection unchanged.
        assert_eq!(logic.selection(), DefineNoiseBasisNode::default());
    }

    #[test]
    fn test_apply_input_ignores_unknown_pins() {
        let mut logic = DefineNoiseBasisLogic::new();
        assert!(logic
            .apply_input("Defines", &NodeData::String("anything".to_string()))
            .is_ok());
        assert!(logic.apply_input(PIN_BASIS, &NodeData::Float(1.0)).is_ok());
        assert_eq!(logic.selection(), DefineNoiseBasisNode::default());
    }
}
