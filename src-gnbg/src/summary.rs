//! Serializable snapshot of an evaluator's bookkeeping

use serde::{Deserialize, Serialize};

/// State of a [`crate::Gnbg`] evaluator at one point of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
	/// Problem dimension
	pub dimension: usize,
	/// Number of landscape components
	pub component_count: usize,
	/// Evaluation budget
	pub max_evaluations: usize,
	/// Evaluations recorded so far
	pub evaluations: usize,
	/// Best recorded value
	pub best_result: Option<f64>,
	/// Best recorded value minus the optimum value
	pub best_error: Option<f64>,
	/// Known optimum value
	pub optimum_value: f64,
	/// Tolerance used for the acceptance reach point
	pub acceptance_threshold: f64,
	/// First evaluation within the acceptance threshold
	pub acceptance_reach_point: Option<usize>,
}

impl EvaluationSummary {
	/// Render as pretty-printed JSON
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string_pretty(self)
	}
}
