//! GNBG fitness evaluator with competition bookkeeping.

use std::path::Path;

use ndarray::{Array1, ArrayView1, Axis, Zip};

use crate::error::{EvalError, LoadError};
use crate::instance::Instance;
use crate::loader::InstanceLocator;
use crate::summary::EvaluationSummary;
use crate::transform::irregularity;

/// Upper bound on the history reserved up front. Larger budgets grow the
/// history as evaluations come in instead of reserving it all at once.
const HISTORY_RESERVE_LIMIT: usize = 1 << 24;

/// Evaluator for one GNBG instance.
///
/// Every call to [`Gnbg::fitness`] inside the evaluation budget is recorded:
/// its value goes into the history, the best value is updated and the index of
/// the first evaluation within the acceptance threshold of the optimum is
/// latched. Calls past the budget still return the fitness but leave all of
/// this untouched.
///
/// # Example
///
/// ```rust
/// use gnbg::{Gnbg, Instance};
///
/// // D=2, N=1, identity rotation, no irregularity
/// let text = "100 1e-8 2 1 -100 100  0 0  0  1 1  0 0  0 0 0 0  1  1 0 0 1  0  0 0";
/// let mut f = Gnbg::new(Instance::parse(text)?);
/// let x = [1.0_f64, 0.0];
/// assert_eq!(f.fitness(&x[..]), 1.0);
/// assert_eq!(f.evaluations(), 1);
/// # Ok::<(), gnbg::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Gnbg {
	instance: Instance,
	evaluations: usize,
	history: Vec<f64>,
	best_result: Option<f64>,
	acceptance_reach_point: Option<usize>,
	exhaustion_reported: bool,
	// scratch, reused across calls
	displacement: Array1<f64>,
	rotated: Array1<f64>,
}

impl Gnbg {
	/// Build an evaluator with an empty history
	pub fn new(instance: Instance) -> Self {
		let dimension = instance.dimension;
		let history = Vec::with_capacity(instance.max_evaluations.min(HISTORY_RESERVE_LIMIT));
		Self {
			instance,
			evaluations: 0,
			history,
			best_result: None,
			acceptance_reach_point: None,
			exhaustion_reported: false,
			displacement: Array1::zeros(dimension),
			rotated: Array1::zeros(dimension),
		}
	}

	/// Load the instance at `path` and build an evaluator for it
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
		Ok(Self::new(Instance::from_file(path)?))
	}

	/// Load problem `problem` through `locator` and build an evaluator for it
	pub fn from_problem(problem: usize, locator: &InstanceLocator) -> Result<Self, LoadError> {
		Ok(Self::new(locator.load(problem)?))
	}

	/// Evaluate `x` and record the result if the budget allows.
	///
	/// # Panics
	///
	/// Panics if `x` does not have exactly `dimension()` coordinates.
	pub fn fitness<'a, V>(&mut self, x: V) -> f64
	where
		V: Into<ArrayView1<'a, f64>>,
	{
		let x = x.into();
		assert_eq!(
			x.len(),
			self.instance.dimension,
			"GNBG fitness called with a vector of length {} on a {}-dimensional instance",
			x.len(),
			self.instance.dimension
		);
		let result = self.compute(x);
		self.record(result);
		result
	}

	/// Like [`Gnbg::fitness`] but reports a wrong vector length as an error.
	/// Nothing is recorded when an error is returned.
	pub fn try_fitness<'a, V>(&mut self, x: V) -> Result<f64, EvalError>
	where
		V: Into<ArrayView1<'a, f64>>,
	{
		let x = x.into();
		if x.len() != self.instance.dimension {
			return Err(EvalError::DimensionMismatch {
				expected: self.instance.dimension,
				got: x.len(),
			});
		}
		let result = self.compute(x);
		self.record(result);
		Ok(result)
	}

	/// Minimum over components of `sigma + (sum_j h_j y_j^2)^lambda`
	fn compute(&mut self, x: ArrayView1<'_, f64>) -> f64 {
		let inst = &self.instance;
		let mut result = 0.0;

		for i in 0..inst.component_count {
			Zip::from(&mut self.displacement)
				.and(&x)
				.and(inst.min_positions.row(i))
				.for_each(|d, &xj, &mj| *d = xj - mj);

			let rotation = inst.rotation.index_axis(Axis(0), i);
			for (t, row) in self.rotated.iter_mut().zip(rotation.outer_iter()) {
				*t = row
					.iter()
					.zip(self.displacement.iter())
					.fold(0.0, |acc, (&r, &d)| acc + r * d);
			}

			let mu = [inst.mu[[i, 0]], inst.mu[[i, 1]]];
			let omega = [
				inst.omega[[i, 0]],
				inst.omega[[i, 1]],
				inst.omega[[i, 2]],
				inst.omega[[i, 3]],
			];
			let quad = self
				.rotated
				.iter()
				.zip(inst.scale_diag.row(i))
				.fold(0.0, |acc, (&t, &h)| {
					let y = irregularity(t, &mu, &omega);
					acc + y * y * h
				});

			let value = inst.sigma[i] + quad.powf(inst.lambda[i]);
			// ties keep the earlier component
			if i == 0 || value < result {
				result = value;
			}
		}
		result
	}

	fn record(&mut self, result: f64) {
		if self.evaluations >= self.instance.max_evaluations {
			if !self.exhaustion_reported {
				log::warn!(
					"GNBG evaluation budget of {} exhausted, further results are not recorded",
					self.instance.max_evaluations
				);
				self.exhaustion_reported = true;
			}
			return;
		}

		self.history.push(result);
		self.best_result = match self.best_result {
			Some(best) if best < result => Some(best),
			_ => Some(result),
		};
		// signed difference, as used by the competition scoring
		if self.acceptance_reach_point.is_none()
			&& result - self.instance.optimum_value < self.instance.acceptance_threshold
		{
			log::info!(
				"GNBG acceptance threshold reached at evaluation {} (f = {:e})",
				self.evaluations,
				result
			);
			self.acceptance_reach_point = Some(self.evaluations);
		}
		self.evaluations += 1;
	}

	/// The loaded instance
	pub fn instance(&self) -> &Instance {
		&self.instance
	}

	pub fn dimension(&self) -> usize {
		self.instance.dimension
	}

	pub fn component_count(&self) -> usize {
		self.instance.component_count
	}

	pub fn max_evaluations(&self) -> usize {
		self.instance.max_evaluations
	}

	pub fn min_coordinate(&self) -> f64 {
		self.instance.min_coordinate
	}

	pub fn max_coordinate(&self) -> f64 {
		self.instance.max_coordinate
	}

	/// Search box the driving optimizer has to respect
	pub fn bounds(&self) -> Vec<(f64, f64)> {
		self.instance.bounds()
	}

	pub fn optimum_value(&self) -> f64 {
		self.instance.optimum_value
	}

	pub fn optimum_position(&self) -> ArrayView1<'_, f64> {
		self.instance.optimum_position()
	}

	pub fn acceptance_threshold(&self) -> f64 {
		self.instance.acceptance_threshold
	}

	/// Number of recorded evaluations
	pub fn evaluations(&self) -> usize {
		self.evaluations
	}

	pub fn remaining_evaluations(&self) -> usize {
		self.instance.max_evaluations - self.evaluations
	}

	pub fn is_budget_exhausted(&self) -> bool {
		self.evaluations >= self.instance.max_evaluations
	}

	/// Recorded results, slot `k` holding evaluation `k`
	pub fn history(&self) -> &[f64] {
		&self.history
	}

	/// Smallest recorded result, `None` before the first evaluation
	pub fn best_result(&self) -> Option<f64> {
		self.best_result
	}

	/// Distance of the best recorded result to the optimum value
	pub fn best_error(&self) -> Option<f64> {
		self.best_result.map(|b| b - self.instance.optimum_value)
	}

	/// Index of the first evaluation that came within the acceptance threshold
	pub fn acceptance_reach_point(&self) -> Option<usize> {
		self.acceptance_reach_point
	}

	/// Snapshot of the bookkeeping state
	pub fn summary(&self) -> EvaluationSummary {
		EvaluationSummary {
			dimension: self.instance.dimension,
			component_count: self.instance.component_count,
			max_evaluations: self.instance.max_evaluations,
			evaluations: self.evaluations,
			best_result: self.best_result,
			best_error: self.best_error(),
			optimum_value: self.instance.optimum_value,
			acceptance_threshold: self.instance.acceptance_threshold,
			acceptance_reach_point: self.acceptance_reach_point,
		}
	}
}
