//! In-memory description of one GNBG landscape

use ndarray::{Array1, Array2, Array3, ArrayView1, ArrayView2, Axis};

/// A fully loaded GNBG problem instance.
///
/// Per-component parameters live in contiguous arrays whose first axis is the
/// component index. The instance is never modified once built.
#[derive(Debug, Clone)]
pub struct Instance {
	pub(crate) max_evaluations: usize,
	pub(crate) acceptance_threshold: f64,
	pub(crate) dimension: usize,
	pub(crate) component_count: usize,
	pub(crate) min_coordinate: f64,
	pub(crate) max_coordinate: f64,
	/// (N, D) reference point of each component
	pub(crate) min_positions: Array2<f64>,
	/// (N) base value of each component
	pub(crate) sigma: Array1<f64>,
	/// (N, D) per-axis quadratic weights
	pub(crate) scale_diag: Array2<f64>,
	/// (N, 2) irregularity magnitudes: positive side, negative side
	pub(crate) mu: Array2<f64>,
	/// (N, 4) irregularity frequencies: two positive side, two negative side
	pub(crate) omega: Array2<f64>,
	/// (N) exponent applied to the quadratic form
	pub(crate) lambda: Array1<f64>,
	/// (N, D, D) rotation matrices indexed (component, row, column)
	pub(crate) rotation: Array3<f64>,
	pub(crate) optimum_value: f64,
	pub(crate) optimum_position: Array1<f64>,
}

/// Borrowed view over the parameters of a single component.
#[derive(Debug, Clone, Copy)]
pub struct ComponentView<'a> {
	pub min_position: ArrayView1<'a, f64>,
	pub sigma: f64,
	pub scale_diag: ArrayView1<'a, f64>,
	pub mu: ArrayView1<'a, f64>,
	pub omega: ArrayView1<'a, f64>,
	pub lambda: f64,
	pub rotation: ArrayView2<'a, f64>,
}

impl Instance {
	/// Problem dimension D
	pub fn dimension(&self) -> usize {
		self.dimension
	}

	/// Number of components N
	pub fn component_count(&self) -> usize {
		self.component_count
	}

	/// Evaluation budget
	pub fn max_evaluations(&self) -> usize {
		self.max_evaluations
	}

	pub fn acceptance_threshold(&self) -> f64 {
		self.acceptance_threshold
	}

	pub fn min_coordinate(&self) -> f64 {
		self.min_coordinate
	}

	pub fn max_coordinate(&self) -> f64 {
		self.max_coordinate
	}

	/// Search box as one `(lower, upper)` pair per dimension
	pub fn bounds(&self) -> Vec<(f64, f64)> {
		vec![(self.min_coordinate, self.max_coordinate); self.dimension]
	}

	/// Known global optimum value
	pub fn optimum_value(&self) -> f64 {
		self.optimum_value
	}

	/// Known global optimum location
	pub fn optimum_position(&self) -> ArrayView1<'_, f64> {
		self.optimum_position.view()
	}

	/// Parameters of component `i`.
	///
	/// # Panics
	///
	/// Panics if `i >= component_count()`.
	pub fn component(&self, i: usize) -> ComponentView<'_> {
		assert!(
			i < self.component_count,
			"component index {} out of range (component count {})",
			i,
			self.component_count
		);
		ComponentView {
			min_position: self.min_positions.row(i),
			sigma: self.sigma[i],
			scale_diag: self.scale_diag.row(i),
			mu: self.mu.row(i),
			omega: self.omega.row(i),
			lambda: self.lambda[i],
			rotation: self.rotation.index_axis(Axis(0), i),
		}
	}

	/// Iterate over all components in evaluation order
	pub fn components(&self) -> impl Iterator<Item = ComponentView<'_>> + '_ {
		(0..self.component_count).map(move |i| self.component(i))
	}
}
