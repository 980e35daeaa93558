//! Shared instance builders for the GNBG integration tests
//!
//! Instances are written in the same text layout as the competition files so
//! every test goes through the real parser.

#![allow(dead_code)]

use gnbg::{Gnbg, Instance};
use rand::Rng;
use rand::rngs::StdRng;

/// Parameters of one landscape component
#[derive(Debug, Clone)]
pub struct ComponentSpec {
	pub min_position: Vec<f64>,
	pub sigma: f64,
	pub scale_diag: Vec<f64>,
	pub mu: [f64; 2],
	pub omega: [f64; 4],
	pub lambda: f64,
	/// rotation[row][col]
	pub rotation: Vec<Vec<f64>>,
}

/// Full instance description, serialized by [`InstanceSpec::to_text`]
#[derive(Debug, Clone)]
pub struct InstanceSpec {
	pub max_evaluations: usize,
	pub acceptance_threshold: f64,
	pub min_coordinate: f64,
	pub max_coordinate: f64,
	pub components: Vec<ComponentSpec>,
	pub optimum_value: f64,
	pub optimum_position: Vec<f64>,
}

impl InstanceSpec {
	pub fn dimension(&self) -> usize {
		self.optimum_position.len()
	}

	/// Competition text layout, rotation interleaved (row, column, component)
	pub fn to_text(&self) -> String {
		let d = self.dimension();
		let mut tokens: Vec<String> = vec![
			self.max_evaluations.to_string(),
			format!("{:?}", self.acceptance_threshold),
			d.to_string(),
			self.components.len().to_string(),
			format!("{:?}", self.min_coordinate),
			format!("{:?}", self.max_coordinate),
		];
		let mut push = |v: f64| tokens.push(format!("{:?}", v));
		for c in &self.components {
			c.min_position.iter().for_each(|&v| push(v));
		}
		for c in &self.components {
			push(c.sigma);
		}
		for c in &self.components {
			c.scale_diag.iter().for_each(|&v| push(v));
		}
		for c in &self.components {
			c.mu.iter().for_each(|&v| push(v));
		}
		for c in &self.components {
			c.omega.iter().for_each(|&v| push(v));
		}
		for c in &self.components {
			push(c.lambda);
		}
		for row in 0..d {
			for col in 0..d {
				for c in &self.components {
					push(c.rotation[row][col]);
				}
			}
		}
		push(self.optimum_value);
		self.optimum_position.iter().for_each(|&v| push(v));
		tokens.join(" ")
	}

	pub fn instance(&self) -> Instance {
		Instance::parse(&self.to_text()).expect("test instance should parse")
	}

	pub fn evaluator(&self) -> Gnbg {
		Gnbg::new(self.instance())
	}
}

pub fn identity(d: usize) -> Vec<Vec<f64>> {
	(0..d)
		.map(|r| (0..d).map(|c| if r == c { 1.0 } else { 0.0 }).collect())
		.collect()
}

/// Product of random Givens rotations, orthonormal up to rounding
pub fn random_rotation(rng: &mut StdRng, d: usize) -> Vec<Vec<f64>> {
	let mut m = identity(d);
	for p in 0..d {
		for q in (p + 1)..d {
			let theta: f64 = rng.random_range(-std::f64::consts::PI..std::f64::consts::PI);
			let (s, c) = theta.sin_cos();
			for row in m.iter_mut() {
				let (a, b) = (row[p], row[q]);
				row[p] = c * a - s * b;
				row[q] = s * a + c * b;
			}
		}
	}
	m
}

/// The D=2, N=1 bowl: minimum at the origin, unit weights, sigma 0,
/// lambda 1, no irregularity, identity rotation
pub fn unit_bowl(max_evaluations: usize) -> InstanceSpec {
	InstanceSpec {
		max_evaluations,
		acceptance_threshold: 1e-8,
		min_coordinate: -100.0,
		max_coordinate: 100.0,
		components: vec![ComponentSpec {
			min_position: vec![0.0, 0.0],
			sigma: 0.0,
			scale_diag: vec![1.0, 1.0],
			mu: [0.0, 0.0],
			omega: [0.0; 4],
			lambda: 1.0,
			rotation: identity(2),
		}],
		optimum_value: 0.0,
		optimum_position: vec![0.0, 0.0],
	}
}

pub fn random_component(rng: &mut StdRng, d: usize, rotated: bool) -> ComponentSpec {
	ComponentSpec {
		min_position: (0..d).map(|_| rng.random_range(-80.0..80.0)).collect(),
		sigma: rng.random_range(-1100.0..-900.0),
		scale_diag: (0..d).map(|_| rng.random_range(0.1..100.0)).collect(),
		mu: [rng.random_range(0.1..0.5), rng.random_range(0.1..0.5)],
		omega: [
			rng.random_range(5.0..50.0),
			rng.random_range(5.0..50.0),
			rng.random_range(5.0..50.0),
			rng.random_range(5.0..50.0),
		],
		lambda: rng.random_range(0.25..1.0),
		rotation: if rotated { random_rotation(rng, d) } else { identity(d) },
	}
}

/// Multi-component instance whose global optimum sits on the component with
/// the lowest sigma
pub fn random_instance(
	rng: &mut StdRng,
	d: usize,
	n: usize,
	max_evaluations: usize,
	rotated: bool,
) -> InstanceSpec {
	let components: Vec<ComponentSpec> =
		(0..n).map(|_| random_component(rng, d, rotated)).collect();
	let best = components
		.iter()
		.min_by(|a, b| a.sigma.total_cmp(&b.sigma))
		.expect("at least one component");
	InstanceSpec {
		max_evaluations,
		acceptance_threshold: 1e-8,
		min_coordinate: -100.0,
		max_coordinate: 100.0,
		optimum_value: best.sigma,
		optimum_position: best.min_position.clone(),
		components,
	}
}

pub fn random_point(rng: &mut StdRng, d: usize) -> Vec<f64> {
	(0..d).map(|_| rng.random_range(-100.0..100.0)).collect()
}

/// Straightforward loop version of one component's value, written directly
/// from the model definition
pub fn reference_component_value(c: &ComponentSpec, x: &[f64]) -> f64 {
	let d = x.len();
	let a: Vec<f64> = (0..d).map(|j| x[j] - c.min_position[j]).collect();
	let mut q = 0.0;
	for j in 0..d {
		let mut t = 0.0;
		for k in 0..d {
			t += c.rotation[j][k] * a[k];
		}
		let y = if t > 0.0 {
			(t.ln() + c.mu[0] * ((c.omega[0] * t.ln()).sin() + (c.omega[1] * t.ln()).sin())).exp()
		} else if t < 0.0 {
			-((-t).ln()
				+ c.mu[1] * ((c.omega[2] * (-t).ln()).sin() + (c.omega[3] * (-t).ln()).sin()))
			.exp()
		} else {
			0.0
		};
		q += y * y * c.scale_diag[j];
	}
	c.sigma + q.powf(c.lambda)
}
