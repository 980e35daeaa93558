//! Reading GNBG instances from their whitespace-separated text form.
//!
//! The text files are the ones produced for the GECCO 2024 competition
//! (`f1.txt` .. `f24.txt`). Tokens come in a fixed order:
//!
//! ```text
//! maxEvaluations acceptanceThreshold dimension componentCount
//! minCoordinate maxCoordinate
//! minimumPosition[N][D] sigma[N] scaleDiag[N][D] mu[N][2] omega[N][4] lambda[N]
//! rotation[D][D][N]            (row, column, component)
//! optimumValue optimumPosition[D]
//! ```

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::{FromStr, SplitWhitespace};

use ndarray::{Array1, Array2, Array3};

use crate::error::LoadError;
use crate::instance::Instance;

/// Number of problems in the GECCO 2024 GNBG suite
pub const GECCO_2024_PROBLEMS: usize = 24;

/// Sequential reader over whitespace separated tokens that remembers its
/// position for error messages.
struct Tokens<'a> {
	inner: SplitWhitespace<'a>,
	position: usize,
	total: usize,
}

impl<'a> Tokens<'a> {
	fn new(text: &'a str) -> Self {
		Self { inner: text.split_whitespace(), position: 0, total: text.split_whitespace().count() }
	}

	/// Check that exactly the tokens `fields` describe are left, before any
	/// of them is allocated. Sizes saturate, so a header whose products
	/// overflow reads as truncated.
	fn expect_exactly(&self, fields: &[(&'static str, usize)]) -> Result<(), LoadError> {
		let mut end = self.position;
		for &(field, len) in fields {
			end = end.saturating_add(len);
			if end > self.total {
				return Err(LoadError::Truncated { field, position: self.total });
			}
		}
		if end < self.total {
			return Err(LoadError::TrailingTokens { count: self.total - end });
		}
		Ok(())
	}

	fn next_value<T: FromStr>(&mut self, field: &'static str) -> Result<T, LoadError> {
		let position = self.position;
		let token = self.inner.next().ok_or(LoadError::Truncated { field, position })?;
		self.position += 1;
		token.parse::<T>().map_err(|_| LoadError::InvalidNumber {
			field,
			token: token.to_string(),
			position,
		})
	}

	fn next_f64(&mut self, field: &'static str) -> Result<f64, LoadError> {
		self.next_value(field)
	}

	fn next_count(&mut self, field: &'static str) -> Result<usize, LoadError> {
		let value: usize = self.next_value(field)?;
		if value == 0 {
			return Err(LoadError::NonPositive { field });
		}
		Ok(value)
	}

	fn vector(&mut self, len: usize, field: &'static str) -> Result<Array1<f64>, LoadError> {
		let mut out = Array1::zeros(len);
		for v in out.iter_mut() {
			*v = self.next_f64(field)?;
		}
		Ok(out)
	}

	/// Fill a (rows, cols) matrix in row-major token order
	fn matrix(
		&mut self,
		rows: usize,
		cols: usize,
		field: &'static str,
	) -> Result<Array2<f64>, LoadError> {
		let mut out = Array2::zeros((rows, cols));
		for v in out.iter_mut() {
			*v = self.next_f64(field)?;
		}
		Ok(out)
	}
}

impl Instance {
	/// Parse an instance from its text form.
	///
	/// # Errors
	///
	/// Returns a [`LoadError`] if the data is truncated, holds a token that is
	/// not a number, has a zero size field, an empty search box, or carries
	/// tokens after the optimum position.
	pub fn parse(text: &str) -> Result<Self, LoadError> {
		let mut tokens = Tokens::new(text);

		let max_evaluations = tokens.next_count("max evaluations")?;
		let acceptance_threshold = tokens.next_f64("acceptance threshold")?;
		let dimension = tokens.next_count("dimension")?;
		let component_count = tokens.next_count("component count")?;
		let min_coordinate = tokens.next_f64("min coordinate")?;
		let max_coordinate = tokens.next_f64("max coordinate")?;
		if min_coordinate > max_coordinate {
			return Err(LoadError::InvalidBounds { min: min_coordinate, max: max_coordinate });
		}

		let (n, d) = (component_count, dimension);
		let nd = n.saturating_mul(d);
		tokens.expect_exactly(&[
			("component minimum position", nd),
			("component sigma", n),
			("component scale diagonal", nd),
			("mu", n.saturating_mul(2)),
			("omega", n.saturating_mul(4)),
			("lambda", n),
			("rotation matrix", nd.saturating_mul(d)),
			("optimum value", 1),
			("optimum position", d),
		])?;

		let min_positions = tokens.matrix(n, d, "component minimum position")?;
		let sigma = tokens.vector(n, "component sigma")?;
		let scale_diag = tokens.matrix(n, d, "component scale diagonal")?;
		let mu = tokens.matrix(n, 2, "mu")?;
		let omega = tokens.matrix(n, 4, "omega")?;
		let lambda = tokens.vector(n, "lambda")?;

		// stored row, column, component: scatter into per-component matrices
		let mut rotation = Array3::zeros((n, d, d));
		for row in 0..d {
			for col in 0..d {
				for comp in 0..n {
					rotation[[comp, row, col]] = tokens.next_f64("rotation matrix")?;
				}
			}
		}

		let optimum_value = tokens.next_f64("optimum value")?;
		let optimum_position = tokens.vector(d, "optimum position")?;

		Ok(Instance {
			max_evaluations,
			acceptance_threshold,
			dimension,
			component_count,
			min_coordinate,
			max_coordinate,
			min_positions,
			sigma,
			scale_diag,
			mu,
			omega,
			lambda,
			rotation,
			optimum_value,
			optimum_position,
		})
	}

	/// Read an instance from any byte stream
	pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
		let mut text = String::new();
		reader.read_to_string(&mut text)?;
		Self::parse(&text)
	}

	/// Load an instance from a file
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
		let path = path.as_ref();
		let io_error = |source| LoadError::Io { path: path.to_path_buf(), source };

		let mut text = String::new();
		File::open(path)
			.and_then(|mut f| f.read_to_string(&mut text))
			.map_err(io_error)?;
		let instance = Self::parse(&text)?;

		log::debug!(
			"loaded GNBG instance {}: D={} N={} budget={} box=[{}, {}]",
			path.display(),
			instance.dimension,
			instance.component_count,
			instance.max_evaluations,
			instance.min_coordinate,
			instance.max_coordinate
		);
		Ok(instance)
	}
}

/// Where to find the instance file of a numbered problem.
///
/// Problem `n` maps to `<directory>/<prefix><n>.<extension>`; the defaults
/// give `./f<n>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLocator {
	/// Directory holding the instance files
	pub directory: PathBuf,
	/// File name prefix placed before the problem number
	pub prefix: String,
	/// File extension, without the dot
	pub extension: String,
}

impl Default for InstanceLocator {
	fn default() -> Self {
		Self {
			directory: PathBuf::from("."),
			prefix: "f".to_string(),
			extension: "txt".to_string(),
		}
	}
}

impl InstanceLocator {
	/// Locator for `f<n>.txt` files in `directory`
	pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
		Self { directory: directory.into(), ..Self::default() }
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
		self.extension = extension.into();
		self
	}

	/// Path of the instance file for `problem`
	pub fn path_for(&self, problem: usize) -> PathBuf {
		let file_name = if self.extension.is_empty() {
			format!("{}{}", self.prefix, problem)
		} else {
			format!("{}{}.{}", self.prefix, problem, self.extension)
		};
		self.directory.join(file_name)
	}

	/// Load the instance of `problem`
	pub fn load(&self, problem: usize) -> Result<Instance, LoadError> {
		Instance::from_file(self.path_for(problem))
	}
}
