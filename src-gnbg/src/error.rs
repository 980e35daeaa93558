//! Error types for loading and evaluating GNBG instances.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a GNBG instance.
///
/// Any of these aborts construction: no partially filled instance is ever
/// handed back to the caller.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The instance file could not be opened or read.
	#[error("failed to read instance file {}: {source}", .path.display())]
	Io {
		/// Path that was being read
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// Reading from an already opened stream failed.
	#[error("failed to read instance data: {0}")]
	Read(#[from] std::io::Error),

	/// The token stream ended before every field was read.
	#[error("instance data truncated: missing {field} (token {position})")]
	Truncated {
		/// Field that was expected next
		field: &'static str,
		/// Zero-based index of the missing token
		position: usize,
	},

	/// A token could not be parsed as the expected number.
	#[error("invalid value {token:?} for {field} (token {position})")]
	InvalidNumber {
		/// Field the token belongs to
		field: &'static str,
		/// Offending token
		token: String,
		/// Zero-based index of the token
		position: usize,
	},

	/// A size field of the header is zero.
	#[error("{field} must be > 0")]
	NonPositive {
		/// Name of the header field
		field: &'static str,
	},

	/// The search box is empty.
	#[error("invalid search box: min coordinate ({min}) > max coordinate ({max})")]
	InvalidBounds {
		/// Lower coordinate bound
		min: f64,
		/// Upper coordinate bound
		max: f64,
	},

	/// Tokens remain after the optimum position.
	#[error("{count} unexpected token(s) after the optimum position")]
	TrailingTokens {
		/// Number of extra tokens
		count: usize,
	},
}

/// Errors raised by [`crate::Gnbg::try_fitness`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
	/// The query vector does not have the instance dimension.
	#[error("dimension mismatch: expected {expected}, got {got}")]
	DimensionMismatch {
		/// Instance dimension
		expected: usize,
		/// Length of the supplied vector
		got: usize,
	},
}
