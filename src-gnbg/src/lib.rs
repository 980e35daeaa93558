//! GNBG: Generalized Numerical Benchmark Generator
//!
//! Loader and fitness evaluator for GNBG problem instances such as the
//! 24 problems of the GECCO 2024 box-constrained numerical optimization
//! competition. An instance is a set of components; each one is a rotated,
//! irregularly distorted and weighted quadratic bowl raised to a power and
//! shifted by a base value. The landscape is their pointwise minimum.
//!
//! - `loader`: text format reader and [`InstanceLocator`]
//! - `instance`: the immutable [`Instance`]
//! - `transform`: the irregularity transform
//! - `evaluator`: [`Gnbg`], fitness plus evaluation-budget bookkeeping
//! - `summary`: [`EvaluationSummary`] for machine readable output
//!
//! Driving optimizers only talk to [`Gnbg`]: build one per run, call
//! [`Gnbg::fitness`] with vectors inside [`Gnbg::bounds`], and read back the
//! history, best result and acceptance reach point.
//!
//! # Example
//!
//! ```no_run
//! use gnbg::{Gnbg, InstanceLocator};
//!
//! let locator = InstanceLocator::new("instances");
//! let mut f = Gnbg::from_problem(1, &locator)?;
//! let x = vec![0.0; f.dimension()];
//! let value = f.fitness(&x);
//! println!("f(0) = {}, error = {:?}", value, f.best_error());
//! # Ok::<(), gnbg::LoadError>(())
//! ```

pub mod error;
pub mod evaluator;
pub mod instance;
pub mod loader;
pub mod summary;
pub mod transform;

pub use error::{EvalError, LoadError};
pub use evaluator::Gnbg;
pub use instance::{ComponentView, Instance};
pub use loader::{GECCO_2024_PROBLEMS, InstanceLocator};
pub use summary::EvaluationSummary;
