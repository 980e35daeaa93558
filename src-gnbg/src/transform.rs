//! Irregularity transform
//!
//! Sign-preserving remapping applied per axis after rotation. It keeps the
//! ordering of magnitudes but bends the quadratic bowl with oscillations whose
//! strength is `mu` and whose frequencies are `omega`, which breaks its
//! symmetry. The expressions are kept in exactly this grouping: reordering
//! them changes results in the last bits.

/// Transform a single coordinate.
///
/// `mu` is `[positive side, negative side]`, `omega` is
/// `[positive 0, positive 1, negative 0, negative 1]`.
#[inline]
pub fn irregularity(t: f64, mu: &[f64; 2], omega: &[f64; 4]) -> f64 {
	if t > 0.0 {
		let l = t.ln();
		(l + mu[0] * ((omega[0] * l).sin() + (omega[1] * l).sin())).exp()
	} else if t < 0.0 {
		let l = (-t).ln();
		-(l + mu[1] * ((omega[2] * l).sin() + (omega[3] * l).sin())).exp()
	} else {
		0.0
	}
}
