//! Bounded derivative-free scalar minimization (Brent's method).
//!
//! Combines golden-section bracketing with successive parabolic
//! interpolation, never evaluating a derivative. The search is confined to a
//! caller-supplied interval, which is what the closest-approach solver needs:
//! the separation between two parallactic trajectories is smooth but not
//! convex over long spans, and an unbounded search could wander to a
//! spurious annual minimum far from the epoch range of interest.

use crate::astrolens_errors::AstrolensError;

/// Convergence budget of [`brent_minimize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimizeOptions {
    /// Relative tolerance on the abscissa.
    pub rel_tol: f64,
    /// Maximum number of iterations before giving up.
    pub max_iter: usize,
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            rel_tol: 1e-10,
            max_iter: 100,
        }
    }
}

/// Absolute floor of the abscissa tolerance, for minima near zero.
const ABS_TOL: f64 = 1e-12;

/// Locate a minimum of `f` inside `[a, b]` with Brent's method.
///
/// Arguments
/// ---------
/// * `f`: objective function, evaluated only inside the interval
/// * `a`, `b`: bounds of the search interval (swapped if reversed)
/// * `options`: tolerance and iteration budget
///
/// Return
/// ------
/// * `(argmin, min)` on convergence
///
/// Errors
/// ------
/// * [`AstrolensError::NonConvergence`] if the iteration budget is exhausted
///   before the bracket shrinks below tolerance.
///
/// Remarks
/// -------
/// * For a multimodal `f` the result is a local minimum inside the interval,
///   not necessarily the global one.
pub fn brent_minimize<F>(
    f: F,
    a: f64,
    b: f64,
    options: &MinimizeOptions,
) -> Result<(f64, f64), AstrolensError>
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };

    // golden ratio complement, (3 - sqrt(5)) / 2
    let golden = (3.0 - 5.0_f64.sqrt()) / 2.0;

    let mut x = a + golden * (b - a);
    let mut w = x;
    let mut v = x;
    let mut fx = f(x);
    let mut fw = fx;
    let mut fv = fx;

    // last two step lengths
    let mut d: f64 = 0.0;
    let mut e: f64 = 0.0;

    for _ in 0..options.max_iter {
        let m = 0.5 * (a + b);
        let tol = options.rel_tol * x.abs() + ABS_TOL;
        let t2 = 2.0 * tol;

        if (x - m).abs() <= t2 - 0.5 * (b - a) {
            return Ok((x, fx));
        }

        let mut p = 0.0;
        let mut q = 0.0;
        let mut r = 0.0;
        if e.abs() > tol {
            // fit a parabola through (v, fv), (w, fw), (x, fx)
            r = (x - w) * (fx - fv);
            q = (x - v) * (fx - fw);
            p = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            r = e;
            e = d;
        }

        if p.abs() < (0.5 * q * r).abs() && p > q * (a - x) && p < q * (b - x) {
            // parabolic interpolation step
            d = p / q;
            let u = x + d;
            if (u - a) < t2 || (b - u) < t2 {
                d = if x < m { tol } else { -tol };
            }
        } else {
            // golden-section step into the larger half
            e = if x < m { b - x } else { a - x };
            d = golden * e;
        }

        let u = if d.abs() >= tol {
            x + d
        } else if d > 0.0 {
            x + tol
        } else {
            x - tol
        };
        let fu = f(u);

        if fu <= fx {
            if u < x {
                b = x;
            } else {
                a = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    Err(AstrolensError::NonConvergence {
        iterations: options.max_iter,
    })
}
