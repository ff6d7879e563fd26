use super::curve::*;
use super::super::coordinate::*;

use itertools::*;

/// Default learning rate for the fitting algorithm
const DEFAULT_ALPHA: f64        = 0.05;

/// Default decay rate for the squared gradient accumulator
const DEFAULT_GAMMA: f64        = 0.9999;

/// Minimum number of updates performed regardless of how few samples there are
const DEFAULT_MIN_UPDATES: usize = 45;

/// Offset added to the accumulator before taking the square root
const ACCUMULATOR_EPSILON: f64  = 1e-8;

///
/// Tuning parameters for `fit_cubic_with_options`
///
/// The defaults work well for most data sets: `alpha` is the learning rate,
/// `gamma` the decay rate applied to the squared gradient accumulator, and
/// `min_updates` the number of updates to perform even when there are only a
/// few samples to fit against.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FitOptions<S: Scalar> {
    pub alpha:          S,
    pub gamma:          S,
    pub min_updates:    usize
}

impl<S: Scalar> Default for FitOptions<S> {
    fn default() -> FitOptions<S> {
        FitOptions {
            alpha:          S::from_f64(DEFAULT_ALPHA),
            gamma:          S::from_f64(DEFAULT_GAMMA),
            min_updates:    DEFAULT_MIN_UPDATES
        }
    }
}

///
/// Fits a cubic bezier curve to a set of sampled values
///
/// Each value in `values` is paired with the curve parameter in `parameters`
/// where the curve should pass through it (the two slices must be the same
/// length). The fit is found by gradient descent using a decaying accumulator
/// of squared gradients, so the result approaches the least-squares curve
/// rather than landing on it exactly.
///
/// Returns `None` if there are no samples to fit against.
///
pub fn fit_cubic<Point: Coordinate>(values: &[Point], parameters: &[Point::Scalar]) -> Option<CubicBezier<Point>> {
    fit_cubic_with_options(values, parameters, FitOptions::default())
}

///
/// Fits a cubic bezier curve to a set of sampled values, with control over the
/// tuning parameters
///
/// When there are fewer samples than `min_updates`, the samples are iterated
/// over several times so that the accumulators have enough updates to converge.
///
pub fn fit_cubic_with_options<Point: Coordinate>(values: &[Point], parameters: &[Point::Scalar], options: FitOptions<Point::Scalar>) -> Option<CubicBezier<Point>> {
    let count = values.len();
    if count == 0 {
        return None;
    }

    let three           = Point::Scalar::from_f64(3.0);
    let inverse_gamma   = Point::Scalar::one() - options.gamma;
    let epsilon         = Point::Scalar::from_f64(ACCUMULATOR_EPSILON);

    // Weights being fitted and the accumulated squared gradient for each of them
    let mut weights         = [Point::origin(); 4];
    let mut accumulators    = [Point::origin(); 4];

    // Small data sets are iterated over more than once
    let iterations = if count > options.min_updates {
        1
    } else {
        (options.min_updates / count) + 1
    };

    for _ in 0..iterations {
        for (value, t) in values.iter().zip_eq(parameters.iter()) {
            let (value, t)  = (*value, *t);

            // Bezier basis coefficients for this parameter
            let one_minus_t = Point::Scalar::one() - t;
            let coefficients = [
                one_minus_t*one_minus_t*one_minus_t,
                one_minus_t*one_minus_t*t*three,
                one_minus_t*t*t*three,
                t*t*t
            ];

            // Difference between the current curve and the sample it should pass through
            let error = weights[0]*coefficients[0]
                + weights[1]*coefficients[1]
                + weights[2]*coefficients[2]
                + weights[3]*coefficients[3]
                - value;

            // Move each weight against its gradient, scaled by the history of squared gradients
            for weight_idx in 0..4 {
                let gradient = error * coefficients[weight_idx];

                let mut accumulated = [Point::Scalar::zero(); MAX_COMPONENTS];
                let mut updated     = [Point::Scalar::zero(); MAX_COMPONENTS];

                for component_idx in 0..Point::len() {
                    let gradient_component  = gradient.get(component_idx);
                    let accumulator         = accumulators[weight_idx].get(component_idx)*options.gamma
                        + gradient_component*gradient_component*inverse_gamma;

                    accumulated[component_idx]  = accumulator;
                    updated[component_idx]      = weights[weight_idx].get(component_idx)
                        - (options.alpha*gradient_component) / (accumulator+epsilon).sqrt();
                }

                accumulators[weight_idx]    = Point::from_components(&accumulated[0..Point::len()]);
                weights[weight_idx]         = Point::from_components(&updated[0..Point::len()]);
            }
        }
    }

    Some(CubicBezier::new(weights[0], weights[1], weights[2], weights[3]))
}
