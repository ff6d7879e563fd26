pub use num_traits::{Float, One, Zero};

///
/// Trait implemented by the floating point types that can act as the components
/// of a coordinate
///
/// The arc length routines sample curves at a fixed number of positions, chosen
/// per precision, so this trait also carries those sample counts.
///
pub trait Scalar : Float {
    /// Number of samples used when measuring the length of a quadratic curve (always odd)
    const QUAD_LENGTH_SAMPLES: usize;

    /// Number of samples used when measuring the length of a cubic curve (always odd)
    const CUBIC_LENGTH_SAMPLES: usize;

    ///
    /// Creates a value of this type from an f64
    ///
    fn from_f64(val: f64) -> Self;

    ///
    /// Returns this value as an f64
    ///
    fn as_f64(self) -> f64;
}

impl Scalar for f32 {
    const QUAD_LENGTH_SAMPLES: usize    = 19;
    const CUBIC_LENGTH_SAMPLES: usize   = 31;

    #[inline]
    fn from_f64(val: f64) -> f32 {
        val as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    const QUAD_LENGTH_SAMPLES: usize    = 41;
    const CUBIC_LENGTH_SAMPLES: usize   = 61;

    #[inline]
    fn from_f64(val: f64) -> f64 {
        val
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}
