use std::ops::*;

pub use super::scalar::*;

/// The maximum number of components a coordinate can have
pub const MAX_COMPONENTS: usize = 4;

///
/// Represents a value that can be used as a coordinate in a bezier curve
///
pub trait Coordinate : Sized + Copy + PartialEq
where
    Self: Add<Self, Output=Self>,
    Self: Sub<Self, Output=Self>,
    Self: Mul<<Self as Coordinate>::Scalar, Output=Self>,
{
    /// The floating point type of this coordinate's components
    type Scalar: Scalar;

    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[Self::Scalar]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> Self::Scalar;

    ///
    /// Returns a point made up of the biggest components of the two points
    ///
    fn from_biggest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Returns a point made up of the smallest components of the two points
    ///
    fn from_smallest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    #[inline]
    fn distance_to(&self, target: &Self) -> Self::Scalar {
        let offset              = *self - *target;
        let squared_distance    = offset.dot(&offset);

        squared_distance.sqrt()
    }

    ///
    /// Computes the dot product for this vector along with another vector
    ///
    #[inline]
    fn dot(&self, target: &Self) -> Self::Scalar {
        let mut dot_product = Self::Scalar::zero();

        for component_index in 0..Self::len() {
            dot_product = dot_product + self.get(component_index)*target.get(component_index);
        }

        dot_product
    }

    ///
    /// Computes the magnitude of this vector
    ///
    #[inline]
    fn magnitude(&self) -> Self::Scalar {
        self.dot(self).sqrt()
    }

    ///
    /// Treating this as a vector, returns a unit vector in the same direction
    ///
    #[inline]
    fn to_unit_vector(&self) -> Self {
        let magnitude = self.magnitude();

        if magnitude == Self::Scalar::zero() {
            Self::origin()
        } else {
            *self * (Self::Scalar::one()/magnitude)
        }
    }

    ///
    /// True if any of the components of this coordinate are NaN
    ///
    #[inline]
    fn is_nan(&self) -> bool {
        for component_index in 0..Self::len() {
            if self.get(component_index).is_nan() {
                return true;
            }
        }

        false
    }
}

///
/// Represents a coordinate with a 2D position
///
pub trait Coordinate2D : Coordinate {
    fn x(&self) -> Self::Scalar;
    fn y(&self) -> Self::Scalar;
}

///
/// Represents a coordinate with a 3D position
///
pub trait Coordinate3D : Coordinate {
    fn x(&self) -> Self::Scalar;
    fn y(&self) -> Self::Scalar;
    fn z(&self) -> Self::Scalar;

    ///
    /// Treating this and the target as vectors, computes the cross product
    ///
    fn cross(&self, target: &Self) -> Self {
        Self::from_components(&[
            self.y()*target.z() - self.z()*target.y(),
            self.z()*target.x() - self.x()*target.z(),
            self.x()*target.y() - self.y()*target.x()
        ])
    }
}

impl Coordinate for f32 {
    type Scalar = f32;

    fn from_components(components: &[f32]) -> f32 {
        components[0]
    }

    #[inline]
    fn origin() -> f32 { 0.0 }

    #[inline]
    fn len() -> usize { 1 }

    #[inline]
    fn get(&self, _index: usize) -> f32 { *self }

    #[inline]
    fn from_biggest_components(p1: f32, p2: f32) -> f32 {
        if p1 > p2 {
            p1
        } else {
            p2
        }
    }

    #[inline]
    fn from_smallest_components(p1: f32, p2: f32) -> f32 {
        if p1 < p2 {
            p1
        } else {
            p2
        }
    }

    #[inline]
    fn distance_to(&self, target: &f32) -> f32 {
        f32::abs(self-target)
    }

    fn dot(&self, target: &f32) -> f32 {
        self * target
    }
}

impl Coordinate for f64 {
    type Scalar = f64;

    fn from_components(components: &[f64]) -> f64 {
        components[0]
    }

    #[inline]
    fn origin() -> f64 { 0.0 }

    #[inline]
    fn len() -> usize { 1 }

    #[inline]
    fn get(&self, _index: usize) -> f64 { *self }

    #[inline]
    fn from_biggest_components(p1: f64, p2: f64) -> f64 {
        if p1 > p2 {
            p1
        } else {
            p2
        }
    }

    #[inline]
    fn from_smallest_components(p1: f64, p2: f64) -> f64 {
        if p1 < p2 {
            p1
        } else {
            p2
        }
    }

    #[inline]
    fn distance_to(&self, target: &f64) -> f64 {
        f64::abs(self-target)
    }

    fn dot(&self, target: &f64) -> f64 {
        self * target
    }
}

/// Represents a 2D point
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Coord2<S: Scalar = f64>(pub S, pub S);

impl<S: Scalar> Coordinate2D for Coord2<S> {
    ///
    /// X component of this coordinate
    ///
    #[inline]
    fn x(&self) -> S {
        self.0
    }

    ///
    /// Y component of this coordinate
    ///
    #[inline]
    fn y(&self) -> S {
        self.1
    }
}

impl<S: Scalar> Add<Coord2<S>> for Coord2<S> {
    type Output=Coord2<S>;

    #[inline]
    fn add(self, rhs: Coord2<S>) -> Coord2<S> {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl<S: Scalar> Sub<Coord2<S>> for Coord2<S> {
    type Output=Coord2<S>;

    #[inline]
    fn sub(self, rhs: Coord2<S>) -> Coord2<S> {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl<S: Scalar> Mul<S> for Coord2<S> {
    type Output=Coord2<S>;

    #[inline]
    fn mul(self, rhs: S) -> Coord2<S> {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl<S: Scalar> Coordinate for Coord2<S> {
    type Scalar = S;

    #[inline]
    fn from_components(components: &[S]) -> Coord2<S> {
        Coord2(components[0], components[1])
    }

    #[inline]
    fn origin() -> Coord2<S> {
        Coord2(S::zero(), S::zero())
    }

    #[inline]
    fn len() -> usize { 2 }

    #[inline]
    fn get(&self, index: usize) -> S {
        match index {
            0 => self.0,
            1 => self.1,
            _ => panic!("Coord2 only has two components")
        }
    }

    fn from_biggest_components(p1: Coord2<S>, p2: Coord2<S>) -> Coord2<S> {
        Coord2(p1.0.max(p2.0), p1.1.max(p2.1))
    }

    fn from_smallest_components(p1: Coord2<S>, p2: Coord2<S>) -> Coord2<S> {
        Coord2(p1.0.min(p2.0), p1.1.min(p2.1))
    }
}

/// Represents a 3D point
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Coord3<S: Scalar = f64>(pub S, pub S, pub S);

impl<S: Scalar> Coordinate3D for Coord3<S> {
    #[inline]
    fn x(&self) -> S {
        self.0
    }

    #[inline]
    fn y(&self) -> S {
        self.1
    }

    #[inline]
    fn z(&self) -> S {
        self.2
    }
}

impl<S: Scalar> Add<Coord3<S>> for Coord3<S> {
    type Output=Coord3<S>;

    #[inline]
    fn add(self, rhs: Coord3<S>) -> Coord3<S> {
        Coord3(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl<S: Scalar> Sub<Coord3<S>> for Coord3<S> {
    type Output=Coord3<S>;

    #[inline]
    fn sub(self, rhs: Coord3<S>) -> Coord3<S> {
        Coord3(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl<S: Scalar> Mul<S> for Coord3<S> {
    type Output=Coord3<S>;

    #[inline]
    fn mul(self, rhs: S) -> Coord3<S> {
        Coord3(self.0 * rhs, self.1 * rhs, self.2 * rhs)
    }
}

impl<S: Scalar> Coordinate for Coord3<S> {
    type Scalar = S;

    #[inline]
    fn from_components(components: &[S]) -> Coord3<S> {
        Coord3(components[0], components[1], components[2])
    }

    #[inline]
    fn origin() -> Coord3<S> {
        Coord3(S::zero(), S::zero(), S::zero())
    }

    #[inline]
    fn len() -> usize { 3 }

    #[inline]
    fn get(&self, index: usize) -> S {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("Coord3 only has three components")
        }
    }

    fn from_biggest_components(p1: Coord3<S>, p2: Coord3<S>) -> Coord3<S> {
        Coord3(p1.0.max(p2.0), p1.1.max(p2.1), p1.2.max(p2.2))
    }

    fn from_smallest_components(p1: Coord3<S>, p2: Coord3<S>) -> Coord3<S> {
        Coord3(p1.0.min(p2.0), p1.1.min(p2.1), p1.2.min(p2.2))
    }
}

/// Represents a 4D point (or a colour value)
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Coord4<S: Scalar = f64>(pub S, pub S, pub S, pub S);

impl<S: Scalar> Add<Coord4<S>> for Coord4<S> {
    type Output=Coord4<S>;

    #[inline]
    fn add(self, rhs: Coord4<S>) -> Coord4<S> {
        Coord4(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2, self.3 + rhs.3)
    }
}

impl<S: Scalar> Sub<Coord4<S>> for Coord4<S> {
    type Output=Coord4<S>;

    #[inline]
    fn sub(self, rhs: Coord4<S>) -> Coord4<S> {
        Coord4(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2, self.3 - rhs.3)
    }
}

impl<S: Scalar> Mul<S> for Coord4<S> {
    type Output=Coord4<S>;

    #[inline]
    fn mul(self, rhs: S) -> Coord4<S> {
        Coord4(self.0 * rhs, self.1 * rhs, self.2 * rhs, self.3 * rhs)
    }
}

impl<S: Scalar> Coordinate for Coord4<S> {
    type Scalar = S;

    #[inline]
    fn from_components(components: &[S]) -> Coord4<S> {
        Coord4(components[0], components[1], components[2], components[3])
    }

    #[inline]
    fn origin() -> Coord4<S> {
        Coord4(S::zero(), S::zero(), S::zero(), S::zero())
    }

    #[inline]
    fn len() -> usize { 4 }

    #[inline]
    fn get(&self, index: usize) -> S {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            3 => self.3,
            _ => panic!("Coord4 only has four components")
        }
    }

    fn from_biggest_components(p1: Coord4<S>, p2: Coord4<S>) -> Coord4<S> {
        Coord4(p1.0.max(p2.0), p1.1.max(p2.1), p1.2.max(p2.2), p1.3.max(p2.3))
    }

    fn from_smallest_components(p1: Coord4<S>, p2: Coord4<S>) -> Coord4<S> {
        Coord4(p1.0.min(p2.0), p1.1.min(p2.1), p1.2.min(p2.2), p1.3.min(p2.3))
    }
}
