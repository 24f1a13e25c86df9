//! Implementations of `std::ops`.

use std::ops::{Add, Mul, Neg};

use crate::{approx::ApproxEq, Number, Quat};

/// Component-wise negation.
///
/// For a unit quaternion, the negation represents the *same* rotation (the rotation group is
/// double-covered), but lies on the opposite hemisphere, which matters for interpolation.
impl<T: Neg> Neg for Quat<T> {
    type Output = Quat<T::Output>;

    fn neg(self) -> Self::Output {
        Quat::from_vec(-self.into_vec())
    }
}

/// Component-wise addition.
impl<T: Add> Add for Quat<T> {
    type Output = Quat<T::Output>;

    fn add(self, rhs: Self) -> Self::Output {
        Quat::from_vec(self.into_vec() + rhs.into_vec())
    }
}

/// Quaternion-Scalar multiplication (scaling of all four components).
impl<T: Mul + Copy> Mul<T> for Quat<T> {
    type Output = Quat<T::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Quat::from_vec(self.into_vec() * rhs)
    }
}

/// The Hamilton product, composing two rotations.
///
/// `a * b` applied to a vector rotates by `b` first, then by `a`, matching matrix multiplication
/// order. The product of two unit quaternions is again unit length.
impl<T: Number> Mul for Quat<T> {
    type Output = Quat<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let (x1, y1, z1, w1) = (self.x, self.y, self.z, self.w);
        let (x2, y2, z2, w2) = (rhs.x, rhs.y, rhs.z, rhs.w);

        Quat::from_components(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.as_vec() == other.as_vec()
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T> ApproxEq for Quat<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.as_vec().abs_diff_eq(other.as_vec(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.as_vec().rel_diff_eq(other.as_vec(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.as_vec().ulps_diff_eq(other.as_vec(), ulps_tolerance)
    }
}
