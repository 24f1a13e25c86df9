mod ops;
mod view;

use std::fmt;

use crate::{vec3, vec4, Mat4, Number, One, Sqrt, Trig, Vec3, Vector, Zero};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// The value `x*i + y*j + z*k + w` is stored as the 4-tuple `(x, y, z, w)`; `w` is the scalar
/// part. Unit-length quaternions ("*versors*") represent rotations in 3D space.
///
/// Most rotation operations ([`Quat::rotate`], [`Quat::slerp`], [`Quat::to_rotation_matrix`])
/// assume, but do not enforce, that their operands have unit length. Normalize first if in doubt.
///
/// Like [`Vector`], components can be read and written as fields (`q.w`), and all algebraic
/// operations return new values instead of mutating their operands.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts,
    /// while the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Returns the components as a 4-dimensional [`Vector`] `(x, y, z, w)`.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns a reference to the components as a 4-dimensional [`Vector`].
    pub fn as_vec(&self) -> &Vector<T, 4> {
        &self.vec
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion rotating by `radians` around `axis`.
    ///
    /// `axis` must already be normalized. This is deliberately not checked or corrected here; a
    /// non-unit axis yields a non-unit quaternion, which scales whatever it later rotates.
    pub fn rotation_around(axis: Vec3<T>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion representing a rotation around the X, Y, and Z axis, in sequence.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale
    /// the vector in addition to rotating it. When using quaternions to model rotations, it is
    /// advisable to ensure that quaternions are always of length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// The all-zero quaternion is returned unchanged, following the same policy as
    /// [`Vector::normalize`].
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    ///
    /// For unit quaternions this is the cosine of half the angle between the rotations; a
    /// negative value means `other` lies in the opposite hemisphere of the rotation group's
    /// double cover.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Rotates a vector by this (unit) quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clipspace::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let q = Quat::rotation_around(Vec3f::Z, FRAC_PI_2);
    /// assert_approx_eq!(q.rotate(Vec3f::X), Vec3f::Y).abs(1e-6);
    /// ```
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        let u = vec3(self.x, self.y, self.z);
        let two = T::ONE + T::ONE;
        let t = u.cross(v) * two;
        v + t * self.w + u.cross(t)
    }

    /// Spherically interpolates between `self` (at `t == 0`) and `other` (at `t == 1`).
    ///
    /// Both quaternions should be unit length. The interpolation always follows the shorter arc
    /// on the 4-dimensional unit hypersphere: when the dot product of the endpoints is negative,
    /// `other` is negated (which represents the same rotation) before interpolating.
    ///
    /// There is no special handling for (nearly) identical or antipodal endpoints. In those
    /// cases `sin(omega)` is zero and the result is NaN per IEEE-754.
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Number + Trig,
    {
        let mut other = other;
        let mut dot = self.dot(other);
        if dot < T::ZERO {
            other = -other;
            dot = -dot;
        }

        let omega = dot.acos();
        let sin_omega = omega.sin();
        self * (((T::ONE - t) * omega).sin() / sin_omega) + other * ((t * omega).sin() / sin_omega)
    }

    /// Converts this (unit) quaternion into the equivalent 4x4 rotation matrix.
    ///
    /// The translation part is zero and the last row and column are `(0, 0, 0, 1)`. The formula
    /// uses the components as-is, without re-normalizing; a non-unit quaternion produces a matrix
    /// that also scales.
    pub fn to_rotation_matrix(self) -> Mat4<T>
    where
        T: Number,
    {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let one = T::ONE;
        let zero = T::ZERO;
        let two = one + one;

        Mat4::from_columns([
            [
                one - two * (y * y + z * z),
                two * (x * y + z * w),
                two * (x * z - y * w),
                zero,
            ],
            [
                two * (x * y - z * w),
                one - two * (x * x + z * z),
                two * (y * z + x * w),
                zero,
            ],
            [
                two * (x * z + y * w),
                two * (y * z - x * w),
                one - two * (x * x + y * y),
                zero,
            ],
            [zero, zero, zero, one],
        ])
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quat")
            .field(&self.vec[0])
            .field(&self.vec[1])
            .field(&self.vec[2])
            .field(&self.vec[3])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec4, Mat4f, Vec3f};

    use super::*;

    #[test]
    fn access() {
        let mut q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.x, 1.0);
        assert_eq!(q.w, 4.0);
        q.w = 0.5;
        assert_eq!(q.w, 0.5);
        assert_eq!(q.into_vec(), vec4(1.0, 2.0, 3.0, 0.5));
    }

    #[test]
    fn normalize() {
        let q = Quatf::from_components(1.0, 2.0, 3.0, 4.0).normalize();
        assert_approx_eq!(
            q.into_vec(),
            vec4(0.1825742, 0.3651484, 0.5477226, 0.7302967)
        )
        .abs(1e-3);
        assert_approx_eq!(q.length(), 1.0);

        // Exact zero-guard case.
        let zero = Quatf::from_components(0.0, 0.0, 0.0, 0.0).normalize();
        assert_eq!(zero.into_vec().into_array(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn composition() {
        // Two quarter turns around Z make a half turn.
        let quarter = Quatf::rotation_around(Vec3f::Z, std::f32::consts::FRAC_PI_2);
        let half = quarter * quarter;
        assert_approx_eq!(half.rotate(Vec3f::X), -Vec3f::X).abs(1e-6);

        // Identity composes neutrally.
        let q = Quatf::rotation_around(vec3(1.0, 2.0, 3.0).normalize(), 0.456);
        assert_approx_eq!((Quatf::IDENTITY * q).into_vec(), q.into_vec()).abs(1e-6);
        assert_approx_eq!((q * Quatf::IDENTITY).into_vec(), q.into_vec()).abs(1e-6);
    }

    #[test]
    fn rotation_matrix_reference_values() {
        let axis = vec3(1.0f32, 2.0, 3.0).normalize();
        let angle = 45.6f32.to_radians();
        let mat = Quat::rotation_around(axis, angle).to_rotation_matrix();

        #[rustfmt::skip]
        let expected = Mat4f::from_columns([
            [ 0.7211159, 0.6157578, -0.3175439, 0.0],
            [-0.5299473, 0.7854738,  0.3196666, 0.0],
            [ 0.4462596, -0.0622351, 0.8927369, 0.0],
            [ 0.0,       0.0,        0.0,       1.0],
        ]);
        assert_approx_eq!(mat, expected).abs(1e-3);
    }

    #[test]
    fn quaternion_and_matrix_rotation_agree() {
        let axis = vec3(1.0f32, 2.0, 3.0).normalize();
        let angle = 45.6f32.to_radians();
        let q = Quat::rotation_around(axis, angle);

        for v in [vec3(0.5, -1.0, 2.0), Vec3f::X, vec3(-3.0, 0.25, 1.5)] {
            let direct = q.rotate(v);
            let via_matrix = (q.to_rotation_matrix() * v.extend(1.0)).truncate();
            assert_approx_eq!(direct, via_matrix).abs(1e-3);
        }
    }

    #[test]
    fn slerp_endpoints() {
        let q1 = Quatf::from_components(1.0, 2.0, 3.0, 4.0).normalize();
        let q2 = Quatf::from_components(5.0, 6.0, 7.0, 8.0).normalize();
        assert_approx_eq!(q1.slerp(q2, 0.0).into_vec(), q1.into_vec()).abs(1e-5);
        assert_approx_eq!(q1.slerp(q2, 1.0).into_vec(), q2.into_vec()).abs(1e-5);
    }

    #[test]
    fn slerp_takes_shorter_arc() {
        let q1 = Quatf::rotation_around(Vec3f::Z, 0.1);
        // `-q2` is the same rotation as `q2` but on the far hemisphere; slerp must flip it back
        // and land on `q2` (up to sign) at `t == 1`.
        let q2 = Quatf::rotation_around(Vec3f::Z, 0.4);
        let neg_q2 = -q2;
        let end = q1.slerp(neg_q2, 1.0);
        assert_approx_eq!(end.into_vec(), q2.into_vec()).abs(1e-5);
    }

    #[test]
    fn slerp_reference_values() {
        let q1 = Quatf::from_components(1.0, 2.0, 3.0, 4.0).normalize();
        let q2 = Quatf::from_components(5.0, 6.0, 7.0, 8.0).normalize();
        assert_approx_eq!(
            q1.slerp(q2, 0.123).into_vec(),
            vec4(0.2076107, 0.3775370, 0.5474632, 0.7173895)
        )
        .abs(1e-3);
    }

    #[test]
    fn slerp_identical_endpoints_are_nan() {
        // Equal endpoints make sin(omega) zero; the division is not guarded, so the result is
        // NaN rather than a panic or a silent fallback.
        let q = Quatf::from_components(1.0, 2.0, 3.0, 4.0).normalize();
        let out = q.slerp(q, 0.5);
        assert!(out.x.is_nan());
        assert!(out.w.is_nan());
    }

    #[test]
    fn per_axis_constructors() {
        let angle = 0.83;
        assert_approx_eq!(
            Quatf::from_rotation_x(angle).to_rotation_matrix(),
            Mat4f::rotation_x(angle)
        )
        .abs(1e-6);
        assert_approx_eq!(
            Quatf::from_rotation_y(angle).to_rotation_matrix(),
            Mat4f::rotation_y(angle)
        )
        .abs(1e-6);
        assert_approx_eq!(
            Quatf::from_rotation_z(angle).to_rotation_matrix(),
            Mat4f::rotation_z(angle)
        )
        .abs(1e-6);
    }
}
