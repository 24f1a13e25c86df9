use std::{array, fmt, slice};

use crate::{Number, One, Quat, Sqrt, Trig, Vec2, Vec3, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Storage
///
/// Elements are stored as `C` contiguous columns of `R` elements each, without padding: the flat
/// element at index `col * R + row` is the entry at `(row, col)`. This matches the uniform-buffer
/// layout expected by OpenGL/WebGL/wgpu, so [`Matrix::as_slice`] (or a [`bytemuck`] cast) can be
/// uploaded directly. Reordering would break GPU interop, and no other layout is offered.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from arrays of row or
///   column vectors.
/// - [`Matrix::from_fn`] invokes a closure with each element's row and column.
/// - [`Matrix::from_diagonal`] creates a square matrix with the given diagonal.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are the all-zero and identity matrices.
/// - [`Mat4`] additionally offers the transform constructors ([`Mat4::translation`],
///   [`Mat4::rotation_x`], [`Mat4::look_at`], [`Mat4::perspective`], ...), and [`Mat3`] the
///   projective-transform constructors.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(usize, usize)` tuples in `(row, col)`
/// order, matching mathematical notation. Indexing out of bounds panics; [`Matrix::get`] and
/// [`Matrix::get_mut`] are the checked variants.
///
/// All transform operations return new matrices; a constructed matrix is never mutated by this
/// crate's own operations.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clipspace::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// This is the storage order, so no elements move.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// This mirrors [`array::from_fn`].
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clipspace::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns the elements as a flat slice of length `R * C`, in column-major order.
    ///
    /// This is the exact sequence a GPU uniform of matching dimensions expects, so the slice can
    /// be written to an upload buffer as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clipspace::*;
    /// let mat = Matrix::from_columns([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        // Safety: `[[T; R]; C]` is `R * C` contiguous elements.
        unsafe { slice::from_raw_parts(self.0.as_ptr().cast(), R * C) }
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N, N> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any matrix
    /// or vector with it returns the operand unchanged.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < N {
            this.0[i][i] = T::ONE;
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clipspace::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        // Natural (row-wise) writing order, regardless of storage order.
        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Inverts this 2x2 matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `self` is not invertible (ie. if its [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        let [[a, c], [b, d]] = self.0;
        Matrix::from_columns([[d, -c], [-b, a]]) * (T::ONE / det)
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([[cos, sin], [-sin, cos]])
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Returns the homography mapping the unit square onto the quadrilateral `quad`.
    ///
    /// The corners of the unit square `(0,0)`, `(1,0)`, `(1,1)`, `(0,1)` map to `quad[0]` through
    /// `quad[3]` in order. To map a point, lift it into homogeneous coordinates, multiply, and
    /// divide back out:
    ///
    /// ```
    /// # use clipspace::*;
    /// let quad = [vec2(2.0, 1.0), vec2(5.0, 1.0), vec2(6.0, 4.0), vec2(1.0, 3.0)];
    /// let h = Mat3f::projective_transform(quad);
    /// let mapped = (h * vec2(0.0, 0.0).extend(1.0)).to_cartesian();
    /// assert_approx_eq!(mapped, quad[0]);
    /// ```
    ///
    /// The matrix is assembled in closed form from the signed areas spanned by the quad's corners;
    /// no linear solver runs. The four corners must form a convex, non-degenerate quadrilateral
    /// with the same winding as the unit square. This is **not checked**: other inputs yield a
    /// singular or otherwise meaningless matrix without any diagnostic.
    pub fn projective_transform(quad: [Vec2<T>; 4]) -> Self {
        let [p1, p2, p3, p4] = quad;
        // Work relative to the first corner.
        let (u2, v2) = (p2.x - p1.x, p2.y - p1.y);
        let (u3, v3) = (p3.x - p1.x, p3.y - p1.y);
        let (u4, v4) = (p4.x - p1.x, p4.y - p1.y);

        // Doubled signed areas of the corner triangles. A convex quad in consistent winding has
        // all four of these sharing one nonzero sign.
        let d123 = u2 * v3 - u3 * v2;
        let d124 = u2 * v4 - u4 * v2;
        let d134 = u3 * v4 - u4 * v3;
        let d234 = d123 - d124 + d134;

        let g = (d124 - d123) / d234;
        let h = (d124 - d134) / d234;

        let one = T::ONE;
        Self::from_columns([
            [p2.x * (one + g) - p1.x, p2.y * (one + g) - p1.y, g],
            [p4.x * (one + h) - p1.x, p4.y * (one + h) - p1.y, h],
            [p1.x, p1.y, one],
        ])
    }

    /// Returns the homography mapping the quadrilateral `quad` onto the unit square.
    ///
    /// This is the inverse of [`Mat3::projective_transform`] for the same corners, computed as the
    /// adjugate of the forward matrix (homogeneous coordinates make the missing `1/det` factor
    /// irrelevant). The same convexity precondition applies, and is likewise unchecked.
    pub fn projective_inv_transform(quad: [Vec2<T>; 4]) -> Self {
        Self::projective_transform(quad).adjugate()
    }

    fn adjugate(self) -> Self {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        Self::from_columns([
            [e * i - f * h, f * g - d * i, d * h - e * g],
            [c * h - b * i, a * i - c * g, b * g - a * h],
            [b * f - c * e, c * d - a * f, a * e - b * d],
        ])
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Creates a transform that translates by `v`.
    pub fn translation(v: Vec3<T>) -> Self {
        let o = T::ONE;
        let z = T::ZERO;
        Self::from_columns([
            [o, z, z, z],
            [z, o, z, z],
            [z, z, o, z],
            [v.x, v.y, v.z, o],
        ])
    }

    /// Creates a transform that scales each axis by the corresponding component of `v`.
    pub fn scaling(v: Vec3<T>) -> Self {
        Self::from_diagonal([v.x, v.y, v.z, T::ONE])
    }

    /// Creates a right-handed rotation around the X axis.
    ///
    /// A positive angle rotates the Y axis towards the Z axis.
    pub fn rotation_x(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        let o = T::ONE;
        let z = T::ZERO;
        Self::from_columns([
            [o, z, z, z],
            [z, cos, sin, z],
            [z, -sin, cos, z],
            [z, z, z, o],
        ])
    }

    /// Creates a right-handed rotation around the Y axis.
    ///
    /// A positive angle rotates the Z axis towards the X axis. Note that relative to
    /// [`Mat4::rotation_x`] and [`Mat4::rotation_z`], the sine terms trade places; this is what
    /// keeps the rotation right-handed and is easy to get wrong when writing the matrix out by
    /// its "shape".
    pub fn rotation_y(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        let o = T::ONE;
        let z = T::ZERO;
        Self::from_columns([
            [cos, z, -sin, z],
            [z, o, z, z],
            [sin, z, cos, z],
            [z, z, z, o],
        ])
    }

    /// Creates a right-handed rotation around the Z axis.
    ///
    /// A positive angle rotates the X axis towards the Y axis.
    pub fn rotation_z(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        let o = T::ONE;
        let z = T::ZERO;
        Self::from_columns([
            [cos, sin, z, z],
            [-sin, cos, z, z],
            [z, z, o, z],
            [z, z, z, o],
        ])
    }

    /// Creates a right-handed rotation of `radians` around an arbitrary `axis`.
    ///
    /// `axis` must already be normalized; this is not checked, and a non-unit axis silently
    /// produces a transform that also scales. The rotation is built by going through
    /// [`Quat::rotation_around`] and [`Quat::to_rotation_matrix`] so that axis-angle rotations
    /// share one conversion path with quaternion-driven animation.
    pub fn rotation_around(axis: Vec3<T>, radians: T) -> Self
    where
        T: Trig,
    {
        Quat::rotation_around(axis, radians).to_rotation_matrix()
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking towards `target`.
    ///
    /// `up` picks the camera's roll; it does not need to be normalized or perpendicular to the
    /// view direction, only non-parallel to it. The camera looks down its local negative Z axis,
    /// as OpenGL convention dictates.
    pub fn look_at(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self
    where
        T: Sqrt,
    {
        let z_axis = (eye - target).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis).normalize();

        // The basis vectors form the *rows* of the rotation part: the matrix maps world
        // coordinates into the camera frame, which is the inverse (transpose) of the camera's
        // orientation.
        let z = T::ZERO;
        Self::from_columns([
            [x_axis.x, y_axis.x, z_axis.x, z],
            [x_axis.y, y_axis.y, z_axis.y, z],
            [x_axis.z, y_axis.z, z_axis.z, z],
            [-eye.dot(x_axis), -eye.dot(y_axis), -eye.dot(z_axis), T::ONE],
        ])
    }

    /// Creates an orthographic projection matrix mapping the given axis-aligned box to the
    /// OpenGL clip volume (`-1..=1` on every axis).
    ///
    /// `near` and `far` are distances along the camera's negative Z axis. Degenerate extents
    /// (`left == right` etc.) are not rejected; they produce infinities per IEEE-754.
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let z = T::ZERO;
        Self::from_columns([
            [two / (right - left), z, z, z],
            [z, two / (top - bottom), z, z],
            [z, z, -two / (far - near), z],
            [
                -(right + left) / (right - left),
                -(top + bottom) / (top - bottom),
                -(far + near) / (far - near),
                T::ONE,
            ],
        ])
    }

    /// Creates a perspective projection matrix from the extents of the near clipping plane.
    ///
    /// `left`, `right`, `bottom` and `top` bound the visible rectangle on the near plane;
    /// `near` and `far` are the clip plane distances along the camera's negative Z axis, mapped
    /// to `-1` and `1` in normalized device coordinates. As with [`Mat4::orthographic`], no
    /// input validation takes place.
    pub fn frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let z = T::ZERO;
        Self::from_columns([
            [two * near / (right - left), z, z, z],
            [z, two * near / (top - bottom), z, z],
            [
                (right + left) / (right - left),
                (top + bottom) / (top - bottom),
                -(far + near) / (far - near),
                -T::ONE,
            ],
            [z, z, -two * far * near / (far - near), z],
        ])
    }

    /// Creates a perspective projection matrix from a vertical field of view and aspect ratio.
    ///
    /// Derives the near-plane extents and delegates to [`Mat4::frustum`]. `aspect_ratio` is
    /// width over height.
    pub fn perspective(fov_y_radians: T, aspect_ratio: T, near: T, far: T) -> Self
    where
        T: Trig,
    {
        let half = T::ONE / (T::ONE + T::ONE);
        let top = near * (fov_y_radians * half).tan();
        let right = top * aspect_ratio;
        Self::frustum(-right, right, -top, top, near, far)
    }

    /// Composes `self` with a translation by `v`, applied in `self`'s local frame.
    ///
    /// All composition helpers are right-multiplications: `m.translate(v)` equals
    /// `m * Mat4::translation(v)`, so the new transform acts *before* `self` when the result is
    /// applied to a vector. This is what makes chained calls read in local-frame order:
    /// `view.translate(pos).rotate_y(yaw)` first rotates, then translates, then applies `view`.
    pub fn translate(self, v: Vec3<T>) -> Self {
        self * Self::translation(v)
    }

    /// Composes `self` with a scaling by `v`, applied in `self`'s local frame.
    pub fn scale(self, v: Vec3<T>) -> Self {
        self * Self::scaling(v)
    }

    /// Composes `self` with a rotation around the local X axis.
    pub fn rotate_x(self, radians: T) -> Self
    where
        T: Trig,
    {
        self * Self::rotation_x(radians)
    }

    /// Composes `self` with a rotation around the local Y axis.
    pub fn rotate_y(self, radians: T) -> Self
    where
        T: Trig,
    {
        self * Self::rotation_y(radians)
    }

    /// Composes `self` with a rotation around the local Z axis.
    pub fn rotate_z(self, radians: T) -> Self
    where
        T: Trig,
    {
        self * Self::rotation_z(radians)
    }

    /// Composes `self` with a rotation around an arbitrary local `axis`.
    ///
    /// Like [`Mat4::rotation_around`], the axis must be pre-normalized.
    pub fn rotate_around(self, axis: Vec3<T>, radians: T) -> Self
    where
        T: Trig,
    {
        self * Self::rotation_around(axis, radians)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec2, vec3, vec4, Vec4f};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2::from_rows([[1, 2], [3, 4]]),
            Mat2::from_columns([[1, 3], [2, 4]]),
        );
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
    }

    #[test]
    fn column_major_layout() {
        // The flat sequence is column after column; a translation's vector lands in the last 4
        // elements, exactly where a GPU uniform expects it.
        let m = Mat4f::translation(vec3(1.0, 2.0, 3.0));
        assert_eq!(
            m.as_slice(),
            &[
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                1.0, 2.0, 3.0, 1.0, //
            ]
        );
        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m[(1, 3)], 2.0);
        assert_eq!(m[(2, 3)], 3.0);

        // And bytemuck sees the same 16 floats.
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&m));
        assert_eq!(floats, m.as_slice());
    }

    #[test]
    fn identity_laws() {
        let m2 = Mat2f::from_rows([[1.0, 2.0], [3.0, -4.0]]);
        assert_approx_eq!(Mat2f::IDENTITY * m2, m2);
        assert_approx_eq!(m2 * Mat2f::IDENTITY, m2);

        let m3 = Mat3f::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        assert_approx_eq!(Mat3f::IDENTITY * m3, m3);
        assert_approx_eq!(m3 * Mat3f::IDENTITY, m3);

        let m4 = Mat4f::translation(vec3(1.0, -2.0, 3.0)).rotate_y(0.5);
        assert_approx_eq!(Mat4f::IDENTITY * m4, m4);
        assert_approx_eq!(m4 * Mat4f::IDENTITY, m4);

        assert_eq!(Mat4f::IDENTITY * vec4(1.0, 2.0, 3.0, 4.0), vec4(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn mat_mat_mul() {
        let a = Mat3::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let b = Mat3::from_rows([[9, 8, 7], [6, 5, 4], [3, 2, 1]]);
        let c = a * b;
        assert_eq!(c[(0, 0)], 1 * 9 + 2 * 6 + 3 * 3);
        assert_eq!(c[(2, 1)], 7 * 8 + 8 * 5 + 9 * 2);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);
    }

    #[test]
    fn rotation_2d() {
        let cw = Mat2f::rotation_clockwise(0.0);
        assert_eq!(cw, cw.invert());

        let cw = Mat2f::rotation_clockwise(PI);
        assert_approx_eq!(cw, cw.invert()).abs(1e-6);
    }

    #[test]
    fn axis_rotations_are_right_handed() {
        // X: Y rotates towards Z.
        assert_approx_eq!(Mat4f::rotation_x(FRAC_PI_2) * Vec4f::Y, Vec4f::Z).abs(1e-6);
        // Y: Z rotates towards X.
        assert_approx_eq!(Mat4f::rotation_y(FRAC_PI_2) * Vec4f::Z, Vec4f::X).abs(1e-6);
        // Z: X rotates towards Y.
        assert_approx_eq!(Mat4f::rotation_z(FRAC_PI_2) * Vec4f::X, Vec4f::Y).abs(1e-6);
    }

    #[test]
    fn rotation_around_matches_axis_rotations() {
        let angle = 0.83;
        assert_approx_eq!(
            Mat4f::rotation_around(vec3(1.0, 0.0, 0.0), angle),
            Mat4f::rotation_x(angle)
        )
        .abs(1e-6);
        assert_approx_eq!(
            Mat4f::rotation_around(vec3(0.0, 1.0, 0.0), angle),
            Mat4f::rotation_y(angle)
        )
        .abs(1e-6);
        assert_approx_eq!(
            Mat4f::rotation_around(vec3(0.0, 0.0, 1.0), angle),
            Mat4f::rotation_z(angle)
        )
        .abs(1e-6);
    }

    #[test]
    fn translation_and_scaling() {
        let p = vec4(1.0, 2.0, 3.0, 1.0);
        assert_eq!(Mat4f::translation(vec3(10.0, 20.0, 30.0)) * p, vec4(11.0, 22.0, 33.0, 1.0));
        assert_eq!(Mat4f::scaling(vec3(2.0, 3.0, 4.0)) * p, vec4(2.0, 6.0, 12.0, 1.0));

        // Directions (w == 0) ignore translation.
        let d = vec4(1.0, 2.0, 3.0, 0.0);
        assert_eq!(Mat4f::translation(vec3(10.0, 20.0, 30.0)) * d, d);
    }

    #[test]
    fn composition_is_right_multiplication() {
        let m = Mat4f::rotation_z(0.7);
        let t = vec3(1.0, -2.0, 0.5);
        assert_eq!(m.translate(t), m * Mat4f::translation(t));
        assert_eq!(m.scale(t), m * Mat4f::scaling(t));
        assert_eq!(m.rotate_x(0.3), m * Mat4f::rotation_x(0.3));

        // Local-frame semantics: translating a rotated frame moves along the rotated axes.
        let moved = Mat4f::rotation_z(FRAC_PI_2).translate(vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(moved * vec4(0.0, 0.0, 0.0, 1.0), vec4(0.0, 1.0, 0.0, 1.0)).abs(1e-6);
    }

    #[test]
    fn look_at() {
        let view = Mat4f::look_at(vec3(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);

        // The eye maps to the origin and the target ends up in front of the camera (negative Z).
        assert_approx_eq!(view * vec4(0.0, 0.0, 5.0, 1.0), vec4(0.0, 0.0, 0.0, 1.0)).abs(1e-6);
        assert_approx_eq!(view * vec4(0.0, 0.0, 0.0, 1.0), vec4(0.0, 0.0, -5.0, 1.0)).abs(1e-6);
        // World X is camera X here.
        assert_approx_eq!(view * vec4(1.0, 0.0, 5.0, 1.0), vec4(1.0, 0.0, 0.0, 1.0)).abs(1e-6);
    }

    #[test]
    fn orthographic() {
        let m = Mat4f::orthographic(-2.0, 2.0, -2.0, 2.0, 0.0, 4.0);
        assert_approx_eq!(m * vec4(2.0, 2.0, -4.0, 1.0), vec4(1.0, 1.0, 1.0, 1.0)).abs(1e-6);
        assert_approx_eq!(m * vec4(-2.0, -2.0, 0.0, 1.0), vec4(-1.0, -1.0, -1.0, 1.0)).abs(1e-6);
    }

    #[test]
    fn perspective() {
        // 90° vertical fov and aspect 1 means the near plane spans -1..1 at distance 1.
        let m = Mat4f::perspective(FRAC_PI_2, 1.0, 1.0, 3.0);

        let ndc = |v: Vec4f| (m * v).to_cartesian();
        assert_approx_eq!(ndc(vec4(0.0, 0.0, -1.0, 1.0)), vec3(0.0, 0.0, -1.0)).abs(1e-5);
        assert_approx_eq!(ndc(vec4(0.0, 0.0, -3.0, 1.0)), vec3(0.0, 0.0, 1.0)).abs(1e-5);
        assert_approx_eq!(ndc(vec4(1.0, 1.0, -1.0, 1.0)), vec3(1.0, 1.0, -1.0)).abs(1e-5);

        // Same matrix via explicit near-plane extents.
        assert_approx_eq!(m, Mat4f::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0)).abs(1e-6);
    }

    #[test]
    fn degenerate_frustum_propagates() {
        // No validation: a zero-depth frustum divides by zero instead of panicking.
        let m = Mat4f::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 1.0);
        assert!(m[(2, 2)].is_infinite());
    }

    const QUAD: [Vec2<f32>; 4] = [
        vec2(2.0, 1.0),
        vec2(5.0, 1.0),
        vec2(6.0, 4.0),
        vec2(1.0, 3.0),
    ];

    #[test]
    fn projective_transform_maps_corners() {
        let h = Mat3f::projective_transform(QUAD);
        let corners = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)];
        for (corner, expected) in corners.into_iter().zip(QUAD) {
            let mapped = (h * corner.extend(1.0)).to_cartesian();
            assert_approx_eq!(mapped, expected).abs(1e-4);
        }

        let inv = Mat3f::projective_inv_transform(QUAD);
        for (corner, quad_pt) in corners.into_iter().zip(QUAD) {
            let mapped = (inv * quad_pt.extend(1.0)).to_cartesian();
            assert_approx_eq!(mapped, corner).abs(1e-4);
        }
    }

    #[test]
    fn projective_round_trip() {
        let fwd = Mat3f::projective_transform(QUAD);
        let inv = Mat3f::projective_inv_transform(QUAD);

        for &(x, y) in &[(0.0, 0.0), (1.0, 1.0), (0.5, 0.5), (0.3, 0.7), (0.9, 0.1)] {
            let v = vec3(x, y, 1.0);
            let there = fwd * v;
            let back = (inv * there).to_cartesian();
            assert_approx_eq!(back, v.truncate()).abs(1e-3);
        }
    }
}
