use std::ops::{Index, IndexMut, Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Neg};

use bytemuck::{Pod, Zeroable};
use datasize::DataSize;

use crate::{math::Vec2, MatError};

use super::{MatIndex, OutOfBoundsError, index::assert_offset};

/// 2x2 matrix
///
/// The layout is row-major:
///
/// ```text
/// [ a b ]
/// [ c d ]
/// ```
///
/// Division and inversion are not guarded: a singular matrix or a zero
/// divisor produces `inf`/`NaN` fields. Use [`Mat22::try_inverse`] for a
/// checked inverse.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable, DataSize)]
pub struct Mat22 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

#[cfg(feature="float-cmp")]
impl float_cmp::ApproxEq for Mat22 {
    type Margin = float_cmp::F32Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        <&[f32] as float_cmp::ApproxEq>::approx_eq(self.as_array(), other.as_array(), margin)
    }
}

impl From<[f32; 4]> for Mat22 {
    fn from([a, b, c, d]: [f32; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl From<[[f32; 2]; 2]> for Mat22 {
    fn from([[a, b], [c, d]]: [[f32; 2]; 2]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl From<Mat22> for [f32; 4] {
    fn from(value: Mat22) -> Self {
        *value.as_array()
    }
}

impl Mat22 {
    /// Create matrix from its elements, in row-major order
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Create matrix with all zeroes
    pub const fn zero() -> Self {
        Self::new(0., 0., 0., 0.)
    }

    /// Create an identity matrix
    pub const fn identity() -> Self {
        Self::new(
            1., 0.,
            0., 1.,
        )
    }

    pub const fn from_rows(r0: Vec2, r1: Vec2) -> Self {
        Self::new(r0.x, r0.y, r1.x, r1.y)
    }

    pub const fn from_cols(c0: Vec2, c1: Vec2) -> Self {
        Self::new(c0.x, c1.x, c0.y, c1.y)
    }

    /// Overwrite all elements
    pub fn set(&mut self, a: f32, b: f32, c: f32, d: f32) {
        *self = Self::new(a, b, c, d);
    }

    /// Elements, in row-major order
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    pub const fn rows(&self) -> [Vec2; 2] {
        [Vec2::new(self.a, self.b), Vec2::new(self.c, self.d)]
    }

    pub const fn cols(&self) -> [Vec2; 2] {
        [Vec2::new(self.a, self.c), Vec2::new(self.b, self.d)]
    }

    /// Get element at row-major `offset`
    pub fn get(&self, offset: usize) -> Result<f32, OutOfBoundsError> {
        assert_offset(offset)?;
        Ok(self.as_array()[offset])
    }

    pub fn get_mut(&mut self, offset: usize) -> Result<&mut f32, OutOfBoundsError> {
        assert_offset(offset)?;
        Ok(&mut self.as_array_mut()[offset])
    }

    /// Get element at `(row, col)`
    pub fn get_at(&self, index: impl Into<MatIndex>) -> Result<f32, OutOfBoundsError> {
        let offset = index.into().offset()?;
        Ok(self.as_array()[offset])
    }

    /// Determinant
    #[inline]
    pub fn det(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    pub fn determinant_of(m: &Mat22) -> f32 {
        m.det()
    }

    pub fn trace(&self) -> f32 {
        self.a + self.d
    }

    /// Transpose
    pub const fn transposed(&self) -> Self {
        Self::new(
            self.a, self.c,
            self.b, self.d,
        )
    }

    /// In-place transpose
    pub fn transpose(&mut self) {
        std::mem::swap(&mut self.b, &mut self.c);
    }

    pub fn transpose_of(m: &Mat22) -> Self {
        m.transposed()
    }

    /// Adjugate (transposed cofactor matrix)
    pub fn adjugate(&self) -> Self {
        Self::new(
            self.d, -self.b,
            -self.c, self.a,
        )
    }

    /// In-place inverse
    ///
    /// A singular matrix yields non-finite elements.
    pub fn invert(&mut self) {
        let det = self.det();
        if det == 0. {
            log::debug!("Inverting singular matrix {:?}", self);
        }
        *self = self.adjugate() / det;
    }

    /// Matrix inverse
    ///
    /// A singular matrix yields non-finite elements.
    pub fn inverse(&self) -> Self {
        let mut res = *self;
        res.invert();
        res
    }

    pub fn inverse_of(m: &Mat22) -> Self {
        m.inverse()
    }

    /// Matrix inverse
    ///
    /// Returns [`MatError::Singular`] if this matrix is not invertible
    pub fn try_inverse(&self) -> Result<Self, MatError> {
        let det = self.det();
        if det == 0. {
            return Err(MatError::Singular { det });
        }
        Ok(self.adjugate() / det)
    }

    #[inline]
    pub fn map(&self, map_fn: impl Fn(f32) -> f32) -> Self {
        Self::new(
            map_fn(self.a),
            map_fn(self.b),
            map_fn(self.c),
            map_fn(self.d),
        )
    }

    #[inline]
    fn zip_map(&self, rhs: &Mat22, map_fn: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            map_fn(self.a, rhs.a),
            map_fn(self.b, rhs.b),
            map_fn(self.c, rhs.c),
            map_fn(self.d, rhs.d),
        )
    }

    pub fn scale(&self, scalar: f32) -> Self {
        self.map(|e| e * scalar)
    }

    pub fn scale_inplace(&mut self, scalar: f32) {
        for e in self.as_array_mut().iter_mut() {
            *e *= scalar;
        }
    }

    /// Entrywise (Hadamard) product
    pub fn entrywise_mul(&self, rhs: &Mat22) -> Self {
        self.zip_map(rhs, |l, r| l * r)
    }

    /// Entrywise quotient
    pub fn entrywise_div(&self, rhs: &Mat22) -> Self {
        self.zip_map(rhs, |l, r| l / r)
    }

    /// Matrix multiplication
    pub fn matmul(&self, rhs: &Mat22) -> Self {
        Self::new(
            self.a * rhs.a + self.b * rhs.c, self.a * rhs.b + self.b * rhs.d,
            self.c * rhs.a + self.d * rhs.c, self.c * rhs.b + self.d * rhs.d,
        )
    }

    /// Matrix-vector product
    pub fn transform(&self, v: &Vec2) -> Vec2 {
        Vec2::new(
            self.a * v.x + self.b * v.y,
            self.c * v.x + self.d * v.y,
        )
    }
}

impl Index<usize> for Mat22 {
    type Output = f32;

    fn index(&self, offset: usize) -> &Self::Output {
        &self.as_array()[offset]
    }
}

impl IndexMut<usize> for Mat22 {
    fn index_mut(&mut self, offset: usize) -> &mut Self::Output {
        &mut self.as_array_mut()[offset]
    }
}

impl Index<(usize, usize)> for Mat22 {
    type Output = f32;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = MatIndex::from(index).offset()
            .unwrap_or_else(|e| panic!("{e}"));
        &self.as_array()[offset]
    }
}

impl IndexMut<(usize, usize)> for Mat22 {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = MatIndex::from(index).offset()
            .unwrap_or_else(|e| panic!("{e}"));
        &mut self.as_array_mut()[offset]
    }
}

/// Implement a binary operator for every owned/borrowed combination,
/// given the `&Mat22 op &Rhs` implementation
macro_rules! forward_binop {
    ($trait: ident, $method: ident, $rhs: ty, $out: ty) => {
        impl $trait<$rhs> for Mat22 {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> Self::Output {
                <&Mat22 as $trait<&$rhs>>::$method(&self, &rhs)
            }
        }

        impl $trait<&$rhs> for Mat22 {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: &$rhs) -> Self::Output {
                <&Mat22 as $trait<&$rhs>>::$method(&self, rhs)
            }
        }

        impl $trait<$rhs> for &Mat22 {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> Self::Output {
                <&Mat22 as $trait<&$rhs>>::$method(self, &rhs)
            }
        }
    };
}

impl Add<&Mat22> for &Mat22 {
    type Output = Mat22;

    fn add(self, rhs: &Mat22) -> Self::Output {
        self.zip_map(rhs, |l, r| l + r)
    }
}
forward_binop!(Add, add, Mat22, Mat22);

impl Sub<&Mat22> for &Mat22 {
    type Output = Mat22;

    fn sub(self, rhs: &Mat22) -> Self::Output {
        self.zip_map(rhs, |l, r| l - r)
    }
}
forward_binop!(Sub, sub, Mat22, Mat22);

impl Mul<&Mat22> for &Mat22 {
    type Output = Mat22;

    fn mul(self, rhs: &Mat22) -> Self::Output {
        self.matmul(rhs)
    }
}
forward_binop!(Mul, mul, Mat22, Mat22);

impl Mul<&Vec2> for &Mat22 {
    type Output = Vec2;

    fn mul(self, rhs: &Vec2) -> Self::Output {
        self.transform(rhs)
    }
}
forward_binop!(Mul, mul, Vec2, Vec2);

impl Mul<f32> for &Mat22 {
    type Output = Mat22;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<f32> for Mat22 {
    type Output = Mat22;

    fn mul(mut self, rhs: f32) -> Self::Output {
        self.scale_inplace(rhs);
        self
    }
}

impl Mul<Mat22> for f32 {
    type Output = Mat22;

    fn mul(self, rhs: Mat22) -> Self::Output {
        rhs * self
    }
}

impl Mul<&Mat22> for f32 {
    type Output = Mat22;

    fn mul(self, rhs: &Mat22) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for &Mat22 {
    type Output = Mat22;

    fn div(self, rhs: f32) -> Self::Output {
        self.map(|e| e / rhs)
    }
}

impl Div<f32> for Mat22 {
    type Output = Mat22;

    fn div(mut self, rhs: f32) -> Self::Output {
        self /= rhs;
        self
    }
}

impl Neg for Mat22 {
    type Output = Mat22;

    fn neg(self) -> Self::Output {
        self.map(|e| -e)
    }
}

impl Neg for &Mat22 {
    type Output = Mat22;

    fn neg(self) -> Self::Output {
        self.map(|e| -e)
    }
}

impl AddAssign<&Mat22> for Mat22 {
    fn add_assign(&mut self, rhs: &Mat22) {
        self.a += rhs.a;
        self.b += rhs.b;
        self.c += rhs.c;
        self.d += rhs.d;
    }
}

impl AddAssign for Mat22 {
    fn add_assign(&mut self, rhs: Mat22) {
        *self += &rhs;
    }
}

impl SubAssign<&Mat22> for Mat22 {
    fn sub_assign(&mut self, rhs: &Mat22) {
        self.a -= rhs.a;
        self.b -= rhs.b;
        self.c -= rhs.c;
        self.d -= rhs.d;
    }
}

impl SubAssign for Mat22 {
    fn sub_assign(&mut self, rhs: Mat22) {
        *self -= &rhs;
    }
}

impl MulAssign<f32> for Mat22 {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale_inplace(rhs);
    }
}

/// `self = self * rhs`
impl MulAssign<&Mat22> for Mat22 {
    fn mul_assign(&mut self, rhs: &Mat22) {
        *self = self.matmul(rhs);
    }
}

impl MulAssign for Mat22 {
    fn mul_assign(&mut self, rhs: Mat22) {
        *self *= &rhs;
    }
}

impl DivAssign<f32> for Mat22 {
    fn div_assign(&mut self, rhs: f32) {
        for e in self.as_array_mut().iter_mut() {
            *e /= rhs;
        }
    }
}

/// Entrywise division (not multiplication by the inverse)
impl DivAssign<&Mat22> for Mat22 {
    fn div_assign(&mut self, rhs: &Mat22) {
        self.a /= rhs.a;
        self.b /= rhs.b;
        self.c /= rhs.c;
        self.d /= rhs.d;
    }
}

impl DivAssign for Mat22 {
    fn div_assign(&mut self, rhs: Mat22) {
        *self /= &rhs;
    }
}
