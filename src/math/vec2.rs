use std::{fmt::Display, ops::{Add, Sub, Neg, Div, Mul, MulAssign, AddAssign, DivAssign, SubAssign}};

use bytemuck::{Pod, Zeroable};
use datasize::DataSize;

/// 2D vector
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable, DataSize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[cfg(feature="float-cmp")]
impl float_cmp::ApproxEq for Vec2 {
    type Margin = float_cmp::F32Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin: Self::Margin = margin.into();
        float_cmp::ApproxEq::approx_eq(self.x, other.x, margin)
            && float_cmp::ApproxEq::approx_eq(self.y, other.y, margin)
    }
}

impl Vec2 {
    /// Zero vector
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0., 0.)
    }

    /// Create vector with both x and y having the same value
    #[inline]
    pub const fn dup(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Create vector from values
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// X component
    #[inline(always)]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Y component
    #[inline(always)]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Vector dot product
    #[inline]
    pub fn dot(&self, other: &Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared magnitude
    #[inline]
    pub fn mag_sq(&self) -> f32 {
        self.dot(self)
    }

    /// Vector magnitude
    #[inline]
    pub fn mag(&self) -> f32 {
        f32::hypot(self.x, self.y)
    }

    /// This vector, normalized
    pub fn norm(&self) -> Vec2 {
        let mag = self.mag();
        self / mag
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<&Vec2> for &Vec2 {
    type Output = Vec2;

    fn add(self, rhs: &Vec2) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<&Vec2> for &Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: &Vec2) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(mut self, rhs: f32) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul<f32> for &Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Self::Output {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    fn div(mut self, rhs: f32) -> Self::Output {
        self /= rhs;
        self
    }
}

impl Div<f32> for &Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f32) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod test {
    use super::Vec2;

    #[test]
    fn test_add() {
        let u = Vec2::new(1., 2.);
        let v = Vec2::new(-1., 5.);
        let w = u + v;
        assert_eq!(w.x(), 0.);
        assert_eq!(w.y(), 7.);
        assert_eq!(&u + &v, w);
    }

    #[test]
    fn test_sub_neg() {
        let mut u = Vec2::new(3., 4.);
        u -= Vec2::dup(1.);
        assert_eq!(u, Vec2::new(2., 3.));
        assert_eq!(-u, Vec2::new(-2., -3.));
    }

    #[test]
    fn test_mag() {
        let v = Vec2::new(3., 4.);
        assert_eq!(v.mag_sq(), 25.);
        assert_eq!(v.mag(), 5.);
        let n = v.norm();
        assert!((n.mag() - 1.).abs() < 1e-6);
    }

    #[test]
    fn test_scale() {
        let v = Vec2::from([2., -6.]);
        assert_eq!(v * 0.5, Vec2::new(1., -3.));
        assert_eq!(v / 2., Vec2::new(1., -3.));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(3., 7.).to_string(), "3, 7");
    }
}
