use super::EPS;
use crate::error::{MathError, MathResult};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt::{Display, Formatter},
    ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub},
};


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Add<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x + rhs,
            y: self.y + rhs,
            z: self.z + rhs,
        }
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Sub<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x - rhs,
            y: self.y - rhs,
            z: self.z - rhs,
        }
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        Vector3 {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
        }
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vector3> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Div<Vector3> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Vector3) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid index {} for Vector3!", index),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Invalid index {} for Vector3!", index),
        }
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(value: Vector3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl From<Vector4> for Vector3 {
    #[inline]
    fn from(value: Vector4) -> Self {
        value.xyz()
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Reads the first three values of `values`.
    #[inline]
    pub fn try_from_slice(values: &[f32]) -> MathResult<Self> {
        match values {
            [x, y, z, ..] => Ok(Self::new(*x, *y, *z)),
            _ => Err(MathError::InsufficientData {
                expected: 3,
                actual: values.len(),
            }),
        }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn z(self) -> f32 {
        self.z
    }

    #[inline]
    pub fn r(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn g(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn b(self) -> f32 {
        self.z
    }

    #[inline]
    pub fn s(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn t(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn p(self) -> f32 {
        self.z
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[inline]
    pub fn length_square(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_square().sqrt()
    }

    /// Scales by the reciprocal length; the zero vector yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self.length().recip() * self
    }

    #[inline]
    pub fn distance(self, rhs: Self) -> f32 {
        (self - rhs).length()
    }

    /// Unclamped, `t` outside `[0, 1]` extrapolates.
    #[inline]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        t * rhs + (1.0 - t) * self
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        (self.x - rhs.x).abs() < EPS && (self.y - rhs.y).abs() < EPS && (self.z - rhs.z).abs() < EPS
    }
}


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Add<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x + rhs,
            y: self.y + rhs,
            z: self.z + rhs,
            w: self.w + rhs,
        }
    }
}

impl Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Sub<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x - rhs,
            y: self.y - rhs,
            z: self.z - rhs,
            w: self.w - rhs,
        }
    }
}

impl Mul<Vector4> for f32 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        Vector4 {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
            w: self * rhs.w,
        }
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vector4> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
            w: self.w * rhs.w,
        }
    }
}

impl Div<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}

impl Div<Vector4> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Vector4) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
            w: self.w / rhs.w,
        }
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Invalid index {} for Vector4!", index),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Invalid index {} for Vector4!", index),
        }
    }
}

impl From<Vector3> for Vector4 {
    #[inline]
    fn from(value: Vector3) -> Self {
        Self::vector(value)
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(value: Vector4) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl Display for Vector4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Reads the first four values of `values`.
    #[inline]
    pub fn try_from_slice(values: &[f32]) -> MathResult<Self> {
        match values {
            [x, y, z, w, ..] => Ok(Self::new(*x, *y, *z, *w)),
            _ => Err(MathError::InsufficientData {
                expected: 4,
                actual: values.len(),
            }),
        }
    }

    #[inline]
    pub const fn from_vector3(v: Vector3, w: f32) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w,
        }
    }

    #[inline]
    pub const fn point(p: Vector3) -> Self {
        Self::from_vector3(p, 1.0)
    }

    #[inline]
    pub const fn vector(v: Vector3) -> Self {
        Self::from_vector3(v, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn z(self) -> f32 {
        self.z
    }

    #[inline]
    pub fn w(self) -> f32 {
        self.w
    }

    #[inline]
    pub fn r(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn g(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn b(self) -> f32 {
        self.z
    }

    #[inline]
    pub fn a(self) -> f32 {
        self.w
    }

    #[inline]
    pub fn s(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn t(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn p(self) -> f32 {
        self.z
    }

    #[inline]
    pub fn q(self) -> f32 {
        self.w
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Cross product of the xyz parts, `w` is always `1.0`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::point(self.xyz().cross(rhs.xyz()))
    }

    #[inline]
    pub fn length_square(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_square().sqrt()
    }

    #[inline]
    pub fn normalize(self) -> Self {
        self.length().recip() * self
    }

    #[inline]
    pub fn distance(self, rhs: Self) -> f32 {
        (self - rhs).length()
    }

    #[inline]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        t * rhs + (1.0 - t) * self
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        (self.x - rhs.x).abs() < EPS
            && (self.y - rhs.y).abs() < EPS
            && (self.z - rhs.z).abs() < EPS
            && (self.w - rhs.w).abs() < EPS
    }
}
