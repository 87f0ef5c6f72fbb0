use bytemuck::{Pod, Zeroable};
use std::{
    fmt::{Display, Formatter},
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

use super::{Vector3, Vector4, DET_EPS};
use crate::error::{MathError, MathResult};


/// 3x3 matrix stored as rows `i`, `j`, `k`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3 {
    pub i: Vector3,
    pub j: Vector3,
    pub k: Vector3,
}

impl Neg for Matrix3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            i: -self.i,
            j: -self.j,
            k: -self.k,
        }
    }
}

impl Add for Matrix3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
            k: self.k + rhs.k,
        }
    }
}

impl Sub for Matrix3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i - rhs.i,
            j: self.j - rhs.j,
            k: self.k - rhs.k,
        }
    }
}

impl Mul<Matrix3> for f32 {
    type Output = Matrix3;
    #[inline]
    fn mul(self, rhs: Matrix3) -> Self::Output {
        Matrix3 {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
        }
    }
}

impl Mul<Matrix3> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Matrix3) -> Self::Output {
        self.x * rhs.i + self.y * rhs.j + self.z * rhs.k
    }
}

impl Mul<Matrix3> for Matrix3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i * rhs,
            j: self.j * rhs,
            k: self.k * rhs,
        }
    }
}

impl Index<usize> for Matrix3 {
    type Output = Vector3;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.i,
            1 => &self.j,
            2 => &self.k,
            _ => panic!("Invalid index {} for Matrix3!", index),
        }
    }
}

impl IndexMut<usize> for Matrix3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.i,
            1 => &mut self.j,
            2 => &mut self.k,
            _ => panic!("Invalid index {} for Matrix3!", index),
        }
    }
}

impl From<Matrix4> for Matrix3 {
    #[inline]
    fn from(value: Matrix4) -> Self {
        Self {
            i: value.i.into(),
            j: value.j.into(),
            k: value.k.into(),
        }
    }
}

impl Display for Matrix3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.i)?;
        writeln!(f, "{}", self.j)?;
        write!(f, "{}", self.k)
    }
}

impl Matrix3 {
    #[inline]
    pub fn new(i: Vector3, j: Vector3, k: Vector3) -> Self {
        Self { i, j, k }
    }

    /// Row-major: `values[3 * row + col]`.
    #[inline]
    pub fn from_array(values: [f32; 9]) -> Self {
        bytemuck::cast(values)
    }

    /// Column-major input, stored transposed.
    #[inline]
    pub fn from_array_transposed(values: [f32; 9]) -> Self {
        Self::from_array(values).transpose()
    }

    #[inline]
    pub fn try_from_slice(values: &[f32]) -> MathResult<Self> {
        let array: &[f32; 9] = values
            .get(..9)
            .and_then(|values| values.try_into().ok())
            .ok_or(MathError::InsufficientData {
                expected: 9,
                actual: values.len(),
            })?;
        Ok(Self::from_array(*array))
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            i: Vector3::x_axis(),
            j: Vector3::y_axis(),
            k: Vector3::z_axis(),
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 9] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            i: Vector3 {
                x: self.i.x,
                y: self.j.x,
                z: self.k.x,
            },
            j: Vector3 {
                x: self.i.y,
                y: self.j.y,
                z: self.k.y,
            },
            k: Vector3 {
                x: self.i.z,
                y: self.j.z,
                z: self.k.z,
            },
        }
    }

    #[inline]
    pub fn det(self) -> f32 {
        (self.i.x * self.j.y * self.k.z)
            + (self.j.x * self.k.y * self.i.z)
            + (self.k.x * self.i.y * self.j.z)
            - (self.i.z * self.j.y * self.k.x)
            - (self.j.z * self.k.y * self.i.x)
            - (self.k.z * self.i.y * self.j.x)
    }

    /// Fails with [`MathError::SingularMatrix`] when `|det| <= DET_EPS`.
    #[inline]
    pub fn inv(self) -> MathResult<Self> {
        let adj = self.adj();
        let det = self.i.dot(adj.transpose().i);
        if det.abs() > DET_EPS {
            Ok(det.recip() * adj)
        } else {
            log::debug!("Matrix3 inversion failed, determinant: {}", det);
            Err(MathError::SingularMatrix { det })
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.i.is_valid() && self.j.is_valid() && self.k.is_valid()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.i.approx_equal(rhs.i) && self.j.approx_equal(rhs.j) && self.k.approx_equal(rhs.k)
    }

    // Columns of the adjugate are the cross products of row pairs.
    #[inline]
    fn adj(self) -> Self {
        Self {
            i: self.j.cross(self.k),
            j: self.k.cross(self.i),
            k: self.i.cross(self.j),
        }
        .transpose()
    }
}


/// 4x4 matrix stored as rows `i`, `j`, `k`, `l`.
///
/// Vectors are rows multiplied from the left, `v * m`, so the translation of
/// an affine transform sits in `l` and `a * b` applies `a` first. The memory
/// layout matches an OpenGL column-major matrix.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4 {
    pub i: Vector4,
    pub j: Vector4,
    pub k: Vector4,
    pub l: Vector4,
}

impl Neg for Matrix4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            i: -self.i,
            j: -self.j,
            k: -self.k,
            l: -self.l,
        }
    }
}

impl Add for Matrix4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
            k: self.k + rhs.k,
            l: self.l + rhs.l,
        }
    }
}

impl Sub for Matrix4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i - rhs.i,
            j: self.j - rhs.j,
            k: self.k - rhs.k,
            l: self.l - rhs.l,
        }
    }
}

impl Mul<Matrix4> for f32 {
    type Output = Matrix4;
    #[inline]
    fn mul(self, rhs: Matrix4) -> Self::Output {
        Matrix4 {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
            l: self * rhs.l,
        }
    }
}

impl Mul<Matrix4> for Vector4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Matrix4) -> Self::Output {
        self.x * rhs.i + self.y * rhs.j + self.z * rhs.k + self.w * rhs.l
    }
}

impl Mul<Matrix4> for Matrix4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i * rhs,
            j: self.j * rhs,
            k: self.k * rhs,
            l: self.l * rhs,
        }
    }
}

impl Index<usize> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.i,
            1 => &self.j,
            2 => &self.k,
            3 => &self.l,
            _ => panic!("Invalid index {} for Matrix4!", index),
        }
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.i,
            1 => &mut self.j,
            2 => &mut self.k,
            3 => &mut self.l,
            _ => panic!("Invalid index {} for Matrix4!", index),
        }
    }
}

impl From<Matrix3> for Matrix4 {
    #[inline]
    fn from(value: Matrix3) -> Self {
        Self {
            i: value.i.into(),
            j: value.j.into(),
            k: value.k.into(),
            l: Vector4::point(Vector3::origin()),
        }
    }
}

impl Display for Matrix4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.i)?;
        writeln!(f, "{}", self.j)?;
        writeln!(f, "{}", self.k)?;
        write!(f, "{}", self.l)
    }
}

impl Matrix4 {
    #[inline]
    pub fn new(i: Vector4, j: Vector4, k: Vector4, l: Vector4) -> Self {
        Self { i, j, k, l }
    }

    #[inline]
    pub fn from_rows(r0: Vector4, r1: Vector4, r2: Vector4, r3: Vector4) -> Self {
        Self::new(r0, r1, r2, r3)
    }

    #[inline]
    pub fn from_columns(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        Self::new(c0, c1, c2, c3).transpose()
    }

    /// Row-major: `values[4 * row + col]`.
    #[inline]
    pub fn from_array(values: [f32; 16]) -> Self {
        bytemuck::cast(values)
    }

    /// Column-major input, stored transposed.
    #[inline]
    pub fn from_array_transposed(values: [f32; 16]) -> Self {
        Self::from_array(values).transpose()
    }

    /// Reads the first sixteen values of `values` in row-major order.
    #[inline]
    pub fn try_from_slice(values: &[f32]) -> MathResult<Self> {
        let array: &[f32; 16] = values
            .get(..16)
            .and_then(|values| values.try_into().ok())
            .ok_or(MathError::InsufficientData {
                expected: 16,
                actual: values.len(),
            })?;
        Ok(Self::from_array(*array))
    }

    #[inline]
    pub fn try_from_slice_transposed(values: &[f32]) -> MathResult<Self> {
        Ok(Self::try_from_slice(values)?.transpose())
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            i: Vector4::new(1.0, 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, 1.0, 0.0, 0.0),
            k: Vector4::new(0.0, 0.0, 1.0, 0.0),
            l: Vector4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 16] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn row(self, index: usize) -> Vector4 {
        self[index]
    }

    #[inline]
    pub fn column(self, index: usize) -> Vector4 {
        Vector4::new(
            self.i[index],
            self.j[index],
            self.k[index],
            self.l[index],
        )
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            i: self.column(0),
            j: self.column(1),
            k: self.column(2),
            l: self.column(3),
        }
    }

    /// Transforms a direction, `w = 0`.
    #[inline]
    pub fn transform_vector3(self, v: Vector3) -> Vector3 {
        (Vector4::vector(v) * self).xyz()
    }

    /// Transforms a position, `w = 1`, without perspective division.
    #[inline]
    pub fn transform_point3(self, p: Vector3) -> Vector3 {
        (Vector4::point(p) * self).xyz()
    }

    /// Transforms a position and divides by the resulting `w`.
    #[inline]
    pub fn project_point3(self, p: Vector3) -> Vector3 {
        let h = Vector4::point(p) * self;
        h.xyz() / h.w
    }

    #[inline]
    pub fn det(self) -> f32 {
        (0usize..4)
            .map(|col| self.i[col] * self.cofactor(0, col))
            .sum()
    }

    /// Adjugate over determinant. Fails with [`MathError::SingularMatrix`]
    /// when `|det| <= DET_EPS`; no matrix is produced in that case.
    #[inline]
    pub fn inv(self) -> MathResult<Self> {
        let cofactors = self.cofactors();
        let det = self.i.dot(cofactors.i);
        if det.abs() > DET_EPS {
            Ok(det.recip() * cofactors.transpose())
        } else {
            log::debug!("Matrix4 inversion failed, determinant: {}", det);
            Err(MathError::SingularMatrix { det })
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.i.is_valid() && self.j.is_valid() && self.k.is_valid() && self.l.is_valid()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.i.approx_equal(rhs.i)
            && self.j.approx_equal(rhs.j)
            && self.k.approx_equal(rhs.k)
            && self.l.approx_equal(rhs.l)
    }

    #[inline]
    fn cofactors(self) -> Self {
        let mut c = Matrix4::default();
        for row in 0..4 {
            for col in 0..4 {
                c[row][col] = self.cofactor(row, col);
            }
        }
        c
    }

    #[inline]
    fn cofactor(self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col).det()
    }

    #[inline]
    fn minor(self, row: usize, col: usize) -> Matrix3 {
        let mut m = Matrix3::default();
        for (k, i) in (0..4).filter(|&i| i != row).enumerate() {
            for (l, j) in (0..4).filter(|&j| j != col).enumerate() {
                m[k][l] = self[i][j];
            }
        }
        m
    }
}
