#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::scalar::{self, Scalar};
use num_traits::{Float, Zero};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops,
    ops::{AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

fn epsilon<T: Float>() -> T {
    num_traits::cast(EPSILON).unwrap_or_else(T::epsilon)
}

/// A 2D vector with components of any [`Scalar`] type.
///
/// [`Vector2`] is a plain value type: every operator returns a new vector, while the named
/// methods [`add`](Vector2::add), [`subtract`](Vector2::subtract),
/// [`multiply`](Vector2::multiply), [`divide`](Vector2::divide), [`reverse`](Vector2::reverse)
/// and [`normalize`](Vector2::normalize) update the vector in place.
///
/// # Examples
///
/// ```
/// use vecmath::core::prelude::*;
///
/// let v1 = Vector2::new(3.0, 4.0);
/// let v2 = Vector2::new(1.0, 2.0);
///
/// let sum = v1 + v2;
/// assert_eq!(sum, Vector2::new(4.0, 6.0));
/// assert_eq!(v1.get_length(), 5.0);
/// ```
///
/// # Arithmetic edge cases
/// Division by a zero component, and normalising a zero-length vector, are not guarded. They
/// behave as `T` does natively: floating-point components become infinite or `NaN`, and integer
/// components panic.
///
/// # Equality
/// Two vectors are equal when every pair of components is equal. For floating-point vectors
/// that need a tolerance, see [`almost_eq`](Vector2::almost_eq).
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    #[must_use]
    pub const fn new(x: T, y: T) -> Vector2<T> {
        Vector2 { x, y }
    }
    /// Returns a vector with both components set to zero.
    #[must_use]
    pub fn zero() -> Vector2<T> {
        Vector2::splat(T::zero())
    }
    /// Returns a vector with both components set to one.
    #[must_use]
    pub fn one() -> Vector2<T> {
        Vector2::splat(T::one())
    }

    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecmath::core::prelude::*;
    /// let vec = Vector2::splat(3);
    /// assert_eq!(vec.x, 3);
    /// assert_eq!(vec.y, 3);
    /// ```
    #[must_use]
    pub fn splat(v: T) -> Vector2<T> {
        Vector2 { x: v, y: v }
    }

    /// Creates a vector from the first two elements of `values`, in (x, y) order.
    ///
    /// Prefer `Vector2::from([x, y])` when the length is known at compile time.
    ///
    /// # Panics
    ///
    /// Panics if `values` has fewer than two elements.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Vector2<T> {
        Vector2 {
            x: values[0],
            y: values[1],
        }
    }

    #[must_use]
    pub fn get_x(&self) -> T {
        self.x
    }
    #[must_use]
    pub fn get_y(&self) -> T {
        self.y
    }

    /// Adds `other` to this vector in place.
    ///
    /// Returns `self` so calls can be chained. The result is the same as `*self + other`.
    ///
    /// With [`std::ops::Add`] in scope, `v.add(w)` resolves to the by-value operator instead
    /// and leaves `v` unchanged. Use `v += w` or `Vector2::add(&mut v, w)` there.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecmath::core::prelude::*;
    /// let mut v = Vector2::new(1, 2);
    /// v.add(Vector2::new(3, 4)).add(Vector2::one());
    /// assert_eq!(v, Vector2::new(5, 7));
    /// ```
    pub fn add(&mut self, other: Vector2<T>) -> &mut Vector2<T> {
        *self += other;
        self
    }
    /// Subtracts `other` from this vector in place.
    pub fn subtract(&mut self, other: Vector2<T>) -> &mut Vector2<T> {
        *self -= other;
        self
    }
    /// Multiplies this vector by `other` component-wise, in place.
    pub fn multiply(&mut self, other: Vector2<T>) -> &mut Vector2<T> {
        *self *= other;
        self
    }
    /// Divides this vector by `other` component-wise, in place.
    ///
    /// # Panics
    ///
    /// For integer `T`, panics if either component of `other` is zero.
    pub fn divide(&mut self, other: Vector2<T>) -> &mut Vector2<T> {
        *self /= other;
        self
    }

    /// Negates both components in place. See also [`Neg`], which returns a new vector.
    pub fn reverse(&mut self) -> &mut Vector2<T> {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Returns true if both components equal the corresponding components of `other`.
    ///
    /// Same as `*self == other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecmath::core::prelude::*;
    /// assert!(Vector2::new(1, 2).equals(Vector2::new(1, 2)));
    /// assert!(!Vector2::new(1, 2).equals(Vector2::new(1, 3)));
    /// ```
    #[must_use]
    pub fn equals(&self, other: Vector2<T>) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Returns the length of the vector.
    ///
    /// If you only need to compare vector lengths, consider using
    /// [`get_length_squared`](Vector2::get_length_squared) to avoid the square root.
    #[must_use]
    pub fn get_length(&self) -> T {
        self.get_length_squared().sqrt()
    }
    #[must_use]
    pub fn get_length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Computes the Euclidean distance between two points.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecmath::core::prelude::*;
    /// let p1 = Vector2::new(0.0, 0.0);
    /// let p2 = Vector2::new(3.0, 4.0);
    /// assert_eq!(p1.distance(p2), 5.0);
    /// ```
    #[must_use]
    pub fn distance(&self, other: Vector2<T>) -> T {
        self.distance_squared(other).sqrt()
    }
    /// Computes the squared Euclidean distance between two points.
    #[must_use]
    pub fn distance_squared(&self, other: Vector2<T>) -> T {
        (*self - other).get_length_squared()
    }

    /// Scales this vector to unit length, in place.
    ///
    /// A zero-length vector is divided by zero: floating-point components become `NaN`, and
    /// integer components panic.
    pub fn normalize(&mut self) -> &mut Vector2<T> {
        let len = self.get_length();
        if len.is_zero() {
            warn!("Vector2: normalize() on zero-length vector {}", self);
        }
        *self /= len;
        self
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecmath::core::prelude::*;
    /// let v1 = Vector2::new(2, 3);
    /// let v2 = Vector2::new(4, 5);
    /// assert_eq!(v1.dot(v2), 23); // 2*4 + 3*5
    /// ```
    #[must_use]
    pub fn dot(&self, other: Vector2<T>) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T: Scalar + Float> Vector2<T> {
    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their difference
    /// is less than [`EPSILON`](crate::core::config::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Vector2<T>) -> bool {
        (*self - rhs).get_length() < epsilon()
    }
}

impl<T: Scalar> Zero for Vector2<T> {
    fn zero() -> Self {
        Vector2::zero()
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Vector2 { x, y }
    }
}
impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Vector2 { x, y }
    }
}
impl<T> From<Vector2<T>> for [T; 2] {
    fn from(value: Vector2<T>) -> Self {
        [value.x, value.y]
    }
}

impl<T: Scalar> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "X: {0:.1$}", self.x, p)?;
            write!(f, ", Y: {0:.1$}", self.y, p)
        } else {
            write!(f, "X: {}, Y: {}", self.x, self.y)
        }
    }
}

impl<T: Scalar> ops::Add<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;

    fn add(self, rhs: Vector2<T>) -> Self::Output {
        Vector2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl<T: Scalar> AddAssign<Vector2<T>> for Vector2<T> {
    fn add_assign(&mut self, rhs: Vector2<T>) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<T: Scalar> Sub<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;

    fn sub(self, rhs: Vector2<T>) -> Self::Output {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl<T: Scalar> SubAssign<Vector2<T>> for Vector2<T> {
    fn sub_assign(&mut self, rhs: Vector2<T>) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
    }
}

impl<T: Scalar> Mul<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Self::Output {
        Vector2 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}
impl<T: Scalar> MulAssign<Vector2<T>> for Vector2<T> {
    fn mul_assign(&mut self, rhs: Vector2<T>) {
        self.x = self.x * rhs.x;
        self.y = self.y * rhs.y;
    }
}

impl<T: Scalar> Div<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;

    fn div(self, rhs: Vector2<T>) -> Self::Output {
        Vector2 {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
        }
    }
}
impl<T: Scalar> DivAssign<Vector2<T>> for Vector2<T> {
    fn div_assign(&mut self, rhs: Vector2<T>) {
        self.x = self.x / rhs.x;
        self.y = self.y / rhs.y;
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Vector2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl<T: Scalar> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x = self.x * rhs;
        self.y = self.y * rhs;
    }
}
impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Vector2<T>;

    fn div(self, rhs: T) -> Self::Output {
        Vector2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl<T: Scalar> DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, rhs: T) {
        self.x = self.x / rhs;
        self.y = self.y / rhs;
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Vector2<T>;

    fn neg(self) -> Self::Output {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Scalar> Sum<Vector2<T>> for Vector2<T> {
    fn sum<I: Iterator<Item = Vector2<T>>>(iter: I) -> Self {
        iter.fold(Vector2::zero(), |acc, v| acc + v)
    }
}

/// A 3D vector with components of any [`Scalar`] type.
///
/// Offers the same in-place methods and operators as [`Vector2`], plus
/// [`angle`](Vector3::angle) and [`cross`](Vector3::cross). The [`Display`](fmt::Display) form
/// is `X: <x>, Y: <y>, Z: <z>`:
///
/// ```
/// use vecmath::core::prelude::*;
/// let v = Vector3::new(1, 0, 0) + Vector3::new(0, 1, 0) + Vector3::new(0, 0, 1);
/// assert_eq!(v, Vector3::new(1, 1, 1));
/// assert_eq!(v.to_string(), "X: 1, Y: 1, Z: 1");
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Vector3<T> {
        Vector3 { x, y, z }
    }
    #[must_use]
    pub fn zero() -> Vector3<T> {
        Vector3::splat(T::zero())
    }
    #[must_use]
    pub fn one() -> Vector3<T> {
        Vector3::splat(T::one())
    }
    #[must_use]
    pub fn splat(v: T) -> Vector3<T> {
        Vector3 { x: v, y: v, z: v }
    }

    /// Creates a vector from the first three elements of `values`, in (x, y, z) order.
    ///
    /// # Panics
    ///
    /// Panics if `values` has fewer than three elements.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Vector3<T> {
        Vector3 {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }

    #[must_use]
    pub fn get_x(&self) -> T {
        self.x
    }
    #[must_use]
    pub fn get_y(&self) -> T {
        self.y
    }
    #[must_use]
    pub fn get_z(&self) -> T {
        self.z
    }

    /// Adds `other` to this vector in place.
    ///
    /// As with [`Vector2::add`], `v.add(w)` picks the by-value operator when
    /// [`std::ops::Add`] is in scope; use `v += w` or `Vector3::add(&mut v, w)` there.
    pub fn add(&mut self, other: Vector3<T>) -> &mut Vector3<T> {
        *self += other;
        self
    }
    /// Subtracts `other` from this vector in place.
    pub fn subtract(&mut self, other: Vector3<T>) -> &mut Vector3<T> {
        *self -= other;
        self
    }
    /// Multiplies this vector by `other` component-wise, in place.
    pub fn multiply(&mut self, other: Vector3<T>) -> &mut Vector3<T> {
        *self *= other;
        self
    }
    /// Divides this vector by `other` component-wise, in place.
    ///
    /// # Panics
    ///
    /// For integer `T`, panics if any component of `other` is zero.
    pub fn divide(&mut self, other: Vector3<T>) -> &mut Vector3<T> {
        *self /= other;
        self
    }

    /// Negates all three components in place.
    pub fn reverse(&mut self) -> &mut Vector3<T> {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Returns true if every component equals its counterpart in `other`.
    #[must_use]
    pub fn equals(&self, other: Vector3<T>) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Returns the magnitude (length) of the vector.
    #[must_use]
    pub fn magnitude(&self) -> T {
        self.dot(*self).sqrt()
    }
    /// Alias of [`magnitude`](Vector3::magnitude), named as in [`Vector2`].
    #[must_use]
    pub fn get_length(&self) -> T {
        self.magnitude()
    }
    #[must_use]
    pub fn get_length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Distance between this vector and `other`.
    ///
    /// Prefer [`distance_squared`](Vector3::distance_squared) when only comparing distances.
    #[must_use]
    pub fn distance(&self, other: Vector3<T>) -> T {
        self.distance_squared(other).sqrt()
    }
    #[must_use]
    pub fn distance_squared(&self, other: Vector3<T>) -> T {
        (*self - other).get_length_squared()
    }

    /// Scales this vector to unit length, in place. Zero-length vectors behave as in
    /// [`Vector2::normalize`].
    pub fn normalize(&mut self) -> &mut Vector3<T> {
        let mag = self.magnitude();
        if mag.is_zero() {
            warn!("Vector3: normalize() on zero-length vector {}", self);
        }
        *self /= mag;
        self
    }

    /// Computes the dot product of two vectors.
    #[must_use]
    pub fn dot(&self, other: Vector3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of two vectors.
    ///
    /// The result is perpendicular to both inputs, following the right-hand rule.
    ///
    /// ```
    /// use vecmath::core::prelude::*;
    /// let x = Vector3::new(1, 0, 0);
    /// let y = Vector3::new(0, 1, 0);
    /// assert_eq!(x.cross(y), Vector3::new(0, 0, 1));
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Calculates the angle in radians between two vectors.
    ///
    /// The cosine `dot / (|self| * |other|)` is clamped to `[-1, 1]` before the inverse cosine,
    /// so rounding error on (anti)parallel vectors cannot produce `NaN`. The result lies in
    /// `[0, π]`.
    ///
    /// If either vector has zero length, floating-point results are `NaN` and integer
    /// components panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecmath::core::prelude::*;
    /// let x = Vector3::new(1.0_f64, 0.0, 0.0);
    /// let y = Vector3::new(0.0_f64, 1.0, 0.0);
    /// assert!((x.angle(y) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// assert_eq!(x.angle(x), 0.0);
    /// ```
    #[must_use]
    pub fn angle(&self, other: Vector3<T>) -> T {
        let denom = self.magnitude() * other.magnitude();
        if denom.is_zero() {
            warn!("Vector3: angle() with zero-length vector: {} vs. {}", self, other);
        }
        scalar::clamp_unit(self.dot(other) / denom).acos()
    }
}

impl<T: Scalar + Float> Vector3<T> {
    #[must_use]
    pub fn almost_eq(&self, rhs: Vector3<T>) -> bool {
        (*self - rhs).magnitude() < epsilon()
    }
}

impl<T: Scalar> Zero for Vector3<T> {
    fn zero() -> Self {
        Vector3::zero()
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Vector3 { x, y, z }
    }
}
impl<T> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Vector3 { x, y, z }
    }
}
impl<T> From<Vector3<T>> for [T; 3] {
    fn from(value: Vector3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<T: Scalar> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "X: {0:.1$}", self.x, p)?;
            write!(f, ", Y: {0:.1$}", self.y, p)?;
            write!(f, ", Z: {0:.1$}", self.z, p)
        } else {
            write!(f, "X: {}, Y: {}, Z: {}", self.x, self.y, self.z)
        }
    }
}

impl<T: Scalar> ops::Add<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;

    fn add(self, rhs: Vector3<T>) -> Self::Output {
        Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl<T: Scalar> AddAssign<Vector3<T>> for Vector3<T> {
    fn add_assign(&mut self, rhs: Vector3<T>) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
        self.z = self.z + rhs.z;
    }
}

impl<T: Scalar> Sub<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;

    fn sub(self, rhs: Vector3<T>) -> Self::Output {
        Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl<T: Scalar> SubAssign<Vector3<T>> for Vector3<T> {
    fn sub_assign(&mut self, rhs: Vector3<T>) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
        self.z = self.z - rhs.z;
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        Vector3 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}
impl<T: Scalar> MulAssign<Vector3<T>> for Vector3<T> {
    fn mul_assign(&mut self, rhs: Vector3<T>) {
        self.x = self.x * rhs.x;
        self.y = self.y * rhs.y;
        self.z = self.z * rhs.z;
    }
}

impl<T: Scalar> Div<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;

    fn div(self, rhs: Vector3<T>) -> Self::Output {
        Vector3 {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }
}
impl<T: Scalar> DivAssign<Vector3<T>> for Vector3<T> {
    fn div_assign(&mut self, rhs: Vector3<T>) {
        self.x = self.x / rhs.x;
        self.y = self.y / rhs.y;
        self.z = self.z / rhs.z;
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl<T: Scalar> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x = self.x * rhs;
        self.y = self.y * rhs;
        self.z = self.z * rhs;
    }
}
impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Vector3<T>;

    fn div(self, rhs: T) -> Self::Output {
        Vector3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl<T: Scalar> DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, rhs: T) {
        self.x = self.x / rhs;
        self.y = self.y / rhs;
        self.z = self.z / rhs;
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Vector3<T>;

    fn neg(self) -> Self::Output {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Scalar> Sum<Vector3<T>> for Vector3<T> {
    fn sum<I: Iterator<Item = Vector3<T>>>(iter: I) -> Self {
        iter.fold(Vector3::zero(), |acc, v| acc + v)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn mul(self, rhs: Vector2<$t>) -> Self::Output {
                rhs * self
            }
        }
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn mul(self, rhs: Vector3<$t>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, isize);
