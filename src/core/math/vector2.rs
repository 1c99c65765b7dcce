use crate::core::traits::Real;
use std::ops;

/// 2D position/direction vector with `x` and `y` components.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Vector2::new(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Normalize the vector (length = 1).
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Counter-clockwise perpendicular vector (rotate +90 degrees).
    ///
    /// For an edge direction of a counter-clockwise polygon this points into
    /// the polygon interior.
    #[inline]
    pub fn perp(&self) -> Self {
        Vector2::new(-self.y, self.x)
    }

    /// Fuzzy equal comparison with another vector using the `fuzzy_epsilon`
    /// given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T: Real> ops::Add for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn add(self, rhs: Vector2<T>) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Real> ops::Sub for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn sub(self, rhs: Vector2<T>) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn ops() {
        let v1 = Vector2::new(4.0, 5.0);
        let v2 = Vector2::new(1.0, 2.0);
        assert_fuzzy_eq!(v1 + v2, Vector2::new(5.0, 7.0));
        assert_fuzzy_eq!(v1 - v2, Vector2::new(3.0, 3.0));
        assert_fuzzy_eq!(-v1, Vector2::new(-4.0, -5.0));
        assert_fuzzy_eq!(v1.scale(2.0), Vector2::new(8.0, 10.0));
    }

    #[test]
    fn products_and_length() {
        let v1 = Vector2::new(3.0, 4.0);
        let v2 = Vector2::new(1.0, 0.0);
        assert_fuzzy_eq!(v1.dot(v2), 3.0);
        assert_fuzzy_eq!(v1.perp_dot(v2), -4.0);
        assert_fuzzy_eq!(v1.length(), 5.0);
        assert_fuzzy_eq!(v1.normalize(), Vector2::new(0.6, 0.8));
    }

    #[test]
    fn perp_is_ccw() {
        // +x direction rotates to +y
        assert_fuzzy_eq!(Vector2::new(1.0, 0.0).perp(), Vector2::new(0.0, 1.0));
        assert_fuzzy_eq!(Vector2::new(0.0, 1.0).perp(), Vector2::new(-1.0, 0.0));
    }
}
