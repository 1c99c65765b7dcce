use super::Vector2;
use crate::core::traits::Real;

/// An infinite line in slope-intercept form, with a separate variant for
/// vertical lines (infinite slope).
///
/// Lines are undirected: a bisector or edge support line intersects other
/// geometry the same way regardless of travel direction.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Line<T = f64> {
    /// `y = slope * x + y_intercept`.
    Sloped { slope: T, y_intercept: T },
    /// `x = x_intercept`.
    Vertical { x_intercept: T },
}

impl<T> Line<T>
where
    T: Real,
{
    /// Supporting line through two points.
    ///
    /// Returns `None` if the points fuzzy coincide (a zero-length edge has no
    /// supporting line).
    ///
    /// # Examples
    ///
    /// ```
    /// # use straight_skeleton::core::math::{Line, Vector2};
    /// let l = Line::through(Vector2::new(0.0, 1.0), Vector2::new(2.0, 5.0)).unwrap();
    /// assert_eq!(l, Line::Sloped { slope: 2.0, y_intercept: 1.0 });
    ///
    /// let v = Line::through(Vector2::new(3.0, 0.0), Vector2::new(3.0, 9.0)).unwrap();
    /// assert_eq!(v, Line::Vertical { x_intercept: 3.0 });
    /// ```
    pub fn through(a: Vector2<T>, b: Vector2<T>) -> Option<Self> {
        if a.fuzzy_eq(b) {
            return None;
        }

        if (b.x - a.x).fuzzy_eq_zero() {
            return Some(Line::Vertical { x_intercept: a.x });
        }

        let slope = (b.y - a.y) / (b.x - a.x);
        Some(Line::Sloped {
            slope,
            y_intercept: a.y - slope * a.x,
        })
    }

    /// Line through `point` in the direction `dir`.
    ///
    /// Returns `None` for a fuzzy-zero direction.
    pub fn from_point_dir(point: Vector2<T>, dir: Vector2<T>) -> Option<Self> {
        Line::through(point, point + dir)
    }

    /// Unique intersection point of two lines.
    ///
    /// Lines with equal slope are treated as non-intersecting (including a
    /// vertical pair), so the result is `None` for parallel and coincident
    /// lines alike.
    pub fn intersection(&self, other: &Self) -> Option<Vector2<T>> {
        match (*self, *other) {
            (
                Line::Sloped {
                    slope: m1,
                    y_intercept: b1,
                },
                Line::Sloped {
                    slope: m2,
                    y_intercept: b2,
                },
            ) => {
                if m1.fuzzy_eq(m2) {
                    return None;
                }
                let x = (b2 - b1) / (m1 - m2);
                Some(Vector2::new(x, m1 * x + b1))
            }
            (
                Line::Sloped {
                    slope,
                    y_intercept,
                },
                Line::Vertical { x_intercept },
            )
            | (
                Line::Vertical { x_intercept },
                Line::Sloped {
                    slope,
                    y_intercept,
                },
            ) => Some(Vector2::new(x_intercept, slope * x_intercept + y_intercept)),
            (Line::Vertical { .. }, Line::Vertical { .. }) => None,
        }
    }

    /// Perpendicular distance from `point` to this line.
    pub fn distance_to(&self, point: Vector2<T>) -> T {
        match *self {
            Line::Sloped {
                slope,
                y_intercept,
            } => {
                // line as slope*x - y + y_intercept = 0
                (slope * point.x - point.y + y_intercept).abs()
                    / (slope * slope + T::one()).sqrt()
            }
            Line::Vertical { x_intercept } => (point.x - x_intercept).abs(),
        }
    }

    /// The line parallel to this one passing through `point`.
    pub fn parallel_through(&self, point: Vector2<T>) -> Self {
        match *self {
            Line::Sloped { slope, .. } => Line::Sloped {
                slope,
                y_intercept: point.y - slope * point.x,
            },
            Line::Vertical { .. } => Line::Vertical {
                x_intercept: point.x,
            },
        }
    }
}

/// Returns `true` if point `p` lies strictly to the left of the ray from `a`
/// through `b`.
///
/// Used both to classify a vertex as reflex and to bound the candidate
/// regions of split events.
#[inline]
pub fn left_of_ray<T>(p: Vector2<T>, a: Vector2<T>, b: Vector2<T>) -> bool
where
    T: Real,
{
    (b - a).perp_dot(p - a) > T::zero()
}

/// Angular bisector at `curr` of the corner formed with its ring neighbors
/// `prev` and `next`.
///
/// The bisector direction is the sum of the unit vectors toward each
/// neighbor; when those cancel (collinear neighbors forming a straight
/// angle) the bisector degenerates to the perpendicular of the edge through
/// `curr`. Returns `None` only when a neighbor fuzzy coincides with `curr`.
pub fn angular_bisector<T>(
    prev: Vector2<T>,
    curr: Vector2<T>,
    next: Vector2<T>,
) -> Option<Line<T>>
where
    T: Real,
{
    let to_prev = prev - curr;
    let to_next = next - curr;
    if to_prev.length().fuzzy_eq_zero() || to_next.length().fuzzy_eq_zero() {
        return None;
    }

    let dir = to_prev.normalize() + to_next.normalize();
    if dir.length().fuzzy_eq_zero() {
        // straight angle, bisector is perpendicular to the edge
        return Line::from_point_dir(curr, to_next.perp());
    }

    Line::from_point_dir(curr, dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    #[test]
    fn through_coincident_points_is_none() {
        assert!(Line::through(v(1.0, 1.0), v(1.0, 1.0)).is_none());
        assert!(Line::through(v(1.0, 1.0), v(1.0 + 1e-12, 1.0)).is_none());
    }

    #[test]
    fn intersection_cases() {
        let horizontal = Line::through(v(0.0, 2.0), v(5.0, 2.0)).unwrap();
        let diagonal = Line::through(v(0.0, 0.0), v(1.0, 1.0)).unwrap();
        let vertical = Line::through(v(3.0, 0.0), v(3.0, 1.0)).unwrap();
        let vertical2 = Line::through(v(7.0, 0.0), v(7.0, 1.0)).unwrap();

        assert_fuzzy_eq!(horizontal.intersection(&diagonal).unwrap(), v(2.0, 2.0));
        assert_fuzzy_eq!(diagonal.intersection(&vertical).unwrap(), v(3.0, 3.0));
        assert_fuzzy_eq!(vertical.intersection(&horizontal).unwrap(), v(3.0, 2.0));

        // equal slopes never intersect
        let parallel = Line::through(v(0.0, 5.0), v(1.0, 6.0)).unwrap();
        assert!(diagonal.intersection(&parallel).is_none());
        assert!(vertical.intersection(&vertical2).is_none());
    }

    #[test]
    fn distance() {
        let horizontal = Line::through(v(0.0, 1.0), v(4.0, 1.0)).unwrap();
        assert_fuzzy_eq!(horizontal.distance_to(v(100.0, 4.0)), 3.0);

        let vertical = Line::through(v(-2.0, 0.0), v(-2.0, 1.0)).unwrap();
        assert_fuzzy_eq!(vertical.distance_to(v(3.0, 50.0)), 5.0);

        let diagonal = Line::through(v(0.0, 0.0), v(1.0, 1.0)).unwrap();
        assert_fuzzy_eq!(diagonal.distance_to(v(1.0, 0.0)), std::f64::consts::SQRT_2 / 2.0);
    }

    #[test]
    fn parallel_through_keeps_slope() {
        let diagonal = Line::through(v(0.0, 0.0), v(1.0, 1.0)).unwrap();
        let shifted = diagonal.parallel_through(v(0.0, 3.0));
        assert_eq!(
            shifted,
            Line::Sloped {
                slope: 1.0,
                y_intercept: 3.0
            }
        );

        let vertical = Line::through(v(2.0, 0.0), v(2.0, 1.0)).unwrap();
        assert_eq!(
            vertical.parallel_through(v(-1.0, 9.0)),
            Line::Vertical { x_intercept: -1.0 }
        );
    }

    #[test]
    fn left_of_ray_orientation() {
        let a = v(0.0, 0.0);
        let b = v(1.0, 0.0);
        assert!(left_of_ray(v(0.5, 1.0), a, b));
        assert!(!left_of_ray(v(0.5, -1.0), a, b));
        // collinear point is not strictly left
        assert!(!left_of_ray(v(2.0, 0.0), a, b));
    }

    #[test]
    fn bisector_right_angle() {
        // corner of a CCW square at the origin bisects at 45 degrees
        let bis = angular_bisector(v(0.0, 4.0), v(0.0, 0.0), v(4.0, 0.0)).unwrap();
        match bis {
            Line::Sloped {
                slope,
                y_intercept,
            } => {
                assert_fuzzy_eq!(slope, 1.0);
                assert_fuzzy_eq!(y_intercept, 0.0);
            }
            _ => panic!("expected sloped bisector, got {:?}", bis),
        }
    }

    #[test]
    fn bisector_straight_angle_is_perpendicular() {
        let bis = angular_bisector(v(-1.0, 0.0), v(0.0, 0.0), v(1.0, 0.0)).unwrap();
        assert_eq!(bis, Line::Vertical { x_intercept: 0.0 });
    }

    #[test]
    fn bisector_coincident_neighbor_is_none() {
        assert!(angular_bisector(v(0.0, 0.0), v(0.0, 0.0), v(1.0, 0.0)).is_none());
    }
}
