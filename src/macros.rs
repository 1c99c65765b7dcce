/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a polygon boundary as a `Vec` of [Vector2](crate::Vector2) from
/// a list of `(x, y)` tuples.
///
/// Vertices are expected in counter-clockwise order (the winding required by
/// the shrink entry points).
///
/// # Examples
///
/// ```
/// # use straight_skeleton::polygon;
/// let tri = polygon![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
/// assert_eq!(tri.len(), 3);
/// assert_eq!(tri[2].y, 3.0);
/// ```
#[macro_export]
macro_rules! polygon {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$($crate::Vector2::new($x, $y)),*]
    };
}
