use super::FuzzyEq;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy
/// compared.
///
/// Everything in this crate is generic over `Real`; `f32` and `f64` are the
/// provided implementations.
pub trait Real:
    num_traits::real::Real + FuzzyEq + std::default::Default + std::fmt::Debug + 'static
{
}

impl Real for f32 {}

impl Real for f64 {}
