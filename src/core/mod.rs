//! Common math and numeric trait modules shared by the shrink engine.
pub mod math;
pub mod traits;
