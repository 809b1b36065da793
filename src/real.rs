//! The floating point type used for evaluation, picked by Cargo feature.

#[cfg(feature = "f32")]
pub type Real = f32;

#[cfg(not(feature = "f32"))]
pub type Real = f64;
