//! IEEE-754 helpers. These are thin wrappers so the exported symbols have a
//! single definition of the semantics: `sqrt(-0.0)` is `-0.0`, negative
//! inputs give NaN, NaN propagates.

#[inline]
pub fn sqrt_f32(value: f32) -> f32 {
    value.sqrt()
}

#[inline]
pub fn sqrt_f64(value: f64) -> f64 {
    value.sqrt()
}

#[inline]
pub fn is_nan_f32(value: f32) -> bool {
    value.is_nan()
}

#[inline]
pub fn is_nan_f64(value: f64) -> bool {
    value.is_nan()
}
