//! Design units -> pixel units.
//!
//! Scenes and instructions are authored against a 450x700 design field.
//! Every coordinate and dimension is pushed through [`Scale::px`] before it
//! reaches a body constructor, so the same scene renders at any canvas size.

/// Uniform positive scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale(f32);

impl Scale {
    /// Build a scale, falling back to 1.0 for non-positive or non-finite input.
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            Self(1.0)
        }
    }

    pub fn factor(&self) -> f32 {
        self.0
    }

    /// `round(value * scale)` with half-up rounding (matches the browser host).
    #[inline]
    pub fn px(&self, value: f32) -> f32 {
        (value * self.0 + 0.5).floor()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(1.0)
    }
}
