//! Pointer-to-rotation maths for the hero badge.
//!
//! The badge rotates around both axes by the pointer's offset from the
//! viewport centre divided by a damping constant. The offsets are inverted
//! so the badge leans toward the cursor. Nothing is clamped.

/// Rotation in degrees around the Y axis (`x`) and X axis (`y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltAngles {
    /// Degrees for `rotateY`, driven by horizontal offset
    pub x: f64,
    /// Degrees for `rotateX`, driven by vertical offset
    pub y: f64,
}

impl TiltAngles {
    /// The resting pose.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// CSS `transform` value for these angles.
    ///
    /// ```
    /// use folio_core::tilt::TiltAngles;
    ///
    /// assert_eq!(TiltAngles::ZERO.to_transform(), "rotateY(0deg) rotateX(0deg)");
    /// ```
    #[must_use]
    pub fn to_transform(self) -> String {
        format!("rotateY({}deg) rotateX({}deg)", self.x, self.y)
    }
}

/// Rotation for a pointer at page coordinates `(page_x, page_y)` in a
/// viewport of `viewport_width` by `viewport_height`.
///
/// `damping` must be positive; config validation guarantees that.
///
/// ```
/// use folio_core::tilt::compute_tilt;
///
/// let angles = compute_tilt(1000.0, 800.0, 250.0, 400.0, 25.0);
/// assert_eq!(angles.x, 10.0);
/// assert_eq!(angles.y, 0.0);
/// ```
#[must_use]
pub fn compute_tilt(
    viewport_width: f64,
    viewport_height: f64,
    page_x: f64,
    page_y: f64,
    damping: f64,
) -> TiltAngles {
    TiltAngles {
        x: (viewport_width / 2.0 - page_x) / damping,
        y: (viewport_height / 2.0 - page_y) / damping,
    }
}
