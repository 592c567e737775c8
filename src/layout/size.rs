//! Size: A width/height pair for canvas and cell measurements.

/// A two-dimensional extent in canvas units (points, pixels or terminal
/// cells; the engine does not care which).
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// The settled drawable area delivered by the canvas-size source.
pub type CanvasSize = Size;

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero-sized extent.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Check if both dimensions are finite and strictly positive.
    ///
    /// Zero, negative, NaN and infinite sizes count as unmeasured.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Scale both dimensions by a factor.
    #[inline]
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Round both dimensions down.
    #[inline]
    #[must_use]
    pub fn floor(&self) -> Self {
        Self::new(self.width.floor(), self.height.floor())
    }
}

impl std::fmt::Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Size({:.1} × {:.1})", self.width, self.height)
    }
}

impl From<(f64, f64)> for Size {
    #[inline]
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl From<(u16, u16)> for Size {
    /// Terminal dimensions (columns, rows).
    #[inline]
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(f64::from(width), f64::from(height))
    }
}
