//! Grid: Derive the flap grid from the available canvas.
//!
//! Geometry is computed from scratch on every canvas-size event. The
//! computation is pure, so identical inputs always give identical
//! output and no caching is needed.

use super::size::{CanvasSize, Size};
use std::fmt;

/// Font size as a fraction of cell height.
pub const FONT_SIZE_RATIO: f64 = 0.5;

/// Most columns, and most rows, a grid may have.
///
/// Larger canvases get bigger cells instead of more of them.
pub const MAX_AXIS_CELLS: usize = 256;

/// The grid that fits a canvas.
///
/// `columns × rows` cells of `cell_size`, separated by `spacing`, always
/// fit inside `canvas`. A canvas too small for a single cell yields zero
/// columns, zero rows and a zero cell size.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct GridGeometry {
    /// The canvas this geometry was derived from.
    pub canvas: CanvasSize,
    /// Cells per row.
    pub columns: usize,
    /// Rows of cells.
    pub rows: usize,
    /// Size of each cell.
    pub cell_size: Size,
    /// Gap between adjacent cells.
    pub spacing: f64,
    /// Total gap width and height across the grid.
    pub spacer_size: Size,
    /// Suggested glyph size for renderers.
    pub font_size: f64,
}

impl GridGeometry {
    /// A grid with no cells.
    pub const fn empty(canvas: CanvasSize, spacing: f64) -> Self {
        Self {
            canvas,
            columns: 0,
            rows: 0,
            cell_size: Size::ZERO,
            spacing,
            spacer_size: Size::ZERO,
            font_size: 0.0,
        }
    }

    /// Total number of cells.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Check if the grid holds no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.capacity() == 0
    }

    /// Gaps between cells along each axis: `(columns - 1, rows - 1)`.
    #[inline]
    pub const fn spacer_count(&self) -> (usize, usize) {
        (self.columns.saturating_sub(1), self.rows.saturating_sub(1))
    }

    /// Row-major `(column, row)` of a cell index.
    pub const fn coords_of(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.capacity() {
            Some((index % self.columns, index / self.columns))
        } else {
            None
        }
    }

    /// Labelled values for a debug overlay.
    pub fn diagnostics(&self) -> [(&'static str, String); 6] {
        let (spacer_columns, spacer_rows) = self.spacer_count();
        [
            (
                "canvasSize",
                format!("{:.1} × {:.1}", self.canvas.width, self.canvas.height),
            ),
            ("itemsCount", format!("{} × {}", self.columns, self.rows)),
            ("spacerCount", format!("{spacer_columns} × {spacer_rows}")),
            (
                "spacerSize",
                format!("{:.1} × {:.1}", self.spacer_size.width, self.spacer_size.height),
            ),
            (
                "itemSize",
                format!("{:.1} × {:.1}", self.cell_size.width, self.cell_size.height),
            ),
            ("numberOfItems", self.capacity().to_string()),
        ]
    }
}

impl fmt::Display for GridGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} grid of {:.1}x{:.1} cells ({} total)",
            self.columns,
            self.rows,
            self.cell_size.width,
            self.cell_size.height,
            self.capacity()
        )
    }
}

/// Fit as many `min_cell`-sized cells as possible into `canvas`.
///
/// - `columns = floor(width / (min_cell.width + spacing))`, rows likewise
/// - each axis is capped at [`MAX_AXIS_CELLS`]
/// - the cells then grow to share the leftover space, rounded down
/// - unmeasured canvases (zero, negative, non-finite) give an empty grid
///
/// # Example
///
/// ```
/// use flapboard::layout::{grid, Size};
///
/// let geometry = grid::layout(Size::new(100.0, 100.0), Size::new(20.0, 20.0), 5.0);
/// assert_eq!((geometry.columns, geometry.rows, geometry.capacity()), (4, 4, 16));
/// ```
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn layout(canvas: CanvasSize, min_cell: Size, spacing: f64) -> GridGeometry {
    let spacing = if spacing.is_finite() { spacing.max(0.0) } else { 0.0 };
    if !canvas.is_measurable() {
        return GridGeometry::empty(canvas, spacing);
    }

    let pitch = Size::new(
        min_cell.width.max(0.0) + spacing,
        min_cell.height.max(0.0) + spacing,
    );
    if !pitch.is_measurable() {
        return GridGeometry::empty(canvas, spacing);
    }

    let max_axis = MAX_AXIS_CELLS as f64;
    let columns = (canvas.width / pitch.width).floor().min(max_axis);
    let rows = (canvas.height / pitch.height).floor().min(max_axis);
    if columns < 1.0 || rows < 1.0 {
        return GridGeometry::empty(canvas, spacing);
    }

    let spacer_size = Size::new((columns - 1.0) * spacing, (rows - 1.0) * spacing);
    let cell_size = Size::new(
        (canvas.width - spacer_size.width) / columns,
        (canvas.height - spacer_size.height) / rows,
    )
    .floor();

    GridGeometry {
        canvas,
        columns: columns as usize,
        rows: rows as usize,
        cell_size,
        spacing,
        spacer_size,
        font_size: cell_size.height * FONT_SIZE_RATIO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_square() {
        let geometry = layout(Size::new(100.0, 100.0), Size::new(20.0, 20.0), 5.0);
        assert_eq!(geometry.columns, 4);
        assert_eq!(geometry.rows, 4);
        assert_eq!(geometry.capacity(), 16);
        assert_eq!(geometry.spacer_count(), (3, 3));
        assert_eq!(geometry.spacer_size, Size::new(15.0, 15.0));
        assert_eq!(geometry.cell_size, Size::new(21.0, 21.0));
        assert!((geometry.font_size - 10.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_layout_default_flap_proportions() {
        // 14x18 cells with 5 spacing on a 1920x1080 canvas.
        let geometry = layout(Size::new(1920.0, 1080.0), Size::new(14.0, 18.0), 5.0);
        assert_eq!(geometry.columns, 101);
        assert_eq!(geometry.rows, 46);
        assert_eq!(geometry.cell_size, Size::new(14.0, 18.0));
    }

    #[test]
    fn test_layout_cells_fit_canvas() {
        let canvas = Size::new(333.0, 217.0);
        let geometry = layout(canvas, Size::new(28.0, 36.0), 10.0);
        let used_width = geometry.cell_size.width * geometry.columns as f64
            + geometry.spacer_size.width;
        let used_height =
            geometry.cell_size.height * geometry.rows as f64 + geometry.spacer_size.height;
        assert!(used_width <= canvas.width);
        assert!(used_height <= canvas.height);
    }

    #[test]
    fn test_layout_too_small() {
        let geometry = layout(Size::new(24.0, 100.0), Size::new(20.0, 20.0), 5.0);
        assert_eq!(geometry.columns, 0);
        assert_eq!(geometry.rows, 0);
        assert!(geometry.is_empty());
        assert_eq!(geometry.cell_size, Size::ZERO);
    }

    #[test]
    fn test_layout_too_short() {
        let geometry = layout(Size::new(100.0, 24.0), Size::new(20.0, 20.0), 5.0);
        assert_eq!(geometry.columns, 0);
        assert_eq!(geometry.rows, 0);
        assert!(geometry.is_empty());
    }

    #[test]
    fn test_layout_huge_canvas_is_capped() {
        let canvas = Size::new(1e300, 1e300);
        let geometry = layout(canvas, Size::new(1.0, 1.0), 0.0);
        assert_eq!(geometry.columns, MAX_AXIS_CELLS);
        assert_eq!(geometry.rows, MAX_AXIS_CELLS);
        assert_eq!(geometry.capacity(), MAX_AXIS_CELLS * MAX_AXIS_CELLS);
        assert!(geometry.cell_size.width * MAX_AXIS_CELLS as f64 <= canvas.width);
        assert!(geometry.cell_size.height.is_finite());
    }

    #[test]
    fn test_layout_tiny_cells_are_capped() {
        let geometry = layout(Size::new(1920.0, 1080.0), Size::new(14e-200, 18e-200), 5e-200);
        assert_eq!(geometry.capacity(), MAX_AXIS_CELLS * MAX_AXIS_CELLS);
        assert_eq!(geometry.cell_size, Size::new(7.0, 4.0));
    }

    #[test]
    fn test_capacity_saturates() {
        let geometry = GridGeometry {
            columns: usize::MAX,
            rows: 2,
            ..GridGeometry::default()
        };
        assert_eq!(geometry.capacity(), usize::MAX);
    }

    #[test]
    fn test_layout_unmeasured_canvas() {
        for canvas in [Size::ZERO, Size::new(-50.0, 100.0), Size::new(f64::NAN, 10.0)] {
            assert_eq!(layout(canvas, Size::new(20.0, 20.0), 5.0).capacity(), 0);
        }
    }

    #[test]
    fn test_layout_zero_pitch() {
        let geometry = layout(Size::new(100.0, 100.0), Size::ZERO, 0.0);
        assert!(geometry.is_empty());
    }

    #[test]
    fn test_layout_idempotent() {
        let a = layout(Size::new(640.0, 480.0), Size::new(14.0, 18.0), 5.0);
        let b = layout(Size::new(640.0, 480.0), Size::new(14.0, 18.0), 5.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_coords_of() {
        let geometry = layout(Size::new(100.0, 100.0), Size::new(20.0, 20.0), 5.0);
        assert_eq!(geometry.coords_of(0), Some((0, 0)));
        assert_eq!(geometry.coords_of(5), Some((1, 1)));
        assert_eq!(geometry.coords_of(16), None);
        assert_eq!(GridGeometry::default().coords_of(0), None);
    }

    #[test]
    fn test_diagnostics() {
        let geometry = layout(Size::new(100.0, 100.0), Size::new(20.0, 20.0), 5.0);
        let rows = geometry.diagnostics();
        assert_eq!(rows[0], ("canvasSize", "100.0 × 100.0".to_string()));
        assert_eq!(rows[1], ("itemsCount", "4 × 4".to_string()));
        assert_eq!(rows[5], ("numberOfItems", "16".to_string()));
        assert_eq!(geometry.to_string(), "4x4 grid of 21.0x21.0 cells (16 total)");
    }
}
