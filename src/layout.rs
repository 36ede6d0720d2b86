use serde::Serialize;

// ── Position ─────────────────────────────────────────────────────────────────

/// Pixel offset of a cell's top-left corner inside the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

// ── GridLayout ────────────────────────────────────────────────────────────────

/// Grid geometry for a sheet of equally-sized cells.
///
/// Cells are filled column-major: top to bottom, then left to right. Cell 0
/// is the origin cell at (0, 0), reserved for the default image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of cell rows.
    pub rows: u32,
    /// Number of cell columns.
    pub columns: u32,
    /// Width of every cell in pixels.
    pub cell_w: u32,
    /// Height of every cell in pixels.
    pub cell_h: u32,
    /// Empty margin between adjacent cells in pixels.
    pub padding: u32,
}

impl GridLayout {
    /// Compute the near-square grid holding `total` cells.
    ///
    /// `rows = ⌊√total⌋` and `columns = ⌈total / rows⌉`, so `rows × columns`
    /// always covers `total` and the sheet comes out wider than it is tall.
    /// A zero `total` yields an empty 0×0 grid rather than dividing by zero.
    pub fn compute(total: u32, cell_w: u32, cell_h: u32, padding: u32) -> Self {
        let rows = if total == 0 { 0 } else { total.isqrt().max(1) };
        let columns = if rows == 0 { 0 } else { total.div_ceil(rows) };
        Self { rows, columns, cell_w, cell_h, padding }
    }

    /// Sheet width in pixels: all columns plus the padding between them.
    pub fn sheet_w(&self) -> u32 {
        self.cell_w * self.columns + self.padding * self.columns.saturating_sub(1)
    }

    /// Sheet height in pixels: all rows plus the padding between them.
    pub fn sheet_h(&self) -> u32 {
        self.cell_h * self.rows + self.padding * self.rows.saturating_sub(1)
    }

    /// Number of cells the grid can hold. Always ≥ the `total` it was
    /// computed for.
    pub fn capacity(&self) -> u32 {
        self.rows * self.columns
    }

    /// Top-left pixel position of the cell at `index`.
    ///
    /// Indices run column-major; callers must keep `index < capacity()`.
    pub fn position(&self, index: u32) -> Position {
        debug_assert!(index < self.capacity(), "cell index {index} out of range");
        let column = index / self.rows;
        let row = index % self.rows;
        Position {
            x: (self.cell_w + self.padding) * column,
            y: (self.cell_h + self.padding) * row,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
