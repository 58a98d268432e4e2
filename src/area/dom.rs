//! Boundary with the rendering layer.
//!
//! The engine never owns rendered elements. It only asks the host where a
//! cell sits (its row group, row and column position), whether a row is
//! currently displayed, and what a cell's bounding box is.

use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::area::geometry::Rect;

/// Position of a rendered cell inside its row group (`tbody`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellSlot {
    pub group: usize,
    pub dom_row: usize,
    pub dom_col: usize,
}

pub trait TableDom {
    type Cell: Clone + PartialEq + Debug;

    fn bounding_rect(&self, cell: &Self::Cell) -> Rect;

    /// Closest `td`/`tr`/`tbody` of a cell, or `None` when it is not inside
    /// a recognizable row structure.
    fn locate(&self, cell: &Self::Cell) -> Option<CellSlot>;

    /// Number of rendered rows in a group, hidden ones included.
    fn row_count(&self, group: usize) -> usize;

    fn is_row_displayed(&self, group: usize, dom_row: usize) -> bool;

    fn cell_at(&self, group: usize, dom_row: usize, dom_col: usize) -> Option<Self::Cell>;

    fn group_rect(&self, group: usize) -> Option<Rect>;

    /// Rendered rows of a group that are not `display: none`, in order.
    fn displayed_rows(&self, group: usize) -> Vec<usize> {
        (0..self.row_count(group))
            .filter(|dom_row| self.is_row_displayed(group, *dom_row))
            .collect()
    }
}

/// Cell handle of a [`GridDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub dom_row: usize,
    pub dom_col: usize,
}

impl GridCell {
    pub fn new(dom_row: usize, dom_col: usize) -> Self {
        Self { dom_row, dom_col }
    }
}

/// A single row group laid out on a fixed grid.
///
/// Hidden rows keep their DOM position but take no vertical space, the
/// same way a `display: none` row collapses inside a real table body.
#[derive(Clone, Debug, PartialEq)]
pub struct GridDom {
    rows: usize,
    column_widths: Vec<f64>,
    row_height: f64,
    origin_top: f64,
    hidden: BTreeSet<usize>,
}

impl GridDom {
    pub fn new(rows: usize, columns: usize, column_width: f64, row_height: f64) -> Self {
        Self {
            rows,
            column_widths: vec![column_width; columns],
            row_height,
            origin_top: 0.0,
            hidden: BTreeSet::new(),
        }
    }

    /// Vertical offset of the first row, e.g. below a header row.
    pub fn with_origin_top(mut self, top: f64) -> Self {
        self.origin_top = top;
        self
    }

    pub fn hide_row(&mut self, dom_row: usize) {
        self.hidden.insert(dom_row);
    }

    pub fn columns(&self) -> usize {
        self.column_widths.len()
    }

    pub fn cell(&self, dom_row: usize, dom_col: usize) -> Option<GridCell> {
        self.cell_at(0, dom_row, dom_col)
    }

    fn row_top(&self, dom_row: usize) -> f64 {
        let shown = (0..dom_row).filter(|row| !self.hidden.contains(row)).count();
        self.origin_top + shown as f64 * self.row_height
    }

    fn column_left(&self, dom_col: usize) -> f64 {
        self.column_widths.iter().take(dom_col).sum()
    }
}

impl TableDom for GridDom {
    type Cell = GridCell;

    fn bounding_rect(&self, cell: &GridCell) -> Rect {
        let height = if self.hidden.contains(&cell.dom_row) {
            0.0
        } else {
            self.row_height
        };
        Rect {
            left: self.column_left(cell.dom_col),
            top: self.row_top(cell.dom_row),
            width: self
                .column_widths
                .get(cell.dom_col)
                .copied()
                .unwrap_or_default(),
            height,
        }
    }

    fn locate(&self, cell: &GridCell) -> Option<CellSlot> {
        if cell.dom_row >= self.rows || cell.dom_col >= self.columns() {
            return None;
        }
        Some(CellSlot {
            group: 0,
            dom_row: cell.dom_row,
            dom_col: cell.dom_col,
        })
    }

    fn row_count(&self, group: usize) -> usize {
        if group == 0 {
            self.rows
        } else {
            0
        }
    }

    fn is_row_displayed(&self, group: usize, dom_row: usize) -> bool {
        group == 0 && dom_row < self.rows && !self.hidden.contains(&dom_row)
    }

    fn cell_at(&self, group: usize, dom_row: usize, dom_col: usize) -> Option<GridCell> {
        (group == 0 && dom_row < self.rows && dom_col < self.columns())
            .then_some(GridCell { dom_row, dom_col })
    }

    fn group_rect(&self, group: usize) -> Option<Rect> {
        if group != 0 {
            return None;
        }
        let shown = self.rows - self.hidden.iter().filter(|row| **row < self.rows).count();
        Some(Rect {
            left: 0.0,
            top: self.origin_top,
            width: self.column_widths.iter().sum(),
            height: shown as f64 * self.row_height,
        })
    }
}
