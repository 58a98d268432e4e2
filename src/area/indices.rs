use serde::{Deserialize, Serialize};

use crate::area::dom::TableDom;
use crate::area::geometry::{Horizontal, Orientation, Vertical};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexPair {
    pub row: usize,
    pub col: usize,
}

impl IndexPair {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shifts by a signed offset, or `None` when the result would be negative.
    pub fn offset(self, rows: isize, cols: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(rows)?,
            col: self.col.checked_add_signed(cols)?,
        })
    }
}

/// Half-open `[start, end)` range over projected rows and columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: IndexPair,
    pub end: IndexPair,
}

impl IndexRange {
    /// Builds a range from two corners, ordering each axis.
    pub fn new(a: IndexPair, b: IndexPair) -> Self {
        Self {
            start: IndexPair::new(a.row.min(b.row), a.col.min(b.col)),
            end: IndexPair::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    pub fn unit(at: IndexPair) -> Self {
        Self {
            start: at,
            end: IndexPair::new(at.row + 1, at.col + 1),
        }
    }

    /// Range spanning two inclusive cell corners.
    pub fn spanning(a: IndexPair, b: IndexPair) -> Self {
        let mut range = Self::new(a, b);
        range.end.row += 1;
        range.end.col += 1;
        range
    }

    pub fn rows(&self) -> usize {
        self.end.row.saturating_sub(self.start.row)
    }

    pub fn cols(&self) -> usize {
        self.end.col.saturating_sub(self.start.col)
    }

    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    pub fn contains(&self, at: IndexPair) -> bool {
        (self.start.row..self.end.row).contains(&at.row)
            && (self.start.col..self.end.col).contains(&at.col)
    }
}

/// Logical `(row, col)` of a rendered cell, skipping rows that are not displayed.
pub fn cell_to_indices<D: TableDom>(dom: &D, cell: &D::Cell) -> Option<IndexPair> {
    let slot = dom.locate(cell)?;
    let mut row = 0;
    for dom_row in 0..dom.row_count(slot.group) {
        if !dom.is_row_displayed(slot.group, dom_row) {
            continue;
        }
        if dom_row == slot.dom_row {
            return Some(IndexPair::new(row, slot.dom_col));
        }
        row += 1;
    }
    None
}

/// Cell at a logical position in the same row group as `anchor`.
pub fn index_to_cell<D: TableDom>(dom: &D, anchor: &D::Cell, at: IndexPair) -> Option<D::Cell> {
    let slot = dom.locate(anchor)?;
    let dom_row = *dom.displayed_rows(slot.group).get(at.row)?;
    dom.cell_at(slot.group, dom_row, at.col)
}

/// Cell lying `offset` rows and columns away from `anchor`, counting only displayed rows.
pub fn indices_to_cell<D: TableDom>(dom: &D, anchor: &D::Cell, offset: [isize; 2]) -> Option<D::Cell> {
    let origin = cell_to_indices(dom, anchor)?;
    let target = origin.offset(offset[0], offset[1])?;
    index_to_cell(dom, anchor, target)
}

/// Last cell inside an exclusive end bound, e.g. the bottom-right cell of a pasted block.
pub fn bound_to_cell<D: TableDom>(dom: &D, anchor: &D::Cell, bound: IndexPair) -> Option<D::Cell> {
    let last = IndexPair::new(bound.row.checked_sub(1)?, bound.col.checked_sub(1)?);
    index_to_cell(dom, anchor, last)
}

pub fn resolve_range<D: TableDom>(
    dom: &D,
    start: &D::Cell,
    end: Option<&D::Cell>,
) -> Option<IndexRange> {
    let start = cell_to_indices(dom, start)?;
    let range = match end.and_then(|cell| cell_to_indices(dom, cell)) {
        Some(end) => IndexRange::spanning(start, end),
        None => IndexRange::unit(start),
    };
    Some(range)
}

/// Replaces the main range's bound on each axis the extension grew along.
pub fn extension_range(main: &IndexRange, end: IndexPair, orientation: &Orientation) -> IndexRange {
    let mut range = *main;
    match orientation.horizontal {
        Some(Horizontal::Left) => range.start.col = end.col.min(main.start.col),
        Some(Horizontal::Right) => range.end.col = (end.col + 1).max(main.end.col),
        None => {}
    }
    match orientation.vertical {
        Some(Vertical::Top) => range.start.row = end.row.min(main.start.row),
        Some(Vertical::Bottom) => range.end.row = (end.row + 1).max(main.end.row),
        None => {}
    }
    range
}
