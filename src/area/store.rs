use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::area::autofill::{self, PureExtension};
use crate::area::dom::TableDom;
use crate::area::geometry::Rect;
use crate::area::indices::{self, IndexPair, IndexRange};
use crate::area::model::{AreaData, AreaOps, CopyArea, ExtensionArea, MainArea};
use crate::area::style::{self, AreaTip, TIP_OFFSET};
use crate::io::clipboard;
use crate::state::data_model::Column;
use crate::state::table_context::{TableContext, TableOptions};

/// A logical cell together with its rendered element.
#[derive(Clone, Debug, PartialEq)]
pub struct CellRef<C> {
    pub row_key: Option<String>,
    pub column: Column,
    pub cell: C,
}

impl<C> CellRef<C> {
    pub fn new(column: Column, cell: C) -> Self {
        Self {
            row_key: None,
            column,
            cell,
        }
    }

    pub fn with_row_key(mut self, key: impl Into<String>) -> Self {
        self.row_key = Some(key.into());
        self
    }
}

/// Where a main-area selection ends.
#[derive(Clone, Debug, PartialEq)]
pub enum EndTarget<C> {
    /// The cell under the pointer.
    Cell(C),
    /// `[rows, cols]` away from the anchor, counting displayed rows only.
    Offset([isize; 2]),
    /// Exclusive end bound, as returned by a block write.
    Bound(IndexPair),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CellTarget<C> {
    Cell(C),
    Index(IndexPair),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaKind {
    Main,
    Extension,
    Copy,
}

/// Owns the selection areas and the table they index into.
///
/// Every operation recomputes from scratch; nothing is carried over between
/// pointer moves except the extension's established orientation.
#[derive(Debug)]
pub struct CellAreaStore<D: TableDom> {
    table: TableContext,
    select_cell: Option<CellRef<D::Cell>>,
    main: MainArea,
    extension: ExtensionArea,
    copy: CopyArea,
    extended: bool,
    tip_offset: f64,
}

impl<D: TableDom> Default for CellAreaStore<D> {
    fn default() -> Self {
        Self {
            table: TableContext::default(),
            select_cell: None,
            main: MainArea::default(),
            extension: ExtensionArea::default(),
            copy: CopyArea::default(),
            extended: false,
            tip_offset: TIP_OFFSET,
        }
    }
}

impl<D: TableDom> CellAreaStore<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tip_offset(mut self, offset: f64) -> Self {
        self.tip_offset = offset;
        self
    }

    pub fn set_table_info(&mut self, options: TableOptions) {
        self.table = TableContext::new(options);
        debug!(rows = self.table.len(), columns = self.table.columns().len(), "table projected");
    }

    pub fn table(&self) -> &TableContext {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableContext {
        &mut self.table
    }

    pub fn main(&self) -> &MainArea {
        &self.main
    }

    pub fn main_mut(&mut self) -> &mut MainArea {
        &mut self.main
    }

    pub fn extension(&self) -> &ExtensionArea {
        &self.extension
    }

    pub fn extension_mut(&mut self) -> &mut ExtensionArea {
        &mut self.extension
    }

    pub fn copy(&self) -> &CopyArea {
        &self.copy
    }

    pub fn select_cell(&self) -> Option<&CellRef<D::Cell>> {
        self.select_cell.as_ref()
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn set_select_cell(&mut self, cell: CellRef<D::Cell>) {
        trace!(column = %cell.column.key, "anchor set");
        self.select_cell = Some(cell);
        self.extended = false;
        self.extension.clear();
        self.copy.clear();
    }

    pub fn select_cell_rect(&self, dom: &D) -> Rect {
        self.select_cell
            .as_ref()
            .map(|anchor| dom.bounding_rect(&anchor.cell))
            .unwrap_or_default()
    }

    /// Grows the main area from the anchor to `end`.
    ///
    /// Returns `false` without touching the area when there is no anchor or
    /// a cell cannot be resolved.
    pub fn set_main_area(&mut self, dom: &D, end: Option<EndTarget<D::Cell>>) -> bool {
        let Some(anchor) = self.select_cell.as_ref() else {
            return false;
        };
        let end_cell = match end {
            None => None,
            Some(EndTarget::Cell(cell)) => Some(cell),
            Some(EndTarget::Offset(offset)) => {
                let Some(cell) = indices::indices_to_cell(dom, &anchor.cell, offset) else {
                    warn!(?offset, "selection offset is outside the rendered rows");
                    return false;
                };
                Some(cell)
            }
            Some(EndTarget::Bound(bound)) => {
                let Some(cell) = indices::bound_to_cell(dom, &anchor.cell, bound) else {
                    warn!(?bound, "selection bound is outside the rendered rows");
                    return false;
                };
                Some(cell)
            }
        };

        let updated = self
            .main
            .set_area(&self.table, dom, &anchor.cell, end_cell.as_ref());
        if updated {
            trace!(indices = ?self.main.indices(), "main area updated");
        } else {
            warn!("anchor cell is not inside a rendered row");
        }
        updated
    }

    pub fn set_extension_area(&mut self, dom: &D, end: &D::Cell) -> bool {
        let updated = self
            .extension
            .set_area(&self.table, dom, self.main.area(), end);
        if updated {
            trace!(
                indices = ?self.extension.indices(),
                orientation = ?self.extension.layout().orientation,
                "extension area updated"
            );
        }
        updated
    }

    pub fn set_copy_area(&mut self) {
        self.copy.set_layout(self.main.layout());
        debug!(rect = ?self.copy.layout().rect, "copy area set");
    }

    /// Marks the main area as copied and returns its values as clipboard text.
    pub fn copy_selection(&mut self) -> String {
        self.set_copy_area();
        self.copy.set_indices(self.main.indices());
        self.copy.set_snapshot(self.main.data());
        clipboard::serialize(&self.main.data().values)
    }

    /// Folds the extension into the main area and ends the fill gesture.
    ///
    /// The extension is reset so the next gesture picks its axis afresh.
    pub fn extend_main_area(&mut self) {
        self.main.set_area_from(self.extension.area());
        self.extension.clear();
        self.extended = true;
        debug!(indices = ?self.main.indices(), "main area extended");
    }

    pub fn clear_area(&mut self, kind: AreaKind) {
        match kind {
            AreaKind::Main => self.main.clear(),
            AreaKind::Extension => self.extension.clear(),
            AreaKind::Copy => self.copy.clear(),
        }
    }

    pub fn clear_all(&mut self) {
        self.main.clear();
        self.extension.clear();
        self.copy.clear();
        self.select_cell = None;
        self.extended = false;
    }

    pub fn get_cell_area_data_by_indices(&self, range: &IndexRange) -> AreaData {
        self.table.area_data(range)
    }

    pub fn pure_extension(&self) -> Option<PureExtension> {
        autofill::compute_pure_extension(&self.table, self.main.area(), self.extension.area())
    }

    pub fn pure_extension_tip(&self, dom: &D, values: &[Vec<Value>]) -> Option<AreaTip> {
        let anchor = self.select_cell.as_ref()?;
        let group = dom
            .locate(&anchor.cell)
            .and_then(|slot| dom.group_rect(slot.group));
        style::pure_extension_tip(self.extension.area(), values, group, self.tip_offset)
    }

    /// Writes a block of values starting at `target`, clipped to the table.
    pub fn set_cells_data(
        &mut self,
        dom: &D,
        target: CellTarget<D::Cell>,
        values: &[Vec<Value>],
    ) -> Option<IndexRange> {
        let start = match target {
            CellTarget::Index(at) => at,
            CellTarget::Cell(cell) => indices::cell_to_indices(dom, &cell)?,
        };
        let written = self.table.write_block(start, values);
        match written {
            Some(range) => debug!(?range, "cells written"),
            None => warn!(?start, rows = values.len(), "empty or out-of-bounds block ignored"),
        }
        written
    }

    /// Parses clipboard text and writes it at `target`.
    pub fn paste_text(&mut self, dom: &D, target: CellTarget<D::Cell>, text: &str) -> Option<IndexRange> {
        let values = clipboard::parse(text);
        self.set_cells_data(dom, target, &values)
    }

    /// Writes the pure extension into the table and folds the extension
    /// into the main area.
    pub fn apply_extension(&mut self) -> Option<IndexRange> {
        let extension = self.pure_extension();
        self.extension.set_dragging(false);
        let Some(extension) = extension else {
            self.extension.clear();
            return None;
        };
        let written = self.table.write_block(extension.indices.start, &extension.values);
        self.extend_main_area();
        let range = *self.main.indices();
        self.main.set_data(&self.table, &range);
        debug!(?written, "fill applied");
        written
    }
}
