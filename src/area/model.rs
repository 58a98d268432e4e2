use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::area::dom::TableDom;
use crate::area::geometry::{self, Coord};
use crate::area::indices::{self, IndexRange};
use crate::state::data_model::Column;
use crate::state::table_context::TableContext;

/// Materialized content of an area.
///
/// `rows` are positions in the table's projected row list; `values[i][j]`
/// belongs to `(rows[i], columns[j])`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaData {
    pub rows: Vec<usize>,
    pub columns: Vec<Column>,
    pub values: Vec<Vec<Value>>,
}

impl AreaData {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragMode {
    Clip,
    Copy,
    Default,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Drag {
    pub mode: Option<DragMode>,
    pub dragging: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Area {
    pub coord: Coord,
    pub indices: IndexRange,
    pub data: AreaData,
    pub drag: Drag,
}

impl Area {
    pub fn with_mode(mode: Option<DragMode>) -> Self {
        Self {
            drag: Drag {
                mode,
                dragging: false,
            },
            ..Self::default()
        }
    }

    /// Back to the deselected state. The drag mode is kept.
    pub fn clear(&mut self) {
        self.coord = Coord::default();
        self.indices = IndexRange::default();
        self.data = AreaData::default();
    }
}

/// Capabilities shared by the main, extension and copy areas.
pub trait AreaOps {
    fn area(&self) -> &Area;

    fn area_mut(&mut self) -> &mut Area;

    fn layout(&self) -> &Coord {
        &self.area().coord
    }

    fn indices(&self) -> &IndexRange {
        &self.area().indices
    }

    fn data(&self) -> &AreaData {
        &self.area().data
    }

    fn set_data(&mut self, table: &TableContext, range: &IndexRange) {
        self.area_mut().data = table.area_data(range);
    }

    fn set_dragging(&mut self, value: bool) {
        self.area_mut().drag.dragging = value;
    }

    fn is_dragging(&self) -> bool {
        self.area().drag.dragging
    }

    fn clear(&mut self) {
        self.area_mut().clear();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MainArea {
    area: Area,
}

impl Default for MainArea {
    fn default() -> Self {
        Self {
            area: Area::with_mode(None),
        }
    }
}

impl AreaOps for MainArea {
    fn area(&self) -> &Area {
        &self.area
    }

    fn area_mut(&mut self) -> &mut Area {
        &mut self.area
    }
}

impl MainArea {
    pub fn set_layout<D: TableDom>(&mut self, dom: &D, start: &D::Cell, end: Option<&D::Cell>) {
        let end_rect = end.map(|cell| dom.bounding_rect(cell));
        self.area.coord = geometry::compute_coord(dom.bounding_rect(start), end_rect);
    }

    /// Returns `false` and leaves the indices untouched when `start` cannot be resolved.
    pub fn set_indices<D: TableDom>(&mut self, dom: &D, start: &D::Cell, end: Option<&D::Cell>) -> bool {
        match indices::resolve_range(dom, start, end) {
            Some(range) => {
                self.area.indices = range;
                true
            }
            None => false,
        }
    }

    pub fn set_area<D: TableDom>(
        &mut self,
        table: &TableContext,
        dom: &D,
        start: &D::Cell,
        end: Option<&D::Cell>,
    ) -> bool {
        if !self.set_indices(dom, start, end) {
            return false;
        }
        self.set_layout(dom, start, end);
        let range = self.area.indices;
        self.set_data(table, &range);
        true
    }

    pub fn set_area_from(&mut self, other: &Area) {
        self.area.coord = other.coord;
        self.area.indices = other.indices;
        self.area.data = other.data.clone();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionArea {
    area: Area,
}

impl Default for ExtensionArea {
    fn default() -> Self {
        Self {
            area: Area::with_mode(Some(DragMode::Clip)),
        }
    }
}

impl AreaOps for ExtensionArea {
    fn area(&self) -> &Area {
        &self.area
    }

    fn area_mut(&mut self) -> &mut Area {
        &mut self.area
    }
}

impl ExtensionArea {
    pub fn set_layout<D: TableDom>(&mut self, dom: &D, main: &Coord, end: &D::Cell) {
        let previous = self.area.coord.orientation;
        self.area.coord = geometry::extension_coord(main, dom.bounding_rect(end), &previous);
    }

    pub fn set_indices<D: TableDom>(&mut self, dom: &D, main: &IndexRange, end: &D::Cell) -> bool {
        let Some(end) = indices::cell_to_indices(dom, end) else {
            return false;
        };
        self.area.indices = indices::extension_range(main, end, &self.area.coord.orientation);
        true
    }

    pub fn set_area<D: TableDom>(
        &mut self,
        table: &TableContext,
        dom: &D,
        main: &Area,
        end: &D::Cell,
    ) -> bool {
        if indices::cell_to_indices(dom, end).is_none() {
            return false;
        }
        self.set_layout(dom, &main.coord, end);
        if !self.set_indices(dom, &main.indices, end) {
            return false;
        }
        let range = self.area.indices;
        self.set_data(table, &range);
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CopyArea {
    area: Area,
}

impl Default for CopyArea {
    fn default() -> Self {
        Self {
            area: Area::with_mode(Some(DragMode::Copy)),
        }
    }
}

impl AreaOps for CopyArea {
    fn area(&self) -> &Area {
        &self.area
    }

    fn area_mut(&mut self) -> &mut Area {
        &mut self.area
    }
}

impl CopyArea {
    /// Copies the position of `main` only.
    pub fn set_layout(&mut self, main: &Coord) {
        self.area.coord.rect = main.rect;
    }

    pub fn set_indices(&mut self, main: &IndexRange) {
        self.area.indices = *main;
    }

    pub fn set_snapshot(&mut self, main: &AreaData) {
        self.area.data = main.clone();
    }
}
