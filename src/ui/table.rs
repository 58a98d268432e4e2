use dioxus::prelude::*;

use crate::area::dom::{GridCell, GridDom};
use crate::area::model::AreaOps;
use crate::area::store::{AreaKind, CellAreaStore, CellRef, EndTarget};
use crate::area::style;
use crate::config::AppConfig;
use crate::state::data_model::{self, Column};

#[derive(Clone, PartialEq)]
struct RowView {
    index: usize,
    key: Option<String>,
    depth: usize,
    has_children: bool,
    expanded: bool,
    cells: Vec<String>,
}

pub fn grid_dom(store: &CellAreaStore<GridDom>, config: &AppConfig) -> GridDom {
    let table = store.table();
    GridDom::new(
        table.len(),
        table.columns().len(),
        config.column_width,
        config.row_height,
    )
    .with_origin_top(config.header_height)
}

#[component]
pub fn Table(store: Signal<CellAreaStore<GridDom>>, config: AppConfig) -> Element {
    let snapshot = store.read();
    let dom = grid_dom(&snapshot, &config);
    let table = snapshot.table();
    let columns: Vec<Column> = table.columns().to_vec();
    let rows: Vec<RowView> = (0..table.len())
        .map(|index| {
            let key = table.row_key(index);
            RowView {
                index,
                expanded: key.as_deref().is_some_and(|key| table.is_expanded(key)),
                key,
                depth: table.depth(index),
                has_children: table.has_children(index),
                cells: (0..columns.len())
                    .map(|col| data_model::display_value(&table.cell_value(index, col)))
                    .collect(),
            }
        })
        .collect();

    let main_style = style::area_to_style(snapshot.main().area()).inline();
    let extension_style = if snapshot.extension().is_dragging() {
        style::area_to_style(snapshot.extension().area()).inline()
    } else {
        "display: none;".to_string()
    };
    let copy_style = style::area_to_style(snapshot.copy().area()).inline();

    let main_rect = snapshot.main().layout().rect;
    let handle_style = (!main_rect.is_empty() && !snapshot.main().is_dragging()).then(|| {
        format!(
            "left: {}px; top: {}px;",
            main_rect.right() - 4.0,
            main_rect.bottom() - 4.0
        )
    });

    let tip = if snapshot.extension().is_dragging() {
        snapshot
            .pure_extension()
            .and_then(|extension| snapshot.pure_extension_tip(&dom, &extension.values))
            .map(|tip| (tip.style.inline(), data_model::display_value(&tip.value)))
    } else {
        None
    };
    drop(snapshot);

    if columns.is_empty() {
        return rsx! {
            p { class: "empty-message", id: "empty-message", "No data loaded. Click \"Open\" to load a JSON file." }
        };
    }

    let cell_style = format!(
        "width: {}px; height: {}px;",
        config.column_width, config.row_height
    );
    let header_style = format!(
        "width: {}px; height: {}px;",
        config.column_width, config.header_height
    );

    rsx! {
        div {
            class: "sheet",
            id: "sheet",
            onmouseup: {
                let mut store = store;
                move |_| {
                    store.with_mut(|state| {
                        if state.main().is_dragging() {
                            state.main_mut().set_dragging(false);
                        }
                        if state.extension().is_dragging() {
                            state.apply_extension();
                        }
                    });
                }
            },
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { style: "{header_style}", title: "{column.key}", "{column.title}" }
                        }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr { id: format!("row-{}", row.index),
                            for (col, text) in row.cells.iter().enumerate() {
                                td {
                                    style: "{cell_style}",
                                    id: format!("cell-{}-{}", row.index, col),
                                    onmousedown: {
                                        let mut store = store;
                                        let dom = dom.clone();
                                        let column = columns[col].clone();
                                        let row_key = row.key.clone();
                                        let cell = GridCell::new(row.index, col);
                                        move |_| {
                                            let mut anchor = CellRef::new(column.clone(), cell);
                                            if let Some(key) = row_key.clone() {
                                                anchor = anchor.with_row_key(key);
                                            }
                                            store.with_mut(|state| {
                                                state.set_select_cell(anchor);
                                                state.clear_area(AreaKind::Extension);
                                                if state.set_main_area(&dom, None) {
                                                    state.main_mut().set_dragging(true);
                                                }
                                            });
                                        }
                                    },
                                    onmouseenter: {
                                        let mut store = store;
                                        let dom = dom.clone();
                                        let cell = GridCell::new(row.index, col);
                                        move |_| {
                                            store.with_mut(|state| {
                                                if state.main().is_dragging() {
                                                    state.set_main_area(&dom, Some(EndTarget::Cell(cell)));
                                                } else if state.extension().is_dragging() {
                                                    state.set_extension_area(&dom, &cell);
                                                }
                                            });
                                        }
                                    },
                                    if col == 0 && row.has_children {
                                        span {
                                            class: "tree-toggle",
                                            style: format!("margin-left: {}px;", row.depth * 12),
                                            onmousedown: {
                                                let mut store = store;
                                                let key = row.key.clone();
                                                move |evt: MouseEvent| {
                                                    evt.stop_propagation();
                                                    if let Some(key) = key.as_deref() {
                                                        store.with_mut(|state| {
                                                            state.clear_all();
                                                            state.table_mut().toggle_expanded(key);
                                                        });
                                                    }
                                                }
                                            },
                                            if row.expanded { "\u{25BE}" } else { "\u{25B8}" }
                                        }
                                    } else if col == 0 && row.depth > 0 {
                                        span { style: format!("margin-left: {}px;", row.depth * 12 + 14) }
                                    }
                                    "{text}"
                                }
                            }
                        }
                    }
                }
            }
            div { class: "area area-copy", style: "{copy_style}" }
            div { class: "area area-extension", style: "{extension_style}" }
            div { class: "area area-main", style: "{main_style}" }
            if let Some(handle) = handle_style {
                div {
                    class: "fill-handle",
                    style: "{handle}",
                    onmousedown: {
                        let mut store = store;
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            store.with_mut(|state| {
                                state.clear_area(AreaKind::Extension);
                                state.extension_mut().set_dragging(true);
                            });
                        }
                    },
                }
            }
            if let Some((tip_style, tip_value)) = tip {
                div { class: "area-tip", style: "{tip_style}", "{tip_value}" }
            }
        }
    }
}
