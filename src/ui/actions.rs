use dioxus::prelude::*;

use crate::area::dom::GridDom;
use crate::area::indices::IndexPair;
use crate::area::model::AreaOps;
use crate::area::store::{CellAreaStore, CellTarget, EndTarget};
use crate::io::json_io;

pub type Store = Signal<CellAreaStore<GridDom>>;

pub async fn open_file(mut store: Store, mut error_message: Signal<Option<String>>) {
    let task = rfd::AsyncFileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
        .await;

    if let Some(handle) = task {
        let path = handle.path().to_path_buf();
        match json_io::load_table(&path) {
            Ok(options) => {
                store.with_mut(|state| {
                    state.clear_all();
                    state.set_table_info(options);
                });
                error_message.set(None);
                tracing::info!(path = %path.display(), "table opened");
            }
            Err(e) => {
                error_message.set(Some(e.to_string()));
            }
        }
    }
}

/// Copies the main area and returns the number of copied cells.
pub fn copy_selection(mut store: Store, mut clipboard: Signal<String>) -> usize {
    let (text, count) = store.with_mut(|state| {
        let text = state.copy_selection();
        let count = state.main().indices().len();
        (text, count)
    });
    clipboard.set(text);
    count
}

/// Pastes the internal clipboard at the anchor and selects the written block.
pub fn paste_selection(mut store: Store, dom: &GridDom, clipboard: Signal<String>) -> Option<IndexPair> {
    let text = clipboard.read().clone();
    store.with_mut(|state| {
        let anchor = state.select_cell().map(|anchor| anchor.cell)?;
        let range = state.paste_text(dom, CellTarget::Cell(anchor), &text)?;
        state.set_main_area(dom, Some(EndTarget::Bound(range.end)));
        Some(range.end)
    })
}
