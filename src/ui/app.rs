use dioxus::prelude::{Key, *};

use crate::area::dom::GridDom;
use crate::area::store::{AreaKind, CellAreaStore};
use crate::config::AppConfig;
use crate::io::json_io;
use crate::state::table_context::TableOptions;
use crate::ui::actions;
use crate::ui::table::{grid_dom, Table};

const STYLES: &str = r#"
.app { font-family: sans-serif; font-size: 13px; }
.toolbar { display: flex; gap: 8px; padding: 6px; align-items: center; }
.error { color: #b00020; }
.sheet { position: relative; outline: none; user-select: none; }
.sheet table { border-collapse: collapse; table-layout: fixed; }
.sheet th, .sheet td { box-sizing: border-box; border: 1px solid #ddd; padding: 0 4px; overflow: hidden; white-space: nowrap; }
.sheet th { background: #f3f3f3; }
.area { position: absolute; box-sizing: border-box; pointer-events: none; }
.area-main { border: 2px solid #1a73e8; background: rgba(26, 115, 232, 0.08); }
.area-extension { border: 1px dashed #5f6368; }
.area-copy { border: 2px dashed #188038; }
.fill-handle { position: absolute; width: 7px; height: 7px; background: #1a73e8; cursor: crosshair; }
.area-tip { position: absolute; padding: 2px 6px; background: #333; color: #fff; border-radius: 3px; pointer-events: none; }
.tree-toggle { cursor: pointer; margin-right: 4px; }
"#;

fn initial_options(config: &AppConfig) -> (TableOptions, Option<String>) {
    let Some(path) = config.open_path.as_ref() else {
        return (TableOptions::mock(config.mock_rows, config.mock_columns), None);
    };
    match json_io::load_table(path) {
        Ok(options) => (options, None),
        Err(e) => (
            TableOptions::mock(config.mock_rows, config.mock_columns),
            Some(e.to_string()),
        ),
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        AppConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default configuration");
            AppConfig::default()
        })
    });
    let mut error_message = use_signal::<Option<String>>(|| None);
    let status = use_signal::<Option<String>>(|| None);
    let clipboard = use_signal(String::new);
    let mut store = use_signal({
        let config = config.clone();
        move || {
            let (options, error) = initial_options(&config);
            if let Some(error) = error {
                tracing::warn!(%error, "could not open configured file");
            }
            let mut store = CellAreaStore::<GridDom>::new().with_tip_offset(config.tip_offset);
            store.set_table_info(options);
            store
        }
    });

    let dom = grid_dom(&store.read(), &config);

    rsx! {
        style { "{STYLES}" }
        div {
            class: "app",
            tabindex: "0",
            onkeydown: {
                let dom = dom.clone();
                move |evt: KeyboardEvent| {
                    let ctrl = evt.modifiers().ctrl() || evt.modifiers().meta();
                    match evt.key() {
                        Key::Character(ch) if ctrl && ch.eq_ignore_ascii_case("c") => {
                            let count = actions::copy_selection(store, clipboard);
                            flash(status, format!("Copied {count} cells"));
                        }
                        Key::Character(ch) if ctrl && ch.eq_ignore_ascii_case("v") => {
                            if actions::paste_selection(store, &dom, clipboard).is_some() {
                                flash(status, "Pasted".to_string());
                            }
                        }
                        Key::Escape => {
                            store.with_mut(|state| state.clear_area(AreaKind::Copy));
                        }
                        _ => {}
                    }
                }
            },
            div { class: "toolbar",
                button {
                    id: "btn-open",
                    onclick: move |_| {
                        spawn(async move {
                            actions::open_file(store, error_message).await;
                        });
                    },
                    "Open"
                }
                button {
                    id: "btn-clear",
                    onclick: move |_| {
                        store.with_mut(|state| state.clear_all());
                        error_message.set(None);
                    },
                    "Clear selection"
                }
                if let Some(message) = status.read().as_ref() {
                    span { class: "status", "{message}" }
                }
                if let Some(message) = error_message.read().as_ref() {
                    span { class: "error", "{message}" }
                }
            }
            Table { store, config: config.clone() }
        }
    }
}

fn flash(mut status: Signal<Option<String>>, message: String) {
    status.set(Some(message));
    spawn(async move {
        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
        status.set(None);
    });
}
