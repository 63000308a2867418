//! Letterpress in the browser.
//!
//! A client-side rendered Leptos app over the same record model, templates
//! and storage layout as the CLI. Newsletters live in `localStorage` under
//! the `newsletters` key.

mod app;
mod components;
mod logging;
mod storage;
mod timer;

pub use app::App;
pub use storage::LocalStorageBlobStore;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}
