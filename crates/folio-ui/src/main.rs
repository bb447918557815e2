//! WASM entry point
//!
//! This is the main entry point that Trunk compiles to WASM.
//! It attaches the page interactions to the already-rendered document.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if let Err(err) = folio_ui::boot() {
        web_sys::console::error_1(&format!("page interactions failed to start: {err}").into());
    }
}
