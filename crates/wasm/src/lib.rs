use std::sync::{Mutex, OnceLock};

use folio_core::content::PageContent;
use folio_core::html::{css_var, export_html, palette_hex};
use folio_core::layout::PageLayout;
use folio_core::state::PageState;
use folio_core::views;
use folio_protocol::{ThemeMode, ThemeToken, Viewport};
use wasm_bindgen::prelude::*;

static STATE: Mutex<PageState> = Mutex::new(PageState::new());
static CONTENT: OnceLock<PageContent> = OnceLock::new();

fn page() -> &'static PageContent {
    CONTENT.get_or_init(PageContent::builtin)
}

fn mode_name(mode: ThemeMode) -> String {
    if mode.is_dark() { "dark".to_owned() } else { "light".to_owned() }
}

/// Validate the built-in content and reset page state to its initial
/// values (dark theme, home active, not yet mounted).
#[wasm_bindgen]
pub fn init_page() -> Result<(), JsError> {
    page().validate().map_err(|e| JsError::new(&e.to_string()))?;
    *STATE.lock().unwrap() = PageState::new();
    Ok(())
}

/// The full page content as JSON.
#[wasm_bindgen]
pub fn page_content() -> Result<String, JsError> {
    serde_json::to_string(page()).map_err(|e| JsError::new(&e.to_string()))
}

/// Current page state as JSON.
#[wasm_bindgen]
pub fn page_state() -> Result<String, JsError> {
    let state = *STATE.lock().unwrap();
    serde_json::to_string(&state).map_err(|e| JsError::new(&e.to_string()))
}

/// Render the scrollable page for a viewport, returning render
/// commands as JSON.
#[wasm_bindgen]
pub fn render_page(width: f64, height: f64, scroll_y: f64) -> Result<String, JsError> {
    let layout = PageLayout::compute(page(), width, height);
    let viewport = Viewport::new(scroll_y, width, height);
    let state = *STATE.lock().unwrap();
    let commands = views::render_page(&layout, &viewport, &state);
    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

/// Render the fixed nav bar, returning render commands as JSON.
#[wasm_bindgen]
pub fn render_nav(width: f64) -> Result<String, JsError> {
    let state = *STATE.lock().unwrap();
    let commands = views::render_nav(page(), &state, width);
    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

/// Render the fixed link rail, returning render commands as JSON.
#[wasm_bindgen]
pub fn render_sidebar(width: f64, height: f64) -> Result<String, JsError> {
    let viewport = Viewport::new(0.0, width, height);
    let commands = views::render_sidebar(&page().links, &viewport);
    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

/// Feed a scroll position; returns the anchor of the active section.
#[wasm_bindgen]
pub fn on_scroll(scroll_y: f64, width: f64, height: f64) -> String {
    let layout = PageLayout::compute(page(), width, height);
    let viewport = Viewport::new(scroll_y, width, height);
    let mut state = STATE.lock().unwrap();
    state.observe_scroll(layout.section_boxes(), &viewport);
    state.active.to_string()
}

/// Flip between dark and light; returns the new mode name.
#[wasm_bindgen]
pub fn toggle_theme() -> String {
    let mut state = STATE.lock().unwrap();
    state.toggle_theme();
    mode_name(state.theme)
}

/// Latch the mounted flag after the first committed frame.
#[wasm_bindgen]
pub fn mark_mounted() {
    STATE.lock().unwrap().mark_mounted();
}

/// CSS custom property values for a palette, as a JSON object.
#[wasm_bindgen]
pub fn palette(dark: bool) -> Result<String, JsError> {
    let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
    let mut map = serde_json::Map::new();
    for token in ThemeToken::ALL {
        map.insert(
            css_var(token).to_owned(),
            serde_json::Value::String(palette_hex(token, mode).to_owned()),
        );
    }
    serde_json::to_string(&map).map_err(|e| JsError::new(&e.to_string()))
}

/// Anchor to section-top offsets for a viewport size, as a JSON
/// object. Hosts use these to drive smooth scrolling from nav clicks.
#[wasm_bindgen]
pub fn section_tops(width: f64, height: f64) -> Result<String, JsError> {
    let layout = PageLayout::compute(page(), width, height);
    let mut map = serde_json::Map::new();
    for b in layout.section_boxes() {
        map.insert(b.id.to_string(), serde_json::Value::from(b.rect.top()));
    }
    serde_json::to_string(&map).map_err(|e| JsError::new(&e.to_string()))
}

/// Total page height for a viewport size, in page units.
#[wasm_bindgen]
pub fn page_height(width: f64, height: f64) -> f64 {
    PageLayout::compute(page(), width, height).total_height()
}

/// Largest useful scroll offset for a viewport.
#[wasm_bindgen]
pub fn max_scroll(width: f64, height: f64) -> f64 {
    PageLayout::compute(page(), width, height).max_scroll(height)
}

/// The page rendered as a standalone HTML document.
#[wasm_bindgen]
pub fn export_page_html(dark: bool) -> String {
    let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
    export_html(page(), mode)
}
