//! Mobile navigation menu toggle.
//!
//! On narrow screens the site header collapses its navigation behind a
//! button. Clicking the button shows the panel as a full-width dropdown by
//! writing inline styles onto it, and hides it again by clearing the inline
//! style so the stylesheet takes back over. Whether the menu is open is read
//! back from the panel's own inline `display` value rather than tracked
//! separately, so external writes to that value are picked up on the next
//! click.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Selector for the control that opens and closes the menu.
pub const TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";

/// Selector for the navigation panel the toggle controls.
pub const NAV_SELECTOR: &str = ".main-nav";

/// Inline declarations carried by the panel while the menu is open:
/// visible, and positioned as a full-width dropdown hanging directly below
/// the header, on a white card with a hairline rule and a soft shadow.
pub const OPEN_DECLARATIONS: [(&str, &str); 8] = [
    ("display", "block"),
    ("position", "absolute"),
    ("top", "100%"),
    ("left", "0"),
    ("width", "100%"),
    ("background-color", "white"),
    ("border-bottom", "1px solid #eee"),
    ("box-shadow", "0 4px 6px rgba(0,0,0,0.05)"),
];

/// The menu counts as open only when the panel's inline display value is
/// exactly `block`. Anything else — empty, `none`, or some foreign value —
/// counts as closed.
pub fn is_open(display: &str) -> bool {
    display == "block"
}

/// The open-state inline style as a single `cssText` string.
pub fn open_css_text() -> String {
    OPEN_DECLARATIONS
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inline style the panel should carry after one click, given the inline
/// display value it carries now: cleared entirely when currently open, the
/// full open set otherwise.
pub fn toggle_css_text(current_display: &str) -> String {
    if is_open(current_display) {
        String::new()
    } else {
        open_css_text()
    }
}

/// Wire the menu toggle to the navigation panel.
///
/// Call once, after the page structure exists. Pages that render no toggle
/// or no panel simply have no collapsible menu: nothing is wired and nothing
/// fails. Once attached, the click handler stays alive for the rest of the
/// page's lifetime.
pub fn init(document: &Document) {
    let Ok(Some(toggle)) = document.query_selector(TOGGLE_SELECTOR) else {
        return;
    };
    // The panel must expose an inline style declaration, so it has to be an
    // HTML element; a non-HTML match is treated the same as no match.
    let Some(panel) = document
        .query_selector(NAV_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let handler = Closure::<dyn FnMut()>::new(move || {
        let style = panel.style();
        let display = style.get_property_value("display").unwrap_or_default();
        style.set_css_text(&toggle_css_text(&display));
    });
    let _ = toggle.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
    handler.forget();
}
