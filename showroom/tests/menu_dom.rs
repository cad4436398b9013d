//! In-browser coverage of the mobile menu toggle: real elements, real click
//! events, real inline styles. Runs under wasm-bindgen-test
//! (`wasm-pack test --headless --chrome showroom`); on other targets this
//! file compiles to nothing.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use showroom::menu;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(tag: &str, class: &str, parent: &web_sys::Element) -> HtmlElement {
    let element = document()
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    element.set_class_name(class);
    parent.append_child(&element).unwrap();
    element
}

/// Builds the header structure the site chrome renders: a toggle button and
/// the navigation panel under one container. Tests share the page, so every
/// test removes its container again before finishing.
fn mount_header() -> (web_sys::Element, HtmlElement, HtmlElement) {
    let document = document();
    let header = document.create_element("header").unwrap();
    document.body().unwrap().append_child(&header).unwrap();
    let toggle = mount("button", "mobile-menu-toggle", &header);
    let panel = mount("nav", "main-nav", &header);
    (header, toggle, panel)
}

fn inline_style(panel: &HtmlElement, property: &str) -> String {
    panel.style().get_property_value(property).unwrap_or_default()
}

#[wasm_bindgen_test]
fn init_on_empty_document_is_a_silent_no_op() {
    // No toggle, no panel: nothing to wire, and nothing to panic over.
    menu::init(&document());

    // Panel alone is just as inert.
    let document = document();
    let header = document.create_element("header").unwrap();
    document.body().unwrap().append_child(&header).unwrap();
    let _panel = mount("nav", "main-nav", &header);
    menu::init(&document);

    header.remove();
}

#[wasm_bindgen_test]
fn missing_panel_means_no_handler_is_attached() {
    let document = document();
    let header = document.create_element("header").unwrap();
    document.body().unwrap().append_child(&header).unwrap();
    let toggle = mount("button", "mobile-menu-toggle", &header);

    // The panel shows up only after init has already given up.
    menu::init(&document);
    let panel = mount("nav", "main-nav", &header);

    toggle.click();
    assert_eq!(
        panel.style().css_text(),
        "",
        "a click must not style a panel that was absent at init time"
    );

    header.remove();
}

#[wasm_bindgen_test]
fn first_click_opens_the_panel_as_a_dropdown() {
    let (header, toggle, panel) = mount_header();
    menu::init(&document());

    toggle.click();

    assert_eq!(inline_style(&panel, "display"), "block");
    assert_eq!(inline_style(&panel, "position"), "absolute");
    assert_eq!(inline_style(&panel, "top"), "100%");
    assert_eq!(inline_style(&panel, "width"), "100%");
    // Browsers reserialize lengths, colors, and shorthands differently, so
    // for the rest it is enough that each declaration is present.
    for property in ["left", "background-color", "border-bottom", "box-shadow"] {
        assert!(
            !inline_style(&panel, property).is_empty(),
            "expected an inline {property} declaration while open"
        );
    }

    header.remove();
}

#[wasm_bindgen_test]
fn second_click_clears_the_inline_style_entirely() {
    let (header, toggle, panel) = mount_header();
    menu::init(&document());

    toggle.click();
    toggle.click();

    assert_eq!(panel.style().css_text(), "");
    assert!(
        panel.get_attribute("style").unwrap_or_default().is_empty(),
        "closing must leave no inline style at all"
    );

    header.remove();
}

#[wasm_bindgen_test]
fn clicks_alternate_between_open_and_closed() {
    let (header, toggle, panel) = mount_header();
    menu::init(&document());

    for n in 1..=6 {
        toggle.click();
        let display = inline_style(&panel, "display");
        if n % 2 == 1 {
            assert_eq!(display, "block", "click {n} should leave the menu open");
        } else {
            assert_eq!(display, "", "click {n} should leave the menu closed");
        }
    }

    header.remove();
}

#[wasm_bindgen_test]
fn foreign_display_value_counts_as_closed() {
    let (header, toggle, panel) = mount_header();
    menu::init(&document());

    // Some other script flipped the panel to flex; only the literal value
    // "block" reads as open, so the next click opens the dropdown.
    panel.style().set_property("display", "flex").unwrap();
    toggle.click();

    assert_eq!(inline_style(&panel, "display"), "block");
    assert_eq!(inline_style(&panel, "position"), "absolute");

    header.remove();
}
