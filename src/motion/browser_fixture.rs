use web_sys::{Document, Element, HtmlElement, Window};
use wasm_bindgen::JsCast;

use crate::config::HorizontalScrollConfig;

pub const TRACK_MARKUP: &str = r#"
    <div class="hs__outer">
      <div class="hs__sticky">
        <div class="hs__track">
          <div class="hs__panel"><div class="media-frame"></div></div>
          <div class="hs__panel"><p>no frame</p></div>
          <div class="hs__panel"><div class="media-frame"></div></div>
        </div>
      </div>
    </div>"#;

pub fn page() -> (Window, Document) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    (window, document)
}

/// Appends a `<section>` holding `inner` to the body, pinned into the viewport.
pub fn mount(id: &str, class: &str, inner: &str) -> Element {
    let (_, document) = page();
    let section = document.create_element("section").unwrap();
    section.set_id(id);
    section.set_class_name(class);
    section.set_inner_html(inner);
    section
        .set_attribute("style", "position: fixed; top: 0; left: 0; width: 100%; height: 200px;")
        .unwrap();
    document.body().unwrap().append_child(&section).unwrap();
    section
}

/// Horizontal config anchored on `section`, pinned at any viewport width.
pub fn track_config(section: &str) -> HorizontalScrollConfig {
    HorizontalScrollConfig {
        section: section.to_string(),
        breakpoint: 0.0,
        ..HorizontalScrollConfig::default()
    }
}

pub fn html(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector).unwrap().unwrap().dyn_into::<HtmlElement>().unwrap()
}

pub fn fire(window: &Window, event: &str) {
    let event = web_sys::Event::new(event).unwrap();
    window.dispatch_event(&event).unwrap();
}
