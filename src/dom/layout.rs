use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::DomError;
use crate::state::sections::{Section, SectionRegistry};

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

fn section_element(document: &Document, id: &str) -> Result<HtmlElement, DomError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Reads the current offset and height of every section in `ids`, in order.
/// Sections not yet mounted are left out for this pass.
pub fn measure_sections(ids: &[&str]) -> Result<SectionRegistry, DomError> {
    let document = document()?;
    let mut sections = Vec::with_capacity(ids.len());
    for (order, id) in ids.iter().enumerate() {
        match section_element(&document, id) {
            Ok(el) => sections.push(Section::new(
                *id,
                order,
                el.offset_top() as f64,
                el.offset_height() as f64,
            )),
            Err(err) => warn!("Skipping section in layout pass: {}", err),
        }
    }
    debug!("Measured {} of {} sections", sections.len(), ids.len());
    Ok(SectionRegistry::new(sections))
}

pub fn smooth_scroll_to(top: f64) -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
