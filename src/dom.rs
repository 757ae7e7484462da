//! Small web-sys helpers for element lookup and attributes.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::AppError;

pub fn window() -> Result<Window, AppError> {
    web_sys::window().ok_or(AppError::NoBrowser("window"))
}

pub fn document(window: &Window) -> Result<Document, AppError> {
    window.document().ok_or(AppError::NoBrowser("document"))
}

/// Look up `#id` and cast it to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, AppError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| AppError::WrongElement { id: id.to_owned(), expected: std::any::type_name::<T>() })
}

/// First descendant of `parent` carrying `class`.
pub fn first_by_class(parent: &Element, class: &str) -> Result<HtmlElement, AppError> {
    parent
        .get_elements_by_class_name(class)
        .item(0)
        .ok_or_else(|| AppError::MissingElement(format!("{}>.{class}", parent.id())))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| AppError::WrongElement { id: format!(".{class}"), expected: "HtmlElement" })
}

/// Lookup over an element's `data-*` attributes, keyed without the prefix.
pub fn data_attributes(element: &Element) -> impl Fn(&str) -> Option<String> + '_ {
    move |key: &str| element.get_attribute(&format!("data-{key}"))
}
