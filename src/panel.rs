//! Palette and brush panels.
//!
//! Each panel element holds an `.options` container, filled here with one
//! `.option` swatch per configured entry, and a `.current-option` indicator
//! showing the active choice. Swatches carry `data-index` so a click maps
//! back to the configured color or size without reading styles.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use canvas::config::BoardConfig;
use canvas::state::ToolState;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::error::AppError;

/// Background of brush swatches.
pub const BRUSH_SWATCH_COLOR: &str = "black";

const OPTIONS_CLASS: &str = "options";
const OPTION_CLASS: &str = "option";
const CURRENT_CLASS: &str = "current-option";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Palette,
    Brushes,
}

impl PanelKind {
    /// Element id of the panel in the page.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Palette => "palette",
            Self::Brushes => "brushes",
        }
    }

    /// Number of swatches the panel shows.
    #[must_use]
    pub fn option_count(self, config: &BoardConfig) -> usize {
        match self {
            Self::Palette => config.palette.len(),
            Self::Brushes => config.brush_sizes.len(),
        }
    }
}

/// A tool choice made from, or shown by, a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Color(String),
    Size(f64),
}

impl Selection {
    /// Visual style of a swatch (or the indicator) for this choice.
    #[must_use]
    pub fn style(&self) -> SwatchStyle {
        match self {
            Self::Color(color) => SwatchStyle { background: color.clone(), side_px: None },
            Self::Size(size) => SwatchStyle { background: BRUSH_SWATCH_COLOR.to_owned(), side_px: Some(*size) },
        }
    }
}

/// Inline style applied to a swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchStyle {
    pub background: String,
    /// Square side for brush swatches; color swatches keep their CSS size.
    pub side_px: Option<f64>,
}

impl SwatchStyle {
    /// `(property, value)` pairs to set on the element.
    #[must_use]
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![("background-color", self.background.clone())];
        if let Some(side) = self.side_px {
            props.push(("width", format!("{side}px")));
            props.push(("height", format!("{side}px")));
        }
        props
    }
}

/// The configured choice at `index`, if any.
#[must_use]
pub fn selection_at(kind: PanelKind, config: &BoardConfig, index: usize) -> Option<Selection> {
    match kind {
        PanelKind::Palette => config.palette.get(index).cloned().map(Selection::Color),
        PanelKind::Brushes => config.brush_sizes.get(index).map(|size| Selection::Size(f64::from(*size))),
    }
}

/// The part of the live tool a panel's indicator shows.
#[must_use]
pub fn tool_selection(kind: PanelKind, tool: &ToolState) -> Selection {
    match kind {
        PanelKind::Palette => Selection::Color(tool.color.clone()),
        PanelKind::Brushes => Selection::Size(tool.size),
    }
}

/// Parse a swatch's `data-index` attribute.
#[must_use]
pub fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse().ok()
}

/// A mounted panel: its options container and current-choice indicator.
pub struct Panel {
    pub kind: PanelKind,
    pub options: HtmlElement,
    pub current: HtmlElement,
}

impl Panel {
    /// Find the panel in the page, fill it with swatches and show `tool`.
    pub fn mount(document: &Document, kind: PanelKind, config: &BoardConfig, tool: &ToolState) -> Result<Self, AppError> {
        let root: HtmlElement = dom::by_id(document, kind.element_id())?;
        let options = dom::first_by_class(&root, OPTIONS_CLASS)?;
        let current = dom::first_by_class(&root, CURRENT_CLASS)?;

        for index in 0..kind.option_count(config) {
            let Some(selection) = selection_at(kind, config, index) else {
                continue;
            };
            let swatch = document
                .create_element("div")?
                .dyn_into::<HtmlElement>()
                .map_err(|_| AppError::WrongElement { id: "div".into(), expected: "HtmlElement" })?;
            swatch.class_list().add_1(OPTION_CLASS)?;
            swatch.set_attribute("data-index", &index.to_string())?;
            apply_style(&swatch, &selection.style())?;
            options.append_child(&swatch)?;
        }

        let panel = Self { kind, options, current };
        panel.sync(tool)?;
        Ok(panel)
    }

    /// Resolve a click target to a choice, if it was one of this panel's swatches.
    pub fn selection_for(&self, target: &HtmlElement, config: &BoardConfig) -> Option<Selection> {
        if !target.class_list().contains(OPTION_CLASS) {
            return None;
        }
        let index = parse_index(target.get_attribute("data-index").as_deref())?;
        selection_at(self.kind, config, index)
    }

    /// Restyle the indicator to show `selection`.
    pub fn show(&self, selection: &Selection) -> Result<(), AppError> {
        apply_style(&self.current, &selection.style())
    }

    /// Restyle the indicator to match the live tool.
    pub fn sync(&self, tool: &ToolState) -> Result<(), AppError> {
        self.show(&tool_selection(self.kind, tool))
    }
}

fn apply_style(element: &HtmlElement, style: &SwatchStyle) -> Result<(), AppError> {
    let css = element.style();
    for (property, value) in style.properties() {
        css.set_property(property, &value)?;
    }
    Ok(())
}
