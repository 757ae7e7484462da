//! Mounts the whiteboard: wires page elements and events to the engine.
//!
//! Every handler borrows the shared engine for its own duration only. The
//! browser runs handlers one at a time, so the borrows never overlap. Handler
//! failures are logged and abort that handler; nothing falls back to a
//! default state.

use std::cell::RefCell;
use std::rc::Rc;

use canvas::config::BoardConfig;
use canvas::engine::Engine;
use canvas::input::PointerEvent;
use log::{debug, error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{Event, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, StorageEvent};

use crate::dom;
use crate::error::AppError;
use crate::panel::{Panel, PanelKind, Selection};
use crate::storage::LocalStore;

const CANVAS_ID: &str = "main";
const SAVE_ID: &str = "save";
const CLEAR_ID: &str = "clear";

type Shared<T> = Rc<RefCell<T>>;

/// Build the engine, restore persisted state, and attach all listeners.
pub fn mount() -> Result<(), AppError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let canvas: HtmlCanvasElement = dom::by_id(&document, CANVAS_ID)?;
    let config = BoardConfig::from_lookup(dom::data_attributes(&canvas))?;
    debug!("board config: {config:?}");

    let storage = Rc::new(RefCell::new(LocalStore::open(&window)?));
    let mut engine = Engine::new(canvas.clone(), config.clone())?;
    if let Err(e) = engine.restore(&*storage.borrow()) {
        error!("could not restore saved board: {e}");
    }

    let palette = Rc::new(Panel::mount(&document, PanelKind::Palette, &config, engine.tool())?);
    let brushes = Rc::new(Panel::mount(&document, PanelKind::Brushes, &config, engine.tool())?);
    let engine = Rc::new(RefCell::new(engine));

    for (name, event) in [
        ("mousedown", PointerEvent::Down),
        ("mousemove", PointerEvent::Move),
        ("mouseup", PointerEvent::Up),
        ("mouseleave", PointerEvent::Leave),
    ] {
        listen_pointer(&canvas, name, event, &engine)?;
    }

    for panel in [&palette, &brushes] {
        listen_panel(panel, &engine)?;
    }

    let save: HtmlElement = dom::by_id(&document, SAVE_ID)?;
    {
        let engine = Rc::clone(&engine);
        let storage = Rc::clone(&storage);
        listen(&save, "click", move |_: Event| {
            if let Err(e) = engine.borrow().save(&mut *storage.borrow_mut()) {
                error!("save failed: {e}");
            }
        })?;
    }

    let clear: HtmlElement = dom::by_id(&document, CLEAR_ID)?;
    {
        let engine = Rc::clone(&engine);
        let panels = [Rc::clone(&palette), Rc::clone(&brushes)];
        listen(&clear, "click", move |_: Event| {
            let mut engine = engine.borrow_mut();
            engine.clear_board();
            sync_panels(&panels, &engine);
        })?;
    }

    {
        let engine = Rc::clone(&engine);
        let panels = [Rc::clone(&palette), Rc::clone(&brushes)];
        listen(&window, "storage", move |event: StorageEvent| {
            let key = event.key();
            let mut engine = engine.borrow_mut();
            match engine.on_storage_change(key.as_deref(), event.new_value().as_deref()) {
                Ok(true) => {
                    debug!("merged board from another tab");
                    sync_panels(&panels, &engine);
                }
                Ok(false) => {}
                Err(e) => error!("ignoring storage update for {key:?}: {e}"),
            }
        })?;
    }

    info!("whiteboard mounted ({} colors, {} brushes)", config.palette.len(), config.brush_sizes.len());
    Ok(())
}

/// Point every indicator at the engine's live tool.
fn sync_panels(panels: &[Rc<Panel>], engine: &Engine) {
    for panel in panels {
        if let Err(e) = panel.sync(engine.tool()) {
            error!("could not update {:?} indicator: {e}", panel.kind);
        }
    }
}

fn listen_pointer(
    canvas: &HtmlCanvasElement,
    name: &str,
    event: PointerEvent,
    engine: &Shared<Engine>,
) -> Result<(), AppError> {
    let engine = Rc::clone(engine);
    listen(canvas, name, move |e: MouseEvent| {
        engine
            .borrow_mut()
            .on_pointer(event, f64::from(e.client_x()), f64::from(e.client_y()));
    })
}

fn listen_panel(panel: &Rc<Panel>, engine: &Shared<Engine>) -> Result<(), AppError> {
    let engine = Rc::clone(engine);
    let owner = Rc::clone(panel);
    listen(&panel.options, "click", move |e: Event| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
            return;
        };
        let mut engine = engine.borrow_mut();
        let Some(selection) = owner.selection_for(&target, engine.config()) else {
            return;
        };
        match &selection {
            Selection::Color(color) => engine.set_color(color),
            Selection::Size(size) => engine.set_size(*size),
        }
        if let Err(e) = owner.show(&selection) {
            error!("could not update {:?} indicator: {e}", owner.kind);
        }
    })
}

/// Attach `handler` for `name` events on `target` for the page's lifetime.
fn listen<E, F>(target: &EventTarget, name: &str, handler: F) -> Result<(), AppError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
