use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};
use yew::Callback;

use crate::config::{INTERACTIVE_SELECTOR, LOAD_DELAY_MS, SECTION_IDS};
use crate::dom::layout::{document, measure_sections, scroll_y, window};
use crate::error::DomError;
use crate::state::controller::PageAction;
use crate::state::lifecycle::{Lifetime, OneShot};

/// Every listener and timer the page registers on mount. Dropping it releases all of them.
pub struct PageSubscriptions {
    lifetime: Lifetime,
    listeners: Vec<EventListener>,
    load_timer: Option<Timeout>,
    load_shot: Rc<OneShot>,
}

fn is_interactive(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

impl PageSubscriptions {
    pub fn attach(dispatch: Callback<PageAction>) -> Result<Self, DomError> {
        let window = window()?;
        let document = document()?;
        let lifetime = Lifetime::new();
        let live = lifetime.token();
        let mut listeners = Vec::with_capacity(5);

        listeners.push(EventListener::new(&window, "scroll", {
            let dispatch = dispatch.clone();
            live.guard(move |_: &Event| match scroll_y() {
                Ok(y) => dispatch.emit(PageAction::Scrolled(y)),
                Err(err) => warn!("Scroll sample skipped: {}", err),
            })
        }));

        listeners.push(EventListener::new(&window, "resize", {
            let dispatch = dispatch.clone();
            live.guard(move |_: &Event| match measure_sections(&SECTION_IDS) {
                Ok(registry) => dispatch.emit(PageAction::Layout(registry)),
                Err(err) => warn!("Layout pass skipped: {}", err),
            })
        }));

        listeners.push(EventListener::new(&document, "mousemove", {
            let dispatch = dispatch.clone();
            live.guard(move |event: &Event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    dispatch.emit(PageAction::PointerMoved {
                        x: mouse.client_x() as f64,
                        y: mouse.client_y() as f64,
                    });
                }
            })
        }));

        // One delegated listener covers every link and button, including ones rendered later.
        listeners.push(EventListener::new(&document, "mouseover", {
            let dispatch = dispatch.clone();
            live.guard(move |event: &Event| {
                if is_interactive(event) {
                    dispatch.emit(PageAction::PointerEntered);
                } else {
                    dispatch.emit(PageAction::PointerLeft);
                }
            })
        }));

        // Pointer left the page entirely
        listeners.push(EventListener::new(&document, "mouseout", {
            let dispatch = dispatch.clone();
            live.guard(move |event: &Event| {
                let left_page = event
                    .dyn_ref::<MouseEvent>()
                    .map(|mouse| mouse.related_target().is_none())
                    .unwrap_or(false);
                if left_page {
                    dispatch.emit(PageAction::PointerLeft);
                }
            })
        }));

        match measure_sections(&SECTION_IDS) {
            Ok(registry) => dispatch.emit(PageAction::Layout(registry)),
            Err(err) => warn!("Initial layout pass skipped: {}", err),
        }
        if let Ok(y) = scroll_y() {
            dispatch.emit(PageAction::Scrolled(y));
        }

        let load_shot = OneShot::new(live, {
            let dispatch = dispatch.clone();
            move || dispatch.emit(PageAction::Loaded)
        });
        let load_timer = Timeout::new(LOAD_DELAY_MS, {
            let load_shot = Rc::clone(&load_shot);
            move || {
                load_shot.fire();
            }
        });

        debug!("Attached {} page listeners", listeners.len());
        Ok(Self {
            lifetime,
            listeners,
            load_timer: Some(load_timer),
            load_shot,
        })
    }
}

impl Drop for PageSubscriptions {
    fn drop(&mut self) {
        self.lifetime.end();
        self.load_shot.cancel();
        if let Some(timer) = self.load_timer.take() {
            timer.cancel();
        }
        debug!("Releasing {} page listeners", self.listeners.len());
        self.listeners.clear();
    }
}
