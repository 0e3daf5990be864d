//! Teardown guards for handlers that can outlive the view they were registered for.
//!
//! A [`Lifetime`] is held by the mounted page. Every handler captures a [`Liveness`]
//! token and checks it before touching state, so a callback that fires after
//! [`Lifetime::end`] (a coalesced event still in the queue, a timer racing the
//! cleanup) does nothing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug)]
pub struct Lifetime {
    alive: Rc<Cell<bool>>,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn token(&self) -> Liveness {
        Liveness {
            alive: Rc::clone(&self.alive),
        }
    }

    pub fn end(&self) {
        self.alive.set(false);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for Lifetime {
    fn drop(&mut self) {
        self.end();
    }
}

#[derive(Clone, Debug)]
pub struct Liveness {
    alive: Rc<Cell<bool>>,
}

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Wraps `handler` so it only runs while the owning [`Lifetime`] is alive.
    pub fn guard<E: ?Sized>(&self, mut handler: impl FnMut(&E)) -> impl FnMut(&E) {
        let token = self.clone();
        move |event: &E| {
            if token.is_alive() {
                handler(event);
            }
        }
    }
}

/// An action that runs at most once. Cancelling, or firing after the owning
/// lifetime has ended, discards it.
pub struct OneShot {
    action: RefCell<Option<Box<dyn FnOnce()>>>,
    liveness: Liveness,
}

impl OneShot {
    pub fn new(liveness: Liveness, action: impl FnOnce() + 'static) -> Rc<Self> {
        Rc::new(Self {
            action: RefCell::new(Some(Box::new(action))),
            liveness,
        })
    }

    /// Returns whether the action ran.
    pub fn fire(&self) -> bool {
        let action = self.action.borrow_mut().take();
        match action {
            Some(action) if self.liveness.is_alive() => {
                action();
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&self) {
        self.action.borrow_mut().take();
    }

    pub fn is_pending(&self) -> bool {
        self.action.borrow().is_some()
    }
}
