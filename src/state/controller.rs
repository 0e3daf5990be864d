use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::{DEFAULT_SECTION, SECTION_IDS};
use crate::state::cursor::CursorState;
use crate::state::load::LoadState;
use crate::state::menu::MenuState;
use crate::state::navigation::NavigationCommand;
use crate::state::scroll::{ScrollFlags, ScrollState};
use crate::state::sections::SectionRegistry;

/// Everything the page renders from. One instance per mounted page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageController {
    pub registry: SectionRegistry,
    pub scroll: ScrollState,
    pub cursor: CursorState,
    pub menu: MenuState,
    pub load: LoadState,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    /// Fresh section layout from the DOM.
    Layout(SectionRegistry),
    Scrolled(f64),
    PointerMoved { x: f64, y: f64 },
    PointerEntered,
    PointerLeft,
    ToggleMenu,
    CloseMenu,
    Navigate(String),
    Loaded,
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(SectionRegistry::unmeasured(SECTION_IDS))
    }
}

impl PageController {
    pub fn new(registry: SectionRegistry) -> Self {
        Self {
            registry,
            scroll: ScrollState::new(DEFAULT_SECTION),
            cursor: CursorState::default(),
            menu: MenuState::default(),
            load: LoadState::default(),
        }
    }

    pub fn flags(&self) -> ScrollFlags {
        self.scroll.flags()
    }

    /// Optimistically marks `id` active and closes the menu. The animated scroll
    /// itself is the caller's job; the scroll handler converges on the same section
    /// once it settles.
    pub fn navigate(&mut self, id: &str) -> Option<NavigationCommand> {
        let command = NavigationCommand::resolve(&self.registry, id);
        match &command {
            Some(command) => {
                self.scroll.active_section = command.section_id.clone();
                self.menu.close();
            }
            None => debug!("Ignoring navigation to unknown section '{}'", id),
        }
        command
    }

    /// Resolves `id` against a fresh layout (or the current one) before anything is dispatched.
    /// An unknown id yields `None` and no actions, so the layout is left alone too.
    pub fn plan_navigation(
        &self,
        measured: Option<SectionRegistry>,
        id: &str,
    ) -> Option<(NavigationCommand, Vec<PageAction>)> {
        let registry = measured.as_ref().unwrap_or(&self.registry);
        let command = NavigationCommand::resolve(registry, id)?;
        let mut actions = Vec::with_capacity(2);
        if let Some(measured) = measured {
            if measured != self.registry {
                actions.push(PageAction::Layout(measured));
            }
        }
        actions.push(PageAction::Navigate(command.section_id.clone()));
        Some((command, actions))
    }

    /// Returns whether the state changed.
    pub fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::Layout(registry) => {
                if self.registry == registry {
                    return false;
                }
                self.registry = registry;
                // Re-derive against the new layout without waiting for the next scroll.
                self.scroll.observe(self.scroll.scroll_y, &self.registry);
                true
            }
            PageAction::Scrolled(scroll_y) => self.scroll.observe(scroll_y, &self.registry),
            PageAction::PointerMoved { x, y } => self.cursor.move_to(x, y),
            PageAction::PointerEntered => self.cursor.enter_interactive(),
            PageAction::PointerLeft => self.cursor.leave_interactive(),
            PageAction::ToggleMenu => {
                self.menu.toggle();
                true
            }
            PageAction::CloseMenu => self.menu.close(),
            PageAction::Navigate(id) => {
                let before = (self.scroll.active_section.clone(), self.menu);
                self.navigate(&id);
                before != (self.scroll.active_section.clone(), self.menu)
            }
            PageAction::Loaded => {
                let changed = self.load.mark_loaded();
                if changed {
                    debug!("Page marked as loaded");
                }
                changed
            }
        }
    }
}

impl Reducible for PageController {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
