use std::cell::RefCell;
use std::rc::Rc;

use devfolio::state::lifecycle::{Lifetime, OneShot};
use devfolio::state::scroll::ScrollFlags;
use devfolio::state::sections::{Section, SectionRegistry};
use devfolio::{PageAction, PageController};

fn page_layout() -> SectionRegistry {
    SectionRegistry::new(vec![
        Section::new("about", 0, 900.0, 1000.0),
        Section::new("projects", 1, 1900.0, 1200.0),
        Section::new("contact", 2, 3100.0, 800.0),
    ])
}

fn mounted() -> PageController {
    let mut page = PageController::default();
    page.apply(PageAction::Layout(page_layout()));
    page
}

#[test]
fn active_section_depends_only_on_offset_and_layout() {
    for y in [0.0, 799.0, 800.0, 1799.0, 1800.0, 2999.0, 3000.0, 3799.0, 3800.0, 10_000.0] {
        let mut a = mounted();
        let mut b = mounted();
        // b arrives at y through a different history
        b.apply(PageAction::Scrolled(3500.0));
        b.apply(PageAction::Scrolled(y));
        a.apply(PageAction::Scrolled(y));
        if page_layout().active_at(y).is_some() {
            assert_eq!(a.scroll.active_section, b.scroll.active_section, "offset {}", y);
        }
        assert_eq!(a.flags(), b.flags());
    }
}

#[test]
fn scroll_flags_have_strict_boundaries() {
    let mut page = mounted();
    page.apply(PageAction::Scrolled(50.0));
    assert_eq!(
        page.flags(),
        ScrollFlags { header_solid: false, scroll_top_visible: false }
    );
    page.apply(PageAction::Scrolled(51.0));
    assert!(page.flags().header_solid);
    page.apply(PageAction::Scrolled(300.0));
    assert!(!page.flags().scroll_top_visible);
    page.apply(PageAction::Scrolled(301.0));
    assert!(page.flags().scroll_top_visible);
}

#[test]
fn overlapping_sections_resolve_to_the_later_one() {
    let registry = SectionRegistry::new(vec![
        Section::new("about", 0, 100.0, 800.0),
        Section::new("projects", 1, 800.0, 900.0),
    ]);
    let mut page = PageController::new(registry);
    page.apply(PageAction::Scrolled(750.0));
    assert_eq!(page.scroll.active_section, "projects");
}

#[test]
fn double_toggle_closes_menu() {
    let mut page = mounted();
    page.apply(PageAction::ToggleMenu);
    assert!(page.menu.is_open);
    page.apply(PageAction::ToggleMenu);
    assert!(!page.menu.is_open);
}

#[test]
fn navigation_is_optimistic_and_closes_menu() {
    let mut page = mounted();
    page.apply(PageAction::Scrolled(0.0));
    page.apply(PageAction::ToggleMenu);

    let command = page.navigate("projects").expect("projects is registered");
    assert_eq!(command.scroll_top, 1900.0);
    assert_eq!(page.scroll.active_section, "projects");
    assert!(!page.menu.is_open);
    // scroll position has not moved yet
    assert_eq!(page.scroll.scroll_y, 0.0);
}

#[test]
fn navigation_to_unknown_section_changes_nothing() {
    let mut page = mounted();
    page.apply(PageAction::Scrolled(1000.0));
    page.apply(PageAction::ToggleMenu);
    let before = page.clone();

    assert!(page.navigate("nonexistent").is_none());
    assert!(!page.apply(PageAction::Navigate("nonexistent".to_string())));
    assert_eq!(page, before);
}

#[test]
fn unknown_section_with_fresh_layout_changes_nothing() {
    let mut page = mounted();
    page.apply(PageAction::Scrolled(1000.0));
    let before = page.clone();

    // Images finished loading and shifted every section down.
    let shifted = SectionRegistry::new(vec![
        Section::new("about", 0, 1400.0, 1000.0),
        Section::new("projects", 1, 2400.0, 1200.0),
        Section::new("contact", 2, 3600.0, 800.0),
    ]);
    assert!(page.plan_navigation(Some(shifted), "nonexistent").is_none());
    assert_eq!(page, before);
}

#[test]
fn planned_navigation_lands_on_fresh_offset() {
    let mut page = mounted();
    page.apply(PageAction::ToggleMenu);
    let shifted = SectionRegistry::new(vec![
        Section::new("about", 0, 1400.0, 1000.0),
        Section::new("projects", 1, 2400.0, 1200.0),
        Section::new("contact", 2, 3600.0, 800.0),
    ]);

    let (command, actions) = page.plan_navigation(Some(shifted.clone()), "projects").unwrap();
    assert_eq!(command.scroll_top, 2400.0);
    for action in actions {
        page.apply(action);
    }
    assert_eq!(page.registry, shifted);
    assert_eq!(page.scroll.active_section, "projects");
    assert!(!page.menu.is_open);
}

#[test]
fn navigation_converges_with_scroll_tracking() {
    let mut page = mounted();
    page.apply(PageAction::Scrolled(950.0));
    let command = page.navigate("contact").expect("contact is registered");

    // Intermediate samples of the animated scroll may disagree with the optimistic value.
    page.apply(PageAction::Scrolled(1500.0));
    assert_eq!(page.scroll.active_section, "about");
    page.apply(PageAction::Scrolled(2400.0));
    assert_eq!(page.scroll.active_section, "projects");

    page.apply(PageAction::Scrolled(command.scroll_top));
    assert_eq!(page.scroll.active_section, "contact");
}

#[test]
fn pointer_handler_is_inert_after_teardown() {
    let page = Rc::new(RefCell::new(mounted()));
    let lifetime = Lifetime::new();
    let mut on_pointer_move = {
        let page = Rc::clone(&page);
        lifetime.token().guard(move |&(x, y): &(f64, f64)| {
            page.borrow_mut().apply(PageAction::PointerMoved { x, y });
        })
    };

    on_pointer_move(&(10.0, 20.0));
    assert_eq!((page.borrow().cursor.x, page.borrow().cursor.y), (10.0, 20.0));

    lifetime.end();
    let before = page.borrow().clone();
    on_pointer_move(&(300.0, 400.0));
    assert_eq!(*page.borrow(), before);
}

#[test]
fn load_timer_fires_exactly_once() {
    let page = Rc::new(RefCell::new(mounted()));
    let lifetime = Lifetime::new();
    let fired = Rc::new(RefCell::new(0));
    let shot = {
        let page = Rc::clone(&page);
        let fired = Rc::clone(&fired);
        OneShot::new(lifetime.token(), move || {
            *fired.borrow_mut() += 1;
            page.borrow_mut().apply(PageAction::Loaded);
        })
    };

    assert!(!page.borrow().load.is_loaded);
    assert!(shot.fire());
    assert!(!shot.fire());
    assert_eq!(*fired.borrow(), 1);
    assert!(page.borrow().load.is_loaded);
}

#[test]
fn teardown_before_load_timer_prevents_transition() {
    let page = Rc::new(RefCell::new(mounted()));
    let lifetime = Lifetime::new();
    let shot = {
        let page = Rc::clone(&page);
        OneShot::new(lifetime.token(), move || {
            page.borrow_mut().apply(PageAction::Loaded);
        })
    };

    drop(lifetime);
    assert!(!shot.fire());
    assert!(!page.borrow().load.is_loaded);
}

#[test]
fn loaded_is_never_reset() {
    let mut page = mounted();
    assert!(page.apply(PageAction::Loaded));
    page.apply(PageAction::Layout(page_layout()));
    page.apply(PageAction::Scrolled(0.0));
    assert!(!page.apply(PageAction::Loaded));
    assert!(page.load.is_loaded);
}
