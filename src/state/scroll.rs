use crate::config::{HEADER_SOLID_THRESHOLD_PX, PARALLAX_FACTOR, SCROLL_TOP_THRESHOLD_PX};
use crate::state::sections::SectionRegistry;

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub active_section: String,
}

impl ScrollState {
    pub fn new(active_section: impl Into<String>) -> Self {
        Self {
            scroll_y: 0.0,
            active_section: active_section.into(),
        }
    }

    /// Applies one scroll sample. Negative and NaN samples (overscroll bounce) clamp to 0.
    /// Returns whether anything changed.
    pub fn observe(&mut self, scroll_y: f64, registry: &SectionRegistry) -> bool {
        let scroll_y = if scroll_y.is_nan() { 0.0 } else { scroll_y.max(0.0) };
        let mut changed = self.scroll_y != scroll_y;
        self.scroll_y = scroll_y;

        if let Some(active) = registry.active_at(scroll_y) {
            if self.active_section != active {
                self.active_section = active.to_string();
                changed = true;
            }
        }
        changed
    }

    pub fn flags(&self) -> ScrollFlags {
        ScrollFlags::at(self.scroll_y)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollFlags {
    pub header_solid: bool,
    pub scroll_top_visible: bool,
}

impl ScrollFlags {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            header_solid: scroll_y > HEADER_SOLID_THRESHOLD_PX,
            scroll_top_visible: scroll_y > SCROLL_TOP_THRESHOLD_PX,
        }
    }
}

pub fn header_style(flags: ScrollFlags) -> &'static str {
    if flags.header_solid {
        "background-color: rgba(0,0,0,0.8); backdrop-filter: blur(10px);"
    } else {
        "background-color: transparent; backdrop-filter: none;"
    }
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

pub fn hero_style(scroll_y: f64) -> String {
    format!("transform: translateY({}px);", parallax_offset(scroll_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::sections::Section;

    fn overlapping() -> SectionRegistry {
        // about:[0,800) and projects:[700,1600) once the lead is applied
        SectionRegistry::new(vec![
            Section::new("about", 0, 100.0, 800.0),
            Section::new("projects", 1, 800.0, 900.0),
        ])
    }

    #[test]
    fn header_threshold_is_strict() {
        assert!(!ScrollFlags::at(50.0).header_solid);
        assert!(ScrollFlags::at(51.0).header_solid);
    }

    #[test]
    fn scroll_top_threshold_is_strict() {
        assert!(!ScrollFlags::at(300.0).scroll_top_visible);
        assert!(ScrollFlags::at(301.0).scroll_top_visible);
    }

    #[test]
    fn later_section_wins_on_overlap() {
        let mut state = ScrollState::new("about");
        state.observe(750.0, &overlapping());
        assert_eq!(state.active_section, "projects");
    }

    #[test]
    fn no_match_keeps_previous_active_section() {
        let mut state = ScrollState::new("about");
        state.observe(1000.0, &overlapping());
        assert_eq!(state.active_section, "projects");
        state.observe(9000.0, &overlapping());
        assert_eq!(state.active_section, "projects");
        assert_eq!(state.scroll_y, 9000.0);
    }

    #[test]
    fn coalesced_samples_give_same_result() {
        let reg = overlapping();
        let mut stepped = ScrollState::new("about");
        for y in [10.0, 400.0, 750.0, 1200.0] {
            stepped.observe(y, &reg);
        }
        let mut jumped = ScrollState::new("about");
        jumped.observe(1200.0, &reg);
        assert_eq!(stepped, jumped);
    }

    #[test]
    fn repeated_sample_reports_no_change() {
        let reg = overlapping();
        let mut state = ScrollState::new("about");
        assert!(state.observe(120.0, &reg));
        assert!(!state.observe(120.0, &reg));
    }

    #[test]
    fn negative_sample_clamps_to_zero() {
        let mut state = ScrollState::new("about");
        state.observe(-40.0, &overlapping());
        assert_eq!(state.scroll_y, 0.0);
    }

    #[test]
    fn styles_follow_scroll_position() {
        assert_eq!(
            header_style(ScrollFlags::at(0.0)),
            "background-color: transparent; backdrop-filter: none;"
        );
        assert!(header_style(ScrollFlags::at(60.0)).contains("blur(10px)"));
        assert_eq!(hero_style(100.0), "transform: translateY(30px);");
    }
}
