use crate::state::sections::SectionRegistry;

/// A resolved request to bring a section into view.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationCommand {
    pub section_id: String,
    pub scroll_top: f64,
}

impl NavigationCommand {
    /// `None` when `id` is not registered; navigation to it is silently ignored.
    pub fn resolve(registry: &SectionRegistry, id: &str) -> Option<Self> {
        registry.get(id).map(|section| Self {
            section_id: section.id.clone(),
            scroll_top: section.offset_top,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::sections::Section;

    #[test]
    fn resolves_to_recorded_offset() {
        let registry = SectionRegistry::new(vec![
            Section::new("about", 0, 640.0, 900.0),
            Section::new("projects", 1, 1540.0, 1100.0),
        ]);
        let command = NavigationCommand::resolve(&registry, "projects");
        assert_eq!(
            command,
            Some(NavigationCommand {
                section_id: "projects".to_string(),
                scroll_top: 1540.0,
            })
        );
    }

    #[test]
    fn unknown_section_resolves_to_nothing() {
        let registry = SectionRegistry::unmeasured(["about"]);
        assert_eq!(NavigationCommand::resolve(&registry, "nonexistent"), None);
    }
}
