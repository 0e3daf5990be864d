use crate::config::ACTIVE_SECTION_LEAD_PX;

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub display_order: usize,
    pub offset_top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, display_order: usize, offset_top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            display_order,
            offset_top,
            height,
        }
    }

    /// Half-open range `[top - lead, top - lead + height)` in which this section counts as active.
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.offset_top - ACTIVE_SECTION_LEAD_PX;
        let end = start + self.height;
        scroll_y >= start && scroll_y < end
    }
}

/// Ordered set of navigable sections and their last measured layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(mut sections: Vec<Section>) -> Self {
        sections.sort_by_key(|s| s.display_order);
        // Ids are unique; the first registration of an id wins.
        let mut seen: Vec<String> = Vec::with_capacity(sections.len());
        sections.retain(|s| {
            if seen.contains(&s.id) {
                false
            } else {
                seen.push(s.id.clone());
                true
            }
        });
        Self { sections }
    }

    /// Registry with the given ids in order and no layout yet.
    pub fn unmeasured<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            ids.into_iter()
                .enumerate()
                .map(|(order, id)| Section::new(id, order, 0.0, 0.0))
                .collect(),
        )
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn offset_of(&self, id: &str) -> Option<f64> {
        self.get(id).map(|s| s.offset_top)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Last section in display order whose active range contains `scroll_y`.
    pub fn active_at(&self, scroll_y: f64) -> Option<&str> {
        self.sections
            .iter()
            .filter(|s| s.contains(scroll_y))
            .last()
            .map(|s| s.id.as_str())
    }
}
