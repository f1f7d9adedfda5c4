use serde::{Deserialize, Serialize};

/// Scroll offset past which the header switches to its compact style
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Look-ahead applied to the scroll position when picking the active section
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

/// Height of the fixed header, subtracted from scroll targets
pub const HEADER_OFFSET: f64 = 80.0;

/// Page sections in document order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Projects,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Blog,
        Section::Contact,
    ];

    /// Element id of the section anchor
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    top: f64,
    height: f64,
}

/// Measured position of each rendered section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    bounds: Vec<(Section, Bounds)>,
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a section sits. Re-measuring replaces the old bounds.
    pub fn set(&mut self, section: Section, top: f64, height: f64) {
        let bounds = Bounds { top, height };
        match self.bounds.iter_mut().find(|(s, _)| *s == section) {
            Some(entry) => entry.1 = bounds,
            None => self.bounds.push((section, bounds)),
        }
    }

    pub fn with(mut self, section: Section, top: f64, height: f64) -> Self {
        self.set(section, top, height);
        self
    }

    pub fn top(&self, section: Section) -> Option<f64> {
        self.get(section).map(|b| b.top)
    }

    fn get(&self, section: Section) -> Option<&Bounds> {
        self.bounds
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, b)| b)
    }

    /// First section, in document order, whose span contains `position`
    pub fn section_at(&self, position: f64) -> Option<Section> {
        Section::ALL.into_iter().find(|section| {
            self.get(*section)
                .is_some_and(|b| position >= b.top && position < b.top + b.height)
        })
    }
}

/// View state for the single page: theme, header style, active nav link and
/// the mobile menu
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub theme: Theme,
    pub active_section: Section,
    pub is_scrolled: bool,
    pub menu_open: bool,
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Update header style and active section for a new scroll position.
    /// The active section is left unchanged when no section contains the
    /// look-ahead position.
    pub fn on_scroll(&mut self, scroll_y: f64, layout: &SectionLayout) {
        self.is_scrolled = scroll_y > SCROLLED_THRESHOLD;
        if let Some(section) = layout.section_at(scroll_y + ACTIVE_SECTION_OFFSET) {
            self.active_section = section;
        }
    }

    /// Scroll position that brings `section` just below the fixed header
    pub fn scroll_target(section: Section, layout: &SectionLayout) -> Option<f64> {
        layout.top(section).map(|top| top - HEADER_OFFSET)
    }

    /// Follow a nav link: closes the mobile menu and returns where to scroll
    pub fn navigate(&mut self, section: Section, layout: &SectionLayout) -> Option<f64> {
        self.menu_open = false;
        Self::scroll_target(section, layout)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SectionLayout {
        SectionLayout::new()
            .with(Section::Hero, 0.0, 800.0)
            .with(Section::About, 800.0, 600.0)
            .with(Section::Projects, 1400.0, 900.0)
            .with(Section::Blog, 2300.0, 700.0)
            .with(Section::Contact, 3000.0, 800.0)
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut state = PageState::default();
        state.on_scroll(50.0, &layout());
        assert!(!state.is_scrolled);
        state.on_scroll(51.0, &layout());
        assert!(state.is_scrolled);
    }

    #[test]
    fn test_active_section_uses_look_ahead() {
        let mut state = PageState::default();

        state.on_scroll(650.0, &layout());
        assert_eq!(state.active_section, Section::Hero);

        state.on_scroll(700.0, &layout());
        assert_eq!(state.active_section, Section::About);

        state.on_scroll(2950.0, &layout());
        assert_eq!(state.active_section, Section::Contact);
    }

    #[test]
    fn test_active_section_kept_outside_layout() {
        let mut state = PageState::default();
        state.on_scroll(2400.0, &layout());
        assert_eq!(state.active_section, Section::Blog);

        state.on_scroll(10_000.0, &layout());
        assert_eq!(state.active_section, Section::Blog);
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut state = PageState::default();
        state.toggle_menu();
        assert!(state.menu_open);

        let target = state.navigate(Section::Blog, &layout());
        assert_eq!(target, Some(2220.0));
        assert!(!state.menu_open);
    }

    #[test]
    fn test_navigate_to_unmeasured_section() {
        let mut state = PageState::default();
        let layout = SectionLayout::new().with(Section::Hero, 0.0, 500.0);
        assert_eq!(state.navigate(Section::Contact, &layout), None);
    }

    #[test]
    fn test_remeasure_replaces_bounds() {
        let mut layout = layout();
        layout.set(Section::About, 900.0, 500.0);
        assert_eq!(layout.top(Section::About), Some(900.0));
        assert_eq!(layout.section_at(850.0), None);
    }

    #[test]
    fn test_theme_toggle() {
        let mut state = PageState::new(Theme::Light);
        state.toggle_theme();
        assert!(state.theme.is_dark());
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_section_ids() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["hero", "about", "projects", "blog", "contact"]);
        assert_eq!(Section::from_id("blog"), Some(Section::Blog));
        assert_eq!(Section::from_id("footer"), None);
    }
}
