use std::rc::Rc;

use crate::config::TrackerConfig;
use crate::navigation::registry::{SectionAnchor, SectionRegistry};

/// What presentational components need to know about the scroll state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollView {
    pub active: Option<String>,
    pub show_back_to_top: bool,
}

/// Derives the active section from the scroll position.
///
/// One state variable (the active identifier) and one transition,
/// [`ScrollTracker::on_scroll`], which depends only on the scroll position and
/// the live section offsets.
#[derive(Debug)]
pub struct ScrollTracker<A> {
    registry: Rc<SectionRegistry<A>>,
    config: TrackerConfig,
    active: Option<String>,
    scroll_y: f64,
}

impl<A: SectionAnchor> ScrollTracker<A> {
    pub fn new(registry: Rc<SectionRegistry<A>>, config: TrackerConfig) -> Self {
        let active = registry.default_identifier().map(str::to_owned);
        Self {
            registry,
            config,
            active,
            scroll_y: 0.0,
        }
    }

    pub fn registry(&self) -> &SectionRegistry<A> {
        &self.registry
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// The section that should be active at `scroll_y`.
    ///
    /// The last section in document order whose offset is at or above
    /// `scroll_y + lookahead` wins. Unresolved sections never qualify.
    pub fn recompute_active(&self, scroll_y: f64) -> Option<&str> {
        let probe = scroll_y + self.config.lookahead;
        let mut candidate = self.registry.default_identifier();

        for (id, offset) in self.registry.resolved_offsets() {
            if let Some(offset) = offset {
                if f64::from(offset) <= probe {
                    candidate = Some(id);
                }
            }
        }

        candidate
    }

    /// Records a scroll event. Returns true when the active section changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scroll_y = scroll_y;
        let next = self.recompute_active(scroll_y).map(str::to_owned);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    pub fn show_back_to_top(&self) -> bool {
        self.scroll_y > self.config.back_to_top_threshold
    }

    /// Where the window should scroll so that `id` sits just below the header.
    /// `None` for unknown or not yet laid out sections.
    pub fn scroll_target(&self, id: &str) -> Option<f64> {
        let handle = self.registry.handle_of(id)?;
        let offset = self.registry.current_offset(handle)?;
        Some(f64::from(offset) - self.config.header_height)
    }

    pub fn view(&self) -> ScrollView {
        ScrollView {
            active: self.active.clone(),
            show_back_to_top: self.show_back_to_top(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::registry::tests::TestAnchor;

    fn abc() -> ScrollTracker<TestAnchor> {
        let mut registry = SectionRegistry::new();
        registry.register("A", "A", TestAnchor::at(0));
        registry.register("B", "B", TestAnchor::at(800));
        registry.register("C", "C", TestAnchor::at(1600));
        ScrollTracker::new(Rc::new(registry), TrackerConfig::default())
    }

    #[test]
    fn starts_on_first_section() {
        let tracker = abc();
        assert_eq!(tracker.active(), Some("A"));
        assert!(!tracker.show_back_to_top());
    }

    #[test]
    fn picks_last_section_scrolled_past() {
        let tracker = abc();
        assert_eq!(tracker.recompute_active(0.0), Some("A"));
        assert_eq!(tracker.recompute_active(699.0), Some("A"));
        assert_eq!(tracker.recompute_active(700.0), Some("B"));
        assert_eq!(tracker.recompute_active(701.0), Some("B"));
        assert_eq!(tracker.recompute_active(750.0), Some("B"));
        assert_eq!(tracker.recompute_active(1600.0), Some("C"));
        assert_eq!(tracker.recompute_active(100_000.0), Some("C"));
    }

    #[test]
    fn recompute_is_deterministic() {
        let mut tracker = abc();
        for y in [0.0, 350.0, 720.0, 1200.0, 1550.0, 9000.0] {
            let expected = tracker.recompute_active(y).map(str::to_owned);
            tracker.on_scroll(y);
            tracker.on_scroll(y);
            assert_eq!(tracker.active().map(str::to_owned), expected);
            assert_eq!(tracker.recompute_active(y).map(str::to_owned), expected);
        }
    }

    #[test]
    fn positions_within_one_band_agree() {
        let tracker = abc();
        let band: Vec<_> = (700..1500).step_by(37).map(|y| tracker.recompute_active(y as f64)).collect();
        assert!(band.iter().all(|active| *active == Some("B")));
    }

    #[test]
    fn on_scroll_reports_changes_only() {
        let mut tracker = abc();
        assert!(!tracker.on_scroll(100.0));
        assert!(tracker.on_scroll(900.0));
        assert!(!tracker.on_scroll(950.0));
        assert_eq!(tracker.active(), Some("B"));
        assert!(tracker.on_scroll(0.0));
        assert_eq!(tracker.active(), Some("A"));
    }

    #[test]
    fn unresolved_sections_never_qualify() {
        let hidden = TestAnchor::unmounted();
        let mut registry = SectionRegistry::new();
        registry.register("hero", "首页", TestAnchor::at(0));
        registry.register("modules", "核心功能", hidden.clone());
        registry.register("pricing", "订阅", TestAnchor::at(2000));
        let tracker = ScrollTracker::new(Rc::new(registry), TrackerConfig::default());

        assert_eq!(tracker.recompute_active(1000.0), Some("hero"));
        hidden.0.set(Some(800));
        assert_eq!(tracker.recompute_active(1000.0), Some("modules"));
    }

    #[test]
    fn all_unresolved_falls_back_to_default() {
        let mut registry = SectionRegistry::new();
        registry.register("hero", "首页", TestAnchor::unmounted());
        registry.register("modules", "核心功能", TestAnchor::unmounted());
        let mut tracker = ScrollTracker::new(Rc::new(registry), TrackerConfig::default());

        for y in [0.0, 500.0, 1e6] {
            assert_eq!(tracker.recompute_active(y), Some("hero"));
            tracker.on_scroll(y);
            assert_eq!(tracker.active(), Some("hero"));
        }
    }

    #[test]
    fn empty_registry_has_no_active_section() {
        let mut tracker: ScrollTracker<TestAnchor> =
            ScrollTracker::new(Rc::new(SectionRegistry::new()), TrackerConfig::default());
        assert_eq!(tracker.active(), None);
        assert!(!tracker.on_scroll(1234.0));
        assert_eq!(tracker.scroll_target("hero"), None);
    }

    #[test]
    fn scroll_target_clears_the_header() {
        let tracker = abc();
        assert_eq!(tracker.scroll_target("B"), Some(720.0));
        assert_eq!(tracker.scroll_target("A"), Some(-80.0));
    }

    #[test]
    fn unknown_target_changes_nothing() {
        let mut tracker = abc();
        tracker.on_scroll(900.0);
        let before = tracker.view();

        assert_eq!(tracker.scroll_target("missing"), None);
        assert_eq!(tracker.view(), before);
        assert_eq!(tracker.scroll_y(), 900.0);
    }

    #[test]
    fn back_to_top_threshold_is_strict() {
        let mut tracker = abc();
        tracker.on_scroll(500.0);
        assert!(!tracker.show_back_to_top());
        tracker.on_scroll(500.5);
        assert!(tracker.show_back_to_top());
        assert!(tracker.view().show_back_to_top);
    }

    #[test]
    fn lookahead_is_configurable() {
        let mut registry = SectionRegistry::new();
        registry.register("A", "A", TestAnchor::at(0));
        registry.register("B", "B", TestAnchor::at(800));
        let config = TrackerConfig {
            lookahead: 0.0,
            ..TrackerConfig::default()
        };
        let tracker = ScrollTracker::new(Rc::new(registry), config);

        assert_eq!(tracker.recompute_active(750.0), Some("A"));
        assert_eq!(tracker.recompute_active(800.0), Some("B"));
    }
}
