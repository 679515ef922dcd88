//! Presentation state shared by the three views
//!
//! Every view owns a small state machine: the page-level section selector,
//! the Explainer's cyclic paginator, the Slider's discrete level selector,
//! and the error simulator's scenario selector. All operations are total:
//! inputs outside an operation's domain are ignored rather than propagated
//! as errors, so the renderer can never be handed corrupt state.

use crate::core::catalog::{CatalogEntry, ContentCatalog, MAX_LEVEL, MIN_LEVEL};
use crate::core::i18n::Locale;

/// Page-level view identifier
///
/// Any section is reachable from any other in one step; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum Section {
    #[default]
    #[strum(serialize = "explainer")]
    Explainer,
    #[strum(serialize = "slider")]
    Slider,
    #[strum(serialize = "errors")]
    Errors,
}

/// Cyclic index over an ordered sequence of N entries
///
/// The index is always in `[0, N)` and wraps in both directions - a true
/// modular cycle, not a clamp. N is the runtime catalog length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    index: usize,
    len: usize,
}

impl Paginator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to an index. Out-of-range input is a programming error (the
    /// indicator controls can only produce in-bounds indices) and is
    /// ignored in release builds.
    pub fn go_to(&mut self, index: usize) {
        debug_assert!(index < self.len, "paginator index {index} out of range");
        if index < self.len {
            self.index = index;
        }
    }
}

/// Discrete security level plus the traffic-detail toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSelector {
    level: u8,
    traffic_detail_visible: bool,
}

impl Default for LevelSelector {
    fn default() -> Self {
        Self {
            level: 3,
            traffic_detail_visible: false,
        }
    }
}

impl LevelSelector {
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn traffic_detail_visible(&self) -> bool {
        self.traffic_detail_visible
    }

    /// Accepts a level in `[MIN_LEVEL, MAX_LEVEL]`; anything else is a
    /// no-op. The bounded slider control cannot produce out-of-range
    /// values, but the invariant must hold even if one arrives.
    pub fn set_level(&mut self, level: u8) {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            self.level = level;
        }
    }

    /// Flips the traffic panel; never touches the level.
    pub fn toggle_traffic_detail(&mut self) {
        self.traffic_detail_visible = !self.traffic_detail_visible;
    }
}

/// Selected error scenario plus the solution toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSelector {
    selected_id: String,
    solution_visible: bool,
}

impl ScenarioSelector {
    pub fn new(initial_id: &str) -> Self {
        Self {
            selected_id: initial_id.to_string(),
            solution_visible: false,
        }
    }

    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    pub fn solution_visible(&self) -> bool {
        self.solution_visible
    }

    /// Sets the selection unconditionally. An id not present in the
    /// catalog resolves to `None` at lookup time and the detail panel is
    /// omitted - the fail-safe for invalid selectors.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = id.into();
    }

    pub fn toggle_solution(&mut self) {
        self.solution_visible = !self.solution_visible;
    }
}

/// The full per-page selection state
///
/// One instance per page session, created with fixed defaults, mutated
/// only by direct user action, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub locale: Locale,
    pub section: Section,
    pub explainer: Paginator,
    pub slider: LevelSelector,
    pub errors: ScenarioSelector,
}

impl PageState {
    /// Fresh state sized against the catalog: paginator length from the
    /// firewall type count, scenario selection from the catalog default.
    pub fn new(catalog: &ContentCatalog) -> Self {
        Self {
            locale: Locale::default(),
            section: Section::default(),
            explainer: Paginator::new(catalog.firewall_types().len()),
            slider: LevelSelector::default(),
            errors: ScenarioSelector::new(catalog.default_scenario_id()),
        }
    }

    /// The entry the active section currently points at, or `None` when
    /// the selection resolves to nothing (unknown scenario id, level with
    /// no profile). This is the whole core-to-renderer contract: the
    /// renderer displays the entry or omits the detail panel.
    pub fn resolved_entry<'a>(&self, catalog: &'a ContentCatalog) -> Option<CatalogEntry<'a>> {
        match self.section {
            Section::Explainer => catalog
                .firewall_type(self.explainer.index())
                .map(CatalogEntry::FirewallType),
            Section::Slider => catalog
                .security_level(self.slider.level())
                .map(CatalogEntry::SecurityLevel),
            Section::Errors => catalog
                .error_scenario(self.errors.selected_id())
                .map(CatalogEntry::ErrorScenario),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Severity;
    use crate::core::content;
    use proptest::prelude::*;

    #[test]
    fn test_paginator_wraps_forward() {
        let mut p = Paginator::new(4);
        assert_eq!(p.index(), 0);
        p.next();
        p.next();
        p.next();
        assert_eq!(p.index(), 3);
        p.next();
        assert_eq!(p.index(), 0);
    }

    #[test]
    fn test_paginator_wraps_backward() {
        let mut p = Paginator::new(4);
        p.previous();
        assert_eq!(p.index(), 3);
    }

    #[test]
    fn test_paginator_empty_is_inert() {
        let mut p = Paginator::new(0);
        p.next();
        p.previous();
        assert_eq!(p.index(), 0);
    }

    #[test]
    fn test_level_selector_rejects_out_of_range() {
        let mut s = LevelSelector::default();
        assert_eq!(s.level(), 3);
        s.set_level(7);
        assert_eq!(s.level(), 3);
        s.set_level(0);
        assert_eq!(s.level(), 3);
        s.set_level(5);
        assert_eq!(s.level(), 5);
    }

    #[test]
    fn test_traffic_toggle_leaves_level_alone() {
        let mut s = LevelSelector::default();
        s.toggle_traffic_detail();
        assert!(s.traffic_detail_visible());
        assert_eq!(s.level(), 3);
        s.toggle_traffic_detail();
        assert!(!s.traffic_detail_visible());
    }

    #[test]
    fn test_scenario_selection_and_solution_toggle() {
        let catalog = content::builtin();
        let mut state = PageState::new(&catalog);
        state.section = Section::Errors;

        state.errors.select("default-deny");
        assert!(!state.errors.solution_visible());
        state.errors.toggle_solution();
        assert!(state.errors.solution_visible());

        match state.resolved_entry(&catalog) {
            Some(CatalogEntry::ErrorScenario(es)) => {
                assert_eq!(es.severity, Severity::Critical);
            }
            other => panic!("expected error scenario, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_scenario_resolves_to_none() {
        let catalog = content::builtin();
        let mut state = PageState::new(&catalog);
        state.section = Section::Errors;
        state.errors.select("nonexistent-id");
        assert!(state.resolved_entry(&catalog).is_none());
    }

    #[test]
    fn test_level_lookup_matches_declared_level() {
        let catalog = content::builtin();
        let mut state = PageState::new(&catalog);
        state.section = Section::Slider;
        for level in 1..=5u8 {
            state.slider.set_level(level);
            match state.resolved_entry(&catalog) {
                Some(CatalogEntry::SecurityLevel(sl)) => assert_eq!(sl.level, level),
                other => panic!("expected security level, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_fresh_state_defaults() {
        let catalog = content::builtin();
        let state = PageState::new(&catalog);
        assert_eq!(state.section, Section::Explainer);
        assert_eq!(state.locale, Locale::En);
        assert_eq!(state.explainer.index(), 0);
        assert_eq!(state.explainer.len(), 4);
        assert_eq!(state.slider.level(), 3);
        assert_eq!(state.errors.selected_id(), "misconfigured-rules");
    }

    proptest! {
        #[test]
        fn prop_next_n_times_is_identity(len in 1usize..32, start in 0usize..32) {
            let mut p = Paginator::new(len);
            p.go_to(start % len);
            let origin = p.index();
            for _ in 0..len {
                p.next();
            }
            prop_assert_eq!(p.index(), origin);
        }

        #[test]
        fn prop_previous_inverts_next(len in 1usize..32, start in 0usize..32) {
            let mut p = Paginator::new(len);
            p.go_to(start % len);
            let origin = p.index();
            p.next();
            p.previous();
            prop_assert_eq!(p.index(), origin);
        }

        #[test]
        fn prop_index_stays_in_bounds(len in 1usize..32, steps in proptest::collection::vec(0u8..3, 0..64)) {
            let mut p = Paginator::new(len);
            for step in steps {
                match step {
                    0 => p.next(),
                    1 => p.previous(),
                    _ => p.go_to(p.len() - 1),
                }
                prop_assert!(p.index() < len);
            }
        }

        #[test]
        fn prop_set_level_preserves_invariant(initial in 1u8..=5, input in 0u8..=255) {
            let mut s = LevelSelector::default();
            s.set_level(initial);
            s.set_level(input);
            if (1..=5).contains(&input) {
                prop_assert_eq!(s.level(), input);
            } else {
                prop_assert_eq!(s.level(), initial);
            }
        }

        #[test]
        fn prop_toggles_are_involutions(times in 0usize..8) {
            let mut s = LevelSelector::default();
            let before = s.traffic_detail_visible();
            for _ in 0..times * 2 {
                s.toggle_traffic_detail();
            }
            prop_assert_eq!(s.traffic_detail_visible(), before);
        }
    }
}
