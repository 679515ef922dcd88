//! Locale switching, level selection, and the detail toggles

use crate::app::State;
use crate::core::i18n::Locale;

/// Handles switching the display language
pub(crate) fn handle_locale_selected(state: &mut State, locale: Locale) {
    state.page.locale = locale;
}

/// Handles a slider movement. Out-of-range values are silently ignored
/// upstream in the selector; the bounded control cannot produce them.
pub(crate) fn handle_level_changed(state: &mut State, level: u8) {
    state.page.slider.set_level(level);
}

/// Handles toggling the allowed/blocked traffic panel
pub(crate) fn handle_toggle_traffic_detail(state: &mut State) {
    state.page.slider.toggle_traffic_detail();
}

/// Handles clicking a scenario card
pub(crate) fn handle_scenario_selected(state: &mut State, id: &'static str) {
    state.page.errors.select(id);
}

/// Handles toggling the code example panel
pub(crate) fn handle_toggle_solution(state: &mut State) {
    state.page.errors.toggle_solution();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_test_state;
    use crate::core::state::Section;

    #[test]
    fn test_handle_locale_selected() {
        let mut state = create_test_state();
        handle_locale_selected(&mut state, Locale::Ja);
        assert_eq!(state.page.locale, Locale::Ja);
    }

    #[test]
    fn test_level_change_resolves_matching_profile() {
        let mut state = create_test_state();
        state.page.section = Section::Slider;
        handle_level_changed(&mut state, 5);
        let profile = state.current_security_level().expect("level 5 profile");
        assert_eq!(profile.level, 5);
    }

    #[test]
    fn test_out_of_range_level_keeps_prior_state() {
        let mut state = create_test_state();
        handle_level_changed(&mut state, 7);
        assert_eq!(state.page.slider.level(), 3);
    }

    #[test]
    fn test_unknown_scenario_renders_no_detail() {
        let mut state = create_test_state();
        state.page.section = Section::Errors;
        handle_scenario_selected(&mut state, "nonexistent-id");
        assert!(state.current_scenario().is_none());
    }

    #[test]
    fn test_toggles_flip_and_restore() {
        let mut state = create_test_state();
        handle_toggle_solution(&mut state);
        assert!(state.page.errors.solution_visible());
        handle_toggle_solution(&mut state);
        assert!(!state.page.errors.solution_visible());

        handle_toggle_traffic_detail(&mut state);
        assert!(state.page.slider.traffic_detail_visible());
        handle_toggle_traffic_detail(&mut state);
        assert!(!state.page.slider.traffic_detail_visible());
    }
}
