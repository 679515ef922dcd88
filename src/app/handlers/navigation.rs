//! Section switching and firewall type pagination

use crate::app::State;
use crate::core::state::Section;

/// Handles switching the active section tab
pub(crate) fn handle_section_selected(state: &mut State, section: Section) {
    state.page.section = section;
}

/// Handles cycling forward through the firewall types
pub(crate) fn handle_next_type(state: &mut State) {
    state.page.explainer.next();
}

/// Handles cycling backward through the firewall types
pub(crate) fn handle_previous_type(state: &mut State) {
    state.page.explainer.previous();
}

/// Handles a direct jump from the indicator dots
pub(crate) fn handle_type_selected(state: &mut State, index: usize) {
    state.page.explainer.go_to(index);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_test_state;

    #[test]
    fn test_handle_section_selected() {
        let mut state = create_test_state();
        assert_eq!(state.page.section, Section::Explainer);
        handle_section_selected(&mut state, Section::Errors);
        assert_eq!(state.page.section, Section::Errors);
        handle_section_selected(&mut state, Section::Slider);
        assert_eq!(state.page.section, Section::Slider);
    }

    #[test]
    fn test_pagination_cycle() {
        let mut state = create_test_state();
        let n = state.catalog.firewall_types().len();
        for _ in 0..n {
            handle_next_type(&mut state);
        }
        assert_eq!(state.page.explainer.index(), 0);
        handle_previous_type(&mut state);
        assert_eq!(state.page.explainer.index(), n - 1);
    }

    #[test]
    fn test_dot_jump() {
        let mut state = create_test_state();
        handle_type_selected(&mut state, 2);
        assert_eq!(state.page.explainer.index(), 2);
    }

    #[test]
    fn test_section_switch_preserves_selection() {
        let mut state = create_test_state();
        handle_next_type(&mut state);
        handle_section_selected(&mut state, Section::Errors);
        handle_section_selected(&mut state, Section::Explainer);
        assert_eq!(state.page.explainer.index(), 1);
    }
}
