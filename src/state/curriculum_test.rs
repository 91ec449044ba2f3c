use super::*;

#[test]
fn default_state_has_nothing_expanded() {
    let state = CurriculumState::default();
    assert_eq!(state.expanded, None);
    assert!(!state.is_expanded(0));
}

#[test]
fn toggle_opens_then_collapses_same_module() {
    let mut state = CurriculumState::default();
    state.toggle(2);
    assert!(state.is_expanded(2));
    state.toggle(2);
    assert_eq!(state.expanded, None);
}

#[test]
fn opening_another_module_closes_the_current_one() {
    let mut state = CurriculumState::opened(0);
    state.toggle(1);
    assert!(!state.is_expanded(0));
    assert!(state.is_expanded(1));
}
