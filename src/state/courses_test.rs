use super::*;

fn course(id: &str) -> Course {
    Course {
        id: id.to_owned(),
        title: format!("Course {id}"),
        description: String::new(),
        is_paid: false,
        price: None,
        created_by: None,
    }
}

#[test]
fn loading_state_shows_loading_view() {
    assert_eq!(CoursesState::loading().view(), CoursesView::Loading);
}

#[test]
fn finish_ok_stores_items() {
    let mut state = CoursesState::loading();
    state.finish(Ok(vec![course("a"), course("b")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.view(), CoursesView::List);
}

#[test]
fn finish_ok_empty_shows_empty_view() {
    let mut state = CoursesState::loading();
    state.finish(Ok(Vec::new()));
    assert_eq!(state.view(), CoursesView::Empty);
}

#[test]
fn finish_err_clears_items_and_records_error() {
    let mut state = CoursesState { items: vec![course("a")], loading: true, error: None };
    state.finish(Err("course list request failed: 500".to_owned()));
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("course list request failed: 500"));
    assert_eq!(state.view(), CoursesView::Failed);
}

#[test]
fn finish_ok_clears_previous_error() {
    let mut state = CoursesState { items: Vec::new(), loading: true, error: Some("x".to_owned()) };
    state.finish(Ok(vec![course("a")]));
    assert_eq!(state.error, None);
}
