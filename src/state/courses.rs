//! Admin course-list state.
//!
//! DESIGN
//! ======
//! The page owns one signal of this type; the fetch task writes the outcome
//! through [`CoursesState::finish`] so loading/error/items stay consistent.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::types::Course;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoursesState {
    pub items: Vec<Course>,
    pub loading: bool,
    pub error: Option<String>,
}

/// What the list view should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoursesView {
    Loading,
    Failed,
    Empty,
    List,
}

impl CoursesState {
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn finish(&mut self, result: Result<Vec<Course>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e);
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> CoursesView {
        if self.loading {
            CoursesView::Loading
        } else if self.error.is_some() {
            CoursesView::Failed
        } else if self.items.is_empty() {
            CoursesView::Empty
        } else {
            CoursesView::List
        }
    }
}
