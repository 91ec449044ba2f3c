//! Expansion state for the curriculum accordion.
//!
//! At most one module is open at a time. Opening another module closes the
//! current one; toggling the open module collapses it.

#[cfg(test)]
#[path = "curriculum_test.rs"]
mod curriculum_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurriculumState {
    pub expanded: Option<usize>,
}

impl CurriculumState {
    /// Start with `index` open.
    #[must_use]
    pub fn opened(index: usize) -> Self {
        Self { expanded: Some(index) }
    }

    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) { None } else { Some(index) };
    }

    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}
