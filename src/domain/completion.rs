// ==========================================
// GradPath Planner - Completed Course Set
// ==========================================
// Owned by exactly one scheduling run and grown in place as courses are
// accepted. Simulated runs clone their own copy.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedCourses(BTreeSet<String>);

impl CompletedCourses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    /// Returns `true` if the course was not yet recorded.
    pub fn insert(&mut self, code: &str) -> bool {
        self.0.insert(code.to_string())
    }

    /// Every code in `required` has been completed.
    pub fn satisfies_all(&self, required: &BTreeSet<String>) -> bool {
        required.is_subset(&self.0)
    }

    /// At least one code in `codes` has been completed.
    pub fn satisfies_any(&self, codes: &BTreeSet<String>) -> bool {
        !self.0.is_disjoint(codes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for CompletedCourses {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
