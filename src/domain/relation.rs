// ==========================================
// GradPath Planner - Prerequisite Relations
// ==========================================
// Three independently keyed maps (required / coreq / optional).
// A pair may appear under several kinds; every kind applies.
// Overlaps are surfaced via `overlapping_pairs`, never resolved silently.
// ==========================================

use crate::domain::types::RelationKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

pub type RelationMap = BTreeMap<String, BTreeSet<String>>;

static EMPTY: BTreeSet<String> = BTreeSet::new();

fn default_relation() -> String {
    RelationKind::Required.to_string()
}

// ==========================================
// PrereqRelation - one relation row
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrereqRelation {
    pub course_code: String,
    pub prereq_code: String,
    /// "required" / "coreq" / "optional"
    #[serde(default = "default_relation")]
    pub relation: String,
}

impl PrereqRelation {
    pub fn new(course_code: &str, prereq_code: &str, kind: RelationKind) -> Self {
        Self {
            course_code: course_code.to_string(),
            prereq_code: prereq_code.to_string(),
            relation: kind.to_string(),
        }
    }

    pub fn kind(&self) -> Option<RelationKind> {
        RelationKind::parse(&self.relation)
    }
}

// ==========================================
// PrereqRelations - the three relation maps
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrereqRelations {
    pub required: RelationMap,
    pub corequisites: RelationMap,
    pub optional: RelationMap,
}

impl PrereqRelations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the maps from relation rows.
    ///
    /// # Parameters
    /// - `rows`: relation rows; rows with an unknown kind are skipped with a warning
    /// - `catalog_codes`: every catalog code gets a (possibly empty) required entry,
    ///   so that it becomes a graph node even without prerequisites
    pub fn from_rows<'a, I>(rows: &[PrereqRelation], catalog_codes: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut relations = Self::new();
        for code in catalog_codes {
            relations.required.entry(code.clone()).or_default();
        }

        for row in rows {
            match row.kind() {
                Some(kind) => relations.add(&row.course_code, &row.prereq_code, kind),
                None => warn!(
                    course = %row.course_code,
                    prereq = %row.prereq_code,
                    relation = %row.relation,
                    "skipping relation row with unknown kind"
                ),
            }
        }
        relations
    }

    pub fn add(&mut self, course: &str, other: &str, kind: RelationKind) {
        let map = match kind {
            RelationKind::Required => &mut self.required,
            RelationKind::Coreq => &mut self.corequisites,
            RelationKind::Optional => &mut self.optional,
        };
        map.entry(course.to_string())
            .or_default()
            .insert(other.to_string());
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with(mut self, course: &str, other: &str, kind: RelationKind) -> Self {
        self.add(course, other, kind);
        self
    }

    pub fn required_for(&self, course: &str) -> &BTreeSet<String> {
        self.required.get(course).unwrap_or(&EMPTY)
    }

    pub fn corequisites_for(&self, course: &str) -> &BTreeSet<String> {
        self.corequisites.get(course).unwrap_or(&EMPTY)
    }

    pub fn optional_for(&self, course: &str) -> &BTreeSet<String> {
        self.optional.get(course).unwrap_or(&EMPTY)
    }

    /// Pairs (course, other) listed under more than one kind, with those kinds.
    pub fn overlapping_pairs(&self) -> Vec<(String, String, Vec<RelationKind>)> {
        let mut kinds_by_pair: BTreeMap<(&str, &str), Vec<RelationKind>> = BTreeMap::new();
        let maps = [
            (RelationKind::Required, &self.required),
            (RelationKind::Coreq, &self.corequisites),
            (RelationKind::Optional, &self.optional),
        ];
        for (kind, map) in maps {
            for (course, others) in map {
                for other in others {
                    kinds_by_pair
                        .entry((course.as_str(), other.as_str()))
                        .or_default()
                        .push(kind);
                }
            }
        }

        kinds_by_pair
            .into_iter()
            .filter(|(_, kinds)| kinds.len() > 1)
            .map(|((course, other), kinds)| (course.to_string(), other.to_string(), kinds))
            .collect()
    }
}
