// ==========================================
// GradPath Planner - Course Domain Model
// ==========================================
// CourseRecord: catalog row as the data source hands it over (may be partial)
// CourseOffering: schedulable course with defaults applied
// ==========================================

use crate::domain::types::TermName;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Credit count assumed when the catalog does not know it.
pub const DEFAULT_COURSE_CREDITS: u32 = 3;

// ==========================================
// CourseRecord - raw catalog row
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Credit count; `None` or 0 means unknown
    #[serde(default)]
    pub credits: Option<u32>,

    /// Comma separated seasons, e.g. "Fall,Spring"
    #[serde(default)]
    pub availability: Option<String>,

    #[serde(default)]
    pub honors_only: bool,
}

impl CourseRecord {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            title: None,
            credits: None,
            availability: None,
            honors_only: false,
        }
    }
}

// ==========================================
// CourseOffering - one schedulable course
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOffering {
    pub code: String,
    pub credits: u32,
    pub availability: BTreeSet<TermName>,
    pub honors_only: bool,
}

impl CourseOffering {
    pub fn new(code: &str, credits: u32, availability: &[TermName], honors_only: bool) -> Self {
        Self {
            code: code.to_string(),
            credits,
            availability: availability.iter().copied().collect(),
            honors_only,
        }
    }

    /// Offering available in every season.
    pub fn every_term(code: &str, credits: u32) -> Self {
        Self::new(code, credits, &TermName::ALL, false)
    }

    /// Build an offering from a catalog row, filling gaps leniently.
    ///
    /// # Rules
    /// - credits missing or 0 -> `default_credits`
    /// - availability missing, blank, or without any recognizable season -> all seasons
    /// - unrecognized season tokens are ignored
    pub fn from_record(record: &CourseRecord, default_credits: u32) -> Self {
        let credits = match record.credits {
            Some(c) if c > 0 => c,
            _ => default_credits,
        };

        let mut availability: BTreeSet<TermName> = record
            .availability
            .as_deref()
            .map(|raw| raw.split(',').filter_map(TermName::parse).collect())
            .unwrap_or_default();
        if availability.is_empty() {
            availability = TermName::ALL.iter().copied().collect();
        }

        Self {
            code: record.code.trim().to_string(),
            credits,
            availability,
            honors_only: record.honors_only,
        }
    }

    pub fn is_offered_in(&self, term: TermName) -> bool {
        self.availability.contains(&term)
    }
}

/// Index catalog rows by code. A later duplicate row replaces an earlier one.
pub fn offerings_from_records(
    records: &[CourseRecord],
    default_credits: u32,
) -> BTreeMap<String, CourseOffering> {
    records
        .iter()
        .filter(|r| !r.code.trim().is_empty())
        .map(|r| {
            let offering = CourseOffering::from_record(r, default_credits);
            (offering.code.clone(), offering)
        })
        .collect()
}
