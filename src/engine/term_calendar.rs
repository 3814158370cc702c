// ==========================================
// GradPath Planner - Term Calendar
// ==========================================
// Responsibility: term rotation, term label parsing, start-term inference
// Red line: pure functions, no I/O ("today" is always passed in)
// ==========================================

use crate::domain::types::TermName;
use chrono::{Datelike, NaiveDate};

// ==========================================
// TermRotation
// ==========================================

/// Cyclic sequence of seasons one scheduling year walks through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRotation {
    names: Vec<TermName>,
}

impl TermRotation {
    /// Build the rotation.
    ///
    /// # Rules
    /// - `[Spring, Fall]`, or `[Spring, Summer, Fall]` when summer is allowed
    /// - when `start` is part of the rotation, the rotation is rotated
    ///   (not re-ordered) to begin there; otherwise it is left as is
    pub fn new(summer_allowed: bool, start: Option<TermName>) -> Self {
        let mut names = if summer_allowed {
            vec![TermName::Spring, TermName::Summer, TermName::Fall]
        } else {
            vec![TermName::Spring, TermName::Fall]
        };

        if let Some(pos) = start.and_then(|s| names.iter().position(|n| *n == s)) {
            names.rotate_left(pos);
        }

        Self { names }
    }

    pub fn names(&self) -> &[TermName] {
        &self.names
    }
}

// ==========================================
// Term labels
// ==========================================

/// A parsed transcript/target term label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermStamp {
    /// Title-cased season word, e.g. "Fall" or "Winter"
    pub season: String,
    pub year: i32,
    /// Spring 1, Summer 2, Fall 3, Winter 4, anything else 5
    pub rank: u8,
}

impl TermStamp {
    fn sort_key(&self) -> (i32, u8) {
        (self.year, self.rank)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn season_rank(season: &str) -> u8 {
    match season {
        "Spring" => 1,
        "Summer" => 2,
        "Fall" => 3,
        "Winter" => 4,
        _ => 5,
    }
}

/// Parse a label such as "Fall 2024" or "Spring Semester 2025".
///
/// # Returns
/// - `None` for fewer than two tokens or when no 4-digit year token exists
/// - otherwise the first token as season and the last 4-digit token as year
pub fn parse_term_label(label: &str) -> Option<TermStamp> {
    let parts: Vec<&str> = label.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }

    let season = title_case(parts[0]);
    let year = parts
        .iter()
        .rev()
        .find(|p| p.len() == 4 && p.chars().all(|c| c.is_ascii_digit()))
        .and_then(|p| p.parse::<i32>().ok())?;

    Some(TermStamp {
        rank: season_rank(&season),
        season,
        year,
    })
}

/// Infer the first planning term from transcript term labels.
///
/// # Rules
/// - no parseable label -> Fall of `today`'s year
/// - latest label Fall -> Spring of the next year
/// - latest label Spring -> Fall of the same year
/// - anything else (Summer, Winter, ...) -> Fall of the same year
pub fn infer_start_term<S: AsRef<str>>(labels: &[S], today: NaiveDate) -> (TermName, i32) {
    let latest = labels
        .iter()
        .filter_map(|l| parse_term_label(l.as_ref()))
        .max_by_key(TermStamp::sort_key);

    match latest {
        None => (TermName::Fall, today.year()),
        Some(stamp) => match stamp.season.as_str() {
            "Fall" => (TermName::Spring, stamp.year + 1),
            _ => (TermName::Fall, stamp.year),
        },
    }
}

/// Whether a plan starting at (`start`, `start_year`) begins strictly after
/// the target graduation label. Unparseable targets never trigger.
pub fn starts_after(start: TermName, start_year: i32, target_label: &str) -> bool {
    let Some(target) = parse_term_label(target_label) else {
        return false;
    };
    let start_key = (start_year, season_rank(start.as_str()));
    start_key > target.sort_key()
}
