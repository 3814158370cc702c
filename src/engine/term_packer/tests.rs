use super::*;
use crate::domain::types::RelationKind;

// ==========================================
// Test helpers
// ==========================================

fn catalog(offerings: Vec<CourseOffering>) -> BTreeMap<String, CourseOffering> {
    offerings.into_iter().map(|o| (o.code.clone(), o)).collect()
}

fn order(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

fn labels(result: &ScheduleResult) -> Vec<&str> {
    result.terms.iter().map(|t| t.term.as_str()).collect()
}

// ==========================================
// Prerequisites and rotation
// ==========================================

#[test]
fn test_prereq_lands_in_earlier_term() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 3),
        CourseOffering::every_term("B", 3),
    ]);
    let relations = PrereqRelations::new().with("B", "A", RelationKind::Required);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(15).starting(TermName::Spring, 2025);

    let result = TermPacker::new().pack(
        &order(&["A", "B"]),
        &offerings,
        &relations,
        &mut completed,
        &constraints,
    );

    assert_eq!(labels(&result), vec!["Spring 2025", "Fall 2025"]);
    assert_eq!(result.terms[0].courses, vec!["A"]);
    assert_eq!(result.terms[1].courses, vec!["B"]);
    assert!(result.bottlenecks.is_empty());
    assert!(result.is_complete());
}

#[test]
fn test_year_advances_after_fall() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 3),
        CourseOffering::every_term("B", 3),
        CourseOffering::every_term("C", 3),
        CourseOffering::every_term("D", 3),
    ]);
    let relations = PrereqRelations::new()
        .with("B", "A", RelationKind::Required)
        .with("C", "B", RelationKind::Required)
        .with("D", "C", RelationKind::Required);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(15)
        .with_summer(true)
        .starting(TermName::Fall, 2025);

    let result = TermPacker::new().pack(
        &order(&["A", "B", "C", "D"]),
        &offerings,
        &relations,
        &mut completed,
        &constraints,
    );

    assert_eq!(
        labels(&result),
        vec!["Fall 2025", "Spring 2026", "Summer 2026", "Fall 2026"]
    );
}

#[test]
fn test_summer_start_rotates_without_reordering() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 3),
        CourseOffering::every_term("B", 3),
        CourseOffering::every_term("C", 3),
    ]);
    let relations = PrereqRelations::new()
        .with("B", "A", RelationKind::Required)
        .with("C", "B", RelationKind::Required);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(15)
        .with_summer(true)
        .starting(TermName::Summer, 2025);

    let result = TermPacker::new().pack(
        &order(&["A", "B", "C"]),
        &offerings,
        &relations,
        &mut completed,
        &constraints,
    );

    assert_eq!(labels(&result), vec!["Summer 2025", "Fall 2025", "Spring 2026"]);
}

#[test]
fn test_season_window_skips_terms() {
    let offerings = catalog(vec![CourseOffering::new("F1", 3, &[TermName::Fall], false)]);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(15).starting(TermName::Spring, 2025);

    let result = TermPacker::new().pack(
        &order(&["F1"]),
        &offerings,
        &PrereqRelations::new(),
        &mut completed,
        &constraints,
    );

    assert_eq!(labels(&result), vec!["Fall 2025"]);
}

#[test]
fn test_completed_courses_are_skipped_and_grown() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 3),
        CourseOffering::every_term("B", 3),
    ]);
    let relations = PrereqRelations::new().with("B", "A", RelationKind::Required);
    let mut completed: CompletedCourses = ["A"].into_iter().collect();
    let constraints = SchedulingConstraints::new(15).starting(TermName::Spring, 2025);

    let result = TermPacker::new().pack(
        &order(&["A", "B"]),
        &offerings,
        &relations,
        &mut completed,
        &constraints,
    );

    assert_eq!(result.terms.len(), 1);
    assert_eq!(result.terms[0].courses, vec!["B"]);
    assert!(completed.contains("B"));
    assert_eq!(completed.len(), 2);
}

// ==========================================
// Credit cap
// ==========================================

#[test]
fn test_credit_cap_splits_terms() {
    let codes = ["C1", "C2", "C3", "C4", "C5", "C6"];
    let offerings = catalog(codes.iter().map(|c| CourseOffering::every_term(c, 3)).collect());
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(9).starting(TermName::Spring, 2025);

    let result = TermPacker::new().pack(
        &order(&codes),
        &offerings,
        &PrereqRelations::new(),
        &mut completed,
        &constraints,
    );

    assert_eq!(result.terms.len(), 2);
    assert_eq!(result.terms[0].courses, vec!["C1", "C2", "C3"]);
    assert_eq!(result.terms[1].courses, vec!["C4", "C5", "C6"]);
    for term in &result.terms {
        assert!(term.credits <= 9);
        let summed: u32 = term.courses.iter().map(|c| offerings[c].credits).sum();
        assert_eq!(summed, term.credits);
    }
}

#[test]
fn test_smaller_course_fills_leftover_capacity() {
    let offerings = catalog(vec![
        CourseOffering::every_term("BIG", 12),
        CourseOffering::every_term("MID", 4),
        CourseOffering::every_term("LAB", 1),
    ]);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(13).starting(TermName::Spring, 2025);

    let result = TermPacker::new().pack(
        &order(&["BIG", "MID", "LAB"]),
        &offerings,
        &PrereqRelations::new(),
        &mut completed,
        &constraints,
    );

    assert_eq!(result.terms[0].courses, vec!["BIG", "LAB"]);
    assert_eq!(result.terms[0].credits, 13);
    assert_eq!(result.terms[1].courses, vec!["MID"]);
}

// ==========================================
// Corequisites
// ==========================================

#[test]
fn test_coreq_pairs_when_partner_comes_first() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 3),
        CourseOffering::every_term("B", 3),
    ]);
    let relations = PrereqRelations::new().with("A", "B", RelationKind::Coreq);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(15).starting(TermName::Spring, 2025);

    let result = TermPacker::new().pack(
        &order(&["B", "A"]),
        &offerings,
        &relations,
        &mut completed,
        &constraints,
    );

    assert_eq!(result.terms.len(), 1);
    assert_eq!(result.terms[0].courses, vec!["B", "A"]);
}

#[test]
fn test_coreq_fails_to_pair_when_partner_comes_later() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 3),
        CourseOffering::every_term("B", 3),
    ]);
    let relations = PrereqRelations::new().with("A", "B", RelationKind::Coreq);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(15).starting(TermName::Spring, 2025);

    let result = TermPacker::with_horizon(1).pack(
        &order(&["A", "B"]),
        &offerings,
        &relations,
        &mut completed,
        &constraints,
    );

    // B is placed first; A never sees it in a later term's selection
    assert_eq!(result.terms[0].courses, vec!["B"]);
    assert_eq!(result.term_of("A"), None);
    assert_eq!(result.unscheduled, vec!["A"]);
}

// ==========================================
// Bottlenecks
// ==========================================

#[test]
fn test_honors_only_course_reported_once() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 3),
        CourseOffering::new("C", 3, &TermName::ALL, true),
    ]);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(15).starting(TermName::Spring, 2025);

    let result = TermPacker::new().pack(
        &order(&["A", "C"]),
        &offerings,
        &PrereqRelations::new(),
        &mut completed,
        &constraints,
    );

    assert_eq!(result.term_of("C"), None);
    assert_eq!(result.bottlenecks, vec!["Honors-only course blocked: C"]);
    assert!(result.unscheduled.is_empty());
    assert!(!completed.contains("C"));
}

#[test]
fn test_horizon_exhaustion_returns_partial_schedule() {
    let offerings = catalog(vec![
        CourseOffering::every_term("OK", 3),
        CourseOffering::every_term("HUGE", 4),
    ]);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(3).starting(TermName::Spring, 2025);

    let result = TermPacker::with_horizon(2).pack(
        &order(&["OK", "HUGE"]),
        &offerings,
        &PrereqRelations::new(),
        &mut completed,
        &constraints,
    );

    assert_eq!(labels(&result), vec!["Spring 2025"]);
    assert_eq!(result.unscheduled, vec!["HUGE"]);
    assert_eq!(result.bottlenecks.len(), 1);
    let message = result.bottlenecks[0].to_lowercase();
    assert!(message.contains("scheduling exceeded horizon"));
    assert!(message.contains("huge"));
}

#[test]
fn test_oversized_horizon_is_clamped_not_wrapped() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 3),
        CourseOffering::every_term("B", 3),
        CourseOffering::every_term("C", 3),
        CourseOffering::every_term("D", 3),
    ]);
    let relations = PrereqRelations::new()
        .with("B", "A", RelationKind::Required)
        .with("C", "B", RelationKind::Required)
        .with("D", "C", RelationKind::Required);
    let constraints = SchedulingConstraints::new(15).starting(TermName::Spring, 2025);

    // above i32::MAX, and close enough to it that a plain add overflows
    for horizon in [3_000_000_000, 2_147_483_000] {
        let mut completed = CompletedCourses::new();
        let result = TermPacker::with_horizon(horizon).pack(
            &order(&["A", "B", "C", "D"]),
            &offerings,
            &relations,
            &mut completed,
            &constraints,
        );

        assert_eq!(
            labels(&result),
            vec!["Spring 2025", "Fall 2025", "Spring 2026", "Fall 2026"]
        );
        assert!(result.is_complete());
        assert!(result.bottlenecks.is_empty());
    }
}

#[test]
fn test_course_without_offering_stays_unscheduled() {
    let offerings = catalog(vec![CourseOffering::every_term("A", 3)]);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(15).starting(TermName::Spring, 2025);

    let result = TermPacker::with_horizon(1).pack(
        &order(&["A", "GHOST"]),
        &offerings,
        &PrereqRelations::new(),
        &mut completed,
        &constraints,
    );

    assert_eq!(result.term_of("A"), Some("Spring 2025"));
    assert_eq!(result.unscheduled, vec!["GHOST"]);
    assert!(!result.is_complete());
}

#[test]
fn test_optional_warning_recorded_once() {
    let offerings = catalog(vec![
        CourseOffering::every_term("X", 15),
        CourseOffering::every_term("ADV", 3),
    ]);
    let relations = PrereqRelations::new().with("ADV", "INTRO", RelationKind::Optional);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(15).starting(TermName::Spring, 2025);

    let result = TermPacker::new().pack(
        &order(&["X", "ADV"]),
        &offerings,
        &relations,
        &mut completed,
        &constraints,
    );

    // ADV is evaluated in two passes but warns only once
    assert_eq!(result.term_of("ADV"), Some("Fall 2025"));
    assert_eq!(
        result.bottlenecks,
        vec!["Optional prereq missing for ADV: INTRO"]
    );
}

// ==========================================
// Single pass and determinism
// ==========================================

#[test]
fn test_single_pass_keeps_queue_order_for_deferred() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 3),
        CourseOffering::new("S1", 3, &[TermName::Spring], false),
        CourseOffering::every_term("B", 3),
        CourseOffering::new("S2", 3, &[TermName::Spring], false),
    ]);
    let mut completed = CompletedCourses::new();
    let constraints = SchedulingConstraints::new(15);

    let pass = TermPacker::new().fill_single_term(
        TermName::Fall,
        &order(&["S2", "A", "S1", "B"]),
        &offerings,
        &PrereqRelations::new(),
        &mut completed,
        &constraints,
    );

    assert_eq!(pass.load.courses, vec!["A", "B"]);
    assert_eq!(pass.load.credits, 6);
    assert_eq!(pass.deferred, vec!["S2", "S1"]);
    assert!(pass.dropped.is_empty());
    assert!(completed.contains("A") && completed.contains("B"));
}

#[test]
fn test_same_pass_acceptance_does_not_satisfy_prereq() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 3),
        CourseOffering::every_term("B", 3),
    ]);
    let relations = PrereqRelations::new().with("B", "A", RelationKind::Required);
    let mut completed = CompletedCourses::new();

    let pass = TermPacker::new().fill_single_term(
        TermName::Spring,
        &order(&["A", "B"]),
        &offerings,
        &relations,
        &mut completed,
        &SchedulingConstraints::new(15),
    );

    assert_eq!(pass.load.courses, vec!["A"]);
    assert_eq!(pass.deferred, vec!["B"]);
    assert!(completed.contains("A"));
}

#[test]
fn test_packing_is_deterministic() {
    let offerings = catalog(vec![
        CourseOffering::every_term("A", 4),
        CourseOffering::every_term("B", 3),
        CourseOffering::new("C", 3, &[TermName::Fall], false),
        CourseOffering::every_term("D", 4),
    ]);
    let relations = PrereqRelations::new()
        .with("B", "A", RelationKind::Required)
        .with("D", "B", RelationKind::Coreq)
        .with("C", "E", RelationKind::Optional);
    let constraints = SchedulingConstraints::new(8).starting(TermName::Spring, 2025);
    let queue = order(&["A", "C", "B", "D"]);
    let packer = TermPacker::new();

    let mut first_completed = CompletedCourses::new();
    let first = packer.pack(&queue, &offerings, &relations, &mut first_completed, &constraints);
    let mut second_completed = CompletedCourses::new();
    let second = packer.pack(&queue, &offerings, &relations, &mut second_completed, &constraints);

    assert_eq!(first, second);
    assert_eq!(first_completed, second_completed);
}

#[test]
fn test_empty_queue_produces_empty_schedule() {
    let mut completed = CompletedCourses::new();
    let result = TermPacker::new().pack(
        &[],
        &BTreeMap::new(),
        &PrereqRelations::new(),
        &mut completed,
        &SchedulingConstraints::new(15),
    );

    assert!(result.terms.is_empty());
    assert!(result.bottlenecks.is_empty());
    assert!(result.is_complete());
}
