//! Tests for the exercise log module.

use std::convert::Infallible;

use jiff::civil::date;

use super::*;
use crate::{
    error::GymLogError,
    models::ExerciseStatus,
    params::{CompleteExercise, CreateExercise, Id},
};

/// Helper function to create a test log with a pinned creation date
fn create_test_log() -> ExerciseLog {
    ExerciseLogBuilder::new()
        .with_today(date(2025, 1, 15))
        .build()
}

fn exercise_params(name: &str) -> CreateExercise {
    CreateExercise {
        name: name.to_string(),
        description: "test description".to_string(),
        exercise_type: "strength".to_string(),
        planned_series: 3,
        due_date: "20/01/2025".to_string(),
        priority: "Medium".to_string(),
    }
}

fn completion(id: u64, repetitions: u32, weight: f64, observation: &str) -> CompleteExercise {
    CompleteExercise {
        id,
        repetitions,
        weight,
        observation: observation.to_string(),
    }
}

#[test]
fn test_add_assigns_sequential_ids() {
    let mut log = create_test_log();

    let ids: Vec<u64> = ["Squat", "Deadlift", "Row"]
        .iter()
        .map(|name| log.add(&exercise_params(name)).id)
        .collect();

    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(log.len(), 3);
}

#[test]
fn test_add_sets_defaults() {
    let mut log = create_test_log();
    let exercise = log.add(&exercise_params("Squat"));

    assert_eq!(exercise.status, ExerciseStatus::Pending);
    assert_eq!(exercise.creation_date, date(2025, 1, 15));
    assert_eq!(exercise.repetitions, None);
    assert_eq!(exercise.weight, None);
    assert_eq!(exercise.observation, None);
}

#[test]
fn test_ids_not_reused_after_removing_first() {
    let mut log = create_test_log();
    assert_eq!(log.add(&exercise_params("A")).id, 1);
    assert_eq!(log.add(&exercise_params("B")).id, 2);

    log.remove(&Id { id: 1 }).expect("Failed to remove exercise");

    assert_eq!(log.add(&exercise_params("C")).id, 3);
}

#[test]
fn test_ids_not_reused_after_removing_last() {
    let mut log = create_test_log();
    log.add(&exercise_params("A"));
    log.add(&exercise_params("B"));

    log.remove(&Id { id: 2 }).expect("Failed to remove exercise");

    assert_eq!(log.add(&exercise_params("C")).id, 3);
}

#[test]
fn test_list_empty_and_populated() {
    let mut log = create_test_log();
    assert!(log.list().is_empty());

    log.add(&exercise_params("Squat"));
    let added = log.add(&CreateExercise {
        name: "Lunge".to_string(),
        description: "legs, dumbbells".to_string(),
        exercise_type: "strength".to_string(),
        planned_series: 2,
        due_date: "next monday".to_string(),
        priority: "Low".to_string(),
    });

    let list = log.list();
    assert!(!list.is_empty());
    assert_eq!(list.len(), 2);

    let last = list.last().expect("List should not be empty");
    assert_eq!(last, &added);
    assert_eq!(last.name, "Lunge");
    assert_eq!(last.description, "legs, dumbbells");
    assert_eq!(last.planned_series, 2);
    assert_eq!(last.due_date, "next monday");
    assert_eq!(last.priority, "Low");
}

#[test]
fn test_find_by_id() {
    let mut log = create_test_log();
    log.add(&exercise_params("Squat"));
    let row = log.add(&exercise_params("Row"));

    assert_eq!(log.find_by_id(row.id).map(|e| e.name.as_str()), Some("Row"));
    assert!(log.find_by_id(99).is_none());
}

#[test]
fn test_find_by_name_is_case_insensitive() {
    let mut log = create_test_log();
    log.add(&exercise_params("squat"));
    log.add(&exercise_params("Bench Press"));
    log.add(&exercise_params("SQUAT"));

    let matches = log.find_by_name("Squat");
    let ids: Vec<u64> = matches.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);

    assert!(log.find_by_name("Squats").is_empty());
    assert!(log.find_by_name("squat ").is_empty());
}

#[test]
fn test_complete_sets_execution_fields() {
    let mut log = create_test_log();
    let planned = log.add(&exercise_params("Squat"));

    let completed = log
        .complete(&completion(planned.id, 12, 80.0, "go heavier"))
        .expect("Failed to complete exercise");

    assert_eq!(completed.status, ExerciseStatus::Completed);
    assert_eq!(completed.repetitions, Some(12));
    assert_eq!(completed.weight, Some(80.0));
    assert_eq!(completed.observation.as_deref(), Some("go heavier"));

    // Planning fields untouched
    assert_eq!(completed.id, planned.id);
    assert_eq!(completed.name, planned.name);
    assert_eq!(completed.description, planned.description);
    assert_eq!(completed.exercise_type, planned.exercise_type);
    assert_eq!(completed.priority, planned.priority);
    assert_eq!(completed.planned_series, planned.planned_series);
    assert_eq!(completed.due_date, planned.due_date);
    assert_eq!(completed.creation_date, planned.creation_date);

    // Stored, not just returned
    assert_eq!(log.find_by_id(planned.id), Some(&completed));
}

#[test]
fn test_complete_twice_overwrites() {
    let mut log = create_test_log();
    let exercise = log.add(&exercise_params("Squat"));

    log.complete(&completion(exercise.id, 5, 50.0, "first"))
        .expect("Failed to complete exercise");
    let second = log
        .complete(&completion(exercise.id, 8, 55.5, "second"))
        .expect("Failed to complete exercise again");

    assert_eq!(second.status, ExerciseStatus::Completed);
    assert_eq!(second.repetitions, Some(8));
    assert_eq!(second.weight, Some(55.5));
    assert_eq!(second.observation.as_deref(), Some("second"));
}

#[test]
fn test_complete_unknown_id() {
    let mut log = create_test_log();
    let err = log.complete(&completion(42, 1, 1.0, "")).unwrap_err();
    assert_eq!(err, GymLogError::ExerciseNotFound { id: 42 });
}

#[test]
fn test_complete_rejects_negative_weight() {
    let mut log = create_test_log();
    let exercise = log.add(&exercise_params("Squat"));

    let err = log
        .complete(&completion(exercise.id, 10, -5.0, ""))
        .unwrap_err();

    assert!(matches!(err, GymLogError::InvalidInput { .. }));
    let stored = log.find_by_id(exercise.id).expect("Exercise should exist");
    assert_eq!(stored.status, ExerciseStatus::Pending);
}

#[test]
fn test_remove_deletes_only_target() {
    let mut log = create_test_log();
    let a = log.add(&exercise_params("A"));
    let b = log.add(&exercise_params("B"));
    let c = log.add(&exercise_params("C"));

    let removed = log.remove(&Id { id: b.id }).expect("Failed to remove");
    assert_eq!(removed, b);

    assert!(log.find_by_id(b.id).is_none());
    assert_eq!(log.find_by_id(a.id), Some(&a));
    assert_eq!(log.find_by_id(c.id), Some(&c));

    let ids: Vec<u64> = log.list().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
}

#[test]
fn test_remove_unknown_id() {
    let mut log = create_test_log();
    let err = log.remove(&Id { id: 3 }).unwrap_err();
    assert_eq!(err, GymLogError::ExerciseNotFound { id: 3 });
}

#[test]
fn test_select_by_name_outcomes() {
    let mut log = create_test_log();
    log.add(&exercise_params("Squat"));
    log.add(&exercise_params("Row"));
    log.add(&exercise_params("row"));

    assert_eq!(
        log.select_by_name("Plank"),
        NameMatch::NoMatch {
            name: "Plank".to_string()
        }
    );
    assert_eq!(log.select_by_name("SQUAT"), NameMatch::One(1));

    match log.select_by_name("ROW") {
        NameMatch::Many(candidates) => {
            let ids: Vec<u64> = candidates.iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![2, 3]);
        }
        other => panic!("Expected several matches, got {other:?}"),
    }
}

#[test]
fn test_ambiguous_selection_picks_second_candidate() {
    let mut log = create_test_log();
    log.add(&exercise_params("Curl"));
    let second = log.add(&exercise_params("curl"));

    let selection = log
        .select_with("Curl", |candidates| {
            assert_eq!(candidates.len(), 2);
            Ok::<_, Infallible>(candidates[1].id.to_string())
        })
        .unwrap();

    assert_eq!(selection, Selection::Found(second.id));
    assert_eq!(selection.id(), Some(second.id));
}

#[test]
fn test_unique_selection_does_not_ask_for_id() {
    let mut log = create_test_log();
    let only = log.add(&exercise_params("Plank"));

    let selection = log
        .select_with("plank", |_| -> Result<String, Infallible> {
            panic!("Should not ask for an id")
        })
        .unwrap();

    assert_eq!(selection, Selection::Found(only.id));
}

#[test]
fn test_selection_not_found() {
    let log = create_test_log();
    let selection = log
        .select_with("Plank", |_| Ok::<_, Infallible>(String::new()))
        .unwrap();

    assert_eq!(
        selection,
        Selection::NotFound {
            name: "Plank".to_string()
        }
    );
    assert_eq!(selection.id(), None);
}

#[test]
fn test_resolve_candidate_id() {
    let mut log = create_test_log();
    log.add(&exercise_params("Curl"));
    log.add(&exercise_params("Curl"));

    assert_eq!(log.resolve_candidate_id(" 2\n"), Selection::Found(2));
    assert_eq!(log.resolve_candidate_id("7"), Selection::UnknownId { id: 7 });
    assert_eq!(
        log.resolve_candidate_id("two"),
        Selection::InvalidId {
            input: "two".to_string()
        }
    );
}

#[test]
fn test_selection_error_propagates() {
    let mut log = create_test_log();
    log.add(&exercise_params("Curl"));
    log.add(&exercise_params("Curl"));

    let result = log.select_with("Curl", |_| Err("input closed"));
    assert_eq!(result, Err("input closed"));
}

#[test]
fn test_bench_press_lifecycle() {
    let mut log = create_test_log();

    let bench = log.add(&CreateExercise {
        name: "Bench Press".to_string(),
        description: "chest, barbell".to_string(),
        exercise_type: "strength".to_string(),
        planned_series: 4,
        due_date: "01/01/2025".to_string(),
        priority: "High".to_string(),
    });
    assert_eq!(bench.id, 1);
    assert_eq!(bench.status, ExerciseStatus::Pending);

    let done = log
        .complete(&completion(1, 10, 60.5, "felt easy"))
        .expect("Failed to complete exercise");
    assert_eq!(done.status, ExerciseStatus::Completed);
    assert_eq!(done.repetitions, Some(10));
    assert_eq!(done.weight, Some(60.5));

    let list = log.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], done);
    assert_eq!(list[0].observation.as_deref(), Some("felt easy"));

    log.remove(&Id { id: 1 }).expect("Failed to remove exercise");
    assert!(log.list().is_empty());
}
