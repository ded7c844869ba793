use std::cell::{Cell, RefCell};
use std::future::ready;

use futures::executor::block_on;

use super::*;
use crate::state::registry::MemoryRegistry;

fn update(id: &str, completed: bool, available: bool) -> ActivityUpdate {
    ActivityUpdate { id: id.to_owned(), completed, available }
}

/// Character "7" with three boxes: 3 not completed, 5 completed, 9 unavailable.
fn seeded_registry() -> MemoryRegistry {
    let mut registry = MemoryRegistry::new();
    registry.insert("7", "3", ActivityState::NotCompleted);
    registry.insert("7", "5", ActivityState::Completed);
    registry.insert("7", "9", ActivityState::Unavailable);
    registry
}

// =============================================================
// Guard: unavailable and missing boxes
// =============================================================

#[test]
fn unavailable_box_sends_no_request() {
    let mut registry = seeded_registry();
    let sent = Cell::new(false);

    let outcome = block_on(toggle_activity(
        &mut registry,
        |_request| {
            sent.set(true);
            ready(Ok(Vec::new()))
        },
        "7",
        "9",
    ));

    assert_eq!(outcome, ToggleOutcome::Ignored);
    assert!(!sent.get());
    assert_eq!(registry.classify("7", "9"), Some(ActivityState::Unavailable));
}

#[test]
fn missing_box_sends_no_request() {
    let mut registry = seeded_registry();
    let sent = Cell::new(false);

    let outcome = block_on(toggle_activity(
        &mut registry,
        |_request| {
            sent.set(true);
            ready(Ok(Vec::new()))
        },
        "7",
        "404",
    ));

    assert_eq!(outcome, ToggleOutcome::Ignored);
    assert!(!sent.get());
}

// =============================================================
// Flip intent
// =============================================================

#[test]
fn not_completed_box_requests_completion() {
    let mut registry = seeded_registry();
    let sent = RefCell::new(None);

    block_on(toggle_activity(
        &mut registry,
        |request| {
            *sent.borrow_mut() = Some(request);
            ready(Ok(Vec::new()))
        },
        "7",
        "3",
    ));

    assert_eq!(sent.borrow().as_ref(), Some(&ToggleRequest::new("7", "3", true)));
}

#[test]
fn completed_box_requests_uncompletion() {
    let mut registry = seeded_registry();
    let sent = RefCell::new(None);

    block_on(toggle_activity(
        &mut registry,
        |request| {
            *sent.borrow_mut() = Some(request);
            ready(Ok(Vec::new()))
        },
        "7",
        "5",
    ));

    assert_eq!(sent.borrow().as_ref(), Some(&ToggleRequest::new("7", "5", false)));
}

// =============================================================
// Reconciliation
// =============================================================

#[test]
fn renders_every_returned_record_and_only_those() {
    let mut registry = seeded_registry();

    let outcome = block_on(toggle_activity(
        &mut registry,
        |_request| ready(Ok(vec![update("3", true, true), update("9", false, true)])),
        "7",
        "3",
    ));

    assert_eq!(outcome, ToggleOutcome::Synced { rendered: 2 });
    assert_eq!(registry.classify("7", "3"), Some(ActivityState::Completed));
    assert_eq!(registry.classify("7", "9"), Some(ActivityState::NotCompleted));
    // Box 5 was not in the response and keeps its state.
    assert_eq!(registry.classify("7", "5"), Some(ActivityState::Completed));
}

#[test]
fn records_without_a_box_are_skipped_silently() {
    let mut registry = seeded_registry();

    let outcome = block_on(toggle_activity(
        &mut registry,
        |_request| ready(Ok(vec![update("3", true, true), update("404", true, true)])),
        "7",
        "3",
    ));

    assert_eq!(outcome, ToggleOutcome::Synced { rendered: 1 });
    assert_eq!(registry.classify("7", "3"), Some(ActivityState::Completed));
    assert_eq!(registry.classify("7", "404"), None);
}

#[test]
fn empty_response_renders_nothing() {
    let mut registry = seeded_registry();

    let outcome = block_on(toggle_activity(&mut registry, |_request| ready(Ok(Vec::new())), "7", "3"));

    assert_eq!(outcome, ToggleOutcome::Synced { rendered: 0 });
    assert_eq!(registry.classify("7", "3"), Some(ActivityState::NotCompleted));
}

// =============================================================
// Failure isolation
// =============================================================

#[test]
fn transport_failure_leaves_every_box_untouched() {
    let mut registry = seeded_registry();

    let outcome = block_on(toggle_activity(
        &mut registry,
        |_request| ready(Err(UpdateError::Transport("Internal Server Error".to_owned()))),
        "7",
        "3",
    ));

    assert_eq!(outcome, ToggleOutcome::Failed);
    assert_eq!(registry.classify("7", "3"), Some(ActivityState::NotCompleted));
    assert_eq!(registry.classify("7", "5"), Some(ActivityState::Completed));
    assert_eq!(registry.classify("7", "9"), Some(ActivityState::Unavailable));
}

#[test]
fn parse_failure_leaves_every_box_untouched() {
    let mut registry = seeded_registry();

    let outcome = block_on(toggle_activity(
        &mut registry,
        |_request| ready(Err(UpdateError::Parse("expected an array".to_owned()))),
        "7",
        "5",
    ));

    assert_eq!(outcome, ToggleOutcome::Failed);
    assert_eq!(registry.classify("7", "5"), Some(ActivityState::Completed));
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[test]
fn toggling_a_not_completed_box_marks_it_completed() {
    let mut registry = MemoryRegistry::new();
    registry.insert("7", "3", ActivityState::NotCompleted);
    let sent = RefCell::new(None);

    let outcome = block_on(toggle_activity(
        &mut registry,
        |request| {
            *sent.borrow_mut() = Some(request);
            ready(Ok(vec![update("3", true, true)]))
        },
        "7",
        "3",
    ));

    let request = sent.borrow().clone().expect("a request should have been sent");
    assert_eq!(
        request.form_pairs(),
        [
            ("character_id", "7".to_owned()),
            ("activity_id", "3".to_owned()),
            ("completed", "true".to_owned()),
        ]
    );
    assert_eq!(outcome, ToggleOutcome::Synced { rendered: 1 });
    assert_eq!(registry.classify("7", "3"), Some(ActivityState::Completed));
}

#[test]
fn toggling_an_unavailable_box_is_a_no_op() {
    let mut registry = MemoryRegistry::new();
    registry.insert("7", "3", ActivityState::Unavailable);
    let sent = Cell::new(false);

    let outcome = block_on(toggle_activity(
        &mut registry,
        |_request| {
            sent.set(true);
            ready(Ok(Vec::new()))
        },
        "7",
        "3",
    ));

    assert_eq!(outcome, ToggleOutcome::Ignored);
    assert!(!sent.get());
    assert_eq!(registry.classify("7", "3"), Some(ActivityState::Unavailable));
}
