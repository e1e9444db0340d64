use paint_history::{
    ChangeObserver, DrawingPaths, HistoryConfig, HistoryStore, LoggingObserver, RedoPolicy,
    SurfaceId,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Calls {
    added: usize,
    removed: usize,
    cleared: usize,
    /// (undoable, redoable) sizes seen inside each callback
    seen: Vec<(usize, usize)>,
    sources: Vec<SurfaceId>,
}

// Test double that counts every notification it receives
struct RecordingObserver(Rc<RefCell<Calls>>);

impl<U> ChangeObserver<U> for RecordingObserver {
    fn on_unit_added(&mut self, source: SurfaceId, paths: DrawingPaths<'_, U>) {
        let mut calls = self.0.borrow_mut();
        calls.added += 1;
        calls.seen.push((paths.undoable().len(), paths.redoable().len()));
        calls.sources.push(source);
    }

    fn on_unit_removed(&mut self, source: SurfaceId, paths: DrawingPaths<'_, U>) {
        let mut calls = self.0.borrow_mut();
        calls.removed += 1;
        calls.seen.push((paths.undoable().len(), paths.redoable().len()));
        calls.sources.push(source);
    }

    fn on_history_cleared(&mut self, source: SurfaceId) {
        let mut calls = self.0.borrow_mut();
        calls.cleared += 1;
        calls.sources.push(source);
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper to create a history with a recording observer attached
fn observed_history<U: 'static>(config: HistoryConfig) -> (HistoryStore<U>, Rc<RefCell<Calls>>) {
    init_logging();
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut history = HistoryStore::with_config(SurfaceId::new(), config);
    history.subscribe(Box::new(RecordingObserver(calls.clone())));
    (history, calls)
}

fn sizes<U>(history: &HistoryStore<U>) -> (usize, usize) {
    (history.undo_count(), history.redo_count())
}

#[test]
fn test_undo_returns_false_when_nothing_to_undo() {
    let (mut history, calls) = observed_history::<u32>(HistoryConfig::default());

    assert!(!history.undo());
    assert_eq!(sizes(&history), (0, 0));
    assert_eq!(calls.borrow().removed, 0);
    assert!(calls.borrow().seen.is_empty());
}

#[test]
fn test_redo_returns_false_when_nothing_to_redo() {
    let (mut history, calls) = observed_history::<u32>(HistoryConfig::default());
    history.record_new_unit(7);

    assert!(!history.redo());
    assert_eq!(sizes(&history), (1, 0));
    assert_eq!(calls.borrow().added, 1);
}

#[test]
fn test_undo_and_redo_notify_once_per_change() {
    let (mut history, calls) = observed_history(HistoryConfig::default());

    // Draw three shapes
    history.record_new_unit("a");
    history.record_new_unit("b");
    history.record_new_unit("c");
    assert_eq!(calls.borrow().added, 3);
    assert_eq!(sizes(&history), (3, 0));

    for (expected, removed) in [((2, 1), 1), ((1, 2), 2), ((0, 3), 3)] {
        assert!(history.undo());
        assert_eq!(sizes(&history), expected);
        assert_eq!(calls.borrow().removed, removed);
    }

    for (expected, added) in [((1, 2), 4), ((2, 1), 5), ((3, 0), 6)] {
        assert!(history.redo());
        assert_eq!(sizes(&history), expected);
        assert_eq!(calls.borrow().added, added);
    }

    assert_eq!(history.visible_units(), &["a", "b", "c"]);
    assert_eq!(calls.borrow().removed, 3);
}

#[test]
fn test_observer_sees_post_mutation_state() {
    let (mut history, calls) = observed_history(HistoryConfig::default());

    history.record_new_unit(1);
    history.record_new_unit(2);
    history.undo();
    history.redo();

    assert_eq!(calls.borrow().seen, vec![(1, 0), (2, 0), (1, 1), (2, 0)]);
}

#[test]
fn test_notifications_carry_surface_id() {
    let (mut history, calls) = observed_history(HistoryConfig::default());
    let surface = history.surface();

    history.record_new_unit(1);
    history.undo();

    assert_eq!(calls.borrow().sources, vec![surface, surface]);
}

#[test]
fn test_clear_all_empties_both_sequences_silently() {
    init_logging();
    let calls = Rc::new(RefCell::new(Calls::default()));
    let shared = Rc::new("line");
    // Same unit in several slots simulates arbitrary prior state
    let mut history = HistoryStore::from_parts(
        SurfaceId::new(),
        HistoryConfig::default(),
        vec![shared.clone(), shared.clone()],
        vec![shared.clone()],
    );
    history.subscribe(Box::new(RecordingObserver(calls.clone())));
    assert_eq!(sizes(&history), (2, 1));

    history.clear_all();

    assert_eq!(sizes(&history), (0, 0));
    assert_eq!(Rc::strong_count(&shared), 1);
    let calls = calls.borrow();
    assert_eq!((calls.added, calls.removed, calls.cleared), (0, 0, 0));
}

#[test]
fn test_clear_all_never_calls_observers() {
    for redo_policy in [RedoPolicy::Preserve, RedoPolicy::DiscardOnRecord] {
        let (mut history, calls) = observed_history(HistoryConfig { redo_policy });
        history.record_new_unit(1);
        history.record_new_unit(2);
        history.undo();
        let before = calls.borrow().sources.len();

        history.clear_all();

        assert_eq!(sizes(&history), (0, 0));
        let calls = calls.borrow();
        assert_eq!(calls.sources.len(), before);
        assert_eq!((calls.added, calls.removed, calls.cleared), (2, 1, 0));
    }
}

#[test]
fn test_notify_reset_is_explicit() {
    let (mut history, calls) = observed_history::<u8>(HistoryConfig::default());
    history.clear_all();
    assert_eq!(calls.borrow().cleared, 0);

    history.notify_reset();
    assert_eq!(calls.borrow().cleared, 1);
}

#[test]
fn test_every_observer_notified_once() {
    let (mut history, first) = observed_history::<i32>(HistoryConfig::default());
    let second = Rc::new(RefCell::new(Calls::default()));
    history.subscribe(Box::new(RecordingObserver(second.clone())));
    history.subscribe(Box::new(LoggingObserver::default()));
    assert_eq!(history.observer_count(), 3);

    history.record_new_unit(1);
    history.undo();

    for calls in [&first, &second] {
        assert_eq!(calls.borrow().added, 1);
        assert_eq!(calls.borrow().removed, 1);
    }
}

#[test]
fn test_unsubscribed_observer_stops_receiving() {
    let (mut history, first) = observed_history::<i32>(HistoryConfig::default());
    let second = Rc::new(RefCell::new(Calls::default()));
    let id = history.subscribe(Box::new(RecordingObserver(second.clone())));

    history.record_new_unit(1);
    assert!(history.unsubscribe(id));
    history.record_new_unit(2);

    assert_eq!(first.borrow().added, 2);
    assert_eq!(second.borrow().added, 1);
}

#[test]
fn test_history_without_observers() {
    init_logging();
    let mut history = HistoryStore::new(SurfaceId::new());
    history.record_new_unit(1);
    assert!(history.undo());
    assert!(history.redo());
    assert_eq!(history.visible_units(), &[1]);
}

#[test]
fn test_record_after_undo_keeps_redo_history() {
    let (mut history, calls) = observed_history(HistoryConfig::default());
    history.record_new_unit(1);
    history.record_new_unit(2);
    history.undo();

    history.record_new_unit(3);

    assert_eq!(history.drawing_paths().undoable(), &[1, 3]);
    assert_eq!(history.drawing_paths().redoable(), &[2]);
    assert!(history.redo());
    assert_eq!(history.visible_units(), &[1, 3, 2]);
    assert_eq!(calls.borrow().added, 4);
}

#[test]
fn test_discard_policy_drops_redo_without_notifying() {
    let config = HistoryConfig {
        redo_policy: RedoPolicy::DiscardOnRecord,
    };
    let (mut history, calls) = observed_history(config);
    history.record_new_unit(1);
    history.record_new_unit(2);
    history.undo();
    history.undo();

    history.record_new_unit(3);

    assert_eq!(sizes(&history), (1, 0));
    let calls = calls.borrow();
    assert_eq!((calls.added, calls.removed), (3, 2));
    assert_eq!(calls.seen.last(), Some(&(1, 0)));
}
