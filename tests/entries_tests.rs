mod common;
use common::{HOUR, at};

use timeflow::core::calculator::duration::entry_duration;
use timeflow::core::entries::EntryLogic;
use timeflow::db::pool::DbPool;
use timeflow::db::queries::{find_open_entry, load_all_entries, load_log};
use timeflow::errors::AppError;

fn pool() -> DbPool {
    DbPool::in_memory().expect("in-memory database")
}

#[test]
fn test_clock_in_then_out_persists_one_closed_entry() {
    let mut pool = pool();

    let started = EntryLogic::clock_in(&mut pool, at(15, 9, 0)).unwrap();
    assert!(started.is_open());
    assert_eq!(find_open_entry(&pool).unwrap().map(|e| e.id), Some(started.id.clone()));

    let closed = EntryLogic::clock_out(&mut pool, at(15, 17, 0)).unwrap();
    assert_eq!(closed.id, started.id);
    assert_eq!(entry_duration(&closed), 8 * HOUR);

    let all = load_all_entries(&pool).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].clock_in, at(15, 9, 0));
    assert_eq!(all[0].clock_out, Some(at(15, 17, 0)));
    assert!(find_open_entry(&pool).unwrap().is_none());
}

#[test]
fn test_second_clock_in_is_rejected() {
    let mut pool = pool();
    EntryLogic::clock_in(&mut pool, at(15, 9, 0)).unwrap();

    let err = EntryLogic::clock_in(&mut pool, at(15, 10, 0)).unwrap_err();
    assert!(matches!(err, AppError::AlreadyClockedIn(_)));
    assert_eq!(load_all_entries(&pool).unwrap().len(), 1);
}

#[test]
fn test_clock_out_without_open_entry_is_rejected() {
    let mut pool = pool();
    let err = EntryLogic::clock_out(&mut pool, at(15, 17, 0)).unwrap_err();
    assert!(matches!(err, AppError::NotClockedIn));
}

#[test]
fn test_clock_out_must_follow_clock_in() {
    let mut pool = pool();
    EntryLogic::clock_in(&mut pool, at(15, 9, 0)).unwrap();

    for bad in [at(15, 8, 0), at(15, 9, 0)] {
        let err = EntryLogic::clock_out(&mut pool, bad).unwrap_err();
        assert!(matches!(err, AppError::ClockOutBeforeClockIn { .. }));
    }
    assert!(find_open_entry(&pool).unwrap().is_some());
}

#[test]
fn test_manual_entry_closed_and_open() {
    let mut pool = pool();

    let closed =
        EntryLogic::save_manual(&mut pool, Some(at(15, 9, 0)), Some(at(15, 12, 0))).unwrap();
    assert!(!closed.is_open());

    let open = EntryLogic::save_manual(&mut pool, Some(at(15, 13, 0)), None).unwrap();
    assert!(open.is_open());

    // clocked in: a clock-out closes the running session
    let finished = EntryLogic::save_manual(&mut pool, None, Some(at(15, 17, 0))).unwrap();
    assert_eq!(finished.id, open.id);
    assert_eq!(finished.clock_out, Some(at(15, 17, 0)));

    assert_eq!(load_all_entries(&pool).unwrap().len(), 2);
}

#[test]
fn test_manual_entry_validation() {
    let mut pool = pool();

    let err = EntryLogic::save_manual(&mut pool, Some(at(15, 12, 0)), Some(at(15, 9, 0)))
        .unwrap_err();
    assert!(matches!(err, AppError::ClockOutBeforeClockIn { .. }));

    let err = EntryLogic::save_manual(&mut pool, None, Some(at(15, 9, 0))).unwrap_err();
    assert!(matches!(err, AppError::NothingToDo(_)));

    EntryLogic::save_manual(&mut pool, Some(at(15, 9, 0)), None).unwrap();
    let err = EntryLogic::save_manual(&mut pool, Some(at(15, 10, 0)), None).unwrap_err();
    assert!(matches!(err, AppError::AlreadyClockedIn(_)));

    assert_eq!(load_all_entries(&pool).unwrap().len(), 1);
}

#[test]
fn test_update_by_short_id() {
    let mut pool = pool();
    let entry =
        EntryLogic::save_manual(&mut pool, Some(at(15, 9, 0)), Some(at(15, 12, 0))).unwrap();

    let updated = EntryLogic::update(&mut pool, entry.short_id(), at(15, 8, 0), at(15, 12, 30))
        .unwrap();
    assert_eq!(updated.id, entry.id);

    let stored = &load_all_entries(&pool).unwrap()[0];
    assert_eq!(stored.clock_in, at(15, 8, 0));
    assert_eq!(stored.clock_out, Some(at(15, 12, 30)));
}

#[test]
fn test_update_rejects_open_entry_and_bad_order() {
    let mut pool = pool();
    let closed =
        EntryLogic::save_manual(&mut pool, Some(at(15, 9, 0)), Some(at(15, 12, 0))).unwrap();
    let open = EntryLogic::clock_in(&mut pool, at(15, 13, 0)).unwrap();

    let err = EntryLogic::update(&mut pool, &open.id, at(15, 13, 0), at(15, 14, 0)).unwrap_err();
    assert!(matches!(err, AppError::OpenEntryNotEditable(_)));

    let err = EntryLogic::update(&mut pool, &closed.id, at(15, 12, 0), at(15, 11, 0)).unwrap_err();
    assert!(matches!(err, AppError::ClockOutBeforeClockIn { .. }));
}

#[test]
fn test_unknown_id_is_reported() {
    let mut pool = pool();
    EntryLogic::save_manual(&mut pool, Some(at(15, 9, 0)), Some(at(15, 12, 0))).unwrap();

    let err = EntryLogic::delete(&mut pool, "not-an-id").unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound(_)));
}

#[test]
fn test_delete_and_reset() {
    let mut pool = pool();
    let a = EntryLogic::save_manual(&mut pool, Some(at(15, 9, 0)), Some(at(15, 12, 0))).unwrap();
    EntryLogic::save_manual(&mut pool, Some(at(16, 9, 0)), Some(at(16, 12, 0))).unwrap();
    EntryLogic::save_manual(&mut pool, Some(at(17, 9, 0)), Some(at(17, 12, 0))).unwrap();

    let deleted = EntryLogic::delete(&mut pool, a.short_id()).unwrap();
    assert_eq!(deleted.id, a.id);
    assert_eq!(load_all_entries(&pool).unwrap().len(), 2);

    assert_eq!(EntryLogic::reset(&mut pool).unwrap(), 2);
    assert!(load_all_entries(&pool).unwrap().is_empty());
}

#[test]
fn test_entries_load_in_insertion_order() {
    let mut pool = pool();
    let later =
        EntryLogic::save_manual(&mut pool, Some(at(16, 9, 0)), Some(at(16, 10, 0))).unwrap();
    let earlier =
        EntryLogic::save_manual(&mut pool, Some(at(15, 9, 0)), Some(at(15, 10, 0))).unwrap();

    let ids: Vec<String> = load_all_entries(&pool)
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, [later.id, earlier.id]);
}

#[test]
fn test_mutations_are_written_to_the_audit_log() {
    let mut pool = pool();
    EntryLogic::clock_in(&mut pool, at(15, 9, 0)).unwrap();
    EntryLogic::clock_out(&mut pool, at(15, 10, 0)).unwrap();
    EntryLogic::reset(&mut pool).unwrap();

    let ops: Vec<String> = load_log(&pool)
        .unwrap()
        .into_iter()
        .map(|(_, _, op, _, _)| op)
        .collect();

    for expected in ["clock_in", "clock_out", "reset"] {
        assert!(ops.iter().any(|op| op == expected), "missing {expected} in {ops:?}");
    }
}
