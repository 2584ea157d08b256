//! Behavioural tests for `MemoryStore`.

use std::{
  collections::BTreeSet,
  sync::{Arc, Barrier},
  thread,
};

use jot_core::{Error, NewNote, NoteId, NoteStore, NoteUpdate};

use crate::MemoryStore;

fn id(n: u64) -> NoteId { n.to_string().parse().unwrap() }

fn update(title: Option<&str>, content: Option<&str>) -> NoteUpdate {
  NoteUpdate {
    title:   title.map(Into::into),
    content: content.map(Into::into),
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[test]
fn create_assigns_increasing_ids_from_one() {
  let s = MemoryStore::new();
  let a = s.create(NewNote::new("A", "B")).unwrap();
  let b = s.create(NewNote::new("C", "D")).unwrap();

  assert_eq!(a.id, NoteId::FIRST);
  assert_eq!(b.id, id(2));
  assert_eq!(a.created_at, a.updated_at);
  assert_eq!((b.title.as_str(), b.content.as_str()), ("C", "D"));
}

#[test]
fn rejected_create_burns_no_id() {
  let s = MemoryStore::new();
  s.create(NewNote::new("A", "B")).unwrap();

  for bad in [
    NewNote::default(),
    NewNote { title: Some("T".into()), content: None },
    NewNote::new("", "B"),
    NewNote::new("A", "   "),
  ] {
    assert!(matches!(s.create(bad), Err(Error::Validation(_))));
  }
  assert_eq!(s.len().unwrap(), 1);

  let next = s.create(NewNote::new("E", "F")).unwrap();
  assert_eq!(next.id, id(2));
}

#[test]
fn get_after_create_returns_equal_note() {
  let s = MemoryStore::new();
  let created = s.create(NewNote::new("A", "B")).unwrap();
  assert_eq!(s.get(created.id).unwrap(), created);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[test]
fn list_empty_store() {
  let s = MemoryStore::new();
  assert!(s.list().unwrap().is_empty());
  assert!(s.is_empty().unwrap());
}

#[test]
fn list_tracks_creates_minus_deletes_in_insertion_order() {
  let s = MemoryStore::new();
  for i in 0..5 {
    s.create(NewNote::new(format!("t{i}"), "c")).unwrap();
  }
  s.delete(id(2)).unwrap();
  s.delete(id(4)).unwrap();

  let ids: Vec<u64> = s.list().unwrap().iter().map(|n| n.id.get()).collect();
  assert_eq!(ids, vec![1, 3, 5]);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[test]
fn update_single_field_leaves_the_rest() {
  let s = MemoryStore::new();
  let before = s.create(NewNote::new("A", "B")).unwrap();

  let after = s.update(before.id, update(None, Some("E"))).unwrap();
  assert_eq!(after.id, before.id);
  assert_eq!(after.title, "A");
  assert_eq!(after.content, "E");
  assert_eq!(after.created_at, before.created_at);
  assert!(after.updated_at >= before.updated_at);
  assert_eq!(s.get(before.id).unwrap(), after);
}

#[test]
fn update_with_empty_fields_keeps_prior_values() {
  let s = MemoryStore::new();
  let before = s.create(NewNote::new("A", "B")).unwrap();

  let after = s.update(before.id, update(Some(""), Some(""))).unwrap();
  assert_eq!((after.title.as_str(), after.content.as_str()), ("A", "B"));
  assert!(after.updated_at >= before.updated_at);
}

#[test]
fn update_missing_note_is_not_found() {
  let s = MemoryStore::new();
  let err = s.update(id(9), update(Some("x"), None)).unwrap_err();
  assert!(matches!(err, Error::NotFound(ref raw) if raw == "9"));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[test]
fn deleted_note_is_gone_and_id_not_reused() {
  let s = MemoryStore::new();
  s.create(NewNote::new("A", "B")).unwrap();
  let two = s.create(NewNote::new("C", "D")).unwrap();

  let removed = s.delete(two.id).unwrap();
  assert_eq!(removed, two);

  assert!(matches!(s.get(two.id), Err(Error::NotFound(_))));
  assert!(matches!(s.update(two.id, NoteUpdate::default()), Err(Error::NotFound(_))));
  assert!(matches!(s.delete(two.id), Err(Error::NotFound(_))));

  let three = s.create(NewNote::new("F", "G")).unwrap();
  assert_eq!(three.id, id(3));
}

#[test]
fn deleting_the_newest_note_does_not_rewind_the_counter() {
  let s = MemoryStore::new();
  let one = s.create(NewNote::new("A", "B")).unwrap();
  s.delete(one.id).unwrap();
  assert_eq!(s.create(NewNote::new("A", "B")).unwrap().id, id(2));
}

// ─── Walkthrough ─────────────────────────────────────────────────────────────

#[test]
fn crud_walkthrough() {
  let s = MemoryStore::new();
  let n1 = s.create(NewNote::new("A", "B")).unwrap();
  let n2 = s.create(NewNote::new("C", "D")).unwrap();
  assert_eq!((n1.id.get(), n2.id.get()), (1, 2));
  assert_eq!(s.list().unwrap(), vec![n1.clone(), n2.clone()]);

  let u = s.update(n1.id, update(Some(""), Some("E"))).unwrap();
  assert_eq!((u.id, u.title.as_str(), u.content.as_str()), (n1.id, "A", "E"));

  assert_eq!(s.delete(n2.id).unwrap(), n2);
  assert!(matches!(s.get(n2.id), Err(Error::NotFound(_))));

  let n3 = s.create(NewNote::new("F", "G")).unwrap();
  assert_eq!(n3.id.get(), 3);
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[test]
fn concurrent_creates_get_distinct_ids() {
  let s = Arc::new(MemoryStore::new());
  let handles: Vec<_> = (0..8)
    .map(|t| {
      let s = Arc::clone(&s);
      thread::spawn(move || {
        (0..50)
          .map(|i| s.create(NewNote::new(format!("{t}-{i}"), "x")).unwrap().id.get())
          .collect::<Vec<_>>()
      })
    })
    .collect();

  let ids: BTreeSet<u64> = handles
    .into_iter()
    .flat_map(|h| h.join().unwrap())
    .collect();
  assert_eq!(ids.len(), 400);
  assert_eq!(ids, (1..=400).collect());

  let listed: Vec<u64> = s.list().unwrap().iter().map(|n| n.id.get()).collect();
  assert!(listed.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn delete_racing_get_sees_whole_note_or_not_found() {
  for _ in 0..20 {
    let s = Arc::new(MemoryStore::new());
    let note = s.create(NewNote::new("A", "B")).unwrap();
    let barrier = Arc::new(Barrier::new(2));

    let reader = {
      let (s, barrier, note) = (Arc::clone(&s), Arc::clone(&barrier), note.clone());
      thread::spawn(move || {
        barrier.wait();
        for _ in 0..200 {
          match s.get(note.id) {
            Ok(got) => assert_eq!(got, note),
            Err(Error::NotFound(raw)) => assert_eq!(raw, "1"),
            Err(other) => panic!("unexpected error: {other}"),
          }
        }
      })
    };

    barrier.wait();
    assert_eq!(s.delete(note.id).unwrap(), note);
    reader.join().unwrap();
    assert!(matches!(s.get(note.id), Err(Error::NotFound(_))));
  }
}

// ─── Internal faults ─────────────────────────────────────────────────────────

#[test]
fn poisoned_lock_reports_internal_error() {
  let s = MemoryStore::new();
  let note = s.create(NewNote::new("A", "B")).unwrap();
  s.poison();

  assert!(matches!(s.create(NewNote::new("C", "D")), Err(Error::Internal(_))));
  assert!(matches!(s.list(), Err(Error::Internal(_))));
  assert!(matches!(s.get(note.id), Err(Error::Internal(_))));
  assert!(matches!(s.update(note.id, NoteUpdate::default()), Err(Error::Internal(_))));
  assert!(matches!(s.delete(note.id), Err(Error::Internal(_))));
  assert!(matches!(s.len(), Err(Error::Internal(_))));
}

#[test]
fn poisoned_lock_still_validates_first() {
  let s = MemoryStore::new();
  s.poison();
  assert!(matches!(s.create(NewNote::default()), Err(Error::Validation(_))));
}

#[test]
fn exhausted_id_space_is_internal_and_adds_nothing() {
  let last: NoteId = u64::MAX.to_string().parse().unwrap();
  let s = MemoryStore::starting_at(last);

  let err = s.create(NewNote::new("A", "B")).unwrap_err();
  assert!(matches!(err, Error::Internal(ref m) if m.contains("exhausted")));
  assert!(s.is_empty().unwrap());
}
