use shadow_caster::geometry::GridPoint;
use shadow_caster::occluders::{OccluderSet, Segment};

const A: GridPoint = GridPoint::new(1, 1);
const B: GridPoint = GridPoint::new(4, 1);
const C: GridPoint = GridPoint::new(1, 6);
const D: GridPoint = GridPoint::new(9, 9);

#[test]
fn reversed_segment_is_a_duplicate() {
    let mut set = OccluderSet::new();
    assert!(set.try_insert(A, B));
    assert!(!set.try_insert(B, A));
    assert_eq!(set.len(), 1);
    assert!(set.contains(B, A));
    assert_eq!(Segment::new(A, B), Segment::new(B, A));
}

#[test]
fn delete_touching_removes_every_match() {
    let mut set = OccluderSet::new();
    set.try_insert(A, B);
    set.try_insert(C, D);
    set.try_insert(A, C);
    assert_eq!(set.delete_touching(A), 2);
    let remaining: Vec<_> = set.all().copied().collect();
    assert_eq!(remaining, vec![Segment::new(C, D)]);
}

#[test]
fn delete_touching_a_free_point_is_a_no_op() {
    let mut set = OccluderSet::new();
    set.try_insert(A, B);
    assert_eq!(set.delete_touching(D), 0);
    assert_eq!(set.len(), 1);
}

#[test]
fn clear_empties_the_set() {
    let mut set = OccluderSet::new();
    set.try_insert(A, B);
    set.try_insert(C, D);
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.all().count(), 0);
}

#[test]
fn all_keeps_insertion_order_and_restarts() {
    let mut set = OccluderSet::new();
    set.try_insert(C, D);
    set.try_insert(A, B);
    let iter = set.all();
    let first: Vec<_> = iter.clone().collect();
    let second: Vec<_> = iter.collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![&Segment::new(C, D), &Segment::new(A, B)]);
}
