//! Sequence pipelines end to end

use rand::SeedableRng;
use rand::rngs::StdRng;
use sundry_seq::{CycleEnd, Seq};
use sundry_types::{Maybe, Outcome, Stack};

#[test]
fn map_preserves_length_and_order() {
    let doubled = Seq::new(&[1, 2, 3]).map(|x| x * 2);
    assert_eq!(doubled.into_vec(), vec![2, 4, 6]);
}

#[test]
fn deduped_keeps_first_occurrence() {
    let seq = Seq::new(&[1, 2, 1, 3, 2]);
    assert_eq!(seq.deduped().into_vec(), vec![1, 2, 3]);
    assert_eq!(seq.len(), 5);
}

#[test]
fn filter_in_place_rewrites_receiver() {
    let mut seq = Seq::new(&[1, 2, 3, 4]);
    let copy = seq.filtered(|x| *x > 2);
    seq.filter_in_place(|x| *x > 2);
    assert_eq!(seq, copy);
    assert_eq!(seq.into_vec(), vec![3, 4]);
}

#[test]
fn windows_visit_exactly_twice() {
    let mut seen = Vec::new();
    Seq::new(&[1, 2, 3]).windows(2, |w| seen.push(w.to_vec()));
    assert_eq!(seen, vec![vec![1, 2], vec![2, 3]]);
}

#[test]
fn chunks_visit_in_order() {
    let mut seen = Vec::new();
    Seq::new(&[1, 2, 3]).chunks(2, |c| seen.push(c.to_vec()));
    assert_eq!(seen, vec![vec![1, 2], vec![3]]);
}

#[test]
fn extremes_of_empty_are_not_found() {
    let empty = Seq::<i32>::empty();
    assert_eq!(empty.max(), None);
    assert_eq!(empty.min(), None);

    let seq = Seq::new(&[3, -4, 9]);
    assert_eq!(seq.max(), Some(9));
    assert_eq!(seq.min(), Some(-4));
}

#[test]
fn skip_past_end_empties() {
    let mut seq = Seq::new(&[1, 2, 3]);
    seq.skip(10);
    assert!(seq.is_empty());
}

#[test]
fn non_mutating_operations_leave_source_alone() {
    let source = Seq::new(&[4, 1, 3]);
    let _ = source.reversed();
    let _ = source.filtered(|x| *x > 1);
    let _ = source.chained(&Seq::new(&[9]));
    let _ = source.shuffled_with(&mut StdRng::seed_from_u64(3));
    assert_eq!(source.into_vec(), vec![4, 1, 3]);
}

#[test]
fn seeded_shuffles_agree() {
    let source: Seq<u16> = (0..50).collect();
    let mut a = source.clone();
    let mut b = source.clone();
    a.shuffle_with(&mut StdRng::seed_from_u64(11));
    b.shuffle_with(&mut StdRng::seed_from_u64(11));
    assert_eq!(a, b);
}

#[test]
fn lookups_lift_into_containers() {
    let seq = Seq::new(&["a", "b"]);
    let hit: Maybe<&&str> = seq.nth(1).into();
    assert_eq!(hit.map(|s| s.len()).unwrap(), 1);

    let miss: Outcome<&str> = Maybe::from(seq.nth(7).copied()).into_outcome("no such index");
    assert_eq!(miss.fault().map(|f| f.message()), Some("no such index"));
}

#[test]
fn group_then_reduce() {
    let words = Seq::new(&["apple", "avocado", "banana", "blueberry", "cherry"]);
    let totals: Vec<(char, usize)> = words
        .group_by(|w| w.chars().next().unwrap_or(' '))
        .into_iter()
        .map(|group| {
            let members = Seq::from(group.items);
            (group.key, members.reduce(0, |acc, w| acc + w.len()))
        })
        .collect();
    assert_eq!(totals, vec![('a', 12), ('b', 15), ('c', 6)]);
}

#[test]
fn bounded_cycle_feeds_a_stack() {
    let mut stack = Stack::new();
    let seq = Seq::new(&[1, 2, 3]);
    let end = seq.cycle_bounded(4, |x| stack.push(*x), || false);
    assert_eq!(end, CycleEnd::LimitReached { visits: 4 });
    assert_eq!(stack.drain(), vec![1, 3, 2, 1]);
}
