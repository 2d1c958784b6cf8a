#![cfg(test)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_ends_follow_push_and_pop() {
    let mut list = SinglyLinkedList::new();
    assert!(list.is_empty());

    list.push_back(2);
    assert_eq!(
        (*list.front(), *list.back()), (2, 2),
        "A single element should be both the front and the back."
    );
    list.verify_links();

    list.push_front(1);
    list.push_back(3);
    assert_eq!((*list.front(), *list.back()), (1, 3));
    assert_eq!(list.len(), 3);
    list.verify_links();

    assert_eq!(list.pop_front(), 1);
    assert_eq!((*list.front(), *list.back()), (2, 3));
    assert_eq!(list.pop_front(), 2);
    assert_eq!(
        (*list.front(), *list.back()), (3, 3),
        "Popping down to one element should leave the front and back equal."
    );
    list.verify_links();

    assert_eq!(list.pop_front(), 3);
    assert!(list.is_empty());
    assert_eq!(list.try_back(), Err(EmptyList), "The back should be cleared with the front.");

    list.push_front(4);
    assert_eq!(
        (*list.front(), *list.back()), (4, 4),
        "Pushing to the front of an empty list should set the back too."
    );
    list.verify_links();
}

#[test]
fn test_push_front_pop_front() {
    let mut list = SinglyLinkedList::new();
    list.push_front(1);
    list.push_front(2);
    list.pop_front();
    assert_eq!(*list.front(), 1);
    assert_eq!(*list.back(), 1);
}

#[test]
fn test_mixed_operations_against_model() {
    let mut list = SinglyLinkedList::new();
    let mut model = std::collections::VecDeque::new();

    for i in 0..64_u32 {
        match i % 5 {
            0 | 3 => {
                list.push_back(i);
                model.push_back(i);
            },
            1 => {
                list.push_front(i);
                model.push_front(i);
            },
            _ => assert_eq!(list.try_pop_front().ok(), model.pop_front()),
        }

        list.verify_links();
        assert_eq!(list.len(), model.len());
        assert_eq!(list.try_front().ok(), model.front());
        assert_eq!(list.try_back().ok(), model.back());
    }

    assert!(list.iter().eq(model.iter()));
}

#[test]
fn test_mutable_access() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 3]);
    *list.front_mut() = 10;
    *list.back_mut() += 20;
    for i in list.iter_mut() {
        *i *= 2;
    }
    assert!(list.iter().eq(&[20, 4, 46]));

    if let Ok(front) = list.try_front_mut() {
        *front = 0;
    }
    assert_eq!(*list.front(), 0);
}

#[test]
fn test_empty_preconditions() {
    let mut list = SinglyLinkedList::<u8>::new();
    assert_eq!(list.try_front(), Err(EmptyList));
    assert_eq!(list.try_back(), Err(EmptyList));
    assert_eq!(list.try_front_mut(), Err(EmptyList));
    assert_eq!(list.try_back_mut(), Err(EmptyList));
    assert_eq!(list.try_pop_front(), Err(EmptyList));

    assert_panics!({ list.front(); });
    assert_panics!({ list.back(); });
    assert_panics!({ list.pop_front(); });
    assert_panics!({ list.front_mut(); });
    assert_panics!({ list.back_mut(); });
}

#[test]
fn test_iteration_order() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(list.iter().next(), None, "Iterating an empty list should yield nothing.");

    list.push_back(1);
    list.push_back(2);
    list.push_back(3);

    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None, "Iter should stay exhausted.");

    assert!(
        list.iter().eq(list.iter()),
        "Iteration should restart from the front each time."
    );
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_deep_copy() {
    let original = SinglyLinkedList::from_iter([String::from("a"), String::from("b")]);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.front_mut().push('!');
    copy.push_back(String::from("c"));
    copy.pop_front();

    assert_eq!(
        original.iter().map(String::as_str).collect::<Vec<_>>(), ["a", "b"],
        "Modifying a copy shouldn't modify the original."
    );
    assert_eq!(copy.iter().map(String::as_str).collect::<Vec<_>>(), ["b", "c"]);
    copy.verify_links();
}

#[test]
fn test_clone_from_releases_old_contents() {
    let counter = CountedDrop::new(0);
    let mut target = SinglyLinkedList::new();
    for _ in 0..3 {
        target.push_back(counter.share());
    }

    let source = SinglyLinkedList::from_iter([CountedDrop::new(0)]);
    target.clone_from(&source);

    assert_eq!(counter.count(), 3, "All of the old elements should be dropped.");
    assert_eq!(target.len(), 1);
    assert_eq!(target, source);
    target.verify_links();
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let mut list = SinglyLinkedList::new();
    for _ in 0..5 {
        list.push_front(counter.share());
    }

    drop(list.pop_front());
    assert_eq!(counter.count(), 1);

    drop(list);
    assert_eq!(counter.count(), 5, "Dropping the list should drop every remaining element.");

    let mut list = SinglyLinkedList::new();
    for _ in 0..4 {
        list.push_back(counter.share());
    }
    list.clear();
    assert_eq!(counter.count(), 9);
    assert!(list.is_empty());

    let mut iter = SinglyLinkedList::from_iter((0..4).map(|_| counter.share())).into_iter();
    drop(iter.next());
    assert_eq!(counter.count(), 10);
    drop(iter);
    assert_eq!(counter.count(), 13, "Partially consumed IntoIter should drop the rest.");
}

#[test]
fn test_append() {
    let mut list = SinglyLinkedList::from_iter([1, 2]);
    list.append(SinglyLinkedList::from_iter([3, 4]));
    assert!(list.iter().eq(&[1, 2, 3, 4]));
    assert_eq!(*list.back(), 4);
    list.verify_links();

    list.append(SinglyLinkedList::new());
    assert_eq!(list.len(), 4);

    let mut empty = SinglyLinkedList::new();
    empty.append(list);
    assert_eq!((*empty.front(), *empty.back()), (1, 4));
    empty.push_back(5);
    empty.verify_links();
}

#[test]
fn test_positions() {
    let list = SinglyLinkedList::<i32>::new();
    assert_eq!(list.begin(), list.end(), "An empty list should begin at its end.");
    assert!(list.begin().is_end());
    assert_eq!(list.end(), Position::default());

    let list = SinglyLinkedList::from_iter([1, 2, 3]);
    let mut a = list.begin();
    let mut b = list.begin();
    assert_eq!(a, b);

    a.move_next();
    assert_ne!(a, b);
    b.move_next();
    assert_eq!(a, b, "Positions advanced the same number of steps should be equal.");

    let mut values = Vec::new();
    let mut pos = list.begin();
    while pos != list.end() {
        values.push(*pos.get());
        pos.move_next();
    }
    assert_eq!(values, [1, 2, 3]);

    assert_eq!(pos.try_get(), Err(PastTheEnd));
    assert_eq!(pos.try_move_next(), Err(PastTheEnd));
    assert_panics!({ pos.get(); });
    assert_panics!({ pos.move_next(); });
}

#[test]
fn test_contains_and_duplicates() {
    let list = SinglyLinkedList::from_iter([3, 1, 2]);
    assert!(list.contains(&1));
    assert!(!list.contains(&4));
    assert!(!list.has_duplicates());

    let list = SinglyLinkedList::from_iter([3, 1, 2, 1]);
    assert!(list.has_duplicates());

    assert!(!SinglyLinkedList::<u8>::new().has_duplicates());
}

#[test]
fn test_formatting() {
    let list = SinglyLinkedList::from_iter([1, 2, 3]);
    assert_eq!(list.to_string(), "1 2 3");
    assert_eq!(SinglyLinkedList::<u8>::new().to_string(), "");
    assert_eq!(format!("{list:?}"), "SinglyLinkedList { contents: [1, 2, 3], len: 3 }");
    assert_eq!(format!("{:?}", list.begin()), "Position(1)");
    assert_eq!(format!("{:?}", list.end()), "Position(End)");
}

#[test]
fn test_equality_and_hash() {
    let a = SinglyLinkedList::from_iter([1, 2, 3]);
    let mut b = SinglyLinkedList::<i32>::new();
    b.extend(&[2, 3]);
    b.push_front(1);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    b.pop_front();
    assert_ne!(a, b);
}

#[test]
fn test_errors() {
    assert_eq!(EmptyList.to_string(), "Operation requires a non-empty list!");
    assert_eq!(PastTheEnd.to_string(), "Position is past the end of the list!");

    let error = ListError::from(EmptyList);
    assert!(error.is_empty_list());
    assert_eq!(error.to_string(), EmptyList.to_string());
    assert_eq!(EmptyList::try_from(error).ok(), Some(EmptyList));

    let error = ListError::from(PastTheEnd);
    assert!(error.is_past_the_end());
    assert!(EmptyList::try_from(error).is_err());
}
