//! End-to-end scenarios over the public API.
//!
//! Run with `RUST_LOG=trace` to see the containers' log output.

use linear_ds::{ArrayStack, LinkedList, LinkedStack, ListError, StackError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn fresh_containers_are_empty() {
    init_logger();
    let list = LinkedList::<String>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);

    let linked = LinkedStack::<String>::new();
    assert!(linked.is_empty());
    assert_eq!(linked.len(), 0);

    let array = ArrayStack::new(8);
    assert!(array.is_empty());
    assert_eq!(array.len(), 0);
}

#[test]
fn list_rejects_absent_elements() {
    init_logger();
    let mut list = LinkedList::<String>::new();
    assert_eq!(list.add(None), Err(ListError::NullArgument));
    assert_eq!(list.insert(1, None), Err(ListError::NullArgument));
    assert_eq!(list.contains(None::<&String>), Err(ListError::NullArgument));
    assert_eq!(list.remove_item(None::<&String>), Err(ListError::NullArgument));
    assert!(list.is_empty());
}

#[test]
fn list_boundary_indices() {
    init_logger();
    let mut list = LinkedList::<String>::new();
    assert_eq!(
        list.insert(1, "John".to_string()),
        Err(ListError::IndexOutOfRange { index: 1, len: 0 })
    );
    assert_eq!(
        list.get(0),
        Err(ListError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(list.contains(&String::new()), Ok(false));
    assert_eq!(list.remove(0), Ok(None));

    list.add("John".to_string()).unwrap();
    assert_eq!(
        list.insert(1, "Jane".to_string()),
        Err(ListError::IndexOutOfRange { index: 1, len: 1 })
    );
}

#[test]
fn list_built_by_add_round_trips() {
    init_logger();
    let mut list = LinkedList::<String>::new();
    for value in ["a", "b", "c"] {
        assert_eq!(list.add(value.to_string()), Ok(true));
    }
    assert_eq!(list.get(0).map(String::as_str), Ok("a"));
    assert_eq!(list.get(1).map(String::as_str), Ok("b"));
    assert_eq!(list.get(2).map(String::as_str), Ok("c"));
    assert_eq!(list.to_string(), "[a, b, c]");
}

#[test]
fn add_then_remove_item() {
    init_logger();
    let mut list = LinkedList::<String>::new();
    list.add("keep".to_string()).unwrap();
    list.add("drop".to_string()).unwrap();

    let probe = String::from("drop");
    assert_eq!(list.contains(&probe), Ok(true));
    assert_eq!(list.remove_item(&probe), Ok(true));
    assert_eq!(list.contains(&probe), Ok(false));
    assert_eq!(list.len(), 1);
    assert_eq!(list.to_string(), "[keep]");
}

#[test]
fn insert_between_two_appends() {
    init_logger();
    let mut list = LinkedList::<&str>::new();
    list.add("A").unwrap();
    list.add("B").unwrap();
    assert_eq!(list.insert(1, "C"), Ok(true));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["A", "C", "B"]);
}

#[test]
fn array_stack_fill_and_drain() {
    init_logger();
    for capacity in [0usize, 1, 7] {
        let mut stack = ArrayStack::new(capacity);
        let values: Vec<i32> = (0..capacity)
            .map(|i| i32::try_from(i).unwrap() * 3 - 5)
            .collect();
        for value in &values {
            stack.push(*value).unwrap();
        }
        assert!(stack.is_full());
        assert_eq!(stack.push(0), Err(StackError::Full { capacity }));

        for value in values.iter().rev() {
            assert_eq!(stack.pop(), Ok(*value));
        }
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }
}

#[test]
fn linked_stack_lifo() {
    init_logger();
    let mut stack = LinkedStack::new();
    stack.push("x");
    assert_eq!(stack.pop(), Ok("x"));

    stack.push("x");
    stack.push("y");
    assert_eq!(stack.pop(), Ok("y"));
    assert_eq!(stack.pop(), Ok("x"));
    assert_eq!(stack.peek(), Err(StackError::Empty));
}

/// Drives a list and a `Vec` through the same random operations and checks
/// they agree after every step, including the length invariant.
#[test]
fn list_matches_vec_model() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed_1157);
    let mut list = LinkedList::<u16>::new();
    let mut model: Vec<u16> = Vec::new();

    for _ in 0..4_000 {
        let value = rng.gen_range(0..32);
        match rng.gen_range(0..6) {
            0 => {
                assert_eq!(list.add(value), Ok(true));
                model.push(value);
            }
            1 => {
                let index = rng.gen_range(0..=model.len());
                let result = list.insert(index, value);
                if index < model.len() {
                    assert_eq!(result, Ok(true));
                    model.insert(index, value);
                } else {
                    assert_eq!(
                        result,
                        Err(ListError::IndexOutOfRange { index, len: model.len() })
                    );
                }
            }
            2 => {
                let index = rng.gen_range(0..=model.len());
                let result = list.remove(index);
                if model.is_empty() {
                    assert_eq!(result, Ok(None));
                } else if index < model.len() {
                    assert_eq!(result, Ok(Some(model.remove(index))));
                } else {
                    assert!(matches!(result, Err(ListError::IndexOutOfRange { .. })));
                }
            }
            3 => {
                let removed = list.remove_item(&value).unwrap();
                let position = model.iter().position(|v| *v == value);
                assert_eq!(removed, position.is_some());
                if let Some(position) = position {
                    model.remove(position);
                }
            }
            4 => {
                assert_eq!(list.contains(&value), Ok(model.contains(&value)));
            }
            _ => {
                let index = rng.gen_range(0..=model.len());
                assert_eq!(list.get(index).ok(), model.get(index));
            }
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.iter().count(), list.len());
        assert_eq!(list.is_empty(), model.is_empty());
    }

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);
}
