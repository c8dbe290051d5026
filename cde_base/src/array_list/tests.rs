use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, prop_oneof, proptest,
    strategy::{BoxedStrategy, Strategy},
    test_runner::TestCaseResult,
};

use super::{grown_capacity, ArrayList, Error, INITIAL_CAPACITY};

#[test]
fn test_new_list() {
    let list: ArrayList<i32> = ArrayList::new();

    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.capacity(), INITIAL_CAPACITY);
}

#[test]
fn test_grown_capacity() {
    assert_eq!(grown_capacity(0), 1);
    assert_eq!(grown_capacity(1), 2);
    assert_eq!(grown_capacity(2), 3);
    assert_eq!(grown_capacity(3), 5);
    assert_eq!(grown_capacity(10), 15);
    assert_eq!(grown_capacity(15), 23);
    assert_eq!(grown_capacity(usize::MAX), usize::MAX);
}

#[test]
fn test_growth_from_zero_capacity() {
    let mut list = ArrayList::with_capacity(0).unwrap();
    assert_eq!(list.capacity(), 0);

    list.try_push("first").unwrap();
    assert_eq!(list.capacity(), 1);

    list.try_push("second").unwrap();
    assert_eq!(list.capacity(), 2);

    list.try_push("third").unwrap();
    assert_eq!(list.capacity(), 3);

    assert_eq!(list.as_slice(), &["first", "second", "third"]);
}

#[test]
fn test_out_of_bounds() {
    let mut list: ArrayList<_> = (0..3).collect();

    assert_eq!(list.get(3), Err(Error::IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.get(7), Err(Error::IndexOutOfBounds { index: 7, len: 3 }));
    assert_eq!(
        list.remove_at(3),
        Err(Error::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        list.remove_at(usize::MAX),
        Err(Error::IndexOutOfBounds {
            index: usize::MAX,
            len: 3
        })
    );
    assert_eq!(
        list.insert_at(4, 10),
        Err(Error::IndexOutOfBounds { index: 4, len: 3 })
    );

    // failed operations leave the list untouched
    assert_eq!(list.as_slice(), &[0, 1, 2]);
}

#[test]
fn test_insert_at() {
    let mut list: ArrayList<_> = ArrayList::new();

    list.insert_at(0, 'b').unwrap();
    list.insert_at(0, 'a').unwrap();
    list.insert_at(2, 'd').unwrap();
    list.insert_at(2, 'c').unwrap();

    assert_eq!(list.as_slice(), &['a', 'b', 'c', 'd']);
}

#[test]
fn test_drop_releases_elements() {
    use std::rc::Rc;

    let shared = Rc::new(());
    let mut list = ArrayList::new();

    for _ in 0..32 {
        list.push(shared.clone());
    }
    assert_eq!(Rc::strong_count(&shared), 33);

    drop(list.remove_at(0).unwrap());
    assert_eq!(Rc::strong_count(&shared), 32);

    drop(list);
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_clone_keeps_reserved_storage() {
    let mut list = ArrayList::with_capacity(4).unwrap();
    list.push(1);
    list.push(2);

    let mut clone = list.clone();

    assert_eq!(clone, list);
    assert_eq!(clone.capacity(), 4);
    assert!(clone.items.capacity() >= clone.capacity());

    // fills the slots reserved by the original without growing
    clone.try_push(3).unwrap();
    clone.try_push(4).unwrap();
    assert_eq!(clone.capacity(), 4);
    assert_eq!(clone.as_slice(), [1, 2, 3, 4]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut small = ArrayList::with_capacity(1).unwrap();
    let mut large = ArrayList::with_capacity(64).unwrap();

    small.push(1);
    large.push(1);

    assert_eq!(small, large);
}

/// Represents an operation applied to both an [`ArrayList`] and a reference [`Vec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Push(u8),
    Insert(usize, u8),
    Remove(usize),
}

impl Arbitrary for Operation {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            proptest::num::u8::ANY.prop_map(Self::Push),
            (0usize..48, proptest::num::u8::ANY).prop_map(|(i, v)| Self::Insert(i, v)),
            (0usize..48).prop_map(Self::Remove),
        ]
        .boxed()
    }
}

fn apply(list: &mut ArrayList<u8>, model: &mut Vec<u8>, operation: Operation) -> TestCaseResult {
    let capacity_before = list.capacity();
    let len_before = list.len();

    match operation {
        Operation::Push(value) => {
            list.try_push(value)?;
            model.push(value);
        }
        Operation::Insert(index, value) => {
            let result = list.insert_at(index, value);

            if index <= model.len() {
                prop_assert_eq!(result, Ok(()));
                model.insert(index, value);
            } else {
                prop_assert_eq!(
                    result,
                    Err(Error::IndexOutOfBounds {
                        index,
                        len: model.len()
                    })
                );
            }
        }
        Operation::Remove(index) => {
            let result = list.remove_at(index);

            if index < model.len() {
                prop_assert_eq!(result, Ok(model.remove(index)));
            } else {
                prop_assert_eq!(
                    result,
                    Err(Error::IndexOutOfBounds {
                        index,
                        len: model.len()
                    })
                );
            }

            // removal never shrinks
            prop_assert_eq!(list.capacity(), capacity_before);
        }
    }

    prop_assert!(list.len() <= list.capacity());

    if len_before == capacity_before && list.len() > len_before {
        prop_assert!(list.capacity() >= grown_capacity(capacity_before));
    }

    Ok(())
}

proptest! {
    #[test]
    fn push_preserves_insertion_order(
        values in proptest::collection::vec(proptest::num::i64::ANY, 0..128)
    ) {
        let mut list = ArrayList::new();

        for (count, value) in values.iter().enumerate() {
            list.try_push(*value)?;

            prop_assert_eq!(list.len(), count + 1);
            prop_assert!(list.len() <= list.capacity());
        }

        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(list.get(index)?, value);
        }
    }

    #[test]
    fn remove_at_shifts_left(
        values in proptest::collection::vec(proptest::num::u16::ANY, 1..64),
        index in proptest::num::usize::ANY,
    ) {
        let index = index % values.len();
        let mut list: ArrayList<_> = values.iter().copied().collect();

        let removed = list.remove_at(index)?;

        prop_assert_eq!(removed, values[index]);
        prop_assert_eq!(list.len(), values.len() - 1);

        for i in 0..index {
            prop_assert_eq!(list[i], values[i]);
        }
        for i in index + 1..values.len() {
            prop_assert_eq!(list[i - 1], values[i]);
        }
    }

    #[test]
    fn growth_law(initial_capacity in 0usize..32, extra in 1usize..32) {
        let mut list = ArrayList::with_capacity(initial_capacity)?;

        for value in 0..initial_capacity + extra {
            list.try_push(value)?;
        }

        prop_assert!(list.capacity() >= grown_capacity(initial_capacity));
        prop_assert!(list.capacity() >= list.len());
    }

    #[test]
    fn operations_match_vec(
        operations in proptest::collection::vec(Operation::arbitrary(), 0..96)
    ) {
        let mut list = ArrayList::with_capacity(2)?;
        let mut model = Vec::new();

        for operation in operations {
            apply(&mut list, &mut model, operation)?;
        }

        prop_assert_eq!(list.as_slice(), model.as_slice());
    }
}
