use paired::handle::{
    add_pair_to_array, create_pair, create_pair_array, free_pair, free_pair_array,
    print_pair_array, status,
};
use paired::{Pair, PairArray, PairError};

#[test]
fn test_create_pair_keeps_identity() {
    let (key, value) = (String::from("key"), 3.5f64);
    let pair = create_pair(&key, &value);

    assert!(std::ptr::eq(*pair.first(), &key));
    assert!(std::ptr::eq(*pair.second(), &value));
    free_pair(Some(pair));
}

#[test]
fn test_free_none_is_noop() {
    free_pair::<&u8, &u8>(None);
    free_pair_array::<&u8, &u8>(None);
    print_pair_array::<&u8, &u8>(None);
}

#[test]
fn test_create_pair_array_returns_none_on_failure() {
    assert!(create_pair_array::<u64, u64>(usize::MAX).is_none());

    let array = create_pair_array::<u64, u64>(2).unwrap();
    assert_eq!(array.capacity(), 2);
    assert_eq!(array.len(), 0);
}

#[test]
fn test_add_missing_pair_leaves_array_unchanged() {
    let (a, b) = (1u8, 2u8);
    let mut array = create_pair_array(1);
    add_pair_to_array(array.as_mut(), Some(create_pair(&a, &b))).unwrap();

    let result = add_pair_to_array(array.as_mut(), None);
    let err = result.unwrap_err();
    assert_eq!(err.error(), &PairError::InvalidArgument { argument: "pair" });
    assert!(err.into_pair().is_none());

    let array = array.unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array.capacity(), 1);
}

#[test]
fn test_add_to_missing_array_hands_pair_back() {
    let (a, b) = (1u8, 2u8);
    let pair = create_pair(&a, &b);

    let result = add_pair_to_array::<&u8, &u8>(None, Some(pair));
    assert_eq!(status(&result), PairError::InvalidArgument { argument: "array" }.code());

    let returned = result.unwrap_err().into_pair().unwrap();
    assert_eq!(returned, Pair::new(&a, &b));
    assert!(std::ptr::eq(*returned.first(), &a));
}

#[test]
fn test_status_codes() {
    let mut array = PairArray::with_capacity(1).unwrap();

    let ok = add_pair_to_array(Some(&mut array), Some(create_pair(1, 2)));
    assert_eq!(status(&ok), 0);

    let missing = add_pair_to_array(Some(&mut array), None);
    assert_eq!(status(&missing), -1);
}

#[test]
fn test_end_to_end_scenario() {
    let values = [10u32, 20, 30, 40, 50, 60];
    let mut array = create_pair_array(2);

    for chunk in values.chunks(2) {
        let result = add_pair_to_array(array.as_mut(), Some(create_pair(&chunk[0], &chunk[1])));
        assert_eq!(status(&result), 0);
    }

    {
        let array = array.as_ref().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.capacity(), 4);

        let output = array.display().to_string();
        let expected: String = values
            .chunks(2)
            .enumerate()
            .map(|(i, c)| format!("Pair {}: ({:p}, {:p})\n", i + 1, &c[0], &c[1]))
            .collect();
        assert_eq!(output, expected);
    }

    print_pair_array(array.as_ref());
    free_pair_array(array);
}
