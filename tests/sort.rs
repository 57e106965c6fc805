use ordered_forest::sort;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn random_ints(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let bound = len as i32;
    (0..len).map(|_| rng.gen_range(-bound..bound)).collect()
}

fn random_strings(len: usize, seed: u64) -> Vec<String> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let size = rng.gen_range(3..10);
            (0..size).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect()
        })
        .collect()
}

fn check_int_sort(sorter: fn(&mut [i32]), seed: u64) {
    let mut values = random_ints(1000, seed);
    let mut expected = values.clone();
    expected.sort_unstable();
    sorter(&mut values);
    assert_eq!(values, expected);
}

fn check_string_sort(sorter: fn(&mut [String]), seed: u64) {
    let mut values = random_strings(300, seed);
    let mut expected = values.clone();
    expected.sort();
    sorter(&mut values);
    assert_eq!(values, expected);
}

#[test]
fn bubble_sorts() {
    check_int_sort(sort::bubble, 1);
    check_string_sort(sort::bubble, 2);
}

#[test]
fn insertion_sorts() {
    check_int_sort(sort::insertion, 3);
    check_string_sort(sort::insertion, 4);
}

#[test]
fn selection_sorts() {
    check_int_sort(sort::selection, 5);
    check_string_sort(sort::selection, 6);
}

#[test]
fn shell_sorts() {
    check_int_sort(sort::shell, 7);
    check_string_sort(sort::shell, 8);
}

#[test]
fn shell_sorts_with_custom_gap() {
    let mut values = random_ints(1000, 9);
    let mut expected = values.clone();
    expected.sort_unstable();
    sort::shell_with_gap(&mut values, 7);
    assert_eq!(values, expected);
}

#[test]
fn heap_sorts() {
    check_int_sort(sort::heap, 10);
    check_string_sort(sort::heap, 11);
}

#[test]
fn merge_sorts() {
    check_int_sort(sort::merge, 12);
    check_string_sort(sort::merge, 13);
}

#[test]
fn quick_sorts() {
    check_int_sort(sort::quick, 14);
    check_string_sort(sort::quick, 15);
}

#[test]
fn bogo_sorts_tiny_inputs() {
    let mut values = random_ints(6, 16);
    let mut expected = values.clone();
    expected.sort_unstable();
    sort::bogo(&mut values);
    assert_eq!(values, expected);
}

#[test]
fn evil_sorts_tiny_inputs() {
    let mut values = random_ints(5, 17);
    let mut expected = values.clone();
    expected.sort_unstable();
    sort::evil(&mut values);
    assert_eq!(values, expected);
}

#[test]
fn sorts_handle_empty_and_single() {
    let mut empty: Vec<i32> = Vec::new();
    sort::bubble(&mut empty);
    sort::insertion(&mut empty);
    sort::selection(&mut empty);
    sort::shell(&mut empty);
    sort::heap(&mut empty);
    sort::merge(&mut empty);
    sort::quick(&mut empty);
    sort::bogo(&mut empty);
    sort::evil(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![42];
    sort::heap(&mut single);
    sort::quick(&mut single);
    sort::merge(&mut single);
    assert_eq!(single, vec![42]);
}

#[test]
fn already_sorted_inputs_stay_sorted() {
    let mut values: Vec<i32> = (0..100).collect();
    sort::shell(&mut values);
    sort::heap(&mut values);
    sort::quick(&mut values);
    sort::merge(&mut values);
    assert_eq!(values, (0..100).collect::<Vec<_>>());
}
