#![cfg(feature = "set")]
//! Integration tests for Set.
//!
//! Covers construction, membership, the algebra, relational predicates and
//! the higher-order combinators through the public API.

use rstest::rstest;
use sundry::set;
use sundry::set::Set;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: Set<i32> = Set::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: Set<i32> = Set::default();
    assert!(set.is_empty());
}

#[rstest]
fn test_from_elements_collapses_duplicates() {
    let set = Set::from_elements([1, 2, 2, 3, 3, 3]);
    assert_eq!(set.len(), 3);
}

#[rstest]
fn test_macro_matches_from_elements() {
    assert_eq!(set![1, 2, 3], Set::from_elements([3, 2, 1]));
    assert_eq!(set![1, 2, 3,], set![1, 2, 3]);

    let empty: Set<String> = set![];
    assert!(empty.is_empty());
}

#[rstest]
fn test_from_vec_and_array() {
    let from_vec: Set<char> = Set::from(vec!['a', 'b', 'a']);
    let from_array: Set<char> = Set::from(['b', 'a']);
    assert_eq!(from_vec, from_array);
}

#[rstest]
fn test_collect_from_iterator() {
    let set: Set<i32> = (0..100).map(|x| x % 10).collect();
    assert_eq!(set.len(), 10);
}

#[rstest]
fn test_with_capacity_starts_empty() {
    let mut set = Set::with_capacity(64);
    assert!(set.is_empty());
    set.insert("value");
    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_custom_hasher() {
    use std::collections::hash_map::RandomState;

    let mut set: Set<i32, RandomState> = Set::with_hasher(RandomState::new());
    set.insert(1);
    set.insert(2);
    let doubled = set.map(|x| x * 2);

    assert!(doubled.has(&4));
    assert_eq!(doubled.len(), 2);
}

// =============================================================================
// Membership
// =============================================================================

#[rstest]
fn test_insert_existing_is_noop() {
    let mut set = set![1, 2];
    assert!(!set.insert(2));
    assert_eq!(set, set![1, 2]);
}

#[rstest]
fn test_delete_ignores_absent() {
    let mut set = set![1, 2];
    assert!(!set.delete(&3));
    assert_eq!(set, set![1, 2]);
}

#[rstest]
fn test_delete_all_variadic() {
    let mut set = set!["a", "b", "c", "d"];
    set.delete_all(&["a", "c", "z"]);
    assert_eq!(set, set!["b", "d"]);
}

#[rstest]
fn test_delete_with_borrowed_form() {
    let mut set = set!["alpha".to_string(), "beta".to_string()];
    assert!(set.delete("alpha"));
    assert!(!set.has("alpha"));
    assert!(set.has("beta"));
}

#[rstest]
fn test_pop_single_element_leaves_empty() {
    let mut set = set![42];
    assert_eq!(set.pop(), Some(42));
    assert!(set.is_empty());
    assert!(!set.has(&42));
}

#[rstest]
fn test_pop_distinguishes_zero_from_empty() {
    let mut set = set![0];
    assert_eq!(set.pop(), Some(0));
    assert_eq!(set.pop(), None);
}

#[rstest]
fn test_pop_removes_a_member() {
    let original = set![10, 20, 30];
    let mut set = original.clone();
    let popped = set.pop();

    assert!(popped.is_some_and(|element| original.has(&element) && !set.has(&element)));
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_to_vec_holds_every_element() {
    let mut elements = set![3, 1, 2].to_vec();
    elements.sort_unstable();
    assert_eq!(elements, vec![1, 2, 3]);
}

#[rstest]
fn test_to_vec_empty() {
    let set: Set<i32> = Set::new();
    assert!(set.to_vec().is_empty());
}

#[rstest]
fn test_iteration_visits_each_element_once() {
    let set: Set<i32> = (1..=50).collect();
    let mut seen: Vec<i32> = set.iter().copied().collect();
    seen.sort_unstable();

    assert_eq!(set.iter().len(), 50);
    assert_eq!(seen, (1..=50).collect::<Vec<_>>());
}

#[rstest]
fn test_owned_iteration() {
    let total: i32 = set![1, 2, 3].into_iter().sum();
    assert_eq!(total, 6);
}

// =============================================================================
// Clone
// =============================================================================

#[rstest]
fn test_clone_is_equal() {
    let set = set![1, 2, 3];
    assert_eq!(set.clone(), set);
}

#[rstest]
fn test_clone_is_independent() {
    let original = set![1, 2, 3];
    let mut clone = original.clone();
    clone.insert(4);
    clone.delete(&1);

    assert_eq!(original, set![1, 2, 3]);
    assert_eq!(clone, set![2, 3, 4]);
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
fn test_union() {
    assert_eq!(set![1, 2].union(&set![2, 3]), set![1, 2, 3]);
    assert_eq!(set::union(&set![1], &Set::new()), set![1]);
}

#[rstest]
fn test_intersection() {
    assert_eq!(set![1, 2, 3].intersection(&set![2, 3, 4]), set![2, 3]);
    assert!(set::intersection(&set![1], &set![2]).is_empty());
}

#[rstest]
fn test_difference_example() {
    assert_eq!(set::difference(&set![1, 2, 3, 4], &set![3, 4, 5]), set![1, 2]);
}

#[rstest]
fn test_disjoint_union_is_symmetric_difference() {
    let first = set![1, 2, 3, 4];
    let second = set![3, 4, 5];

    assert_eq!(set::disjoint_union(&first, &second), set![1, 2, 5]);
    assert_eq!(set::disjoint_union(&first, &second), first.symmetric_difference(&second));
}

// =============================================================================
// Relational Predicates
// =============================================================================

#[rstest]
fn test_empty_sets_are_equal() {
    assert!(set::equal(&Set::<i32>::new(), &Set::new()));
    assert_eq!(Set::<i32>::new(), Set::default());
}

#[rstest]
fn test_equal_is_order_independent() {
    assert!(set::equal(&set![1, 2], &set![2, 1]));
}

#[rstest]
#[case(&[1, 2, 3], &[1, 2], true)]
#[case(&[1, 2, 3], &[1, 2, 3], true)]
#[case(&[1, 2], &[1, 2, 3], false)]
#[case(&[1, 2, 3], &[], true)]
#[case(&[], &[1], false)]
fn test_contains(#[case] outer: &[i32], #[case] inner: &[i32], #[case] expected: bool) {
    let outer: Set<i32> = outer.iter().copied().collect();
    let inner: Set<i32> = inner.iter().copied().collect();

    assert_eq!(outer.contains(&inner), expected);
    assert_eq!(inner.is_subset(&outer), expected);
}

#[rstest]
fn test_disjoint() {
    assert!(set::disjoint(&set![1, 2], &set![3, 4, 5]));
    assert!(!set::disjoint(&set![1, 2], &set![2]));
    assert!(set::disjoint(&Set::<i32>::new(), &Set::new()));
}

// =============================================================================
// Higher-order Combinators
// =============================================================================

#[rstest]
fn test_forall() {
    assert!(set![2, 4, 6].forall(|x| x % 2 == 0));
    assert!(!set![2, 3].forall(|x| x % 2 == 0));
}

#[rstest]
fn test_exists() {
    assert!(set![1, 2, 3].exists(|x| *x > 2));
    assert!(!set![1, 2, 3].exists(|x| *x > 3));
}

#[rstest]
fn test_filter_even() {
    assert_eq!(set![1, 2, 3, 4].filter(|x| x % 2 == 0), set![2, 4]);
    assert_eq!(set::filter(&set![1, 2, 3, 4], |x| x % 2 == 0), set![2, 4]);
}

#[rstest]
fn test_map_double() {
    assert_eq!(set![1, 2, 3].map(|x| x * 2), set![2, 4, 6]);
}

#[rstest]
fn test_map_non_injective() {
    assert_eq!(set::map(&set![1, 2, 3, 4], |x| x % 2), set![0, 1]);
}

#[rstest]
fn test_map_to_strings() {
    let rendered = set![1, 2].map(|x| x.to_string());
    assert!(rendered.has("1"));
    assert!(rendered.has("2"));
}

// =============================================================================
// Rendering
// =============================================================================

#[rstest]
fn test_display_format() {
    assert_eq!(format!("{}", Set::<i32>::new()), "Set{}");
    assert_eq!(format!("{}", set!["only"]), "Set{only}");

    let rendered = format!("{}", set![1, 2]);
    assert!(rendered == "Set{1 2}" || rendered == "Set{2 1}");
}
