//! The [`Set`] type.
//!
//! `Set` is a thin wrapper around `HashMap<T, (), S>`: the map's keys are the
//! set's elements, which makes uniqueness a structural guarantee.
//!
//! - O(1) average `has`, `insert`, `delete` and `pop`
//! - O(1) `len` and `is_empty`
//! - iteration order is unspecified and may differ between two equal sets

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::DefaultHashBuilder;
use crate::slices;

// =============================================================================
// Set Definition
// =============================================================================

/// A mutable, unordered collection of unique elements.
///
/// # Time Complexity
///
/// | Operation              | Complexity           |
/// |------------------------|----------------------|
/// | `new`                  | O(1)                 |
/// | `has`                  | O(1) average         |
/// | `insert`               | O(1) average         |
/// | `delete`               | O(1) average         |
/// | `pop`                  | O(capacity) worst    |
/// | `len`                  | O(1)                 |
/// | `union`                | O(n + m)             |
/// | `intersection`         | O(min(n, m))         |
/// | `difference`           | O(n)                 |
/// | `symmetric_difference` | O(n + m)             |
/// | `contains`             | O(m)                 |
/// | `is_disjoint`          | O(min(n, m))         |
///
/// # Examples
///
/// ```rust
/// use sundry::set::Set;
///
/// let mut set = Set::new();
/// set.insert("apple");
/// set.insert("pear");
/// set.insert("apple");
///
/// assert_eq!(set.len(), 2);
/// assert!(set.has("pear"));
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    inner: HashMap<T, (), S>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set from zero or more elements, discarding duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set::Set;
    ///
    /// let set = Set::from_elements([3, 1, 3, 2]);
    /// assert_eq!(set.len(), 3);
    ///
    /// let empty = Set::from_elements(Vec::<u8>::new());
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    /// Creates a set containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(element);
        set
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set using `hasher` to hash its elements.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for `capacity` elements, using `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element, keeping the allocated storage.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns a reference to the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns an iterator over the elements, in unspecified order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.keys(),
        }
    }

    /// Removes and returns one arbitrary element.
    ///
    /// Returns `None` if the set is empty, so an element that happens to
    /// equal `T::default()` is never confused with "nothing to pop".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set::Set;
    ///
    /// let mut set = Set::singleton(0);
    /// assert_eq!(set.pop(), Some(0));
    /// assert_eq!(set.pop(), None);
    /// assert!(set.is_empty());
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        // ExtractIf leaves unvisited elements in place when dropped.
        self.inner
            .extract_if(|_, _| true)
            .next()
            .map(|(element, ())| element)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.retain(|element, _| predicate(element));
    }

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// Vacuously `true` for the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    /// use sundry::set::Set;
    ///
    /// assert!(set![2, 4, 6].forall(|x| x % 2 == 0));
    /// assert!(Set::<i32>::new().forall(|_| false));
    /// ```
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns `true` if `predicate` holds for at least one element.
    ///
    /// Always `false` for the empty set.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Consumes the set and returns its elements, in unspecified order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_keys().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Adds an element to the set.
    ///
    /// Returns `true` if the element was not already present. Inserting an
    /// element that is already present leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(7));
    /// assert!(!set.insert(7));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element, ()).is_none()
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present. Absent elements are
    /// ignored.
    #[inline]
    pub fn delete<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).is_some()
    }

    /// Removes each of the given elements that is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    ///
    /// let mut numbers = set![1, 2, 3, 4];
    /// numbers.delete_all(&[2, 4, 8]);
    /// assert_eq!(numbers, set![1, 3]);
    /// ```
    pub fn delete_all<'a, Q, I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        for element in elements {
            self.inner.remove(element);
        }
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// The element may be any borrowed form of the set's element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    ///
    /// let words = set!["hello".to_string(), "world".to_string()];
    /// assert!(words.has("hello"));
    /// assert!(!words.has("other"));
    /// ```
    #[inline]
    #[must_use]
    pub fn has<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// In other words, `other` is a subset of `self`. The empty set is
    /// contained in every set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    ///
    /// let numbers = set![1, 2, 3];
    /// assert!(numbers.contains(&set![1, 3]));
    /// assert!(!numbers.contains(&set![3, 4]));
    /// ```
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        if other.len() > self.len() {
            return false;
        }
        other.forall(|element| self.has(element))
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[inline]
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        other.contains(self)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[inline]
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.contains(other)
    }

    /// Returns `true` if `self` and `other` have no element in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    ///
    /// assert!(set![1, 2].is_disjoint(&set![3, 4]));
    /// assert!(!set![1, 2].is_disjoint(&set![2, 3]));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = smaller_first(self, other);
        !smaller.exists(|element| larger.has(element))
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher> Set<T, S> {
    /// Returns the elements as a vector, in unspecified order.
    ///
    /// An empty set yields an empty vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Clone> Set<T, S> {
    /// Returns a new set with every element that is in `self` or `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    ///
    /// assert_eq!(set![1, 2].union(&set![2, 3]), set![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);
        let mut union = larger.clone();
        union.extend(smaller.iter().cloned());
        union
    }

    /// Returns a new set with the elements that are in both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    ///
    /// assert_eq!(set![1, 2, 3].intersection(&set![2, 3, 4]), set![2, 3]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);
        smaller.filter(|element| larger.has(element))
    }

    /// Returns a new set with the elements of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    ///
    /// assert_eq!(set![1, 2, 3, 4].difference(&set![3, 4, 5]), set![1, 2]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.filter(|element| !other.has(element))
    }

    /// Returns a new set with the elements that are in exactly one of
    /// `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    ///
    /// assert_eq!(set![1, 2, 3].symmetric_difference(&set![2, 3, 4]), set![1, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        result.extend(other.iter().filter(|element| !self.has(*element)).cloned());
        result
    }

    /// Returns a new set with the elements that satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    ///
    /// assert_eq!(set![1, 2, 3, 4].filter(|x| x % 2 == 0), set![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut filtered = Self::with_hasher(self.hasher().clone());
        filtered.extend(self.iter().filter(|element| predicate(element)).cloned());
        filtered
    }
}

impl<T, S: BuildHasher + Clone> Set<T, S> {
    /// Returns a new set with the images of the elements under `function`.
    ///
    /// `function` need not be injective; elements mapping to the same image
    /// collapse, so the result can be smaller than `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::set;
    ///
    /// assert_eq!(set![1, 2, 3].map(|x| x * 2), set![2, 4, 6]);
    /// assert_eq!(set![1, 2, 3, 4].map(|x| x % 2), set![0, 1]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Set<U, S>
    where
        U: Hash + Eq,
        F: FnMut(&T) -> U,
    {
        let mut image = Set::with_capacity_and_hasher(self.len(), self.hasher().clone());
        image.extend(self.iter().map(function));
        image
    }
}

/// Orders two sets by size, smaller first.
fn smaller_first<'a, T, S>(
    first: &'a Set<T, S>,
    second: &'a Set<T, S>,
) -> (&'a Set<T, S>, &'a Set<T, S>) {
    if first.len() <= second.len() {
        (first, second)
    } else {
        (second, first)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`].
#[derive(Clone)]
pub struct SetIterator<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIterator<'_, T> {}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_elements(elements)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, S: BuildHasher> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.contains(other)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders as `Set{e1 e2 ...}` in iteration order.
///
/// Meant for display and debugging; it is not a parseable format.
impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements: Vec<&T> = self.iter().collect();
        let rendered = slices::map(&elements, |element| element.to_string());
        write!(formatter, "Set{{{}}}", rendered.join(" "))
    }
}

static_assertions::assert_impl_all!(Set<i32>: Clone, Default, Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Clone, Default, Send, Sync);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
