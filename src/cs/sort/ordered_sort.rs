use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Direction in which an [`OrderedSort`] arranges its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first. Neighbours satisfy `a <= b`.
    #[default]
    Ascending,
    /// Largest first. Neighbours satisfy `a >= b`.
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    /// Returns the "may precede" relation for this direction.
    ///
    /// The relation is non-strict, so equal values are always ordered.
    pub fn predicate<T: Ord>(self) -> fn(&T, &T) -> bool {
        match self {
            SortDirection::Ascending => precedes_ascending::<T>,
            SortDirection::Descending => precedes_descending::<T>,
        }
    }
}

fn precedes_ascending<T: Ord>(a: &T, b: &T) -> bool {
    a <= b
}

fn precedes_descending<T: Ord>(a: &T, b: &T) -> bool {
    a >= b
}

/// An in-place randomized quicksort bound to one sequence and one direction.
///
/// The ordering predicate is resolved once when the session is created and is
/// shared by [`sort`](OrderedSort::sort) and [`is_sorted`](OrderedSort::is_sorted),
/// so a sorted sequence always passes the sortedness check.
///
/// Pivot positions are drawn from the session's random source `R`. Sessions
/// created through [`with_sequence`](OrderedSort::with_sequence) seed it from
/// the operating system; [`with_rng`](OrderedSort::with_rng) accepts any
/// generator, which makes pivot choices reproducible under a fixed seed.
///
/// # Examples
///
/// ```
/// use warmup_arrays::sort::OrderedSort;
///
/// let mut values = vec![3, 1, 2];
/// let mut session = OrderedSort::with_sequence(&mut values, false);
/// assert!(!session.is_sorted());
/// assert_eq!(session.sort(), &[3, 2, 1]);
/// assert!(session.is_sorted());
/// ```
#[derive(Debug)]
pub struct OrderedSort<'a, T, R = ChaCha8Rng> {
    sequence: &'a mut [T],
    direction: SortDirection,
    ordered: fn(&T, &T) -> bool,
    rng: R,
}

impl<'a, T: Ord> OrderedSort<'a, T> {
    /// Binds `sequence` to an ascending (`true`) or descending (`false`) session.
    pub fn with_sequence(sequence: &'a mut [T], ascending: bool) -> Self {
        Self::with_direction(sequence, SortDirection::from_ascending(ascending))
    }

    pub fn with_direction(sequence: &'a mut [T], direction: SortDirection) -> Self {
        Self::with_rng(sequence, direction, ChaCha8Rng::from_entropy())
    }
}

impl<'a, T: Ord, R: Rng> OrderedSort<'a, T, R> {
    /// Binds `sequence` to a session that draws pivots from `rng`.
    pub fn with_rng(sequence: &'a mut [T], direction: SortDirection, rng: R) -> Self {
        debug!(
            "binding {:?} sort session to {} elements",
            direction,
            sequence.len()
        );
        OrderedSort {
            sequence,
            direction,
            ordered: direction.predicate::<T>(),
            rng,
        }
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Read-only view of the bound sequence.
    pub fn sequence(&self) -> &[T] {
        &*self.sequence
    }

    /// Sorts the bound sequence in place and returns it.
    ///
    /// Not stable: equal elements may be reordered.
    pub fn sort(&mut self) -> &mut [T] {
        quicksort(&mut *self.sequence, self.ordered, &mut self.rng);
        &mut *self.sequence
    }

    /// Returns `true` if every adjacent pair satisfies the session's ordering.
    pub fn is_sorted(&self) -> bool {
        let ordered = self.ordered;
        self.sequence.windows(2).all(|pair| ordered(&pair[0], &pair[1]))
    }
}

fn quicksort<T, R: Rng>(arr: &mut [T], ordered: fn(&T, &T) -> bool, rng: &mut R) {
    if arr.len() <= 1 {
        return;
    }
    let p = partition(arr, ordered, rng);
    let (left, right) = arr.split_at_mut(p);
    quicksort(left, ordered, rng);
    quicksort(&mut right[1..], ordered, rng);
}

/// Lomuto partition around a uniformly chosen pivot. Returns the pivot's final index.
fn partition<T, R: Rng>(arr: &mut [T], ordered: fn(&T, &T) -> bool, rng: &mut R) -> usize {
    let last = arr.len() - 1;
    let pivot_index = rng.gen_range(0..=last);
    arr.swap(pivot_index, last);

    // arr[..i] holds the elements that may precede the pivot.
    let mut i = 0;
    for j in 0..last {
        if ordered(&arr[j], &arr[last]) {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, last);
    trace!("partitioned {} elements, pivot settled at {}", arr.len(), i);
    i
}
