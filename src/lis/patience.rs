//! Patience-sorting LIS: binary search over the smallest tail of every
//! subsequence length discovered so far.

/// Sentinel index meaning "no predecessor" in the predecessor arena.
const NO_PREDECESSOR: usize = usize::MAX;

/// Returns the length of the longest strictly increasing subsequence of
/// `values` in O(n log n) time.
///
/// # Examples
///
/// ```
/// use lislab::lis::patience::lis_patience_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(lis_patience_length(&arr), 4);
/// ```
pub fn lis_patience_length<T: Ord>(values: &[T]) -> usize {
    // tails[k] = index of the smallest value ending an increasing
    // subsequence of length k + 1; the mapped values stay strictly
    // increasing, which keeps the binary search a true lower bound.
    let mut tails: Vec<usize> = Vec::new();

    for (i, value) in values.iter().enumerate() {
        let pos = match tails.binary_search_by(|&at| values[at].cmp(value)) {
            Ok(pos) | Err(pos) => pos,
        };
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    tails.len()
}

/// Returns one longest strictly increasing subsequence of `values`, found
/// by patience sorting with predecessor reconstruction.
///
/// Each value lands in the leftmost tail slot whose value is not smaller
/// than it, or opens a new slot; the index backing the slot to its left at
/// that moment becomes its predecessor. Among equally long subsequences
/// this favors the most recently placed element at every rank, so the
/// returned elements can differ from the quadratic solver's choice even
/// though the length always matches.
///
/// Runs in O(n log n) time and O(n) space. The empty input yields an empty
/// subsequence.
///
/// # Examples
///
/// ```
/// use lislab::lis::patience::lis_patience;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// let lis = lis_patience(&arr);
/// assert_eq!(lis.len(), 4);
/// // This tie-break settles on [2, 3, 7, 18]
/// ```
pub fn lis_patience<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut tails: Vec<usize> = Vec::new();
    let mut predecessor = vec![NO_PREDECESSOR; n];

    for (i, value) in values.iter().enumerate() {
        // Leftmost slot whose tail value is >= value. The tails are
        // strictly increasing, so an exact hit and an insertion point are
        // both that lower bound.
        let pos = match tails.binary_search_by(|&at| values[at].cmp(value)) {
            Ok(pos) | Err(pos) => pos,
        };
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
        if pos > 0 {
            // The index backing the previous slot right now, not at the end.
            predecessor[i] = tails[pos - 1];
        }
    }

    // The best subsequence ends at the index backing the last slot.
    let mut lis = Vec::with_capacity(tails.len());
    let mut at = tails[tails.len() - 1];
    while at != NO_PREDECESSOR {
        lis.push(values[at].clone());
        at = predecessor[at];
    }
    lis.reverse();
    lis
}
