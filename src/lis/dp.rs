/// Sentinel index meaning "no predecessor" in the parent arena.
const NO_PARENT: usize = usize::MAX;

/// Returns the length of the longest strictly increasing subsequence of
/// `values`, using the classic O(n²) dynamic program.
///
/// # Examples
///
/// ```
/// use lislab::lis::dp::lis_dp_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(lis_dp_length(&arr), 4);
/// // One possible LIS is [2, 5, 7, 101]
/// ```
pub fn lis_dp_length<T: Ord>(values: &[T]) -> usize {
    if values.is_empty() {
        return 0;
    }

    // length[i] = length of the longest increasing subsequence ending at i.
    let mut length = vec![1_usize; values.len()];
    let mut best = 1;

    for i in 1..values.len() {
        for j in 0..i {
            if values[j] < values[i] && length[j] + 1 > length[i] {
                length[i] = length[j] + 1;
            }
        }
        best = best.max(length[i]);
    }

    best
}

/// Returns one longest strictly increasing subsequence of `values`, chosen
/// by quadratic dynamic programming with parent-pointer reconstruction.
///
/// The chosen elements keep their original relative order. When several
/// subsequences share the maximum length, the strict `>` updates make the
/// choice deterministic: for each position the earliest qualifying
/// predecessor wins, and the earliest index achieving the overall maximum
/// becomes the terminal element.
///
/// Runs in O(n²) time and O(n) space. The empty input yields an empty
/// subsequence.
///
/// # Examples
///
/// ```
/// use lislab::lis::dp::lis_dp;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// let lis = lis_dp(&arr);
/// assert_eq!(lis.len(), 4);
/// // This tie-break settles on [2, 5, 7, 101]
/// ```
pub fn lis_dp<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    // length[i] = length of the longest increasing subsequence ending at i;
    // parent[i] = predecessor index chosen for that subsequence.
    let mut length = vec![1_usize; n];
    let mut parent = vec![NO_PARENT; n];

    let mut best_len = 1;
    let mut best_end = 0;

    for i in 1..n {
        for j in 0..i {
            // Strict `>` keeps the first qualifying predecessor per length.
            if values[j] < values[i] && length[j] + 1 > length[i] {
                length[i] = length[j] + 1;
                parent[i] = j;
            }
        }
        // Strict `>` again, so the earliest index achieving the maximum
        // stays the terminal element.
        if length[i] > best_len {
            best_len = length[i];
            best_end = i;
        }
    }

    // Walk the parent chain back from the terminal element.
    let mut lis = Vec::with_capacity(best_len);
    let mut at = best_end;
    while at != NO_PARENT {
        lis.push(values[at].clone());
        at = parent[at];
    }
    lis.reverse();
    lis
}
