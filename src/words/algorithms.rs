//! Sequence algorithms used by the word repository.
//!
//! - `merge_sort`: stable top-down merge sort, O(n log n)
//! - `binary_search`: exact-match lookup on ascending input, O(log n)
//! - `edit_distance`: Levenshtein distance with unit costs, O(|a|·|b|)

use std::borrow::Borrow;

/// Sort a slice ascending in place. Equal elements keep their relative order.
///
/// ```
/// use word_bingo::words::merge_sort;
///
/// let mut words = vec!["perro", "casa", "gato"];
/// merge_sort(&mut words);
/// assert_eq!(words, ["casa", "gato", "perro"]);
/// ```
pub fn merge_sort<T: Ord + Clone>(seq: &mut [T]) {
    if seq.len() <= 1 {
        return;
    }
    let mid = seq.len() / 2;
    merge_sort(&mut seq[..mid]);
    merge_sort(&mut seq[mid..]);
    merge(seq, mid);
}

/// Merge the sorted runs `seq[..mid]` and `seq[mid..]`.
fn merge<T: Ord + Clone>(seq: &mut [T], mid: usize) {
    let left = seq[..mid].to_vec();
    let right = seq[mid..].to_vec();
    let (mut i, mut j) = (0, 0);

    for slot in seq.iter_mut() {
        // `<=` takes from the left run on ties, which keeps the sort stable
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Find the index of `target` in an ascending slice.
///
/// Returns `None` when absent. Unsorted input gives unspecified results.
///
/// ```
/// use word_bingo::words::binary_search;
///
/// let words = vec!["casa".to_string(), "gato".to_string(), "perro".to_string()];
/// assert_eq!(binary_search(&words, "gato"), Some(1));
/// assert_eq!(binary_search(&words, "raton"), None);
/// ```
#[must_use]
pub fn binary_search<T, Q>(seq: &[T], target: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let (mut low, mut high) = (0, seq.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match seq[mid].borrow().cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    None
}

/// Levenshtein distance between two strings, counted in characters.
///
/// Fills the full dynamic-programming table: insertion, deletion and
/// substitution each cost 1.
///
/// ```
/// use word_bingo::words::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("casa", "casa"), 0);
/// ```
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        table[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j].min(table[i][j - 1]).min(table[i - 1][j - 1])
            };
        }
    }

    table[m][n]
}
