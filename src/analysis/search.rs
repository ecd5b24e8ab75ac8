//! Windowed binary search over sorted slices.

use std::borrow::Borrow;
use std::ops::Range;

/// Find `target` in the ascending slice `sorted`, optionally restricted to
/// `window` (half-open, clamped to the slice bounds).
///
/// Returns the index of a matching element, or `None` when `target` is not
/// present inside the window. With duplicate elements any matching index may
/// be returned. Runs in O(log n); an unsorted slice gives unspecified (but
/// memory-safe) results.
pub fn binary_search<T, Q>(sorted: &[T], target: &Q, window: Option<Range<usize>>) -> Option<usize>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let hi = window
        .as_ref()
        .map_or(sorted.len(), |w| w.end.min(sorted.len()));
    let lo = window.map_or(0, |w| w.start.min(hi));

    sorted[lo..hi]
        .binary_search_by(|candidate| candidate.borrow().cmp(target))
        .ok()
        .map(|offset| lo + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_finds_present_words() {
        let a = words(&["abound", "bliss", "good", "great", "zeal"]);
        for (i, w) in a.iter().enumerate() {
            assert_eq!(binary_search(&a, w.as_str(), None), Some(i));
        }
    }

    #[test]
    fn test_absent_word_is_none() {
        let a = words(&["abound", "bliss", "good"]);
        assert_eq!(binary_search(&a, "aaa", None), None);
        assert_eq!(binary_search(&a, "fine", None), None);
        assert_eq!(binary_search(&a, "zzz", None), None);
    }

    #[test]
    fn test_empty_slice() {
        let a: Vec<String> = Vec::new();
        assert_eq!(binary_search(&a, "good", None), None);
    }

    #[test]
    fn test_window_limits_search() {
        let a = words(&["a", "b", "c", "d", "e"]);
        assert_eq!(binary_search(&a, "b", Some(1..3)), Some(1));
        assert_eq!(binary_search(&a, "d", Some(1..3)), None);
        assert_eq!(binary_search(&a, "a", Some(1..5)), None);
    }

    #[test]
    fn test_window_is_clamped() {
        let a = words(&["a", "b", "c"]);
        assert_eq!(binary_search(&a, "c", Some(0..100)), Some(2));
        assert_eq!(binary_search(&a, "c", Some(50..100)), None);
        assert_eq!(binary_search(&a, "b", Some(2..1)), None);
    }

    #[test]
    fn test_matches_linear_scan_on_random_input() {
        let mut rng = rand::rng();
        let alphabet = ['a', 'b', 'c', 'd'];
        let random_word = |rng: &mut rand::rngs::ThreadRng| -> String {
            let len = rng.random_range(1..=3);
            (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect()
        };

        for _ in 0..500 {
            let len = rng.random_range(0..40);
            let mut a: Vec<String> = (0..len).map(|_| random_word(&mut rng)).collect();
            a.sort();
            let x = random_word(&mut rng);

            let linear = a.iter().any(|w| *w == x);
            match binary_search(&a, x.as_str(), None) {
                Some(i) => {
                    assert!(linear, "found {x:?} that linear scan missed");
                    assert_eq!(a[i], x);
                }
                None => assert!(!linear, "missed {x:?} present in {a:?}"),
            }
        }
    }

    #[test]
    fn test_windowed_matches_linear_scan_on_random_input() {
        let mut rng = rand::rng();
        for _ in 0..300 {
            let len = rng.random_range(0..30);
            let mut a: Vec<u32> = (0..len).map(|_| rng.random_range(0..20)).collect();
            a.sort();
            let lo = rng.random_range(0..=len);
            let hi = rng.random_range(lo..=len);
            let x = rng.random_range(0..20);

            let linear = a[lo..hi].contains(&x);
            match binary_search(&a, &x, Some(lo..hi)) {
                Some(i) => {
                    assert!(linear);
                    assert!((lo..hi).contains(&i));
                    assert_eq!(a[i], x);
                }
                None => assert!(!linear),
            }
        }
    }
}
