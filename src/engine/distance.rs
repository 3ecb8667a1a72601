/// Levenshtein distance between `a` and `b`.
///
/// Counts insertions, deletions and substitutions over UTF-16 code units, so
/// a character outside the Basic Multilingual Plane (most emoji) weighs two.
/// Uses two rows sized by the shorter input.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rows follow the longer string, columns the shorter one.
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_inputs() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
    }

    #[test]
    fn test_kitten_sitting() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(edit_distance("cat", "bat"), 1);
        assert_eq!(edit_distance("cat", "cats"), 1);
        assert_eq!(edit_distance("cat", "at"), 1);
        assert_eq!(edit_distance("cat", "dog"), 3);
    }

    #[test]
    fn test_counts_utf16_units() {
        // U+1F600 is a surrogate pair.
        assert_eq!(edit_distance("", "😀"), 2);
        assert_eq!(edit_distance("a", "😀"), 2);
        // Cyrillic stays in the BMP.
        assert_eq!(edit_distance("кот", "кит"), 1);
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(a in "\\PC{0,24}") {
            prop_assert_eq!(edit_distance(&a, &a), 0);
        }

        #[test]
        fn distance_is_symmetric(a in "\\PC{0,16}", b in "\\PC{0,16}") {
            prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        }

        #[test]
        fn distance_bounded_by_lengths(a in "[a-z]{0,16}", b in "[a-z]{0,16}") {
            let d = edit_distance(&a, &b);
            prop_assert!(d >= a.len().abs_diff(b.len()));
            prop_assert!(d <= a.len().max(b.len()));
        }
    }
}
