/// Builds the longest common prefix array with Kasai's algorithm
///
/// The suffixes are visited in text order. The common prefix of a suffix with its successor in
/// the suffix array is at least the previous one minus 1, so the match length is carried over
/// between positions and the total work stays O(n).
///
/// # Arguments
/// * `text` - The text with sentinel
/// * `suffix_array` - The suffix array of `text`
/// * `rank_of` - The inverse of `suffix_array`
///
/// # Returns
///
/// Returns the LCP array where entry `i` is the length of the common prefix of the suffixes at
/// rank `i` and `i + 1`. The last entry has no successor and is always 0.
pub fn build_lcp(text: &[u8], suffix_array: &[usize], rank_of: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0; n];
    let mut matched: usize = 0;

    for i in 0..n {
        let rank = rank_of[i];
        if rank == n - 1 {
            matched = 0;
            continue;
        }

        let successor = suffix_array[rank + 1];
        while i + matched < n
            && successor + matched < n
            && text[i + matched] == text[successor + matched]
        {
            matched += 1;
        }
        lcp[rank] = matched;
        matched = matched.saturating_sub(1);
    }

    lcp
}
