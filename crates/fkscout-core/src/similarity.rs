//! Gestalt string similarity (Ratcliff/Obershelp).
//!
//! The score is `2 * M / T * 100` where `M` is the total number of matching
//! characters found by recursively taking the longest common substring and
//! recursing into the unmatched slices on either side, and `T` is the
//! combined length of both strings. This is sequence matching, not edit
//! distance; the default acceptance threshold elsewhere in the crate is
//! calibrated against this exact formula.

/// Similarity between two strings as an integer ratio in `0..=100`.
///
/// Comparison is case-sensitive; callers that want case-insensitive matching
/// lowercase both sides first. Two empty strings are considered identical.
pub fn ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }

    let matches = matching_chars(&a, &b);
    // Round half to even: half-away rounding would flip accept/reject for
    // scores landing exactly on the .5 boundary at the threshold.
    div_round_half_even(200 * matches, total)
}

/// Total matched characters: longest common substring plus recursion into
/// the unmatched left and right slices.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_substring(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common substring as `(start_in_a, start_in_b, length)`.
///
/// Ties resolve to the earliest start in `a`, then the earliest in `b`, so
/// the overall match total is deterministic.
fn longest_common_substring(a: &[char], b: &[char]) -> (usize, usize, usize) {
    if a.is_empty() || b.is_empty() {
        return (0, 0, 0);
    }

    let mut best = (0, 0, 0);
    // prev[j + 1] = length of the common substring ending at a[i - 1], b[j]
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                curr[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Integer division rounding half to even, exact in integer arithmetic.
fn div_round_half_even(numerator: usize, denominator: usize) -> u32 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    let rounded = match (2 * remainder).cmp(&denominator) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => {
            if quotient % 2 == 0 {
                quotient
            } else {
                quotient + 1
            }
        }
    };

    rounded as u32
}
