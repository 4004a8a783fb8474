//! Enumeration of distinct letter arrangements.
//!
//! For a pool of letters and a target length `L`, an arrangement is an ordered
//! string of `L` letters that uses each letter at most as often as the pool
//! holds it. Repeated letters do not produce repeated strings: the pool
//! "аа" has exactly one arrangement of length 2.
//!
//! The number of arrangements grows like a falling factorial of the pool size,
//! so callers should size the work with [`count_arrangements`] before
//! enumerating with [`for_each_arrangement`].

use super::letter_pool::LetterPool;

/// Binomial coefficient. Saturates at `u128::MAX` instead of overflowing.
fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = match result.checked_mul((n - i) as u128) {
            Some(product) => product / (i + 1) as u128,
            None => return u128::MAX,
        };
    }
    result
}

/// Number of distinct arrangements of `length` letters drawn from `pool`.
///
/// Counts by building sequences letter by letter: placing `k` copies of a new
/// letter into a sequence that grows from `j` to `j + k` positions can be done
/// in `C(j + k, k)` ways.
pub fn count_arrangements(pool: &LetterPool, length: usize) -> u128 {
    if length > pool.len() {
        return 0;
    }
    let mut ways = vec![0u128; length + 1];
    ways[0] = 1;
    for (_, available) in pool.distinct() {
        let mut next = vec![0u128; length + 1];
        for (j, &w) in ways.iter().enumerate() {
            if w == 0 {
                continue;
            }
            for k in 0..=available.min(length - j) {
                next[j + k] = next[j + k].saturating_add(w.saturating_mul(binomial(j + k, k)));
            }
        }
        ways = next;
    }
    ways[length]
}

/// Calls `visit` once for every distinct arrangement of `length` letters,
/// in lexicographic order of the pool's letters.
pub fn for_each_arrangement<F>(pool: &LetterPool, length: usize, mut visit: F)
where
    F: FnMut(&str),
{
    if length == 0 || length > pool.len() {
        return;
    }
    let letters: Vec<char> = pool.distinct().map(|(c, _)| c).collect();
    let mut remaining: Vec<usize> = pool.distinct().map(|(_, n)| n).collect();
    let mut current = String::with_capacity(length * 2);
    extend(&letters, &mut remaining, length, &mut current, &mut visit);
}

fn extend<F>(letters: &[char], remaining: &mut [usize], left: usize, current: &mut String, visit: &mut F)
where
    F: FnMut(&str),
{
    if left == 0 {
        visit(current);
        return;
    }
    for i in 0..letters.len() {
        if remaining[i] == 0 {
            continue;
        }
        remaining[i] -= 1;
        current.push(letters[i]);
        extend(letters, remaining, left - 1, current, visit);
        current.pop();
        remaining[i] += 1;
    }
}
