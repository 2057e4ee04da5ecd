// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finding a Pythagorean triple with a given perimeter.
//!
//! Every Pythagorean triple is k times a primitive one, so a triple summing
//! to `n` exists exactly when some primitive triple's sum divides `n`.
//!
//! When several primitives qualify (n = 60 is the first such case: 12 and
//! 30 both divide it) the answer with the smallest `a` is returned. That is
//! also the first answer the brute-force search meets, so the two searches
//! agree on every input.

use crate::triples::{generate_primitive_triples, Triple};

/// Scale a primitive triple up to perimeter `target`, if its sum divides it.
pub fn scale_to_sum(triple: Triple, target: u64) -> Option<Triple> {
    let sum = triple.checked_sum()?;
    if sum == 0 || target == 0 || target % sum != 0 {
        return None;
    }
    triple.scaled(target / sum)
}

/// Find a triple (a, b, c) with a + b + c == n, or `None` if none exists.
///
/// Every primitive triple with sum ≤ n is examined.
///
/// # Example
///
/// ```
/// use euler_search::triples::{triple_with_target_sum, Triple};
///
/// assert_eq!(triple_with_target_sum(12), Some(Triple::new(3, 4, 5)));
/// assert_eq!(triple_with_target_sum(11), None);
/// ```
pub fn triple_with_target_sum(n: u64) -> Option<Triple> {
    find_scaled(generate_primitive_triples(n), n)
}

/// Best multiple of any primitive in `primitives` with perimeter `target`.
///
/// Consumes the whole iterator. Lets a caller keep hold of the traversal
/// (for its counters) while searching it.
pub fn find_scaled<I>(primitives: I, target: u64) -> Option<Triple>
where
    I: IntoIterator<Item = Triple>,
{
    primitives
        .into_iter()
        .filter_map(|primitive| scale_to_sum(primitive, target))
        .min_by_key(|triple| triple.a)
}

/// O(n²) search over (a, b), with c fixed by the perimeter.
///
/// The smallest triple is (3, 4, 5), so `a` starts at 3. For each `a`, `b`
/// walks up from a + 1 until a² + b² passes c², or until c would no longer
/// be larger than b.
pub fn brute_force_triple_with_sum(n: u64) -> Option<Triple> {
    for a in 3..n / 3 {
        let mut b = a + 1;
        while a + 2 * b < n {
            let c = n - a - b;
            let (a2, b2, c2) = (
                (a as u128).pow(2),
                (b as u128).pow(2),
                (c as u128).pow(2),
            );
            if a2 + b2 == c2 {
                return Some(Triple::new(a, b, c));
            }
            if a2 + b2 > c2 {
                break;
            }
            b += 1;
        }
    }
    None
}
