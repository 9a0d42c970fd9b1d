//! Rotating elimination over a circular queue (BOJ 2346).
//!
//! The circle is modeled as a deque of `(count, original index)` pairs with
//! the current balloon at the front. Popping the front counts as the first
//! step of a rightward walk, so a positive count `k` rotates the survivors
//! left by `k - 1`; a negative count walks leftward from the gap, rotating
//! right by `|k|`. Counts are never zero in valid input.

use std::collections::VecDeque;

/// Removal order for the given skip counts, as 1-based original positions.
///
/// Rotation amounts are reduced modulo the surviving queue length, so counts
/// larger than the circle wrap around. The result is a permutation of
/// `1..=counts.len()`.
pub fn simulate(counts: &[i64]) -> Vec<usize> {
    let mut queue: VecDeque<(i64, usize)> = counts.iter().copied().zip(1..).collect();
    let mut order = Vec::with_capacity(counts.len());

    while let Some((k, idx)) = queue.pop_front() {
        order.push(idx);
        if queue.is_empty() {
            break;
        }
        let len = queue.len();
        if k > 0 {
            queue.rotate_left((k as usize - 1) % len);
        } else {
            queue.rotate_right(k.unsigned_abs() as usize % len);
        }
    }

    order
}

/// Reference implementation: rotation as repeated move-one-end-to-the-other.
///
/// No modulo anywhere; moving an element front-to-back `len` times is the
/// identity, so oversized counts wrap naturally. Kept for cross-checking
/// [`simulate`] and for the rotation benchmark.
pub fn simulate_pop_push(counts: &[i64]) -> Vec<usize> {
    let mut queue: VecDeque<(i64, usize)> = counts.iter().copied().zip(1..).collect();
    let mut order = Vec::with_capacity(counts.len());

    while let Some((k, idx)) = queue.pop_front() {
        order.push(idx);
        if queue.is_empty() {
            break;
        }
        if k > 0 {
            for _ in 0..k - 1 {
                if let Some(front) = queue.pop_front() {
                    queue.push_back(front);
                }
            }
        } else {
            for _ in 0..-k {
                if let Some(back) = queue.pop_back() {
                    queue.push_front(back);
                }
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn judge_sample() {
        assert_eq!(simulate(&[3, 2, 1, -3, -1]), vec![1, 4, 5, 3, 2]);
    }

    #[test]
    fn mixed_signs() {
        assert_eq!(
            simulate(&[1, -3, 5, 4, -1, 2, -7]),
            vec![1, 2, 5, 4, 6, 3, 7]
        );
    }

    #[test]
    fn single_element() {
        assert_eq!(simulate(&[5]), vec![1]);
    }

    #[test]
    fn oversized_counts_wrap() {
        assert_eq!(simulate(&[10, -10, 3]), vec![1, 3, 2]);
    }

    #[test]
    fn all_negative() {
        assert_eq!(simulate(&[-1, -1, -1]), vec![1, 3, 2]);
    }

    #[test]
    fn empty_input() {
        assert!(simulate(&[]).is_empty());
    }

    #[test]
    fn pop_push_matches_fixtures() {
        for counts in [
            &[3, 2, 1, -3, -1][..],
            &[1, -3, 5, 4, -1, 2, -7][..],
            &[5][..],
            &[10, -10, 3][..],
            &[-1, -1, -1][..],
        ] {
            assert_eq!(simulate_pop_push(counts), simulate(counts));
        }
    }

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut seen = vec![false; n + 1];
        order.len() == n
            && order.iter().all(|&idx| {
                let fresh = (1..=n).contains(&idx) && !seen[idx];
                if fresh {
                    seen[idx] = true;
                }
                fresh
            })
    }

    fn arb_counts() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(
            (-20i64..=20).prop_filter("counts are nonzero", |k| *k != 0),
            1..40,
        )
    }

    proptest! {
        #[test]
        fn removal_order_is_a_permutation(counts in arb_counts()) {
            let order = simulate(&counts);
            prop_assert!(is_permutation(&order, counts.len()));
        }

        #[test]
        fn variants_agree(counts in arb_counts()) {
            prop_assert_eq!(simulate(&counts), simulate_pop_push(&counts));
        }
    }
}
