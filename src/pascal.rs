//! Pascal's triangle construction (SWEA 2005).

/// A triangle: row `r` (0-indexed) holds `r + 1` cells.
pub type Triangle = Vec<Vec<u64>>;

/// First `rows` rows of Pascal's triangle, built row by row.
///
/// Each row starts and ends with 1; interior cell `c` of row `r` is
/// `tri[r-1][c-1] + tri[r-1][c]`. `rows == 0` yields an empty triangle.
pub fn generate(rows: usize) -> Triangle {
    let mut tri: Triangle = Vec::with_capacity(rows);
    if rows == 0 {
        return tri;
    }
    tri.push(vec![1]);
    for r in 1..rows {
        let mut row = Vec::with_capacity(r + 1);
        row.push(1);
        for c in 1..r {
            row.push(tri[r - 1][c - 1] + tri[r - 1][c]);
        }
        row.push(1);
        tri.push(row);
    }
    tri
}

/// Variant: allocate the full triangle filled with 1s, then overwrite the
/// interior cells in place. Same output as [`generate`].
pub fn generate_prefilled(rows: usize) -> Triangle {
    let mut tri: Triangle = (1..=rows).map(|len| vec![1u64; len]).collect();
    for r in 2..rows {
        let (above, rest) = tri.split_at_mut(r);
        let prev = &above[r - 1];
        for c in 1..r {
            rest[0][c] = prev[c - 1] + prev[c];
        }
    }
    tri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_rows() {
        assert_eq!(
            generate(4),
            vec![vec![1], vec![1, 1], vec![1, 2, 1], vec![1, 3, 3, 1]]
        );
    }

    #[test]
    fn zero_rows_is_empty() {
        assert!(generate(0).is_empty());
        assert!(generate_prefilled(0).is_empty());
    }

    #[test]
    fn edges_are_one() {
        let tri = generate(12);
        for (r, row) in tri.iter().enumerate() {
            assert_eq!(row.len(), r + 1);
            assert_eq!(row[0], 1);
            assert_eq!(row[r], 1);
        }
    }

    #[test]
    fn interior_cells_sum_the_two_above() {
        let tri = generate(12);
        for r in 1..tri.len() {
            for c in 1..r {
                assert_eq!(tri[r][c], tri[r - 1][c - 1] + tri[r - 1][c]);
            }
        }
    }

    #[test]
    fn rows_are_symmetric() {
        let tri = generate(16);
        for row in &tri {
            let mut rev = row.clone();
            rev.reverse();
            assert_eq!(*row, rev);
        }
    }

    #[test]
    fn row_sums_are_powers_of_two() {
        let tri = generate(20);
        for (r, row) in tri.iter().enumerate() {
            assert_eq!(row.iter().sum::<u64>(), 1 << r);
        }
    }

    #[test]
    fn variants_agree() {
        for rows in 0..=16 {
            assert_eq!(generate(rows), generate_prefilled(rows));
        }
    }
}
