//! Triangle table for the sixteen tetrahedron cases

/// A tetrahedron edge as a pair of local corner indices `0..4`
pub type TetraEdge = (usize, usize);

/// One triangle, as the three crossed edges its vertices lie on
pub type EdgeTriangle = [TetraEdge; 3];

/// Geometry emitted for one case code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseEntry {
    pub triangles: &'static [EdgeTriangle],
    /// Swap the last two vertices of every triangle
    pub inverted: bool,
}

impl CaseEntry {
    const fn empty() -> Self {
        Self {
            triangles: &[],
            inverted: false,
        }
    }

    const fn new(triangles: &'static [EdgeTriangle], inverted: bool) -> Self {
        Self {
            triangles,
            inverted,
        }
    }
}

// Complementary codes k and 15 - k cut the same edges. Triangles are listed
// for the lower code; the upper code reuses them inverted.
const LONE_0: &[EdgeTriangle] = &[[(0, 1), (0, 3), (0, 2)]];
const LONE_1: &[EdgeTriangle] = &[[(1, 0), (1, 2), (1, 3)]];
const LONE_2: &[EdgeTriangle] = &[[(2, 3), (2, 1), (2, 0)]];
const LONE_3: &[EdgeTriangle] = &[[(3, 1), (3, 0), (3, 2)]];
const PAIR_01: &[EdgeTriangle] = &[
    [(1, 2), (1, 3), (0, 3)],
    [(1, 2), (0, 3), (0, 2)],
];
const PAIR_02: &[EdgeTriangle] = &[
    [(2, 1), (0, 1), (0, 3)],
    [(2, 3), (2, 1), (0, 3)],
];
const PAIR_12: &[EdgeTriangle] = &[
    [(2, 0), (1, 3), (1, 0)],
    [(2, 0), (2, 3), (1, 3)],
];

/// Case code to geometry. Triangles face the side whose values exceed the iso value.
pub static CASE_TABLE: [CaseEntry; 16] = [
    CaseEntry::empty(),
    CaseEntry::new(LONE_0, false),
    CaseEntry::new(LONE_1, false),
    CaseEntry::new(PAIR_01, false),
    CaseEntry::new(LONE_2, false),
    CaseEntry::new(PAIR_02, false),
    CaseEntry::new(PAIR_12, false),
    CaseEntry::new(LONE_3, false),
    CaseEntry::new(LONE_3, true),
    CaseEntry::new(PAIR_12, true),
    CaseEntry::new(PAIR_02, true),
    CaseEntry::new(LONE_2, true),
    CaseEntry::new(PAIR_01, true),
    CaseEntry::new(LONE_1, true),
    CaseEntry::new(LONE_0, true),
    CaseEntry::empty(),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn is_above(code: usize, corner: usize) -> bool {
        code & (1 << corner) != 0
    }

    #[test]
    fn test_trivial_cases_are_empty() {
        assert!(CASE_TABLE[0].triangles.is_empty());
        assert!(CASE_TABLE[15].triangles.is_empty());
    }

    #[test]
    fn test_triangle_count_matches_bit_count() {
        for code in 1..15usize {
            let expected = if code.count_ones() == 2 { 2 } else { 1 };
            assert_eq!(CASE_TABLE[code].triangles.len(), expected, "case {}", code);
        }
    }

    #[test]
    fn test_complements_share_edges_with_flipped_winding() {
        for code in 1..8usize {
            let lower = CASE_TABLE[code];
            let upper = CASE_TABLE[15 - code];
            assert_eq!(lower.triangles, upper.triangles);
            assert!(!lower.inverted);
            assert!(upper.inverted);
        }
    }

    #[test]
    fn test_every_listed_edge_is_crossed() {
        for (code, entry) in CASE_TABLE.iter().enumerate() {
            for triangle in entry.triangles {
                for &(a, b) in triangle {
                    assert_ne!(
                        is_above(code, a),
                        is_above(code, b),
                        "case {} lists uncrossed edge ({}, {})",
                        code,
                        a,
                        b
                    );
                }
            }
        }
    }
}
