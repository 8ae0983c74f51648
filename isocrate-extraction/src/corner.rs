//! Corner numbering shared by the cell, tetrahedron and case tables
//!
//! A cell corner at offset `(x, y, z)` with each component in `{0, 1}` has
//! local index `4z + 2y + x`. The tetrahedron decomposition is written against
//! this numbering, so the two must change together.

/// Offset of a cell corner from the cell origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerOffset {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl CornerOffset {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Local index in `0..8`
    #[inline]
    pub const fn local_index(self) -> usize {
        4 * self.z + 2 * self.y + self.x
    }

    /// Inverse of [`CornerOffset::local_index`]
    #[inline]
    pub const fn from_local_index(index: usize) -> Self {
        Self::new(index & 1, (index >> 1) & 1, (index >> 2) & 1)
    }
}

/// All eight corners, ordered by local index
pub const CORNER_OFFSETS: [CornerOffset; 8] = [
    CornerOffset::new(0, 0, 0),
    CornerOffset::new(1, 0, 0),
    CornerOffset::new(0, 1, 0),
    CornerOffset::new(1, 1, 0),
    CornerOffset::new(0, 0, 1),
    CornerOffset::new(1, 0, 1),
    CornerOffset::new(0, 1, 1),
    CornerOffset::new(1, 1, 1),
];
