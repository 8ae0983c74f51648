//! Splitting a cell into tetrahedra and classifying them against the iso value

use crate::cell::{Cell, DataPoint};

/// Corner tuples splitting a cell into six tetrahedra without gaps or overlaps.
///
/// Every tuple is positively oriented and all six share the 2-5 diagonal.
pub const TETRAHEDRA: [[usize; 4]; 6] = [
    [0, 1, 2, 5],
    [1, 3, 2, 5],
    [3, 2, 5, 7],
    [0, 2, 4, 5],
    [6, 4, 2, 5],
    [6, 7, 5, 2],
];

/// Four corners copied out of a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetrahedron {
    pub points: [DataPoint; 4],
}

impl Tetrahedron {
    pub fn from_cell(cell: &Cell, corners: [usize; 4]) -> Self {
        Self {
            points: corners.map(|corner| cell.points[corner]),
        }
    }

    /// 4-bit case code: bit `i` is set iff corner `i` is strictly above `iso`.
    ///
    /// A corner equal to `iso` counts as below. The edge interpolator snaps to
    /// such a corner, which keeps a crossed edge from ever having two equal
    /// endpoint values.
    pub fn case_code(&self, iso: f32) -> usize {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, point)| point.value > iso)
            .fold(0, |code, (i, _)| code | (1 << i))
    }
}

impl Cell {
    /// The six tetrahedra of this cell, in table order
    pub fn tetrahedra(&self) -> impl Iterator<Item = Tetrahedron> + '_ {
        TETRAHEDRA
            .iter()
            .map(move |&corners| Tetrahedron::from_cell(self, corners))
    }
}
