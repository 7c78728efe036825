//! Precomputed destination tables for the fixed-offset pieces.
//!
//! Each entry lists the on-board squares reachable from a square before
//! occupancy is considered. Bounds are checked on (row, column) so no
//! offset wraps across a board edge.

use once_cell::sync::Lazy;

use super::{Square, SquareSet};

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn build_table(deltas: &[(i8, i8)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for from in Square::all() {
        table[from.index()] = deltas
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect();
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> =
    Lazy::new(|| build_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| build_table(&KING_DELTAS));
