//! Pieces module - rotation tables for the seven kinds
//!
//! Offsets are relative to the piece pivot, x to the right and y downward.
//! Rotation is a plain index into each kind's table and wraps after the last
//! state. There are no wall kicks: a rotation either fits in place or is
//! rejected.

use crate::types::PieceKind;

/// Offset of a single mino relative to the pivot
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the pivot
pub type PieceShape = [MinoOffset; 4];

const I_ROTATIONS: [PieceShape; 2] = [
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
];

const J_ROTATIONS: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (1, -1)],
    [(0, -1), (0, 0), (0, 1), (1, 1)],
    [(-1, 0), (-1, 1), (0, 0), (1, 0)],
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
];

const L_ROTATIONS: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (-1, -1)],
    [(0, -1), (0, 0), (0, 1), (1, -1)],
    [(-1, 0), (0, 0), (1, 0), (1, 1)],
    [(0, -1), (0, 0), (0, 1), (-1, 1)],
];

// O never changes, so it has a single state.
const O_ROTATIONS: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const S_ROTATIONS: [PieceShape; 2] = [
    [(-1, 0), (0, 0), (0, -1), (1, -1)],
    [(0, -1), (0, 0), (1, 0), (1, 1)],
];

const T_ROTATIONS: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (0, -1), (1, 0)],
    [(0, -1), (0, 0), (1, 0), (0, 1)],
    [(-1, 0), (0, 0), (0, 1), (1, 0)],
    [(0, -1), (-1, 0), (0, 0), (0, 1)],
];

const Z_ROTATIONS: [PieceShape; 2] = [
    [(-1, -1), (0, -1), (0, 0), (1, 0)],
    [(1, -1), (1, 0), (0, 0), (0, 1)],
];

/// All rotation states for a kind, in cycle order.
pub fn rotations(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_ROTATIONS,
        PieceKind::J => &J_ROTATIONS,
        PieceKind::L => &L_ROTATIONS,
        PieceKind::O => &O_ROTATIONS,
        PieceKind::S => &S_ROTATIONS,
        PieceKind::T => &T_ROTATIONS,
        PieceKind::Z => &Z_ROTATIONS,
    }
}

/// Number of distinct rotation states for a kind
pub fn rotation_count(kind: PieceKind) -> u8 {
    rotations(kind).len() as u8
}

/// Index of the state after `rotation`, wrapping to 0.
pub fn next_rotation(kind: PieceKind, rotation: u8) -> u8 {
    (rotation + 1) % rotation_count(kind)
}

/// Get the shape for a kind and rotation index.
///
/// Out-of-range indices wrap, so any `u8` is accepted.
pub fn get_shape(kind: PieceKind, rotation: u8) -> PieceShape {
    let table = rotations(kind);
    table[rotation as usize % table.len()]
}

/// Shape of a freshly spawned piece (rotation 0)
pub fn get_spawn_shape(kind: PieceKind) -> PieceShape {
    get_shape(kind, 0)
}

/// Absolute board cells for a shape placed at pivot (x, y)
pub fn cells_at(shape: &PieceShape, x: i8, y: i8) -> [(i8, i8); 4] {
    shape.map(|(dx, dy)| (x + dx, y + dy))
}
