//! Pieces tests - rotation tables and their cycle order

use blockfall::core::{get_shape, pieces, rotation_count};
use blockfall::types::PieceKind;

#[test]
fn rotation_state_counts() {
    let counts: Vec<u8> = PieceKind::ALL.iter().map(|&k| rotation_count(k)).collect();
    // I J L O S T Z
    assert_eq!(counts, vec![2, 4, 4, 1, 2, 4, 2]);
}

#[test]
fn every_state_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        for r in 0..rotation_count(kind) {
            let shape = get_shape(kind, r);
            for i in 0..4 {
                for j in i + 1..4 {
                    assert_ne!(shape[i], shape[j], "{kind:?} rotation {r}");
                }
            }
        }
    }
}

#[test]
fn rotation_wraps_back_to_spawn() {
    for kind in PieceKind::ALL {
        let mut r = 0;
        for _ in 0..rotation_count(kind) {
            r = pieces::next_rotation(kind, r);
        }
        assert_eq!(r, 0, "{kind:?}");
        assert_eq!(get_shape(kind, rotation_count(kind)), pieces::get_spawn_shape(kind));
    }
}

#[test]
fn spawn_shapes_include_the_pivot() {
    for kind in PieceKind::ALL {
        assert!(pieces::get_spawn_shape(kind).contains(&(0, 0)), "{kind:?}");
    }
}

#[test]
fn i_piece_states() {
    assert_eq!(get_shape(PieceKind::I, 0), [(-1, 0), (0, 0), (1, 0), (2, 0)]);
    assert_eq!(get_shape(PieceKind::I, 1), [(0, -1), (0, 0), (0, 1), (0, 2)]);
}
