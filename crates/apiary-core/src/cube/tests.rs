//! Tests for the cube state engine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::moves::{parse_sequence, reverse_moves, MoveToken};
use crate::score::CubeScore;
use crate::test_utils::random_scramble;

fn after(notation: &str) -> Cube {
    let mut cube = Cube::solved();
    cube.apply_notation(notation).unwrap();
    cube
}

#[test]
fn test_solved_scores_zero() {
    let cube = Cube::solved();
    assert_eq!(cube.score(), CubeScore::SOLVED);
    assert!(cube.is_solved());
    for face in Face::ALL {
        assert_eq!(cube.center(face), face.home_color());
    }
}

#[test]
fn test_every_token_is_undone_by_its_inverse() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..5 {
        let start = after(&random_scramble(&mut rng, 25));
        for token in MoveToken::ALL {
            let mut cube = start.clone();
            cube.apply(token);
            cube.apply(token.inverse());
            assert_eq!(cube, start, "{token} then {}", token.inverse());
        }
    }
}

#[test]
fn test_token_orders() {
    for token in MoveToken::ALL {
        let order = if token.modifier == crate::moves::Modifier::Double { 2 } else { 4 };
        let mut cube = Cube::solved();
        for step in 1..=order {
            cube.apply(token);
            assert_eq!(cube == Cube::solved(), step == order, "{token} x{step}");
        }
    }
}

#[test]
fn test_single_face_turn_score() {
    assert_eq!(after("R").score(), CubeScore::of(4, 4));
    assert_eq!(after("U'").score(), CubeScore::of(4, 4));
    assert_eq!(after("F2").score(), CubeScore::of(4, 4));
}

#[test]
fn test_rotations_keep_cube_solved() {
    for notation in ["x", "y'", "z2", "x y z"] {
        let cube = after(notation);
        assert_ne!(cube, Cube::solved());
        assert!(cube.is_solved(), "{notation}");
    }
}

#[test]
fn test_slice_identities() {
    assert_eq!(after("M"), after("L' R x'"));
    assert_eq!(after("E"), after("U D' y'"));
    assert_eq!(after("S"), after("F' B z"));
}

#[test]
fn test_face_turns_never_move_centres() {
    let cube = after("F R U B L D F' R' U' B' L' D' F2 R2 U2 B2 L2 D2");
    for face in Face::ALL {
        assert_eq!(cube.center(face), face.home_color());
    }
}

#[test]
fn test_centres_stay_a_valid_orientation() {
    let opposite = |face: Face| match face {
        Face::Front => Face::Back,
        Face::Back => Face::Front,
        Face::Up => Face::Down,
        Face::Down => Face::Up,
        Face::Left => Face::Right,
        Face::Right => Face::Left,
    };
    let home_face = |color: Color| {
        Face::ALL
            .into_iter()
            .find(|f| f.home_color() == color)
            .unwrap()
    };

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..20 {
        let cube = after(&random_scramble(&mut rng, 40));
        let mut centres: Vec<Color> = Face::ALL.iter().map(|f| cube.center(*f)).collect();
        for face in Face::ALL {
            assert_eq!(
                home_face(cube.center(opposite(face))),
                opposite(home_face(cube.center(face)))
            );
        }
        centres.sort_by_key(|c| home_face(*c));
        centres.dedup();
        assert_eq!(centres.len(), 6);
    }
}

#[test]
fn test_scramble_then_reverse_is_solved() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..10 {
        let scramble = random_scramble(&mut rng, 30);
        let mut cube = after(&scramble);
        cube.apply_notation(&reverse_moves(&scramble).unwrap())
            .unwrap();
        assert_eq!(cube, Cube::solved(), "{scramble}");
    }
}

#[test]
fn test_score_is_bounded() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..20 {
        let score = after(&random_scramble(&mut rng, 50)).score();
        assert!(score.edges() <= 12);
        assert!(score.corners() <= 8);
    }
}

#[test]
fn test_bad_notation_leaves_cube_untouched() {
    let mut cube = after("R U");
    let before = cube.clone();
    assert!(cube.apply_notation("F F Q").is_err());
    assert_eq!(cube, before);
}

#[test]
fn test_net_layout() {
    let net = Cube::solved().to_string();
    let lines: Vec<&str> = net.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "      W W W");
    assert_eq!(lines[4], "O O O G G G R R R B B B");
    assert_eq!(lines[8], "      Y Y Y");

    // U row 2 lands on the top row of Front after F
    let turned = after("F");
    assert_eq!(turned.grid(Face::Up)[2], [Color::Orange; 3]);
    assert_eq!(turned.grid(Face::Right)[0][0], Color::White);
    assert_eq!(parse_sequence("F").unwrap().len(), 1);
}
