//! Finish phase: exhaustive search over short literal sequences.

use apiary_core::{Candidate, Cube, MoveToken};

/// Looks for at most `depth` literal moves that solve `candidate`, shortest
/// first.
///
/// Whole-cube rotations never change a relative score, so they are not
/// tried; neither is a turn repeated back to back. Returns a clone of
/// `candidate` with the found moves appended to its history.
pub fn finish(candidate: &Candidate, depth: usize) -> Option<Candidate> {
    let path = (0..=depth).find_map(|limit| {
        let mut path = Vec::with_capacity(limit);
        search(candidate.cube(), limit, &mut path).then_some(path)
    })?;

    let mut finished = candidate.clone();
    for token in path {
        finished.apply_move(token);
    }
    Some(finished)
}

fn search(cube: &Cube, remaining: usize, path: &mut Vec<MoveToken>) -> bool {
    if remaining == 0 {
        return cube.is_solved();
    }
    let previous = path.last().map(|token| token.turn);
    for token in MoveToken::ALL {
        if token.turn.layer().is_none() || Some(token.turn) == previous {
            continue;
        }
        let mut next = cube.clone();
        next.apply(token);
        path.push(token);
        if search(&next, remaining - 1, path) {
            return true;
        }
        path.pop();
    }
    false
}
