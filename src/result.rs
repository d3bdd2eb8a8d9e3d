//! The result driver: iterates the 4x5 (leader x trump) matrix and invokes
//! the search engine, sharing one transposition cache across all 20 solves
//! for a deal (§4.6 Eviction: "or, at the implementer's choice, the
//! duration of a deal").

use super::cache::TranspositionCache;
use super::deal::ResultMatrix;
use super::search::solve;
use super::state::DealState;
use super::types::*;

/// Opening leaders, row order of the result matrix.
const LEADERS: [Side; NUM_SIDES] = [NORTH, EAST, SOUTH, WEST];

/// Trump candidates, column order of the result matrix.
const TRUMPS: [Suit; NUM_SUITS + 1] = [CLUB, DIAMOND, HEART, SPADE, NOTRUMP];

/// Solve all 20 (leader, trump) combinations for the deal carried by
/// `base`'s hands, ignoring `base`'s own leader/trump/in-progress trick —
/// each combination starts its own fresh trick from an empty board.
pub fn solve_deal(base: &DealState) -> ResultMatrix {
    let hands = *base.hands();
    let mut matrix = [[0usize; NUM_SUITS + 1]; NUM_SIDES];
    let mut cache = TranspositionCache::new();

    for (row, &leader) in LEADERS.iter().enumerate() {
        for (col, &trump) in TRUMPS.iter().enumerate() {
            let state = DealState::new(hands, trump, leader);
            matrix[row][col] = solve(&state, 0, 0, &mut cache);
        }
    }

    matrix
}

/// Compare a computed matrix against an oracle, returning the first
/// (leader, trump) position that differs, if any (§8's closing paragraph).
pub fn first_mismatch(computed: &ResultMatrix, oracle: &ResultMatrix) -> Option<(Side, Suit)> {
    for (row, &leader) in LEADERS.iter().enumerate() {
        for (col, &trump) in TRUMPS.iter().enumerate() {
            if computed[row][col] != oracle[row][col] {
                return Some((leader, trump));
            }
        }
    }
    None
}
