//! The search engine: negamax with alpha/beta-equivalent pruning,
//! rank-adjacency (equivalence) pruning, and transposition-cache
//! integration.

use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;

use super::cache::{ScoredMove, TranspositionCache};
use super::cards::{rank_of, suit_of};
use super::state::DealState;
use super::types::*;

/// Emit a `trace!` progress line every this many recursion entries. An
/// implementation detail; no test may depend on the exact value.
const PROGRESS_INTERVAL: u64 = 100_000;

static RECURSION_ENTRIES: AtomicU64 = AtomicU64::new(0);

fn count_entry() {
    let n = RECURSION_ENTRIES.fetch_add(1, Ordering::Relaxed) + 1;
    if n % PROGRESS_INTERVAL == 0 {
        trace!("solve: {n} recursion entries");
    }
}

/// Solve `state` for the NS trick count under optimal play by both sides,
/// given that `alpha_ns` NS tricks and `alpha_ew` EW tricks are already
/// guaranteed on a sibling branch. Consults and populates `cache`.
///
/// Returns the NS trick count from this state (never the mover's own
/// trick count — NS always maximizes, EW always minimizes, so no sign
/// flip is needed at the call site).
pub fn solve(
    state: &DealState,
    mut alpha_ns: usize,
    mut alpha_ew: usize,
    cache: &mut TranspositionCache,
) -> usize {
    count_entry();

    if state.is_terminal() {
        return 0;
    }

    let player = state.current_player();
    let is_ns_player = is_ns(player);
    let t_max = state.max_tricks();
    let last = state.is_last_of_trick();

    let cacheable = super::cache::is_cacheable(state);
    if cacheable {
        if let Some(cached) = cache.lookup(state) {
            return finish(cached, is_ns_player);
        }
    }

    let candidates = state.available_moves();
    let mut scored: Vec<ScoredMove> = Vec::with_capacity(candidates.len());

    for (i, &m) in candidates.iter().enumerate() {
        // Adjacency prune: m is interchangeable with its immediate
        // predecessor if both belong to the mover's hand in the same suit
        // at consecutive ranks (§4.5).
        if i > 0 && is_rank_adjacent(candidates[i - 1], m) {
            let tricks = scored[i - 1].tricks;
            scored.push(ScoredMove { card: m, tricks });
            continue;
        }

        let mut next = *state;
        let winner = next.make_move(m);
        let mut tricks;

        if last {
            let trick_to_ns = is_ns(winner);
            if trick_to_ns {
                if alpha_ew >= t_max {
                    scored.push(ScoredMove { card: m, tricks: t_max });
                    continue;
                }
                tricks = 1;
                alpha_ns = alpha_ns.saturating_sub(1);
            } else {
                if alpha_ns >= t_max {
                    scored.push(ScoredMove { card: m, tricks: 0 });
                    continue;
                }
                tricks = 0;
                alpha_ew = alpha_ew.saturating_sub(1);
            }
        } else {
            tricks = 0;
        }

        if !next.is_terminal() {
            tricks += solve(&next, alpha_ns, alpha_ew, cache);
        }

        if last {
            if is_ns_player {
                alpha_ns = alpha_ns.max(tricks);
            } else {
                alpha_ew = alpha_ew.max(t_max - tricks);
            }
        }

        scored.push(ScoredMove { card: m, tricks });
    }

    scored.sort_unstable_by_key(|sm| sm.tricks);

    if cacheable {
        cache.insert(state, scored.clone());
    }

    finish(scored, is_ns_player)
}

fn finish(scored: Vec<ScoredMove>, is_ns_player: bool) -> usize {
    if is_ns_player {
        scored.last().map(|m| m.tricks).unwrap_or(0)
    } else {
        scored.first().map(|m| m.tricks).unwrap_or(0)
    }
}

/// True if `b` is the immediate successor rank of `a` within the same suit
/// — the condition under which the search treats them as interchangeable.
fn is_rank_adjacent(a: usize, b: usize) -> bool {
    suit_of(a) == suit_of(b) && rank_of(b) == rank_of(a) + 1
}
