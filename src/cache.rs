//! Transposition cache: a canonical 32-byte fingerprint of the state at
//! trick boundaries, keyed per trump, with NS/EW orientation flipping so
//! both partnerships' queries can share one stored entry.

use std::collections::HashMap;

use super::state::DealState;
use super::types::*;

/// A single scored candidate: the card played, and the NS trick count
/// achieved from this state if it is played (§4.4 step 5/6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub card: usize,
    pub tricks: usize,
}

/// The 32-byte fingerprint: the four hands' card-sets, 2 bytes/suit, hands
/// written starting from the current leader so that two states with the
/// same relative shape collide regardless of absolute compass seat.
pub type CacheKey = [u8; 32];

pub fn cache_key(state: &DealState) -> CacheKey {
    let mut key = [0u8; 32];
    let leader = state.leader();
    let hands = state.hands();
    for i in 0..NUM_SIDES {
        let side = rotate(leader, i);
        let hand = hands.hand(side);
        for suit in 0..NUM_SUITS {
            let bits = hand.suit_bits(suit).to_le_bytes();
            let offset = i * 8 + suit * 2;
            key[offset] = bits[0];
            key[offset + 1] = bits[1];
        }
    }
    key
}

/// Only trick-boundary states with at least 3 cards left per hand are worth
/// hashing; smaller subtrees are cheaper to recompute than to look up.
pub fn is_cacheable(state: &DealState) -> bool {
    state.is_first_of_trick() && state.max_tricks() >= 3
}

struct Entry {
    /// True if the stored move list was computed with an NS side on move.
    root_is_ns: bool,
    /// Sorted ascending by `tricks`, as computed from `root_is_ns`'s vantage.
    moves: Vec<ScoredMove>,
}

/// Per-trump slots (Club, Diamond, Heart, Spade, NoTrump) for one key.
type TrumpSlots = [Option<Entry>; NUM_SUITS + 1];

/// Maps a canonical key to per-trump cached move lists. Grows for the
/// duration of a solve (or a whole deal, at the caller's discretion); there
/// is no eviction.
#[derive(Default)]
pub struct TranspositionCache {
    entries: HashMap<CacheKey, TrumpSlots>,
}

impl TranspositionCache {
    pub fn new() -> Self {
        TranspositionCache {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the move list for `state`'s key/trump, from the vantage of
    /// whichever side is currently on move. Flips a cross-partnership entry
    /// per §4.6's NS/EW symmetry: each move's `tricks` becomes
    /// `t_max - tricks` and the list order is reversed.
    pub fn lookup(&self, state: &DealState) -> Option<Vec<ScoredMove>> {
        let key = cache_key(state);
        let slot = self.entries.get(&key)?[state.trump()].as_ref()?;
        let mover_is_ns = is_ns(state.current_player());
        if slot.root_is_ns == mover_is_ns {
            Some(slot.moves.clone())
        } else {
            let t_max = state.max_tricks();
            Some(
                slot.moves
                    .iter()
                    .rev()
                    .map(|m| ScoredMove {
                        card: m.card,
                        tricks: t_max - m.tricks,
                    })
                    .collect(),
            )
        }
    }

    /// Store a freshly-enumerated, ascending-sorted move list for `state`.
    pub fn insert(&mut self, state: &DealState, moves: Vec<ScoredMove>) {
        let key = cache_key(state);
        let mover_is_ns = is_ns(state.current_player());
        let slots = self.entries.entry(key).or_insert_with(Default::default);
        slots[state.trump()] = Some(Entry {
            root_is_ns: mover_is_ns,
            moves,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card_of;
    use crate::hands::Hands;

    /// Each side holds 3 cards, all in a distinct suit, so hands stay disjoint.
    fn three_card_hands() -> Hands {
        let mut hands = Hands::new();
        for side in 0..NUM_SIDES {
            let suit = side; // CLUB..SPADE line up 1:1 with NORTH..WEST here
            hands.hand_mut(side).add(card_of(suit, TWO));
            hands.hand_mut(side).add(card_of(suit, SIX));
            hands.hand_mut(side).add(card_of(suit, TEN));
        }
        hands
    }

    fn one_card_hands() -> Hands {
        let mut hands = Hands::new();
        for side in 0..NUM_SIDES {
            hands.hand_mut(side).add(card_of(side, ACE));
        }
        hands
    }

    #[test]
    fn test_cacheable_gate() {
        let state = DealState::new(three_card_hands(), NOTRUMP, NORTH);
        assert!(is_cacheable(&state));

        let short_state = DealState::new(one_card_hands(), NOTRUMP, NORTH);
        assert!(!is_cacheable(&short_state));
    }

    #[test]
    fn test_insert_and_lookup_same_orientation() {
        let state = DealState::new(three_card_hands(), NOTRUMP, NORTH);
        let mut cache = TranspositionCache::new();
        assert!(cache.lookup(&state).is_none());

        let moves = vec![
            ScoredMove { card: 1, tricks: 0 },
            ScoredMove { card: 2, tricks: 1 },
        ];
        cache.insert(&state, moves.clone());
        let found = cache.lookup(&state).expect("should hit");
        assert_eq!(found.len(), moves.len());
        assert_eq!(found[0].tricks, 0);
        assert_eq!(found[1].tricks, 1);
    }

    #[test]
    fn test_ew_flip_on_ns_entry() {
        // Four distinct single-suit hands, assigned to North.. clockwise.
        let mut ns_hands = Hands::new();
        for (side, suit) in (NORTH..=WEST).zip(0..NUM_SUITS) {
            ns_hands.hand_mut(side).add(card_of(suit, TWO));
            ns_hands.hand_mut(side).add(card_of(suit, SIX));
            ns_hands.hand_mut(side).add(card_of(suit, TEN));
        }
        let ns_state = DealState::new(ns_hands, NOTRUMP, NORTH);

        // Same relative arrangement, rotated one seat so East (EW) leads;
        // the canonical key (relative to the leader) is identical.
        let mut ew_hands = Hands::new();
        for side in NORTH..=WEST {
            *ew_hands.hand_mut(next_side(side)) = ns_hands.hand(side);
        }
        let ew_state = DealState::new(ew_hands, NOTRUMP, EAST);
        assert_eq!(cache_key(&ns_state), cache_key(&ew_state));
        assert!(is_ns(ns_state.current_player()));
        assert!(!is_ns(ew_state.current_player()));

        let mut cache = TranspositionCache::new();
        let t_max = ns_state.max_tricks();
        let moves = vec![
            ScoredMove { card: 1, tricks: 0 },
            ScoredMove { card: 2, tricks: t_max },
        ];
        cache.insert(&ns_state, moves);

        let flipped = cache.lookup(&ew_state).expect("should hit via flip");
        assert_eq!(flipped[0].card, 2);
        assert_eq!(flipped[0].tricks, 0);
        assert_eq!(flipped[1].card, 1);
        assert_eq!(flipped[1].tricks, t_max);
    }
}
