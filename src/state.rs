//! Deal state: four hands, the trick in progress, and trick-winner resolution.

use super::cards::*;
use super::hands::Hands;
use super::types::*;

/// The 0..3 plays of the trick currently in progress, in play order.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Trick {
    cards: [usize; 4],
    len: usize,
}

impl Trick {
    pub const fn new() -> Self {
        Trick {
            cards: [0; 4],
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn plays(&self) -> &[usize] {
        &self.cards[..self.len]
    }

    /// The suit of the trick's first play, or `None` before any card is led.
    pub fn lead_suit(&self) -> Option<Suit> {
        if self.len == 0 {
            None
        } else {
            Some(suit_of(self.cards[0]))
        }
    }

    fn push(&mut self, card: usize) {
        self.cards[self.len] = card;
        self.len += 1;
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}

/// The aggregate game state the search operates over: four hands, trump,
/// the side to lead the next trick (or who led the current one), and the
/// trick in progress.
///
/// Cheap to clone (a handful of machine words); the search clones a state
/// at every branch rather than mutating and undoing in place.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DealState {
    hands: Hands,
    trump: Suit,
    leader: Side,
    trick: Trick,
}

impl DealState {
    pub fn new(hands: Hands, trump: Suit, leader: Side) -> Self {
        DealState {
            hands,
            trump,
            leader,
            trick: Trick::new(),
        }
    }

    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn leader(&self) -> Side {
        self.leader
    }

    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    /// The side whose turn it is to play next.
    #[inline]
    pub fn current_player(&self) -> Side {
        rotate(self.leader, self.trick.len())
    }

    #[inline]
    pub fn is_first_of_trick(&self) -> bool {
        self.trick.is_empty()
    }

    #[inline]
    pub fn is_last_of_trick(&self) -> bool {
        self.trick.len() == 3
    }

    /// Cards remaining in the current player's hand.
    #[inline]
    pub fn max_tricks(&self) -> usize {
        self.hands.hand(self.current_player()).size()
    }

    pub fn is_terminal(&self) -> bool {
        self.hands.all_cards().is_empty()
    }

    /// Legal plays for the current player, ascending rank within a suit,
    /// suits in fixed Club/Diamond/Heart/Spade order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.hands
            .available_moves(self.current_player(), self.trick.lead_suit())
    }

    pub fn move_legal(&self, card: usize) -> bool {
        self.hands
            .move_legal(self.current_player(), self.trick.lead_suit(), card)
    }

    /// Play `card` for the current player. Returns the side that leads the
    /// next trick — the trick winner if this play completed a trick,
    /// otherwise the unchanged current leader.
    ///
    /// Panics if `card` is not a legal play for the current player; per the
    /// error model, a caller offering an illegal move is a programming
    /// error, not a recoverable condition.
    pub fn make_move(&mut self, card: usize) -> Side {
        assert!(
            self.move_legal(card),
            "make_move: illegal play {} by {}",
            name_of(card),
            side_name(self.current_player())
        );
        let player = self.current_player();
        self.hands.hand_mut(player).remove(card);
        self.trick.push(card);

        if self.trick.len() == 4 {
            let winner = self.trick_winner();
            self.trick.clear();
            self.leader = winner;
            winner
        } else {
            self.leader
        }
    }

    /// Resolve the winner of a completed (4-play) trick: the highest card
    /// of the lead suit, unless a trump was played, in which case the
    /// highest trump. `NoTrump` disables the trump override.
    fn trick_winner(&self) -> Side {
        let lead_suit = suit_of(self.trick.cards[0]);
        let mut best_idx = 0;
        let mut best_card = self.trick.cards[0];
        for (i, &card) in self.trick.cards.iter().enumerate().skip(1) {
            if self.beats(card, best_card, lead_suit) {
                best_card = card;
                best_idx = i;
            }
        }
        rotate(self.leader, best_idx)
    }

    /// True if `challenger` beats `incumbent` when the trick was led in `lead_suit`.
    fn beats(&self, challenger: usize, incumbent: usize, lead_suit: Suit) -> bool {
        let (c_suit, c_rank) = (suit_of(challenger), rank_of(challenger));
        let (i_suit, i_rank) = (suit_of(incumbent), rank_of(incumbent));
        let c_trump = self.trump != NOTRUMP && c_suit == self.trump;
        let i_trump = self.trump != NOTRUMP && i_suit == self.trump;
        match (c_trump, i_trump) {
            (true, false) => true,
            (false, true) => false,
            (true, true) => c_rank > i_rank,
            (false, false) => c_suit == lead_suit && (i_suit != lead_suit || c_rank > i_rank),
        }
    }

    /// Checks (I1), (I2), trick length, and (I3) for the already-played
    /// cards of the current trick, by "unplaying" them into a scratch copy
    /// of the hands and re-checking legality against the original lead suit.
    pub fn validate(&self) -> bool {
        let (n, e, s, w) = (
            self.hands.hand(NORTH),
            self.hands.hand(EAST),
            self.hands.hand(SOUTH),
            self.hands.hand(WEST),
        );
        // (I1) hands pairwise disjoint.
        let pairs = [(n, e), (n, s), (n, w), (e, s), (e, w), (s, w)];
        if pairs.iter().any(|(a, b)| !a.intersect(*b).is_empty()) {
            return false;
        }

        // (I2) hand sizes differ by at most 1; exactly 0 between tricks.
        let sizes = [n.size(), e.size(), s.size(), w.size()];
        let min = *sizes.iter().min().unwrap();
        let max = *sizes.iter().max().unwrap();
        if self.trick.is_empty() {
            if min != max {
                return false;
            }
        } else if max - min > 1 {
            return false;
        }

        if self.trick.len() > 3 {
            return false;
        }

        // (I3) for the already-played cards of this trick.
        if !self.trick.is_empty() {
            let lead_suit = self.trick.lead_suit();
            let mut scratch = self.hands;
            for (i, &card) in self.trick.plays().iter().enumerate() {
                let player = rotate(self.leader, i);
                scratch.hand_mut(player).add(card);
                let this_lead = if i == 0 { None } else { lead_suit };
                if !scratch.move_legal(player, this_lead, card) {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_card_hands() -> Hands {
        let mut hands = Hands::new();
        hands[NORTH].add(card_of(SPADE, ACE));
        hands[EAST].add(card_of(SPADE, KING));
        hands[SOUTH].add(card_of(SPADE, QUEEN));
        hands[WEST].add(card_of(SPADE, JACK));
        hands
    }

    #[test]
    fn test_current_player_and_derived_attrs() {
        let state = DealState::new(single_card_hands(), NOTRUMP, NORTH);
        assert_eq!(state.current_player(), NORTH);
        assert!(state.is_first_of_trick());
        assert!(!state.is_last_of_trick());
        assert_eq!(state.max_tricks(), 1);
    }

    #[test]
    fn test_make_move_full_trick_notrump() {
        let mut state = DealState::new(single_card_hands(), NOTRUMP, NORTH);
        assert_eq!(state.make_move(card_of(SPADE, ACE)), NORTH);
        assert_eq!(state.current_player(), EAST);
        assert_eq!(state.make_move(card_of(SPADE, KING)), NORTH);
        assert_eq!(state.make_move(card_of(SPADE, QUEEN)), NORTH);
        // Ace of spades wins, NoTrump in force.
        let winner = state.make_move(card_of(SPADE, JACK));
        assert_eq!(winner, NORTH);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_make_move_trump_override() {
        let mut hands = Hands::new();
        hands[NORTH].add(card_of(CLUB, ACE));
        hands[EAST].add(card_of(CLUB, KING));
        hands[SOUTH].add(card_of(CLUB, TWO));
        hands[WEST].add(card_of(SPADE, TWO)); // trump
        let mut state = DealState::new(hands, SPADE, NORTH);
        state.make_move(card_of(CLUB, ACE));
        state.make_move(card_of(CLUB, KING));
        state.make_move(card_of(CLUB, TWO));
        // West ruffs with the two of spades and wins despite being the lowest card.
        let winner = state.make_move(card_of(SPADE, TWO));
        assert_eq!(winner, WEST);
    }

    #[test]
    #[should_panic]
    fn test_make_move_illegal_panics() {
        let mut state = DealState::new(single_card_hands(), NOTRUMP, NORTH);
        state.make_move(card_of(SPADE, KING)); // North doesn't hold this card.
    }

    #[test]
    fn test_validate_disjoint_hands() {
        let state = DealState::new(single_card_hands(), NOTRUMP, NORTH);
        assert!(state.validate());

        let mut bad_hands = single_card_hands();
        bad_hands[EAST].add(card_of(SPADE, ACE)); // Duplicate with North.
        let bad_state = DealState::new(bad_hands, NOTRUMP, NORTH);
        assert!(!bad_state.validate());
    }

    #[test]
    fn test_validate_partial_trick() {
        let mut state = DealState::new(single_card_hands(), NOTRUMP, NORTH);
        state.make_move(card_of(SPADE, ACE));
        assert!(state.validate());
    }

    #[test]
    fn test_validate_mismatched_hand_sizes() {
        let mut hands = Hands::new();
        hands[NORTH].add(card_of(SPADE, ACE));
        hands[NORTH].add(card_of(HEART, ACE));
        hands[EAST].add(card_of(SPADE, KING));
        hands[SOUTH].add(card_of(SPADE, QUEEN));
        hands[WEST].add(card_of(SPADE, JACK));
        let state = DealState::new(hands, NOTRUMP, NORTH);
        assert!(!state.validate());
    }
}
