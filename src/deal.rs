//! Deal input record: the crate's one external interface (§6). Parses a
//! YAML deal record (matching the evolutionary prototype's `YAML::LoadFile`
//! driver) into a validated [`DealState`], surfacing [`SolverError::Parse`]
//! and [`SolverError::InvalidDeal`] rather than panicking on bad input.

use serde::Deserialize;

use super::cards::card_of;
use super::error::{Result, SolverError};
use super::hands::Hands;
use super::state::DealState;
use super::types::*;

/// One hand's four suit holdings, each a string of rank tokens
/// (`2`..`9`,`10`|`T`,`J`,`Q`,`K`,`A`) or `-` for a void suit.
#[derive(Debug, Clone, Deserialize)]
pub struct HandInput {
    pub c: String,
    pub d: String,
    pub h: String,
    pub s: String,
}

/// The 4x5 oracle matrix embedded in a deal record for testing: rows are
/// opening leader (N, E, S, W), columns are trump (C, D, H, S, NT).
pub type ResultMatrix = [[usize; NUM_SUITS + 1]; NUM_SIDES];

/// A raw, not-yet-validated deal record as read from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct DealInput {
    pub n: HandInput,
    pub e: HandInput,
    pub s: HandInput,
    pub w: HandInput,
    /// Trump: one of `C`,`D`,`H`,`S`,`NT`.
    pub t: String,
    /// Turn starter: the side to play first, one of `N`,`E`,`S`,`W`.
    pub ts: String,
    /// Already-played cards of the current trick, 0..3 entries, each like
    /// `KH` or `10S`.
    #[serde(default)]
    pub m: Vec<String>,
    /// Optional oracle matrix for test comparison.
    #[serde(default)]
    pub result: Option<Vec<Vec<usize>>>,
}

impl DealInput {
    /// Parse and validate this record into a [`DealState`], applying `m`'s
    /// already-played cards in order. Fails with [`SolverError::Parse`] on
    /// a malformed token and [`SolverError::InvalidDeal`] if the resulting
    /// state fails (I1)/(I2)/(I3).
    pub fn into_state(self) -> Result<DealState> {
        let mut hands = Hands::new();
        hands.hand_mut(NORTH).add_cards(parse_hand(&self.n)?);
        hands.hand_mut(EAST).add_cards(parse_hand(&self.e)?);
        hands.hand_mut(SOUTH).add_cards(parse_hand(&self.s)?);
        hands.hand_mut(WEST).add_cards(parse_hand(&self.w)?);

        let trump = str_to_trump(&self.t)
            .ok_or_else(|| SolverError::Parse(format!("invalid trump: {:?}", self.t)))?;

        let turn_starter = first_char(&self.ts)
            .and_then(char_to_side)
            .ok_or_else(|| SolverError::Parse(format!("invalid turn starter: {:?}", self.ts)))?;

        let mut state = DealState::new(hands, trump, turn_starter);

        for token in &self.m {
            let card = parse_card_token(token)
                .ok_or_else(|| SolverError::Parse(format!("invalid play token: {token:?}")))?;
            if !state.move_legal(card) {
                return Err(SolverError::InvalidDeal(format!(
                    "illegal already-played card {token:?}"
                )));
            }
            state.make_move(card);
        }

        if !state.validate() {
            return Err(SolverError::InvalidDeal(
                "deal fails a data-model invariant".to_string(),
            ));
        }

        Ok(state)
    }

    /// The embedded oracle matrix, if present and well-formed (4 rows of 5
    /// columns). A malformed shape is a parse error, not silently ignored.
    pub fn oracle(&self) -> Result<Option<ResultMatrix>> {
        let Some(rows) = &self.result else {
            return Ok(None);
        };
        if rows.len() != NUM_SIDES {
            return Err(SolverError::Parse(format!(
                "result matrix must have {} rows, found {}",
                NUM_SIDES,
                rows.len()
            )));
        }
        let mut matrix = [[0usize; NUM_SUITS + 1]; NUM_SIDES];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != NUM_SUITS + 1 {
                return Err(SolverError::Parse(format!(
                    "result matrix row {r} must have {} columns, found {}",
                    NUM_SUITS + 1,
                    row.len()
                )));
            }
            matrix[r].copy_from_slice(row);
        }
        Ok(Some(matrix))
    }
}

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

fn parse_hand(input: &HandInput) -> Result<super::cards::Cards> {
    let mut cards = super::cards::Cards::new();
    for (suit, suit_str) in [
        (CLUB, &input.c),
        (DIAMOND, &input.d),
        (HEART, &input.h),
        (SPADE, &input.s),
    ] {
        parse_suit_tokens(suit_str, suit, &mut cards)?;
    }
    Ok(cards)
}

fn parse_suit_tokens(s: &str, suit: Suit, cards: &mut super::cards::Cards) -> Result<()> {
    if s == "-" {
        return Ok(());
    }
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        // "10" is the only two-character rank token.
        let rank = if c == '1' && chars.peek() == Some(&'0') {
            chars.next();
            TEN
        } else {
            char_to_rank(c)
                .ok_or_else(|| SolverError::Parse(format!("invalid rank token: {c:?}")))?
        };
        cards.add(card_of(suit, rank));
    }
    Ok(())
}

/// Parse a single play token like `KH` or `10S`: rank followed by suit letter.
fn parse_card_token(token: &str) -> Option<usize> {
    let mut chars = token.chars();
    let suit_char = token.chars().last()?;
    let suit = char_to_suit(suit_char).filter(|&s| s != NOTRUMP)?;
    let rank_str: String = chars.by_ref().take(token.len() - 1).collect();
    let rank = if rank_str == "10" {
        TEN
    } else if rank_str.len() == 1 {
        char_to_rank(rank_str.chars().next()?)?
    } else {
        return None;
    };
    Some(card_of(suit, rank))
}
