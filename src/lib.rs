//! Double-dummy bridge solver: given full knowledge of all four hands, a
//! declared trump, and an opening leader, computes the maximum number of
//! tricks the North-South partnership can guarantee against optimal
//! East-West defense — and tabulates that count for every (leader, trump)
//! combination.
//!
//! The engine is a pure function from deal to trick count: exhaustive
//! negamax search with alpha/beta-equivalent pruning, rank-adjacency
//! (equivalence) pruning, and a transposition cache with NS/EW orientation
//! flipping.
//!
//! # Example
//!
//! ```
//! use bridge_solver::deal::DealInput;
//! use bridge_solver::result::solve_deal;
//!
//! let yaml = r#"
//! n: {c: "-", d: "-", h: "-", s: "A"}
//! e: {c: "-", d: "-", h: "-", s: "K"}
//! s: {c: "-", d: "-", h: "-", s: "Q"}
//! w: {c: "-", d: "-", h: "-", s: "J"}
//! t: "NT"
//! ts: "N"
//! "#;
//! let input: DealInput = serde_yaml::from_str(yaml).unwrap();
//! let state = input.into_state().unwrap();
//! let matrix = solve_deal(&state);
//! assert_eq!(matrix[0][4], 1); // North leads, NoTrump: NS win the ace.
//! ```

pub mod cache;
pub mod cards;
pub mod deal;
pub mod error;
pub mod hands;
pub mod result;
pub mod search;
pub mod state;
pub mod types;

pub use cache::{CacheKey, ScoredMove, TranspositionCache};
pub use cards::Cards;
pub use deal::{DealInput, HandInput, ResultMatrix};
pub use error::SolverError;
pub use hands::Hands;
pub use result::solve_deal;
pub use search::solve;
pub use state::{DealState, Trick};
pub use types::{Rank, Side, Suit};
pub use types::{CLUB, DIAMOND, HEART, NOTRUMP, SPADE};
pub use types::{EAST, NORTH, SOUTH, WEST};
