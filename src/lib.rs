//! Single-player terminal blackjack.
//!
//! The library is the rules engine: a 52-card deck dealt from the top of a
//! shuffled stack, hand valuation with the ace adjustment, and the round
//! state machine that decides winners. The binary is the thin prompt-and-
//! print layer on top.

pub mod deck;
pub mod game;
pub mod hand;
pub mod session;

pub use deck::{Card, Deck, Rank, Suit};
pub use game::{Decision, Outcome, Round, Winner};
pub use hand::{Hand, HandView};
pub use session::{parse_games_count, SessionStats};
