use serde::Serialize;

use crate::deck::Deck;
use crate::hand::Hand;

/// The player's answer to the hit-or-stand prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
    Invalid,
}

impl Decision {
    /// Case-insensitive `h`/`hit` and `s`/`stand`; anything else is
    /// `Invalid` and the caller reprompts.
    pub fn parse(input: &str) -> Decision {
        match input.trim().to_ascii_lowercase().as_str() {
            "h" | "hit" => Decision::Hit,
            "s" | "stand" => Decision::Stand,
            _ => Decision::Invalid,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    PlayerBusted,
    DealerBusted,
    BothBlackjack,
    PlayerBlackjack,
    DealerBlackjack,
    PlayerHigher,
    DealerHigher,
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    Player,
    Dealer,
    Push,
}

impl Outcome {
    pub fn winner(self) -> Winner {
        match self {
            Outcome::DealerBusted | Outcome::PlayerBlackjack | Outcome::PlayerHigher => {
                Winner::Player
            }
            Outcome::PlayerBusted | Outcome::DealerBlackjack | Outcome::DealerHigher => {
                Winner::Dealer
            }
            Outcome::BothBlackjack | Outcome::Push => Winner::Push,
        }
    }
}

/// One round: a fresh deck, a player hand, a dealer hand, and the outcome
/// once play has ended. The driver sequences the turns; this type enforces
/// the rules.
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    outcome: Option<Outcome>,
}

impl Round {
    /// Deals two cards to each side and settles any immediate end: a bust
    /// or blackjack on the opening table decides the round before the
    /// player ever acts.
    pub fn deal(mut deck: Deck) -> Round {
        let mut player = Hand::player();
        let mut dealer = Hand::dealer();
        player.add_cards(deck.deal(2));
        dealer.add_cards(deck.deal(2));

        let mut round = Round {
            deck,
            player,
            dealer,
            outcome: None,
        };
        round.outcome = round.immediate_outcome();
        round
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    // Bust and blackjack checks shared by the opening deal and every hit.
    // First match wins: player bust, dealer bust, both blackjack, player
    // blackjack, dealer blackjack.
    fn immediate_outcome(&self) -> Option<Outcome> {
        if self.player.value() > 21 {
            Some(Outcome::PlayerBusted)
        } else if self.dealer.value() > 21 {
            Some(Outcome::DealerBusted)
        } else if self.player.is_blackjack() && self.dealer.is_blackjack() {
            Some(Outcome::BothBlackjack)
        } else if self.player.is_blackjack() {
            Some(Outcome::PlayerBlackjack)
        } else if self.dealer.is_blackjack() {
            Some(Outcome::DealerBlackjack)
        } else {
            None
        }
    }

    /// The player may keep drawing while the round is live and their value
    /// is below 21.
    pub fn player_may_hit(&self) -> bool {
        self.outcome.is_none() && self.player.value() < 21
    }

    /// Deals one card to the player and re-checks the table. Busting loses
    /// on the spot; landing exactly on 21 wins immediately, since any 21
    /// counts as blackjack here.
    pub fn hit(&mut self) -> Option<Outcome> {
        self.player.add_cards(self.deck.deal(1));
        self.outcome = self.immediate_outcome();
        self.outcome
    }

    /// Dealer turn and resolution: draw below 17, stand at 17 or more,
    /// then compare. No strategy, just the fixed threshold.
    pub fn play_dealer(&mut self) -> Outcome {
        while self.dealer.value() < 17 {
            self.dealer.add_cards(self.deck.deal(1));
        }
        let outcome = self.resolve();
        self.outcome = Some(outcome);
        outcome
    }

    fn resolve(&self) -> Outcome {
        let player = self.player.value();
        let dealer = self.dealer.value();
        // Raw comparison, no bust re-check: a dealer total over 21 from
        // the draw still counts as the higher number.
        if player > dealer {
            Outcome::PlayerHigher
        } else if player < dealer {
            Outcome::DealerHigher
        } else {
            Outcome::Push
        }
    }
}
