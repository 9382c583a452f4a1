use serde::Serialize;

use crate::deck::{Card, Rank};

/// Cards held by one participant. The dealer flag only affects what
/// `view` exposes, never the valuation.
pub struct Hand {
    cards: Vec<Card>,
    dealer: bool,
}

/// Display snapshot of a hand. `None` slots are face-down cards; the value
/// is reported for player hands only.
#[derive(Debug, Serialize)]
pub struct HandView {
    pub dealer: bool,
    pub cards: Vec<Option<Card>>,
    pub value: Option<u8>,
}

impl Hand {
    pub fn player() -> Self {
        Hand {
            cards: Vec::new(),
            dealer: false,
        }
    }

    pub fn dealer() -> Self {
        Hand {
            cards: Vec::new(),
            dealer: true,
        }
    }

    pub fn add_cards(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sum of card values, minus 10 when the sum passes 21 and an ace is
    /// present. The reduction happens at most once per evaluation, so a
    /// hand holding several aces can still bust.
    pub fn value(&self) -> u8 {
        let total: u8 = self.cards.iter().map(|card| card.value).sum();
        if total > 21 && self.cards.iter().any(|card| card.rank == Rank::Ace) {
            total - 10
        } else {
            total
        }
    }

    /// Any 21 counts, not only a two-card natural.
    pub fn is_blackjack(&self) -> bool {
        self.value() == 21
    }

    /// A dealer hand keeps its first card face down until `reveal_all` and
    /// never reports a value; a player hand shows everything.
    pub fn view(&self, reveal_all: bool) -> HandView {
        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if self.dealer && index == 0 && !reveal_all {
                    None
                } else {
                    Some(*card)
                }
            })
            .collect();
        HandView {
            dealer: self.dealer,
            cards,
            value: if self.dealer { None } else { Some(self.value()) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Suit;

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::player();
        hand.add_cards(ranks.iter().map(|&r| Card::new(Suit::Clubs, r)).collect());
        hand
    }

    #[test]
    fn ace_counts_eleven_when_under_21() {
        assert_eq!(hand_of(&[Rank::Ace, Rank::Nine]).value(), 20);
    }

    #[test]
    fn ace_reduction_applies_once() {
        // 11 + 11 + 9 = 31, one reduction brings it to 21.
        assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 21);
    }

    #[test]
    fn no_ace_means_no_reduction() {
        assert_eq!(hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]).value(), 24);
    }

    #[test]
    fn blackjack_is_any_21() {
        assert!(hand_of(&[Rank::Ace, Rank::King]).is_blackjack());
        assert!(hand_of(&[Rank::Five, Rank::Five, Rank::Five, Rank::Six]).is_blackjack());
        assert!(!hand_of(&[Rank::Ten, Rank::Ten]).is_blackjack());
        assert!(!hand_of(&[Rank::Ten, Rank::Six, Rank::Six]).is_blackjack());
    }

    #[test]
    fn value_is_recomputed_as_cards_arrive() {
        let mut hand = hand_of(&[Rank::Nine, Rank::Five]);
        assert_eq!(hand.value(), 14);
        hand.add_cards(vec![Card::new(Suit::Hearts, Rank::King)]);
        assert_eq!(hand.value(), 24);
    }

    #[test]
    fn dealer_view_hides_the_hole_card() {
        let mut hand = Hand::dealer();
        hand.add_cards(vec![
            Card::new(Suit::Spades, Rank::Nine),
            Card::new(Suit::Hearts, Rank::Five),
        ]);

        let view = hand.view(false);
        assert!(view.dealer);
        assert!(view.cards[0].is_none());
        assert_eq!(view.cards[1].map(|c| c.rank), Some(Rank::Five));
        assert!(view.value.is_none());

        let revealed = hand.view(true);
        assert_eq!(revealed.cards[0].map(|c| c.rank), Some(Rank::Nine));
        assert!(revealed.value.is_none());
    }

    #[test]
    fn player_view_shows_everything() {
        let hand = hand_of(&[Rank::Ace, Rank::Nine]);
        let view = hand.view(false);
        assert!(!view.dealer);
        assert!(view.cards.iter().all(Option::is_some));
        assert_eq!(view.value, Some(20));
    }

    #[test]
    fn view_serializes_with_null_hidden_slots() {
        let mut hand = Hand::dealer();
        hand.add_cards(vec![
            Card::new(Suit::Spades, Rank::King),
            Card::new(Suit::Clubs, Rank::Two),
        ]);

        let json = serde_json::to_value(hand.view(false)).unwrap();
        assert_eq!(json["dealer"], true);
        assert!(json["cards"][0].is_null());
        assert_eq!(json["cards"][1]["rank"], "Two");
        assert_eq!(json["cards"][1]["value"], 2);
        assert!(json["value"].is_null());
    }
}
