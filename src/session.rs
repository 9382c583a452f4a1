use serde::Serialize;

use crate::game::Winner;

/// Parses the games-to-play prompt. Only a positive integer is accepted;
/// anything else sends the caller back to the prompt.
pub fn parse_games_count(input: &str) -> Option<u32> {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

/// Win/loss/push tally across one sitting.
#[derive(Debug, Default, Serialize)]
pub struct SessionStats {
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
}

impl SessionStats {
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.wins += 1,
            Winner::Dealer => self.losses += 1,
            Winner::Push => self.pushes += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.pushes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_games_count("1"), Some(1));
        assert_eq!(parse_games_count("10"), Some(10));
        assert_eq!(parse_games_count("  3 \n"), Some(3));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(parse_games_count("abc"), None);
        assert_eq!(parse_games_count("-3"), None);
        assert_eq!(parse_games_count("0"), None);
        assert_eq!(parse_games_count(""), None);
        assert_eq!(parse_games_count("2.5"), None);
    }

    #[test]
    fn stats_tally_by_winner() {
        let mut stats = SessionStats::default();
        stats.record(Winner::Player);
        stats.record(Winner::Player);
        stats.record(Winner::Dealer);
        stats.record(Winner::Push);

        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.pushes, 1);
        assert_eq!(stats.games(), 4);
    }
}
