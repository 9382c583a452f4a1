use std::io::{self, BufRead, Write};

use rand::{rngs::SmallRng, SeedableRng};

use blackjack::{parse_games_count, Decision, Deck, HandView, Outcome, Round, SessionStats};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut rng = SmallRng::from_entropy();

    let games_to_play = prompt_games_count(&mut input)?;
    let mut stats = SessionStats::default();

    for game_number in 1..=games_to_play {
        let outcome = play_round(&mut input, &mut rng, game_number, games_to_play)?;
        stats.record(outcome.winner());
    }

    println!(
        "\nSession over: {} won, {} lost, {} pushed.",
        stats.wins, stats.losses, stats.pushes
    );
    println!("Thanks for playing!");
    Ok(())
}

fn play_round(
    input: &mut impl BufRead,
    rng: &mut SmallRng,
    game_number: u32,
    games_to_play: u32,
) -> io::Result<Outcome> {
    let banner = "*".repeat(30);
    println!("\n{banner}\nGame {game_number} of {games_to_play}\n{banner}");

    let mut deck = Deck::new();
    deck.shuffle(rng);
    let mut round = Round::deal(deck);

    print_hand(&round.player().view(false));
    print_hand(&round.dealer().view(false));

    while round.player_may_hit() {
        let line = read_line(input, "Please choose 'Hit' or 'Stand' (H/S): ")?;
        match Decision::parse(&line) {
            Decision::Hit => {
                round.hit();
                print_hand(&round.player().view(false));
            }
            Decision::Stand => break,
            Decision::Invalid => {}
        }
    }

    let outcome = match round.outcome() {
        Some(outcome) => outcome,
        None => {
            let outcome = round.play_dealer();
            print_hand(&round.dealer().view(true));
            outcome
        }
    };
    println!("{}", outcome_message(outcome));
    Ok(outcome)
}

fn prompt_games_count(input: &mut impl BufRead) -> io::Result<u32> {
    loop {
        let line = read_line(input, "How many games do you want to play? ")?;
        match parse_games_count(&line) {
            Some(n) => return Ok(n),
            None => println!("Please enter a valid number."),
        }
    }
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line)
}

fn print_hand(view: &HandView) {
    println!(
        "{}",
        if view.dealer {
            "Dealer's hand:"
        } else {
            "Your hand:"
        }
    );
    for slot in &view.cards {
        match slot {
            Some(card) => println!("{card}"),
            None => println!("Hidden"),
        }
    }
    if let Some(value) = view.value {
        println!("Value: {value}");
    }
    println!();
}

fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBusted => "You busted. Dealer wins!",
        Outcome::DealerBusted => "Dealer busted. You win!",
        Outcome::BothBlackjack => "Both players have blackjack! It's a tie!",
        Outcome::PlayerBlackjack => "You have blackjack! You win!",
        Outcome::DealerBlackjack => "Dealer has blackjack! Dealer wins!",
        Outcome::PlayerHigher => "You win!",
        Outcome::DealerHigher => "Dealer wins.",
        Outcome::Push => "It's a tie!",
    }
}
