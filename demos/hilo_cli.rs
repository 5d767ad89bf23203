//! CLI Higher/Lower example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use hilo::{Card, Game, GameOptions, Guess, Suit, TurnReason};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    if let Err(err) = game.begin() {
        println!("Could not start: {err}");
        return;
    }

    println!("Welcome to Higher / Lower");
    println!("-------------------------------\n");
    println!("Guess whether the challenging card is higher or lower than the current card.");
    println!("Type: h if Higher, l if Lower, or q to quit");

    loop {
        print_table(&game);

        let input = prompt_line("\nIs the challenging card higher or lower? (h | l | q): ");
        if input == "q" || input == "quit" {
            println!("\nGoodbye!");
            break;
        }

        let guess = match input.parse::<Guess>() {
            Ok(guess) => guess,
            Err(err) => {
                println!("{err}. Please type h, l, or q.\n");
                continue;
            }
        };

        let result = match game.check_higher_or_lower(guess) {
            Ok(result) => result,
            Err(err) => {
                println!("Guess error: {err}");
                break;
            }
        };

        match result.reason {
            Some(TurnReason::DeckExhausted) => {
                println!("Correct! {}", TurnReason::DeckExhausted);
                println!("Final score: {}\n", result.score);
            }
            Some(TurnReason::WrongGuess) => {
                println!(
                    "\nIncorrect ({} was the challenger). Your final score is: {}\n",
                    result.challenger, result.score
                );
            }
            Some(TurnReason::Tie) => {
                println!("Tie, counted as correct. Score is currently: {}", result.score);
                println!("-----------NEXT ROUND-----------");
                continue;
            }
            None => {
                println!("Correct, score is currently: {}", result.score);
                println!("-----------NEXT ROUND-----------");
                continue;
            }
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {
                if let Err(err) = game.begin() {
                    println!("Could not restart: {err}");
                    break;
                }
                println!("-----------NEW GAME STARTING-----------");
            }
            _ => {
                println!("Thanks for playing!");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let (Ok(current), Ok(challenger)) = (game.current_card(), game.challenging_card()) else {
        return;
    };
    let score = game.score().unwrap_or(0);
    let remaining = game.remaining_cards().unwrap_or(0);

    println!("\n-------------------------------");
    println!("Current card:     {}", format_card(current));
    println!("Challenging card: {}", format_card(challenger));
    println!("-------------------------------");
    println!("Score: {score} / {remaining} card(s) remaining");
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit() {
        _ if card.is_joker() => "35",
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&format!("{card} ({})", card.value()), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
