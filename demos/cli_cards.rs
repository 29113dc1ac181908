//! CLI card hand example.
//!
//! Set `RUST_LOG=cardhand=debug` to see the deals as they happen.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardhand::{Card, Game, GameOptions, Hand, Suit};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  n        new game (fresh deck and hand)
  d        new deck (hand is kept)
  h        new hand from the current deck
  s        sum of the hand
  c <suit> cards of a suit (S, H, D or C)
  q        look for the special card (Queen of Spades by default)
  f        check for a flush of the configured size
  r        full report
  x        quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Card hand CLI example (type '?' for help)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = match Game::new(GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Could not start game: {err}");
            return;
        }
    };

    print_table(&game);

    loop {
        let Some(input) = prompt_line("> ") else {
            break;
        };
        let mut words = input.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let hand = game.hand();

        match command {
            "n" => match game.new_game() {
                Ok(()) => print_table(&game),
                Err(err) => println!("New game error: {err}"),
            },
            "d" => match game.new_deck() {
                Ok(()) => print_table(&game),
                Err(err) => println!("New deck error: {err}"),
            },
            "h" => match game.new_hand() {
                Ok(()) => print_table(&game),
                Err(err) => println!("Deal error: {err} (try 'd' for a new deck)"),
            },
            "s" => println!("Sum: {}", hand.sum()),
            "c" => match words.next().and_then(|w| w.chars().next()).and_then(Suit::from_symbol) {
                Some(suit) => println!("{suit}:{}", hand.cards_of_suit(suit)),
                None => println!("Please name a suit: S, H, D or C."),
            },
            "q" => {
                let special = game.options.special_card;
                let found = hand.contains_card(&special);
                println!("{special} {}", if found { "found" } else { "not found" });
            }
            "f" => {
                let flush = hand.has_flush_of_size(game.options.flush_size);
                println!(
                    "Flush of {}: {}",
                    game.options.flush_size,
                    if flush { "yes" } else { "no" }
                );
            }
            "r" => {
                let report = game.report();
                println!("Hand:   {}", report.hand);
                println!("Sum:    {}", report.sum);
                println!("{}:      {}", report.suit, report.suit_cards);
                println!("{}:    {}", report.special_card, report.has_special_card);
                println!("Flush:  {}", report.is_flush);
            }
            "x" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "?" | "help" => {
                println!("{HELP}");
                println!(
                    "Special card: {}, flush size: {}",
                    game.options.special_card, game.options.flush_size
                );
            }
            _ => println!("Unknown command. Type '?' for help."),
        }
    }
}

/// Reads one trimmed, lower-cased line. Returns `None` at end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_table(game: &Game) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());
    println!("Hand: {}", format_hand(&game.hand()));
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
