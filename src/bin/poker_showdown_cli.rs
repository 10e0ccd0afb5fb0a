//! Dev-CLI: перемешать колоду, раздать карты и показать шоудаун.
//!
//! Использование:
//!   poker_showdown_cli [seed] [deal_config.json]
//!
//! Без seed колода мешается системным RNG. Конфиг задаётся JSON вида
//! `{"players": 4, "private_cards": 2, "shared_cards": 5}`;
//! пропущенные поля берутся из `DealConfig::default()`.

use std::process::ExitCode;

use poker_hands::domain::{Deck, Hand};
use poker_hands::engine::{deal, rank_hands, DealConfig};
use poker_hands::infra::{DeterministicRng, SystemRng};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("poker_showdown_cli: ошибка: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let seed: Option<u64> = args.next().map(|s| s.parse()).transpose()?;
    let config = match args.next() {
        Some(path) => serde_json::from_str::<DealConfig>(&std::fs::read_to_string(path)?)?,
        None => DealConfig::default(),
    };

    let mut deck = Deck::standard_52();
    match seed {
        Some(seed) => deck.shuffle(&mut DeterministicRng::from_seed(seed)),
        None => deck.shuffle(&mut SystemRng),
    }

    let round = deal(&config, &mut deck)?;
    let hands: Vec<Hand> = round.hands();

    println!("Борд: {}", Hand::from_cards(round.shared.iter().copied()));
    for (i, own) in round.private.iter().enumerate() {
        println!("Игрок {i}: {}", Hand::from_cards(own.iter().copied()));
    }

    let result = rank_hands(&hands)?;
    println!();
    for r in &result.per_participant {
        let mark = if result.is_winner(r.participant) { "*" } else { " " };
        println!("{mark} Игрок {}: {}", r.participant, r.best);
    }

    if result.is_split() {
        println!("Делёж банка между: {:?}", result.winners);
    } else {
        println!("Победитель: {:?}", result.winners);
    }

    Ok(())
}
