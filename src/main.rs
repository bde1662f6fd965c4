use std::env;

use conquest_chess::{AiPlays, Color, EngineConfig, Game, GameStatus, Setup};

fn load_config() -> EngineConfig {
    match env::args().nth(1) {
        Some(path) => match EngineConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Cannot load config from {}, using defaults: {}", path, e);
                EngineConfig::default()
            }
        },
        None => EngineConfig::default(),
    }
}

fn main() {
    let logger_env = env_logger::Env::default().filter_or("LOG_LEVEL", "INFO");
    env_logger::Builder::from_env(logger_env).format_timestamp_millis().init();

    let config = load_config();
    let max_plies = config.max_plies;
    let mut game = Game::with_config(Color::White, Setup::Standard, config).with_ai_plays(AiPlays::BothSides);
    println!("{}\n", game.board());

    for _ in 0..max_plies {
        let mover = game.turn();
        if !game.make_ai_move() {
            break;
        }
        println!("Turn {}, {} moved{}", game.turn_count() - 1, mover, if game.is_in_check() { ", check" } else { "" });
        println!("{}\n", game.board());
        if game.is_game_over() {
            break;
        }
    }

    match game.status() {
        GameStatus::Win(color) => println!("Checkmate, {} wins", color),
        GameStatus::Draw => println!("Stalemate"),
        GameStatus::InProgress => println!("No result after {} plies", game.turn_count() - 1),
    }
}
