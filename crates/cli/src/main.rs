mod command;
mod config;
mod view;

use anyhow::Context;
use command::{parse_command, Command};
use klondike_core::{EventBus, Game, GameConfig, GameError, GameStatus, Input, Outcome, PileId};
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use view::{format_event, render_board};

#[derive(Debug, Clone, Default)]
struct CliOptions {
    seed: Option<u64>,
    config: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--json" => options.json = true,
            "--help" | "-h" => options.help = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--config" | "-c" => {
                if let Some(value) = args.get(idx + 1) {
                    options.config = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    options
}

fn main() {
    env_logger::builder().format_target(false).init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if options.help {
        print_usage();
        return;
    }
    if let Err(err) = run(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let mut config = match options.config.as_deref() {
        Some(path) => config::load_game_config(path)?,
        None => GameConfig::default(),
    };
    config::resolve_seed(&mut config, options.seed)?;
    debug!("starting with {config:?}");

    let mut events = EventBus::default();
    let mut game = Game::new(config.clone(), &mut events).context("deal new game")?;
    drain_events(&mut events, options.json)?;
    print!("{}", render_board(&game));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("read command")?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match command {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Board => print!("{}", render_board(&game)),
            Command::NewGame => {
                game = Game::new(config.clone(), &mut events).context("deal new game")?;
                drain_events(&mut events, options.json)?;
                print!("{}", render_board(&game));
            }
            command => {
                let outcome = apply_command(&mut game, command, &mut events)?;
                if matches!(outcome, Outcome::Ignored) {
                    println!("nothing to do");
                }
                drain_events(&mut events, options.json)?;
                print!("{}", render_board(&game));
                if game.status() == GameStatus::Won {
                    println!("type `new` for another game or `quit` to leave");
                }
            }
        }
    }
    Ok(())
}

/// Turns a typed command into the pointer inputs a graphical shell would
/// send.
fn apply_command(
    game: &mut Game,
    command: Command,
    events: &mut EventBus,
) -> Result<Outcome, GameError> {
    match command {
        Command::Stock => game.handle(Input::ClickStock, events),
        Command::Move { card, pile } => {
            game.handle(Input::Press { card, x: 0.0, y: 0.0 }, events)?;
            let picked = game.handle(Input::Drag { card, x: 1.0, y: 1.0 }, events)?;
            if matches!(picked, Outcome::Ignored) {
                game.cancel_drag();
                return Ok(Outcome::Ignored);
            }
            game.handle(
                Input::Release {
                    card,
                    over: vec![pile],
                },
                events,
            )
        }
        Command::Auto { card } => game.handle(Input::Click { card, count: 2 }, events),
        Command::Flip { pile } => flip_pile(game, pile, events),
        Command::Empty
        | Command::Help
        | Command::Board
        | Command::NewGame
        | Command::Quit => Ok(Outcome::Ignored),
    }
}

fn flip_pile(game: &mut Game, pile: PileId, events: &mut EventBus) -> Result<Outcome, GameError> {
    let Some(card) = game.pile(pile)?.peek_top().map(|card| card.id()) else {
        return Ok(Outcome::Ignored);
    };
    game.handle(Input::Click { card, count: 1 }, events)
}

fn drain_events(events: &mut EventBus, json: bool) -> anyhow::Result<()> {
    for event in events.drain() {
        if json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            println!("event: {}", format_event(&event));
        }
    }
    Ok(())
}

fn print_usage() {
    println!("usage: klondike [--seed N] [--config PATH] [--json]");
    println!();
    println!("  --seed N        deal a reproducible game (also KLONDIKE_SEED)");
    println!("  --config PATH   JSON game config");
    println!("  --json          print events as JSON lines");
}

fn print_help() {
    println!("commands:");
    println!("  board | b                show the table");
    println!("  stock | s                draw a card, or refill an empty stock");
    println!("  move  | m <card> <pile>  drag a card (and those above it) to a pile");
    println!("  auto  | a <card>         send a card to a foundation");
    println!("  flip  | f <pile>         turn up a face-down tableau card");
    println!("  new   | n                deal a new game");
    println!("  quit  | q                leave");
    println!("cards: AS 2H .. TD JC QH KS   piles: s w f1-f4 t1-t7");
}
