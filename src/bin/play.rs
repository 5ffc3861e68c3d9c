use merge2048_core::renderer::{Renderer, TextRenderer};
use merge2048_core::{Direction, Game, GameConfig};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let repl_mode = if let Some(pos) = args.iter().position(|arg| arg == "--repl") {
        args.remove(pos);
        true
    } else {
        false
    };
    let seed = if let Some(pos) = args.iter().position(|arg| arg == "--seed") {
        let value = args.get(pos + 1).and_then(|s| s.parse().ok());
        let end = (pos + 2).min(args.len());
        args.drain(pos..end);
        value
    } else {
        None
    };

    let config = GameConfig {
        seed,
        ..Default::default()
    };
    let mut game = Game::new(config);

    // Execute all moves given on the command line
    for arg in &args {
        if let Some(direction) = parse_direction(arg) {
            if step_direction(&mut game, direction) {
                return;
            }
        } else {
            println!("Unknown move: {}", arg);
        }
    }

    if repl_mode {
        run_repl(&mut game);
    } else {
        print_state(&game);
    }
}

fn run_repl(game: &mut Game) {
    println!("2048 headless REPL");
    println!("Moves: l r u d (or left right up down)");
    println!("Commands: state, new, help, q");

    let mut line = String::new();
    loop {
        line.clear();
        if std::io::stdin().read_line(&mut line).is_err() {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            print_state(game);
            continue;
        }
        if trimmed == "q" || trimmed == "quit" {
            break;
        }
        if trimmed == "help" {
            println!("Moves: l r u d (or left right up down)");
            println!("Commands: state, new, help, q");
            continue;
        }
        if trimmed == "state" {
            print_state(game);
            continue;
        }
        if trimmed == "new" {
            game.reset();
            print_state(game);
            continue;
        }

        for token in trimmed.split_whitespace() {
            if let Some(direction) = parse_direction(token) {
                if step_direction(game, direction) {
                    return;
                }
            } else {
                println!("Unknown token: {}", token);
            }
        }
        print_state(game);
    }
}

fn parse_direction(token: &str) -> Option<Direction> {
    match token {
        "l" | "left" => Some(Direction::Left),
        "r" | "right" => Some(Direction::Right),
        "u" | "up" => Some(Direction::Up),
        "d" | "down" => Some(Direction::Down),
        _ => None,
    }
}

fn step_direction(game: &mut Game, direction: Direction) -> bool {
    let result = game.step(direction);
    if !result.changed {
        println!("({:?} does nothing)", direction);
    }
    if result.done {
        println!("GAME OVER");
        print_state(game);
        return true;
    }
    false
}

fn print_state(game: &Game) {
    let renderer = TextRenderer::new();
    match renderer.render(&game.get_state()) {
        Ok(text) => println!("\n{}", text),
        Err(infallible) => match infallible {},
    }
}
