use std::io::Write as _;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};

use broadside::ui;
use broadside::{init_logging, GameApi, HttpGameApi, Phase, TurnController, DEFAULT_SERVER};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine's computer player.
    Play {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// List the games the engine currently tracks.
    Games {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Print the current state of one game.
    Show {
        game_id: String,
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Play {
        server: DEFAULT_SERVER.to_string(),
    }) {
        Commands::Play { server } => play(server).await,
        Commands::Games { server } => list_games(server).await,
        Commands::Show { game_id, server } => show(server, game_id).await,
    }
}

async fn play(server: String) -> anyhow::Result<()> {
    println!("Connecting to engine at {}...", server);
    let api = HttpGameApi::new(server)?;
    let mut controller = TurnController::new(Box::new(api));
    controller.start_new_game().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut printed = 0usize;
    let mut needs_redraw = true;
    loop {
        printed = ui::print_log_since(controller.log(), printed);
        match controller.phase() {
            Phase::Revealing | Phase::ResolvingShot => {
                // Wait for the next due step, but keep consuming input so a
                // mid-reveal attempt surfaces its advisory instead of piling
                // up for later.
                let deadline = controller.next_deadline().unwrap_or_else(Instant::now);
                tokio::select! {
                    _ = sleep_until(deadline) => {
                        if controller.poll(Instant::now()) {
                            // Show the paced intermediate board, marked cell
                            // and all, not just the log line.
                            printed = ui::print_log_since(controller.log(), printed);
                            if let Some(snapshot) = controller.snapshot() {
                                ui::print_session(snapshot);
                            }
                            needs_redraw = false;
                        }
                    }
                    line = lines.next_line() => match line? {
                        Some(text) => attempt(&mut controller, &text).await,
                        None => return Ok(()),
                    },
                }
            }
            Phase::GameOver => {
                if let Some(snapshot) = controller.snapshot() {
                    ui::print_game_over(snapshot);
                }
                print!("Play again? [y/N] ");
                std::io::stdout().flush()?;
                match lines.next_line().await? {
                    Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                        let _ = controller.start_new_game().await;
                        needs_redraw = true;
                    }
                    _ => return Ok(()),
                }
            }
            Phase::AwaitingPlayerInput => {
                if needs_redraw {
                    if let Some(snapshot) = controller.snapshot() {
                        ui::print_session(snapshot);
                    }
                    needs_redraw = false;
                }
                print!("Target (e.g. B7, q to quit): ");
                std::io::stdout().flush()?;
                match lines.next_line().await? {
                    Some(text) => {
                        let trimmed = text.trim();
                        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit")
                        {
                            return Ok(());
                        }
                        attempt(&mut controller, trimmed).await;
                        needs_redraw = true;
                    }
                    None => return Ok(()),
                }
            }
            Phase::Idle => {
                controller.start_new_game().await?;
            }
        }
    }
}

async fn attempt(controller: &mut TurnController, input: &str) {
    let input = input.trim();
    if input.is_empty() {
        return;
    }
    match ui::parse_coord(input) {
        // Engine failures are already logged; the loop prints the notice.
        Some((row, col)) => {
            let _ = controller.fire(row, col).await;
        }
        None => println!("Enter a column letter and row number, e.g. B7."),
    }
}

async fn list_games(server: String) -> anyhow::Result<()> {
    let mut api = HttpGameApi::new(server)?;
    let resp = api.list_games().await?;
    if resp.games.is_empty() {
        println!("No active games.");
        return Ok(());
    }
    println!("{:<38} {:>8} {:>5} {:>8}", "game id", "turn", "over", "winner");
    for game in resp.games {
        let turn = format!("{:?}", game.current_turn).to_lowercase();
        let winner = game
            .winner
            .map(|w| format!("{:?}", w).to_lowercase())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<38} {:>8} {:>5} {:>8}",
            game.game_id, turn, game.game_over, winner
        );
    }
    Ok(())
}

async fn show(server: String, game_id: String) -> anyhow::Result<()> {
    let mut api = HttpGameApi::new(server)?;
    let snapshot = api.fetch_state(&game_id).await?;
    ui::print_session(&snapshot);
    Ok(())
}
