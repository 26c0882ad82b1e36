//! Terminal presentation: boards, turn indicator, log tail, game-over banner.

use crate::config::{BOARD_SIZE, FLEET_SIZE};
use crate::domain::{Actor, GameSnapshot};
use crate::event_log::EventLog;
use crate::render::{render_grid, BoardSide, BoardView};

/// Parse a coordinate like `B7` (column letter, 1-based row) into the
/// 0-based (row, col) the engine expects. Off-board input yields `None`.
pub fn parse_coord(input: &str) -> Option<(u8, u8)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8).wrapping_sub(b'A');
    let row_str: String = chars.collect();
    let row: u8 = row_str.trim().parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row - 1, col))
}

pub fn coord_label(row: u8, col: u8) -> String {
    format!("{}{}", (b'A' + col) as char, row + 1)
}

fn print_view(view: &BoardView) {
    print!("   ");
    for c in 0..BOARD_SIZE as usize {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for (r, row) in view.iter().enumerate() {
        print!("{:2} ", r + 1);
        for cell in row {
            print!(" {}", cell.visual.glyph());
        }
        println!();
    }
}

/// Draw the whole table: enemy waters on top, own fleet below, then the turn
/// indicator and remaining-ship counters.
pub fn print_session(snapshot: &GameSnapshot) {
    println!("\nEnemy waters:");
    print_view(&render_grid(&snapshot.computer_board, BoardSide::Opponent));
    println!("\nYour fleet:");
    print_view(&render_grid(&snapshot.player_board, BoardSide::Own));
    println!(
        "\nShips remaining: you {}/{fleet}, computer {}/{fleet}",
        snapshot.player_ships_remaining,
        snapshot.computer_ships_remaining,
        fleet = FLEET_SIZE,
    );
    if snapshot.game_over {
        println!("Game over.");
    } else {
        match snapshot.current_turn {
            Actor::Player => println!("Your turn."),
            Actor::Computer => println!("Computer's turn."),
        }
    }
}

/// Print any log entries appended since `from`, returning the new high-water
/// mark.
pub fn print_log_since(log: &EventLog, from: usize) -> usize {
    for entry in &log.entries()[from.min(log.len())..] {
        println!("  {}", entry.line());
    }
    log.len()
}

pub fn print_game_over(snapshot: &GameSnapshot) {
    println!("\n==================================================");
    match snapshot.winner {
        Some(Actor::Player) => {
            println!("                    VICTORY!");
            println!("        You sunk the entire enemy fleet.");
        }
        Some(Actor::Computer) => {
            println!("                    DEFEAT!");
            println!("       The enemy has sunk all your ships.");
        }
        None => println!("                   GAME OVER"),
    }
    println!("==================================================");
}
