use std::time::Duration;

pub const BOARD_SIZE: u8 = 10;
pub const FLEET_SIZE: u8 = 5;

/// Engine the client talks to unless `--server` overrides it.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// Client-side cap on any single request round trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between revealing the player's shot and the computer's counter-shot.
pub const REVEAL_SHOT_GAP: Duration = Duration::from_millis(1000);

/// Pause between the last revealed shot and the full board commit.
pub const REVEAL_COMMIT_GAP: Duration = Duration::from_millis(500);
