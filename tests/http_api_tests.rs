use std::time::Duration;

use broadside::domain::Actor;
use broadside::{ApiError, GameApi, HttpGameApi};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn snapshot_json(game_id: &str) -> serde_json::Value {
    json!({
        "game_id": game_id,
        "current_turn": "player",
        "game_over": false,
        "winner": null,
        "player_board": vec![vec!["~"; 10]; 10],
        "computer_board": vec![vec!["~"; 10]; 10],
        "player_ships_remaining": 5,
        "computer_ships_remaining": 5,
    })
}

/// Accept one connection, swallow the request and answer with a canned
/// HTTP/1.1 response.
async fn respond_once(listener: TcpListener, status: &str, body: String) {
    let (mut sock, _) = listener.accept().await.unwrap();
    let mut buf = vec![0u8; 8192];
    let _ = sock.read(&mut buf).await.unwrap();
    let resp = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    sock.write_all(resp.as_bytes()).await.unwrap();
}

async fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    (listener, base)
}

#[tokio::test]
async fn new_game_decodes_success_body() {
    let (listener, base) = bind().await;
    let body = json!({
        "game_id": "abc",
        "message": "New game started!",
        "game_state": snapshot_json("abc"),
    })
    .to_string();
    let server = tokio::spawn(respond_once(listener, "200 OK", body));

    let mut api = HttpGameApi::new(base).unwrap();
    let resp = api.new_game().await.unwrap();
    assert_eq!(resp.game_id, "abc");
    assert_eq!(resp.game_state.current_turn, Actor::Player);
    server.await.unwrap();
}

#[tokio::test]
async fn non_2xx_surfaces_the_detail() {
    let (listener, base) = bind().await;
    let body = json!({ "detail": "Already shot at this position" }).to_string();
    let server = tokio::spawn(respond_once(listener, "400 Bad Request", body));

    let mut api = HttpGameApi::new(base).unwrap();
    let err = api.fire("abc", 3, 4).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            detail: "Already shot at this position".to_string()
        }
    );
    server.await.unwrap();
}

#[tokio::test]
async fn non_2xx_without_detail_names_the_status() {
    let (listener, base) = bind().await;
    let server = tokio::spawn(respond_once(
        listener,
        "500 Internal Server Error",
        "oops".to_string(),
    ));

    let mut api = HttpGameApi::new(base).unwrap();
    match api.new_game().await.unwrap_err() {
        ApiError::Rejected { detail } => assert!(detail.contains("500")),
        other => panic!("expected Rejected, got {:?}", other),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn garbage_body_maps_to_malformed() {
    let (listener, base) = bind().await;
    let server = tokio::spawn(respond_once(listener, "200 OK", "not json".to_string()));

    let mut api = HttpGameApi::new(base).unwrap();
    assert!(matches!(
        api.new_game().await.unwrap_err(),
        ApiError::Malformed(_)
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_engine_maps_to_transport() {
    // Grab a free port, then close the listener so nothing answers.
    let (listener, base) = bind().await;
    drop(listener);

    let mut api = HttpGameApi::new(base).unwrap();
    assert!(matches!(
        api.new_game().await.unwrap_err(),
        ApiError::Transport(_)
    ));
}

#[tokio::test]
async fn silent_engine_maps_to_timeout() {
    let (listener, base) = bind().await;
    let server = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let _ = sock.read(&mut buf).await.unwrap();
        // Hold the connection open past the client deadline.
        tokio::time::sleep(Duration::from_secs(2)).await;
    });

    let mut api = HttpGameApi::with_timeout(base, Duration::from_millis(100)).unwrap();
    assert_eq!(api.new_game().await.unwrap_err(), ApiError::Timeout);
    server.abort();
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let (listener, base) = bind().await;
    let body = json!({ "games": [] }).to_string();
    let server = tokio::spawn(respond_once(listener, "200 OK", body));

    let mut api = HttpGameApi::new(format!("{}/", base)).unwrap();
    assert_eq!(api.base_url(), base);
    let resp = api.list_games().await.unwrap();
    assert!(resp.games.is_empty());
    server.await.unwrap();
}
