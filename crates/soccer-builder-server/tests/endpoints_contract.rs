use serde_json::{json, Value};
use soccer_builder_server::{build_router, AppState, MemoryBackend, TeamStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_server() -> SocketAddr {
    let store = TeamStore::new(Arc::new(MemoryBackend::default()));
    let app = build_router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    if let Some(payload) = body {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", payload.len()));
    }
    req.push_str("\r\n");
    if let Some(payload) = body {
        req.push_str(payload);
    }
    stream.write_all(req.as_bytes()).await.expect("write request");
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.expect("read response");
    let text = String::from_utf8_lossy(&raw).to_string();
    let (head, body) = text.split_once("\r\n\r\n").expect("split response");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|code| code.parse::<u16>().ok())
        .expect("status code");
    (status, head.to_string(), body.to_string())
}

async fn get_json(addr: SocketAddr, path: &str) -> (u16, Value) {
    let (status, _, body) = send_raw(addr, "GET", path, &[], None).await;
    (status, serde_json::from_str(&body).expect("json body"))
}

async fn post_json(addr: SocketAddr, path: &str, payload: &Value) -> (u16, Value) {
    let body = serde_json::to_string(payload).expect("encode payload");
    let (status, _, body) = send_raw(addr, "POST", path, &[], Some(&body)).await;
    (status, serde_json::from_str(&body).expect("json body"))
}

fn player_body(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Player {id}"),
        "number": "10bis",
        "role": "DEL",
        "stats": {},
        "position": {"x": 0.5, "y": 0.25}
    })
}

#[tokio::test]
async fn api_root_reports_the_service_name() {
    let addr = spawn_server().await;
    let (status, body) = get_json(addr, "/api").await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Soccer Builder API");
}

#[tokio::test]
async fn get_team_creates_defaults_and_refetch_is_identical() {
    let addr = spawn_server().await;
    let (status, _, first) = send_raw(addr, "GET", "/api/team", &[], None).await;
    assert_eq!(status, 200);
    let team: Value = serde_json::from_str(&first).expect("team json");
    assert_eq!(team["players"], json!([]));
    assert_eq!(team["pitchSettings"]["mode"], "11");
    assert_eq!(team["pitchSettings"]["formation"], "4-3-3");
    assert_eq!(team["pitchSettings"]["kitColor"], "#ef4444");
    assert_eq!(team["clubInfo"]["name"], "MI EQUIPO FC");

    let (status, _, second) = send_raw(addr, "GET", "/api/team", &[], None).await;
    assert_eq!(status, 200);
    assert_eq!(second, first, "re-fetch must be byte-identical");
}

#[tokio::test]
async fn save_team_echoes_and_fully_overwrites() {
    let addr = spawn_server().await;
    let team_a = json!({"players": [player_body("p1"), player_body("p2")]});
    let (status, echoed) = post_json(addr, "/api/team", &team_a).await;
    assert_eq!(status, 200);
    assert_eq!(echoed["players"].as_array().expect("players").len(), 2);

    let team_b = json!({
        "players": [player_body("p3")],
        "clubInfo": {"name": "CLUB B"}
    });
    let (status, _) = post_json(addr, "/api/team", &team_b).await;
    assert_eq!(status, 200);

    let (_, current) = get_json(addr, "/api/team").await;
    let players = current["players"].as_array().expect("players");
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["id"], "p3");
    assert_eq!(current["clubInfo"]["name"], "CLUB B");
}

#[tokio::test]
async fn vote_flow_averages_and_grows_history() {
    let addr = spawn_server().await;
    let team = json!({"players": [player_body("p1")]});
    let (status, _) = post_json(addr, "/api/team", &team).await;
    assert_eq!(status, 200);

    let (status, body) =
        post_json(addr, "/api/player/p1/vote", &json!({"rit": 80, "tir": 60})).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Vote recorded");
    assert_eq!(body["new_stats"]["rit"], 80);
    assert_eq!(body["new_stats"]["tir"], 60);
    assert_eq!(body["new_stats"]["pas"], 70);

    let (status, player) = get_json(addr, "/api/player/p1").await;
    assert_eq!(status, 200);
    assert_eq!(player["votes"].as_array().expect("votes").len(), 1);
    assert_eq!(player["stats"]["rit"], 80);

    // Second vote: mean of 80 and 81 is 80.5, which rounds to even.
    let (status, body) = post_json(addr, "/api/player/p1/vote", &json!({"rit": 81})).await;
    assert_eq!(status, 200);
    assert_eq!(body["new_stats"]["rit"], 80);
    assert_eq!(body["new_stats"]["tir"], 65);

    let (_, player) = get_json(addr, "/api/player/p1").await;
    assert_eq!(player["votes"].as_array().expect("votes").len(), 2);
}

#[tokio::test]
async fn lookups_before_any_team_exists_are_team_not_found() {
    let addr = spawn_server().await;
    let (status, body) = get_json(addr, "/api/player/p1").await;
    assert_eq!(status, 404);
    assert_eq!(body["detail"], "Team not found");

    let (status, body) = post_json(addr, "/api/player/p1/vote", &json!({})).await;
    assert_eq!(status, 404);
    assert_eq!(body["detail"], "Team not found");
}

#[tokio::test]
async fn unknown_player_is_player_not_found_once_the_team_exists() {
    let addr = spawn_server().await;
    let (status, _) = get_json(addr, "/api/team").await;
    assert_eq!(status, 200);

    let (status, body) = get_json(addr, "/api/player/nobody").await;
    assert_eq!(status, 404);
    assert_eq!(body["detail"], "Player not found");

    let (status, body) = post_json(addr, "/api/player/nobody/vote", &json!({})).await;
    assert_eq!(status, 404);
    assert_eq!(body["detail"], "Player not found");
}

#[tokio::test]
async fn malformed_bodies_are_rejected_with_400() {
    let addr = spawn_server().await;
    let (status, body) = post_json(addr, "/api/team", &json!({"players": 5})).await;
    assert_eq!(status, 400);
    assert!(body["detail"].is_string());

    let (status, _) = post_json(addr, "/api/team", &json!({"players": [{"id": "p1"}]})).await;
    assert_eq!(status, 400);

    let (status, _) = post_json(addr, "/api/player/p1/vote", &json!({"rit": "fast"})).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn cors_preflight_allows_configured_origins() {
    let addr = spawn_server().await;
    let (status, head, _) = send_raw(
        addr,
        "OPTIONS",
        "/api/team",
        &[("Origin", "http://localhost:3000")],
        None,
    )
    .await;
    assert_eq!(status, 204);
    let head = head.to_ascii_lowercase();
    assert!(head.contains("access-control-allow-origin: http://localhost:3000"));
    assert!(head.contains("access-control-allow-credentials: true"));

    let (_, head, _) = send_raw(
        addr,
        "GET",
        "/api/team",
        &[("Origin", "http://localhost:3000")],
        None,
    )
    .await;
    let head = head.to_ascii_lowercase();
    assert!(head.contains("access-control-allow-origin: http://localhost:3000"));
}
