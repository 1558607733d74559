// Copyright (C) 2025  Vince Vasta.
// SPDX-License-Identifier: Apache-2.0

//! HTTP JSON connection to the game server.
use reqwest::{Client, Response, header};
use serde::de::DeserializeOwned;

use felt_core::{
    message::{ActionRequest, ActionResponse, Stats},
    snapshot::GameStateSnapshot,
};

use crate::{ClientError, GameApi};

const STATE_PATH: &str = "/api/game/state";
const NEW_HAND_PATH: &str = "/api/game/new";
const ACTION_PATH: &str = "/api/game/action";
const STATS_PATH: &str = "/api/game/stats";

/// Connection to game server.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Creates a connection for a server url like `http://127.0.0.1:5001`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let res = self.client.get(self.url(path)).send().await?;
        Ok(check_status(res)?.json::<T>().await?)
    }
}

impl GameApi for HttpApi {
    async fn fetch_state(&self) -> Result<GameStateSnapshot, ClientError> {
        self.get(STATE_PATH).await
    }

    async fn new_hand(&self) -> Result<(), ClientError> {
        let res = self
            .client
            .post(self.url(NEW_HAND_PATH))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        // Only the status matters, the body is a server echo.
        check_status(res)?;
        Ok(())
    }

    async fn submit_action(&self, req: &ActionRequest) -> Result<ActionResponse, ClientError> {
        let res = self
            .client
            .post(self.url(ACTION_PATH))
            .json(req)
            .send()
            .await?;

        Ok(check_status(res)?.json::<ActionResponse>().await?)
    }

    async fn fetch_stats(&self) -> Result<Stats, ClientError> {
        self.get(STATS_PATH).await
    }
}

fn check_status(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        Err(ClientError::Status(status.as_u16()))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        http::StatusCode,
        routing::{get, post},
    };
    use felt_core::poker::{Chips, Phase, PlayerAction};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> HttpApi {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        HttpApi::new(&format!("http://{addr}/"))
    }

    #[tokio::test]
    async fn fetch_state() {
        let router = Router::new().route(
            STATE_PATH,
            get(|| async {
                Json(json!({
                    "initialized": true,
                    "phase": "turn",
                    "pot": 200,
                    "current_bet": 0,
                    "player": {"chips": 900, "hand": [{"rank": "Q", "suit": "Hearts"}]},
                    "machine": {"chips": 900, "hand_count": 2},
                    "community_cards": [],
                    "winner": null,
                    "game_over": false
                }))
            }),
        );

        let api = serve(router).await;
        let s = api.fetch_state().await.unwrap();
        assert_eq!(s.phase, Phase::Turn);
        assert_eq!(s.pot, Chips::new(200));
        assert_eq!(s.player.hand.len(), 1);
        assert_eq!(s.machine.hand_count, Some(2));
    }

    #[tokio::test]
    async fn submit_action() {
        let router = Router::new().route(
            ACTION_PATH,
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"action": "raise", "amount": 50}));
                Json(json!({"status": "success", "machine_action": "call", "machine_amount": 0}))
            }),
        );

        let api = serve(router).await;
        let req = ActionRequest {
            action: PlayerAction::Raise,
            amount: Chips::new(50),
        };

        let res = api.submit_action(&req).await.unwrap();
        assert_eq!(res.machine_action.as_deref(), Some("call"));
        assert!(res.error.is_none());
    }

    #[tokio::test]
    async fn domain_error_is_a_response() {
        let router = Router::new().route(
            ACTION_PATH,
            post(|| async { Json(json!({"error": "Game is over or player has folded"})) }),
        );

        let api = serve(router).await;
        let req = ActionRequest {
            action: PlayerAction::Call,
            amount: Chips::ZERO,
        };

        let res = api.submit_action(&req).await.unwrap();
        assert_eq!(res.error.as_deref(), Some("Game is over or player has folded"));
    }

    #[tokio::test]
    async fn new_hand_and_stats() {
        let router = Router::new()
            .route(
                NEW_HAND_PATH,
                post(|| async { Json(json!({"status": "success"})) }),
            )
            .route(
                STATS_PATH,
                get(|| async {
                    Json(json!({"player_chips": 950, "machine_chips": 1050, "total_chips": 2000}))
                }),
            );

        let api = serve(router).await;
        api.new_hand().await.unwrap();

        let stats = api.fetch_stats().await.unwrap();
        assert_eq!(stats.player_chips, Chips::new(950));
        assert_eq!(stats.total_chips, Chips::new(2000));
    }

    #[tokio::test]
    async fn http_failures() {
        let router = Router::new()
            .route(
                NEW_HAND_PATH,
                post(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"error": "Internal server error"})),
                    )
                }),
            )
            .route(STATE_PATH, get(|| async { "not json" }));

        let api = serve(router).await;
        assert_eq!(api.new_hand().await, Err(ClientError::Status(500)));
        assert!(matches!(api.fetch_state().await, Err(ClientError::Decode(_))));

        // Unknown routes are HTTP failures too.
        assert_eq!(api.fetch_stats().await, Err(ClientError::Status(404)));
    }

    #[tokio::test]
    async fn connection_refused() {
        // Bind and drop a listener to get a free port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpApi::new(&format!("http://{addr}"));
        assert!(matches!(
            api.fetch_state().await,
            Err(ClientError::Transport(_))
        ));
    }
}
