//! Blocking client for the remote game-session service.
//!
//! The service hosts games and replays every submitted move through its
//! own copy of the rules engine. Three endpoints, all under a configurable
//! base URL, all authenticated with basic auth (login + secret token):
//!
//! - `POST /games` creates a session and returns `{"id", "state"}`;
//! - `PUT /games/{id}` submits `{"kind", "target"}` and returns the
//!   normalized move, or the terminal `{"winner"}` signal;
//! - `GET /games/{id}` fetches the current state.
//!
//! Failure mapping is uniform: 401 → [`ApiError::InvalidCredentials`],
//! 404 → [`ApiError::UnknownGame`], 406 → [`ApiError::Rejected`], anything
//! else unexpected → [`ApiError::UnexpectedStatus`], with transport
//! problems surfacing as [`ApiError::Transport`]. Error payloads carry the
//! server's `message` field when present.
//!
//! The interactive loop talks to the service through the [`Session`]
//! trait and [`submit_and_sync`], which refetches the authoritative state
//! after every exchange so the caller never reasons from a stale snapshot.

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AppliedMove, GameState, MoveKind, Position};
use crate::error::ApiError;

/// Default base URL: a deployment of the game-session service on the
/// local machine. Point `--url` at a hosted instance to play remotely.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/quoridor";

/// Login and secret token sent with every request.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

/// Outcome of a submitted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveReply {
    /// The move was accepted; here is its normalized form.
    Played(AppliedMove),
    /// The game is over.
    Finished { winner: String },
}

#[derive(Deserialize)]
struct GameEnvelope {
    id: String,
    state: GameState,
}

#[derive(Serialize)]
struct MoveBody {
    kind: MoveKind,
    target: Position,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoveReplyWire {
    Finished { winner: String },
    Played { kind: MoveKind, target: Position },
}

#[derive(Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// A configured HTTP client bound to one set of credentials.
pub struct GameClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl GameClient {
    /// Client against the default hosted service.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, credentials)
    }

    /// Client against an alternate deployment (tests, local server).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Create a new game session. Returns the session id and the initial
    /// state.
    pub fn create_game(&self) -> Result<(String, GameState), ApiError> {
        let url = format!("{}/games", self.base_url);
        debug!(%url, "creating game session");
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.secret))
            .send()?;

        if response.status() == StatusCode::OK {
            let envelope: GameEnvelope = response.json()?;
            debug!(id = %envelope.id, "game session created");
            return Ok((envelope.id, envelope.state));
        }
        Err(self.fail(response))
    }

    /// Submit one move to a session.
    pub fn submit_move(
        &self,
        game_id: &str,
        kind: MoveKind,
        target: Position,
    ) -> Result<MoveReply, ApiError> {
        let url = format!("{}/games/{}", self.base_url, game_id);
        debug!(%url, %kind, %target, "submitting move");
        let response = self
            .http
            .put(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.secret))
            .json(&MoveBody { kind, target })
            .send()?;

        if response.status() == StatusCode::OK {
            return Ok(match response.json()? {
                MoveReplyWire::Finished { winner } => MoveReply::Finished { winner },
                MoveReplyWire::Played { kind, target } => {
                    MoveReply::Played(AppliedMove::new(kind, target))
                }
            });
        }
        Err(self.fail(response))
    }

    /// Fetch the current state of a session.
    pub fn fetch_game(&self, game_id: &str) -> Result<(String, GameState), ApiError> {
        let url = format!("{}/games/{}", self.base_url, game_id);
        debug!(%url, "fetching game state");
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.secret))
            .send()?;

        if response.status() == StatusCode::OK {
            let envelope: GameEnvelope = response.json()?;
            return Ok((envelope.id, envelope.state));
        }
        Err(self.fail(response))
    }

    fn fail(&self, response: Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .unwrap_or_default()
            .message;
        match status {
            StatusCode::UNAUTHORIZED => ApiError::InvalidCredentials(message),
            StatusCode::NOT_FOUND => ApiError::UnknownGame(message),
            StatusCode::NOT_ACCEPTABLE => ApiError::Rejected(message),
            other => ApiError::UnexpectedStatus {
                status: other.as_u16(),
                message,
            },
        }
    }
}

/// One live game session: submit moves, fetch the authoritative state.
///
/// The trait seams the network off the interactive loop; tests drive the
/// loop against an in-memory implementation backed by the rules engine.
pub trait Session {
    /// Submit one move for this session's player.
    fn submit(&mut self, kind: MoveKind, target: Position) -> Result<MoveReply, ApiError>;

    /// Fetch the current authoritative state.
    fn fetch(&mut self) -> Result<GameState, ApiError>;
}

/// A session hosted by the remote service.
pub struct RemoteSession {
    client: GameClient,
    game_id: String,
}

impl RemoteSession {
    /// Create a game on the service and bind a session to it.
    pub fn create(client: GameClient) -> Result<(Self, GameState), ApiError> {
        let (game_id, state) = client.create_game()?;
        Ok((Self { client, game_id }, state))
    }

    /// The server-assigned session id.
    #[must_use]
    pub fn game_id(&self) -> &str {
        &self.game_id
    }
}

impl Session for RemoteSession {
    fn submit(&mut self, kind: MoveKind, target: Position) -> Result<MoveReply, ApiError> {
        self.client.submit_move(&self.game_id, kind, target)
    }

    fn fetch(&mut self) -> Result<GameState, ApiError> {
        self.client.fetch_game(&self.game_id).map(|(_, state)| state)
    }
}

/// Outcome of one move exchanged through [`submit_and_sync`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The move was accepted; here is the refreshed state.
    Advanced(GameState),
    /// The move was rejected; here is why, plus the refreshed state to
    /// decide again from.
    Rejected { reason: String, state: GameState },
    /// The game is over.
    Finished { winner: String },
}

/// Submit one move and keep the caller's state in sync with the server.
///
/// The authoritative state is refetched after accepted *and* rejected
/// moves: a rejection means the caller's snapshot disagreed with the
/// server, so deciding again from the same snapshot would only resubmit
/// the same move. Transport and credential failures propagate as errors.
pub fn submit_and_sync(
    session: &mut impl Session,
    kind: MoveKind,
    target: Position,
) -> Result<SyncOutcome, ApiError> {
    match session.submit(kind, target) {
        Ok(MoveReply::Played(_)) => Ok(SyncOutcome::Advanced(session.fetch()?)),
        Ok(MoveReply::Finished { winner }) => Ok(SyncOutcome::Finished { winner }),
        Err(ApiError::Rejected(reason)) => {
            warn!(%reason, "move rejected, refetching state");
            Ok(SyncOutcome::Rejected {
                reason,
                state: session.fetch()?,
            })
        }
        Err(err) => Err(err),
    }
}
