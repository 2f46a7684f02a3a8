//! Shared helpers for the integration suite: spin up an engine with
//! default config and drive sessions through the public contract only.

use questhall::config::Config;
use questhall::engine::contract::{PlayRequest, PlayResponse};
use questhall::engine::GameEngine;

pub fn engine() -> GameEngine {
    GameEngine::new(Config::default())
}

/// Open a new session of `title` and return the opening response.
pub fn start(engine: &GameEngine, title: u32) -> PlayResponse {
    let response = engine.play(PlayRequest::new_session(title));
    assert_ne!(response.session_id, "-1", "session should open cleanly");
    response
}

/// Run one command turn.
pub fn turn(engine: &GameEngine, session_id: &str, command: &str) -> PlayResponse {
    engine.play(PlayRequest::command(session_id, command))
}

/// Walk a sequence of commands, returning the final response.
#[allow(dead_code)] // Not every test file drives multi-step walks.
pub fn walk(engine: &GameEngine, session_id: &str, commands: &[&str]) -> PlayResponse {
    let mut last = None;
    for command in commands {
        last = Some(turn(engine, session_id, command));
    }
    last.expect("walk needs at least one command")
}

/// Parse the points total out of a `score` response.
#[allow(dead_code)]
pub fn score(engine: &GameEngine, session_id: &str) -> u32 {
    let response = turn(engine, session_id, "score");
    response
        .response_text
        .split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .expect("score response starts with the points total")
}
