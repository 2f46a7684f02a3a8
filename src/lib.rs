//! # Questhall - a multi-title text adventure engine
//!
//! Questhall runs several self-contained adventure titles (each its own
//! room graph, item table, monster table, and flavor text) behind one
//! small request/response contract. Any number of players can be
//! mid-game at once; each session owns a private, mutable copy of its
//! title's world, keyed by a session id and evicted after idle timeout.
//!
//! ## Quick Start
//!
//! ```rust
//! use questhall::config::Config;
//! use questhall::engine::contract::PlayRequest;
//! use questhall::engine::GameEngine;
//!
//! let engine = GameEngine::new(Config::default());
//! for title in engine.list_titles() {
//!     println!("{}: {}", title.id, title.name);
//! }
//! let response = engine.play(PlayRequest::new_session(1));
//! println!("{}", response.response_text);
//! let turn = engine.play(PlayRequest::command(&response.session_id, "go west"));
//! println!("{}", turn.response_text);
//! ```
//!
//! ## Module Organization
//!
//! - [`engine`] - Session store, command pipeline, movement, items,
//!   monsters, vitality, and the orchestrator front ends call
//! - [`world`] - The world data model, title registry, and built-in titles
//! - [`map`] - Per-session map discovery and the ASCII map renderer
//! - [`config`] - TOML configuration with defaults and validation
//! - [`logutil`] - Log sanitization helpers
//!
//! ## Contract
//!
//! Exactly two operations cross the engine boundary: `list_titles` and
//! `play`. The play boundary never raises — unknown sessions, bad
//! titles, and internal faults all come back as well-formed responses
//! with the reserved "-1" session id.

pub mod config;
pub mod engine;
pub mod logutil;
pub mod map;
pub mod world;
