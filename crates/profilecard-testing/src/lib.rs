//! Testing infrastructure for profilecard tests.
//!
//! - `fixtures`: API payloads and decoded profiles
//! - `source`: scripted `ProfileSource` with controllable settle order
//! - `sink`: `ErrorSink` that records what it was told
//! - `server`: loopback HTTP server serving canned responses
//! - `world`: isolated environment for running the CLI binary

pub mod fixtures;
pub mod server;
pub mod sink;
pub mod source;
pub mod world;

pub use server::{CannedResponse, LoopbackServer};
pub use sink::RecordingSink;
pub use source::{Gate, ScriptedSource};
pub use world::TestWorld;
