//! discord-hook: Discord-style webhook client
//!
//! A library for building rich embed message payloads and delivering
//! them to a webhook endpoint via HTTP POST, with rate-limit aware
//! retry handling.

pub mod message;
pub mod time;
pub mod webhook;
