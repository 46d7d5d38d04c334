//! Webhook message payload model.
//!
//! This module provides types and helpers for:
//! - Building a webhook message ([`Message`])
//! - Attaching rich embed cards ([`Embed`] and its nested parts)
//! - Formatting wire timestamps ([`timestamp`])
//! - Converting hex color strings ([`parse_color`], [`try_parse_color`])

mod embed;
mod format;
mod model;

#[cfg(test)]
mod format_tests;
#[cfg(test)]
mod model_tests;

pub use embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia, EmbedProvider};
pub use format::{ColorParseError, parse_color, timestamp, timestamp_with, try_parse_color};
pub use model::{MAX_EMBEDS, Message};
