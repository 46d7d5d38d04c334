//! Top-level webhook message type.

use serde::Serialize;

use super::Embed;

/// Maximum number of embeds the endpoint accepts per message.
pub const MAX_EMBEDS: usize = 10;

/// A webhook message payload.
///
/// Every field is optional on the wire, but a deliverable message must
/// carry content or at least one embed; [`WebhookSender::send`] rejects
/// anything else before touching the network. Unset fields are omitted
/// from the serialized JSON entirely rather than sent as `null`.
///
/// # Example
///
/// ```
/// use discord_hook::message::{Embed, Message};
///
/// let message = Message::new()
///     .with_content("deploy finished")
///     .with_username("release-bot")
///     .with_embed(Embed::new().with_title("v1.4.2"));
/// ```
///
/// [`WebhookSender::send`]: crate::webhook::WebhookSender::send
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    /// Plain text body of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Display name override for this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Avatar image URL override for this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Whether the message is read aloud as text-to-speech.
    #[serde(skip_serializing_if = "is_false")]
    pub tts: bool,
    /// Rich embed cards, in display order. At most [`MAX_EMBEDS`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !value
}

impl Message {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the display username override.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the avatar image URL override.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Marks the message as text-to-speech.
    #[must_use]
    pub const fn with_tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    /// Appends an embed.
    #[must_use]
    pub fn with_embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Replaces the embed list.
    #[must_use]
    pub fn with_embeds(mut self, embeds: Vec<Embed>) -> Self {
        self.embeds = embeds;
        self
    }

    /// Returns true if the message carries neither content nor embeds.
    ///
    /// Whitespace-only content still counts as content; only `None`,
    /// the empty string, and an empty embed list make a message empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.as_deref().is_none_or(str::is_empty) && self.embeds.is_empty()
    }
}
