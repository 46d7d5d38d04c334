//! Rich embed card types.
//!
//! An [`Embed`] is a card attached to a webhook message: title,
//! description, color stripe, images, attributed author, footer, and a
//! grid of name/value fields. Everything is optional and unset parts
//! are omitted from the serialized JSON. Field names follow the wire
//! protocol exactly (`avatar_url`, `proxy_icon_url`, ...).

use serde::Serialize;

/// A rich embed card.
///
/// Build one with the consuming `with_*` setters:
///
/// ```
/// use discord_hook::message::{Embed, EmbedField, parse_color, timestamp};
///
/// let embed = Embed::new()
///     .with_title("Build #1042")
///     .with_description("all checks passed")
///     .with_color(parse_color("#00ff00"))
///     .with_timestamp(timestamp())
///     .with_field(EmbedField::inline("branch", "main"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL the title links to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// ISO-8601 timestamp shown on the card, see [`timestamp`].
    ///
    /// [`timestamp`]: super::timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// RGB color of the side stripe (0..=0xFFFFFF), see [`parse_color`].
    ///
    /// [`parse_color`]: super::parse_color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbedProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

impl Embed {
    /// Creates an empty embed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the URL the title links to.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the card timestamp (ISO-8601 string).
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Sets the stripe color.
    #[must_use]
    pub const fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the footer.
    #[must_use]
    pub fn with_footer(mut self, footer: EmbedFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Sets the main image.
    #[must_use]
    pub fn with_image(mut self, image: EmbedMedia) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the thumbnail image.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: EmbedMedia) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Sets the video.
    #[must_use]
    pub fn with_video(mut self, video: EmbedMedia) -> Self {
        self.video = Some(video);
        self
    }

    /// Sets the provider attribution.
    #[must_use]
    pub fn with_provider(mut self, provider: EmbedProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Sets the author attribution.
    #[must_use]
    pub fn with_author(mut self, author: EmbedAuthor) -> Self {
        self.author = Some(author);
        self
    }

    /// Appends a name/value field.
    #[must_use]
    pub fn with_field(mut self, field: EmbedField) -> Self {
        self.fields.push(field);
        self
    }
}

/// Footer line at the bottom of an embed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmbedFooter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

impl EmbedFooter {
    /// Creates a footer with the given text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Sets the footer icon URL.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Sets the proxied footer icon URL.
    #[must_use]
    pub fn with_proxy_icon_url(mut self, proxy_icon_url: impl Into<String>) -> Self {
        self.proxy_icon_url = Some(proxy_icon_url.into());
        self
    }
}

/// Image, thumbnail, or video attachment on an embed.
///
/// The wire shape is identical for all three slots, so one type covers
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmbedMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl EmbedMedia {
    /// Creates a media attachment pointing at the given URL.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Sets the proxied URL.
    #[must_use]
    pub fn with_proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Sets the display dimensions in pixels.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Provider attribution shown above the embed title.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmbedProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl EmbedProvider {
    /// Creates a provider attribution with the given name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: None,
        }
    }

    /// Sets the provider URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Author attribution shown at the top of an embed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmbedAuthor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

impl EmbedAuthor {
    /// Creates an author attribution with the given name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the author URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the author icon URL.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Sets the proxied author icon URL.
    #[must_use]
    pub fn with_proxy_icon_url(mut self, proxy_icon_url: impl Into<String>) -> Self {
        self.proxy_icon_url = Some(proxy_icon_url.into());
        self
    }
}

/// A name/value field in an embed's field grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmbedField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the field renders side by side with its neighbors.
    #[serde(skip_serializing_if = "is_false")]
    pub inline: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !value
}

impl EmbedField {
    /// Creates a block (non-inline) field.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            inline: false,
        }
    }

    /// Creates an inline field.
    #[must_use]
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inline: true,
            ..Self::new(name, value)
        }
    }
}
