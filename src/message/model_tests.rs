//! Tests for `Message`.

use super::{Embed, Message};

mod builder {
    use super::*;

    #[test]
    fn new_message_is_empty() {
        let message = Message::new();

        assert!(message.is_empty());
        assert_eq!(message, Message::default());
    }

    #[test]
    fn with_content_makes_it_non_empty() {
        let message = Message::new().with_content("hello");

        assert!(!message.is_empty());
        assert_eq!(message.content.as_deref(), Some("hello"));
    }

    #[test]
    fn empty_content_string_still_counts_as_empty() {
        assert!(Message::new().with_content("").is_empty());
    }

    #[test]
    fn an_embed_makes_it_non_empty() {
        let message = Message::new().with_embed(Embed::new().with_title("t"));

        assert!(!message.is_empty());
        assert_eq!(message.embeds.len(), 1);
    }

    #[test]
    fn with_embed_appends_in_order() {
        let message = Message::new()
            .with_embed(Embed::new().with_title("first"))
            .with_embed(Embed::new().with_title("second"));

        assert_eq!(message.embeds[0].title.as_deref(), Some("first"));
        assert_eq!(message.embeds[1].title.as_deref(), Some("second"));
    }

    #[test]
    fn overrides_are_recorded() {
        let message = Message::new()
            .with_content("hi")
            .with_username("bot")
            .with_avatar_url("https://example.com/a.png")
            .with_tts(true);

        assert_eq!(message.username.as_deref(), Some("bot"));
        assert_eq!(message.avatar_url.as_deref(), Some("https://example.com/a.png"));
        assert!(message.tts);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn unset_fields_are_omitted_not_null() {
        let message = Message::new().with_content("hello");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json, serde_json::json!({"content": "hello"}));
    }

    #[test]
    fn false_tts_is_omitted_true_is_kept() {
        let silent = serde_json::to_value(Message::new().with_content("x")).unwrap();
        assert!(silent.get("tts").is_none());

        let spoken = serde_json::to_value(Message::new().with_content("x").with_tts(true)).unwrap();
        assert_eq!(spoken["tts"], true);
    }

    #[test]
    fn full_message_uses_wire_field_names() {
        let message = Message::new()
            .with_content("hello")
            .with_username("bot")
            .with_avatar_url("https://example.com/a.png")
            .with_embed(Embed::new().with_title("t"));

        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["avatar_url"], "https://example.com/a.png");
        assert_eq!(json["embeds"][0]["title"], "t");
    }
}
