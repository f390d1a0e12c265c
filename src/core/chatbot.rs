//! Canned-response travel chatbot
//!
//! Replies are picked from an ordered keyword table: the first keyword that
//! appears as a whole word in the visitor's message wins, otherwise the
//! default reply is used.

use serde::{Deserialize, Serialize};

/// Delay before the bot answers, to feel less mechanical (1 second)
pub const DEFAULT_REPLY_DELAY_MS: u32 = 1000;

const DEFAULT_REPLY: &str = "That's a great question! For detailed information, please contact us at 229-456-9188 or epicadventuresbyjen@gmail.com. Our travel experts will be happy to help!";

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier used by the chat window
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "user-message",
            Sender::Bot => "bot-message",
        }
    }
}

/// A single message in the chat window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Ordered keyword → reply table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    entries: Vec<(String, String)>,
    default_reply: String,
}

impl ResponseTable {
    pub fn new(default_reply: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            default_reply: default_reply.into(),
        }
    }

    /// Append a keyword; earlier keywords take precedence
    pub fn with(mut self, keyword: impl Into<String>, reply: impl Into<String>) -> Self {
        self.entries
            .push((keyword.into().to_lowercase(), reply.into()));
        self
    }

    /// The site's travel-agency replies
    pub fn travel_agency() -> Self {
        Self::new(DEFAULT_REPLY)
            .with("hello", "Hello! How can I help you plan your next adventure?")
            .with("hi", "Hi there! What type of trip are you interested in?")
            .with(
                "cruise",
                "We offer amazing cruise packages! Check out our Caribbean, Mediterranean, and Alaska cruises. Would you like more details about any specific destination?",
            )
            .with(
                "tour",
                "Our tours are incredible! We have European tours, Asian adventures, and African safaris. What interests you most?",
            )
            .with(
                "price",
                "Our prices vary depending on the destination and package. Cruises start from $899/person, and tours from $1,899/person. Would you like a personalized quote?",
            )
            .with(
                "booking",
                "To book your trip, you can contact us at 229-456-9188 or email epicadventuresbyjen@gmail.com. We'll help you plan the perfect adventure!",
            )
            .with(
                "contact",
                "You can reach us at 229-456-9188 or epicadventuresbyjen@gmail.com. We respond within 24 hours!",
            )
            .with(
                "help",
                "I can help you with information about our cruises, tours, pricing, and bookings. What would you like to know?",
            )
    }

    /// Pick the reply for a visitor message
    pub fn respond(&self, message: &str) -> &str {
        let lower = message.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        self.entries
            .iter()
            .find(|(keyword, _)| words.contains(&keyword.as_str()))
            .map(|(_, reply)| reply.as_str())
            .unwrap_or(self.default_reply.as_str())
    }

    pub fn default_reply(&self) -> &str {
        &self.default_reply
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::travel_agency()
    }
}

/// Conversation shown in the chat window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visitor message. Blank input is rejected and returns `None`;
    /// otherwise returns the trimmed text.
    pub fn push_user(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        Some(text.to_string())
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::bot(text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_reply() {
        let table = ResponseTable::travel_agency();
        assert!(table.respond("Tell me about a CRUISE").starts_with("We offer amazing cruise"));
        assert!(table.respond("price?").starts_with("Our prices vary"));
    }

    #[test]
    fn test_table_order_wins() {
        let table = ResponseTable::travel_agency();
        // both "hello" and "cruise" present; "hello" comes first in the table
        assert!(table.respond("hello, any cruise deals?").starts_with("Hello!"));
    }

    #[test]
    fn test_keywords_match_whole_words_only() {
        let table = ResponseTable::travel_agency();
        // "which" contains "hi" but is not the greeting
        assert!(table.respond("which cruise is best").starts_with("We offer amazing cruise"));
        assert!(table.respond("tours").starts_with("That's a great question"));
    }

    #[test]
    fn test_default_reply() {
        let table = ResponseTable::travel_agency();
        assert_eq!(table.respond("what about visas"), table.default_reply());
        assert_eq!(table.respond(""), table.default_reply());
    }

    #[test]
    fn test_custom_table() {
        let table = ResponseTable::new("?").with("Ping", "pong");
        assert_eq!(table.respond("ping"), "pong");
        assert_eq!(table.respond("pin"), "?");
    }

    #[test]
    fn test_transcript_rejects_blank_input() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.push_user("   "), None);
        assert!(transcript.is_empty());

        assert_eq!(transcript.push_user("  hi  "), Some("hi".to_string()));
        transcript.push_bot("Hi there!");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0], ChatMessage::user("hi"));
        assert_eq!(transcript.messages()[1].sender, Sender::Bot);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_value(ChatMessage::bot("ok")).unwrap();
        assert_eq!(json, serde_json::json!({"sender": "bot", "text": "ok"}));
    }
}
