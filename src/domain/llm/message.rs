use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a message, as far as it can be read from the client payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
    Other(String),
}

impl MessageRole {
    fn parse(role: &str) -> Self {
        match role {
            "system" => Self::System,
            "user" => Self::User,
            "assistant" => Self::Assistant,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A chat message exactly as the client sent it
///
/// The shape is not validated; OpenAI-style providers receive it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatMessage(Value);

impl ChatMessage {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self(serde_json::json!({ "role": "user", "content": content.into() }))
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self(serde_json::json!({ "role": "assistant", "content": content.into() }))
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self(serde_json::json!({ "role": "system", "content": content.into() }))
    }

    pub fn role(&self) -> Option<MessageRole> {
        self.0
            .get("role")
            .and_then(Value::as_str)
            .map(MessageRole::parse)
    }

    /// Text content of the message.
    ///
    /// Falls back to the compact JSON of the whole message when there is no
    /// string `content` field, so nothing the client sent is dropped.
    pub fn content_text(&self) -> String {
        match self.0.get("content") {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => match &self.0 {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            },
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = ChatMessage::user("Hello");
        assert_eq!(msg.role(), Some(MessageRole::User));
        assert_eq!(msg.content_text(), "Hello");
    }

    #[test]
    fn test_message_is_transparent() {
        let raw = serde_json::json!({ "role": "user", "content": "Hi", "id": 7 });
        let msg: ChatMessage = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(serde_json::to_value(&msg).unwrap(), raw);
    }

    #[test]
    fn test_unknown_shapes_are_accepted() {
        let msg = ChatMessage::new(serde_json::json!("just text"));
        assert_eq!(msg.role(), None);
        assert_eq!(msg.content_text(), "just text");

        let msg = ChatMessage::new(serde_json::json!({ "role": "tool", "text": "x" }));
        assert_eq!(msg.role(), Some(MessageRole::Other("tool".to_string())));
        assert_eq!(msg.content_text(), r#"{"role":"tool","text":"x"}"#);
    }
}
