use conform_core::error::ConformError;
use conform_core::message::{Message, Role};
use conform_core::provider::CompletionParameters;
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            top_p: None,
            n: None,
            response_format: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    top_p: f64,
    n: i64,
    response_format: serde_json::Value
);

impl<M> TryFrom<CompletionParameters<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage>,
{
    type Error = ConformError;

    fn try_from(value: CompletionParameters<M>) -> Result<Self, Self::Error> {
        Ok(Self {
            model: map_model(&value.model)
                .ok_or(ConformError::InvalidRequest(format!(
                    "backend does not support selected model: {:?}",
                    value.model
                )))?
                .into(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
            top_p: None,
            n: None,
            response_format: value.response_format,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    pub content: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: common::Usage,
    pub system_fingerprint: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
}

impl From<Role> for MessageRole {
    fn from(value: Role) -> Self {
        match value {
            Role::System => MessageRole::System,
            Role::Assistant => MessageRole::Assistant,
            Role::User => MessageRole::User,
        }
    }
}

impl From<MessageRole> for Role {
    fn from(value: MessageRole) -> Self {
        match value {
            MessageRole::User => Role::User,
            MessageRole::System => Role::System,
            MessageRole::Assistant => Role::Assistant,
        }
    }
}

impl From<Message> for ChatCompletionMessage {
    fn from(value: Message) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
            name: value.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conform_core::model::{Model, OpenAiModel};
    use serde_json::json;

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest::new(
            "gpt-4o-mini".into(),
            vec![
                Message::new("You are terse.".into(), Role::System).into(),
                Message::new("Extract the address.".into(), Role::User).into(),
            ],
        )
    }

    #[test]
    fn unset_options_are_skipped_during_serialization() {
        let value = serde_json::to_value(request()).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert!(value.get("temperature").is_none());
        assert!(value.get("response_format").is_none());
    }

    #[test]
    fn response_format_is_attached_verbatim() {
        let format = json!({ "type": "json_schema", "json_schema": { "name": "x" } });
        let value =
            serde_json::to_value(request().response_format(format.clone())).unwrap();

        assert_eq!(value["response_format"], format);
    }

    #[test]
    fn builds_request_from_completion_parameters() {
        let params = CompletionParameters::new(
            vec![Message::new("hi".into(), Role::User)],
            Model::OpenAi(OpenAiModel::Gpt4o),
        )
        .with_temperature(0.2);

        let request = ChatCompletionRequest::try_from(params).unwrap();
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
    }

    #[test]
    fn deserializes_a_chat_completion_response() {
        let body = json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "{\"city\":\"Berlin\"}" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Stop));
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("{\"city\":\"Berlin\"}")
        );
        assert_eq!(response.usage.total_tokens, 15);
    }
}
