//! The backend seam: one trait, one parameter struct, one reply struct.
//!
//! A **backend** turns a chat prompt into a network call to a concrete
//! provider (OpenAI, Ollama, Anthropic, …) and hands back the reply text.
//!
//! The trait is intentionally minimal:
//!
//! * **One associated type** – the in-memory `Message` representation this
//!   provider accepts.
//! * **One async-ish method** – `chat_complete`, which performs a *single*
//!   non-streaming round-trip and returns the first content item's text.
//!
//! The method returns a [`Pin<Box<dyn Future>>`] so we stay object-safe
//! without pulling in `async_trait`.

use std::{future::Future, pin::Pin};

use crate::{error::Result, model::Model};

/// Everything a backend needs for one completion round-trip.
///
/// `response_format` carries the (already serialized) response-format value,
/// typically the output of
/// [`crate::schema::JsonSchemaFormat::into_response_format`]. Backends attach
/// it to the request unchanged.
#[derive(Debug, Clone)]
pub struct CompletionParameters<M> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub response_format: Option<serde_json::Value>,
}

impl<M> CompletionParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            response_format: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_response_format(mut self, response_format: serde_json::Value) -> Self {
        self.response_format = Some(response_format);
        self
    }
}

/// A provider's reply: the first returned content item's text, plus
/// best-effort token accounting where the provider reports it.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: Option<UsageReport>,
}

#[derive(Debug, Clone)]
pub struct UsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

/// Execute one chat completion against a concrete provider.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    ///
    /// A simple setup can re-use [`crate::message::Message`]. Providers with
    /// richer wire formats can supply their own struct.
    type Message: Send + Sync + 'static;

    /// Perform a single non-streaming round-trip and return the reply.
    fn chat_complete<'p, M>(
        &self,
        params: CompletionParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>>
    where
        M: Into<Self::Message> + Send + Sync + 'p;
}
