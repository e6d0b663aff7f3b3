//! Generic, lightweight client that executes completion parameters against a
//! single concrete backend and deserializes the reply.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that the message type you pass matches what the backend
//! expects; no dynamic dispatch or object-safety hurdles appear in user
//! code.
//!
//! ```rust,no_run
//! use conform_core::{
//!     client::Client,
//!     message::{Message, Role},
//!     model::{Model, OpenAiModel},
//!     provider::CompletionParameters,
//!     schema::JsonSchemaFormat,
//! };
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, JsonSchema)]
//! struct Greeting { text: String }
//!
//! # async fn run<B: conform_core::provider::ChatCompletionProvider>(backend: B) -> conform_core::error::Result<()>
//! # where Message: Into<B::Message> {
//! let client = Client::new(backend);
//!
//! let params = CompletionParameters::new(
//!     vec![Message::new("Say hello as JSON!".into(), Role::User)],
//!     Model::OpenAi(OpenAiModel::Gpt4oMini),
//! )
//! .with_response_format(
//!     JsonSchemaFormat::for_type::<Greeting>("greeting")
//!         .with_strict(true)
//!         .into_response_format(),
//! );
//!
//! let greeting: Greeting = client.complete_structured(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Any backend crate (e.g. `conform-openai`) just implements
//! [`ChatCompletionProvider`] and the same client works out of the box.
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{
    error::Result,
    provider::{ChatCompletionProvider, Completion, CompletionParameters},
};

/// A client bound to a single provider.
///
/// Cloning the client is always cheap: the backend lives behind an `Arc`.
#[derive(Debug)]
pub struct Client<B> {
    backend: Arc<B>,
}

impl<B> Clone for Client<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> Client<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific
    /// settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Raw pass-through: run the round-trip and return the reply text as-is.
    pub async fn chat_complete<M>(&self, params: CompletionParameters<M>) -> Result<Completion>
    where
        M: Into<B::Message> + Send + Sync,
    {
        self.backend.chat_complete(params).await
    }

    /// Run the round-trip and deserialize the reply text into `T`.
    ///
    /// There is no retry and no validation against the schema: if the
    /// returned text does not parse as `T`, the [`serde_json`] failure
    /// propagates unchanged as
    /// [`ConformError::Serialization`](crate::error::ConformError::Serialization).
    pub async fn complete_structured<T, M>(&self, params: CompletionParameters<M>) -> Result<T>
    where
        T: DeserializeOwned,
        M: Into<B::Message> + Send + Sync,
    {
        let completion = self.backend.chat_complete(params).await?;
        Ok(serde_json::from_str(&completion.text)?)
    }
}

#[cfg(test)]
mod tests {
    use std::{future::Future, pin::Pin};

    use serde::Deserialize;

    use super::Client;
    use crate::{
        error::{ConformError, Result},
        message::{Message, Role},
        model::{Model, OpenAiModel},
        provider::{ChatCompletionProvider, Completion, CompletionParameters},
    };

    /// Backend that answers every prompt with a canned string.
    struct CannedBackend {
        reply: &'static str,
    }

    impl ChatCompletionProvider for CannedBackend {
        type Message = Message;

        fn chat_complete<'p, M>(
            &self,
            _params: CompletionParameters<M>,
        ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>>
        where
            M: Into<Self::Message> + Send + Sync + 'p,
        {
            let text = self.reply.to_owned();
            Box::pin(async move {
                Ok(Completion {
                    text,
                    usage: None,
                })
            })
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Greeting {
        text: String,
    }

    fn params() -> CompletionParameters<Message> {
        CompletionParameters::new(
            vec![Message::new("Say hello as JSON!".into(), Role::User)],
            Model::OpenAi(OpenAiModel::Gpt4oMini),
        )
    }

    #[tokio::test]
    async fn deserializes_reply_into_target_type() {
        let client = Client::new(CannedBackend {
            reply: r#"{"text":"hello"}"#,
        });

        let greeting: Greeting = client.complete_structured(params()).await.unwrap();
        assert_eq!(
            greeting,
            Greeting {
                text: "hello".into()
            }
        );
    }

    #[tokio::test]
    async fn malformed_reply_surfaces_as_serialization_error() {
        let client = Client::new(CannedBackend {
            reply: "not json at all",
        });

        let err = client
            .complete_structured::<Greeting, _>(params())
            .await
            .unwrap_err();
        assert!(matches!(err, ConformError::Serialization(_)));
    }

    #[tokio::test]
    async fn chat_complete_passes_text_through() {
        let client = Client::new(CannedBackend {
            reply: "plain text",
        });

        let completion = client.chat_complete(params()).await.unwrap();
        assert_eq!(completion.text, "plain text");
    }
}
