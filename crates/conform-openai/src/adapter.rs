use std::{env, sync::Arc};

use conform_core::error::{ConformError, Result};

use crate::client::OpenAiClient;

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`conform_core::provider::ChatCompletionProvider`].
///
/// Think of it as the **service locator** for the OpenAI back-end:
///
/// * stores the API key (and optionally a custom base URL),
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * provides a fluent [`OpenAiAdapterBuilder`] so callers don’t have to
///   juggle `Option<String>` manually.
///
/// The type itself purposefully exposes **no additional methods**—all user-
/// facing functionality sits on the generic [`conform_core::Client`] once the
/// adapter is plugged in.
#[derive(Debug)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use conform_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
///
/// The builder pattern keeps future options (proxy URL, organisation ID, …)
/// backwards compatible without breaking existing `build()` calls.
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `OPENAI_API_KEY`
    /// environment variable.
    ///
    /// # Panics
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: None,
        }
    }

    /// Supply the API key explicitly.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at a different base URL (proxies, API-compatible
    /// servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`ConformError::Invalid`] – if the API key is missing.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self.api_key.ok_or(ConformError::Invalid(
            "missing env variable: `OPENAI_API_KEY`".into(),
        ))?;

        let client = match self.base_url {
            Some(base_url) => OpenAiClient::new(api_key).with_base(base_url),
            None => OpenAiClient::new(api_key),
        };

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::OpenAiAdapterBuilder;
    use conform_core::error::ConformError;

    #[test]
    fn build_without_api_key_fails() {
        let err = OpenAiAdapterBuilder::new().build().unwrap_err();
        assert!(matches!(err, ConformError::Invalid(_)));
    }

    #[test]
    fn build_with_explicit_api_key_succeeds() {
        assert!(
            OpenAiAdapterBuilder::new()
                .with_api_key("sk-test")
                .with_base_url("http://localhost:8080/v1")
                .build()
                .is_ok()
        );
    }
}
