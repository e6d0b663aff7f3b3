use std::{future::Future, pin::Pin, sync::Arc};

use conform_core::{
    error::Result,
    provider::{ChatCompletionProvider, Completion, CompletionParameters, UsageReport},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: CompletionParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>>
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::try_from(params)?;

            let response = client.chat_completion(request).await?;

            let usage = UsageReport {
                prompt_tokens: response.usage.prompt_tokens as i64,
                completion_tokens: response.usage.completion_tokens as i64,
                total_tokens: response.usage.total_tokens as i64,
            };

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            match first_choice.finish_reason {
                None | Some(FinishReason::Stop) => {
                    let text = first_choice.message.content.ok_or_else(|| {
                        OpenAiError::Format("response message has no content".into())
                    })?;

                    Ok(Completion {
                        text,
                        usage: Some(usage),
                    })
                }
                Some(other) => Err(OpenAiError::Format(format!(
                    "unhandled finish reason on API: {other:?}"
                ))
                .into()),
            }
        })
    }
}
