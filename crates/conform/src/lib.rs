//! # `conform` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate               | What it provides                                                              |
//! |---------------------|-------------------------------------------------------------------------------|
//! | **`conform-core`**  | Schema strictification, response-format wrapper, generic client, errors       |
//! | **`conform-openai`**| Thin HTTP client that implements the provider trait for OpenAI *(optional)*   |
//!
//! By default the crate re-exports **core** plus the OpenAI adapter. Disable
//! default features to stay 100 % provider-agnostic:
//!
//! ```toml
//! [dependencies]
//! conform = { version = "0.1", default-features = false }
//! ```
//!
//! ## Design philosophy
//!
//! * **Opt-in providers** – No unwanted dependencies: enabling `openai` pulls
//!   in `reqwest`, TLS, etc., otherwise your binary stays lean.
//! * **No procedural macros** – Everything is powered by ordinary traits and
//!   `impl`s so you can understand and extend the code without magic.
//! * **Strict by construction** – Schemas generated with
//!   [`schemars`](https://docs.rs/schemars) are *closed* before they leave
//!   the process: every object-shaped subschema forbids undeclared
//!   properties, which is what providers with guaranteed structured outputs
//!   require.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use conform::{
//!     Client,
//!     message::{Message, Role},
//!     model::{Model, OpenAiModel},
//!     provider::CompletionParameters,
//!     schema::JsonSchemaFormat,
//! };
//!
//! // Define the answer shape
//! #[derive(serde::Deserialize, schemars::JsonSchema)]
//! struct Hello { greeting: String }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = conform::openai::OpenAiAdapterBuilder::new_from_env().build()?;
//!     let client = Client::new(backend);
//!
//!     let params = CompletionParameters::new(
//!         vec![Message::new("Say hello!".into(), Role::User)],
//!         Model::OpenAi(OpenAiModel::Gpt4oMini),
//!     )
//!     .with_response_format(
//!         JsonSchemaFormat::for_type::<Hello>("hello")
//!             .with_strict(true)
//!             .into_response_format(),
//!     );
//!
//!     let answer: Hello = client.complete_structured(params).await?;
//!     println!("{}", answer.greeting);
//!     Ok(())
//! }
//! ```
//!
//! ## Crate contents
//!
//! The `pub use` statements below simply forward the public API of the
//! individual crates so users can write `conform::Client` instead of juggling
//! separate dependencies.
//!
//! ---
//! _Happy prompting & may your JSON always validate!_
#![doc(html_root_url = "https://docs.rs/conform/latest")]

pub use conform_core::*;

#[cfg(feature = "openai")]
pub use conform_openai as openai;
