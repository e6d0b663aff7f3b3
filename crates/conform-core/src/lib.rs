//! # `conform-core` – provider-agnostic structured-output building blocks
//!
//! Everything needed to go from *a Rust type* to *a strict, provider-ready
//! response format* and back from *reply text* to *a typed value*:
//!
//! | Module       | What it provides                                                        |
//! |--------------|-------------------------------------------------------------------------|
//! | [`strict`]   | The strictness transform closing every object-shaped subschema          |
//! | [`schema`]   | Inline schema generation and the `json_schema` response-format wrapper  |
//! | [`message`]  | Provider-agnostic chat messages and roles                               |
//! | [`model`]    | Logical model identifiers mapped by provider crates                     |
//! | [`provider`] | The backend trait and completion parameter / reply types                |
//! | [`client`]   | Generic client: round-trip + typed deserialization                      |
//! | [`error`]    | Unified error type and `Result` alias                                   |
//!
//! Provider back-ends (e.g. `conform-openai`) implement
//! [`provider::ChatCompletionProvider`] and plug into [`client::Client`]
//! unchanged.

pub mod client;
pub mod error;
pub mod message;
pub mod model;
pub mod provider;
pub mod schema;
pub mod strict;

pub use client::Client;
pub use error::{ConformError, Result};
