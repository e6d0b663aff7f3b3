use conform::{
    Client,
    message::{Message, Role},
    model::{Model, OpenAiModel},
    openai::OpenAiAdapterBuilder,
    provider::CompletionParameters,
    schema::JsonSchemaFormat,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// # Hello, JSON! – Minimal yet *typed* completion
///
/// This example is the “smallest viable program” that
///
/// 1. **Builds** an OpenAI backend (`OpenAiAdapter`).
/// 2. **Creates** a prompt consisting of two messages:
///    * a *system* instruction
///    * a *user* request (“Mayday Mayday!”)
/// 3. **Asks** the model to respond with **valid JSON** that can be
///    deserialised into the `HelloResponse` struct below.
/// 4. **Prints** the strongly-typed Rust value.
///
/// ## How to run
///
/// ```bash
/// export OPENAI_API_KEY=sk-…          # your key, free tier works fine
/// cargo run -p conform --example openai_hello_world
/// ```
///
/// You should see output similar to:
///
/// ```text
/// Response: HelloResponse { greeting: "Beep-boop, assistance on the way!" }
/// ```
///
/// ## Note on the schema pipeline
///
/// `JsonSchemaFormat::for_type::<HelloResponse>` generates the schema with
/// `schemars`, then closes every object-shaped node
/// (`additionalProperties: false`) so OpenAI’s strict mode accepts it. The
/// model can then *only* reply with JSON matching our struct.
////////////////////////////////////////////////////////////////////////////////

/// The *shape* of the answer we expect from the model.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct HelloResponse {
    greeting: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Build the backend from the environment (needs OPENAI_API_KEY).
    let backend = OpenAiAdapterBuilder::new_from_env().build()?;

    // 2. Wrap it inside the generic client.
    let client = Client::new(backend);

    // 3. Assemble messages plus the strict response format.
    let params = CompletionParameters::new(
        vec![
            Message::new(
                "You are a droid. Answer distress calls with a short greeting.".into(),
                Role::System,
            ),
            Message::new("Mayday Mayday!".into(), Role::User),
        ],
        Model::OpenAi(OpenAiModel::Gpt4oMini),
    )
    .with_response_format(
        JsonSchemaFormat::for_type::<HelloResponse>("hello_response")
            .with_strict(true)
            .into_response_format(),
    );

    // 4. Run the prompt and await the typed result.
    let response: HelloResponse = client.complete_structured(params).await?;

    println!("Response: {response:?}");

    Ok(())
}
