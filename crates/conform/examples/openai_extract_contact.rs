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

/// # Contact extraction – nested schemas under strict mode
///
/// Demonstrates the part that makes strict structured outputs work: the
/// generated schema is *closed at every level* before it is attached to the
/// request. `Contact` nests an object (`Address`) and an array of objects
/// (`Vec<Phone>`); all three object schemas end up with
/// `additionalProperties: false`.
///
/// ## How to run
///
/// ```bash
/// export OPENAI_API_KEY=sk-…
/// cargo run -p conform --example openai_extract_contact
/// ```
///
/// The program first prints the closed schema (indented JSON), then the
/// typed extraction result.
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct Address {
    street: String,
    city: String,
    country: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct Phone {
    label: String,
    number: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct Contact {
    name: String,
    address: Address,
    phones: Vec<Phone>,
}

const LETTER: &str = "\
Dear team, please update my records. I moved to Torstraße 145, Berlin, \
Germany. You can reach me at home under 030 1234567 or on my mobile, \
0151 7654321. Best, Ada Lovelace";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let client = Client::new(backend);

    let format = JsonSchemaFormat::for_type::<Contact>("contact")
        .with_description("Contact details extracted from a letter.")
        .with_strict(true);

    // Peek at what the provider will be asked to enforce.
    println!("schema:\n{}\n", format.schema_pretty());

    let params = CompletionParameters::new(
        vec![
            Message::new(
                "Extract the sender's contact details from the letter.".into(),
                Role::System,
            ),
            Message::new(LETTER.into(), Role::User),
        ],
        Model::OpenAi(OpenAiModel::Gpt4oMini),
    )
    .with_temperature(0.0)
    .with_response_format(format.into_response_format());

    let contact: Contact = client.complete_structured(params).await?;

    println!("Extracted: {contact:#?}");

    Ok(())
}
