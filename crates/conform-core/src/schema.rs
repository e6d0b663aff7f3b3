//! Turn Rust type information into a JSON Schema that can be shipped with a
//! chat request. The JSON is produced with [`schemars`], closed with
//! [`crate::strict::strictify`] and wrapped in the response-format envelope
//! understood by providers with strict structured-output support (e.g.
//! OpenAI's *response_format = json_schema*).
//!
//! The abstraction is intentionally **very small**: if you need a more
//! sophisticated setup (e.g. `$ref`-based schemas, custom serialization
//! logic) you can always bypass these helpers and build the schema manually.

use schemars::{JsonSchema, SchemaGenerator, r#gen::SchemaSettings};
use serde::Serialize;
use serde_json::{self, Value};

use crate::strict::strictify;

/// Generate a JSON Schema for the given `T` **inline**, i.e. without
/// `$ref` pointers to external definitions.
///
/// Inlining matters twice over: most LLM providers expect the entire schema
/// object inside a single request, and the strictness transform only visits
/// inline subschemas.
///
/// # Panics
///
/// This function panics only if the resulting schema cannot be serialized
/// into valid JSON – which should never happen as long as [`schemars`] works
/// correctly.
///
/// # Example
///
/// ```
/// use conform_core::schema::derive_response_schema;
/// use schemars::JsonSchema;
///
/// #[derive(JsonSchema)]
/// struct Foo { bar: String }
///
/// let schema = derive_response_schema::<Foo>();
/// println!("{}", serde_json::to_string_pretty(&schema).unwrap());
/// ```
pub fn derive_response_schema<T>() -> Value
where
    T: JsonSchema + 'static,
{
    // We want the schema fully inlined to avoid `$ref`s that some providers
    // may not resolve correctly (and that the strictifier will not follow).
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    serde_json::to_value(root).expect("generated schema should be serialisable")
}

/// A named, described, optionally-strict response format carrying a closed
/// JSON Schema.
///
/// This is the provider-agnostic half of the *structured output* handshake:
/// construct it from a type (or a hand-built schema), then attach
/// [`Self::into_response_format`] to the completion parameters.
///
/// ```
/// use conform_core::schema::JsonSchemaFormat;
/// use schemars::JsonSchema;
///
/// #[derive(JsonSchema)]
/// struct Advice { message: String }
///
/// let format = JsonSchemaFormat::for_type::<Advice>("advice")
///     .with_description("A single piece of advice.")
///     .with_strict(true);
///
/// let value = format.into_response_format();
/// assert_eq!(value["type"], "json_schema");
/// assert_eq!(value["json_schema"]["name"], "advice");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strict: Option<bool>,
    schema: Value,
}

impl JsonSchemaFormat {
    /// Wrap an already-generated schema. The schema is closed via
    /// [`strictify`] before being stored, so callers can hand over raw
    /// generator output.
    pub fn new(name: impl Into<String>, mut schema: Value) -> Self {
        strictify(&mut schema);
        Self {
            name: name.into(),
            description: None,
            strict: None,
            schema,
        }
    }

    /// Generate, close and wrap the schema for `T` in one go.
    pub fn for_type<T>(name: impl Into<String>) -> Self
    where
        T: JsonSchema + 'static,
    {
        Self::new(name, derive_response_schema::<T>())
    }

    /// Human-readable description forwarded to the provider unchanged.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Ask the provider to *guarantee* schema conformance. Only meaningful if
    /// the schema is closed at every level, which [`Self::new`] ensures.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// The format name as sent to the provider.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The closed schema document.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// The schema as indented JSON text, handy for logging or prompt
    /// embedding.
    pub fn schema_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.schema)
            .expect("schema `Value` should always serialize")
    }

    /// Consume the format and produce the wire value for
    /// `response_format`:
    ///
    /// ```json
    /// { "type": "json_schema", "json_schema": { "name": …, "schema": … } }
    /// ```
    pub fn into_response_format(self) -> Value {
        serde_json::json!({
            "type": "json_schema",
            "json_schema": self,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonSchemaFormat, derive_response_schema};
    use schemars::JsonSchema;
    use serde_json::json;

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Address {
        city: String,
        zip: String,
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Customer {
        name: String,
        address: Address,
        orders: Vec<Order>,
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Order {
        id: i64,
    }

    #[test]
    fn derived_schema_is_fully_inlined() {
        let schema = derive_response_schema::<Customer>();
        let text = schema.to_string();

        assert!(!text.contains("$ref"), "schema should not contain $ref: {text}");
    }

    #[test]
    fn for_type_closes_every_object_node() {
        let format = JsonSchemaFormat::for_type::<Customer>("customer");
        let schema = format.schema();

        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(
            schema["properties"]["address"]["additionalProperties"],
            json!(false)
        );
        assert_eq!(
            schema["properties"]["orders"]["items"]["additionalProperties"],
            json!(false)
        );
    }

    #[test]
    fn response_format_wire_shape() {
        let value = JsonSchemaFormat::for_type::<Address>("address")
            .with_description("Postal address.")
            .with_strict(true)
            .into_response_format();

        assert_eq!(value["type"], "json_schema");
        assert_eq!(value["json_schema"]["name"], "address");
        assert_eq!(value["json_schema"]["description"], "Postal address.");
        assert_eq!(value["json_schema"]["strict"], json!(true));
        assert_eq!(
            value["json_schema"]["schema"]["additionalProperties"],
            json!(false)
        );
    }

    #[test]
    fn optional_fields_are_omitted_when_unset() {
        let value = JsonSchemaFormat::for_type::<Address>("address").into_response_format();

        assert!(value["json_schema"].get("description").is_none());
        assert!(value["json_schema"].get("strict").is_none());
    }

    #[test]
    fn schema_pretty_round_trips() {
        let format = JsonSchemaFormat::for_type::<Address>("address");
        let reparsed: serde_json::Value =
            serde_json::from_str(&format.schema_pretty()).expect("pretty output parses");

        assert_eq!(&reparsed, format.schema());
    }
}
