//! The strictness transform: rewrite a generated JSON Schema so that every
//! object-shaped subschema is *closed*.
//!
//! Providers that guarantee schema-conformant output ("strict" structured
//! outputs) require `additionalProperties: false` on **every** node that
//! declares `properties`, all the way down. Schema generators usually leave
//! the keyword out, so we patch the generated document before attaching it to
//! a request.
//!
//! The walk is deliberately dumb: it keys off the *presence* of a
//! `properties` field, not off `"type": "object"`, and it recurses through
//! `properties` values and single-schema `items`. Nothing else is touched:
//! `required`, `type`, `enum` and friends pass through unchanged.
//!
//! # Known gaps
//!
//! * `$ref` / `definitions` / `$defs` indirection is **not** followed. Pair
//!   this transform with a generator configured for fully inlined output
//!   (see [`crate::schema::derive_response_schema`]), otherwise referenced
//!   subschemas stay open.
//! * Tuple-form arrays (`items` as a *list* of schemas) are not walked; only
//!   the single-schema `items` form is supported.

use serde_json::{Map, Value};

/// Close every object-shaped subschema in `schema`, in place.
///
/// Every node that declares `properties` gets `additionalProperties: false`
/// (overwriting any prior value), recursively through nested `properties`
/// values and single-schema `items`. A non-object root is a no-op; the
/// function cannot fail.
///
/// Applying the transform twice yields the same document as applying it once.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let mut schema = json!({
///     "type": "object",
///     "properties": { "name": { "type": "string" } }
/// });
/// conform_core::strict::strictify(&mut schema);
///
/// assert_eq!(schema["additionalProperties"], json!(false));
/// ```
pub fn strictify(schema: &mut Value) {
    if let Value::Object(node) = schema {
        strictify_node(node);
    }
}

fn strictify_node(node: &mut Map<String, Value>) {
    if node.contains_key("properties") {
        node.insert("additionalProperties".to_owned(), Value::Bool(false));

        if let Some(Value::Object(properties)) = node.get_mut("properties") {
            for subschema in properties.values_mut() {
                if let Value::Object(nested) = subschema {
                    strictify_node(nested);
                }
            }
        }
    }

    // Array schemas nest their element schema under `items`.
    if let Some(Value::Object(items)) = node.get_mut("items") {
        strictify_node(items);
    }
}
