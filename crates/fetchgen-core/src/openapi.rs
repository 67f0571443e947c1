//! Swagger v2 document model and loading.
//!
//! Only the subset of Swagger v2 the generator reads is modelled: `basePath`
//! and the `paths` → method → operation mapping with its parameters. Decoding
//! is lenient: unknown fields are ignored, missing or `null` fields fall back
//! to their empty value, and nothing beyond JSON shape is validated.
//!
//! # Examples
//!
//! ```
//! use fetchgen_core::openapi::SwaggerDocument;
//!
//! let doc = SwaggerDocument::parse(r#"{
//!     "basePath": "/api",
//!     "paths": { "/blog/{id}": { "get": { "parameters": [{ "name": "id", "in": "path" }] } } }
//! }"#)?;
//! assert_eq!(doc.base_path, "/api");
//! assert_eq!(doc.operations().count(), 1);
//! # Ok::<(), fetchgen_core::Error>(())
//! ```

// Internal imports (std, crate)
use std::fs;
use std::path::Path;

// External imports (alphabetized)
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Parsed Swagger v2 document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwaggerDocument {
    /// Prefix joined onto every path template; may be empty
    #[serde(
        rename = "basePath",
        alias = "BasePath",
        alias = "basepath",
        default,
        deserialize_with = "null_as_default"
    )]
    pub base_path: String,

    /// Path template (`/blog/{id}`) → HTTP method (`get`, `POST`, ...) → operation
    #[serde(alias = "Paths", default, deserialize_with = "null_as_default")]
    pub paths: IndexMap<String, IndexMap<String, PathItem>>,
}

impl SwaggerDocument {
    /// Load a document from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|e| crate::Error::input_read(path, e))?;
        Ok(serde_json::from_slice(&content)?)
    }

    /// Parse a document from JSON text
    pub fn parse(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Every (path template, method key, operation) triple, in document order
    pub fn operations(&self) -> impl Iterator<Item = (&str, &str, &PathItem)> {
        self.paths.iter().flat_map(|(path, methods)| {
            methods
                .iter()
                .map(move |(method, item)| (path.as_str(), method.as_str(), item))
        })
    }
}

/// A single operation under a path and method
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// Documentation tags; not used for generation
    #[serde(alias = "Tags", default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Declared parameters
    #[serde(alias = "Parameters", default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,

    /// Responses by status code; only their shape is checked
    #[serde(alias = "Responses", default, deserialize_with = "null_as_default")]
    pub responses: IndexMap<String, Response>,
}

impl PathItem {
    /// Whether any declared parameter travels in the request body
    pub fn has_body(&self) -> bool {
        self.parameters.iter().any(Parameter::is_body)
    }
}

/// A declared operation parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    #[serde(rename = "type", alias = "Type", alias = "TYPE")]
    pub type_: Option<String>,
    #[serde(alias = "Format")]
    pub format: Option<String>,
    #[serde(alias = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Raw location string (`path`, `query`, `body`, ...)
    #[serde(
        rename = "in",
        alias = "In",
        alias = "IN",
        default,
        deserialize_with = "null_as_default"
    )]
    pub in_: String,
    #[serde(alias = "Required", default, deserialize_with = "null_as_default")]
    pub required: bool,
}

impl Parameter {
    /// Location of the parameter, matched case-insensitively
    pub fn location(&self) -> ParameterLocation {
        ParameterLocation::from(self.in_.as_str())
    }

    /// Whether the parameter is located in the body
    pub fn is_body(&self) -> bool {
        self.location() == ParameterLocation::Body
    }
}

/// Parameter location based on the Swagger "in" field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    FormData,
    /// Anything else, kept verbatim
    Other(String),
}

impl From<&str> for ParameterLocation {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "path" => Self::Path,
            "query" => Self::Query,
            "header" => Self::Header,
            "body" => Self::Body,
            "formdata" => Self::FormData,
            _ => Self::Other(s.to_string()),
        }
    }
}

/// A response entry; only a `$ref` is recognised
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
