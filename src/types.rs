//! Core data model shared by the collector, derivation, and rendering steps.
//!
//! Everything here lives for a single generation run: the collector fills an
//! [`Answers`] plus a parameter list, derivation turns them into a
//! [`GenerationContext`], and the renderer (or the `--json` export) consumes
//! that record. Nothing is persisted between runs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// API action the generated entity function performs.
///
/// The interactive menu shows the HTTP verbs; the serialized value is the
/// lowercase action name used in generated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiType {
    Get,
    Create,
    Update,
    Delete,
}

impl ApiType {
    /// Menu order: GET, POST, PUT, DELETE.
    pub const ALL: [ApiType; 4] = [
        ApiType::Get,
        ApiType::Create,
        ApiType::Update,
        ApiType::Delete,
    ];

    /// Lowercase action name used in generated identifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiType::Get => "get",
            ApiType::Create => "create",
            ApiType::Update => "update",
            ApiType::Delete => "delete",
        }
    }

    /// HTTP verb shown in the interactive menu.
    pub fn http_method(&self) -> &'static str {
        match self {
            ApiType::Get => "GET",
            ApiType::Create => "POST",
            ApiType::Update => "PUT",
            ApiType::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value type a collected parameter takes in the generated API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Uuid,
    Boolean,
    String,
    Object,
}

impl ParamType {
    /// Menu order for the type prompt.
    pub const ALL: [ParamType; 4] = [
        ParamType::Uuid,
        ParamType::Boolean,
        ParamType::String,
        ParamType::Object,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Uuid => "uuid",
            ParamType::Boolean => "boolean",
            ParamType::String => "string",
            ParamType::Object => "object",
        }
    }
}

/// One collected parameter after the required and type batches are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Raw name exactly as it appeared in the comma-separated input.
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub required: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, param_type: ParamType, required: bool) -> Self {
        Self {
            name: name.into(),
            param_type,
            required,
        }
    }
}

/// Raw top-level answers, before any derivation.
#[derive(Debug, Clone)]
pub struct Answers {
    /// Entity name, expected camelCase.
    pub name: String,
    pub api_type: ApiType,
    /// Comma-separated parameter names exactly as typed; may be empty.
    pub params: String,
}

/// The merged record handed to the renderer: answers plus every derived field.
///
/// Serializes with the camelCase key set external template tooling expects
/// (`functionName`, `kebabName`, `docParams`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    /// Entity name as entered.
    pub name: String,
    pub api_type: ApiType,
    /// Merged parameter records, in input order.
    pub params: Vec<Parameter>,
    /// `name` with only its first letter capitalized.
    pub function_name: String,
    /// Kebab-case form of `name`.
    pub kebab_name: String,
    /// Kebab-case form minus its final character; the singular form when the
    /// entity name is a plural.
    pub kebab_name_no_last_letter: String,
    /// Human-readable, lower-cased form ("mediaCollections" -> "media collections").
    pub normal_name: String,
    /// True when `name` ends in 's'.
    pub plural_check: bool,
    /// One doc-comment line per parameter, ready for the banner block.
    pub doc_params: String,
    /// Space-terminated spec reference tokens for the required parameters.
    pub req_spec_params: String,
    /// Space-terminated spec reference tokens for the optional parameters.
    pub opt_spec_params: String,
}
