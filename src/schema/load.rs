use super::build::build_model;
use super::types::{Access, Bound, DataModelDefinition, Notify};
use serde::Deserialize;

/// Raw serde form of a definition file, before normalization into
/// [`DataModelDefinition`]. Field names follow the YAML layout one-to-one.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDefinition {
    pub model: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub objects: Vec<RawObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawObject {
    pub path: String,
    #[serde(default)]
    pub since: Option<String>,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    #[serde(default)]
    pub objects: Vec<RawObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Element type for `type: list`.
    #[serde(default)]
    pub of: Option<String>,
    /// Allowed values for `type: enum` (or `of: enum` lists).
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default = "default_access")]
    pub access: Access,
    /// Defaults appear in YAML as their natural scalar type, so accept any
    /// scalar and render it to text during the build.
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub size: Option<Bound>,
    #[serde(default)]
    pub range: Option<Bound>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub notify: Notify,
    #[serde(default)]
    pub since: Option<String>,
}

fn default_access() -> Access {
    Access::ReadOnly
}

/// Load a data-model definition file (YAML, or JSON by extension) and
/// normalize it into the object tree.
pub fn load_definition(file_path: &str) -> anyhow::Result<DataModelDefinition> {
    let content = std::fs::read_to_string(file_path)?;
    let raw: RawDefinition = if file_path.ends_with(".json") {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    build_model(raw)
}

/// Parse an already-read YAML definition. Used by tests and by callers that
/// embed definitions.
pub fn parse_definition(content: &str) -> anyhow::Result<DataModelDefinition> {
    let raw: RawDefinition = serde_yaml::from_str(content)?;
    build_model(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_parameter_defaults() {
        let raw: RawParameter = serde_yaml::from_str("name: PVID\ntype: uint").unwrap();
        assert_eq!(raw.access, Access::ReadOnly);
        assert_eq!(raw.notify, Notify::Normal);
        assert!(raw.default.is_none());
    }
}
