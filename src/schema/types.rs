use serde::{Deserialize, Serialize};

/// Semantic type of a data-model parameter as published by the Broadband
/// Forum tables. `List` values are comma-separated on the wire under a
/// single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticType {
    Boolean,
    UInt,
    Int,
    Long,
    ULong,
    Str,
    Enum { values: Vec<String> },
    HexBinary,
    DateTime,
    IpAddress,
    List { of: Box<SemanticType> },
}

impl SemanticType {
    /// Host-language type this semantic type maps to. Enumerations, hex
    /// binaries, timestamps and addresses all travel as strings in CWMP, so
    /// they map to `String` here; the allowed-value set stays in metadata.
    pub fn rust_type(&self) -> String {
        match self {
            SemanticType::Boolean => "bool".to_string(),
            SemanticType::UInt => "u32".to_string(),
            SemanticType::Int => "i32".to_string(),
            SemanticType::Long => "i64".to_string(),
            SemanticType::ULong => "u64".to_string(),
            SemanticType::Str
            | SemanticType::Enum { .. }
            | SemanticType::HexBinary
            | SemanticType::DateTime
            | SemanticType::IpAddress => "String".to_string(),
            SemanticType::List { of } => format!("Vec<{}>", of.rust_type()),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, SemanticType::List { .. })
    }
}

/// Parameter access mode. Read-only parameters are still plain fields; the
/// mode is metadata for the external protocol engine deciding which
/// SetParameterValues calls are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Access::ReadOnly => write!(f, "ReadOnly"),
            Access::ReadWrite => write!(f, "ReadWrite"),
        }
    }
}

/// Active-notify hint: whether value-change notification for the parameter
/// may be suppressed by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notify {
    #[default]
    Normal,
    CanDeny,
    ForceEnabled,
}

impl std::fmt::Display for Notify {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notify::Normal => write!(f, "Normal"),
            Notify::CanDeny => write!(f, "CanDeny"),
            Notify::ForceEnabled => write!(f, "ForceEnabled"),
        }
    }
}

/// A min/max bound, used both for string lengths (`size`) and numeric
/// ranges (`range`). Bounds are advisory metadata and are carried verbatim:
/// several published tables contain degenerate bounds (for example
/// `min == max` on a value with no default, or a range that excludes the
/// documented default) and those are preserved, not corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bound {
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

/// One parameter of a data-model object.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    /// Exact wire tag, e.g. `PVID`, `BondSchemesSupported`.
    pub name: String,
    pub semantic: SemanticType,
    pub access: Access,
    /// Spec-mandated default as published text, if any.
    pub default: Option<String>,
    pub size: Option<Bound>,
    pub range: Option<Bound>,
    pub units: Option<String>,
    pub notify: Notify,
    pub since: Option<String>,
}

/// One data-model object or table. `path` is the full dotted template, e.g.
/// `InternetGatewayDevice.Layer2Bridging.Bridge.{i}.Port.{i}.`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDefinition {
    pub path: String,
    /// True when the path template ends in a `{i}` instance marker.
    pub is_table: bool,
    pub since: Option<String>,
    pub parameters: Vec<ParameterDefinition>,
    pub children: Vec<ObjectDefinition>,
}

impl ObjectDefinition {
    /// Last named segment of the path template, ignoring the `{i}` marker:
    /// `…Bridge.{i}.Port.{i}.` → `Port`.
    pub fn last_segment(&self) -> &str {
        self.path
            .trim_end_matches('.')
            .trim_end_matches("{i}")
            .trim_end_matches('.')
            .rsplit('.')
            .next()
            .unwrap_or("")
    }
}

/// A whole parsed definition file.
#[derive(Debug, Clone, PartialEq)]
pub struct DataModelDefinition {
    /// Model family, e.g. `tr098` or `tr181`.
    pub model: String,
    pub version: Option<String>,
    pub objects: Vec<ObjectDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_type_mapping() {
        assert_eq!(SemanticType::Boolean.rust_type(), "bool");
        assert_eq!(SemanticType::UInt.rust_type(), "u32");
        assert_eq!(SemanticType::DateTime.rust_type(), "String");
        let list = SemanticType::List {
            of: Box::new(SemanticType::Str),
        };
        assert_eq!(list.rust_type(), "Vec<String>");
        assert!(list.is_list());
    }

    #[test]
    fn test_last_segment() {
        let obj = ObjectDefinition {
            path: "InternetGatewayDevice.Layer2Bridging.Bridge.{i}.Port.{i}.".to_string(),
            is_table: true,
            since: None,
            parameters: vec![],
            children: vec![],
        };
        assert_eq!(obj.last_segment(), "Port");
    }
}
