use super::load::{RawDefinition, RawObject, RawParameter};
use super::types::{
    DataModelDefinition, ObjectDefinition, ParameterDefinition, SemanticType,
};
use anyhow::{bail, Context};
use serde_json::Value;

/// Normalize a raw definition into the object tree. Hard structural errors
/// (unknown type names, list without an element type) fail the build;
/// everything advisory is left to the lint pass.
pub fn build_model(raw: RawDefinition) -> anyhow::Result<DataModelDefinition> {
    let mut objects = Vec::with_capacity(raw.objects.len());
    for obj in raw.objects {
        objects.push(build_object(obj)?);
    }
    Ok(DataModelDefinition {
        model: raw.model,
        version: raw.version,
        objects,
    })
}

fn build_object(raw: RawObject) -> anyhow::Result<ObjectDefinition> {
    if !raw.path.ends_with('.') {
        bail!("object path must end with '.': {}", raw.path);
    }
    let is_table = raw.path.ends_with(".{i}.") || raw.path == "{i}.";
    let mut parameters = Vec::with_capacity(raw.parameters.len());
    for param in raw.parameters {
        let built = build_parameter(param)
            .with_context(|| format!("in object {}", raw.path))?;
        parameters.push(built);
    }
    let mut children = Vec::with_capacity(raw.objects.len());
    for child in raw.objects {
        if !child.path.starts_with(&raw.path) {
            bail!(
                "child path {} does not extend parent path {}",
                child.path,
                raw.path
            );
        }
        children.push(build_object(child)?);
    }
    Ok(ObjectDefinition {
        path: raw.path,
        is_table,
        since: raw.since,
        parameters,
        children,
    })
}

fn build_parameter(raw: RawParameter) -> anyhow::Result<ParameterDefinition> {
    let semantic = resolve_type(&raw.ty, raw.of.as_deref(), &raw.values)
        .with_context(|| format!("parameter {}", raw.name))?;
    let default = raw.default.as_ref().map(render_default);
    Ok(ParameterDefinition {
        name: raw.name,
        semantic,
        access: raw.access,
        default,
        size: raw.size,
        range: raw.range,
        units: raw.units,
        notify: raw.notify,
        since: raw.since,
    })
}

fn resolve_type(
    ty: &str,
    of: Option<&str>,
    values: &[String],
) -> anyhow::Result<SemanticType> {
    let semantic = match ty {
        "boolean" => SemanticType::Boolean,
        "uint" => SemanticType::UInt,
        "int" => SemanticType::Int,
        "long" => SemanticType::Long,
        "ulong" => SemanticType::ULong,
        "string" => SemanticType::Str,
        "enum" => SemanticType::Enum {
            values: values.to_vec(),
        },
        "hexbinary" => SemanticType::HexBinary,
        "datetime" => SemanticType::DateTime,
        "ipaddress" => SemanticType::IpAddress,
        "list" => {
            let of = of.context("list parameter is missing its element type ('of')")?;
            if of == "list" {
                bail!("nested lists are not part of the data model");
            }
            SemanticType::List {
                of: Box::new(resolve_type(of, None, values)?),
            }
        }
        other => bail!("unknown parameter type: {other}"),
    };
    Ok(semantic)
}

/// Render a YAML scalar default to the published textual form. Booleans and
/// numbers keep their canonical spelling, strings pass through untouched.
fn render_default(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::load::parse_definition;

    #[test]
    fn test_table_detection() {
        let def = parse_definition(
            r#"
model: tr181
objects:
  - path: "Device.DSL."
    objects:
      - path: "Device.DSL.Line.{i}."
        parameters:
          - name: Enable
            type: boolean
            access: read-write
            default: false
"#,
        )
        .unwrap();
        assert!(!def.objects[0].is_table);
        let line = &def.objects[0].children[0];
        assert!(line.is_table);
        assert_eq!(line.last_segment(), "Line");
        assert_eq!(line.parameters[0].default.as_deref(), Some("false"));
    }

    #[test]
    fn test_unknown_type_fails() {
        let err = parse_definition(
            r#"
model: tr181
objects:
  - path: "Device.X."
    parameters:
      - name: Y
        type: float
"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("parameter Y"));
    }

    #[test]
    fn test_list_requires_element_type() {
        let err = resolve_type("list", None, &[]).unwrap_err();
        assert!(err.to_string().contains("element type"));
    }
}
