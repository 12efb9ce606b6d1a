use crate::naming::{field_name, type_name};
use crate::schema::{ObjectDefinition, ParameterDefinition, SemanticType};
use std::collections::HashSet;

/// A Rust entity type mapped from one data-model object
///
/// Represents a struct that will be generated in the output code.
#[derive(Debug, Clone)]
pub struct EntityDef {
    /// The Rust struct name (e.g., `Port`, `Line`, `ChannelStats`)
    pub name: String,
    /// Full dotted path template of the source object
    pub path: String,
    /// The fields that make up this struct, parameters first, nested
    /// objects after, published order preserved
    pub fields: Vec<FieldDef>,
}

impl EntityDef {
    /// True when any field carries a published default, which forces a
    /// hand-written `Default` impl instead of the derived one.
    pub fn needs_manual_default(&self) -> bool {
        self.fields.iter().any(|f| f.has_default)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    List,
    Object,
    Table,
}

/// A field definition for a generated entity struct
///
/// Metadata values are pre-rendered as Rust source fragments so the
/// template stays purely structural.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Rust field name (e.g., `pvid`)
    pub name: String,
    /// Exact published wire tag (for serde rename), e.g. `PVID`
    pub wire_name: String,
    /// Rust type (e.g., `u32`, `Vec<String>`, `Option<LineStats>`)
    pub ty: String,
    /// Element type for list/table fields, empty otherwise
    pub elem_ty: String,
    pub kind: FieldKind,
    /// Whether the published tables state a default for this parameter
    pub has_default: bool,
    /// Initializer literal for `Default`: the published default when one
    /// exists, `Default::default()` otherwise
    pub init: String,
    /// Lists serialize as one comma-joined tag
    pub comma_list: bool,
    /// Rendered metadata fragments for the `ParamInfo` table
    pub access: String,
    pub notify: String,
    pub units: String,
    pub size: String,
    pub range: String,
}

impl FieldDef {
    pub fn is_list(&self) -> bool {
        self.kind == FieldKind::List
    }
    pub fn is_object(&self) -> bool {
        self.kind == FieldKind::Object
    }
    pub fn is_table(&self) -> bool {
        self.kind == FieldKind::Table
    }
    /// Parameters (scalar and list fields) appear in the metadata table;
    /// nested objects and tables do not.
    pub fn is_param(&self) -> bool {
        matches!(self.kind, FieldKind::Scalar | FieldKind::List)
    }
    /// Field name without any raw-identifier prefix, usable inside a
    /// `with_*` method name.
    pub fn builder_name(&self) -> &str {
        self.name.strip_prefix("r#").unwrap_or(&self.name)
    }
}

/// Render a published textual default as a Rust literal for the mapped type.
pub fn rust_default_literal(semantic: &SemanticType, text: &str) -> String {
    match semantic {
        SemanticType::Boolean
        | SemanticType::UInt
        | SemanticType::Int
        | SemanticType::Long
        | SemanticType::ULong => text.to_string(),
        SemanticType::List { .. } => "vec![]".to_string(),
        _ => format!("{text:?}.to_string()"),
    }
}

fn render_bound(bound: &Option<crate::schema::Bound>) -> String {
    match bound {
        None => "None".to_string(),
        Some(b) => format!(
            "Some(Bound {{ min: {}, max: {} }})",
            match b.min {
                Some(v) => format!("Some({v})"),
                None => "None".to_string(),
            },
            match b.max {
                Some(v) => format!("Some({v})"),
                None => "None".to_string(),
            }
        ),
    }
}

fn render_units(units: &Option<String>) -> String {
    match units {
        Some(u) => format!("Some({u:?})"),
        None => "None".to_string(),
    }
}

/// Map one scalar or list parameter to a field definition. Constraints are
/// carried as metadata fragments only; nothing here emits a runtime check.
pub fn map_parameter(param: &ParameterDefinition) -> FieldDef {
    let ty = param.semantic.rust_type();
    let (kind, elem_ty, comma_list) = if let SemanticType::List { of } = &param.semantic {
        (FieldKind::List, of.rust_type(), true)
    } else {
        (FieldKind::Scalar, String::new(), false)
    };
    let (has_default, init) = match &param.default {
        Some(text) => (true, rust_default_literal(&param.semantic, text)),
        None => (false, "Default::default()".to_string()),
    };
    FieldDef {
        name: field_name(&param.name),
        wire_name: param.name.clone(),
        ty,
        elem_ty,
        kind,
        has_default,
        init,
        comma_list,
        access: format!("Access::{}", param.access),
        notify: format!("Notify::{}", param.notify),
        units: render_units(&param.units),
        size: render_bound(&param.size),
        range: render_bound(&param.range),
    }
}

/// Map a nested object to a field on its parent: single-valued children
/// become `Option<Child>` (absent until set, exclusively owned), `{i}`
/// tables become `Vec<Child>` in insertion order.
pub fn map_nested(obj: &ObjectDefinition, child_ty: &str) -> FieldDef {
    let segment = obj.last_segment().to_string();
    let (kind, ty, elem_ty) = if obj.is_table {
        (
            FieldKind::Table,
            format!("Vec<{child_ty}>"),
            child_ty.to_string(),
        )
    } else {
        (FieldKind::Object, format!("Option<{child_ty}>"), String::new())
    };
    FieldDef {
        name: field_name(&segment),
        wire_name: segment,
        ty,
        elem_ty,
        kind,
        has_default: false,
        init: "Default::default()".to_string(),
        comma_list: false,
        access: String::new(),
        notify: String::new(),
        units: String::new(),
        size: String::new(),
        range: String::new(),
    }
}

/// Map a whole object tree into entity definitions, parents before
/// children, depth first.
pub fn collect_entities(objects: &[ObjectDefinition]) -> Vec<EntityDef> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for obj in objects {
        walk(obj, "", &mut seen, &mut out);
    }
    out
}

fn walk(
    obj: &ObjectDefinition,
    parent_ty: &str,
    seen: &mut HashSet<String>,
    out: &mut Vec<EntityDef>,
) -> String {
    let name = unique_type_name(seen, parent_ty, &type_name(obj.last_segment()));
    let index = out.len();
    out.push(EntityDef {
        name: name.clone(),
        path: obj.path.clone(),
        fields: vec![],
    });
    let mut fields: Vec<FieldDef> = obj.parameters.iter().map(map_parameter).collect();
    for child in &obj.children {
        let child_name = walk(child, &name, seen, out);
        fields.push(map_nested(child, &child_name));
    }
    out[index].fields = fields;
    name
}

/// Generic child segments (`Stats`, `Total`, …) recur across objects, so a
/// taken bare name gets the parent's name prepended; a counter is the last
/// resort, as for duplicate handler names in route generation.
fn unique_type_name(seen: &mut HashSet<String>, parent_ty: &str, base: &str) -> String {
    if seen.insert(base.to_string()) {
        return base.to_string();
    }
    let prefixed = format!("{parent_ty}{base}");
    if seen.insert(prefixed.clone()) {
        tracing::debug!(base, %prefixed, "type name taken, prefixing parent");
        return prefixed;
    }
    let mut counter = 2;
    loop {
        let candidate = format!("{prefixed}{counter}");
        if seen.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Access, Bound, Notify};

    fn param(name: &str, semantic: SemanticType) -> ParameterDefinition {
        ParameterDefinition {
            name: name.to_string(),
            semantic,
            access: Access::ReadWrite,
            default: None,
            size: None,
            range: None,
            units: None,
            notify: Notify::Normal,
            since: None,
        }
    }

    #[test]
    fn test_map_scalar_with_default() {
        let mut p = param("PVID", SemanticType::UInt);
        p.default = Some("1".to_string());
        p.range = Some(Bound {
            min: Some(1),
            max: Some(4094),
        });
        let field = map_parameter(&p);
        assert_eq!(field.name, "pvid");
        assert_eq!(field.wire_name, "PVID");
        assert_eq!(field.ty, "u32");
        assert!(field.has_default);
        assert_eq!(field.init, "1");
        assert_eq!(field.range, "Some(Bound { min: Some(1), max: Some(4094) })");
    }

    #[test]
    fn test_map_list() {
        let p = param(
            "BondSchemesSupported",
            SemanticType::List {
                of: Box::new(SemanticType::Enum {
                    values: vec!["ATM".into(), "Ethernet".into(), "TDIM".into()],
                }),
            },
        );
        let field = map_parameter(&p);
        assert_eq!(field.ty, "Vec<String>");
        assert_eq!(field.elem_ty, "String");
        assert!(field.comma_list);
        assert!(field.is_list());
    }

    #[test]
    fn test_degenerate_range_passes_through() {
        let mut p = param("LIMITMASK", SemanticType::Long);
        p.range = Some(Bound {
            min: Some(2047),
            max: Some(2047),
        });
        let field = map_parameter(&p);
        assert_eq!(
            field.range,
            "Some(Bound { min: Some(2047), max: Some(2047) })"
        );
    }

    #[test]
    fn test_string_default_literal() {
        assert_eq!(
            rust_default_literal(&SemanticType::Str, "Disabled"),
            "\"Disabled\".to_string()"
        );
        assert_eq!(rust_default_literal(&SemanticType::Boolean, "false"), "false");
    }
}
