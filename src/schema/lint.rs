use super::types::{Access, DataModelDefinition, ObjectDefinition, SemanticType};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct LintIssue {
    pub location: String,
    pub kind: String,
    pub message: String,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

pub fn print_issues(issues: &[LintIssue]) {
    eprintln!(
        "\n⚠️  Definition lint found {} issue(s):\n",
        issues.len()
    );
    for issue in issues {
        eprintln!("[{}] {}: {}", issue.kind, issue.location, issue.message);
    }
    eprintln!();
}

/// Walk a built model and collect advisory findings. Nothing here rejects a
/// definition: published tables contain degenerate ranges and defaults, and
/// those must survive generation verbatim. The lint only makes them visible.
pub fn lint_model(def: &DataModelDefinition) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    for obj in &def.objects {
        lint_object(obj, &mut issues);
    }
    issues
}

fn lint_object(obj: &ObjectDefinition, issues: &mut Vec<LintIssue>) {
    let mut seen = HashSet::new();
    for param in &obj.parameters {
        let location = format!("{}{}", obj.path, param.name);
        if !seen.insert(param.name.as_str()) {
            issues.push(LintIssue::new(
                &location,
                "DuplicateParameter",
                "parameter name appears more than once in this object",
            ));
        }
        if let SemanticType::Enum { values } = &param.semantic {
            if values.is_empty() {
                issues.push(LintIssue::new(
                    &location,
                    "EmptyEnum",
                    "enumerated parameter has no allowed values",
                ));
            }
        }
        if param.default.is_some() && param.access == Access::ReadOnly {
            issues.push(LintIssue::new(
                &location,
                "DefaultOnReadOnly",
                "read-only parameter declares a default",
            ));
        }
        if let Some(range) = &param.range {
            if let (Some(min), Some(max)) = (range.min, range.max) {
                if min > max {
                    issues.push(LintIssue::new(
                        &location,
                        "InvertedRange",
                        format!("range min {min} exceeds max {max} (preserved as published)"),
                    ));
                } else if min == max {
                    issues.push(LintIssue::new(
                        &location,
                        "DegenerateRange",
                        format!("range pins the value to {min} (preserved as published)"),
                    ));
                }
            }
        }
    }
    for child in &obj.children {
        lint_object(child, issues);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::load::parse_definition;

    #[test]
    fn test_degenerate_range_is_reported_not_rejected() {
        let def = parse_definition(
            r#"
model: tr181
objects:
  - path: "Device.DSL.Line.{i}."
    parameters:
      - name: LIMITMASK
        type: long
        range: {min: 2047, max: 2047}
"#,
        )
        .unwrap();
        let issues = lint_model(&def);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, "DegenerateRange");
        // the range itself is untouched
        let range = def.objects[0].parameters[0].range.unwrap();
        assert_eq!((range.min, range.max), (Some(2047), Some(2047)));
    }
}
