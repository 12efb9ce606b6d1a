use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::entity::collect_entities;
use super::templates::{write_entity_module, write_mod_rs};
use crate::schema::{lint_model, load_definition, print_issues};

/// Emit one entity module (and refresh the directory's mod.rs) from a
/// data-model definition file. Returns the path of the written module.
///
/// Lint findings are reported but never block generation: the published
/// tables contain anomalies that must be reproduced, not repaired.
pub fn generate_model_from_definition(
    definition_path: &Path,
    out_dir: &Path,
    force: bool,
) -> anyhow::Result<PathBuf> {
    let definition_str = definition_path
        .to_str()
        .with_context(|| format!("non-UTF-8 definition path: {definition_path:?}"))?;
    let model = load_definition(definition_str)
        .with_context(|| format!("failed to load definition {definition_path:?}"))?;

    let issues = lint_model(&model);
    if !issues.is_empty() {
        print_issues(&issues);
    }

    let entities = collect_entities(&model.objects);
    let module = module_name(definition_path, &model.model)?;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output dir {out_dir:?}"))?;

    let module_path = out_dir.join(format!("{module}.rs"));
    let definition_label = definition_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(definition_str)
        .to_string();
    write_entity_module(&module_path, &definition_label, entities, force)?;

    let modules = list_modules(out_dir)?;
    write_mod_rs(out_dir, &modules, &model.model)?;
    Ok(module_path)
}

/// Module name derived from the definition file stem, minus the model
/// prefix already carried by the output directory:
/// `tr181_dsl.yaml` in model `tr181` → `dsl`.
fn module_name(definition_path: &Path, model: &str) -> anyhow::Result<String> {
    let stem = definition_path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("definition path has no file stem: {definition_path:?}"))?;
    let stem = crate::naming::field_name(stem);
    Ok(stem
        .strip_prefix(&format!("{model}_"))
        .map(str::to_string)
        .unwrap_or(stem))
}

/// All entity modules already present in the output directory, sorted, so
/// repeated generation runs keep mod.rs complete.
fn list_modules(out_dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut modules = Vec::new();
    for entry in fs::read_dir(out_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(stem) = name.strip_suffix(".rs") {
            if stem != "mod" {
                modules.push(stem.to_string());
            }
        }
    }
    modules.sort();
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name() {
        assert_eq!(
            module_name(Path::new("definitions/tr181_dsl.yaml"), "tr181").unwrap(),
            "dsl"
        );
        assert_eq!(
            module_name(Path::new("TR098-Layer2Bridging.yaml"), "tr098").unwrap(),
            "layer2_bridging"
        );
        // stems without the model prefix pass through untouched
        assert_eq!(
            module_name(Path::new("dsl.yaml"), "tr181").unwrap(),
            "dsl"
        );
    }
}
