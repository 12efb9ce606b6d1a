use askama::Template;
use std::fs;
use std::path::Path;

use super::entity::EntityDef;

/// Template data for generating one entity module from a definition file
#[derive(Template)]
#[template(path = "entity_module.rs.txt")]
pub struct EntityModuleTemplateData {
    /// Definition file name shown in the generated header
    pub definition: String,
    /// Entities in emission order, parents before children
    pub entities: Vec<EntityDef>,
}

/// Template data for generating mod.rs module declarations
#[derive(Template)]
#[template(path = "mod.rs.txt")]
pub struct ModRsTemplateData {
    /// Label shown in the generated header
    pub label: String,
    /// Module names to declare
    pub modules: Vec<String>,
}

/// Write one entity module file
///
/// # Errors
///
/// Returns an error if rendering or file writing fails
pub fn write_entity_module(
    path: &Path,
    definition: &str,
    entities: Vec<EntityDef>,
    force: bool,
) -> anyhow::Result<()> {
    if path.exists() && !force {
        tracing::warn!(?path, "skipping existing entity module (use --force to overwrite)");
        return Ok(());
    }
    let rendered = EntityModuleTemplateData {
        definition: definition.to_string(),
        entities,
    }
    .render()?;
    fs::write(path, rendered)?;
    tracing::info!(?path, "generated entity module");
    Ok(())
}

/// Write a mod.rs declaring the given modules
pub fn write_mod_rs(dir: &Path, modules: &[String], label: &str) -> anyhow::Result<()> {
    let rendered = ModRsTemplateData {
        label: label.to_string(),
        modules: modules.to_vec(),
    }
    .render()?;
    let path = dir.join("mod.rs");
    fs::write(&path, rendered)?;
    tracing::info!(?path, "generated module list");
    Ok(())
}
