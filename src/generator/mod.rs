//! # Generator Module
//!
//! Maps Broadband Forum data-model object definitions onto Rust entity
//! types and emits them as source modules.
//!
//! ## Architecture
//!
//! The generator uses Askama templates to produce Rust code:
//!
//! ```text
//! Definition YAML → schema::load/build → entity mapping → template rendering → entity module
//! ```
//!
//! 1. **Loading** - [`crate::schema`] parses and normalizes the definition file
//! 2. **Mapping** - [`entity`] turns each object into an [`entity::EntityDef`]:
//!    one field per parameter, defaults baked into `Default`, constraints
//!    carried as metadata, `{i}` tables as `Vec`, single children as `Option`
//! 3. **Rendering** - [`templates`] renders `templates/entity_module.rs.txt`
//!    and `templates/mod.rs.txt`
//! 4. **Emission** - [`project`] writes the module tree to the output directory
//!
//! The checked-in modules under [`crate::model`] are this generator's output
//! for the definitions in `definitions/`.

mod entity;
mod project;
mod templates;

pub use entity::*;
pub use project::*;
pub use templates::*;
