//! # cwmp-datamodel
//!
//! CWMP (TR-069) data-model entities for the Broadband Forum **TR-098**
//! (`InternetGatewayDevice`) and **TR-181** (`Device`) object trees, plus the
//! definition-driven generator that produces them.
//!
//! ## Overview
//!
//! CWMP management traffic is organized around hierarchical objects
//! (`Device.DSL.Line.{i}.`) whose parameters are described by published
//! tables: wire name, type, access mode, defaults, value constraints, units.
//! This crate turns those tables into plain Rust structs. Each generated
//! entity carries the exact published wire tag on every field, publishes the
//! documented defaults through `Default`, and exposes the rest of the table
//! (access, notification, size, range, units) as queryable metadata.
//!
//! Entities are deliberately permissive containers: constraints are carried
//! as metadata for an external protocol engine (an ACS or CPE agent) to
//! consult, never enforced on assignment. Several published tables contain
//! anomalies — a range pinned to a single value, a default outside its own
//! range — and those are reproduced verbatim, because management traffic
//! contains them too.
//!
//! ## Architecture
//!
//! - **[`schema`]** - definition-file loading and normalization into the
//!   object/parameter tree, plus an advisory lint
//! - **[`naming`]** - deterministic wire-name → Rust-identifier transforms
//! - **[`generator`]** - entity mapping and Askama-template emission of
//!   generated modules
//! - **[`model`]** - the checked-in generated entity modules for TR-098 and
//!   TR-181, the [`model::CwmpObject`] trait, and wire-format helpers
//!
//! ### Generation Flow
//!
//! ```text
//! definitions/tr181_dsl.yaml
//!     └── schema::load_definition     parse + normalize + lint (advisory)
//!         └── generator::collect_entities   object tree → EntityDef list
//!             └── generator::generate_model_from_definition
//!                 └── src/model/tr181/dsl.rs (+ refreshed mod.rs)
//! ```
//!
//! Generated modules are committed; regeneration is a development step, not
//! a build step:
//!
//! ```bash
//! cargo run --bin cwmp-gen -- generate --definition definitions/tr181_dsl.yaml
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use cwmp_datamodel::model::tr181::dsl::{Channel, Dsl, Line};
//! use cwmp_datamodel::model::CwmpObject;
//!
//! let dsl = Dsl::new()
//!     .with_line(Line::new().with_enable(true))
//!     .with_channel(Channel::new());
//!
//! assert_eq!(dsl.line.len(), 1);
//! assert_eq!(Line::PATH, "Device.DSL.Line.{i}.");
//! ```

pub mod cli;
pub mod generator;
pub mod model;
pub mod naming;
pub mod schema;

pub use model::{CwmpObject, ParamInfo};
pub use schema::{
    load_definition, parse_definition, Access, Bound, DataModelDefinition, Notify,
    ObjectDefinition, ParameterDefinition, SemanticType,
};
