//! Checked-in generated entities for the TR-098 and TR-181 data models.
//!
//! Every module here is `cwmp-gen` output for one definition file under
//! `definitions/`. The entities are passive value containers: construction
//! cannot fail, setters and builders store whatever they are given, and the
//! published size/range constraints live in each type's [`ParamInfo`] table
//! for an external protocol engine to consult — they are never enforced
//! here. A value outside its documented range is stored and read back
//! unmodified.

pub mod tr098;
pub mod tr181;
pub mod wire;

pub use crate::schema::{Access, Bound, Notify};

/// Schema metadata for one parameter of a generated entity: exact wire tag,
/// Rust field name, access mode, active-notify hint, unit annotation and
/// the published (advisory, sometimes internally inconsistent) bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: &'static str,
    pub field: &'static str,
    pub access: Access,
    pub notify: Notify,
    pub units: Option<&'static str>,
    pub size: Option<Bound>,
    pub range: Option<Bound>,
}

/// Implemented by every generated entity. `PATH` is the data-model object
/// path template, with `{i}` marking table instances whose indices are
/// assigned by the external ACS/CPE runtime.
pub trait CwmpObject {
    const PATH: &'static str;

    /// Parameter metadata in published order.
    fn parameters() -> &'static [ParamInfo];

    /// Look up one parameter by its wire tag.
    fn parameter(name: &str) -> Option<&'static ParamInfo> {
        Self::parameters().iter().find(|p| p.name == name)
    }
}
