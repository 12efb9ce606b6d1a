// Auto-generated module list for tr181 — regenerate with `cwmp-gen`, do not edit by hand.
pub mod dsl;
pub mod ip_diagnostics;
