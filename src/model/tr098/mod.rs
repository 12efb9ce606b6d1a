// Auto-generated module list for tr098 — regenerate with `cwmp-gen`, do not edit by hand.
pub mod layer2_bridging;
