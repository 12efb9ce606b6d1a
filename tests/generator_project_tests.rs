use std::fs;
use std::path::Path;

use cwmp_datamodel::generator::generate_model_from_definition;
use tempfile::TempDir;

#[test]
fn test_generate_bridging_module() {
    let out = TempDir::new().unwrap();
    let module_path = generate_model_from_definition(
        Path::new("definitions/tr098_layer2_bridging.yaml"),
        out.path(),
        false,
    )
    .unwrap();

    assert_eq!(
        module_path.file_name().unwrap().to_str().unwrap(),
        "layer2_bridging.rs"
    );
    let code = fs::read_to_string(&module_path).unwrap();
    assert!(code.contains("pub struct Layer2Bridging"));
    assert!(code.contains("pub struct Port"));
    assert!(code.contains("#[serde(rename = \"PVID\")]"));
    assert!(code.contains("pub fn with_pvid(mut self, value: u32) -> Self"));
    // published defaults force a hand-written Default impl
    assert!(code.contains("impl Default for Port"));
    assert!(code.contains("pvid: 1,"));
    // metadata table carries the published range
    assert!(code.contains("range: Some(Bound { min: Some(1), max: Some(4094) })"));

    let mod_rs = fs::read_to_string(out.path().join("mod.rs")).unwrap();
    assert!(mod_rs.contains("pub mod layer2_bridging;"));
}

#[test]
fn test_generated_dsl_module_keeps_anomalies() {
    let out = TempDir::new().unwrap();
    let module_path = generate_model_from_definition(
        Path::new("definitions/tr181_dsl.yaml"),
        out.path(),
        false,
    )
    .unwrap();
    let code = fs::read_to_string(&module_path).unwrap();
    // degenerate LIMITMASK range survives into the metadata table
    assert!(code.contains("range: Some(Bound { min: Some(2047), max: Some(2047) })"));
    assert!(code.contains("range: Some(Bound { min: Some(-640), max: Some(0) })"));
    // colliding Stats child under Channel gets the parent prefix
    assert!(code.contains("pub struct ChannelStats"));
    assert!(code.contains("pub stats: Option<ChannelStats>"));
}

#[test]
fn test_existing_module_is_skipped_without_force() {
    let out = TempDir::new().unwrap();
    let module_path = out.path().join("layer2_bridging.rs");
    fs::write(&module_path, "// hand edit\n").unwrap();

    generate_model_from_definition(
        Path::new("definitions/tr098_layer2_bridging.yaml"),
        out.path(),
        false,
    )
    .unwrap();
    assert_eq!(fs::read_to_string(&module_path).unwrap(), "// hand edit\n");

    generate_model_from_definition(
        Path::new("definitions/tr098_layer2_bridging.yaml"),
        out.path(),
        true,
    )
    .unwrap();
    assert!(fs::read_to_string(&module_path)
        .unwrap()
        .contains("pub struct Layer2Bridging"));
}

#[test]
fn test_mod_rs_accumulates_across_runs() {
    let out = TempDir::new().unwrap();
    generate_model_from_definition(
        Path::new("definitions/tr181_dsl.yaml"),
        out.path(),
        false,
    )
    .unwrap();
    generate_model_from_definition(
        Path::new("definitions/tr181_ip_diagnostics.yaml"),
        out.path(),
        false,
    )
    .unwrap();

    let mod_rs = fs::read_to_string(out.path().join("mod.rs")).unwrap();
    assert!(mod_rs.contains("pub mod dsl;"));
    assert!(mod_rs.contains("pub mod ip_diagnostics;"));
}

#[test]
fn test_missing_definition_fails() {
    let out = TempDir::new().unwrap();
    let err = generate_model_from_definition(
        Path::new("definitions/no_such_model.yaml"),
        out.path(),
        false,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("no_such_model.yaml"));
}
