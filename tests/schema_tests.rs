use cwmp_datamodel::schema::{lint_model, parse_definition};
use cwmp_datamodel::{Access, Notify, SemanticType};

#[test]
fn test_parse_full_definition() {
    let def = parse_definition(
        r#"
model: tr098
version: "1.4"
objects:
  - path: "InternetGatewayDevice.Layer2Bridging."
    parameters:
      - name: BridgeNumberOfEntries
        type: uint
    objects:
      - path: "InternetGatewayDevice.Layer2Bridging.Bridge.{i}."
        parameters:
          - name: BridgeEnable
            type: boolean
            access: read-write
            default: false
          - name: BridgeName
            type: string
            access: read-write
            size: {max: 64}
"#,
    )
    .unwrap();

    assert_eq!(def.model, "tr098");
    assert_eq!(def.version.as_deref(), Some("1.4"));
    assert_eq!(def.objects.len(), 1);

    let root = &def.objects[0];
    assert!(!root.is_table);
    assert_eq!(root.children.len(), 1);

    let bridge = &root.children[0];
    assert!(bridge.is_table);
    assert_eq!(bridge.parameters.len(), 2);
    assert_eq!(bridge.parameters[0].access, Access::ReadWrite);
    assert_eq!(bridge.parameters[0].default.as_deref(), Some("false"));
    assert_eq!(bridge.parameters[1].size.unwrap().max, Some(64));
}

#[test]
fn test_access_and_notify_default_when_omitted() {
    let def = parse_definition(
        r#"
model: tr181
objects:
  - path: "Device.DSL."
    parameters:
      - name: LineNumberOfEntries
        type: uint
"#,
    )
    .unwrap();
    let param = &def.objects[0].parameters[0];
    assert_eq!(param.access, Access::ReadOnly);
    assert_eq!(param.notify, Notify::Normal);
}

#[test]
fn test_enum_values_carried_as_metadata() {
    let def = parse_definition(
        r#"
model: tr181
objects:
  - path: "Device.DSL.BondingGroup.{i}."
    parameters:
      - name: BondScheme
        type: enum
        values: [ATM, Ethernet, TDIM]
      - name: BondSchemesSupported
        type: list
        of: enum
        values: [ATM, Ethernet, TDIM]
"#,
    )
    .unwrap();
    let params = &def.objects[0].parameters;
    match &params[0].semantic {
        SemanticType::Enum { values } => assert_eq!(values.len(), 3),
        other => panic!("expected enum, got {other:?}"),
    }
    assert!(params[1].semantic.is_list());
    assert_eq!(params[1].semantic.rust_type(), "Vec<String>");
}

#[test]
fn test_unknown_type_is_rejected() {
    let err = parse_definition(
        r#"
model: tr181
objects:
  - path: "Device.DSL."
    parameters:
      - name: Mystery
        type: quaternion
"#,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("quaternion"), "{err:#}");
}

#[test]
fn test_child_path_must_extend_parent() {
    let err = parse_definition(
        r#"
model: tr181
objects:
  - path: "Device.DSL."
    objects:
      - path: "Device.IP.Diagnostics."
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Device.IP.Diagnostics."), "{err}");
}

#[test]
fn test_lint_reports_but_preserves_anomalies() {
    let def = parse_definition(
        r#"
model: tr181
objects:
  - path: "Device.DSL.Line.{i}."
    parameters:
      - name: LIMITMASK
        type: long
        range: {min: 2047, max: 2047}
      - name: Status
        type: enum
        values: []
"#,
    )
    .unwrap();
    let issues = lint_model(&def);
    let kinds: Vec<_> = issues.iter().map(|i| i.kind.as_str()).collect();
    assert!(kinds.contains(&"DegenerateRange"));
    assert!(kinds.contains(&"EmptyEnum"));

    // the model itself is untouched
    let range = def.objects[0].parameters[0].range.unwrap();
    assert_eq!((range.min, range.max), (Some(2047), Some(2047)));
}

#[test]
fn test_lint_flags_default_on_read_only() {
    let def = parse_definition(
        r#"
model: tr098
objects:
  - path: "InternetGatewayDevice.Layer2Bridging.Bridge.{i}."
    parameters:
      - name: BridgeStatus
        type: string
        default: Disabled
"#,
    )
    .unwrap();
    let issues = lint_model(&def);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "DefaultOnReadOnly");
    // the default still survives into the model
    assert_eq!(
        def.objects[0].parameters[0].default.as_deref(),
        Some("Disabled")
    );
}
