use cwmp_datamodel::generator::{collect_entities, FieldKind};
use cwmp_datamodel::schema::parse_definition;

#[test]
fn test_entities_in_walk_order() {
    let def = parse_definition(
        r#"
model: tr181
objects:
  - path: "Device.DSL."
    objects:
      - path: "Device.DSL.Line.{i}."
        objects:
          - path: "Device.DSL.Line.{i}.Stats."
      - path: "Device.DSL.Channel.{i}."
"#,
    )
    .unwrap();
    let entities = collect_entities(&def.objects);
    let names: Vec<_> = entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Dsl", "Line", "Stats", "Channel"]);
}

#[test]
fn test_colliding_child_names_get_parent_prefix() {
    let def = parse_definition(
        r#"
model: tr181
objects:
  - path: "Device.DSL."
    objects:
      - path: "Device.DSL.Line.{i}."
        objects:
          - path: "Device.DSL.Line.{i}.Stats."
      - path: "Device.DSL.Channel.{i}."
        objects:
          - path: "Device.DSL.Channel.{i}.Stats."
"#,
    )
    .unwrap();
    let entities = collect_entities(&def.objects);
    let names: Vec<_> = entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Dsl", "Line", "Stats", "Channel", "ChannelStats"]);

    // the parent's field still points at the prefixed type
    let channel = entities.iter().find(|e| e.name == "Channel").unwrap();
    let stats = channel.fields.iter().find(|f| f.name == "stats").unwrap();
    assert_eq!(stats.ty, "Option<ChannelStats>");
}

#[test]
fn test_field_kinds_and_types() {
    let def = parse_definition(
        r#"
model: tr098
objects:
  - path: "InternetGatewayDevice.Layer2Bridging.Bridge.{i}.Port.{i}."
    parameters:
      - name: PortEnable
        type: boolean
        access: read-write
        default: false
      - name: PVID
        type: uint
        access: read-write
        range: {min: 1, max: 4094}
        default: 1
      - name: PriorityRegeneration
        type: list
        of: uint
        access: read-write
"#,
    )
    .unwrap();
    let entities = collect_entities(&def.objects);
    assert_eq!(entities.len(), 1);
    let port = &entities[0];
    assert_eq!(port.name, "Port");
    assert!(port.needs_manual_default());

    let enable = &port.fields[0];
    assert_eq!(enable.kind, FieldKind::Scalar);
    assert_eq!(enable.ty, "bool");
    assert_eq!(enable.init, "false");

    let pvid = &port.fields[1];
    assert_eq!(pvid.init, "1");
    assert_eq!(pvid.range, "Some(Bound { min: Some(1), max: Some(4094) })");

    let prio = &port.fields[2];
    assert_eq!(prio.kind, FieldKind::List);
    assert_eq!(prio.ty, "Vec<u32>");
    assert_eq!(prio.elem_ty, "u32");
    assert!(prio.comma_list);
}

#[test]
fn test_tables_and_single_children_map_differently() {
    let def = parse_definition(
        r#"
model: tr181
objects:
  - path: "Device.IP.Diagnostics.TraceRoute."
    objects:
      - path: "Device.IP.Diagnostics.TraceRoute.RouteHops.{i}."
"#,
    )
    .unwrap();
    let entities = collect_entities(&def.objects);
    let trace = &entities[0];
    let hops = trace.fields.iter().find(|f| f.name == "route_hops").unwrap();
    assert_eq!(hops.kind, FieldKind::Table);
    assert_eq!(hops.ty, "Vec<RouteHops>");
    assert_eq!(hops.wire_name, "RouteHops");
}

#[test]
fn test_keyword_parameter_builder_name() {
    let def = parse_definition(
        r#"
model: tr098
objects:
  - path: "InternetGatewayDevice.Layer2Bridging.Marking.{i}."
    parameters:
      - name: Type
        type: string
        access: read-write
"#,
    )
    .unwrap();
    let entities = collect_entities(&def.objects);
    let field = &entities[0].fields[0];
    assert_eq!(field.name, "r#type");
    assert_eq!(field.builder_name(), "type");
}
