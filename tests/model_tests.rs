use cwmp_datamodel::model::tr098::layer2_bridging::{Bridge, Filter, Layer2Bridging, Port, Vlan};
use cwmp_datamodel::model::tr181::dsl::{BondingGroup, Channel, Dsl, Line, Stats, TestParams};
use cwmp_datamodel::model::tr181::ip_diagnostics::{
    DownloadDiagnostics, IpPing, RouteHops, TraceRoute, UdpEchoConfig,
};
use cwmp_datamodel::model::CwmpObject;
use cwmp_datamodel::{Access, Notify};

#[test]
fn test_published_defaults_on_fresh_port() {
    let port = Port::new();
    assert!(!port.port_enable);
    assert_eq!(port.port_state, "Disabled");
    assert_eq!(port.pvid, 1);
    assert_eq!(port.acceptable_frame_types, "AdmitAll");
    assert!(!port.ingress_filtering);
}

#[test]
fn test_published_defaults_on_diagnostics_heads() {
    let ping = IpPing::new();
    assert_eq!(ping.diagnostics_state, "None");
    assert_eq!(ping.protocol_version, "Any");
    assert_eq!(ping.data_block_size, 1);
    assert_eq!(ping.dscp, 0);

    let trace = TraceRoute::new();
    assert_eq!(trace.number_of_tries, 3);
    assert_eq!(trace.timeout, 5000);
    assert_eq!(trace.data_block_size, 38);
    assert_eq!(trace.max_hop_count, 30);
    assert!(trace.route_hops.is_empty());
}

#[test]
fn test_line_status_defaults_down() {
    let line = Line::new();
    assert!(!line.enable);
    assert_eq!(line.status, "Down");
    let channel = Channel::new();
    assert_eq!(channel.status, "Down");
}

#[test]
fn test_builder_equals_assignment() {
    let built = Vlan::new()
        .with_vlanid(100)
        .with_vlan_name("guest".to_string());

    let mut assigned = Vlan::new();
    assigned.vlanid = 100;
    assigned.vlan_name = "guest".to_string();

    assert_eq!(built, assigned);
    // published default: disabled until explicitly enabled
    assert!(!built.vlan_enable);
}

#[test]
fn test_list_builders_accumulate() {
    let group = BondingGroup::new()
        .with_bond_schemes_supported("ATM".to_string())
        .with_bond_schemes_supported("Ethernet".to_string());
    assert_eq!(group.bond_schemes_supported, vec!["ATM", "Ethernet"]);
}

#[test]
fn test_table_builders_push_rows() {
    let dsl = Dsl::new()
        .with_line(Line::new())
        .with_line(Line::new().with_enable(true))
        .with_channel(Channel::new());
    assert_eq!(dsl.line.len(), 2);
    assert!(dsl.line[1].enable);
    assert_eq!(dsl.channel.len(), 1);
    assert!(dsl.bonding_group.is_empty());
}

#[test]
fn test_nested_objects_absent_until_set() {
    let line = Line::new();
    assert!(line.stats.is_none());
    assert!(line.test_params.is_none());

    let line = line.with_stats(Some(Stats::new().with_bytes_sent(42)));
    assert_eq!(line.stats.as_ref().map(|s| s.bytes_sent), Some(42));
    // the inner stats object keeps its own nested objects unset
    assert!(line.stats.as_ref().is_some_and(|s| s.total.is_none()));
}

#[test]
fn test_out_of_range_values_stored_unmodified() {
    // DSCP publishes 0..63; storage does not care
    let ping = IpPing::new().with_dscp(64);
    assert_eq!(ping.dscp, 64);

    // PVID publishes 1..4094
    let port = Port::new().with_pvid(0);
    assert_eq!(port.pvid, 0);

    let json = serde_json::to_string(&ping).unwrap();
    let back: IpPing = serde_json::from_str(&json).unwrap();
    assert_eq!(back.dscp, 64);
}

#[test]
fn test_serde_uses_wire_tags() {
    let vlan = Vlan::new()
        .with_vlan_enable(true)
        .with_vlan_name("iptv".to_string())
        .with_vlanid(200);
    let json = serde_json::to_value(&vlan).unwrap();
    assert_eq!(json["VLANEnable"], serde_json::json!(true));
    assert_eq!(json["VLANName"], serde_json::json!("iptv"));
    assert_eq!(json["VLANID"], serde_json::json!(200));
    assert!(json.get("vlanid").is_none());
}

#[test]
fn test_comma_list_round_trip() {
    let hop = RouteHops::new()
        .with_rt_times("11".to_string())
        .with_rt_times("13".to_string())
        .with_rt_times("12".to_string());
    let json = serde_json::to_value(&hop).unwrap();
    assert_eq!(json["RTTimes"], serde_json::json!("11,13,12"));

    let back: RouteHops = serde_json::from_value(json).unwrap();
    assert_eq!(back.rt_times, vec!["11", "13", "12"]);
}

#[test]
fn test_empty_list_serializes_to_empty_string() {
    let params = TestParams::new();
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json["LATNds"], serde_json::json!(""));
    let back: TestParams = serde_json::from_value(json).unwrap();
    assert!(back.latn_ds.is_empty());
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let trace: TraceRoute = serde_json::from_str(r#"{"Host":"example.net"}"#).unwrap();
    assert_eq!(trace.host, "example.net");
    assert_eq!(trace.number_of_tries, 3);
    assert_eq!(trace.diagnostics_state, "None");
}

#[test]
fn test_nested_objects_skipped_when_unset() {
    let line = Line::new();
    let json = serde_json::to_value(&line).unwrap();
    assert!(json.get("Stats").is_none());
    assert!(json.get("TestParams").is_none());
}

#[test]
fn test_param_info_lookup() {
    let pvid = Port::parameter("PVID").unwrap();
    assert_eq!(pvid.field, "pvid");
    assert_eq!(pvid.access, Access::ReadWrite);
    let range = pvid.range.unwrap();
    assert_eq!((range.min, range.max), (Some(1), Some(4094)));

    assert!(Port::parameter("NoSuchParameter").is_none());
}

#[test]
fn test_param_info_preserves_published_anomalies() {
    // LIMITMASK publishes the degenerate range 2047..2047
    let limitmask = Line::parameter("LIMITMASK").unwrap();
    let range = limitmask.range.unwrap();
    assert_eq!((range.min, range.max), (Some(2047), Some(2047)));

    // SNRMROCus publishes a non-positive range with 0.1 dB units
    let snrm = Line::parameter("SNRMROCus").unwrap();
    assert_eq!(snrm.field, "snrm_roc_us");
    let range = snrm.range.unwrap();
    assert_eq!((range.min, range.max), (Some(-640), Some(0)));
    assert_eq!(snrm.units, Some("0.1 dB"));
}

#[test]
fn test_param_info_notify_and_units() {
    let rate = Channel::parameter("DownstreamCurrRate").unwrap();
    assert_eq!(rate.notify, Notify::CanDeny);
    assert_eq!(rate.units, Some("Kbps"));
}

#[test]
fn test_paths_carry_instance_placeholders() {
    assert_eq!(Bridge::PATH, "InternetGatewayDevice.Layer2Bridging.Bridge.{i}.");
    assert_eq!(Layer2Bridging::PATH, "InternetGatewayDevice.Layer2Bridging.");
    assert_eq!(Line::PATH, "Device.DSL.Line.{i}.");
    assert_eq!(
        DownloadDiagnostics::PATH,
        "Device.IP.Diagnostics.DownloadDiagnostics."
    );
}

#[test]
fn test_filter_sentinel_defaults() {
    // -1 is the published "no association" sentinel
    let filter = Filter::new();
    assert_eq!(filter.filter_bridge_reference, -1);
    assert_eq!(filter.vlanid_filter, -1);
}

#[test]
fn test_udp_echo_defaults() {
    let echo = UdpEchoConfig::new();
    assert!(!echo.enable);
    assert!(!echo.echo_plus_enabled);
    assert_eq!(echo.source_ip_address, "");
}
