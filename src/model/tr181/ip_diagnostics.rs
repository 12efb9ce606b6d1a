// Auto-generated entities for tr181_ip_diagnostics.yaml — regenerate with `cwmp-gen`, do not edit by hand.
use crate::model::{Access, Bound, CwmpObject, Notify, ParamInfo};
use serde::{Deserialize, Serialize};

/// `Device.IP.Diagnostics.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Diagnostics {
    #[serde(rename = "IPv4PingSupported")]
    pub ipv4_ping_supported: bool,
    #[serde(rename = "IPv6PingSupported")]
    pub ipv6_ping_supported: bool,
    #[serde(rename = "IPv4TraceRouteSupported")]
    pub ipv4_trace_route_supported: bool,
    #[serde(rename = "IPv6TraceRouteSupported")]
    pub ipv6_trace_route_supported: bool,
    #[serde(rename = "IPv4DownloadDiagnosticsSupported")]
    pub ipv4_download_diagnostics_supported: bool,
    #[serde(rename = "IPv6DownloadDiagnosticsSupported")]
    pub ipv6_download_diagnostics_supported: bool,
    #[serde(rename = "IPv4UploadDiagnosticsSupported")]
    pub ipv4_upload_diagnostics_supported: bool,
    #[serde(rename = "IPv6UploadDiagnosticsSupported")]
    pub ipv6_upload_diagnostics_supported: bool,
    #[serde(rename = "IPPing", skip_serializing_if = "Option::is_none")]
    pub ip_ping: Option<IpPing>,
    #[serde(rename = "TraceRoute", skip_serializing_if = "Option::is_none")]
    pub trace_route: Option<TraceRoute>,
    #[serde(rename = "DownloadDiagnostics", skip_serializing_if = "Option::is_none")]
    pub download_diagnostics: Option<DownloadDiagnostics>,
    #[serde(rename = "UploadDiagnostics", skip_serializing_if = "Option::is_none")]
    pub upload_diagnostics: Option<UploadDiagnostics>,
    #[serde(rename = "UDPEchoConfig", skip_serializing_if = "Option::is_none")]
    pub udp_echo_config: Option<UdpEchoConfig>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ipv4_ping_supported(mut self, value: bool) -> Self {
        self.ipv4_ping_supported = value;
        self
    }

    pub fn with_ipv6_ping_supported(mut self, value: bool) -> Self {
        self.ipv6_ping_supported = value;
        self
    }

    pub fn with_ipv4_trace_route_supported(mut self, value: bool) -> Self {
        self.ipv4_trace_route_supported = value;
        self
    }

    pub fn with_ipv6_trace_route_supported(mut self, value: bool) -> Self {
        self.ipv6_trace_route_supported = value;
        self
    }

    pub fn with_ipv4_download_diagnostics_supported(mut self, value: bool) -> Self {
        self.ipv4_download_diagnostics_supported = value;
        self
    }

    pub fn with_ipv6_download_diagnostics_supported(mut self, value: bool) -> Self {
        self.ipv6_download_diagnostics_supported = value;
        self
    }

    pub fn with_ipv4_upload_diagnostics_supported(mut self, value: bool) -> Self {
        self.ipv4_upload_diagnostics_supported = value;
        self
    }

    pub fn with_ipv6_upload_diagnostics_supported(mut self, value: bool) -> Self {
        self.ipv6_upload_diagnostics_supported = value;
        self
    }

    pub fn with_ip_ping(mut self, value: Option<IpPing>) -> Self {
        self.ip_ping = value;
        self
    }

    pub fn with_trace_route(mut self, value: Option<TraceRoute>) -> Self {
        self.trace_route = value;
        self
    }

    pub fn with_download_diagnostics(mut self, value: Option<DownloadDiagnostics>) -> Self {
        self.download_diagnostics = value;
        self
    }

    pub fn with_upload_diagnostics(mut self, value: Option<UploadDiagnostics>) -> Self {
        self.upload_diagnostics = value;
        self
    }

    pub fn with_udp_echo_config(mut self, value: Option<UdpEchoConfig>) -> Self {
        self.udp_echo_config = value;
        self
    }
}

impl CwmpObject for Diagnostics {
    const PATH: &'static str = "Device.IP.Diagnostics.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "IPv4PingSupported",
                field: "ipv4_ping_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "IPv6PingSupported",
                field: "ipv6_ping_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "IPv4TraceRouteSupported",
                field: "ipv4_trace_route_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "IPv6TraceRouteSupported",
                field: "ipv6_trace_route_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "IPv4DownloadDiagnosticsSupported",
                field: "ipv4_download_diagnostics_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "IPv6DownloadDiagnosticsSupported",
                field: "ipv6_download_diagnostics_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "IPv4UploadDiagnosticsSupported",
                field: "ipv4_upload_diagnostics_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "IPv6UploadDiagnosticsSupported",
                field: "ipv6_upload_diagnostics_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.IP.Diagnostics.IPPing.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpPing {
    #[serde(rename = "DiagnosticsState")]
    pub diagnostics_state: String,
    #[serde(rename = "Interface")]
    pub interface: String,
    #[serde(rename = "ProtocolVersion")]
    pub protocol_version: String,
    #[serde(rename = "Host")]
    pub host: String,
    #[serde(rename = "NumberOfRepetitions")]
    pub number_of_repetitions: u32,
    #[serde(rename = "Timeout")]
    pub timeout: u32,
    #[serde(rename = "DataBlockSize")]
    pub data_block_size: u32,
    #[serde(rename = "DSCP")]
    pub dscp: u32,
    #[serde(rename = "SuccessCount")]
    pub success_count: u32,
    #[serde(rename = "FailureCount")]
    pub failure_count: u32,
    #[serde(rename = "AverageResponseTime")]
    pub average_response_time: u32,
    #[serde(rename = "MinimumResponseTime")]
    pub minimum_response_time: u32,
    #[serde(rename = "MaximumResponseTime")]
    pub maximum_response_time: u32,
}

impl IpPing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostics_state(mut self, value: String) -> Self {
        self.diagnostics_state = value;
        self
    }

    pub fn with_interface(mut self, value: String) -> Self {
        self.interface = value;
        self
    }

    pub fn with_protocol_version(mut self, value: String) -> Self {
        self.protocol_version = value;
        self
    }

    pub fn with_host(mut self, value: String) -> Self {
        self.host = value;
        self
    }

    pub fn with_number_of_repetitions(mut self, value: u32) -> Self {
        self.number_of_repetitions = value;
        self
    }

    pub fn with_timeout(mut self, value: u32) -> Self {
        self.timeout = value;
        self
    }

    pub fn with_data_block_size(mut self, value: u32) -> Self {
        self.data_block_size = value;
        self
    }

    pub fn with_dscp(mut self, value: u32) -> Self {
        self.dscp = value;
        self
    }

    pub fn with_success_count(mut self, value: u32) -> Self {
        self.success_count = value;
        self
    }

    pub fn with_failure_count(mut self, value: u32) -> Self {
        self.failure_count = value;
        self
    }

    pub fn with_average_response_time(mut self, value: u32) -> Self {
        self.average_response_time = value;
        self
    }

    pub fn with_minimum_response_time(mut self, value: u32) -> Self {
        self.minimum_response_time = value;
        self
    }

    pub fn with_maximum_response_time(mut self, value: u32) -> Self {
        self.maximum_response_time = value;
        self
    }
}

impl Default for IpPing {
    fn default() -> Self {
        Self {
            diagnostics_state: "None".to_string(),
            interface: Default::default(),
            protocol_version: "Any".to_string(),
            host: Default::default(),
            number_of_repetitions: Default::default(),
            timeout: Default::default(),
            data_block_size: 1,
            dscp: 0,
            success_count: Default::default(),
            failure_count: Default::default(),
            average_response_time: Default::default(),
            minimum_response_time: Default::default(),
            maximum_response_time: Default::default(),
        }
    }
}

impl CwmpObject for IpPing {
    const PATH: &'static str = "Device.IP.Diagnostics.IPPing.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "DiagnosticsState",
                field: "diagnostics_state",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "Interface",
                field: "interface",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "ProtocolVersion",
                field: "protocol_version",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "Host",
                field: "host",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "NumberOfRepetitions",
                field: "number_of_repetitions",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(1), max: None }),
            },
            ParamInfo {
                name: "Timeout",
                field: "timeout",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: Some("milliseconds"),
                size: None,
                range: Some(Bound { min: Some(1), max: None }),
            },
            ParamInfo {
                name: "DataBlockSize",
                field: "data_block_size",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(1), max: Some(65535) }),
            },
            ParamInfo {
                name: "DSCP",
                field: "dscp",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(0), max: Some(63) }),
            },
            ParamInfo {
                name: "SuccessCount",
                field: "success_count",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "FailureCount",
                field: "failure_count",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "AverageResponseTime",
                field: "average_response_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("milliseconds"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "MinimumResponseTime",
                field: "minimum_response_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("milliseconds"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "MaximumResponseTime",
                field: "maximum_response_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("milliseconds"),
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.IP.Diagnostics.TraceRoute.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceRoute {
    #[serde(rename = "DiagnosticsState")]
    pub diagnostics_state: String,
    #[serde(rename = "Interface")]
    pub interface: String,
    #[serde(rename = "ProtocolVersion")]
    pub protocol_version: String,
    #[serde(rename = "Host")]
    pub host: String,
    #[serde(rename = "NumberOfTries")]
    pub number_of_tries: u32,
    #[serde(rename = "Timeout")]
    pub timeout: u32,
    #[serde(rename = "DataBlockSize")]
    pub data_block_size: u32,
    #[serde(rename = "DSCP")]
    pub dscp: u32,
    #[serde(rename = "MaxHopCount")]
    pub max_hop_count: u32,
    #[serde(rename = "ResponseTime")]
    pub response_time: u32,
    #[serde(rename = "RouteHopsNumberOfEntries")]
    pub route_hops_number_of_entries: u32,
    #[serde(rename = "RouteHops")]
    pub route_hops: Vec<RouteHops>,
}

impl TraceRoute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostics_state(mut self, value: String) -> Self {
        self.diagnostics_state = value;
        self
    }

    pub fn with_interface(mut self, value: String) -> Self {
        self.interface = value;
        self
    }

    pub fn with_protocol_version(mut self, value: String) -> Self {
        self.protocol_version = value;
        self
    }

    pub fn with_host(mut self, value: String) -> Self {
        self.host = value;
        self
    }

    pub fn with_number_of_tries(mut self, value: u32) -> Self {
        self.number_of_tries = value;
        self
    }

    pub fn with_timeout(mut self, value: u32) -> Self {
        self.timeout = value;
        self
    }

    pub fn with_data_block_size(mut self, value: u32) -> Self {
        self.data_block_size = value;
        self
    }

    pub fn with_dscp(mut self, value: u32) -> Self {
        self.dscp = value;
        self
    }

    pub fn with_max_hop_count(mut self, value: u32) -> Self {
        self.max_hop_count = value;
        self
    }

    pub fn with_response_time(mut self, value: u32) -> Self {
        self.response_time = value;
        self
    }

    pub fn with_route_hops_number_of_entries(mut self, value: u32) -> Self {
        self.route_hops_number_of_entries = value;
        self
    }

    pub fn with_route_hops(mut self, item: RouteHops) -> Self {
        self.route_hops.push(item);
        self
    }
}

impl Default for TraceRoute {
    fn default() -> Self {
        Self {
            diagnostics_state: "None".to_string(),
            interface: Default::default(),
            protocol_version: "Any".to_string(),
            host: Default::default(),
            number_of_tries: 3,
            timeout: 5000,
            data_block_size: 38,
            dscp: 0,
            max_hop_count: 30,
            response_time: Default::default(),
            route_hops_number_of_entries: Default::default(),
            route_hops: Default::default(),
        }
    }
}

impl CwmpObject for TraceRoute {
    const PATH: &'static str = "Device.IP.Diagnostics.TraceRoute.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "DiagnosticsState",
                field: "diagnostics_state",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "Interface",
                field: "interface",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "ProtocolVersion",
                field: "protocol_version",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "Host",
                field: "host",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "NumberOfTries",
                field: "number_of_tries",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(1), max: Some(3) }),
            },
            ParamInfo {
                name: "Timeout",
                field: "timeout",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: Some("milliseconds"),
                size: None,
                range: Some(Bound { min: Some(1), max: None }),
            },
            ParamInfo {
                name: "DataBlockSize",
                field: "data_block_size",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(1), max: Some(65535) }),
            },
            ParamInfo {
                name: "DSCP",
                field: "dscp",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(0), max: Some(63) }),
            },
            ParamInfo {
                name: "MaxHopCount",
                field: "max_hop_count",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(1), max: Some(64) }),
            },
            ParamInfo {
                name: "ResponseTime",
                field: "response_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("milliseconds"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "RouteHopsNumberOfEntries",
                field: "route_hops_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.IP.Diagnostics.TraceRoute.RouteHops.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RouteHops {
    #[serde(rename = "Host")]
    pub host: String,
    #[serde(rename = "HostAddress")]
    pub host_address: String,
    #[serde(rename = "ErrorCode")]
    pub error_code: u32,
    #[serde(rename = "RTTimes", with = "crate::model::wire::comma_list")]
    pub rt_times: Vec<String>,
}

impl RouteHops {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, value: String) -> Self {
        self.host = value;
        self
    }

    pub fn with_host_address(mut self, value: String) -> Self {
        self.host_address = value;
        self
    }

    pub fn with_error_code(mut self, value: u32) -> Self {
        self.error_code = value;
        self
    }

    pub fn with_rt_times(mut self, item: String) -> Self {
        self.rt_times.push(item);
        self
    }
}

impl CwmpObject for RouteHops {
    const PATH: &'static str = "Device.IP.Diagnostics.TraceRoute.RouteHops.{i}.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "Host",
                field: "host",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "HostAddress",
                field: "host_address",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "ErrorCode",
                field: "error_code",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "RTTimes",
                field: "rt_times",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(16) }),
                range: None,
            },
        ]
    }
}

/// `Device.IP.Diagnostics.DownloadDiagnostics.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadDiagnostics {
    #[serde(rename = "DiagnosticsState")]
    pub diagnostics_state: String,
    #[serde(rename = "Interface")]
    pub interface: String,
    #[serde(rename = "DownloadURL")]
    pub download_url: String,
    #[serde(rename = "DownloadTransports", with = "crate::model::wire::comma_list")]
    pub download_transports: Vec<String>,
    #[serde(rename = "DSCP")]
    pub dscp: u32,
    #[serde(rename = "EthernetPriority")]
    pub ethernet_priority: u32,
    #[serde(rename = "TimeBasedTestDuration")]
    pub time_based_test_duration: u32,
    #[serde(rename = "ROMTime")]
    pub rom_time: String,
    #[serde(rename = "BOMTime")]
    pub bom_time: String,
    #[serde(rename = "EOMTime")]
    pub eom_time: String,
    #[serde(rename = "TestBytesReceived")]
    pub test_bytes_received: u32,
    #[serde(rename = "TotalBytesReceived")]
    pub total_bytes_received: u32,
    #[serde(rename = "TotalBytesSent")]
    pub total_bytes_sent: u32,
    #[serde(rename = "PeriodOfFullLoading")]
    pub period_of_full_loading: u32,
    #[serde(rename = "TCPOpenRequestTime")]
    pub tcp_open_request_time: String,
    #[serde(rename = "TCPOpenResponseTime")]
    pub tcp_open_response_time: String,
    #[serde(rename = "EnablePerConnectionResults")]
    pub enable_per_connection_results: bool,
    #[serde(rename = "PerConnectionResultNumberOfEntries")]
    pub per_connection_result_number_of_entries: u32,
    #[serde(rename = "PerConnectionResult")]
    pub per_connection_result: Vec<PerConnectionResult>,
}

impl DownloadDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostics_state(mut self, value: String) -> Self {
        self.diagnostics_state = value;
        self
    }

    pub fn with_interface(mut self, value: String) -> Self {
        self.interface = value;
        self
    }

    pub fn with_download_url(mut self, value: String) -> Self {
        self.download_url = value;
        self
    }

    pub fn with_download_transports(mut self, item: String) -> Self {
        self.download_transports.push(item);
        self
    }

    pub fn with_dscp(mut self, value: u32) -> Self {
        self.dscp = value;
        self
    }

    pub fn with_ethernet_priority(mut self, value: u32) -> Self {
        self.ethernet_priority = value;
        self
    }

    pub fn with_time_based_test_duration(mut self, value: u32) -> Self {
        self.time_based_test_duration = value;
        self
    }

    pub fn with_rom_time(mut self, value: String) -> Self {
        self.rom_time = value;
        self
    }

    pub fn with_bom_time(mut self, value: String) -> Self {
        self.bom_time = value;
        self
    }

    pub fn with_eom_time(mut self, value: String) -> Self {
        self.eom_time = value;
        self
    }

    pub fn with_test_bytes_received(mut self, value: u32) -> Self {
        self.test_bytes_received = value;
        self
    }

    pub fn with_total_bytes_received(mut self, value: u32) -> Self {
        self.total_bytes_received = value;
        self
    }

    pub fn with_total_bytes_sent(mut self, value: u32) -> Self {
        self.total_bytes_sent = value;
        self
    }

    pub fn with_period_of_full_loading(mut self, value: u32) -> Self {
        self.period_of_full_loading = value;
        self
    }

    pub fn with_tcp_open_request_time(mut self, value: String) -> Self {
        self.tcp_open_request_time = value;
        self
    }

    pub fn with_tcp_open_response_time(mut self, value: String) -> Self {
        self.tcp_open_response_time = value;
        self
    }

    pub fn with_enable_per_connection_results(mut self, value: bool) -> Self {
        self.enable_per_connection_results = value;
        self
    }

    pub fn with_per_connection_result_number_of_entries(mut self, value: u32) -> Self {
        self.per_connection_result_number_of_entries = value;
        self
    }

    pub fn with_per_connection_result(mut self, item: PerConnectionResult) -> Self {
        self.per_connection_result.push(item);
        self
    }
}

impl Default for DownloadDiagnostics {
    fn default() -> Self {
        Self {
            diagnostics_state: "None".to_string(),
            interface: Default::default(),
            download_url: Default::default(),
            download_transports: Default::default(),
            dscp: 0,
            ethernet_priority: 0,
            time_based_test_duration: 0,
            rom_time: Default::default(),
            bom_time: Default::default(),
            eom_time: Default::default(),
            test_bytes_received: Default::default(),
            total_bytes_received: Default::default(),
            total_bytes_sent: Default::default(),
            period_of_full_loading: Default::default(),
            tcp_open_request_time: Default::default(),
            tcp_open_response_time: Default::default(),
            enable_per_connection_results: false,
            per_connection_result_number_of_entries: Default::default(),
            per_connection_result: Default::default(),
        }
    }
}

impl CwmpObject for DownloadDiagnostics {
    const PATH: &'static str = "Device.IP.Diagnostics.DownloadDiagnostics.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "DiagnosticsState",
                field: "diagnostics_state",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "Interface",
                field: "interface",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "DownloadURL",
                field: "download_url",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(2048) }),
                range: None,
            },
            ParamInfo {
                name: "DownloadTransports",
                field: "download_transports",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "DSCP",
                field: "dscp",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(0), max: Some(63) }),
            },
            ParamInfo {
                name: "EthernetPriority",
                field: "ethernet_priority",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(0), max: Some(7) }),
            },
            ParamInfo {
                name: "TimeBasedTestDuration",
                field: "time_based_test_duration",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: Some("seconds"),
                size: None,
                range: Some(Bound { min: Some(0), max: Some(999) }),
            },
            ParamInfo {
                name: "ROMTime",
                field: "rom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BOMTime",
                field: "bom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EOMTime",
                field: "eom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TestBytesReceived",
                field: "test_bytes_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TotalBytesReceived",
                field: "total_bytes_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TotalBytesSent",
                field: "total_bytes_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PeriodOfFullLoading",
                field: "period_of_full_loading",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("microseconds"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TCPOpenRequestTime",
                field: "tcp_open_request_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TCPOpenResponseTime",
                field: "tcp_open_response_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EnablePerConnectionResults",
                field: "enable_per_connection_results",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PerConnectionResultNumberOfEntries",
                field: "per_connection_result_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.IP.Diagnostics.DownloadDiagnostics.PerConnectionResult.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PerConnectionResult {
    #[serde(rename = "ROMTime")]
    pub rom_time: String,
    #[serde(rename = "BOMTime")]
    pub bom_time: String,
    #[serde(rename = "EOMTime")]
    pub eom_time: String,
    #[serde(rename = "TestBytesReceived")]
    pub test_bytes_received: u32,
    #[serde(rename = "TotalBytesReceived")]
    pub total_bytes_received: u32,
    #[serde(rename = "TotalBytesSent")]
    pub total_bytes_sent: u32,
    #[serde(rename = "TCPOpenRequestTime")]
    pub tcp_open_request_time: String,
    #[serde(rename = "TCPOpenResponseTime")]
    pub tcp_open_response_time: String,
}

impl PerConnectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rom_time(mut self, value: String) -> Self {
        self.rom_time = value;
        self
    }

    pub fn with_bom_time(mut self, value: String) -> Self {
        self.bom_time = value;
        self
    }

    pub fn with_eom_time(mut self, value: String) -> Self {
        self.eom_time = value;
        self
    }

    pub fn with_test_bytes_received(mut self, value: u32) -> Self {
        self.test_bytes_received = value;
        self
    }

    pub fn with_total_bytes_received(mut self, value: u32) -> Self {
        self.total_bytes_received = value;
        self
    }

    pub fn with_total_bytes_sent(mut self, value: u32) -> Self {
        self.total_bytes_sent = value;
        self
    }

    pub fn with_tcp_open_request_time(mut self, value: String) -> Self {
        self.tcp_open_request_time = value;
        self
    }

    pub fn with_tcp_open_response_time(mut self, value: String) -> Self {
        self.tcp_open_response_time = value;
        self
    }
}

impl CwmpObject for PerConnectionResult {
    const PATH: &'static str = "Device.IP.Diagnostics.DownloadDiagnostics.PerConnectionResult.{i}.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "ROMTime",
                field: "rom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BOMTime",
                field: "bom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EOMTime",
                field: "eom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TestBytesReceived",
                field: "test_bytes_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TotalBytesReceived",
                field: "total_bytes_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TotalBytesSent",
                field: "total_bytes_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TCPOpenRequestTime",
                field: "tcp_open_request_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TCPOpenResponseTime",
                field: "tcp_open_response_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.IP.Diagnostics.UploadDiagnostics.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadDiagnostics {
    #[serde(rename = "DiagnosticsState")]
    pub diagnostics_state: String,
    #[serde(rename = "Interface")]
    pub interface: String,
    #[serde(rename = "UploadURL")]
    pub upload_url: String,
    #[serde(rename = "UploadTransports", with = "crate::model::wire::comma_list")]
    pub upload_transports: Vec<String>,
    #[serde(rename = "DSCP")]
    pub dscp: u32,
    #[serde(rename = "EthernetPriority")]
    pub ethernet_priority: u32,
    #[serde(rename = "TestFileLength")]
    pub test_file_length: u32,
    #[serde(rename = "TimeBasedTestDuration")]
    pub time_based_test_duration: u32,
    #[serde(rename = "ROMTime")]
    pub rom_time: String,
    #[serde(rename = "BOMTime")]
    pub bom_time: String,
    #[serde(rename = "EOMTime")]
    pub eom_time: String,
    #[serde(rename = "TestBytesSent")]
    pub test_bytes_sent: u32,
    #[serde(rename = "TotalBytesReceived")]
    pub total_bytes_received: u32,
    #[serde(rename = "TotalBytesSent")]
    pub total_bytes_sent: u32,
    #[serde(rename = "PeriodOfFullLoading")]
    pub period_of_full_loading: u32,
    #[serde(rename = "TCPOpenRequestTime")]
    pub tcp_open_request_time: String,
    #[serde(rename = "TCPOpenResponseTime")]
    pub tcp_open_response_time: String,
    #[serde(rename = "EnablePerConnectionResults")]
    pub enable_per_connection_results: bool,
    #[serde(rename = "PerConnectionResultNumberOfEntries")]
    pub per_connection_result_number_of_entries: u32,
    #[serde(rename = "PerConnectionResult")]
    pub per_connection_result: Vec<UploadDiagnosticsPerConnectionResult>,
}

impl UploadDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostics_state(mut self, value: String) -> Self {
        self.diagnostics_state = value;
        self
    }

    pub fn with_interface(mut self, value: String) -> Self {
        self.interface = value;
        self
    }

    pub fn with_upload_url(mut self, value: String) -> Self {
        self.upload_url = value;
        self
    }

    pub fn with_upload_transports(mut self, item: String) -> Self {
        self.upload_transports.push(item);
        self
    }

    pub fn with_dscp(mut self, value: u32) -> Self {
        self.dscp = value;
        self
    }

    pub fn with_ethernet_priority(mut self, value: u32) -> Self {
        self.ethernet_priority = value;
        self
    }

    pub fn with_test_file_length(mut self, value: u32) -> Self {
        self.test_file_length = value;
        self
    }

    pub fn with_time_based_test_duration(mut self, value: u32) -> Self {
        self.time_based_test_duration = value;
        self
    }

    pub fn with_rom_time(mut self, value: String) -> Self {
        self.rom_time = value;
        self
    }

    pub fn with_bom_time(mut self, value: String) -> Self {
        self.bom_time = value;
        self
    }

    pub fn with_eom_time(mut self, value: String) -> Self {
        self.eom_time = value;
        self
    }

    pub fn with_test_bytes_sent(mut self, value: u32) -> Self {
        self.test_bytes_sent = value;
        self
    }

    pub fn with_total_bytes_received(mut self, value: u32) -> Self {
        self.total_bytes_received = value;
        self
    }

    pub fn with_total_bytes_sent(mut self, value: u32) -> Self {
        self.total_bytes_sent = value;
        self
    }

    pub fn with_period_of_full_loading(mut self, value: u32) -> Self {
        self.period_of_full_loading = value;
        self
    }

    pub fn with_tcp_open_request_time(mut self, value: String) -> Self {
        self.tcp_open_request_time = value;
        self
    }

    pub fn with_tcp_open_response_time(mut self, value: String) -> Self {
        self.tcp_open_response_time = value;
        self
    }

    pub fn with_enable_per_connection_results(mut self, value: bool) -> Self {
        self.enable_per_connection_results = value;
        self
    }

    pub fn with_per_connection_result_number_of_entries(mut self, value: u32) -> Self {
        self.per_connection_result_number_of_entries = value;
        self
    }

    pub fn with_per_connection_result(mut self, item: UploadDiagnosticsPerConnectionResult) -> Self {
        self.per_connection_result.push(item);
        self
    }
}

impl Default for UploadDiagnostics {
    fn default() -> Self {
        Self {
            diagnostics_state: "None".to_string(),
            interface: Default::default(),
            upload_url: Default::default(),
            upload_transports: Default::default(),
            dscp: 0,
            ethernet_priority: 0,
            test_file_length: 0,
            time_based_test_duration: 0,
            rom_time: Default::default(),
            bom_time: Default::default(),
            eom_time: Default::default(),
            test_bytes_sent: Default::default(),
            total_bytes_received: Default::default(),
            total_bytes_sent: Default::default(),
            period_of_full_loading: Default::default(),
            tcp_open_request_time: Default::default(),
            tcp_open_response_time: Default::default(),
            enable_per_connection_results: false,
            per_connection_result_number_of_entries: Default::default(),
            per_connection_result: Default::default(),
        }
    }
}

impl CwmpObject for UploadDiagnostics {
    const PATH: &'static str = "Device.IP.Diagnostics.UploadDiagnostics.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "DiagnosticsState",
                field: "diagnostics_state",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "Interface",
                field: "interface",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "UploadURL",
                field: "upload_url",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(2048) }),
                range: None,
            },
            ParamInfo {
                name: "UploadTransports",
                field: "upload_transports",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "DSCP",
                field: "dscp",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(0), max: Some(63) }),
            },
            ParamInfo {
                name: "EthernetPriority",
                field: "ethernet_priority",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(0), max: Some(7) }),
            },
            ParamInfo {
                name: "TestFileLength",
                field: "test_file_length",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: Some("bytes"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TimeBasedTestDuration",
                field: "time_based_test_duration",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: Some("seconds"),
                size: None,
                range: Some(Bound { min: Some(0), max: Some(999) }),
            },
            ParamInfo {
                name: "ROMTime",
                field: "rom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BOMTime",
                field: "bom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EOMTime",
                field: "eom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TestBytesSent",
                field: "test_bytes_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TotalBytesReceived",
                field: "total_bytes_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TotalBytesSent",
                field: "total_bytes_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PeriodOfFullLoading",
                field: "period_of_full_loading",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("microseconds"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TCPOpenRequestTime",
                field: "tcp_open_request_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TCPOpenResponseTime",
                field: "tcp_open_response_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EnablePerConnectionResults",
                field: "enable_per_connection_results",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PerConnectionResultNumberOfEntries",
                field: "per_connection_result_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.IP.Diagnostics.UploadDiagnostics.PerConnectionResult.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UploadDiagnosticsPerConnectionResult {
    #[serde(rename = "ROMTime")]
    pub rom_time: String,
    #[serde(rename = "BOMTime")]
    pub bom_time: String,
    #[serde(rename = "EOMTime")]
    pub eom_time: String,
    #[serde(rename = "TestBytesSent")]
    pub test_bytes_sent: u32,
    #[serde(rename = "TotalBytesReceived")]
    pub total_bytes_received: u32,
    #[serde(rename = "TotalBytesSent")]
    pub total_bytes_sent: u32,
    #[serde(rename = "TCPOpenRequestTime")]
    pub tcp_open_request_time: String,
    #[serde(rename = "TCPOpenResponseTime")]
    pub tcp_open_response_time: String,
}

impl UploadDiagnosticsPerConnectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rom_time(mut self, value: String) -> Self {
        self.rom_time = value;
        self
    }

    pub fn with_bom_time(mut self, value: String) -> Self {
        self.bom_time = value;
        self
    }

    pub fn with_eom_time(mut self, value: String) -> Self {
        self.eom_time = value;
        self
    }

    pub fn with_test_bytes_sent(mut self, value: u32) -> Self {
        self.test_bytes_sent = value;
        self
    }

    pub fn with_total_bytes_received(mut self, value: u32) -> Self {
        self.total_bytes_received = value;
        self
    }

    pub fn with_total_bytes_sent(mut self, value: u32) -> Self {
        self.total_bytes_sent = value;
        self
    }

    pub fn with_tcp_open_request_time(mut self, value: String) -> Self {
        self.tcp_open_request_time = value;
        self
    }

    pub fn with_tcp_open_response_time(mut self, value: String) -> Self {
        self.tcp_open_response_time = value;
        self
    }
}

impl CwmpObject for UploadDiagnosticsPerConnectionResult {
    const PATH: &'static str = "Device.IP.Diagnostics.UploadDiagnostics.PerConnectionResult.{i}.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "ROMTime",
                field: "rom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BOMTime",
                field: "bom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EOMTime",
                field: "eom_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TestBytesSent",
                field: "test_bytes_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TotalBytesReceived",
                field: "total_bytes_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TotalBytesSent",
                field: "total_bytes_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TCPOpenRequestTime",
                field: "tcp_open_request_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TCPOpenResponseTime",
                field: "tcp_open_response_time",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.IP.Diagnostics.UDPEchoConfig.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UdpEchoConfig {
    #[serde(rename = "Enable")]
    pub enable: bool,
    #[serde(rename = "Interface")]
    pub interface: String,
    #[serde(rename = "SourceIPAddress")]
    pub source_ip_address: String,
    #[serde(rename = "UDPPort")]
    pub udp_port: u32,
    #[serde(rename = "EchoPlusEnabled")]
    pub echo_plus_enabled: bool,
    #[serde(rename = "EchoPlusSupported")]
    pub echo_plus_supported: bool,
    #[serde(rename = "PacketsReceived")]
    pub packets_received: u32,
    #[serde(rename = "PacketsResponded")]
    pub packets_responded: u32,
    #[serde(rename = "BytesReceived")]
    pub bytes_received: u32,
    #[serde(rename = "BytesResponded")]
    pub bytes_responded: u32,
    #[serde(rename = "TimeFirstPacketReceived")]
    pub time_first_packet_received: String,
    #[serde(rename = "TimeLastPacketReceived")]
    pub time_last_packet_received: String,
}

impl UdpEchoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enable(mut self, value: bool) -> Self {
        self.enable = value;
        self
    }

    pub fn with_interface(mut self, value: String) -> Self {
        self.interface = value;
        self
    }

    pub fn with_source_ip_address(mut self, value: String) -> Self {
        self.source_ip_address = value;
        self
    }

    pub fn with_udp_port(mut self, value: u32) -> Self {
        self.udp_port = value;
        self
    }

    pub fn with_echo_plus_enabled(mut self, value: bool) -> Self {
        self.echo_plus_enabled = value;
        self
    }

    pub fn with_echo_plus_supported(mut self, value: bool) -> Self {
        self.echo_plus_supported = value;
        self
    }

    pub fn with_packets_received(mut self, value: u32) -> Self {
        self.packets_received = value;
        self
    }

    pub fn with_packets_responded(mut self, value: u32) -> Self {
        self.packets_responded = value;
        self
    }

    pub fn with_bytes_received(mut self, value: u32) -> Self {
        self.bytes_received = value;
        self
    }

    pub fn with_bytes_responded(mut self, value: u32) -> Self {
        self.bytes_responded = value;
        self
    }

    pub fn with_time_first_packet_received(mut self, value: String) -> Self {
        self.time_first_packet_received = value;
        self
    }

    pub fn with_time_last_packet_received(mut self, value: String) -> Self {
        self.time_last_packet_received = value;
        self
    }
}

impl Default for UdpEchoConfig {
    fn default() -> Self {
        Self {
            enable: false,
            interface: Default::default(),
            source_ip_address: Default::default(),
            udp_port: Default::default(),
            echo_plus_enabled: false,
            echo_plus_supported: Default::default(),
            packets_received: Default::default(),
            packets_responded: Default::default(),
            bytes_received: Default::default(),
            bytes_responded: Default::default(),
            time_first_packet_received: Default::default(),
            time_last_packet_received: Default::default(),
        }
    }
}

impl CwmpObject for UdpEchoConfig {
    const PATH: &'static str = "Device.IP.Diagnostics.UDPEchoConfig.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "Enable",
                field: "enable",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "Interface",
                field: "interface",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "SourceIPAddress",
                field: "source_ip_address",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "UDPPort",
                field: "udp_port",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EchoPlusEnabled",
                field: "echo_plus_enabled",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EchoPlusSupported",
                field: "echo_plus_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PacketsReceived",
                field: "packets_received",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PacketsResponded",
                field: "packets_responded",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BytesReceived",
                field: "bytes_received",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BytesResponded",
                field: "bytes_responded",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TimeFirstPacketReceived",
                field: "time_first_packet_received",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TimeLastPacketReceived",
                field: "time_last_packet_received",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}
