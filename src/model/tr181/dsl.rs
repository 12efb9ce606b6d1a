// Auto-generated entities for tr181_dsl.yaml — regenerate with `cwmp-gen`, do not edit by hand.
use crate::model::{Access, Bound, CwmpObject, Notify, ParamInfo};
use serde::{Deserialize, Serialize};

/// `Device.DSL.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Dsl {
    #[serde(rename = "LineNumberOfEntries")]
    pub line_number_of_entries: u32,
    #[serde(rename = "ChannelNumberOfEntries")]
    pub channel_number_of_entries: u32,
    #[serde(rename = "BondingGroupNumberOfEntries")]
    pub bonding_group_number_of_entries: u32,
    #[serde(rename = "Line")]
    pub line: Vec<Line>,
    #[serde(rename = "Channel")]
    pub channel: Vec<Channel>,
    #[serde(rename = "BondingGroup")]
    pub bonding_group: Vec<BondingGroup>,
}

impl Dsl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_number_of_entries(mut self, value: u32) -> Self {
        self.line_number_of_entries = value;
        self
    }

    pub fn with_channel_number_of_entries(mut self, value: u32) -> Self {
        self.channel_number_of_entries = value;
        self
    }

    pub fn with_bonding_group_number_of_entries(mut self, value: u32) -> Self {
        self.bonding_group_number_of_entries = value;
        self
    }

    pub fn with_line(mut self, item: Line) -> Self {
        self.line.push(item);
        self
    }

    pub fn with_channel(mut self, item: Channel) -> Self {
        self.channel.push(item);
        self
    }

    pub fn with_bonding_group(mut self, item: BondingGroup) -> Self {
        self.bonding_group.push(item);
        self
    }
}

impl CwmpObject for Dsl {
    const PATH: &'static str = "Device.DSL.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "LineNumberOfEntries",
                field: "line_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "ChannelNumberOfEntries",
                field: "channel_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BondingGroupNumberOfEntries",
                field: "bonding_group_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.DSL.Line.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Line {
    #[serde(rename = "Enable")]
    pub enable: bool,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Alias")]
    pub alias: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "LowerLayers", with = "crate::model::wire::comma_list")]
    pub lower_layers: Vec<String>,
    #[serde(rename = "Upstream")]
    pub upstream: bool,
    #[serde(rename = "FirmwareVersion")]
    pub firmware_version: String,
    #[serde(rename = "LinkStatus")]
    pub link_status: String,
    #[serde(rename = "StandardsSupported", with = "crate::model::wire::comma_list")]
    pub standards_supported: Vec<String>,
    #[serde(rename = "StandardUsed")]
    pub standard_used: String,
    #[serde(rename = "AllowedProfiles", with = "crate::model::wire::comma_list")]
    pub allowed_profiles: Vec<String>,
    #[serde(rename = "CurrentProfile")]
    pub current_profile: String,
    #[serde(rename = "PowerManagementState")]
    pub power_management_state: String,
    #[serde(rename = "SuccessFailureCause")]
    pub success_failure_cause: u32,
    #[serde(rename = "UPBOKLER")]
    pub upbokler: u32,
    #[serde(rename = "LIMITMASK")]
    pub limitmask: i64,
    #[serde(rename = "SNRMROCus")]
    pub snrm_roc_us: i32,
    #[serde(rename = "TRELLISds")]
    pub trellis_ds: i32,
    #[serde(rename = "DownstreamMaxBitRate")]
    pub downstream_max_bit_rate: u32,
    #[serde(rename = "UpstreamMaxBitRate")]
    pub upstream_max_bit_rate: u32,
    #[serde(rename = "DownstreamNoiseMargin")]
    pub downstream_noise_margin: i32,
    #[serde(rename = "UpstreamNoiseMargin")]
    pub upstream_noise_margin: i32,
    #[serde(rename = "DownstreamAttenuation")]
    pub downstream_attenuation: i32,
    #[serde(rename = "UpstreamAttenuation")]
    pub upstream_attenuation: i32,
    #[serde(rename = "DownstreamPower")]
    pub downstream_power: i32,
    #[serde(rename = "UpstreamPower")]
    pub upstream_power: i32,
    #[serde(rename = "Stats", skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(rename = "TestParams", skip_serializing_if = "Option::is_none")]
    pub test_params: Option<TestParams>,
    #[serde(rename = "DataGathering", skip_serializing_if = "Option::is_none")]
    pub data_gathering: Option<DataGathering>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enable(mut self, value: bool) -> Self {
        self.enable = value;
        self
    }

    pub fn with_status(mut self, value: String) -> Self {
        self.status = value;
        self
    }

    pub fn with_alias(mut self, value: String) -> Self {
        self.alias = value;
        self
    }

    pub fn with_name(mut self, value: String) -> Self {
        self.name = value;
        self
    }

    pub fn with_lower_layers(mut self, item: String) -> Self {
        self.lower_layers.push(item);
        self
    }

    pub fn with_upstream(mut self, value: bool) -> Self {
        self.upstream = value;
        self
    }

    pub fn with_firmware_version(mut self, value: String) -> Self {
        self.firmware_version = value;
        self
    }

    pub fn with_link_status(mut self, value: String) -> Self {
        self.link_status = value;
        self
    }

    pub fn with_standards_supported(mut self, item: String) -> Self {
        self.standards_supported.push(item);
        self
    }

    pub fn with_standard_used(mut self, value: String) -> Self {
        self.standard_used = value;
        self
    }

    pub fn with_allowed_profiles(mut self, item: String) -> Self {
        self.allowed_profiles.push(item);
        self
    }

    pub fn with_current_profile(mut self, value: String) -> Self {
        self.current_profile = value;
        self
    }

    pub fn with_power_management_state(mut self, value: String) -> Self {
        self.power_management_state = value;
        self
    }

    pub fn with_success_failure_cause(mut self, value: u32) -> Self {
        self.success_failure_cause = value;
        self
    }

    pub fn with_upbokler(mut self, value: u32) -> Self {
        self.upbokler = value;
        self
    }

    pub fn with_limitmask(mut self, value: i64) -> Self {
        self.limitmask = value;
        self
    }

    pub fn with_snrm_roc_us(mut self, value: i32) -> Self {
        self.snrm_roc_us = value;
        self
    }

    pub fn with_trellis_ds(mut self, value: i32) -> Self {
        self.trellis_ds = value;
        self
    }

    pub fn with_downstream_max_bit_rate(mut self, value: u32) -> Self {
        self.downstream_max_bit_rate = value;
        self
    }

    pub fn with_upstream_max_bit_rate(mut self, value: u32) -> Self {
        self.upstream_max_bit_rate = value;
        self
    }

    pub fn with_downstream_noise_margin(mut self, value: i32) -> Self {
        self.downstream_noise_margin = value;
        self
    }

    pub fn with_upstream_noise_margin(mut self, value: i32) -> Self {
        self.upstream_noise_margin = value;
        self
    }

    pub fn with_downstream_attenuation(mut self, value: i32) -> Self {
        self.downstream_attenuation = value;
        self
    }

    pub fn with_upstream_attenuation(mut self, value: i32) -> Self {
        self.upstream_attenuation = value;
        self
    }

    pub fn with_downstream_power(mut self, value: i32) -> Self {
        self.downstream_power = value;
        self
    }

    pub fn with_upstream_power(mut self, value: i32) -> Self {
        self.upstream_power = value;
        self
    }

    pub fn with_stats(mut self, value: Option<Stats>) -> Self {
        self.stats = value;
        self
    }

    pub fn with_test_params(mut self, value: Option<TestParams>) -> Self {
        self.test_params = value;
        self
    }

    pub fn with_data_gathering(mut self, value: Option<DataGathering>) -> Self {
        self.data_gathering = value;
        self
    }
}

impl Default for Line {
    fn default() -> Self {
        Self {
            enable: false,
            status: "Down".to_string(),
            alias: Default::default(),
            name: Default::default(),
            lower_layers: Default::default(),
            upstream: Default::default(),
            firmware_version: Default::default(),
            link_status: Default::default(),
            standards_supported: Default::default(),
            standard_used: Default::default(),
            allowed_profiles: Default::default(),
            current_profile: Default::default(),
            power_management_state: Default::default(),
            success_failure_cause: Default::default(),
            upbokler: Default::default(),
            limitmask: Default::default(),
            snrm_roc_us: Default::default(),
            trellis_ds: Default::default(),
            downstream_max_bit_rate: Default::default(),
            upstream_max_bit_rate: Default::default(),
            downstream_noise_margin: Default::default(),
            upstream_noise_margin: Default::default(),
            downstream_attenuation: Default::default(),
            upstream_attenuation: Default::default(),
            downstream_power: Default::default(),
            upstream_power: Default::default(),
            stats: Default::default(),
            test_params: Default::default(),
            data_gathering: Default::default(),
        }
    }
}

impl CwmpObject for Line {
    const PATH: &'static str = "Device.DSL.Line.{i}.";

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
                name: "Status",
                field: "status",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "Alias",
                field: "alias",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(64) }),
                range: None,
            },
            ParamInfo {
                name: "Name",
                field: "name",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(64) }),
                range: None,
            },
            ParamInfo {
                name: "LowerLayers",
                field: "lower_layers",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(1024) }),
                range: None,
            },
            ParamInfo {
                name: "Upstream",
                field: "upstream",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "FirmwareVersion",
                field: "firmware_version",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(64) }),
                range: None,
            },
            ParamInfo {
                name: "LinkStatus",
                field: "link_status",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "StandardsSupported",
                field: "standards_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "StandardUsed",
                field: "standard_used",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "AllowedProfiles",
                field: "allowed_profiles",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "CurrentProfile",
                field: "current_profile",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PowerManagementState",
                field: "power_management_state",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "SuccessFailureCause",
                field: "success_failure_cause",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(0), max: Some(6) }),
            },
            ParamInfo {
                name: "UPBOKLER",
                field: "upbokler",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: Some("0.1 dB"),
                size: None,
                range: Some(Bound { min: Some(0), max: Some(1280) }),
            },
            ParamInfo {
                name: "LIMITMASK",
                field: "limitmask",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(2047), max: Some(2047) }),
            },
            ParamInfo {
                name: "SNRMROCus",
                field: "snrm_roc_us",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: Some("0.1 dB"),
                size: None,
                range: Some(Bound { min: Some(-640), max: Some(0) }),
            },
            ParamInfo {
                name: "TRELLISds",
                field: "trellis_ds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "DownstreamMaxBitRate",
                field: "downstream_max_bit_rate",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: Some("Kbps"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "UpstreamMaxBitRate",
                field: "upstream_max_bit_rate",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: Some("Kbps"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "DownstreamNoiseMargin",
                field: "downstream_noise_margin",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: Some("0.1 dB"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "UpstreamNoiseMargin",
                field: "upstream_noise_margin",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: Some("0.1 dB"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "DownstreamAttenuation",
                field: "downstream_attenuation",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: Some("0.1 dB"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "UpstreamAttenuation",
                field: "upstream_attenuation",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: Some("0.1 dB"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "DownstreamPower",
                field: "downstream_power",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: Some("0.1 dBmV"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "UpstreamPower",
                field: "upstream_power",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: Some("0.1 dBmV"),
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.DSL.Line.{i}.Stats.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Stats {
    #[serde(rename = "BytesSent")]
    pub bytes_sent: u64,
    #[serde(rename = "BytesReceived")]
    pub bytes_received: u64,
    #[serde(rename = "PacketsSent")]
    pub packets_sent: u64,
    #[serde(rename = "PacketsReceived")]
    pub packets_received: u64,
    #[serde(rename = "ErrorsSent")]
    pub errors_sent: u32,
    #[serde(rename = "ErrorsReceived")]
    pub errors_received: u32,
    #[serde(rename = "TotalStart")]
    pub total_start: u32,
    #[serde(rename = "ShowtimeStart")]
    pub showtime_start: u32,
    #[serde(rename = "Total", skip_serializing_if = "Option::is_none")]
    pub total: Option<Total>,
    #[serde(rename = "Showtime", skip_serializing_if = "Option::is_none")]
    pub showtime: Option<Showtime>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes_sent(mut self, value: u64) -> Self {
        self.bytes_sent = value;
        self
    }

    pub fn with_bytes_received(mut self, value: u64) -> Self {
        self.bytes_received = value;
        self
    }

    pub fn with_packets_sent(mut self, value: u64) -> Self {
        self.packets_sent = value;
        self
    }

    pub fn with_packets_received(mut self, value: u64) -> Self {
        self.packets_received = value;
        self
    }

    pub fn with_errors_sent(mut self, value: u32) -> Self {
        self.errors_sent = value;
        self
    }

    pub fn with_errors_received(mut self, value: u32) -> Self {
        self.errors_received = value;
        self
    }

    pub fn with_total_start(mut self, value: u32) -> Self {
        self.total_start = value;
        self
    }

    pub fn with_showtime_start(mut self, value: u32) -> Self {
        self.showtime_start = value;
        self
    }

    pub fn with_total(mut self, value: Option<Total>) -> Self {
        self.total = value;
        self
    }

    pub fn with_showtime(mut self, value: Option<Showtime>) -> Self {
        self.showtime = value;
        self
    }
}

impl CwmpObject for Stats {
    const PATH: &'static str = "Device.DSL.Line.{i}.Stats.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "BytesSent",
                field: "bytes_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BytesReceived",
                field: "bytes_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PacketsSent",
                field: "packets_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PacketsReceived",
                field: "packets_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "ErrorsSent",
                field: "errors_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "ErrorsReceived",
                field: "errors_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TotalStart",
                field: "total_start",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("seconds"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "ShowtimeStart",
                field: "showtime_start",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("seconds"),
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.DSL.Line.{i}.Stats.Total.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Total {
    #[serde(rename = "ErroredSecs")]
    pub errored_secs: u32,
    #[serde(rename = "SeverelyErroredSecs")]
    pub severely_errored_secs: u32,
}

impl Total {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_errored_secs(mut self, value: u32) -> Self {
        self.errored_secs = value;
        self
    }

    pub fn with_severely_errored_secs(mut self, value: u32) -> Self {
        self.severely_errored_secs = value;
        self
    }
}

impl CwmpObject for Total {
    const PATH: &'static str = "Device.DSL.Line.{i}.Stats.Total.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "ErroredSecs",
                field: "errored_secs",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("seconds"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "SeverelyErroredSecs",
                field: "severely_errored_secs",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("seconds"),
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.DSL.Line.{i}.Stats.Showtime.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Showtime {
    #[serde(rename = "ErroredSecs")]
    pub errored_secs: u32,
    #[serde(rename = "SeverelyErroredSecs")]
    pub severely_errored_secs: u32,
}

impl Showtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_errored_secs(mut self, value: u32) -> Self {
        self.errored_secs = value;
        self
    }

    pub fn with_severely_errored_secs(mut self, value: u32) -> Self {
        self.severely_errored_secs = value;
        self
    }
}

impl CwmpObject for Showtime {
    const PATH: &'static str = "Device.DSL.Line.{i}.Stats.Showtime.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "ErroredSecs",
                field: "errored_secs",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("seconds"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "SeverelyErroredSecs",
                field: "severely_errored_secs",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("seconds"),
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.DSL.Line.{i}.TestParams.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TestParams {
    #[serde(rename = "HLOGGds")]
    pub hlog_gds: u32,
    #[serde(rename = "HLOGpsds", with = "crate::model::wire::comma_list")]
    pub hlog_psds: Vec<String>,
    #[serde(rename = "HLOGMTds")]
    pub hlog_mtds: u32,
    #[serde(rename = "QLNGds")]
    pub qln_gds: u32,
    #[serde(rename = "QLNpsds", with = "crate::model::wire::comma_list")]
    pub qln_psds: Vec<String>,
    #[serde(rename = "QLNMTds")]
    pub qln_mtds: u32,
    #[serde(rename = "SNRGds")]
    pub snr_gds: u32,
    #[serde(rename = "SNRpsds", with = "crate::model::wire::comma_list")]
    pub snr_psds: Vec<String>,
    #[serde(rename = "SNRMTds")]
    pub snr_mtds: u32,
    #[serde(rename = "LATNds", with = "crate::model::wire::comma_list")]
    pub latn_ds: Vec<String>,
    #[serde(rename = "SATNds", with = "crate::model::wire::comma_list")]
    pub satn_ds: Vec<String>,
}

impl TestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hlog_gds(mut self, value: u32) -> Self {
        self.hlog_gds = value;
        self
    }

    pub fn with_hlog_psds(mut self, item: String) -> Self {
        self.hlog_psds.push(item);
        self
    }

    pub fn with_hlog_mtds(mut self, value: u32) -> Self {
        self.hlog_mtds = value;
        self
    }

    pub fn with_qln_gds(mut self, value: u32) -> Self {
        self.qln_gds = value;
        self
    }

    pub fn with_qln_psds(mut self, item: String) -> Self {
        self.qln_psds.push(item);
        self
    }

    pub fn with_qln_mtds(mut self, value: u32) -> Self {
        self.qln_mtds = value;
        self
    }

    pub fn with_snr_gds(mut self, value: u32) -> Self {
        self.snr_gds = value;
        self
    }

    pub fn with_snr_psds(mut self, item: String) -> Self {
        self.snr_psds.push(item);
        self
    }

    pub fn with_snr_mtds(mut self, value: u32) -> Self {
        self.snr_mtds = value;
        self
    }

    pub fn with_latn_ds(mut self, item: String) -> Self {
        self.latn_ds.push(item);
        self
    }

    pub fn with_satn_ds(mut self, item: String) -> Self {
        self.satn_ds.push(item);
        self
    }
}

impl CwmpObject for TestParams {
    const PATH: &'static str = "Device.DSL.Line.{i}.TestParams.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "HLOGGds",
                field: "hlog_gds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "HLOGpsds",
                field: "hlog_psds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(2560) }),
                range: None,
            },
            ParamInfo {
                name: "HLOGMTds",
                field: "hlog_mtds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "QLNGds",
                field: "qln_gds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "QLNpsds",
                field: "qln_psds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(2560) }),
                range: None,
            },
            ParamInfo {
                name: "QLNMTds",
                field: "qln_mtds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "SNRGds",
                field: "snr_gds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "SNRpsds",
                field: "snr_psds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(2560) }),
                range: None,
            },
            ParamInfo {
                name: "SNRMTds",
                field: "snr_mtds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "LATNds",
                field: "latn_ds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "SATNds",
                field: "satn_ds",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
        ]
    }
}

/// `Device.DSL.Line.{i}.DataGathering.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataGathering {
    #[serde(rename = "LoggingDepthR")]
    pub logging_depth_r: u32,
    #[serde(rename = "ActLoggingDepthR")]
    pub act_logging_depth_r: u32,
}

impl DataGathering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logging_depth_r(mut self, value: u32) -> Self {
        self.logging_depth_r = value;
        self
    }

    pub fn with_act_logging_depth_r(mut self, value: u32) -> Self {
        self.act_logging_depth_r = value;
        self
    }
}

impl CwmpObject for DataGathering {
    const PATH: &'static str = "Device.DSL.Line.{i}.DataGathering.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "LoggingDepthR",
                field: "logging_depth_r",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "ActLoggingDepthR",
                field: "act_logging_depth_r",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.DSL.Channel.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    #[serde(rename = "Enable")]
    pub enable: bool,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Alias")]
    pub alias: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "LowerLayers", with = "crate::model::wire::comma_list")]
    pub lower_layers: Vec<String>,
    #[serde(rename = "LinkEncapsulationSupported", with = "crate::model::wire::comma_list")]
    pub link_encapsulation_supported: Vec<String>,
    #[serde(rename = "LinkEncapsulationUsed")]
    pub link_encapsulation_used: String,
    #[serde(rename = "LPATH")]
    pub lpath: u32,
    #[serde(rename = "INTLVDEPTH")]
    pub intlvdepth: u32,
    #[serde(rename = "INTLVBLOCK")]
    pub intlvblock: i32,
    #[serde(rename = "ActualInterleavingDelay")]
    pub actual_interleaving_delay: u32,
    #[serde(rename = "ACTINP")]
    pub actinp: i32,
    #[serde(rename = "INPREPORT")]
    pub inpreport: bool,
    #[serde(rename = "NFEC")]
    pub nfec: i32,
    #[serde(rename = "RFEC")]
    pub rfec: i32,
    #[serde(rename = "LSYMB")]
    pub lsymb: i32,
    #[serde(rename = "UpstreamCurrRate")]
    pub upstream_curr_rate: u32,
    #[serde(rename = "DownstreamCurrRate")]
    pub downstream_curr_rate: u32,
    #[serde(rename = "Stats", skip_serializing_if = "Option::is_none")]
    pub stats: Option<ChannelStats>,
}

impl Channel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enable(mut self, value: bool) -> Self {
        self.enable = value;
        self
    }

    pub fn with_status(mut self, value: String) -> Self {
        self.status = value;
        self
    }

    pub fn with_alias(mut self, value: String) -> Self {
        self.alias = value;
        self
    }

    pub fn with_name(mut self, value: String) -> Self {
        self.name = value;
        self
    }

    pub fn with_lower_layers(mut self, item: String) -> Self {
        self.lower_layers.push(item);
        self
    }

    pub fn with_link_encapsulation_supported(mut self, item: String) -> Self {
        self.link_encapsulation_supported.push(item);
        self
    }

    pub fn with_link_encapsulation_used(mut self, value: String) -> Self {
        self.link_encapsulation_used = value;
        self
    }

    pub fn with_lpath(mut self, value: u32) -> Self {
        self.lpath = value;
        self
    }

    pub fn with_intlvdepth(mut self, value: u32) -> Self {
        self.intlvdepth = value;
        self
    }

    pub fn with_intlvblock(mut self, value: i32) -> Self {
        self.intlvblock = value;
        self
    }

    pub fn with_actual_interleaving_delay(mut self, value: u32) -> Self {
        self.actual_interleaving_delay = value;
        self
    }

    pub fn with_actinp(mut self, value: i32) -> Self {
        self.actinp = value;
        self
    }

    pub fn with_inpreport(mut self, value: bool) -> Self {
        self.inpreport = value;
        self
    }

    pub fn with_nfec(mut self, value: i32) -> Self {
        self.nfec = value;
        self
    }

    pub fn with_rfec(mut self, value: i32) -> Self {
        self.rfec = value;
        self
    }

    pub fn with_lsymb(mut self, value: i32) -> Self {
        self.lsymb = value;
        self
    }

    pub fn with_upstream_curr_rate(mut self, value: u32) -> Self {
        self.upstream_curr_rate = value;
        self
    }

    pub fn with_downstream_curr_rate(mut self, value: u32) -> Self {
        self.downstream_curr_rate = value;
        self
    }

    pub fn with_stats(mut self, value: Option<ChannelStats>) -> Self {
        self.stats = value;
        self
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self {
            enable: false,
            status: "Down".to_string(),
            alias: Default::default(),
            name: Default::default(),
            lower_layers: Default::default(),
            link_encapsulation_supported: Default::default(),
            link_encapsulation_used: Default::default(),
            lpath: Default::default(),
            intlvdepth: Default::default(),
            intlvblock: Default::default(),
            actual_interleaving_delay: Default::default(),
            actinp: Default::default(),
            inpreport: Default::default(),
            nfec: Default::default(),
            rfec: Default::default(),
            lsymb: Default::default(),
            upstream_curr_rate: Default::default(),
            downstream_curr_rate: Default::default(),
            stats: Default::default(),
        }
    }
}

impl CwmpObject for Channel {
    const PATH: &'static str = "Device.DSL.Channel.{i}.";

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
                name: "Status",
                field: "status",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "Alias",
                field: "alias",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(64) }),
                range: None,
            },
            ParamInfo {
                name: "Name",
                field: "name",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(64) }),
                range: None,
            },
            ParamInfo {
                name: "LowerLayers",
                field: "lower_layers",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(1024) }),
                range: None,
            },
            ParamInfo {
                name: "LinkEncapsulationSupported",
                field: "link_encapsulation_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "LinkEncapsulationUsed",
                field: "link_encapsulation_used",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "LPATH",
                field: "lpath",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "INTLVDEPTH",
                field: "intlvdepth",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "INTLVBLOCK",
                field: "intlvblock",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "ActualInterleavingDelay",
                field: "actual_interleaving_delay",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "ACTINP",
                field: "actinp",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "INPREPORT",
                field: "inpreport",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "NFEC",
                field: "nfec",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "RFEC",
                field: "rfec",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "LSYMB",
                field: "lsymb",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "UpstreamCurrRate",
                field: "upstream_curr_rate",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("Kbps"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "DownstreamCurrRate",
                field: "downstream_curr_rate",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: Some("Kbps"),
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.DSL.Channel.{i}.Stats.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChannelStats {
    #[serde(rename = "BytesSent")]
    pub bytes_sent: u64,
    #[serde(rename = "BytesReceived")]
    pub bytes_received: u64,
    #[serde(rename = "PacketsSent")]
    pub packets_sent: u64,
    #[serde(rename = "PacketsReceived")]
    pub packets_received: u64,
    #[serde(rename = "FECErrors")]
    pub fec_errors: u32,
    #[serde(rename = "CRCErrors")]
    pub crc_errors: u32,
}

impl ChannelStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes_sent(mut self, value: u64) -> Self {
        self.bytes_sent = value;
        self
    }

    pub fn with_bytes_received(mut self, value: u64) -> Self {
        self.bytes_received = value;
        self
    }

    pub fn with_packets_sent(mut self, value: u64) -> Self {
        self.packets_sent = value;
        self
    }

    pub fn with_packets_received(mut self, value: u64) -> Self {
        self.packets_received = value;
        self
    }

    pub fn with_fec_errors(mut self, value: u32) -> Self {
        self.fec_errors = value;
        self
    }

    pub fn with_crc_errors(mut self, value: u32) -> Self {
        self.crc_errors = value;
        self
    }
}

impl CwmpObject for ChannelStats {
    const PATH: &'static str = "Device.DSL.Channel.{i}.Stats.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "BytesSent",
                field: "bytes_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BytesReceived",
                field: "bytes_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PacketsSent",
                field: "packets_sent",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PacketsReceived",
                field: "packets_received",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "FECErrors",
                field: "fec_errors",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "CRCErrors",
                field: "crc_errors",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.DSL.BondingGroup.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BondingGroup {
    #[serde(rename = "Enable")]
    pub enable: bool,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Alias")]
    pub alias: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "LowerLayers", with = "crate::model::wire::comma_list")]
    pub lower_layers: Vec<String>,
    #[serde(rename = "GroupID")]
    pub group_id: u32,
    #[serde(rename = "BondScheme")]
    pub bond_scheme: String,
    #[serde(rename = "BondSchemesSupported", with = "crate::model::wire::comma_list")]
    pub bond_schemes_supported: Vec<String>,
    #[serde(rename = "GroupCapacity")]
    pub group_capacity: u32,
    #[serde(rename = "TargetUpRate")]
    pub target_up_rate: u32,
    #[serde(rename = "TargetDownRate")]
    pub target_down_rate: u32,
    #[serde(rename = "BondedChannelNumberOfEntries")]
    pub bonded_channel_number_of_entries: u32,
    #[serde(rename = "BondedChannel")]
    pub bonded_channel: Vec<BondedChannel>,
}

impl BondingGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enable(mut self, value: bool) -> Self {
        self.enable = value;
        self
    }

    pub fn with_status(mut self, value: String) -> Self {
        self.status = value;
        self
    }

    pub fn with_alias(mut self, value: String) -> Self {
        self.alias = value;
        self
    }

    pub fn with_name(mut self, value: String) -> Self {
        self.name = value;
        self
    }

    pub fn with_lower_layers(mut self, item: String) -> Self {
        self.lower_layers.push(item);
        self
    }

    pub fn with_group_id(mut self, value: u32) -> Self {
        self.group_id = value;
        self
    }

    pub fn with_bond_scheme(mut self, value: String) -> Self {
        self.bond_scheme = value;
        self
    }

    pub fn with_bond_schemes_supported(mut self, item: String) -> Self {
        self.bond_schemes_supported.push(item);
        self
    }

    pub fn with_group_capacity(mut self, value: u32) -> Self {
        self.group_capacity = value;
        self
    }

    pub fn with_target_up_rate(mut self, value: u32) -> Self {
        self.target_up_rate = value;
        self
    }

    pub fn with_target_down_rate(mut self, value: u32) -> Self {
        self.target_down_rate = value;
        self
    }

    pub fn with_bonded_channel_number_of_entries(mut self, value: u32) -> Self {
        self.bonded_channel_number_of_entries = value;
        self
    }

    pub fn with_bonded_channel(mut self, item: BondedChannel) -> Self {
        self.bonded_channel.push(item);
        self
    }
}

impl Default for BondingGroup {
    fn default() -> Self {
        Self {
            enable: false,
            status: "Down".to_string(),
            alias: Default::default(),
            name: Default::default(),
            lower_layers: Default::default(),
            group_id: Default::default(),
            bond_scheme: Default::default(),
            bond_schemes_supported: Default::default(),
            group_capacity: Default::default(),
            target_up_rate: Default::default(),
            target_down_rate: Default::default(),
            bonded_channel_number_of_entries: Default::default(),
            bonded_channel: Default::default(),
        }
    }
}

impl CwmpObject for BondingGroup {
    const PATH: &'static str = "Device.DSL.BondingGroup.{i}.";

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
                name: "Status",
                field: "status",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "Alias",
                field: "alias",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(64) }),
                range: None,
            },
            ParamInfo {
                name: "Name",
                field: "name",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(64) }),
                range: None,
            },
            ParamInfo {
                name: "LowerLayers",
                field: "lower_layers",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(1024) }),
                range: None,
            },
            ParamInfo {
                name: "GroupID",
                field: "group_id",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BondScheme",
                field: "bond_scheme",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BondSchemesSupported",
                field: "bond_schemes_supported",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "GroupCapacity",
                field: "group_capacity",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(1), max: Some(32) }),
            },
            ParamInfo {
                name: "TargetUpRate",
                field: "target_up_rate",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: Some("Kbps"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "TargetDownRate",
                field: "target_down_rate",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: Some("Kbps"),
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BondedChannelNumberOfEntries",
                field: "bonded_channel_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `Device.DSL.BondingGroup.{i}.BondedChannel.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BondedChannel {
    #[serde(rename = "Channel")]
    pub channel: String,
}

impl BondedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, value: String) -> Self {
        self.channel = value;
        self
    }
}

impl CwmpObject for BondedChannel {
    const PATH: &'static str = "Device.DSL.BondingGroup.{i}.BondedChannel.{i}.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "Channel",
                field: "channel",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
        ]
    }
}
