// Auto-generated entities for tr098_layer2_bridging.yaml — regenerate with `cwmp-gen`, do not edit by hand.
use crate::model::{Access, Bound, CwmpObject, Notify, ParamInfo};
use serde::{Deserialize, Serialize};

/// `InternetGatewayDevice.Layer2Bridging.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Layer2Bridging {
    #[serde(rename = "MaxBridgeEntries")]
    pub max_bridge_entries: u32,
    #[serde(rename = "MaxFilterEntries")]
    pub max_filter_entries: u32,
    #[serde(rename = "MaxMarkingEntries")]
    pub max_marking_entries: u32,
    #[serde(rename = "BridgeNumberOfEntries")]
    pub bridge_number_of_entries: u32,
    #[serde(rename = "FilterNumberOfEntries")]
    pub filter_number_of_entries: u32,
    #[serde(rename = "MarkingNumberOfEntries")]
    pub marking_number_of_entries: u32,
    #[serde(rename = "AvailableInterfaceNumberOfEntries")]
    pub available_interface_number_of_entries: u32,
    #[serde(rename = "Bridge")]
    pub bridge: Vec<Bridge>,
    #[serde(rename = "Filter")]
    pub filter: Vec<Filter>,
    #[serde(rename = "Marking")]
    pub marking: Vec<Marking>,
    #[serde(rename = "AvailableInterface")]
    pub available_interface: Vec<AvailableInterface>,
}

impl Layer2Bridging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_bridge_entries(mut self, value: u32) -> Self {
        self.max_bridge_entries = value;
        self
    }

    pub fn with_max_filter_entries(mut self, value: u32) -> Self {
        self.max_filter_entries = value;
        self
    }

    pub fn with_max_marking_entries(mut self, value: u32) -> Self {
        self.max_marking_entries = value;
        self
    }

    pub fn with_bridge_number_of_entries(mut self, value: u32) -> Self {
        self.bridge_number_of_entries = value;
        self
    }

    pub fn with_filter_number_of_entries(mut self, value: u32) -> Self {
        self.filter_number_of_entries = value;
        self
    }

    pub fn with_marking_number_of_entries(mut self, value: u32) -> Self {
        self.marking_number_of_entries = value;
        self
    }

    pub fn with_available_interface_number_of_entries(mut self, value: u32) -> Self {
        self.available_interface_number_of_entries = value;
        self
    }

    pub fn with_bridge(mut self, item: Bridge) -> Self {
        self.bridge.push(item);
        self
    }

    pub fn with_filter(mut self, item: Filter) -> Self {
        self.filter.push(item);
        self
    }

    pub fn with_marking(mut self, item: Marking) -> Self {
        self.marking.push(item);
        self
    }

    pub fn with_available_interface(mut self, item: AvailableInterface) -> Self {
        self.available_interface.push(item);
        self
    }
}

impl CwmpObject for Layer2Bridging {
    const PATH: &'static str = "InternetGatewayDevice.Layer2Bridging.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "MaxBridgeEntries",
                field: "max_bridge_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "MaxFilterEntries",
                field: "max_filter_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "MaxMarkingEntries",
                field: "max_marking_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BridgeNumberOfEntries",
                field: "bridge_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "FilterNumberOfEntries",
                field: "filter_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "MarkingNumberOfEntries",
                field: "marking_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "AvailableInterfaceNumberOfEntries",
                field: "available_interface_number_of_entries",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `InternetGatewayDevice.Layer2Bridging.Bridge.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bridge {
    #[serde(rename = "BridgeKey")]
    pub bridge_key: u32,
    #[serde(rename = "BridgeEnable")]
    pub bridge_enable: bool,
    #[serde(rename = "BridgeStatus")]
    pub bridge_status: String,
    #[serde(rename = "BridgeName")]
    pub bridge_name: String,
    #[serde(rename = "VLANID")]
    pub vlanid: u32,
    #[serde(rename = "Port")]
    pub port: Vec<Port>,
    #[serde(rename = "VLAN")]
    pub vlan: Vec<Vlan>,
}

impl Bridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bridge_key(mut self, value: u32) -> Self {
        self.bridge_key = value;
        self
    }

    pub fn with_bridge_enable(mut self, value: bool) -> Self {
        self.bridge_enable = value;
        self
    }

    pub fn with_bridge_status(mut self, value: String) -> Self {
        self.bridge_status = value;
        self
    }

    pub fn with_bridge_name(mut self, value: String) -> Self {
        self.bridge_name = value;
        self
    }

    pub fn with_vlanid(mut self, value: u32) -> Self {
        self.vlanid = value;
        self
    }

    pub fn with_port(mut self, item: Port) -> Self {
        self.port.push(item);
        self
    }

    pub fn with_vlan(mut self, item: Vlan) -> Self {
        self.vlan.push(item);
        self
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self {
            bridge_key: Default::default(),
            bridge_enable: false,
            bridge_status: "Disabled".to_string(),
            bridge_name: Default::default(),
            vlanid: 0,
            port: Default::default(),
            vlan: Default::default(),
        }
    }
}

impl CwmpObject for Bridge {
    const PATH: &'static str = "InternetGatewayDevice.Layer2Bridging.Bridge.{i}.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "BridgeKey",
                field: "bridge_key",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BridgeEnable",
                field: "bridge_enable",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BridgeStatus",
                field: "bridge_status",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "BridgeName",
                field: "bridge_name",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(64) }),
                range: None,
            },
            ParamInfo {
                name: "VLANID",
                field: "vlanid",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(0), max: Some(4094) }),
            },
        ]
    }
}

/// `InternetGatewayDevice.Layer2Bridging.Bridge.{i}.Port.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Port {
    #[serde(rename = "PortEnable")]
    pub port_enable: bool,
    #[serde(rename = "PortState")]
    pub port_state: String,
    #[serde(rename = "PortInterface")]
    pub port_interface: String,
    #[serde(rename = "PVID")]
    pub pvid: u32,
    #[serde(rename = "AcceptableFrameTypes")]
    pub acceptable_frame_types: String,
    #[serde(rename = "IngressFiltering")]
    pub ingress_filtering: bool,
    #[serde(rename = "PriorityRegeneration", with = "crate::model::wire::comma_list")]
    pub priority_regeneration: Vec<u32>,
}

impl Port {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port_enable(mut self, value: bool) -> Self {
        self.port_enable = value;
        self
    }

    pub fn with_port_state(mut self, value: String) -> Self {
        self.port_state = value;
        self
    }

    pub fn with_port_interface(mut self, value: String) -> Self {
        self.port_interface = value;
        self
    }

    pub fn with_pvid(mut self, value: u32) -> Self {
        self.pvid = value;
        self
    }

    pub fn with_acceptable_frame_types(mut self, value: String) -> Self {
        self.acceptable_frame_types = value;
        self
    }

    pub fn with_ingress_filtering(mut self, value: bool) -> Self {
        self.ingress_filtering = value;
        self
    }

    pub fn with_priority_regeneration(mut self, item: u32) -> Self {
        self.priority_regeneration.push(item);
        self
    }
}

impl Default for Port {
    fn default() -> Self {
        Self {
            port_enable: false,
            port_state: "Disabled".to_string(),
            port_interface: Default::default(),
            pvid: 1,
            acceptable_frame_types: "AdmitAll".to_string(),
            ingress_filtering: false,
            priority_regeneration: Default::default(),
        }
    }
}

impl CwmpObject for Port {
    const PATH: &'static str = "InternetGatewayDevice.Layer2Bridging.Bridge.{i}.Port.{i}.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "PortEnable",
                field: "port_enable",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PortState",
                field: "port_state",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PortInterface",
                field: "port_interface",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(16) }),
                range: None,
            },
            ParamInfo {
                name: "PVID",
                field: "pvid",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(1), max: Some(4094) }),
            },
            ParamInfo {
                name: "AcceptableFrameTypes",
                field: "acceptable_frame_types",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "IngressFiltering",
                field: "ingress_filtering",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "PriorityRegeneration",
                field: "priority_regeneration",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `InternetGatewayDevice.Layer2Bridging.Bridge.{i}.VLAN.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vlan {
    #[serde(rename = "VLANEnable")]
    pub vlan_enable: bool,
    #[serde(rename = "VLANName")]
    pub vlan_name: String,
    #[serde(rename = "VLANID")]
    pub vlanid: u32,
}

impl Vlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vlan_enable(mut self, value: bool) -> Self {
        self.vlan_enable = value;
        self
    }

    pub fn with_vlan_name(mut self, value: String) -> Self {
        self.vlan_name = value;
        self
    }

    pub fn with_vlanid(mut self, value: u32) -> Self {
        self.vlanid = value;
        self
    }
}

impl Default for Vlan {
    fn default() -> Self {
        Self {
            vlan_enable: false,
            vlan_name: Default::default(),
            vlanid: Default::default(),
        }
    }
}

impl CwmpObject for Vlan {
    const PATH: &'static str = "InternetGatewayDevice.Layer2Bridging.Bridge.{i}.VLAN.{i}.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "VLANEnable",
                field: "vlan_enable",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "VLANName",
                field: "vlan_name",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(64) }),
                range: None,
            },
            ParamInfo {
                name: "VLANID",
                field: "vlanid",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(1), max: Some(4094) }),
            },
        ]
    }
}

/// `InternetGatewayDevice.Layer2Bridging.Filter.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    #[serde(rename = "FilterKey")]
    pub filter_key: u32,
    #[serde(rename = "FilterEnable")]
    pub filter_enable: bool,
    #[serde(rename = "FilterStatus")]
    pub filter_status: String,
    #[serde(rename = "FilterBridgeReference")]
    pub filter_bridge_reference: i32,
    #[serde(rename = "ExclusivityOrder")]
    pub exclusivity_order: u32,
    #[serde(rename = "FilterInterface")]
    pub filter_interface: String,
    #[serde(rename = "VLANIDFilter")]
    pub vlanid_filter: i32,
    #[serde(rename = "AdmitOnlyVLANTagged")]
    pub admit_only_vlan_tagged: bool,
    #[serde(rename = "EthertypeFilterList", with = "crate::model::wire::comma_list")]
    pub ethertype_filter_list: Vec<u32>,
    #[serde(rename = "EthertypeFilterExclude")]
    pub ethertype_filter_exclude: bool,
    #[serde(rename = "DestMACAddressFilterList", with = "crate::model::wire::comma_list")]
    pub dest_mac_address_filter_list: Vec<String>,
    #[serde(rename = "DestMACAddressFilterExclude")]
    pub dest_mac_address_filter_exclude: bool,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter_key(mut self, value: u32) -> Self {
        self.filter_key = value;
        self
    }

    pub fn with_filter_enable(mut self, value: bool) -> Self {
        self.filter_enable = value;
        self
    }

    pub fn with_filter_status(mut self, value: String) -> Self {
        self.filter_status = value;
        self
    }

    pub fn with_filter_bridge_reference(mut self, value: i32) -> Self {
        self.filter_bridge_reference = value;
        self
    }

    pub fn with_exclusivity_order(mut self, value: u32) -> Self {
        self.exclusivity_order = value;
        self
    }

    pub fn with_filter_interface(mut self, value: String) -> Self {
        self.filter_interface = value;
        self
    }

    pub fn with_vlanid_filter(mut self, value: i32) -> Self {
        self.vlanid_filter = value;
        self
    }

    pub fn with_admit_only_vlan_tagged(mut self, value: bool) -> Self {
        self.admit_only_vlan_tagged = value;
        self
    }

    pub fn with_ethertype_filter_list(mut self, item: u32) -> Self {
        self.ethertype_filter_list.push(item);
        self
    }

    pub fn with_ethertype_filter_exclude(mut self, value: bool) -> Self {
        self.ethertype_filter_exclude = value;
        self
    }

    pub fn with_dest_mac_address_filter_list(mut self, item: String) -> Self {
        self.dest_mac_address_filter_list.push(item);
        self
    }

    pub fn with_dest_mac_address_filter_exclude(mut self, value: bool) -> Self {
        self.dest_mac_address_filter_exclude = value;
        self
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            filter_key: Default::default(),
            filter_enable: false,
            filter_status: "Disabled".to_string(),
            filter_bridge_reference: -1,
            exclusivity_order: 0,
            filter_interface: Default::default(),
            vlanid_filter: -1,
            admit_only_vlan_tagged: false,
            ethertype_filter_list: Default::default(),
            ethertype_filter_exclude: true,
            dest_mac_address_filter_list: Default::default(),
            dest_mac_address_filter_exclude: true,
        }
    }
}

impl CwmpObject for Filter {
    const PATH: &'static str = "InternetGatewayDevice.Layer2Bridging.Filter.{i}.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "FilterKey",
                field: "filter_key",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "FilterEnable",
                field: "filter_enable",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "FilterStatus",
                field: "filter_status",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "FilterBridgeReference",
                field: "filter_bridge_reference",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(-1), max: None }),
            },
            ParamInfo {
                name: "ExclusivityOrder",
                field: "exclusivity_order",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "FilterInterface",
                field: "filter_interface",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "VLANIDFilter",
                field: "vlanid_filter",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(-1), max: Some(4094) }),
            },
            ParamInfo {
                name: "AdmitOnlyVLANTagged",
                field: "admit_only_vlan_tagged",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EthertypeFilterList",
                field: "ethertype_filter_list",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EthertypeFilterExclude",
                field: "ethertype_filter_exclude",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "DestMACAddressFilterList",
                field: "dest_mac_address_filter_list",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(512) }),
                range: None,
            },
            ParamInfo {
                name: "DestMACAddressFilterExclude",
                field: "dest_mac_address_filter_exclude",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `InternetGatewayDevice.Layer2Bridging.Marking.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Marking {
    #[serde(rename = "MarkingKey")]
    pub marking_key: u32,
    #[serde(rename = "MarkingEnable")]
    pub marking_enable: bool,
    #[serde(rename = "MarkingStatus")]
    pub marking_status: String,
    #[serde(rename = "MarkingBridgeReference")]
    pub marking_bridge_reference: i32,
    #[serde(rename = "MarkingInterface")]
    pub marking_interface: String,
    #[serde(rename = "VLANIDUntag")]
    pub vlanid_untag: bool,
    #[serde(rename = "VLANIDMark")]
    pub vlanid_mark: i32,
    #[serde(rename = "VLANIDMarkOverride")]
    pub vlanid_mark_override: bool,
    #[serde(rename = "EthernetPriorityMark")]
    pub ethernet_priority_mark: i32,
    #[serde(rename = "EthernetPriorityOverride")]
    pub ethernet_priority_override: bool,
}

impl Marking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marking_key(mut self, value: u32) -> Self {
        self.marking_key = value;
        self
    }

    pub fn with_marking_enable(mut self, value: bool) -> Self {
        self.marking_enable = value;
        self
    }

    pub fn with_marking_status(mut self, value: String) -> Self {
        self.marking_status = value;
        self
    }

    pub fn with_marking_bridge_reference(mut self, value: i32) -> Self {
        self.marking_bridge_reference = value;
        self
    }

    pub fn with_marking_interface(mut self, value: String) -> Self {
        self.marking_interface = value;
        self
    }

    pub fn with_vlanid_untag(mut self, value: bool) -> Self {
        self.vlanid_untag = value;
        self
    }

    pub fn with_vlanid_mark(mut self, value: i32) -> Self {
        self.vlanid_mark = value;
        self
    }

    pub fn with_vlanid_mark_override(mut self, value: bool) -> Self {
        self.vlanid_mark_override = value;
        self
    }

    pub fn with_ethernet_priority_mark(mut self, value: i32) -> Self {
        self.ethernet_priority_mark = value;
        self
    }

    pub fn with_ethernet_priority_override(mut self, value: bool) -> Self {
        self.ethernet_priority_override = value;
        self
    }
}

impl Default for Marking {
    fn default() -> Self {
        Self {
            marking_key: Default::default(),
            marking_enable: false,
            marking_status: "Disabled".to_string(),
            marking_bridge_reference: -1,
            marking_interface: Default::default(),
            vlanid_untag: false,
            vlanid_mark: -1,
            vlanid_mark_override: false,
            ethernet_priority_mark: -1,
            ethernet_priority_override: false,
        }
    }
}

impl CwmpObject for Marking {
    const PATH: &'static str = "InternetGatewayDevice.Layer2Bridging.Marking.{i}.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "MarkingKey",
                field: "marking_key",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "MarkingEnable",
                field: "marking_enable",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "MarkingStatus",
                field: "marking_status",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "MarkingBridgeReference",
                field: "marking_bridge_reference",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(-1), max: None }),
            },
            ParamInfo {
                name: "MarkingInterface",
                field: "marking_interface",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
            ParamInfo {
                name: "VLANIDUntag",
                field: "vlanid_untag",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "VLANIDMark",
                field: "vlanid_mark",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(-1), max: Some(4094) }),
            },
            ParamInfo {
                name: "VLANIDMarkOverride",
                field: "vlanid_mark_override",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "EthernetPriorityMark",
                field: "ethernet_priority_mark",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: Some(Bound { min: Some(-1), max: Some(7) }),
            },
            ParamInfo {
                name: "EthernetPriorityOverride",
                field: "ethernet_priority_override",
                access: Access::ReadWrite,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
        ]
    }
}

/// `InternetGatewayDevice.Layer2Bridging.AvailableInterface.{i}.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AvailableInterface {
    #[serde(rename = "AvailableInterfaceKey")]
    pub available_interface_key: u32,
    #[serde(rename = "InterfaceType")]
    pub interface_type: String,
    #[serde(rename = "InterfaceReference")]
    pub interface_reference: String,
}

impl AvailableInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_available_interface_key(mut self, value: u32) -> Self {
        self.available_interface_key = value;
        self
    }

    pub fn with_interface_type(mut self, value: String) -> Self {
        self.interface_type = value;
        self
    }

    pub fn with_interface_reference(mut self, value: String) -> Self {
        self.interface_reference = value;
        self
    }
}

impl CwmpObject for AvailableInterface {
    const PATH: &'static str = "InternetGatewayDevice.Layer2Bridging.AvailableInterface.{i}.";

    fn parameters() -> &'static [ParamInfo] {
        &[
            ParamInfo {
                name: "AvailableInterfaceKey",
                field: "available_interface_key",
                access: Access::ReadOnly,
                notify: Notify::CanDeny,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "InterfaceType",
                field: "interface_type",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: None,
                range: None,
            },
            ParamInfo {
                name: "InterfaceReference",
                field: "interface_reference",
                access: Access::ReadOnly,
                notify: Notify::Normal,
                units: None,
                size: Some(Bound { min: None, max: Some(256) }),
                range: None,
            },
        ]
    }
}
