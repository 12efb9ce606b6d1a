//! Deterministic transforms from published CWMP wire names to Rust
//! identifiers.
//!
//! Wire tags stay authoritative: generated entities carry the exact
//! published tag in a serde `rename`, so the field spelling produced here
//! never has to round-trip back to the tag. That keeps the transform free to
//! be a clean snake_case rule instead of reproducing the source schema's
//! irreversible acronym spellings (`vlaNID` and friends).

use once_cell::sync::Lazy;
use std::collections::HashMap;

const KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while", "async", "await", "dyn",
];

/// Published names the mechanical rule mangles. The rule splits an
/// uppercase run before a trailing lowercase letter, which turns the
/// `IPv4`/`IPv6` prefixes into `i_pv4`; the tables pin those by hand.
static OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("IPv4PingSupported", "ipv4_ping_supported"),
        ("IPv6PingSupported", "ipv6_ping_supported"),
        ("IPv4TraceRouteSupported", "ipv4_trace_route_supported"),
        ("IPv6TraceRouteSupported", "ipv6_trace_route_supported"),
        ("IPv4DownloadDiagnosticsSupported", "ipv4_download_diagnostics_supported"),
        ("IPv6DownloadDiagnosticsSupported", "ipv6_download_diagnostics_supported"),
        ("IPv4UploadDiagnosticsSupported", "ipv4_upload_diagnostics_supported"),
        ("IPv6UploadDiagnosticsSupported", "ipv6_upload_diagnostics_supported"),
        ("IPv4UDPEchoDiagnosticsSupported", "ipv4_udp_echo_diagnostics_supported"),
        ("IPv6UDPEchoDiagnosticsSupported", "ipv6_udp_echo_diagnostics_supported"),
        ("IPAddressUsed", "ip_address_used"),
        // G.997.1 test-parameter names mix acronym and suffix in ways the
        // run rule splits wrong (`HLOGpsds` → `hlo_gpsds`).
        ("HLOGpsds", "hlog_psds"),
        ("HLOGpsus", "hlog_psus"),
        ("HLOGMTds", "hlog_mtds"),
        ("HLOGMTus", "hlog_mtus"),
        ("QLNpsds", "qln_psds"),
        ("QLNpsus", "qln_psus"),
        ("QLNMTds", "qln_mtds"),
        ("QLNMTus", "qln_mtus"),
        ("SNRpsds", "snr_psds"),
        ("SNRpsus", "snr_psus"),
        ("SNRMTds", "snr_mtds"),
        ("SNRMTus", "snr_mtus"),
        ("LATNds", "latn_ds"),
        ("LATNus", "latn_us"),
        ("SATNds", "satn_ds"),
        ("SATNus", "satn_us"),
        ("TRELLISds", "trellis_ds"),
        ("TRELLISus", "trellis_us"),
        ("SNRMROCds", "snrm_roc_ds"),
        ("SNRMROCus", "snrm_roc_us"),
    ])
});

/// Wire parameter name → snake_case Rust field name.
///
/// Boundaries are inserted before an uppercase letter that follows a
/// lowercase letter or digit, and before the last letter of an uppercase run
/// that is followed by a lowercase letter:
/// `PVID` → `pvid`, `VLANName` → `vlan_name`,
/// `TCPOpenRequestTime` → `tcp_open_request_time`.
pub fn field_name(wire: &str) -> String {
    if let Some(pinned) = OVERRIDES.get(wire) {
        return (*pinned).to_string();
    }
    let chars: Vec<char> = wire.chars().collect();
    let mut out = String::with_capacity(wire.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars
                .get(i + 1)
                .map(|n| n.is_ascii_lowercase())
                .unwrap_or(false);
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    if out.is_empty() {
        out.push('_');
    }
    if out
        .chars()
        .next()
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false)
    {
        out.insert(0, '_');
    }
    sanitize_rust_identifier(&out)
}

/// Object path segment → UpperCamelCase Rust type name:
/// `VLAN` → `Vlan`, `IPPing` → `IpPing`, `DownloadDiagnostics` unchanged.
pub fn type_name(segment: &str) -> String {
    field_name(segment)
        .split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn sanitize_rust_identifier(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acronym_runs() {
        assert_eq!(field_name("PVID"), "pvid");
        assert_eq!(field_name("VLANID"), "vlanid");
        assert_eq!(field_name("VLANName"), "vlan_name");
        assert_eq!(field_name("DSCP"), "dscp");
        assert_eq!(field_name("ROMTime"), "rom_time");
        assert_eq!(field_name("TCPOpenRequestTime"), "tcp_open_request_time");
    }

    #[test]
    fn test_plain_camel() {
        assert_eq!(field_name("PortEnable"), "port_enable");
        assert_eq!(field_name("BondSchemesSupported"), "bond_schemes_supported");
        assert_eq!(
            field_name("AvailableInterfaceNumberOfEntries"),
            "available_interface_number_of_entries"
        );
    }

    #[test]
    fn test_vendor_prefix() {
        assert_eq!(field_name("X_EXAMPLE-COM_LineTest"), "x_example_com_line_test");
    }

    #[test]
    fn test_overrides() {
        assert_eq!(field_name("IPv4PingSupported"), "ipv4_ping_supported");
        assert_eq!(field_name("IPv6TraceRouteSupported"), "ipv6_trace_route_supported");
    }

    #[test]
    fn test_keyword_sanitized() {
        assert_eq!(field_name("Type"), "r#type");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name("VLAN"), "Vlan");
        assert_eq!(type_name("IPPing"), "IpPing");
        assert_eq!(type_name("DownloadDiagnostics"), "DownloadDiagnostics");
        assert_eq!(type_name("TraceRoute"), "TraceRoute");
    }
}
