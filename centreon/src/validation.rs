//! Field validators for host configuration
//!
//! Pure predicates over single attribute values; they never touch the
//! network and never mutate anything. Each is exposed both as a plain
//! function and as a tfcore schema validator.

use regex::Regex;
use std::net::IpAddr;
use std::sync::OnceLock;
use tfcore::schema::{Validator, ValidatorRequest, ValidatorResponse};
use tfcore::types::{Diagnostic, Dynamic};

/// Notification option flag bits: 1=DOWN, 2=UNREACHABLE, 4=RECOVERY,
/// 8=FLAPPING, 16=DOWNTIME_SCHEDULED
pub const NOTIFICATION_OPTIONS_MASK: i64 = 1 | 2 | 4 | 8 | 16;

const SNMP_VERSIONS: [&str; 3] = ["1", "2c", "3"];

fn hostname_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // RFC-1123 labels: alphanumerics with interior hyphens, max 63 chars;
        // underscores are rejected
        Regex::new(
            r"^[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .unwrap()
    })
}

fn latitude_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?([0-9]|[1-8][0-9]|90)(\.[0-9]+)?$").unwrap())
}

fn longitude_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?([0-9]|[1-9][0-9]|1[0-7][0-9]|180)(\.[0-9]+)?$").unwrap())
}

/// Validate an IP literal or RFC-1123 hostname; returns the error detail on
/// failure
///
/// A value made entirely of numeric dot-separated labels must parse as an
/// IPv4 address: "300.1.1.1" is a malformed address, not a hostname.
pub fn check_address(value: &str) -> Option<String> {
    if value.parse::<IpAddr>().is_ok() {
        return None;
    }

    let all_numeric_labels = !value.is_empty()
        && value
            .split('.')
            .all(|label| !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()));
    if all_numeric_labels {
        return Some(format!("{} is not a valid IP address", value));
    }

    if hostname_regex().is_match(value) {
        return None;
    }
    Some(format!(
        "{} is neither a valid IP address nor a valid hostname",
        value
    ))
}

pub fn check_snmp_version(value: &str) -> Option<String> {
    if SNMP_VERSIONS.contains(&value) {
        return None;
    }
    Some(format!(
        "SNMP version must be one of: 1, 2c, or 3, got: {}",
        value
    ))
}

/// Validate `"lat,long"` coordinates with lat in [-90, 90] and long in
/// [-180, 180], each optionally fractional
pub fn check_geo_coords(value: &str) -> Option<String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 2 {
        return Some(format!(
            "Coordinates must be in format 'latitude,longitude', got: {}",
            value
        ));
    }

    let lat = parts[0].trim();
    let long = parts[1].trim();

    if !latitude_regex().is_match(lat) {
        return Some(format!(
            "Latitude must be between -90 and 90 degrees, got: {}",
            lat
        ));
    }
    if !longitude_regex().is_match(long) {
        return Some(format!(
            "Longitude must be between -180 and 180 degrees, got: {}",
            long
        ));
    }
    None
}

/// Validate that an options value stays within the bitwise-OR closure of
/// the known notification flag bits
pub fn check_notification_options(value: i64) -> Option<String> {
    if (0..=NOTIFICATION_OPTIONS_MASK).contains(&value) {
        return None;
    }
    Some(format!(
        "Notification options must be a valid combination of: 1=DOWN, 2=UNREACHABLE, 4=RECOVERY, 8=FLAPPING, 16=DOWNTIME_SCHEDULED. Got: {}",
        value
    ))
}

pub struct AddressValidator;

impl Validator for AddressValidator {
    fn description(&self) -> String {
        "value must be a valid hostname or IP address".to_string()
    }

    fn validate(&self, request: ValidatorRequest) -> ValidatorResponse {
        let mut diagnostics = vec![];
        if let Dynamic::String(value) = &request.value {
            if let Some(detail) = check_address(value) {
                diagnostics
                    .push(Diagnostic::error("Invalid Address", detail).with_attribute(request.path));
            }
        }
        ValidatorResponse { diagnostics }
    }
}

pub struct SnmpVersionValidator;

impl Validator for SnmpVersionValidator {
    fn description(&self) -> String {
        "SNMP version must be one of: 1, 2c, or 3".to_string()
    }

    fn validate(&self, request: ValidatorRequest) -> ValidatorResponse {
        let mut diagnostics = vec![];
        if let Dynamic::String(value) = &request.value {
            if let Some(detail) = check_snmp_version(value) {
                diagnostics.push(
                    Diagnostic::error("Invalid SNMP Version", detail)
                        .with_attribute(request.path),
                );
            }
        }
        ValidatorResponse { diagnostics }
    }
}

pub struct GeoCoordsValidator;

impl Validator for GeoCoordsValidator {
    fn description(&self) -> String {
        "value must be valid geographic coordinates in format 'latitude,longitude'".to_string()
    }

    fn validate(&self, request: ValidatorRequest) -> ValidatorResponse {
        let mut diagnostics = vec![];
        if let Dynamic::String(value) = &request.value {
            if let Some(detail) = check_geo_coords(value) {
                diagnostics.push(
                    Diagnostic::error("Invalid Geographic Coordinates", detail)
                        .with_attribute(request.path),
                );
            }
        }
        ValidatorResponse { diagnostics }
    }
}

pub struct NotificationOptionsValidator;

impl Validator for NotificationOptionsValidator {
    fn description(&self) -> String {
        "value must be a valid combination of notification options (1=DOWN, 2=UNREACHABLE, 4=RECOVERY, 8=FLAPPING, 16=DOWNTIME_SCHEDULED)"
            .to_string()
    }

    fn validate(&self, request: ValidatorRequest) -> ValidatorResponse {
        let mut diagnostics = vec![];
        if let Dynamic::Number(value) = &request.value {
            if let Some(detail) = check_notification_options(*value as i64) {
                diagnostics.push(
                    Diagnostic::error("Invalid Notification Options", detail)
                        .with_attribute(request.path),
                );
            }
        }
        ValidatorResponse { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfcore::types::AttributePath;

    #[test]
    fn address_accepts_ipv4_and_ipv6_literals() {
        assert_eq!(check_address("10.0.0.1"), None);
        assert_eq!(check_address("192.168.255.254"), None);
        assert_eq!(check_address("::1"), None);
        assert_eq!(check_address("2001:db8::42"), None);
    }

    #[test]
    fn address_rejects_out_of_range_octets() {
        assert!(check_address("300.1.1.1").is_some());
        assert!(check_address("999.999.999.999").is_some());
    }

    #[test]
    fn address_rejects_underscores_and_illegal_characters() {
        assert!(check_address("host_underscore").is_some());
        assert!(check_address("-leading-hyphen").is_some());
        assert!(check_address("trailing-hyphen-").is_some());
        assert!(check_address("spaced host").is_some());
    }

    #[test]
    fn address_accepts_hostnames() {
        assert_eq!(check_address("web-01"), None);
        assert_eq!(check_address("web-01.example.com"), None);
    }

    #[test]
    fn snmp_version_accepts_known_versions_only() {
        assert_eq!(check_snmp_version("1"), None);
        assert_eq!(check_snmp_version("2c"), None);
        assert_eq!(check_snmp_version("3"), None);
        assert!(check_snmp_version("2").is_some());
        assert!(check_snmp_version("v2c").is_some());
    }

    #[test]
    fn geo_coords_accepts_valid_pairs() {
        assert_eq!(check_geo_coords("45.5,-73.6"), None);
        assert_eq!(check_geo_coords("-90,180"), None);
        assert_eq!(check_geo_coords(" 48.85 , 2.35 "), None);
    }

    #[test]
    fn geo_coords_rejects_out_of_range_latitude() {
        assert!(check_geo_coords("91,0").is_some());
        assert!(check_geo_coords("-91,0").is_some());
    }

    #[test]
    fn geo_coords_rejects_out_of_range_longitude() {
        assert!(check_geo_coords("0,181").is_some());
        assert!(check_geo_coords("0,-181").is_some());
    }

    #[test]
    fn geo_coords_rejects_malformed_input() {
        assert!(check_geo_coords("45.5").is_some());
        assert!(check_geo_coords("45.5,-73.6,12").is_some());
        assert!(check_geo_coords("north,west").is_some());
    }

    #[test]
    fn notification_options_accepts_values_inside_mask() {
        assert_eq!(check_notification_options(0), None);
        assert_eq!(check_notification_options(5), None); // DOWN | RECOVERY
        assert_eq!(check_notification_options(31), None);
    }

    #[test]
    fn notification_options_rejects_bits_outside_mask() {
        assert!(check_notification_options(32).is_some());
        assert!(check_notification_options(-1).is_some());
    }

    #[test]
    fn validators_skip_non_matching_dynamic_types() {
        let response = AddressValidator.validate(ValidatorRequest {
            value: Dynamic::Number(42.0),
            path: AttributePath::new("address"),
        });
        assert!(response.diagnostics.is_empty());
    }

    #[test]
    fn validators_attach_attribute_path() {
        let response = GeoCoordsValidator.validate(ValidatorRequest {
            value: Dynamic::String("91,0".to_string()),
            path: AttributePath::new("geo_coords"),
        });

        assert_eq!(response.diagnostics.len(), 1);
        let diag = &response.diagnostics[0];
        assert_eq!(diag.summary, "Invalid Geographic Coordinates");
        assert_eq!(diag.attribute, Some(AttributePath::new("geo_coords")));
    }
}
