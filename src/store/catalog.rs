//! Well-known timezones offered by a selection dropdown.

/// A timezone choice: the IANA id plus a human-friendly label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneOption {
    /// IANA timezone identifier.
    pub value: &'static str,
    /// Label shown in the dropdown.
    pub label: &'static str,
}

/// The timezone inserted when the user adds a row without picking a zone.
pub const DEFAULT_ADD_TIMEZONE: &str = "Europe/London";

/// Common timezones covering the major meeting regions.
pub const COMMON_TIMEZONES: [TimezoneOption; 16] = [
    TimezoneOption { value: "America/New_York", label: "New York (EST/EDT)" },
    TimezoneOption { value: "America/Los_Angeles", label: "Los Angeles (PST/PDT)" },
    TimezoneOption { value: "America/Chicago", label: "Chicago (CST/CDT)" },
    TimezoneOption { value: "America/Denver", label: "Denver (MST/MDT)" },
    TimezoneOption { value: "Europe/London", label: "London (GMT/BST)" },
    TimezoneOption { value: "Europe/Paris", label: "Paris (CET/CEST)" },
    TimezoneOption { value: "Europe/Berlin", label: "Berlin (CET/CEST)" },
    TimezoneOption { value: "Asia/Tokyo", label: "Tokyo (JST)" },
    TimezoneOption { value: "Asia/Shanghai", label: "Shanghai (CST)" },
    TimezoneOption { value: "Asia/Dubai", label: "Dubai (GST)" },
    TimezoneOption { value: "Asia/Singapore", label: "Singapore (SGT)" },
    TimezoneOption { value: "Asia/Kolkata", label: "India (IST)" },
    TimezoneOption { value: "Australia/Sydney", label: "Sydney (AEDT/AEST)" },
    TimezoneOption { value: "Pacific/Auckland", label: "Auckland (NZDT/NZST)" },
    TimezoneOption { value: "America/Sao_Paulo", label: "São Paulo (BRT)" },
    TimezoneOption { value: "Africa/Johannesburg", label: "Johannesburg (SAST)" },
];

/// Looks up the dropdown label for a timezone id, if it is in the catalog.
pub fn label_for(value: &str) -> Option<&'static str> {
    COMMON_TIMEZONES
        .iter()
        .find(|tz| tz.value == value)
        .map(|tz| tz.label)
}
