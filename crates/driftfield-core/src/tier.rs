//! Coarse device classification used to scale the particle population.

/// Device tier selected once per initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeviceTier {
    /// Phones and tablets: fewer particles, capped large sizes, no grain.
    Constrained,
    #[default]
    Standard,
}

impl DeviceTier {
    #[inline]
    pub fn is_constrained(self) -> bool {
        matches!(self, DeviceTier::Constrained)
    }
}

const MOBILE_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
    "mobile",
    "crios",
    "fxios",
];

/// Classify a user agent. `ua_data_mobile` is `navigator.userAgentData.mobile`
/// when the browser exposes it; a `true` there wins over the string match.
pub fn classify_user_agent(user_agent: &str, ua_data_mobile: Option<bool>) -> DeviceTier {
    if ua_data_mobile == Some(true) {
        return DeviceTier::Constrained;
    }
    let ua = user_agent.to_ascii_lowercase();
    if MOBILE_TOKENS.iter().any(|t| ua.contains(t)) {
        DeviceTier::Constrained
    } else {
        DeviceTier::Standard
    }
}
