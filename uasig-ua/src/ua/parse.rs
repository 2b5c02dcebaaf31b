use super::{DeviceKind, UserAgent, UserAgentInfo};
use crate::rules::{RuleSet, select};
use smol_str::SmolStr;
use std::sync::{Arc, LazyLock};
use uasig_utils::str::contains_ignore_ascii_case;

/// Maximum amount of bytes of a User Agent taken into consideration by default.
///
/// This is a lot longer than what is observed in the wild,
/// where most User Agents stay well below 300 bytes.
pub const DEFAULT_MAX_USER_AGENT_LENGTH: usize = 2048;

static DEFAULT_PARSER: LazyLock<UserAgentParser> = LazyLock::new(UserAgentParser::new);

/// Parse a User Agent using the default [`UserAgentParser`].
///
/// This never fails: anything not recognised results in unknown fields.
pub fn parse_user_agent(ua: impl AsRef<[u8]>) -> UserAgentInfo {
    DEFAULT_PARSER.parse(ua)
}

/// Rule based User Agent classifier.
///
/// The default parser uses the built-in [`RuleSet`] and caps input at
/// [`DEFAULT_MAX_USER_AGENT_LENGTH`] bytes. A parser is immutable while parsing,
/// and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct UserAgentParser {
    rules: Rules,
    max_length: usize,
}

#[derive(Debug, Clone)]
enum Rules {
    Builtin,
    Custom(Arc<RuleSet>),
}

impl Rules {
    fn get(&self) -> &RuleSet {
        match self {
            Self::Builtin => RuleSet::builtin(),
            Self::Custom(rules) => rules,
        }
    }
}

impl Default for UserAgentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl UserAgentParser {
    /// Create a new [`UserAgentParser`] using the built-in [`RuleSet`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Rules::Builtin,
            max_length: DEFAULT_MAX_USER_AGENT_LENGTH,
        }
    }

    /// Use the given [`RuleSet`] instead of the built-in one.
    #[must_use]
    pub fn with_rules(mut self, rules: impl Into<Arc<RuleSet>>) -> Self {
        self.rules = Rules::Custom(rules.into());
        self
    }

    /// Use the given [`RuleSet`] instead of the built-in one.
    pub fn set_rules(&mut self, rules: impl Into<Arc<RuleSet>>) -> &mut Self {
        self.rules = Rules::Custom(rules.into());
        self
    }

    /// Only take the first `max_length` bytes of a User Agent into consideration.
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Only take the first `max_length` bytes of a User Agent into consideration.
    pub fn set_max_length(&mut self, max_length: usize) -> &mut Self {
        self.max_length = max_length;
        self
    }

    /// returns the [`RuleSet`] used by this parser.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        self.rules.get()
    }

    /// returns the maximum amount of bytes of a User Agent taken into consideration.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Parse a `User-Agent` (header) value into a [`UserAgent`],
    /// which retains the header next to the parsed info.
    pub fn parse_header(&self, header: impl Into<Arc<str>>) -> UserAgent {
        let header = header.into();
        let info = self.parse(header.as_bytes());
        UserAgent::from_parts(header, info)
    }

    /// Classify the given User Agent.
    ///
    /// Surrounding ASCII whitespace is ignored. Non-ASCII bytes are never
    /// part of a token, so input does not need to be valid UTF-8.
    pub fn parse(&self, ua: impl AsRef<[u8]>) -> UserAgentInfo {
        let ua = ua.as_ref().trim_ascii();
        let ua = if ua.len() > self.max_length {
            tracing::trace!(
                len = ua.len(),
                max_length = self.max_length,
                "truncate oversized user agent"
            );
            ua.get(..self.max_length).unwrap_or(ua)
        } else {
            ua
        };

        let rules = self.rules.get();

        if let Some(rule) = select(&rules.bots, ua) {
            tracing::trace!(token = %rule.token, "user agent classified as bot");
            return UserAgentInfo::bot();
        }

        let mut info = UserAgentInfo::unknown();

        if let Some(rule) = select(&rules.engines, ua) {
            info.engine_name = rule.name().clone();
            info.engine_version = rule.extract_version(ua);
        }
        if let Some(rule) = select(&rules.browsers, ua) {
            info.browser_name = rule.name().clone();
            info.browser_version = rule.extract_version(ua);
        }
        if let Some(rule) = select(&rules.os, ua) {
            info.os_name = rule.name().clone();
            info.os_version = rule.extract_version(ua);
        }

        let fallback = if info.has_engine() || info.has_browser() {
            DeviceKind::Desktop
        } else {
            DeviceKind::Unknown
        };

        match select(&rules.devices, ua) {
            Some(rule) => {
                info.device = rule.device.unwrap_or(fallback);
                match &rule.device_name {
                    Some(name) => info.device_name = name.clone(),
                    None if matches!(info.device, DeviceKind::Mobile | DeviceKind::Tablet) => {
                        if let Some(model) = android_model(ua) {
                            if let Some(device) = android_model_device(&model) {
                                info.device = device;
                            }
                            info.device_name = model;
                        }
                    }
                    None => (),
                }
            }
            None => info.device = fallback,
        }

        info
    }
}

/// Android devices advertise their model right before the build id,
/// e.g. `Android 10; SM-G973F Build/QP1A.190711.020`.
fn android_model(ua: &[u8]) -> Option<SmolStr> {
    contains_ignore_ascii_case(ua, "Android")?;
    let end = contains_ignore_ascii_case(ua, " Build/")?;
    let head = ua.get(..end)?;
    let start = head
        .iter()
        .rposition(|b| matches!(b, b';' | b'('))
        .map(|i| i + 1)
        .unwrap_or_default();
    let model = head.get(start..)?.trim_ascii();
    if model.is_empty() || contains_ignore_ascii_case(model, "Android").is_some() {
        return None;
    }
    std::str::from_utf8(model).ok().map(SmolStr::new)
}

/// Some Android models give away a form factor the rest of the User Agent hides:
/// `AFT*` are Amazon Fire TV sticks, `KF*` Kindle Fire tablets and
/// anything ending in `TV` is a television.
fn android_model_device(model: &str) -> Option<DeviceKind> {
    let model = model.to_ascii_lowercase();
    if model.starts_with("aft") {
        Some(DeviceKind::Tv)
    } else if model.starts_with("kf") {
        Some(DeviceKind::Tablet)
    } else if model.ends_with("tv") {
        Some(DeviceKind::Tv)
    } else {
        None
    }
}
