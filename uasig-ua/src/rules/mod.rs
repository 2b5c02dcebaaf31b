//! Signature rules used to classify User Agents.
//!
//! A [`RuleSet`] groups the [`Rule`]s per classification pass
//! (bots, engines, browsers, operating systems and devices).
//! The built-in table is available via [`RuleSet::builtin`],
//! custom tables can be loaded from JSON using [`RuleSet::from_json`].
//!
//! # Tie-breaking
//!
//! When multiple rules of the same pass match, the rule with the highest
//! [`tier`](Rule::tier) wins. Within a tier the rule with the longest token
//! wins, and when the token lengths are equal as well the rule declared first wins.
//!
//! ```
//! use uasig_ua::rules::RuleSet;
//!
//! let rules = RuleSet::from_json(r#"{
//!     "browsers": [{ "token": "MyBrowser", "tier": 2 }],
//!     "devices": [{ "token": "MyPhone", "device": "mobile", "device_name": "MyPhone" }]
//! }"#).unwrap();
//! assert_eq!(rules.browsers.len(), 1);
//! assert!(rules.engines.is_empty());
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use smol_str::SmolStr;
use std::{fmt, io::Read, str::FromStr, sync::LazyLock};
use uasig_error::{ErrorContext, OpaqueError};
use uasig_utils::{
    macros::match_ignore_ascii_case_str,
    str::{match_indices_ignore_ascii_case, submatch_ignore_ascii_case},
};

use crate::DeviceKind;

mod builtin;

static BUILTIN_RULES: LazyLock<RuleSet> = LazyLock::new(builtin::rules);

/// A single signature: a literal token and the facts it contributes when found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// Literal token, matched ASCII case-insensitively anywhere in the User Agent.
    pub token: SmolStr,
    /// Reported name, defaults to the token itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<SmolStr>,
    /// How (and if) a version follows the token or version anchor.
    #[serde(default)]
    pub version: VersionFormat,
    /// Read the version after this token instead of after [`Rule::token`].
    ///
    /// E.g. Safari advertises its version as `Version/17.4`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_anchor: Option<SmolStr>,
    /// Priority class, higher tiers win over lower ones
    /// regardless of token length.
    #[serde(default)]
    pub tier: u8,
    /// Device kind contributed by a device rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceKind>,
    /// Device (model) name contributed by a device rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<SmolStr>,
}

impl Rule {
    /// Create a new [`Rule`] for the given token,
    /// reporting the token as its name and reading a dotted version after it.
    pub fn new(token: impl Into<SmolStr>) -> Self {
        Self {
            token: token.into(),
            name: None,
            version: VersionFormat::Dotted,
            version_anchor: None,
            tier: 0,
            device: None,
            device_name: None,
        }
    }

    /// Report the given name instead of the token.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Use the given [`VersionFormat`].
    #[must_use]
    pub fn with_version(mut self, version: VersionFormat) -> Self {
        self.version = version;
        self
    }

    /// Read the version after the given anchor instead of after the token.
    #[must_use]
    pub fn with_version_anchor(mut self, anchor: impl Into<SmolStr>) -> Self {
        self.version_anchor = Some(anchor.into());
        self
    }

    /// Set the priority tier of this rule.
    #[must_use]
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }

    /// Contribute the given [`DeviceKind`] when matched.
    #[must_use]
    pub fn with_device(mut self, device: DeviceKind) -> Self {
        self.device = Some(device);
        self
    }

    /// Contribute the given device name when matched.
    #[must_use]
    pub fn with_device_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.device_name = Some(name.into());
        self
    }

    /// The name reported for this rule.
    #[must_use]
    pub fn name(&self) -> &SmolStr {
        self.name.as_ref().unwrap_or(&self.token)
    }

    /// Returns `true` if the token of this rule occurs in `ua`.
    ///
    /// A rule with an empty token never matches.
    #[must_use]
    pub fn matches(&self, ua: &[u8]) -> bool {
        !self.token.is_empty() && submatch_ignore_ascii_case(ua, self.token.as_bytes())
    }

    /// Extract the version advertised for this rule in `ua`,
    /// returning an empty string if there is none.
    ///
    /// The first occurrence of the anchor that carries a version is used.
    #[must_use]
    pub fn extract_version(&self, ua: &[u8]) -> SmolStr {
        if self.version == VersionFormat::None {
            return SmolStr::default();
        }
        let anchor = self.version_anchor.as_ref().unwrap_or(&self.token);
        match_indices_ignore_ascii_case(ua, anchor.as_bytes())
            .find_map(|index| self.version.extract(ua, index + anchor.len()))
            .unwrap_or_default()
    }
}

/// Select the winning rule of a pass.
///
/// Highest tier first, then longest token, then declaration order.
pub(crate) fn select<'a>(rules: &'a [Rule], ua: &[u8]) -> Option<&'a Rule> {
    let mut best: Option<&Rule> = None;
    for rule in rules.iter().filter(|rule| rule.matches(ua)) {
        match best {
            Some(current)
                if (current.tier, current.token.len()) >= (rule.tier, rule.token.len()) => {}
            _ => best = Some(rule),
        }
    }
    best
}

/// How a version is read after a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VersionFormat {
    /// The rule carries no version.
    None,
    /// Digits and dots, e.g. `Chrome/124.0.6367.91` or `Android 10`.
    #[default]
    Dotted,
    /// Digits, dots and underscores, normalised to dots,
    /// e.g. `Mac OS X 10_15_7` or `CPU iPhone OS 17_4`.
    Underscored,
}

impl VersionFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dotted => "dotted",
            Self::Underscored => "underscored",
        }
    }

    fn is_separator(self, b: u8) -> bool {
        matches!(b, b'/' | b' ' | b':') || (self == Self::Underscored && b == b'_')
    }

    fn is_version_byte(self, b: u8) -> bool {
        b.is_ascii_digit() || b == b'.' || (self == Self::Underscored && b == b'_')
    }

    /// Read the version starting at byte offset `start` of `ua`.
    ///
    /// At most one separator is skipped, the run stops at the first byte
    /// that cannot be part of a version and trailing separators are dropped.
    fn extract(self, ua: &[u8], start: usize) -> Option<SmolStr> {
        let rest = ua.get(start..)?;
        let rest = match rest.split_first() {
            Some((b, tail)) if self.is_separator(*b) => tail,
            _ => rest,
        };

        let len = rest
            .iter()
            .take_while(|b| self.is_version_byte(**b))
            .count();
        let run = rest.get(..len)?;
        let end = run
            .iter()
            .rposition(u8::is_ascii_digit)
            .map(|i| i + 1)
            .unwrap_or_default();
        let run = run.get(..end)?;

        if !run.first()?.is_ascii_digit() {
            return None;
        }

        let version: String = run
            .iter()
            .map(|b| if *b == b'_' { '.' } else { char::from(*b) })
            .collect();
        Some(version.into())
    }
}

impl fmt::Display for VersionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VersionFormat {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "none" => Ok(Self::None),
                "dotted" | "dot" => Ok(Self::Dotted),
                "underscored" | "underscore" => Ok(Self::Underscored),
                _ => Err(OpaqueError::from_display(format!("invalid version format: {s}"))),
            }
        }
    }
}

impl Serialize for VersionFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VersionFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// All [`Rule`]s, grouped per classification pass.
///
/// Order within a group matters: it is the last tie-breaker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Crawler and bot tokens, checked before anything else.
    pub bots: Vec<Rule>,
    /// Rendering engine tokens.
    pub engines: Vec<Rule>,
    /// Browser tokens.
    pub browsers: Vec<Rule>,
    /// Operating system tokens.
    pub os: Vec<Rule>,
    /// Device tokens, contributing a [`DeviceKind`] and optionally a device name.
    pub devices: Vec<Rule>,
}

impl RuleSet {
    /// The built-in [`RuleSet`], shared by the entire process.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_RULES
    }

    /// Load a [`RuleSet`] from a JSON document.
    pub fn from_json(s: &str) -> Result<Self, OpaqueError> {
        let rules: Self = serde_json::from_str(s).context("decode json rule set")?;
        rules.validated()
    }

    /// Load a [`RuleSet`] from a reader producing a JSON document.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, OpaqueError> {
        let rules: Self = serde_json::from_reader(reader).context("read json rule set")?;
        rules.validated()
    }

    /// Total amount of rules across all passes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups().map(|(_, rules)| rules.len()).sum()
    }

    /// Returns `true` if the rule set contains no rules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn groups(&self) -> impl Iterator<Item = (&'static str, &[Rule])> {
        [
            ("bots", self.bots.as_slice()),
            ("engines", self.engines.as_slice()),
            ("browsers", self.browsers.as_slice()),
            ("os", self.os.as_slice()),
            ("devices", self.devices.as_slice()),
        ]
        .into_iter()
    }

    fn validated(self) -> Result<Self, OpaqueError> {
        for (group, rules) in self.groups() {
            if let Some(index) = rules.iter().position(|rule| rule.token.is_empty()) {
                return Err(OpaqueError::from_display(format!(
                    "rule #{index} of {group} has an empty token"
                )));
            }
        }
        tracing::debug!(rules = self.len(), "loaded custom user agent rule set");
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_version_dotted() {
        for (ua, token, expected) in [
            ("Chrome/124.0.6367.91 Safari/537.36", "Chrome", "124.0.6367.91"),
            ("AppleWebKit/528.5+ (KHTML)", "AppleWebKit", "528.5"),
            ("Linux; Android 10; K", "Android", "10"),
            ("Firefox/125.", "Firefox", "125"),
            ("Firefox/125.0 ", "Firefox", "125.0"),
            ("Kindle/3.0 (screen 600x800)", "Kindle", "3.0"),
            ("Chrome/ 124", "Chrome", ""),
            ("Chrome/.5", "Chrome", ""),
            ("Chrome", "Chrome", ""),
            ("Linux x86_64", "Linux", ""),
            ("MSIE 10.0; Windows NT 6.2", "MSIE", "10.0"),
            ("Mac OS X 10_15_7", "Mac OS X", "10"),
        ] {
            assert_eq!(
                Rule::new(token).extract_version(ua.as_bytes()),
                expected,
                "extract_version({ua:?}, {token:?})",
            );
        }
    }

    #[test]
    fn test_extract_version_underscored() {
        for (ua, token, expected) in [
            ("Intel Mac OS X 10_15_7)", "Mac OS X", "10.15.7"),
            ("Intel Mac OS X 10.15; rv:125.0", "Mac OS X", "10.15"),
            ("CPU iPhone OS 17_4 like Mac OS X", "iPhone OS", "17.4"),
            ("CPU iOS 12_1_4 like Mac OS X", "iOS", "12.1.4"),
            ("CPU OS 17_4_", "CPU OS", "17.4"),
            ("Windows_NT 10_0", "Windows_NT", "10.0"),
        ] {
            assert_eq!(
                Rule::new(token)
                    .with_version(VersionFormat::Underscored)
                    .extract_version(ua.as_bytes()),
                expected,
                "extract_version({ua:?}, {token:?})",
            );
        }
    }

    #[test]
    fn test_extract_version_first_occurrence_with_version() {
        let ua = "com.google.android.youtube/14.08.55(Linux; U; Android 6.0; es_US)";
        assert_eq!(Rule::new("Android").extract_version(ua.as_bytes()), "6.0");
    }

    #[test]
    fn test_extract_version_anchor() {
        let rule = Rule::new("Safari").with_version_anchor("Version/");
        let ua = "(KHTML, like Gecko) Version/17.4.1 Safari/605.1.15";
        assert_eq!(rule.extract_version(ua.as_bytes()), "17.4.1");

        let ua = "(KHTML, like Gecko) Safari/605.1.15";
        assert_eq!(rule.extract_version(ua.as_bytes()), "");
    }

    #[test]
    fn test_extract_version_none() {
        let rule = Rule::new("Chrome").with_version(VersionFormat::None);
        assert_eq!(rule.extract_version(b"Chrome/124.0"), "");
    }

    #[test]
    fn test_select_tie_breaks() {
        let rules = [
            Rule::new("Safari"),
            Rule::new("Kindle"),
            Rule::new("Mobile Safari"),
            Rule::new("Edg").with_tier(1),
        ];

        // equal length: first declared wins
        assert_eq!(
            select(&rules, b"Kindle/3.0 Safari/528.5").map(Rule::name).unwrap(),
            "Safari"
        );
        // longest token wins
        assert_eq!(
            select(&rules, b"Version/4.0 Mobile Safari/534.30").map(Rule::name).unwrap(),
            "Mobile Safari"
        );
        // higher tier wins regardless of length
        assert_eq!(
            select(&rules, b"Mobile Safari/537.36 Edg/124.0").map(Rule::name).unwrap(),
            "Edg"
        );
        assert!(select(&rules, b"curl/8.0").is_none());
    }

    #[test]
    fn test_empty_token_never_matches() {
        assert!(!Rule::new("").matches(b"anything"));
        assert!(select(&[Rule::new("")], b"anything").is_none());
    }

    #[test]
    fn test_rule_set_from_json() {
        let rules = RuleSet::from_json(
            r#"{
                "engines": [{ "token": "Servo", "tier": 1 }],
                "os": [{ "token": "Mac OS X", "name": "macOS", "version": "underscored" }],
                "devices": [{ "token": "Kobo", "device": "ereader", "device_name": "Kobo", "version": "none" }]
            }"#,
        )
        .unwrap();

        assert_eq!(rules.len(), 3);
        assert!(rules.bots.is_empty());
        assert_eq!(rules.engines[0].tier, 1);
        assert_eq!(rules.engines[0].name(), "Servo");
        assert_eq!(rules.os[0].name(), "macOS");
        assert_eq!(rules.os[0].version, VersionFormat::Underscored);
        assert_eq!(rules.devices[0].device, Some(DeviceKind::EReader));
        assert_eq!(rules.devices[0].version, VersionFormat::None);
    }

    #[test]
    fn test_rule_set_from_json_errors() {
        let err = RuleSet::from_json(r#"{ "bots": [{ "token": "" }] }"#).unwrap_err();
        assert!(err.to_string().contains("empty token"), "{err}");

        let err = RuleSet::from_json(r#"{ "bots": [{ "name": "x" }] }"#).unwrap_err();
        assert!(err.to_string().starts_with("decode json rule set"), "{err}");

        let err = RuleSet::from_json(r#"{ "os": [{ "token": "x", "version": "roman" }] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid version format"), "{err}");
    }

    #[test]
    fn test_rule_set_from_json_reader() {
        let rules = RuleSet::from_json_reader(r#"{"bots":[{"token":"bot"}]}"#.as_bytes()).unwrap();
        assert_eq!(rules.bots, vec![Rule::new("bot")]);
    }

    #[test]
    fn test_builtin_rule_set_survives_json() {
        let builtin = RuleSet::builtin();
        assert!(!builtin.is_empty());
        let json = serde_json::to_string(builtin).unwrap();
        assert_eq!(&RuleSet::from_json(&json).unwrap(), builtin);
    }

    #[test]
    fn test_version_format_parse() {
        assert_eq!("dotted".parse::<VersionFormat>().unwrap(), VersionFormat::Dotted);
        assert_eq!("UnderScored".parse::<VersionFormat>().unwrap(), VersionFormat::Underscored);
        assert_eq!("NONE".parse::<VersionFormat>().unwrap(), VersionFormat::None);
        assert!("".parse::<VersionFormat>().is_err());
    }
}
