use super::parse_user_agent;
use serde::{Deserialize, Deserializer, Serialize};
use smol_str::SmolStr;
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};
use uasig_error::OpaqueError;
use uasig_utils::macros::match_ignore_ascii_case_str;

/// Name reported for a browser, engine or operating system that was not recognised.
const UNKNOWN: &str = "unknown";

/// User Agent (UA) information, retaining the original header value.
///
/// See [the module level documentation](crate) for more information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent {
    header: Arc<str>,
    info: UserAgentInfo,
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)
    }
}

impl UserAgent {
    /// Create a new [`UserAgent`] from a `User-Agent` (header) value,
    /// classified using the default [`UserAgentParser`](super::UserAgentParser).
    pub fn new(header: impl Into<Arc<str>>) -> Self {
        let header = header.into();
        let info = parse_user_agent(header.as_bytes());
        Self { header, info }
    }

    pub(super) fn from_parts(header: Arc<str>, info: UserAgentInfo) -> Self {
        Self { header, info }
    }

    /// returns the `User-Agent` (header) value used by the [`UserAgent`].
    #[must_use]
    pub fn header_str(&self) -> &str {
        &self.header
    }

    /// returns the [`UserAgentInfo`] parsed from the header.
    #[must_use]
    pub fn info(&self) -> &UserAgentInfo {
        &self.info
    }

    /// Consume the [`UserAgent`] into its [`UserAgentInfo`].
    #[must_use]
    pub fn into_info(self) -> UserAgentInfo {
        self.info
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Information classified from a User Agent.
///
/// Every field is always defined: names that could not be
/// recognised are `"unknown"`, versions that could not be found are empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAgentInfo {
    /// Browser (or app) name, e.g. `Chrome` or `Kindle`.
    pub browser_name: SmolStr,
    /// Browser version, e.g. `124.0.6367.91`.
    pub browser_version: SmolStr,
    /// Rendering engine name, e.g. `AppleWebKit` or `Gecko`.
    pub engine_name: SmolStr,
    /// Rendering engine version.
    pub engine_version: SmolStr,
    /// Operating system name, e.g. `Windows` or `iOS`.
    pub os_name: SmolStr,
    /// Operating system version, e.g. `10.0` or `17.4`.
    pub os_version: SmolStr,
    /// Coarse form factor of the device.
    #[serde(rename = "deviceType")]
    pub device: DeviceKind,
    /// Device model, e.g. `iPhone`, `Kindle` or `SM-G973F`.
    pub device_name: SmolStr,
}

impl Default for UserAgentInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

impl UserAgentInfo {
    /// Information for a User Agent of which nothing is known.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            browser_name: SmolStr::new_static(UNKNOWN),
            browser_version: SmolStr::default(),
            engine_name: SmolStr::new_static(UNKNOWN),
            engine_version: SmolStr::default(),
            os_name: SmolStr::new_static(UNKNOWN),
            os_version: SmolStr::default(),
            device: DeviceKind::Unknown,
            device_name: SmolStr::default(),
        }
    }

    /// Information for a crawler or other bot.
    #[must_use]
    pub fn bot() -> Self {
        Self {
            device: DeviceKind::Bot,
            ..Self::unknown()
        }
    }

    /// Returns `true` if the browser was recognised.
    #[must_use]
    pub fn has_browser(&self) -> bool {
        self.browser_name != UNKNOWN
    }

    /// Returns `true` if the rendering engine was recognised.
    #[must_use]
    pub fn has_engine(&self) -> bool {
        self.engine_name != UNKNOWN
    }

    /// Returns `true` if the operating system was recognised.
    #[must_use]
    pub fn has_os(&self) -> bool {
        self.os_name != UNKNOWN
    }

    /// Compact, lowercase summary: `<device>;<device_name>;<os>;<browser>`.
    ///
    /// Fields that are unknown are left empty,
    /// e.g. `ereader;kindle;linux;kindle` or `;;;` for an empty User Agent.
    #[must_use]
    pub fn short_name(&self) -> String {
        let device = match self.device {
            DeviceKind::Unknown => "",
            device => device.as_str(),
        };
        let os = if self.has_os() { self.os_name.as_str() } else { "" };
        let browser = if self.has_browser() {
            self.browser_name.as_str()
        } else {
            ""
        };
        format!("{device};{};{os};{browser}", self.device_name).to_ascii_lowercase()
    }
}

impl fmt::Display for UserAgentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_component(
            f: &mut fmt::Formatter<'_>,
            label: &str,
            name: &str,
            version: &str,
        ) -> fmt::Result {
            if version.is_empty() {
                write!(f, "{label}={name} ")
            } else {
                write!(f, "{label}={name}/{version} ")
            }
        }

        write_component(f, "browser", &self.browser_name, &self.browser_version)?;
        write_component(f, "engine", &self.engine_name, &self.engine_version)?;
        write_component(f, "os", &self.os_name, &self.os_version)?;
        write!(f, "device={}", self.device)?;
        if !self.device_name.is_empty() {
            write!(f, " ({})", self.device_name)?;
        }
        Ok(())
    }
}

/// Form factor of the device on which the User Agent operates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Personal Computers
    Desktop,
    /// Phones and other handheld devices
    Mobile,
    /// Tablets
    Tablet,
    /// E-book readers, such as the Amazon Kindle
    EReader,
    /// Smart TVs, set-top boxes and streaming sticks
    Tv,
    /// Game consoles
    Console,
    /// Crawlers, spiders and other automated clients
    Bot,
    /// Nothing could be inferred
    #[default]
    Unknown,
}

impl DeviceKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::EReader => "ereader",
            Self::Tv => "tv",
            Self::Console => "console",
            Self::Bot => "bot",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for DeviceKind {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "desktop" => Ok(Self::Desktop),
                "mobile" | "phone" => Ok(Self::Mobile),
                "tablet" => Ok(Self::Tablet),
                "ereader" | "e-reader" => Ok(Self::EReader),
                "tv" | "smarttv" => Ok(Self::Tv),
                "console" => Ok(Self::Console),
                "bot" => Ok(Self::Bot),
                "unknown" => Ok(Self::Unknown),
                _ => Err(OpaqueError::from_display(format!("invalid device: {s}"))),
            }
        }
    }
}

impl Serialize for DeviceKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeviceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
