//! The built-in rule table.
//!
//! Tiers used throughout this table:
//!
//! - `0`: generic tokens embedded by many User Agents (`Safari`, `Gecko`, `Linux`, `Mobile`);
//! - `1`: family tokens (`Chrome`, `Firefox`, `Windows NT`, `iPhone`);
//! - `2`: vendor or platform tokens that deliberately spoof a family token
//!   (`Edg/` next to `Chrome/`, `CPU OS` next to `Mac OS X`, `iPad` next to `Mobile/`).
//!
//! Tokens match anywhere, ignoring case. Short bot tokens such as `bot`
//! therefore also hit unrelated words: the `CUBOT` phone brand is reported
//! as a bot. Load a custom [`RuleSet`] when that matters.

use super::{Rule, RuleSet, VersionFormat};
use crate::DeviceKind;

pub(super) fn rules() -> RuleSet {
    RuleSet {
        bots: bots(),
        engines: engines(),
        browsers: browsers(),
        os: os(),
        devices: devices(),
    }
}

fn bots() -> Vec<Rule> {
    [
        "bot",
        "spider",
        "crawl",
        "slurp",
        "archiver",
        "facebookexternalhit",
        "mediapartners-google",
        "feedfetcher",
    ]
    .into_iter()
    .map(|token| Rule::new(token).with_version(VersionFormat::None))
    .collect()
}

fn engines() -> Vec<Rule> {
    vec![
        Rule::new("AppleWebKit"),
        Rule::new("Trident"),
        Rule::new("Presto"),
        Rule::new("KHTML"),
        Rule::new("Blink"),
        // frozen at `Gecko/20100101` on desktop, rv: carries the real version
        Rule::new("Gecko").with_version_anchor("rv:"),
        Rule::new("Edge/").with_name("EdgeHTML").with_tier(1),
        Rule::new("Goanna").with_tier(1),
    ]
}

fn browsers() -> Vec<Rule> {
    vec![
        // vendor forks and spoofing tokens
        Rule::new("Edg/").with_name("Edge").with_tier(2),
        Rule::new("EdgA/").with_name("Edge").with_tier(2),
        Rule::new("EdgiOS/").with_name("Edge").with_tier(2),
        Rule::new("Edge/").with_name("Edge").with_tier(2),
        Rule::new("OPR/").with_name("Opera").with_tier(2),
        Rule::new("OPiOS/").with_name("Opera").with_tier(2),
        Rule::new("Opera")
            .with_version_anchor("Version/")
            .with_tier(2),
        Rule::new("SamsungBrowser").with_tier(2),
        Rule::new("YaBrowser")
            .with_name("Yandex Browser")
            .with_tier(2),
        Rule::new("Vivaldi").with_tier(2),
        Rule::new("UCBrowser").with_tier(2),
        Rule::new("Silk").with_tier(2),
        Rule::new("Kindle").with_tier(2),
        Rule::new("CriOS").with_name("Chrome").with_tier(2),
        Rule::new("FxiOS").with_name("Firefox").with_tier(2),
        Rule::new("MSIE")
            .with_name("Internet Explorer")
            .with_tier(2),
        // browser families
        Rule::new("HeadlessChrome").with_tier(1),
        Rule::new("Chromium").with_tier(1),
        Rule::new("Chrome").with_tier(1),
        Rule::new("Firefox").with_tier(1),
        Rule::new("Trident")
            .with_name("Internet Explorer")
            .with_version_anchor("rv:")
            .with_tier(1),
        Rule::new("Dalvik").with_tier(1),
        // generic tokens embedded by everything webkit based
        Rule::new("Mobile Safari").with_version_anchor("Version/"),
        Rule::new("Safari").with_version_anchor("Version/"),
    ]
}

fn os() -> Vec<Rule> {
    vec![
        Rule::new("Windows Phone").with_tier(2),
        Rule::new("Android").with_tier(2),
        Rule::new("iPhone OS")
            .with_name("iOS")
            .with_version(VersionFormat::Underscored)
            .with_tier(2),
        Rule::new("CPU OS")
            .with_name("iOS")
            .with_version(VersionFormat::Underscored)
            .with_tier(2),
        Rule::new("iOS")
            .with_version(VersionFormat::Underscored)
            .with_tier(2),
        Rule::new("tvOS")
            .with_version(VersionFormat::Underscored)
            .with_tier(2),
        Rule::new("Tizen").with_tier(2),
        Rule::new("KaiOS").with_tier(2),
        Rule::new("Web0S").with_name("webOS").with_tier(2),
        Rule::new("HarmonyOS").with_tier(2),
        Rule::new("BlackBerry")
            .with_name("BlackBerry OS")
            .with_tier(2),
        Rule::new("BB10").with_name("BlackBerry OS").with_tier(2),
        Rule::new("Windows NT").with_name("Windows").with_tier(1),
        Rule::new("Mac OS X")
            .with_name("macOS")
            .with_version(VersionFormat::Underscored)
            .with_tier(1),
        Rule::new("CrOS")
            .with_name("Chrome OS")
            .with_version(VersionFormat::None)
            .with_tier(1),
        Rule::new("FreeBSD").with_tier(1),
        Rule::new("OpenBSD").with_tier(1),
        Rule::new("Windows"),
        Rule::new("Macintosh")
            .with_name("macOS")
            .with_version(VersionFormat::None),
        Rule::new("Linux"),
        Rule::new("Darwin"),
    ]
}

fn devices() -> Vec<Rule> {
    vec![
        // e-readers and tablets
        Rule::new("Kindle Fire")
            .with_device(DeviceKind::Tablet)
            .with_device_name("Kindle Fire")
            .with_tier(2),
        Rule::new("Silk")
            .with_device(DeviceKind::Tablet)
            .with_device_name("Kindle Fire")
            .with_tier(2),
        Rule::new("Kindle")
            .with_device(DeviceKind::EReader)
            .with_device_name("Kindle")
            .with_tier(2),
        Rule::new("Nook")
            .with_device(DeviceKind::EReader)
            .with_device_name("Nook")
            .with_tier(2),
        Rule::new("Kobo")
            .with_device(DeviceKind::EReader)
            .with_device_name("Kobo")
            .with_tier(2),
        Rule::new("PocketBook")
            .with_device(DeviceKind::EReader)
            .with_device_name("PocketBook")
            .with_tier(2),
        Rule::new("iPad")
            .with_device(DeviceKind::Tablet)
            .with_device_name("iPad")
            .with_tier(2),
        Rule::new("PlayBook")
            .with_device(DeviceKind::Tablet)
            .with_device_name("PlayBook")
            .with_tier(2),
        // IE on Windows touch laptops, longer than `Tablet` so it wins
        Rule::new("Tablet PC")
            .with_device(DeviceKind::Desktop)
            .with_tier(2),
        Rule::new("Tablet")
            .with_device(DeviceKind::Tablet)
            .with_tier(2),
        // televisions and set-top boxes
        Rule::new("SmartTV").with_device(DeviceKind::Tv).with_tier(2),
        Rule::new("SMART-TV").with_device(DeviceKind::Tv).with_tier(2),
        Rule::new("HbbTV").with_device(DeviceKind::Tv).with_tier(2),
        Rule::new("Web0S").with_device(DeviceKind::Tv).with_tier(2),
        Rule::new("BRAVIA")
            .with_device(DeviceKind::Tv)
            .with_device_name("Bravia")
            .with_tier(2),
        Rule::new("Android TV")
            .with_device(DeviceKind::Tv)
            .with_device_name("Android TV")
            .with_tier(2),
        Rule::new("GoogleTV")
            .with_device(DeviceKind::Tv)
            .with_device_name("Google TV")
            .with_tier(2),
        Rule::new("AppleTV")
            .with_device(DeviceKind::Tv)
            .with_device_name("Apple TV")
            .with_tier(2),
        Rule::new("Apple TV")
            .with_device(DeviceKind::Tv)
            .with_device_name("Apple TV")
            .with_tier(2),
        Rule::new("CrKey")
            .with_device(DeviceKind::Tv)
            .with_device_name("Chromecast")
            .with_tier(2),
        Rule::new("Roku")
            .with_device(DeviceKind::Tv)
            .with_device_name("Roku")
            .with_tier(2),
        // consoles
        Rule::new("Xbox")
            .with_device(DeviceKind::Console)
            .with_device_name("Xbox")
            .with_tier(2),
        Rule::new("PlayStation")
            .with_device(DeviceKind::Console)
            .with_device_name("PlayStation")
            .with_tier(2),
        Rule::new("Nintendo")
            .with_device(DeviceKind::Console)
            .with_device_name("Nintendo")
            .with_tier(2),
        // phones
        Rule::new("iPhone")
            .with_device(DeviceKind::Mobile)
            .with_device_name("iPhone")
            .with_tier(1),
        Rule::new("iPod")
            .with_device(DeviceKind::Mobile)
            .with_device_name("iPod")
            .with_tier(1),
        Rule::new("Windows Phone")
            .with_device(DeviceKind::Mobile)
            .with_tier(1),
        Rule::new("BlackBerry")
            .with_device(DeviceKind::Mobile)
            .with_device_name("BlackBerry")
            .with_tier(1),
        Rule::new("BB10")
            .with_device(DeviceKind::Mobile)
            .with_device_name("BlackBerry")
            .with_tier(1),
        Rule::new("Opera Mini")
            .with_device(DeviceKind::Mobile)
            .with_tier(1),
        Rule::new("IEMobile")
            .with_device(DeviceKind::Mobile)
            .with_tier(1),
        // generic mobile hints
        Rule::new("Mobile").with_device(DeviceKind::Mobile),
        Rule::new("Android").with_device(DeviceKind::Mobile),
    ]
    .into_iter()
    .map(|rule| rule.with_version(VersionFormat::None))
    .collect()
}
