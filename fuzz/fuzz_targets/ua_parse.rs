#![no_main]

use libfuzzer_sys::fuzz_target;
use uasig::ua::{DeviceKind, UserAgentInfo, UserAgentParser, parse_user_agent};

fn check(info: &UserAgentInfo) {
    assert!(!info.browser_name.is_empty());
    assert!(!info.engine_name.is_empty());
    assert!(!info.os_name.is_empty());
    if info.device == DeviceKind::Bot {
        assert!(!info.has_browser() && !info.has_engine() && !info.has_os());
    }
}

fuzz_target!(|input: &[u8]| {
    check(&parse_user_agent(input));

    let truncated = UserAgentParser::new().with_max_length(input.len() / 2);
    check(&truncated.parse(input));
});
