mod info;
pub use info::{DeviceKind, UserAgent, UserAgentInfo};

mod parse;
pub use parse::{DEFAULT_MAX_USER_AGENT_LENGTH, UserAgentParser, parse_user_agent};
