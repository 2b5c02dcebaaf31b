//! uasig parse command

use clap::{Args, ValueEnum};
use std::{
    ffi::{OsStr, OsString},
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};
use uasig::{
    error::{BoxError, ErrorContext as _},
    ua::{DEFAULT_MAX_USER_AGENT_LENGTH, UserAgentInfo, UserAgentParser, rules::RuleSet},
};

/// User-Agent classified when no input is given.
const SAMPLE_USER_AGENT: &str = "Mozilla/5.0 (Linux; U; en-US) AppleWebKit/528.5+ (KHTML, like Gecko, Safari/528.5+) Version/4.0 Kindle/3.0 (screen 600×800; rotate)";

#[derive(Debug, Args)]
/// classify a User-Agent string
pub struct CliCommandParse {
    /// User-Agent to classify, defaults to a Kindle e-reader sample
    ///
    /// Taken as raw bytes, it does not have to be valid UTF-8.
    #[arg(conflicts_with = "stdin", value_parser = clap::value_parser!(OsString))]
    input: Option<OsString>,

    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    /// how to print the classification result
    format: OutputFormat,

    #[arg(long, default_value_t = DEFAULT_MAX_USER_AGENT_LENGTH)]
    /// amount of bytes of a User-Agent taken into consideration,
    /// anything beyond is ignored
    max_length: usize,

    #[arg(long, value_name = "PATH")]
    /// JSON rule table to use instead of the built-in one
    rules: Option<PathBuf>,

    #[arg(long)]
    /// classify every line read from stdin, lines are taken as raw bytes
    stdin: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// human readable summary
    #[default]
    Text,
    /// `<device>;<device_name>;<os>;<browser>`
    Short,
    /// JSON object
    Json,
}

impl OutputFormat {
    fn format(self, info: &UserAgentInfo) -> Result<String, BoxError> {
        Ok(match self {
            Self::Text => info.to_string(),
            Self::Short => info.short_name(),
            Self::Json => serde_json::to_string(info).context("encode result as json")?,
        })
    }
}

/// Run the parse command.
pub fn run(cfg: CliCommandParse) -> Result<(), BoxError> {
    let mut parser = UserAgentParser::new().with_max_length(cfg.max_length);

    if let Some(path) = cfg.rules.as_deref() {
        let file = File::open(path).with_context(|| format!("open rules file {}", path.display()))?;
        let rules = RuleSet::from_json_reader(BufReader::new(file))
            .with_context(|| format!("load rules file {}", path.display()))?;
        tracing::debug!(path = %path.display(), rules = rules.len(), "use custom rule set");
        parser.set_rules(rules);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cfg.stdin {
        for line in io::stdin().lock().split(b'\n') {
            let mut line = line.context("read user agent from stdin")?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            report(&mut out, &parser, cfg.format, &line)?;
        }
    } else {
        let input = cfg
            .input
            .as_deref()
            .map_or(SAMPLE_USER_AGENT.as_bytes(), OsStr::as_encoded_bytes);
        report(&mut out, &parser, cfg.format, input)?;
    }

    out.flush().context("flush stdout")?;
    Ok(())
}

fn report(
    out: &mut impl Write,
    parser: &UserAgentParser,
    format: OutputFormat,
    input: &[u8],
) -> Result<(), BoxError> {
    let result = format.format(&parser.parse(input))?;
    writeln!(out, "input: {}", String::from_utf8_lossy(input)).context("write input")?;
    writeln!(out, "result: {result}").context("write result")?;
    Ok(())
}
