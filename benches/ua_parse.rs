use divan::AllocProfiler;
use uasig::ua::{UserAgent, UserAgentParser, parse_user_agent};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    // Run registered benchmarks.
    divan::main();
}

const USER_AGENTS: &[&str] = &[
    "uasig/0.1",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.2478.67",
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:12.0) Gecko/20100101 Firefox/12.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:125.0) Gecko/20100101 Firefox/125.",
    "Mozilla/5.0 (Linux; Android 10; SM-G973F Build/QP1A.190711.020; wv) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/124.0.6367.82 Mobile Safari/537.36",
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
];

#[divan::bench(args = USER_AGENTS)]
fn ua_parse(ua: &str) {
    let _ = parse_user_agent(ua);
}

#[divan::bench(args = USER_AGENTS)]
fn ua_parse_header(ua: &str) {
    let _ = UserAgent::new(ua);
}

#[divan::bench]
fn ua_parse_oversized(bencher: divan::Bencher) {
    let ua = format!("Mozilla/5.0 {}", "x".repeat(64 * 1024));
    let parser = UserAgentParser::new();
    bencher.bench_local(|| parser.parse(&ua));
}
