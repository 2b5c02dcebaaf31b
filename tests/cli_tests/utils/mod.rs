use std::{
    ffi::OsStr,
    io::Write,
    process::{Command, Output, Stdio},
};

/// Build the `uasig` binary and return a command ready to run it.
fn uasig_command() -> Command {
    escargot::CargoBuild::new()
        .package("uasig-cli")
        .bin("uasig")
        .target_dir("./target/")
        .run()
        .unwrap()
        .command()
}

/// Run the `uasig` binary with the given arguments,
/// returning its stdout, which is expected to be successful.
pub(super) fn run(args: Vec<&str>) -> Result<String, Box<dyn std::error::Error>> {
    let output = uasig_command().args(args).output()?;
    assert!(output.status.success(), "{output:?}");
    let output = String::from_utf8(output.stdout)?;
    Ok(output)
}

/// Run the `uasig` binary with arguments that are not necessarily UTF-8,
/// returning the raw output regardless of the exit status.
pub(super) fn run_os(args: Vec<&OsStr>) -> Result<Output, Box<dyn std::error::Error>> {
    Ok(uasig_command().args(args).output()?)
}

/// Run the `uasig` binary with the given arguments and stdin,
/// returning the raw output regardless of the exit status.
pub(super) fn run_with_stdin(
    args: Vec<&str>,
    stdin: impl AsRef<[u8]>,
) -> Result<Output, Box<dyn std::error::Error>> {
    let mut child = uasig_command()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("missing stdin pipe")?
        .write_all(stdin.as_ref())?;
    Ok(child.wait_with_output()?)
}
