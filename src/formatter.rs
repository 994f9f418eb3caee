//! Wrapper around the external formatting tool.
//!
//! The tool receives the discovered paths on stdin, one per line, and its
//! stdout is redirected straight into the output file.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Program invoked when no other formatter is configured.
pub const DEFAULT_FORMATTER: &str = "files-to-prompt";

/// Write `paths` one per line, in the given order.
pub fn write_path_list<W: Write>(writer: &mut W, paths: &[PathBuf]) -> io::Result<()> {
    for path in paths {
        write_path(writer, path)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[cfg(unix)]
fn write_path<W: Write>(writer: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    writer.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write>(writer: &mut W, path: &Path) -> io::Result<()> {
    write!(writer, "{}", path.display())
}

/// Kill and reap a formatter that can no longer be fed.
fn abort(child: &mut Child) {
    if let Err(err) = child.kill() {
        log::debug!("unable to kill formatter: {err}");
    }
    if let Err(err) = child.wait() {
        log::warn!("unable to reap formatter: {err}");
    }
}

/// Run `program args..` with the path list on stdin, truncating `output` and
/// filling it with the program's stdout.
///
/// The output file is created before the program is spawned, so it exists
/// (empty) even when the launch fails.
pub fn pipe_to_formatter(
    program: &str,
    args: &[String],
    paths: &[PathBuf],
    output: &Path,
) -> Result<()> {
    let out_file =
        File::create(output).with_context(|| format!("unable to create output file {output:?}"))?;

    log::info!("running formatter `{program}` with args {args:?}");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::from(out_file))
        .stderr(Stdio::inherit())
        .spawn()
        .with_context(|| {
            format!("unable to launch formatter `{program}`, is it installed and on PATH?")
        })?;

    if let Some(stdin) = child.stdin.take() {
        let mut stdin = BufWriter::new(stdin);
        match write_path_list(&mut stdin, paths) {
            Ok(()) => {}
            // the formatter stopped reading; its exit status decides the outcome
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("formatter closed stdin early: {err}");
            }
            Err(err) => {
                abort(&mut child);
                return Err(err).with_context(|| format!("unable to feed paths to `{program}`"));
            }
        }
    }

    let status = child
        .wait()
        .with_context(|| format!("unable to wait for formatter `{program}`"))?;
    if !status.success() {
        bail!("formatter `{program}` exited with {status}");
    }

    Ok(())
}
