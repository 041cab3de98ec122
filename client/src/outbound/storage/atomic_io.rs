//! Crash-safe replacement of a single file inside a capability directory.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Replace `path` in `dir` with `contents`.
///
/// Data goes to a hidden sibling first, is flushed to disk, then renamed over
/// the target. Readers observe either the old or the new document, never a
/// prefix. `path` must be a bare file name.
pub(crate) fn replace_file(dir: &Dir, path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} is not a bare file name"),
        ));
    };
    let staging = format!(
        ".{file_name}.{}.{}.partial",
        std::process::id(),
        SEQUENCE.fetch_add(1, Ordering::Relaxed)
    );

    let staged = stage(dir, &staging, contents).and_then(|()| promote(dir, &staging, file_name));
    if staged.is_err() {
        // The staging file is private to this call; losing it is harmless.
        drop(dir.remove_file(&staging));
    }
    staged?;

    // Directory fsync is unsupported on some platforms.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn stage(dir: &Dir, staging: &str, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(staging, &options)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(windows)]
fn promote(dir: &Dir, staging: &str, target: &str) -> io::Result<()> {
    match dir.remove_file(target) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err),
        _ => {}
    }
    dir.rename(staging, dir, target)
}

#[cfg(not(windows))]
fn promote(dir: &Dir, staging: &str, target: &str) -> io::Result<()> {
    dir.rename(staging, dir, target)
}
