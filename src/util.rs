#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{Context, Result, ensure};
use glob::glob;
use which::which;

/// Finds and returns the path to the git binary
pub fn git_path() -> Result<OsString> {
    which("git")
        .map(PathBuf::into_os_string)
        .context("Cannot find git on path")
}

/// Asks git for the short name of the branch checked out in the current
/// directory. Fails on a detached HEAD or outside a repository.
pub fn current_branch() -> Result<String> {
    branch_in(Path::new("."))
}

/// Like [`current_branch`], for the repository containing `dir`.
pub fn branch_in(dir: &Path) -> Result<String> {
    let output = Command::new(git_path()?)
        .args(["symbolic-ref", "-q", "--short", "HEAD"])
        .current_dir(dir)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .context("Failed to run git symbolic-ref")?;

    ensure!(output.status.success(), "git symbolic-ref exited with {}", output.status);

    let branch = String::from_utf8(output.stdout).context("git printed a non UTF-8 branch")?;
    Ok(branch.trim().to_string())
}

/// A glob utility function to find files matching `pattern` directly inside
/// `root_dir`, in the order the filesystem yields them
///
/// * `pattern`: a file name glob, eg. `solution.*`
/// * `root_dir`: the directory to search
pub fn find_files(pattern: &str, root_dir: &Path) -> Result<Vec<PathBuf>> {
    let root = root_dir
        .to_str()
        .context("Could not convert root_dir to string")?;
    let pattern = format!("{}/{pattern}", glob::Pattern::escape(root));

    Ok(glob(&pattern)
        .context("Could not create glob")?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect())
}

/// Returns the final component of `path` for display, or the whole path if
/// it has none
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
