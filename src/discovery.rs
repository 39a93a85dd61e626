#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Works out which assignments the current checkout holds.
//!
//! Candidates come from three places, in order: the branch name CI exposes
//! through the environment, the local git branch, and the name of the
//! working directory. Each probe is captured as an `Option` in [`Probes`] so
//! that building the [`AssignmentMap`] is a pure function of what was seen.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    constants::{ASSIGNMENT_PREFIX, BRANCH_ENV_VARS},
    util,
};

/// Returns true if `name` follows the assignment naming convention.
pub fn is_assignment(name: &str) -> bool {
    name.starts_with(ASSIGNMENT_PREFIX)
}

/// Raw results of every discovery probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Probes {
    /// Branch names read from CI environment variables, in variable order.
    pub ci_branches:    Vec<Option<String>>,
    /// Branch checked out in the local repository, if git could tell.
    pub vcs_branch:     Option<String>,
    /// Name of the current working directory, if it has one.
    pub directory_name: Option<String>,
}

impl Probes {
    /// Runs every probe against the live process environment. A probe that
    /// fails is recorded as `None`; it never stops the others.
    pub fn from_environment() -> Self {
        let ci_branches = BRANCH_ENV_VARS
            .iter()
            .map(|var| {
                let value = std::env::var(var).ok();
                tracing::debug!("{var} = {value:?}");
                value
            })
            .collect();

        let vcs_branch = match util::current_branch() {
            Ok(branch) => Some(branch),
            Err(e) => {
                tracing::debug!("No git branch: {e:#}");
                None
            }
        };

        let directory_name = match std::env::current_dir() {
            Ok(dir) => dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            Err(e) => {
                tracing::warn!("Could not read the current directory: {e}");
                None
            }
        };

        Self {
            ci_branches,
            vcs_branch,
            directory_name,
        }
    }
}

/// Assignments to submit, keyed by identifier and iterated in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentMap(BTreeMap<String, PathBuf>);

impl AssignmentMap {
    /// Builds the map from probe results. Branch names map to a directory of
    /// the same name; the working directory maps to `.` and, being the most
    /// concrete location, replaces a branch entry with the same identifier.
    pub fn discover(probes: &Probes) -> Self {
        let mut map = Self::default();

        let branches = probes
            .ci_branches
            .iter()
            .chain(std::iter::once(&probes.vcs_branch))
            .flatten();
        for branch in branches {
            let branch = branch.trim();
            map.insert(branch, branch);
        }

        if let Some(name) = &probes.directory_name {
            map.insert(name.trim(), ".");
        }

        tracing::debug!("Discovered assignments: {:?}", map.0);
        map
    }

    /// Records `name` at `path` if it is a valid assignment identifier,
    /// replacing any earlier path. Returns whether `name` was accepted.
    pub fn insert(&mut self, name: &str, path: impl Into<PathBuf>) -> bool {
        if !is_assignment(name) {
            if !name.is_empty() {
                tracing::debug!("Skipping {name:?}: not an assignment");
            }
            return false;
        }

        self.0.insert(name.to_string(), path.into());
        true
    }

    /// True when nothing submittable was found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of discovered assignments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Path recorded for `assignment`, if any.
    pub fn get(&self, assignment: &str) -> Option<&Path> {
        self.0.get(assignment).map(PathBuf::as_path)
    }

    /// Iterates `(identifier, path)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.0
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }
}
