//! Checking whether a mod archive's top-level layout matches the game's data layout.
//!
//! The check only looks at the top level of the mod tree. Everything below a
//! recognized folder is the game's own business.

use std::fs::{read_dir, remove_dir, rename};
use std::path::Path;

use anyhow::{bail, Context, Result};
use phf::Set;
use serde::Serialize;

/// Outcome of a layout check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckResult {
    /// Every top-level entry is a recognized folder name.
    Valid,
    /// The content is wrapped in a single extra folder and can be normalized.
    Fixable,
    /// The layout doesn't match the game's data directory.
    Invalid,
}

/// Validates mod content against a game's folder allow-list.
///
/// Built from a [`GameDef`](crate::game::GameDef)'s `valid_paths`. Titles
/// without an allow-list accept any layout, but a single wrapper folder is
/// still reported [`CheckResult::Fixable`] so layouts normalize consistently.
#[derive(Debug, Clone, Copy)]
pub struct ModDataChecker {
    valid_paths: Option<&'static Set<&'static str>>,
}

#[derive(Debug)]
struct TopEntry {
    name: String,
    is_dir: bool,
}

impl ModDataChecker {
    pub fn new(valid_paths: Option<&'static Set<&'static str>>) -> Self {
        Self { valid_paths }
    }

    /// Classify the top level of the mod tree at `root`.
    ///
    /// Membership is exact and case-sensitive; loose files that are not in
    /// the allow-list fail the check just like folders do. An empty tree is
    /// [`CheckResult::Invalid`].
    pub fn check(&self, root: &Path) -> Result<CheckResult> {
        let entries = top_level(root)?;
        if entries.is_empty() {
            return Ok(CheckResult::Invalid);
        }

        let Some(set) = self.valid_paths else {
            // No allow-list. Accept anything, but flag a lone wrapper folder.
            if let [entry] = entries.as_slice() {
                if entry.is_dir {
                    return Ok(CheckResult::Fixable);
                }
            }
            return Ok(CheckResult::Valid);
        };

        if entries.iter().all(|entry| set.contains(entry.name.as_str())) {
            return Ok(CheckResult::Valid);
        }

        // A single unrecognized folder may be a wrapper around a valid layout.
        if let [entry] = entries.as_slice() {
            if entry.is_dir && !set.contains(entry.name.as_str()) {
                let inner = top_level(&root.join(&entry.name))?;
                if !inner.is_empty()
                    && inner.iter().all(|entry| set.contains(entry.name.as_str()))
                {
                    return Ok(CheckResult::Fixable);
                }
            }
        }

        Ok(CheckResult::Invalid)
    }

    /// The top-level entry names that are not in the allow-list.
    pub fn offending_entries(&self, root: &Path) -> Result<Vec<String>> {
        let Some(set) = self.valid_paths else {
            return Ok(Vec::new());
        };
        let offenders = top_level(root)?
            .into_iter()
            .filter(|entry| !set.contains(entry.name.as_str()))
            .map(|entry| entry.name)
            .collect();
        Ok(offenders)
    }

    /// Normalize a [`CheckResult::Fixable`] tree in place by moving the
    /// wrapper folder's contents up one level.
    pub fn fix(&self, root: &Path) -> Result<()> {
        let entries = top_level(root)?;
        let [wrapper] = entries.as_slice() else {
            bail!("expected a single wrapper folder in {}", root.display());
        };
        if !wrapper.is_dir {
            bail!("expected a single wrapper folder in {}", root.display());
        }

        // Move the wrapper aside first, in case it contains an entry with
        // the same name as the wrapper itself.
        let holding = root.join(".ryu_fixing");
        rename(root.join(&wrapper.name), &holding)
            .with_context(|| format!("could not rearrange {}", root.display()))?;
        for entry in read_dir(&holding)? {
            let entry = entry?;
            rename(entry.path(), root.join(entry.file_name()))
                .with_context(|| format!("could not rearrange {}", root.display()))?;
        }
        remove_dir(&holding)?;
        Ok(())
    }
}

/// List the top level of a directory, sorted by name for deterministic reports.
fn top_level(dir: &Path) -> Result<Vec<TopEntry>> {
    let mut entries = Vec::new();
    let iter =
        read_dir(dir).with_context(|| format!("could not read mod folder {}", dir.display()))?;
    for entry in iter {
        let entry = entry?;
        // Non-UTF8 names can't be in any allow-list; the lossy form still
        // shows up usefully in reports.
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type()?.is_dir();
        entries.push(TopEntry { name, is_dir });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
