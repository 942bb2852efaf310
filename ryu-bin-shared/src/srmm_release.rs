//! Lookup of the latest Shin Ryu Mod Manager release on GitHub.

use cfg_if::cfg_if;
use regex::Regex;
#[cfg(any(target_os = "windows", target_os = "linux"))]
use self_update::backends::github::ReleaseList;
use thiserror::Error;

#[cfg(any(target_os = "windows", target_os = "linux"))]
const SRMM_REPO_OWNER: &str = "SRMM-Studio";
#[cfg(any(target_os = "windows", target_os = "linux"))]
const SRMM_REPO_NAME: &str = "ShinRyuModManager";

/// SRMM release zips carry the version in the filename.
const SRMM_ASSET_PATTERN: &str = r"(?i)ShinRyuModManager(\d+\.\d+\.\d+)";

cfg_if! {
    if #[cfg(any(target_os = "windows", target_os = "linux"))] {
        #[derive(Debug, Error)]
        pub enum ReleaseError {
            #[error("No release is available")]
            MissingRelease,
            #[error("{0}")]
            SelfUpdate(#[from] self_update::errors::Error),
        }
    }
    else {
        #[derive(Debug, Error)]
        pub enum ReleaseError {
            #[error("Not supported on the platform: {0}")]
            NotSupported(&'static str),
        }
    }
}

/// Fetch the latest SRMM release version from GitHub.
///
/// Prefers the version embedded in the asset filename, since the release tags
/// have not always matched the shipped zips; falls back to the release tag.
pub fn latest_srmm_version() -> Result<String, ReleaseError> {
    cfg_if! {
        if #[cfg(any(target_os = "windows", target_os = "linux"))] {
            let releases = ReleaseList::configure()
                .repo_owner(SRMM_REPO_OWNER)
                .repo_name(SRMM_REPO_NAME)
                .build()?
                .fetch()?;
            let release = releases.first().ok_or(ReleaseError::MissingRelease)?;
            let names: Vec<&str> = release.assets.iter().map(|asset| asset.name.as_str()).collect();
            Ok(asset_version(&names).unwrap_or_else(|| release.version.clone()))
        } else {
            Err(ReleaseError::NotSupported(std::env::consts::OS))
        }
    }
}

/// Extract the version from a list of release asset names.
#[allow(dead_code)]
fn asset_version(names: &[&str]) -> Option<String> {
    let re = Regex::new(SRMM_ASSET_PATTERN).unwrap();
    names
        .iter()
        .find_map(|name| re.captures(name))
        .map(|caps| caps[1].to_owned())
}

/// Strict greater-than on dotted version triples, component-wise.
/// Missing or malformed components count as zero; a leading `v` is ignored.
pub fn version_gt(a: &str, b: &str) -> bool {
    version_triple(a) > version_triple(b)
}

fn version_triple(version: &str) -> [u32; 3] {
    let mut parts = [0_u32; 3];
    let trimmed = version.trim().trim_start_matches('v');
    for (i, part) in trimmed.split('.').take(3).enumerate() {
        parts[i] = part.parse().unwrap_or(0);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_gt_is_component_wise() {
        assert!(version_gt("4.5.3", "4.5.2"));
        assert!(version_gt("4.6.0", "4.5.9"));
        assert!(version_gt("5.0.0", "4.9.9"));
        assert!(!version_gt("4.5.3", "4.5.3"));
        assert!(!version_gt("4.5.2", "4.5.3"));
        // Numeric, not lexicographic.
        assert!(version_gt("4.10.0", "4.9.0"));
    }

    #[test]
    fn version_gt_tolerates_partial_versions() {
        assert!(version_gt("1.0", "0.9.9"));
        assert!(version_gt("v2.0.0", "1.9.9"));
        assert!(!version_gt("", "0.0.0"));
    }

    #[test]
    fn asset_version_from_release_names() {
        assert_eq!(
            asset_version(&["ShinRyuModManager4.5.3.zip"]),
            Some("4.5.3".to_owned())
        );
        assert_eq!(
            asset_version(&["readme.txt", "shinryumodmanager10.0.1.zip"]),
            Some("10.0.1".to_owned())
        );
        assert_eq!(asset_version(&["SomeOtherTool1.2.3.zip"]), None);
        assert_eq!(asset_version(&[]), None);
    }
}
