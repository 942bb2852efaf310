//! Integration with the companion tool, Ryu Mod Manager (RMM).
//!
//! The older titles ship with Shin Ryu Mod Manager; the Dragon Engine games
//! supported here use the plain RMM executable name. Either way the tool
//! lives in the game's exe directory and keeps its own `mods/` folder, with
//! `_externalMods` reserved for content deployed by the host.

use std::fs::{copy, create_dir_all, read_dir, remove_dir_all, rename};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use walkdir::WalkDir;

use crate::game::GameDef;
use crate::plugin::{Notification, NotificationKind, Organizer};

pub const RMM_EXE: &str = "RyuModManager.exe";
pub const SRMM_EXE: &str = "ShinRyuModManager.exe";
pub const PARLESS_ASI: &str = "YakuzaParless.asi";
pub const EXTERNAL_MODS_DIR: &str = "_externalMods";

/// Launch flag for running the tool without its UI.
pub const ARG_CLI: &str = "--cli";

/// Settings key for the import offer made at UI startup.
pub const IMPORT_MODS_PROMPT: &str = "import_mods_prompt";

#[derive(Debug, Error)]
pub enum RmmError {
    #[error("game directory {0} does not exist")]
    GameDirMissing(PathBuf),
    #[error("no RMM mods folder at {0}")]
    ModsDirMissing(PathBuf),
    #[error("import destination {0} already exists")]
    DestinationExists(PathBuf),
}

/// Presence of the companion tool's files in the game directory.
#[derive(Debug, Clone, Copy)]
pub struct RmmStatus {
    /// The mod manager executable itself.
    pub manager: bool,
    /// The ASI loader the manager depends on.
    pub parless: bool,
}

/// Full path to the companion tool executable.
pub fn rmm_exe_path(def: &GameDef, game_dir: &Path) -> PathBuf {
    game_dir.join(def.rmm_dir()).join(def.rmm_exe)
}

pub fn check_rmm(def: &GameDef, game_dir: &Path) -> bool {
    rmm_exe_path(def, game_dir).is_file()
}

pub fn rmm_status(def: &GameDef, game_dir: &Path) -> RmmStatus {
    let rmm_dir = game_dir.join(def.rmm_dir());
    RmmStatus {
        manager: rmm_dir.join(def.rmm_exe).is_file(),
        parless: rmm_dir.join(PARLESS_ASI).is_file(),
    }
}

/// UI-initialized handler: warn when the companion tool is not installed.
pub fn notify_missing_rmm(def: &'static GameDef, organizer: &Organizer) -> Result<()> {
    if !check_rmm(def, organizer.game_dir()) {
        organizer.send_notification(Notification::new(
            "rmm-missing",
            NotificationKind::Warning,
            format!(
                "{} was not found in the {} directory. Install it to load mods.",
                def.rmm_exe, def.name
            ),
        ));
    }
    Ok(())
}

/// Mods the user installed through RMM directly, i.e. the directories in the
/// tool's `mods/` folder other than the host-managed `_externalMods`.
pub fn importable_mods(def: &GameDef, game_dir: &Path) -> Result<Vec<PathBuf>, RmmError> {
    if !game_dir.is_dir() {
        return Err(RmmError::GameDirMissing(game_dir.to_path_buf()));
    }
    let mods_dir = game_dir.join(def.rmm_mods_dir());
    if !mods_dir.is_dir() {
        return Err(RmmError::ModsDirMissing(mods_dir));
    }
    let mut mods = Vec::new();
    for entry in read_dir(&mods_dir).map_err(|_| RmmError::ModsDirMissing(mods_dir.clone()))? {
        let Ok(entry) = entry else { continue };
        if !entry.path().is_dir() {
            continue;
        }
        if entry.file_name() == EXTERNAL_MODS_DIR {
            continue;
        }
        mods.push(entry.path());
    }
    mods.sort();
    Ok(mods)
}

/// UI-initialized handler: offer to import mods found in the RMM mods folder.
/// Honors the `import_mods_prompt` setting.
pub fn offer_import(def: &'static GameDef, organizer: &Organizer) -> Result<()> {
    if !organizer.setting(IMPORT_MODS_PROMPT) {
        return Ok(());
    }
    let mods = match importable_mods(def, organizer.game_dir()) {
        Ok(mods) => mods,
        // Nothing to offer when the game or the tool isn't set up yet.
        Err(RmmError::GameDirMissing(_) | RmmError::ModsDirMissing(_)) => return Ok(()),
        Err(err) => return Err(err.into()),
    };
    if mods.is_empty() {
        return Ok(());
    }
    let names: Vec<_> = mods
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    organizer.send_notification(Notification::new(
        "rmm-import-mods",
        NotificationKind::Info,
        format!(
            "Found mods in the RMM mods folder: {}. They can be imported into the mod library.",
            names.join(", ")
        ),
    ));
    Ok(())
}

/// Move the importable mods into `dest`. With `dry_run` nothing is moved.
/// Returns the names of the mods that were (or would be) imported.
pub fn import_mods(
    def: &GameDef,
    game_dir: &Path,
    dest: &Path,
    dry_run: bool,
) -> Result<Vec<String>> {
    let mods = importable_mods(def, game_dir)?;
    let mut imported = Vec::new();
    for mod_path in &mods {
        let Some(name) = mod_path.file_name() else { continue };
        let target = dest.join(name);
        if target.exists() {
            return Err(RmmError::DestinationExists(target).into());
        }
        if !dry_run {
            create_dir_all(dest)
                .with_context(|| format!("could not create {}", dest.display()))?;
            move_dir(mod_path, &target)
                .with_context(|| format!("could not import {}", mod_path.display()))?;
        }
        imported.push(name.to_string_lossy().into_owned());
    }
    Ok(imported)
}

/// Rename, with a copy-and-delete fallback for cross-device moves.
fn move_dir(src: &Path, dest: &Path) -> Result<()> {
    if rename(src, dest).is_ok() {
        return Ok(());
    }
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src)?;
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            copy(entry.path(), &target)?;
        }
    }
    remove_dir_all(src)?;
    Ok(())
}
