//! Helper functions for finding the install directory of the game being managed.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use steamlocate::SteamDir;

use ryu_lib::GameDef;

/// Tries to locate the game files through the Steam libraries.
/// The game's app ids are taken from its [`GameDef`].
pub fn find_game_directory_steam(def: &GameDef) -> Result<PathBuf> {
    let steamdir = SteamDir::locate()?;
    for &app_id in def.steam_ids {
        if let Some((app, library)) = steamdir.find_app(app_id)? {
            return Ok(library.resolve_app_dir(&app));
        }
    }
    bail!("Game not found in Steam library")
}

/// Check that a directory really is the game's install root.
/// The game binary doubles as the signature file.
pub fn verify_game_dir(def: &GameDef, game_dir: &Path) -> Result<()> {
    let signature = game_dir.join(def.binary_path());
    if !signature.is_file() {
        bail!(
            "{} does not look like a {} directory; {} is missing",
            game_dir.display(),
            def.name,
            def.binary
        );
    }
    Ok(())
}
