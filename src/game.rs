//! Dealing with which game a mod or a tool invocation belongs to.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use phf::Set;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::gaiden;
use crate::infinite_wealth;
use crate::legacy;

/// Static description of one supported title.
///
/// These are defined once per game and live for the whole process. The relative
/// paths are written with forward slashes and converted to platform paths by the
/// accessor methods.
#[derive(Debug)]
pub struct GameDef {
    /// Full name, as shown to the user.
    pub name: &'static str,
    /// Internal id, lowercase and without spaces.
    pub short_name: &'static str,
    /// Who maintains the support for this title.
    pub author: &'static str,
    /// Version of the support definition, not of the game.
    pub version: &'static str,
    /// Steam app ids. A game can have more than one (regional releases).
    pub steam_ids: &'static [u32],
    /// Directory holding the game executable and the mod manager, relative to the game root.
    pub exe_dir: &'static str,
    /// The executable to launch, relative to the game root.
    pub binary: &'static str,
    /// Where managed mods are deployed, relative to the game root.
    pub data_dir: &'static str,
    /// Filename of the companion mod manager executable.
    pub rmm_exe: &'static str,
    /// Permitted top-level folder names for mod content, if this title enforces a layout.
    pub valid_paths: Option<&'static Set<&'static str>>,
}

impl GameDef {
    /// Full path to the game executable, relative to the game root.
    pub fn binary_path(&self) -> PathBuf {
        join_rel(self.binary)
    }

    /// Full path to the managed mods deployment directory, relative to the game root.
    pub fn data_path(&self) -> PathBuf {
        join_rel(self.data_dir)
    }

    /// Directory where the mod manager lives, relative to the game root.
    pub fn rmm_dir(&self) -> PathBuf {
        join_rel(self.exe_dir)
    }

    /// The mod manager's own mods directory, relative to the game root.
    pub fn rmm_mods_dir(&self) -> PathBuf {
        self.rmm_dir().join("mods")
    }

    /// Whether `name` is a recognized top-level folder for this title.
    /// Titles without an allow-list accept everything.
    pub fn is_valid_path(&self, name: &str) -> bool {
        self.valid_paths.is_none_or(|set| set.contains(name))
    }
}

/// Redo a relative path so that the separators lean the correct way for the target platform.
fn join_rel(rel: &str) -> PathBuf {
    rel.split('/').collect()
}

/// Enum of the supported titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Game {
    Gaiden,
    InfiniteWealth,
    LikeADragon,
    PirateYakuza,
    Yakuza0,
    Yakuza5Remastered,
}

impl Game {
    /// The static definition for this title.
    pub fn def(self) -> &'static GameDef {
        match self {
            Game::Gaiden => &gaiden::DEF,
            Game::InfiniteWealth => &infinite_wealth::DEF,
            Game::LikeADragon => &legacy::LIKE_A_DRAGON,
            Game::PirateYakuza => &legacy::PIRATE_YAKUZA,
            Game::Yakuza0 => &legacy::YAKUZA_0,
            Game::Yakuza5Remastered => &legacy::YAKUZA_5_REMASTERED,
        }
    }

    /// Look a title up by its internal id.
    pub fn from_short_name(name: &str) -> Option<Game> {
        Game::iter().find(|game| game.def().short_name == name)
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.def().name)
    }
}
