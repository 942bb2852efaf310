//! Support definition for Like a Dragon: Infinite Wealth.

pub mod tables;

use crate::game::GameDef;
use crate::rmm;

pub static DEF: GameDef = GameDef {
    name: "Like a Dragon: Infinite Wealth",
    short_name: "likeadragoninfinitewealth",
    author: "SutandoTsukai181 & traxusglobal",
    version: "1.0.0",
    steam_ids: &[2_072_450],
    exe_dir: "runtime/media",
    binary: "runtime/media/startup.exe",
    data_dir: "runtime/media/mods/_externalMods",
    rmm_exe: rmm::RMM_EXE,
    valid_paths: Some(&tables::VALID_PATHS),
};
