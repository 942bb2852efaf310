//! Support definition for Like a Dragon Gaiden: The Man Who Erased His Name.

pub mod tables;

use crate::game::GameDef;
use crate::rmm;

pub static DEF: GameDef = GameDef {
    name: "Like a Dragon Gaiden: The Man Who Erased His Name",
    short_name: "likeadragongaiden",
    author: "SutandoTsukai181 & Piro101",
    version: "1.0.0",
    steam_ids: &[2_375_550],
    exe_dir: "runtime/media",
    // Mods don't load when launching likeadragongaiden.exe directly.
    binary: "runtime/media/startup.exe",
    data_dir: "runtime/media/mods/_externalMods",
    rmm_exe: rmm::RMM_EXE,
    valid_paths: Some(&tables::VALID_PATHS),
};
