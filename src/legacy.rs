//! Support definitions for the titles managed through Shin Ryu Mod Manager.
//!
//! These don't enforce a top-level folder layout; any mod content is routed
//! into the external mods directory after wrapper-folder normalization.

use crate::game::GameDef;
use crate::rmm;

pub static LIKE_A_DRAGON: GameDef = GameDef {
    name: "Yakuza: Like a Dragon",
    short_name: "yakuzalikeadragon",
    author: "SutandoTsukai181",
    version: "1.0.0",
    steam_ids: &[1_235_140],
    exe_dir: "runtime/media",
    binary: "runtime/media/YakuzaLikeADragon.exe",
    data_dir: "runtime/media/mods/_externalMods",
    rmm_exe: rmm::SRMM_EXE,
    valid_paths: None,
};

pub static PIRATE_YAKUZA: GameDef = GameDef {
    name: "Like a Dragon: Pirate Yakuza in Hawaii",
    short_name: "likeadragonpirateyakuzainhawaii",
    author: "SutandoTsukai181",
    version: "1.0.0",
    steam_ids: &[3_061_810],
    exe_dir: "runtime/media",
    binary: "runtime/media/startup.exe",
    data_dir: "runtime/media/mods/_externalMods",
    rmm_exe: rmm::SRMM_EXE,
    valid_paths: None,
};

pub static YAKUZA_0: GameDef = GameDef {
    name: "Yakuza 0",
    short_name: "yakuza0",
    author: "SutandoTsukai181",
    version: "1.0.0",
    steam_ids: &[638_970],
    exe_dir: "media",
    binary: "media/Yakuza0.exe",
    data_dir: "media/mods/_externalMods",
    rmm_exe: rmm::SRMM_EXE,
    valid_paths: None,
};

pub static YAKUZA_5_REMASTERED: GameDef = GameDef {
    name: "Yakuza 5 Remastered",
    short_name: "yakuza5remastered",
    author: "SutandoTsukai181",
    version: "1.0.0",
    steam_ids: &[1_105_510],
    exe_dir: "main",
    binary: "main/Yakuza5.exe",
    data_dir: "main/mods/_externalMods",
    rmm_exe: rmm::SRMM_EXE,
    valid_paths: None,
};
