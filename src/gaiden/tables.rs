//! Top-level folder names that make up the game's data layout.
//!
//! Taken from the shipped game's `runtime/media` directory. A mod whose
//! top-level folders are all in this set drops straight into the external
//! mods directory. The "aston" tag is the game's internal codename.

use phf::{phf_set, Set};

pub static VALID_PATHS: Set<&'static str> = phf_set! {
    "3dlut",
    "artisan",
    "asset_aston_ngen",
    "asset_aston_ngen.par",
    "auth",
    "auth_hires",
    "battle",
    "boot",
    "camera",
    "chara",
    "chara.par",
    "chara2",
    "chara2.par",
    "cubemap_aston",
    "cubemap_aston.par",
    "db.aston.de",
    "db.aston.de.par",
    "db.aston.en",
    "db.aston.en.par",
    "db.aston.es",
    "db.aston.es.par",
    "db.aston.fr",
    "db.aston.fr.par",
    "db.aston.it",
    "db.aston.it.par",
    "db.aston.ja",
    "db.aston.ja.par",
    "db.aston.ko",
    "db.aston.ko.par",
    "db.aston.pt",
    "db.aston.pt.par",
    "db.aston.ru",
    "db.aston.ru.par",
    "db.aston.zh",
    "db.aston.zh.par",
    "db.aston.zhs",
    "db.aston.zhs.par",
    "effect",
    "effect.par",
    "entity_aston",
    "entity_aston.par",
    "entity_table",
    "flood",
    "font.aston",
    "font.aston.par",
    "grass",
    "hact_aston",
    "light_anim_aston",
    "light_anim_aston.par",
    "lua",
    "lua.par",
    "map",
    "map.par",
    "minigame",
    "motion",
    "motion.par",
    "moviesd",
    "navimesh",
    "particle",
    "particle.par",
    "puid.aston",
    "reflection",
    "shader",
    "sound",
    "sound.par",
    "sound_en",
    "sound_en.par",
    "speak2",
    "stage_aston_ngen",
    "stage_common_aston",
    "stream",
    "system",
    "talk_aston",
    "talk_aston.par",
    "ui.aston.common",
    "ui.aston.common.par",
    "ui.aston.de",
    "ui.aston.de.par",
    "ui.aston.en",
    "ui.aston.en.par",
    "ui.aston.es",
    "ui.aston.es.par",
    "ui.aston.fr",
    "ui.aston.fr.par",
    "ui.aston.it",
    "ui.aston.it.par",
    "ui.aston.ja",
    "ui.aston.ja.par",
    "ui.aston.ko",
    "ui.aston.ko.par",
    "ui.aston.pt",
    "ui.aston.pt.par",
    "ui.aston.ru",
    "ui.aston.ru.par",
    "ui.aston.zh",
    "ui.aston.zh.par",
    "ui.aston.zhs",
    "ui.aston.zhs.par",
    "version",
};
