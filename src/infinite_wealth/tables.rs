//! Top-level folder names that make up the game's data layout.
//!
//! Taken from the shipped game's `runtime/media` directory. The "elvis" tag
//! is the game's internal codename.

use phf::{phf_set, Set};

pub static VALID_PATHS: Set<&'static str> = phf_set! {
    "3dlut",
    "artisan",
    "asset2_elvis_ngen.par",
    "asset_elvis_ngen.par",
    "auth",
    "auth_hires",
    "battle",
    "boot",
    "camera",
    "chara.par",
    "chara2.par",
    "cubemap2_elvis.par",
    "cubemap_elvis.par",
    "db.elvis.de.par",
    "db.elvis.en.par",
    "db.elvis.es.par",
    "db.elvis.fr.par",
    "db.elvis.it.par",
    "db.elvis.ja.par",
    "db.elvis.ko.par",
    "db.elvis.pt.par",
    "db.elvis.ru.par",
    "db.elvis.trial.de.par",
    "db.elvis.trial.en.par",
    "db.elvis.trial.es.par",
    "db.elvis.trial.fr.par",
    "db.elvis.trial.it.par",
    "db.elvis.trial.ja.par",
    "db.elvis.trial.ko.par",
    "db.elvis.trial.pt.par",
    "db.elvis.trial.ru.par",
    "db.elvis.trial.zh.par",
    "db.elvis.trial.zhs.par",
    "db.elvis.zh.par",
    "db.elvis.zhs.par",
    "effect.par",
    "entity_elvis.par",
    "entity_table",
    "flood",
    "font.elvis.par",
    "grass",
    "hact_elvis",
    "light_anim_elvis.par",
    "lua.par",
    "map.par",
    "minigame",
    "motion.par",
    "moviesd",
    "navimesh",
    "particle.par",
    "particle2.par",
    "puid.elvis",
    "reflection",
    "shader",
    "sound.par",
    "sound2_en.par",
    "sound2_zh.par",
    "sound_en.par",
    "sound_en.par.unpack",
    "sound_zh.par",
    "stage_common_elvis",
    "stage_elvis_ngen",
    "stream",
    "stream_en",
    "stream_zh",
    "system",
    "talk2_elvis.par",
    "talk_elvis.par",
    "ui.elvis.common.par",
    "ui.elvis.de.par",
    "ui.elvis.en.par",
    "ui.elvis.es.par",
    "ui.elvis.fr.par",
    "ui.elvis.it.par",
    "ui.elvis.ja.par",
    "ui.elvis.ko.par",
    "ui.elvis.pt.par",
    "ui.elvis.ru.par",
    "ui.elvis.zh.par",
    "ui.elvis.zhs.par",
    "version",
};
