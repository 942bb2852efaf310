use std::fs::{create_dir_all, File};
use std::path::Path;

use tempfile::tempdir;

use ryu_lib::rmm;
use ryu_lib::{
    base_executables, base_settings, CheckResult, Game, GamePlugin, ModDataChecker,
    NotificationKind, Organizer, YakuzaPlugin,
};

fn mkdirs(root: &Path, names: &[&str]) {
    for name in names {
        create_dir_all(root.join(name)).unwrap();
    }
}

fn touch(path: &Path) {
    create_dir_all(path.parent().unwrap()).unwrap();
    File::create(path).unwrap();
}

/// An organizer for a game installed in a fresh temp directory.
fn organizer(game: Game) -> (tempfile::TempDir, Organizer) {
    let tmp = tempdir().unwrap();
    let game_dir = tmp.path().join("game");
    let mods_dir = tmp.path().join("library");
    create_dir_all(game_dir.join(game.def().rmm_dir())).unwrap();
    create_dir_all(&mods_dir).unwrap();
    let org = Organizer::new(game_dir, mods_dir);
    (tmp, org)
}

#[test]
fn gaiden_definition() {
    let def = Game::Gaiden.def();
    assert_eq!(def.binary, "runtime/media/startup.exe");
    assert_eq!(def.steam_ids, [2_375_550]);
    assert_eq!(def.short_name, "likeadragongaiden");
    assert_eq!(def.data_dir, "runtime/media/mods/_externalMods");
    assert_eq!(Game::from_short_name("likeadragongaiden"), Some(Game::Gaiden));
}

#[test]
fn infinite_wealth_definition() {
    let def = Game::InfiniteWealth.def();
    // Same launcher as Gaiden, distinct Steam id.
    assert_eq!(def.binary, "runtime/media/startup.exe");
    assert_eq!(def.steam_ids, [2_072_450]);
    assert_ne!(def.steam_ids, Game::Gaiden.def().steam_ids);
    assert_eq!(def.short_name, "likeadragoninfinitewealth");
}

#[test]
fn legacy_definitions() {
    let def = Game::Yakuza0.def();
    assert_eq!(def.exe_dir, "media");
    assert_eq!(def.binary, "media/Yakuza0.exe");
    assert_eq!(def.steam_ids, [638_970]);
    assert_eq!(def.rmm_exe, rmm::SRMM_EXE);
    assert!(def.valid_paths.is_none());

    assert_eq!(Game::Yakuza5Remastered.def().exe_dir, "main");
    assert_eq!(
        Game::from_short_name("likeadragonpirateyakuzainhawaii"),
        Some(Game::PirateYakuza)
    );
    assert_eq!(Game::from_short_name("likeadragon8"), None);
}

#[test]
fn game_displays_as_full_name() {
    assert_eq!(
        Game::Gaiden.to_string(),
        "Like a Dragon Gaiden: The Man Who Erased His Name"
    );
    assert_eq!(Game::Yakuza0.to_string(), "Yakuza 0");
}

#[test]
fn allow_list_membership_is_exact() {
    let gaiden = Game::Gaiden.def();
    assert!(gaiden.is_valid_path("3dlut"));
    assert!(gaiden.is_valid_path("chara.par"));
    assert!(gaiden.is_valid_path("chara"));
    assert!(gaiden.is_valid_path("db.aston.zhs.par"));
    assert!(gaiden.is_valid_path("version"));
    // Case-sensitive, and no cross-game leakage.
    assert!(!gaiden.is_valid_path("Chara.par"));
    assert!(!gaiden.is_valid_path("db.elvis.en.par"));
    assert!(!gaiden.is_valid_path("savegame"));

    let iw = Game::InfiniteWealth.def();
    assert!(iw.is_valid_path("db.elvis.trial.zhs.par"));
    assert!(iw.is_valid_path("sound_en.par.unpack"));
    assert!(!iw.is_valid_path("chara"));
    assert!(!iw.is_valid_path("db.aston.en.par"));
}

#[test]
fn executables_append_one_rmm_entry() {
    for game in [Game::Gaiden, Game::InfiniteWealth] {
        let (_tmp, org) = organizer(game);
        let plugin = YakuzaPlugin::new(game);

        let base = base_executables(game.def(), &org);
        let executables = plugin.executables(&org);
        assert_eq!(executables.len(), base.len() + 1);
        assert_eq!(&executables[..base.len()], &base[..]);

        let rmm_entry = executables.last().unwrap();
        assert_eq!(rmm_entry.title, "Ryu Mod Manager");
        assert_eq!(rmm_entry.arguments, vec!["--cli"]);
        assert_eq!(
            rmm_entry.binary,
            org.game_dir().join("runtime").join("media").join("RyuModManager.exe")
        );
    }
}

#[test]
fn settings_append_import_prompt() {
    let plugin = YakuzaPlugin::new(Game::Gaiden);
    let settings = plugin.settings();
    assert_eq!(settings.len(), base_settings().len() + 1);

    let setting = settings.last().unwrap();
    assert_eq!(setting.key, "import_mods_prompt");
    assert_eq!(
        setting.description,
        "Check for mods to import from RMM mods folder on launch"
    );
    assert!(setting.default);
}

#[test]
fn checker_accepts_matching_layout() {
    let tmp = tempdir().unwrap();
    mkdirs(tmp.path(), &["chara.par", "sound", "db.aston.en.par"]);
    let checker = ModDataChecker::new(Game::Gaiden.def().valid_paths);
    assert_eq!(checker.check(tmp.path()).unwrap(), CheckResult::Valid);
}

#[test]
fn checker_rejects_unknown_entries() {
    let tmp = tempdir().unwrap();
    mkdirs(tmp.path(), &["chara.par", "nonsense"]);
    let checker = ModDataChecker::new(Game::Gaiden.def().valid_paths);
    assert_eq!(checker.check(tmp.path()).unwrap(), CheckResult::Invalid);
    assert_eq!(checker.offending_entries(tmp.path()).unwrap(), vec!["nonsense"]);
}

#[test]
fn checker_rejects_empty_and_loose_files() {
    let checker = ModDataChecker::new(Game::Gaiden.def().valid_paths);

    let empty = tempdir().unwrap();
    assert_eq!(checker.check(empty.path()).unwrap(), CheckResult::Invalid);

    let loose = tempdir().unwrap();
    mkdirs(loose.path(), &["chara.par"]);
    touch(&loose.path().join("readme.txt"));
    assert_eq!(checker.check(loose.path()).unwrap(), CheckResult::Invalid);
    assert_eq!(checker.offending_entries(loose.path()).unwrap(), vec!["readme.txt"]);
}

#[test]
fn checker_fixes_wrapper_folder() {
    let tmp = tempdir().unwrap();
    mkdirs(&tmp.path().join("My Cool Mod"), &["chara.par", "sound"]);
    let checker = ModDataChecker::new(Game::Gaiden.def().valid_paths);

    assert_eq!(checker.check(tmp.path()).unwrap(), CheckResult::Fixable);
    checker.fix(tmp.path()).unwrap();
    assert_eq!(checker.check(tmp.path()).unwrap(), CheckResult::Valid);
    assert!(!tmp.path().join("My Cool Mod").exists());
    assert!(tmp.path().join("chara.par").is_dir());
    assert!(tmp.path().join("sound").is_dir());
}

#[test]
fn checker_does_not_unwrap_invalid_content() {
    let tmp = tempdir().unwrap();
    mkdirs(&tmp.path().join("My Cool Mod"), &["chara.par", "garbage"]);
    let checker = ModDataChecker::new(Game::Gaiden.def().valid_paths);
    assert_eq!(checker.check(tmp.path()).unwrap(), CheckResult::Invalid);
}

#[test]
fn checker_without_allow_list() {
    let checker = ModDataChecker::new(None);

    let multi = tempdir().unwrap();
    mkdirs(multi.path(), &["anything", "goes"]);
    assert_eq!(checker.check(multi.path()).unwrap(), CheckResult::Valid);
    assert!(checker.offending_entries(multi.path()).unwrap().is_empty());

    let wrapped = tempdir().unwrap();
    mkdirs(&wrapped.path().join("Wrapper"), &["anything"]);
    assert_eq!(checker.check(wrapped.path()).unwrap(), CheckResult::Fixable);

    let empty = tempdir().unwrap();
    assert_eq!(checker.check(empty.path()).unwrap(), CheckResult::Invalid);
}

#[test]
fn fix_survives_wrapper_named_like_its_content() {
    // A wrapper whose single child has the same name must not collide.
    let tmp = tempdir().unwrap();
    touch(&tmp.path().join("Foo").join("Foo").join("mod.ini"));
    let checker = ModDataChecker::new(None);

    assert_eq!(checker.check(tmp.path()).unwrap(), CheckResult::Fixable);
    checker.fix(tmp.path()).unwrap();
    assert!(tmp.path().join("Foo").join("mod.ini").is_file());
}

#[test]
fn init_installs_checker_and_warns_about_missing_rmm() {
    let (_tmp, mut org) = organizer(Game::Gaiden);
    let plugin = YakuzaPlugin::new(Game::Gaiden);
    plugin.init(&mut org).unwrap();

    assert!(org.mod_data_checker().is_some());
    assert!(org.setting(rmm::IMPORT_MODS_PROMPT));

    org.ui_initialized();
    let notifications = org.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].id, "rmm-missing");
    assert_eq!(notifications[0].kind, NotificationKind::Warning);
    assert!(notifications[0].message.contains("RyuModManager.exe"));
}

#[test]
fn ui_initialized_offers_import_of_rmm_mods() {
    let (_tmp, mut org) = organizer(Game::Gaiden);
    let def = Game::Gaiden.def();
    touch(&rmm::rmm_exe_path(def, org.game_dir()));
    let mods_dir = org.game_dir().join(def.rmm_mods_dir());
    mkdirs(&mods_dir, &["_externalMods", "CoolMod"]);

    let plugin = YakuzaPlugin::new(Game::Gaiden);
    plugin.init(&mut org).unwrap();
    org.ui_initialized();

    let notifications = org.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].id, "rmm-import-mods");
    assert_eq!(notifications[0].kind, NotificationKind::Info);
    assert!(notifications[0].message.contains("CoolMod"));
    assert!(!notifications[0].message.contains("_externalMods"));
}

#[test]
fn import_prompt_setting_disables_the_offer() {
    let (_tmp, mut org) = organizer(Game::Gaiden);
    let def = Game::Gaiden.def();
    touch(&rmm::rmm_exe_path(def, org.game_dir()));
    mkdirs(&org.game_dir().join(def.rmm_mods_dir()), &["CoolMod"]);

    let plugin = YakuzaPlugin::new(Game::Gaiden);
    plugin.init(&mut org).unwrap();
    org.set_setting(rmm::IMPORT_MODS_PROMPT, false);
    org.ui_initialized();

    assert!(org.take_notifications().is_empty());
}

#[test]
fn rmm_status_reports_both_files() {
    let (_tmp, org) = organizer(Game::Gaiden);
    let def = Game::Gaiden.def();

    let status = rmm::rmm_status(def, org.game_dir());
    assert!(!status.manager);
    assert!(!status.parless);
    assert!(!rmm::check_rmm(def, org.game_dir()));

    touch(&rmm::rmm_exe_path(def, org.game_dir()));
    touch(&org.game_dir().join(def.rmm_dir()).join(rmm::PARLESS_ASI));

    let status = rmm::rmm_status(def, org.game_dir());
    assert!(status.manager);
    assert!(status.parless);
    assert!(rmm::check_rmm(def, org.game_dir()));
}

#[test]
fn import_moves_mods_into_the_library() {
    let (_tmp, org) = organizer(Game::Gaiden);
    let def = Game::Gaiden.def();
    let mods_dir = org.game_dir().join(def.rmm_mods_dir());
    mkdirs(&mods_dir, &["_externalMods"]);
    touch(&mods_dir.join("CoolMod").join("chara.par").join("data.bin"));

    let imported = rmm::import_mods(def, org.game_dir(), org.mods_dir(), false).unwrap();
    assert_eq!(imported, vec!["CoolMod"]);
    assert!(org.mods_dir().join("CoolMod").join("chara.par").join("data.bin").is_file());
    assert!(!mods_dir.join("CoolMod").exists());
    // The deployment directory is never an import candidate.
    assert!(mods_dir.join("_externalMods").is_dir());
}

#[test]
fn import_dry_run_moves_nothing() {
    let (_tmp, org) = organizer(Game::Gaiden);
    let def = Game::Gaiden.def();
    let mods_dir = org.game_dir().join(def.rmm_mods_dir());
    touch(&mods_dir.join("CoolMod").join("mod.ini"));

    let imported = rmm::import_mods(def, org.game_dir(), org.mods_dir(), true).unwrap();
    assert_eq!(imported, vec!["CoolMod"]);
    assert!(mods_dir.join("CoolMod").is_dir());
    assert!(!org.mods_dir().join("CoolMod").exists());
}

#[test]
fn import_refuses_to_overwrite() {
    let (_tmp, org) = organizer(Game::Gaiden);
    let def = Game::Gaiden.def();
    touch(&org.game_dir().join(def.rmm_mods_dir()).join("CoolMod").join("mod.ini"));
    mkdirs(org.mods_dir(), &["CoolMod"]);

    let result = rmm::import_mods(def, org.game_dir(), org.mods_dir(), false);
    assert!(result.is_err());
}

#[test]
fn importable_mods_requires_the_mods_folder() {
    let (_tmp, org) = organizer(Game::Gaiden);
    let def = Game::Gaiden.def();
    assert!(matches!(
        rmm::importable_mods(def, org.game_dir()),
        Err(rmm::RmmError::ModsDirMissing(_))
    ));
}
