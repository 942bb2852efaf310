//! The contract between a game support plugin and the mod manager host.
//!
//! The host creates an [`Organizer`] for the active game, calls the plugin's
//! [`GamePlugin::init`] once at load time, and fires
//! [`Organizer::ui_initialized`] when its interface is up. Everything the
//! plugin registers (the layout checker, settings, UI handlers) is owned by
//! the organizer from then on.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::game::{Game, GameDef};
use crate::moddata::ModDataChecker;
use crate::rmm;

/// One entry in the host's list of launchable executables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableInfo {
    pub title: String,
    pub binary: PathBuf,
    pub arguments: Vec<String>,
    pub use_shell: bool,
}

impl ExecutableInfo {
    pub fn new(title: &str, binary: PathBuf) -> Self {
        Self { title: title.to_owned(), binary, arguments: Vec::new(), use_shell: false }
    }

    pub fn with_argument(mut self, argument: &str) -> Self {
        self.arguments.push(argument.to_owned());
        self
    }

    pub fn with_shell(mut self) -> Self {
        self.use_shell = true;
        self
    }
}

/// A boolean option surfaced through the host's settings UI.
#[derive(Debug, Clone, Copy)]
pub struct PluginSetting {
    pub key: &'static str,
    pub description: &'static str,
    pub default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Activity,
}

/// A message for the host to surface to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(id: &str, kind: NotificationKind, message: String) -> Self {
        Self { id: id.to_owned(), kind, message }
    }
}

type UiHandler = Box<dyn Fn(&Organizer) -> Result<()>>;

/// Host-side state handed to plugins.
pub struct Organizer {
    game_dir: PathBuf,
    mods_dir: PathBuf,
    settings: RefCell<HashMap<String, bool>>,
    checker: Option<ModDataChecker>,
    ui_handlers: Vec<UiHandler>,
    notifications: RefCell<Vec<Notification>>,
}

impl Debug for Organizer {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Organizer")
            .field("game_dir", &self.game_dir)
            .field("mods_dir", &self.mods_dir)
            .field("settings", &self.settings)
            .field("checker", &self.checker)
            .field("ui_handlers", &self.ui_handlers.len())
            .field("notifications", &self.notifications)
            .finish()
    }
}

impl Organizer {
    /// `game_dir` is the game's install root; `mods_dir` is the host's own mod library.
    pub fn new(game_dir: PathBuf, mods_dir: PathBuf) -> Self {
        Self {
            game_dir,
            mods_dir,
            settings: RefCell::new(HashMap::new()),
            checker: None,
            ui_handlers: Vec::new(),
            notifications: RefCell::new(Vec::new()),
        }
    }

    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    pub fn mods_dir(&self) -> &Path {
        &self.mods_dir
    }

    /// Install the mod-data checker feature. Replaces any previous one.
    pub fn set_mod_data_checker(&mut self, checker: ModDataChecker) {
        self.checker = Some(checker);
    }

    pub fn mod_data_checker(&self) -> Option<&ModDataChecker> {
        self.checker.as_ref()
    }

    /// Subscribe a handler to the host's UI-initialized event.
    pub fn on_ui_initialized(&mut self, handler: impl Fn(&Organizer) -> Result<()> + 'static) {
        self.ui_handlers.push(Box::new(handler));
    }

    /// Fire the UI-initialized event. Handlers run in registration order;
    /// a failing handler becomes a warning notification rather than aborting
    /// the remaining handlers.
    pub fn ui_initialized(&self) {
        for handler in &self.ui_handlers {
            if let Err(err) = handler(self) {
                self.send_notification(Notification::new(
                    "ui-handler-failed",
                    NotificationKind::Warning,
                    format!("{err:#}"),
                ));
            }
        }
    }

    /// Register a setting's default. A value already set by the host wins.
    pub fn register_setting(&self, setting: &PluginSetting) {
        self.settings.borrow_mut().entry(setting.key.to_owned()).or_insert(setting.default);
    }

    /// Host-side override of a setting.
    pub fn set_setting(&self, key: &str, value: bool) {
        self.settings.borrow_mut().insert(key.to_owned(), value);
    }

    /// Current value of a boolean setting. Unknown keys read as `false`.
    pub fn setting(&self, key: &str) -> bool {
        self.settings.borrow().get(key).copied().unwrap_or(false)
    }

    pub fn send_notification(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }

    /// Drain the queued notifications, oldest first.
    pub fn take_notifications(&self) -> Vec<Notification> {
        self.notifications.borrow_mut().drain(..).collect()
    }
}

/// The executables every game definition provides: just the game itself.
pub fn base_executables(def: &GameDef, organizer: &Organizer) -> Vec<ExecutableInfo> {
    vec![ExecutableInfo::new(def.name, organizer.game_dir().join(def.binary_path()))]
}

/// The settings every game definition provides. None, currently.
pub fn base_settings() -> Vec<PluginSetting> {
    Vec::new()
}

/// A game support plugin, as seen by the host.
pub trait GamePlugin {
    fn def(&self) -> &'static GameDef;

    /// Called once when the host loads the plugin.
    fn init(&self, organizer: &mut Organizer) -> Result<()>;

    fn executables(&self, organizer: &Organizer) -> Vec<ExecutableInfo> {
        base_executables(self.def(), organizer)
    }

    fn settings(&self) -> Vec<PluginSetting> {
        base_settings()
    }
}

/// Support plugin for the Yakuza / Like a Dragon titles.
///
/// Near-identical across titles: the per-game variation is entirely in the
/// [`GameDef`] it is constructed from.
#[derive(Debug, Clone, Copy)]
pub struct YakuzaPlugin {
    def: &'static GameDef,
}

impl YakuzaPlugin {
    pub fn new(game: Game) -> Self {
        Self { def: game.def() }
    }
}

impl GamePlugin for YakuzaPlugin {
    fn def(&self) -> &'static GameDef {
        self.def
    }

    fn init(&self, organizer: &mut Organizer) -> Result<()> {
        for setting in self.settings() {
            organizer.register_setting(&setting);
        }
        organizer.set_mod_data_checker(ModDataChecker::new(self.def.valid_paths));
        let def = self.def;
        organizer.on_ui_initialized(move |org| rmm::notify_missing_rmm(def, org));
        let def = self.def;
        organizer.on_ui_initialized(move |org| rmm::offer_import(def, org));
        Ok(())
    }

    fn executables(&self, organizer: &Organizer) -> Vec<ExecutableInfo> {
        let mut executables = base_executables(self.def, organizer);
        let rmm_binary =
            organizer.game_dir().join(self.def.rmm_dir()).join(self.def.rmm_exe);
        executables.push(
            ExecutableInfo::new("Ryu Mod Manager", rmm_binary).with_argument(rmm::ARG_CLI),
        );
        executables
    }

    fn settings(&self) -> Vec<PluginSetting> {
        let mut settings = base_settings();
        settings.push(PluginSetting {
            key: rmm::IMPORT_MODS_PROMPT,
            description: "Check for mods to import from RMM mods folder on launch",
            default: true,
        });
        settings
    }
}
