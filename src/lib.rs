#![warn(missing_debug_implementations)]

pub mod gaiden;
pub mod game;
pub mod infinite_wealth;
pub mod legacy;
pub mod moddata;
pub mod plugin;
pub mod rmm;

pub use crate::game::{Game, GameDef};
pub use crate::moddata::{CheckResult, ModDataChecker};
pub use crate::plugin::{
    base_executables, base_settings, ExecutableInfo, GamePlugin, Notification, NotificationKind,
    Organizer, PluginSetting, YakuzaPlugin,
};
