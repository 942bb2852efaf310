mod gamedir;
mod ryu;
mod srmm_release;

pub use gamedir::find_game_directory_steam;
pub use ryu::run as ryu;
