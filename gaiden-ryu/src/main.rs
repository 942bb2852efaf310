use anyhow::Result;

use ryu_bin_shared::ryu;
use ryu_lib::Game;

fn main() -> Result<()> {
    ryu(Game::Gaiden.def(), env!("CARGO_PKG_VERSION"), "gaiden-ryu")
}
