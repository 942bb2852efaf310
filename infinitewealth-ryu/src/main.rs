use anyhow::Result;

use ryu_bin_shared::ryu;
use ryu_lib::Game;

fn main() -> Result<()> {
    ryu(Game::InfiniteWealth.def(), env!("CARGO_PKG_VERSION"), "infinitewealth-ryu")
}
