//! xrats :: send every xeyes window on the desktop scurrying around the screen
//!
//! Start some copies of xeyes and then run xrats. Set RUST_LOG=debug to see which windows are
//! being picked up on each frame.
use tracing_subscriber::{self, prelude::*, EnvFilter};
use xrats::{x11rb::RustConn, Config, RatManager, Result};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .init();

    let conn = RustConn::new()?;
    let manager = RatManager::new(conn, Config::default())?;

    manager.run()
}
