use std::io;

use anyhow::Result;
use tracing::info;

use gambit_session::GameServer;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gambit starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    GameServer::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
