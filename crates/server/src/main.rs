use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
    sync::Arc,
};

use clap::Parser;
use server::{cli::Cli, AppState};
use shared::*;
use tokio::net::TcpListener;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    load_dotenv()?;
    configure_tracing()?;

    let args = Arc::new(Cli::parse());
    debug!(?args);

    let socket = SocketAddr::new(IpAddr::from_str(&args.bind_addr)?, args.port);
    let app = server::app(AppState::from_args(args))?;

    let listener = TcpListener::bind(socket).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
