//! Serve command
//!
//! Usage: courier serve [--db <PATH>] [--addr <ADDR>] [--json-logs]

use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

use courier_api::Db;
use courier_core::logging::{self, Profile};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Path to the SQLite store (created if missing)
    #[arg(long, default_value = "courier.db")]
    pub db: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:5000")]
    pub addr: SocketAddr,

    /// Emit JSON logs (production profile)
    #[arg(long)]
    pub json_logs: bool,
}

/// Execute serve command
pub fn execute(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(if args.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let db = Db::open(&args.db)?;
    let app = courier_api::router(db);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(args.addr).await?;
        tracing::info!("serving on {} (store: {})", args.addr, args.db.display());
        axum::serve(listener, app).await
    })?;

    Ok(())
}
