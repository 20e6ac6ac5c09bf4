//! CLI command implementations
//!
//! The serve command resolves its listening configuration in priority
//! order (--port flag, then the PORT environment variable, then the
//! default of 3000), builds the async runtime, and runs the HTTP
//! server until the process is terminated.

use std::env;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the requested command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { port } => serve(port),
    }
}

/// Start the HTTP server and serve until terminated.
pub fn serve(port_flag: Option<u16>) -> CliResult<()> {
    let config = resolve_config(port_flag)?;
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    })
}

/// Resolve the listening configuration.
///
/// An explicit --port wins over PORT; an unset or empty PORT falls back
/// to the default. A PORT that is set but not a valid port number is a
/// startup error rather than a silent default.
fn resolve_config(port_flag: Option<u16>) -> CliResult<HttpServerConfig> {
    if let Some(port) = port_flag {
        return Ok(HttpServerConfig::with_port(port));
    }

    match env::var("PORT") {
        Ok(raw) if raw.is_empty() => Ok(HttpServerConfig::default()),
        Ok(raw) => {
            let port = raw
                .parse::<u16>()
                .map_err(|_| CliError::InvalidPort(raw.clone()))?;
            Ok(HttpServerConfig::with_port(port))
        }
        Err(_) => Ok(HttpServerConfig::default()),
    }
}
