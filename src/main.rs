use std::sync::Arc;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use serveolist::{
    config, error, info, report::Reporter, server, success, tunnel::TunnelManager, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Bind address for the HTTP server (overrides SERVER_ADDRESS)
    #[clap(long)]
    address: Option<String>,

    /// Do not open the Serveo SSH tunnel
    #[clap(long)]
    no_tunnel: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    // Required credentials are checked once, up front. The process refuses
    // to serve requests with an incomplete configuration.
    if let Err(e) = config::validate() {
        error!("{}", e);
    }
    info!("Iniciando o app...");

    let reporter = Arc::new(Reporter::new());

    let settings = match config::load_settings().await {
        Ok(settings) => settings,
        Err(e) => error!("{}", e),
    };

    let mut tunnel = None;
    if cli.no_tunnel {
        info!("Túnel Serveo desabilitado por --no-tunnel.");
    } else if let Some(domain) = settings.serveo_domain() {
        let manager = TunnelManager::new(domain, Arc::clone(&reporter));
        match manager.start().await {
            Ok(proc) => tunnel = Some((manager, proc)),
            Err(e) => error!("Cannot start Serveo tunnel. Err: {}", e),
        }
    } else {
        warning!("Nenhum domínio Serveo configurado; túnel não será aberto.");
    }

    server::start_api_server(cli.address, Arc::clone(&reporter)).await;

    // The server has drained; tear the tunnel down before exiting.
    if let Some((manager, mut proc)) = tunnel {
        if let Err(e) = manager.stop(&mut proc).await {
            error!("Cannot stop Serveo tunnel. Err: {}", e);
        }
    }

    success!("Encerrado.");
}
