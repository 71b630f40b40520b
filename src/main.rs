use anyhow::Result;
use clap::Parser;
use tracing::info;

use ayursutra::cli::{Cli, Commands};
use ayursutra::config::{get_config, init_config_with_path};
use ayursutra::runtime::modes::{run_cli, run_server};
use ayursutra::system::init_logging;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config_with_path(cli.config.as_deref());

    match cli.command {
        None | Some(Commands::Serve) => {
            let config = get_config();
            // guard 需要存活到进程结束，保证日志刷盘
            let _guard = init_logging(&config.logging)?;
            info!("AyurSutra backend starting (v{})", env!("CARGO_PKG_VERSION"));
            run_server().await
        }
        Some(command) => {
            if let Err(e) = run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
