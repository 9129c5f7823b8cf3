use clap::{CommandFactory, Parser};
use hindsight::adapter::inbound::cli::{run, Cli};
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run::execute(cli).await {
        error!(error = %e, "Fatal error");
        eprintln!("Error: {e}");
        let code = e.exit_code();
        if code == 2 {
            eprintln!("{}", Cli::command().render_usage());
        }
        std::process::exit(code);
    }
}
