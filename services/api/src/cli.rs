use crate::render::{run_kinds, run_render, RenderArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use probate_docs::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Probate Document Compiler",
    about = "Render British Columbia probate forms and letters from estate case records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render one document from a case bundle file and print its content tree
    Render(RenderArgs),
    /// List the document kinds that can be rendered
    Kinds,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Render(args) => run_render(args),
        Command::Kinds => {
            run_kinds();
            Ok(())
        }
    }
}
