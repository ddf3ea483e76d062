mod cli;
mod infra;
mod render;
mod routes;
mod server;

use probate_docs::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
