mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use relocate::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
