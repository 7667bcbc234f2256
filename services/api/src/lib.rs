mod cli;
mod infra;
mod report;
mod routes;
mod server;

use firb_calculator::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
