mod cli;
mod demo;
mod infra;
mod routes;
mod server;
mod verses;

use decision_coach::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
