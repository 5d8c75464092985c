use lexrank_scribe::server::{self, telemetry, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    telemetry::init_tracing();
    server::run().await
}
