#![deny(warnings)]
#![deny(rust_2018_idioms)]

use tracing_subscriber::EnvFilter;
use web_api::{settings::Settings, startup::App};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new().unwrap();

    let app = App::build(&settings).await;

    app.run().await.unwrap();
}
