mod config;
mod discord;

use dotenv::dotenv;

use crate::config::Config;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let config = Config::from_env();
    discord::launch(config).await;
}
