use log::*;
use serenity::async_trait;
use serenity::client::ClientBuilder;
use serenity::model::gateway::GatewayIntents;
use serenity::model::prelude::*;
use serenity::prelude::*;

use crate::config::Config;

pub async fn launch(config: Config) {
    if let Err(err) = run(config).await {
        error!("[discord] client error: {:?}", err);
    }
}

async fn run(config: Config) -> Result<(), serenity::Error> {
    let token = config.discord_token.clone();
    let application_id = config.client_id;
    let handler = Handler { config };
    let mut client = ClientBuilder::new(&token, GatewayIntents::non_privileged())
        .application_id(application_id)
        .event_handler(handler)
        .await?;
    client.start().await
}

struct Handler {
    config: Config,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        info!("[discord] {} is connected!", ready.user.name);
        info!("[discord] serving {} guilds", ready.guilds.len());
        match self.config.transcript_log_channel {
            Some(channel) => info!("[discord] transcript log channel: {}", channel),
            None => warn!("[discord] TRANSCRIPT_LOG_ID is not set"),
        }
        match self.config.uber_tickets_channel {
            Some(channel) => info!("[discord] Uber tickets channel: {}", channel),
            None => warn!("[discord] UBER_TICKETS_CHANNEL is not set"),
        }
    }
}
