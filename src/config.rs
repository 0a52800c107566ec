use std::env;

use serenity::model::id::ChannelId;

pub struct Config {
    pub discord_token: String,
    pub client_id: u64,
    pub transcript_log_channel: Option<ChannelId>,
    pub uber_tickets_channel: Option<ChannelId>,
}

impl Config {
    pub fn from_env() -> Config {
        let discord_token = env::var("DISCORD_TOKEN").expect("DISCORD_TOKEN is not set");
        let client_id = env::var("CLIENT_ID")
            .expect("CLIENT_ID is not set")
            .trim()
            .parse()
            .expect("CLIENT_ID is not a valid application id");
        let transcript_log_channel = optional_channel("TRANSCRIPT_LOG_ID");
        let uber_tickets_channel = optional_channel("UBER_TICKETS_CHANNEL");

        Config {
            discord_token,
            client_id,
            transcript_log_channel,
            uber_tickets_channel,
        }
    }
}

/// Reads an optional channel id; unset and empty both yield `None`.
fn optional_channel(key: &str) -> Option<ChannelId> {
    let raw = env::var(key).ok().filter(|id| !id.trim().is_empty())?;
    let id = raw
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("{} is not a valid channel id", key));
    Some(ChannelId(id))
}
