use crate::Error;
use crate::db::entities::guild_configs;
use poise::serenity_prelude as serenity;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::warn;

/// Accent color shared by moderation action embeds.
pub const ACTION_COLOR: u32 = 0xe74c3c;

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Audit,
}

impl LogLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ️",
            LogLevel::Warn => "⚠️",
            LogLevel::Error => "❌",
            LogLevel::Audit => "📝",
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            LogLevel::Info => 0x3498db,  // Blue
            LogLevel::Warn => 0xf1c40f,  // Yellow
            LogLevel::Error => 0xe74c3c, // Red
            LogLevel::Audit => 0x95a5a6, // Gray
        }
    }
}

pub struct LoggerService {
    db: DatabaseConnection,
}

impl LoggerService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Log channel configured via /setup, if any.
    async fn log_channel(
        &self,
        guild_id: serenity::GuildId,
    ) -> Result<Option<serenity::ChannelId>, Error> {
        let config = guild_configs::Entity::find_by_id(guild_id.get() as i64)
            .one(&self.db)
            .await?;

        Ok(config
            .and_then(|c| c.log_channel_id)
            .map(|id| serenity::ChannelId::new(id as u64)))
    }

    /// Posts a structured embed to the guild's configured log channel.
    /// Does nothing when no channel is configured, and does not fail the
    /// caller when the channel has been deleted out from under us.
    pub async fn log_action(
        &self,
        http: &serenity::Http,
        guild_id: serenity::GuildId,
        level: LogLevel,
        title: &str,
        desc: &str,
        fields: Vec<(&str, String)>,
        target: Option<serenity::UserId>,
    ) -> Result<(), Error> {
        let channel_id = match self.log_channel(guild_id).await? {
            Some(id) => id,
            None => return Ok(()), // No log channel configured
        };

        let mut embed = serenity::CreateEmbed::new()
            .title(format!("{} {}", level.icon(), title))
            .description(desc)
            .color(level.color())
            .timestamp(serenity::Timestamp::now());

        for (name, value) in fields {
            embed = embed.field(name, value, false);
        }

        if let Some(user_id) = target {
            embed = embed.footer(serenity::CreateEmbedFooter::new(format!("User ID: {user_id}")));
        }

        let message = serenity::CreateMessage::new()
            .embed(embed)
            .allowed_mentions(serenity::CreateAllowedMentions::new());

        if let Err(e) = channel_id.send_message(http, message).await {
            warn!(
                "Failed to send log message to channel {} in guild {}: {:?}",
                channel_id, guild_id, e
            );
        }

        Ok(())
    }

    /// Helper to log a moderation action from a command context, attributing
    /// the invoking moderator.
    pub async fn log_context(
        &self,
        ctx: &crate::Context<'_>,
        level: LogLevel,
        title: &str,
        desc: &str,
        additional_fields: Vec<(&str, String)>,
        target: Option<serenity::UserId>,
    ) -> Result<(), Error> {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("Moderation logs are only available in guilds"))?;

        let mut fields = vec![("Moderator", format!("<@{}>", ctx.author().id))];
        fields.extend(additional_fields);

        self.log_action(ctx.http(), guild_id, level, title, desc, fields, target)
            .await
    }
}
