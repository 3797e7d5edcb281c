use crate::db::entities::guild_configs;
use crate::services::logger::ACTION_COLOR;
use crate::{Context, Error};
use poise::serenity_prelude as serenity;
use sea_orm::sea_query::OnConflict;
use sea_orm::{EntityTrait, Set};

/// Set up the moderation bot for this server
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn setup(
    ctx: Context<'_>,
    #[description = "Channel that receives moderation logs"]
    #[channel_types("Text")]
    log_channel: serenity::GuildChannel,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let model = guild_configs::ActiveModel {
        guild_id: Set(guild_id.get() as i64),
        log_channel_id: Set(Some(log_channel.id.get() as i64)),
    };

    guild_configs::Entity::insert(model)
        .on_conflict(
            OnConflict::column(guild_configs::Column::GuildId)
                .update_column(guild_configs::Column::LogChannelId)
                .to_owned(),
        )
        .exec(&ctx.data().db)
        .await?;

    let embed = serenity::CreateEmbed::new()
        .title("Setup Complete")
        .description(format!(
            "Moderation logs will be sent to <#{}>.",
            log_channel.id
        ))
        .color(ACTION_COLOR);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
