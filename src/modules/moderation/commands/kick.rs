use crate::modules::moderation::hierarchy;
use crate::services::error::send_error;
use crate::services::logger::{ACTION_COLOR, LogLevel};
use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// Kick a user from the server
#[poise::command(slash_command, guild_only, required_permissions = "KICK_MEMBERS")]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "User to kick"] user: serenity::User,
    #[description = "Reason for the kick"] reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let Ok(member) = guild_id.member(ctx.http(), user.id).await else {
        send_error(&ctx, "That user is not a member of this server.").await?;
        return Ok(());
    };
    if !hierarchy::ensure_can_moderate(&ctx, &member, "kick").await? {
        return Ok(());
    }

    let kick_reason = reason.unwrap_or_else(|| "No reason provided".to_string());

    guild_id
        .kick_with_reason(ctx.http(), user.id, &kick_reason)
        .await?;

    let description = format!("<@{}> has been kicked from the server.", user.id);

    let embed = serenity::CreateEmbed::new()
        .title("User Kicked")
        .description(description.as_str())
        .color(ACTION_COLOR)
        .field("Reason", kick_reason.as_str(), false);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    ctx.data()
        .logger
        .log_context(
            &ctx,
            LogLevel::Audit,
            "Member kicked",
            &description,
            vec![("Reason", kick_reason)],
            Some(user.id),
        )
        .await?;

    Ok(())
}
