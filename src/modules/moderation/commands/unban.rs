use crate::services::error::send_error;
use crate::services::logger::{ACTION_COLOR, LogLevel};
use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// Unban a user from the server by their ID
#[poise::command(slash_command, guild_only, required_permissions = "BAN_MEMBERS")]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "ID of the banned user"] user_id: String,
    #[description = "Reason for the unban"] reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let parsed = user_id.trim().parse::<u64>();
    let user_id = match parsed {
        Ok(id) if id != 0 => serenity::UserId::new(id),
        _ => {
            send_error(&ctx, "Please provide a valid user ID.").await?;
            return Ok(());
        }
    };

    // Check the ban list first; the raw API rejects unbans for users who are
    // not banned with an opaque error.
    let bans = guild_id.bans(ctx.http(), None, None).await?;
    if !bans.iter().any(|ban| ban.user.id == user_id) {
        send_error(&ctx, "This user is not banned.").await?;
        return Ok(());
    }

    guild_id.unban(ctx.http(), user_id).await?;

    // Keep the unban runner from lifting a ban that no longer exists
    ctx.data()
        .temp_ban
        .cancel(guild_id.get() as i64, user_id.get() as i64)
        .await?;

    let unban_reason = reason.unwrap_or_else(|| "No reason provided".to_string());
    let description = format!("<@{user_id}> has been unbanned from the server.");

    let embed = serenity::CreateEmbed::new()
        .title("User Unbanned")
        .description(description.as_str())
        .color(ACTION_COLOR)
        .field("Reason", unban_reason.as_str(), false);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    ctx.data()
        .logger
        .log_context(
            &ctx,
            LogLevel::Audit,
            "Member unbanned",
            &description,
            vec![("Reason", unban_reason)],
            Some(user_id),
        )
        .await?;

    Ok(())
}
