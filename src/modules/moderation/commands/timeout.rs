use crate::modules::moderation::duration::{format_duration, parse_duration};
use crate::modules::moderation::hierarchy;
use crate::services::error::send_error;
use crate::services::logger::{ACTION_COLOR, LogLevel};
use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// Discord refuses timeouts longer than 28 days.
const MAX_TIMEOUT_SECS: i64 = 28 * 24 * 3600;

/// Timeout a user for a specified duration
#[poise::command(slash_command, guild_only, required_permissions = "MODERATE_MEMBERS")]
pub async fn timeout(
    ctx: Context<'_>,
    #[description = "User to timeout"] user: serenity::User,
    #[description = "Duration of the timeout (e.g. 30m, 1h, 1d)"] duration: String,
    #[description = "Reason for the timeout"] reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let mut dur = match parse_duration(&duration) {
        Some(d) if d.num_seconds() > 0 => d,
        _ => {
            send_error(
                &ctx,
                format!(
                    "Invalid duration format: `{duration}`. Use numbers followed by d, h, m or s (e.g. 30m, 1h, 1d)."
                ),
            )
            .await?;
            return Ok(());
        }
    };

    let mut capped = false;
    if dur.num_seconds() > MAX_TIMEOUT_SECS {
        dur = chrono::Duration::seconds(MAX_TIMEOUT_SECS);
        capped = true;
    }

    let Ok(member) = guild_id.member(ctx.http(), user.id).await else {
        send_error(&ctx, "That user is not a member of this server.").await?;
        return Ok(());
    };
    if !hierarchy::ensure_can_moderate(&ctx, &member, "timeout").await? {
        return Ok(());
    }

    let timeout_reason = reason.unwrap_or_else(|| "No reason provided".to_string());
    let until = chrono::Utc::now() + dur;
    let timestamp = serenity::Timestamp::from_unix_timestamp(until.timestamp())?;

    guild_id
        .edit_member(
            ctx.http(),
            user.id,
            serenity::EditMember::new()
                .disable_communication_until_datetime(timestamp)
                .audit_log_reason(&timeout_reason),
        )
        .await?;

    let mut description = format!("<@{}> has been timed out.", user.id);
    if capped {
        description.push_str(" Duration was capped at the 28-day maximum.");
    }

    let human = format_duration(dur);
    let embed = serenity::CreateEmbed::new()
        .title("User Timed Out")
        .description(description.as_str())
        .color(ACTION_COLOR)
        .field("Duration", human.as_str(), false)
        .field("Reason", timeout_reason.as_str(), false);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    ctx.data()
        .logger
        .log_context(
            &ctx,
            LogLevel::Audit,
            "Member timed out",
            &description,
            vec![("Duration", human), ("Reason", timeout_reason)],
            Some(user.id),
        )
        .await?;

    Ok(())
}
