use crate::db::entities::escalation_rules::EscalationAction;
use crate::db::entities::warnings;
use crate::modules::moderation::hierarchy;
use crate::services::error::send_error;
use crate::services::escalation::AUTO_TIMEOUT_SECS;
use crate::services::logger::{ACTION_COLOR, LogLevel};
use crate::{Context, Error};
use poise::serenity_prelude as serenity;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use tracing::error;

/// Warn a user; escalation rules may apply an automatic action
#[poise::command(slash_command, guild_only, required_permissions = "MODERATE_MEMBERS")]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "User to warn"] user: serenity::User,
    #[description = "Reason for the warning"] reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let Ok(member) = guild_id.member(ctx.http(), user.id).await else {
        send_error(&ctx, "That user is not a member of this server.").await?;
        return Ok(());
    };
    if !hierarchy::ensure_can_moderate(&ctx, &member, "warn").await? {
        return Ok(());
    }

    let warn_reason = reason
        .clone()
        .unwrap_or_else(|| "No reason provided".to_string());

    let model = warnings::ActiveModel {
        guild_id: Set(guild_id.get() as i64),
        user_id: Set(user.id.get() as i64),
        moderator_id: Set(ctx.author().id.get() as i64),
        reason: Set(reason),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    model.insert(&ctx.data().db).await?;

    let count = warnings::Entity::find()
        .filter(warnings::Column::GuildId.eq(guild_id.get() as i64))
        .filter(warnings::Column::UserId.eq(user.id.get() as i64))
        .count(&ctx.data().db)
        .await? as i32;

    let description = format!("<@{}> has been warned.", user.id);
    let embed = serenity::CreateEmbed::new()
        .title("User Warned")
        .description(description.as_str())
        .color(ACTION_COLOR)
        .field("Reason", warn_reason.as_str(), false)
        .field("Warning Count", count.to_string(), false);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    ctx.data()
        .logger
        .log_context(
            &ctx,
            LogLevel::Audit,
            "Member warned",
            &description,
            vec![
                ("Reason", warn_reason),
                ("Warning count", count.to_string()),
            ],
            Some(user.id),
        )
        .await?;

    // Progressive discipline: the new count may trip an escalation rule.
    // An escalation failure is reported, not propagated; the warning itself
    // already landed.
    match ctx
        .data()
        .escalation
        .handle_warning_count(ctx.http(), guild_id, user.id, count)
        .await
    {
        Ok(Some(action)) => {
            let applied = match action {
                EscalationAction::Timeout => format!(
                    "<@{}> has been automatically timed out for {} after receiving {} warning(s).",
                    user.id,
                    crate::modules::moderation::duration::format_duration(
                        chrono::Duration::seconds(AUTO_TIMEOUT_SECS)
                    ),
                    count
                ),
                EscalationAction::Kick => format!(
                    "<@{}> has been automatically kicked after receiving {} warning(s).",
                    user.id, count
                ),
                EscalationAction::Ban => format!(
                    "<@{}> has been automatically banned after receiving {} warning(s).",
                    user.id, count
                ),
            };
            let auto_embed = serenity::CreateEmbed::new()
                .title("Automatic Action")
                .description(applied)
                .color(ACTION_COLOR);
            ctx.channel_id()
                .send_message(ctx.http(), serenity::CreateMessage::new().embed(auto_embed))
                .await?;
        }
        Ok(None) => {}
        Err(e) => {
            error!(
                "Failed to apply escalation for user {} in guild {}: {:?}",
                user.id, guild_id, e
            );
            let failed = serenity::CreateEmbed::new()
                .title("Automatic Action Failed")
                .description(format!(
                    "Could not apply the automatic action to <@{}>: {e}",
                    user.id
                ))
                .color(LogLevel::Error.color());
            ctx.channel_id()
                .send_message(ctx.http(), serenity::CreateMessage::new().embed(failed))
                .await?;
        }
    }

    Ok(())
}
