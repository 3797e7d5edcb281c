use crate::db::entities::temp_bans;
use crate::modules::moderation::duration::{format_duration, parse_duration};
use crate::modules::moderation::hierarchy;
use crate::services::error::send_error;
use crate::services::logger::{ACTION_COLOR, LogLevel};
use crate::{Context, Error};
use poise::serenity_prelude as serenity;
use sea_orm::{ActiveModelTrait, Set};

/// Ban a user from the server
#[poise::command(slash_command, guild_only, required_permissions = "BAN_MEMBERS")]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "User to ban"] user: serenity::User,
    #[description = "Duration of the ban (e.g. 1d, 1h, 10m30s); permanent if omitted"]
    duration: Option<String>,
    #[description = "Days of messages to delete (0-7)"]
    #[min = 0]
    #[max = 7]
    delete_message_days: Option<u8>,
    #[description = "Reason for the ban"] reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let duration_parsed = match &duration {
        Some(d) => match parse_duration(d) {
            Some(dur) if dur.num_seconds() > 0 => Some(dur),
            _ => {
                send_error(
                    &ctx,
                    format!(
                        "Invalid duration format: `{d}`. Use numbers followed by d, h, m or s (e.g. 30m, 1h, 1d)."
                    ),
                )
                .await?;
                return Ok(());
            }
        },
        None => None,
    };

    // The hierarchy check only applies while the target is still a member;
    // banning a departed user by ID is allowed.
    if let Ok(member) = guild_id.member(ctx.http(), user.id).await {
        if !hierarchy::ensure_can_moderate(&ctx, &member, "ban").await? {
            return Ok(());
        }
    }

    let delete_days = delete_message_days.unwrap_or(0).min(7);
    let ban_reason = reason
        .clone()
        .unwrap_or_else(|| "No reason provided".to_string());

    guild_id
        .ban_with_reason(ctx.http(), user.id, delete_days, &ban_reason)
        .await?;

    // Replace any outstanding temporary ban for this user
    ctx.data()
        .temp_ban
        .cancel(guild_id.get() as i64, user.id.get() as i64)
        .await?;

    let mut fields = vec![("Reason", ban_reason.clone())];
    let description = if let Some(dur) = duration_parsed {
        let expires_at = chrono::Utc::now() + dur;
        let model = temp_bans::ActiveModel {
            guild_id: Set(guild_id.get() as i64),
            user_id: Set(user.id.get() as i64),
            expires_at: Set(expires_at.naive_utc()),
            reason: Set(reason),
            ..Default::default()
        };
        model.insert(&ctx.data().db).await?;

        fields.push(("Duration", format_duration(dur)));
        format!(
            "<@{}> has been banned for {}.",
            user.id,
            format_duration(dur)
        )
    } else {
        format!("<@{}> has been banned from the server.", user.id)
    };

    let mut embed = serenity::CreateEmbed::new()
        .title("User Banned")
        .description(description.as_str())
        .color(ACTION_COLOR);
    for (name, value) in &fields {
        embed = embed.field(*name, value.as_str(), false);
    }
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    ctx.data()
        .logger
        .log_context(
            &ctx,
            LogLevel::Audit,
            "Member banned",
            &description,
            fields,
            Some(user.id),
        )
        .await?;

    Ok(())
}
