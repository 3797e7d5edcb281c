use crate::services::logger::{ACTION_COLOR, LogLevel};
use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// Bulk deletion only works on messages younger than 14 days.
const BULK_DELETE_WINDOW_SECS: i64 = 14 * 24 * 3600;

pub(crate) fn bulk_deletable(message_ts: i64, now: i64) -> bool {
    now - message_ts < BULK_DELETE_WINDOW_SECS
}

/// Clear recent messages from this channel
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_MESSAGES")]
pub async fn clear(
    ctx: Context<'_>,
    #[description = "Number of messages to check for deletion (1-100)"]
    #[min = 1]
    #[max = 100]
    amount: u8,
    #[description = "Only delete messages from this user"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let channel_id = ctx.channel_id();

    // Deletion can take a while; don't let the interaction time out
    ctx.defer_ephemeral().await?;

    let messages = channel_id
        .messages(ctx.http(), serenity::GetMessages::new().limit(amount))
        .await?;

    let now = chrono::Utc::now().timestamp();
    let mut skipped = 0usize;
    let mut ids: Vec<serenity::MessageId> = Vec::new();
    for message in &messages {
        if let Some(u) = &user {
            if message.author.id != u.id {
                continue;
            }
        }
        if bulk_deletable(message.id.created_at().unix_timestamp(), now) {
            ids.push(message.id);
        } else {
            skipped += 1;
        }
    }

    let deleted = ids.len();
    match deleted {
        0 => {}
        1 => channel_id.delete_message(ctx.http(), ids[0]).await?,
        _ => channel_id.delete_messages(ctx.http(), ids).await?,
    }

    let mut description = match &user {
        Some(u) => format!("Deleted {} message(s) from <@{}>.", deleted, u.id),
        None => format!("Deleted {} message(s).", deleted),
    };
    if skipped > 0 {
        description.push_str(&format!(
            " Skipped {skipped} message(s) older than 14 days."
        ));
    }

    let embed = serenity::CreateEmbed::new()
        .title("Messages Cleared")
        .description(description.as_str())
        .color(ACTION_COLOR);
    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    ctx.data()
        .logger
        .log_context(
            &ctx,
            LogLevel::Audit,
            "Messages cleared",
            &description,
            vec![("Channel", format!("<#{}>", channel_id))],
            user.as_ref().map(|u| u.id),
        )
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_messages_are_bulk_deletable() {
        let now = 1_700_000_000;
        assert!(bulk_deletable(now - 60, now));
        assert!(bulk_deletable(now - 13 * 24 * 3600, now));
    }

    #[test]
    fn two_week_old_messages_are_not() {
        let now = 1_700_000_000;
        assert!(!bulk_deletable(now - BULK_DELETE_WINDOW_SECS, now));
        assert!(!bulk_deletable(now - 30 * 24 * 3600, now));
    }
}
