use crate::services::logger::LogLevel;
use crate::{Data, Error};
use poise::serenity_prelude as serenity;

/// Embed field values cap out at 1024 characters.
const MAX_CONTENT_LEN: usize = 1000;

pub(crate) fn truncate_content(content: &str, max: usize) -> String {
    if content.chars().count() <= max {
        return content.to_string();
    }
    let truncated: String = content.chars().take(max).collect();
    format!("{truncated}…")
}

pub async fn handle_message_delete(
    ctx: &serenity::Context,
    guild_id: serenity::GuildId,
    channel_id: serenity::ChannelId,
    message_id: serenity::MessageId,
    data: &Data,
) -> Result<(), Error> {
    // Pull the author and content out of the client cache while we still
    // can; the guard must not live across an await.
    let cached = ctx
        .cache
        .message(channel_id, message_id)
        .map(|message| (message.author.id, message.content.clone()));

    let description = match &cached {
        Some((author_id, _)) => {
            format!("Message from <@{author_id}> deleted in <#{channel_id}>.")
        }
        None => format!("Message deleted in <#{channel_id}>."),
    };

    let mut fields = vec![("Channel", format!("<#{channel_id}>"))];
    if let Some((_, content)) = &cached {
        if !content.is_empty() {
            fields.push(("Content", truncate_content(content, MAX_CONTENT_LEN)));
        }
    }

    data.logger
        .log_action(
            &ctx.http,
            guild_id,
            LogLevel::Audit,
            "Message deleted",
            &description,
            fields,
            cached.map(|(author_id, _)| author_id),
        )
        .await
}

pub async fn handle_bulk_delete(
    ctx: &serenity::Context,
    guild_id: serenity::GuildId,
    channel_id: serenity::ChannelId,
    count: usize,
    data: &Data,
) -> Result<(), Error> {
    data.logger
        .log_action(
            &ctx.http,
            guild_id,
            LogLevel::Audit,
            "Messages bulk deleted",
            &format!("{count} messages deleted in <#{channel_id}>."),
            vec![("Channel", format!("<#{channel_id}>"))],
            None,
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_untouched() {
        assert_eq!(truncate_content("hello", 10), "hello");
    }

    #[test]
    fn long_content_is_cut_with_ellipsis() {
        let long = "a".repeat(20);
        assert_eq!(truncate_content(&long, 10), format!("{}…", "a".repeat(10)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let content = "ß".repeat(8);
        assert_eq!(truncate_content(&content, 4), format!("{}…", "ß".repeat(4)));
    }
}
