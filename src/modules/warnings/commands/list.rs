use crate::db::entities::warnings as warning_entries;
use crate::services::logger::ACTION_COLOR;
use crate::{Context, Error};
use poise::serenity_prelude as serenity;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

/// Embeds hold at most 25 fields.
const MAX_LISTED: usize = 25;

/// Number of leading entries to drop so the newest MAX_LISTED remain.
pub(crate) fn listing_skip(total: usize) -> usize {
    total.saturating_sub(MAX_LISTED)
}

/// View warnings for a user
#[poise::command(slash_command, guild_only, required_permissions = "MODERATE_MEMBERS")]
pub async fn warnings(
    ctx: Context<'_>,
    #[description = "User whose warnings to view"] user: serenity::User,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let rows = warning_entries::Entity::find()
        .filter(warning_entries::Column::GuildId.eq(guild_id.get() as i64))
        .filter(warning_entries::Column::UserId.eq(user.id.get() as i64))
        .order_by_asc(warning_entries::Column::CreatedAt)
        .all(&ctx.data().db)
        .await?;

    if rows.is_empty() {
        let embed = serenity::CreateEmbed::new()
            .title("No Warnings")
            .description(format!("<@{}> has no warnings.", user.id))
            .color(ACTION_COLOR);
        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        return Ok(());
    }

    let total = rows.len();
    let skip = listing_skip(total);

    let mut description = format!("<@{}> has {} warning(s).", user.id, total);
    if skip > 0 {
        description.push_str(&format!(" Showing the most recent {MAX_LISTED}."));
    }

    let mut embed = serenity::CreateEmbed::new()
        .title(format!("Warnings for {}", user.name))
        .description(description)
        .color(ACTION_COLOR);

    for (i, warning) in rows.iter().enumerate().skip(skip) {
        embed = embed.field(
            format!("Warning {}", i + 1),
            format!(
                "**Reason:** {}\n**Moderator:** <@{}>\n**Date:** {}",
                warning.reason.as_deref().unwrap_or("No reason provided"),
                warning.moderator_id,
                warning.created_at.format("%Y-%m-%d %H:%M UTC"),
            ),
            false,
        );
    }

    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_histories_are_shown_in_full() {
        assert_eq!(listing_skip(0), 0);
        assert_eq!(listing_skip(3), 0);
        assert_eq!(listing_skip(25), 0);
    }

    #[test]
    fn long_histories_keep_the_newest_entries() {
        assert_eq!(listing_skip(26), 1);
        assert_eq!(listing_skip(100), 75);
    }
}
