use crate::db::entities::warnings;
use crate::services::logger::{ACTION_COLOR, LogLevel};
use crate::{Context, Error};
use poise::serenity_prelude as serenity;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Clear all warnings for a user
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn clearwarnings(
    ctx: Context<'_>,
    #[description = "User whose warnings to clear"] user: serenity::User,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let res = warnings::Entity::delete_many()
        .filter(warnings::Column::GuildId.eq(guild_id.get() as i64))
        .filter(warnings::Column::UserId.eq(user.id.get() as i64))
        .exec(&ctx.data().db)
        .await?;

    if res.rows_affected == 0 {
        let embed = serenity::CreateEmbed::new()
            .title("No Warnings")
            .description(format!("<@{}> has no warnings to clear.", user.id))
            .color(ACTION_COLOR);
        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        return Ok(());
    }

    let description = format!(
        "Cleared {} warning(s) for <@{}>.",
        res.rows_affected, user.id
    );

    let embed = serenity::CreateEmbed::new()
        .title("Warnings Cleared")
        .description(description.as_str())
        .color(ACTION_COLOR);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    ctx.data()
        .logger
        .log_context(
            &ctx,
            LogLevel::Audit,
            "Warnings cleared",
            &description,
            vec![],
            Some(user.id),
        )
        .await?;

    Ok(())
}
