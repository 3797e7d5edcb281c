use crate::services::logger::LogLevel;
use crate::{Data, Error};
use poise::serenity_prelude as serenity;

pub async fn handle_member_join(
    ctx: &serenity::Context,
    member: &serenity::Member,
    data: &Data,
) -> Result<(), Error> {
    data.logger
        .log_action(
            &ctx.http,
            member.guild_id,
            LogLevel::Info,
            "Member joined",
            &format!("<@{}> joined the server.", member.user.id),
            vec![(
                "Account created",
                format!("<t:{}:R>", member.user.id.created_at().unix_timestamp()),
            )],
            Some(member.user.id),
        )
        .await
}

pub async fn handle_member_remove(
    ctx: &serenity::Context,
    guild_id: serenity::GuildId,
    user: &serenity::User,
    data: &Data,
) -> Result<(), Error> {
    data.logger
        .log_action(
            &ctx.http,
            guild_id,
            LogLevel::Info,
            "Member left",
            &format!("<@{}> left the server.", user.id),
            vec![("User", format!("{} (<@{}>)", user.name, user.id))],
            Some(user.id),
        )
        .await
}
