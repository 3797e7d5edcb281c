pub mod membership;
pub mod messages;

use crate::{Data, Error};
use poise::serenity_prelude as serenity;

pub fn handler<'a>(
    ctx: &'a serenity::Context,
    event: &'a serenity::FullEvent,
    data: &'a Data,
) -> poise::BoxFuture<'a, Result<(), Error>> {
    Box::pin(async move {
        match event {
            serenity::FullEvent::GuildMemberAddition { new_member, .. } => {
                membership::handle_member_join(ctx, new_member, data).await?;
            }
            serenity::FullEvent::GuildMemberRemoval { guild_id, user, .. } => {
                membership::handle_member_remove(ctx, *guild_id, user, data).await?;
            }
            serenity::FullEvent::MessageDelete {
                channel_id,
                deleted_message_id,
                guild_id,
                ..
            } => {
                if let Some(guild_id) = guild_id {
                    messages::handle_message_delete(
                        ctx,
                        *guild_id,
                        *channel_id,
                        *deleted_message_id,
                        data,
                    )
                    .await?;
                }
            }
            serenity::FullEvent::MessageDeleteBulk {
                channel_id,
                multiple_deleted_messages_ids,
                guild_id,
                ..
            } => {
                if let Some(guild_id) = guild_id {
                    messages::handle_bulk_delete(
                        ctx,
                        *guild_id,
                        *channel_id,
                        multiple_deleted_messages_ids.len(),
                        data,
                    )
                    .await?;
                }
            }
            _ => {}
        }
        Ok(())
    })
}
