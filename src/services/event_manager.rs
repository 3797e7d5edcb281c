use crate::{Data, Error};
use poise::serenity_prelude as serenity;
use tracing::{error, info};

/// Hooked into the framework as the gateway event handler. Handles process
/// lifecycle events, then hands everything to the module event handlers.
pub async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot, .. } => {
            info!("Logged in as {}", data_about_bot.user.name);
        }
        serenity::FullEvent::GuildCreate { guild, is_new, .. } => {
            if is_new.unwrap_or(false) {
                info!("Joined new guild: {} ({})", guild.name, guild.id);
            }
        }
        serenity::FullEvent::GuildDelete { incomplete, .. } => {
            info!("Left guild: {}", incomplete.id);
        }
        _ => {}
    }

    // Module dispatch. A failing handler must not starve the others.
    for handler in &data.event_handlers {
        if let Err(e) = handler(ctx, event, data).await {
            error!("Module event handler failed: {:?}", e);
        }
    }

    Ok(())
}
