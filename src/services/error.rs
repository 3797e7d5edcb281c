use crate::{Context, Data, Error};
use poise::serenity_prelude as serenity;
use tracing::error;

/// Standardized ephemeral error reply.
pub async fn send_error(ctx: &Context<'_>, message: impl Into<String>) -> Result<(), Error> {
    let embed = serenity::CreateEmbed::new()
        .title("Error")
        .description(message.into())
        .color(super::logger::LogLevel::Error.color());

    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// Framework error hook: command failures become an ephemeral embed for the
/// invoker instead of a silent log line.
pub async fn on_error(framework_error: poise::FrameworkError<'_, Data, Error>) {
    match framework_error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Command '{}' failed: {:?}", ctx.command().name, error);
            if let Err(e) = send_error(&ctx, format!("An error occurred: {error}")).await {
                error!("Failed to send error reply: {:?}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {:?}", e);
            }
        }
    }
}
