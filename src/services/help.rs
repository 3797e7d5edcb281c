use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// List all commands, grouped by module
#[poise::command(slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let mut embed = serenity::CreateEmbed::new()
        .title("Commands")
        .color(super::logger::LogLevel::Info.color());

    for definition in &ctx.data().module_definitions {
        let mut lines = Vec::new();
        for command in &ctx.framework().options().commands {
            if command.category.as_deref() != Some(definition.id) {
                continue;
            }
            lines.push(format!(
                "`/{}` — {}",
                command.name,
                command.description.as_deref().unwrap_or("")
            ));
        }
        if !lines.is_empty() {
            embed = embed.field(
                format!("{} — {}", definition.name, definition.description),
                lines.join("\n"),
                false,
            );
        }
    }

    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}
