use crate::db::entities::escalation_rules::{self, EscalationAction};
use crate::services::escalation::DEFAULT_LADDER;
use crate::services::logger::ACTION_COLOR;
use crate::{Context, Error};
use poise::serenity_prelude as serenity;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

/// Manage automatic actions taken at warning thresholds
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    subcommands("set", "remove", "list")
)]
pub async fn escalation(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Set the action taken when a member reaches a warning count
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn set(
    ctx: Context<'_>,
    #[description = "Warning count that triggers the action"]
    #[min = 1]
    #[max = 100]
    threshold: i32,
    #[description = "Action to apply"] action: EscalationAction,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let model = escalation_rules::ActiveModel {
        guild_id: Set(guild_id.get() as i64),
        threshold: Set(threshold),
        action: Set(action),
    };

    escalation_rules::Entity::insert(model)
        .on_conflict(
            OnConflict::columns([
                escalation_rules::Column::GuildId,
                escalation_rules::Column::Threshold,
            ])
            .update_column(escalation_rules::Column::Action)
            .to_owned(),
        )
        .exec(&ctx.data().db)
        .await?;

    let embed = serenity::CreateEmbed::new()
        .title("Escalation Rule Set")
        .description(format!(
            "Members will now be {} at {} warning(s). The default ladder no longer applies to this server.",
            past_tense(action),
            threshold
        ))
        .color(ACTION_COLOR);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Remove the rule at a warning count
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn remove(
    ctx: Context<'_>,
    #[description = "Warning count whose rule to remove"]
    #[min = 1]
    #[max = 100]
    threshold: i32,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let res = escalation_rules::Entity::delete_by_id((guild_id.get() as i64, threshold))
        .exec(&ctx.data().db)
        .await?;

    let description = if res.rows_affected > 0 {
        format!("Removed the escalation rule at {threshold} warning(s).")
    } else {
        format!("No escalation rule exists at {threshold} warning(s).")
    };

    let embed = serenity::CreateEmbed::new()
        .title("Escalation Rules")
        .description(description)
        .color(ACTION_COLOR);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Show the escalation ladder for this server
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn list(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = ctx.guild_id().unwrap();

    let rules = escalation_rules::Entity::find()
        .filter(escalation_rules::Column::GuildId.eq(guild_id.get() as i64))
        .order_by_asc(escalation_rules::Column::Threshold)
        .all(&ctx.data().db)
        .await?;

    let (ladder, footnote): (Vec<(i32, EscalationAction)>, &str) = if rules.is_empty() {
        (DEFAULT_LADDER.to_vec(), "This server uses the default ladder.")
    } else {
        (
            rules.into_iter().map(|r| (r.threshold, r.action)).collect(),
            "This server uses custom rules.",
        )
    };

    let lines: Vec<String> = ladder
        .iter()
        .map(|(threshold, action)| format!("{threshold} warning(s) → {action}"))
        .collect();

    let embed = serenity::CreateEmbed::new()
        .title("Escalation Ladder")
        .description(format!("{}\n\n{}", lines.join("\n"), footnote))
        .color(ACTION_COLOR);
    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

fn past_tense(action: EscalationAction) -> &'static str {
    match action {
        EscalationAction::Timeout => "timed out",
        EscalationAction::Kick => "kicked",
        EscalationAction::Ban => "banned",
    }
}
