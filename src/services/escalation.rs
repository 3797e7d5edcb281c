use crate::Error;
use crate::db::entities::escalation_rules::{self, EscalationAction};
use crate::services::logger::{LogLevel, LoggerService};
use chrono::Utc;
use poise::serenity_prelude as serenity;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

/// Ladder applied when a guild has no rules of its own.
pub const DEFAULT_LADDER: &[(i32, EscalationAction)] = &[
    (3, EscalationAction::Timeout),
    (5, EscalationAction::Kick),
    (7, EscalationAction::Ban),
];

/// Length of the automatic timeout applied at a timeout tier.
pub const AUTO_TIMEOUT_SECS: i64 = 3600;

/// A count fires a rule only on exact equality, so a member whose warnings
/// were cleared can walk the ladder again from the bottom.
pub fn resolve_action(ladder: &[(i32, EscalationAction)], count: i32) -> Option<EscalationAction> {
    ladder
        .iter()
        .find(|(threshold, _)| *threshold == count)
        .map(|(_, action)| *action)
}

pub struct EscalationService {
    db: DatabaseConnection,
    logger: Arc<LoggerService>,
}

impl EscalationService {
    pub fn new(db: DatabaseConnection, logger: Arc<LoggerService>) -> Self {
        Self { db, logger }
    }

    /// The guild's escalation ladder, sorted by threshold. Guilds without
    /// custom rules get the default 3/5/7 ladder.
    pub async fn ladder(&self, guild_id: i64) -> Result<Vec<(i32, EscalationAction)>, Error> {
        let rules = escalation_rules::Entity::find()
            .filter(escalation_rules::Column::GuildId.eq(guild_id))
            .order_by_asc(escalation_rules::Column::Threshold)
            .all(&self.db)
            .await?;

        if rules.is_empty() {
            return Ok(DEFAULT_LADDER.to_vec());
        }

        Ok(rules.into_iter().map(|r| (r.threshold, r.action)).collect())
    }

    /// Applies the matching escalation action for a member's new warning
    /// count, if any. Returns the action that was applied.
    pub async fn handle_warning_count(
        &self,
        http: &serenity::Http,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        count: i32,
    ) -> Result<Option<EscalationAction>, Error> {
        let ladder = self.ladder(guild_id.get() as i64).await?;
        let action = match resolve_action(&ladder, count) {
            Some(action) => action,
            None => return Ok(None),
        };

        let reason = format!("Automatic {} after {} warnings", action, count);

        match action {
            EscalationAction::Timeout => {
                let until = Utc::now() + chrono::Duration::seconds(AUTO_TIMEOUT_SECS);
                let timestamp = serenity::Timestamp::from_unix_timestamp(until.timestamp())?;
                guild_id
                    .edit_member(
                        http,
                        user_id,
                        serenity::EditMember::new()
                            .disable_communication_until_datetime(timestamp)
                            .audit_log_reason(&reason),
                    )
                    .await?;
            }
            EscalationAction::Kick => {
                guild_id.kick_with_reason(http, user_id, &reason).await?;
            }
            EscalationAction::Ban => {
                guild_id.ban_with_reason(http, user_id, 0, &reason).await?;
            }
        }

        self.logger
            .log_action(
                http,
                guild_id,
                LogLevel::Warn,
                "Automatic action",
                &format!("<@{user_id}> reached {count} warning(s)."),
                vec![
                    ("Action", action.to_string()),
                    ("Reason", reason),
                ],
                Some(user_id),
            )
            .await?;

        Ok(Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ladder_matches_thresholds() {
        assert_eq!(
            resolve_action(DEFAULT_LADDER, 3),
            Some(EscalationAction::Timeout)
        );
        assert_eq!(
            resolve_action(DEFAULT_LADDER, 5),
            Some(EscalationAction::Kick)
        );
        assert_eq!(resolve_action(DEFAULT_LADDER, 7), Some(EscalationAction::Ban));
    }

    #[test]
    fn counts_between_thresholds_do_nothing() {
        for count in [0, 1, 2, 4, 6, 8, 100] {
            assert_eq!(resolve_action(DEFAULT_LADDER, count), None);
        }
    }

    #[test]
    fn custom_ladder_overrides_defaults() {
        let ladder = [(2, EscalationAction::Ban)];
        assert_eq!(resolve_action(&ladder, 2), Some(EscalationAction::Ban));
        // Default tiers are gone once a guild defines its own
        assert_eq!(resolve_action(&ladder, 3), None);
    }
}
