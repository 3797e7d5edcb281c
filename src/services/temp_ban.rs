use crate::Error;
use crate::db::entities::temp_bans;
use crate::services::logger::{LogLevel, LoggerService};
use poise::serenity_prelude as serenity;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use tokio::time::{Duration, sleep};
use tracing::{error, info};

pub struct TempBanService {
    db: DatabaseConnection,
    logger: Arc<LoggerService>,
}

impl TempBanService {
    pub fn new(db: DatabaseConnection, logger: Arc<LoggerService>) -> Self {
        Self { db, logger }
    }

    /// Drops any outstanding temporary-ban records for a user, so a manual
    /// unban or a re-ban does not get undone by the runner later.
    pub async fn cancel(&self, guild_id: i64, user_id: i64) -> Result<u64, Error> {
        let res = temp_bans::Entity::delete_many()
            .filter(temp_bans::Column::GuildId.eq(guild_id))
            .filter(temp_bans::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Starts the background task that checks for expired temporary bans and
    /// unbans them.
    pub fn start_unban_runner(&self, http: Arc<serenity::Http>) {
        let db = self.db.clone();
        let logger = self.logger.clone();
        tokio::spawn(async move {
            info!("Temp-ban unban runner started.");
            loop {
                sleep(Duration::from_secs(60)).await;
                let now = chrono::Utc::now().naive_utc();

                let expired_bans = match temp_bans::Entity::find()
                    .filter(temp_bans::Column::ExpiresAt.lt(now))
                    .all(&db)
                    .await
                {
                    Ok(bans) => bans,
                    Err(e) => {
                        error!("Failed to fetch expired bans: {:?}", e);
                        continue;
                    }
                };

                for ban in expired_bans {
                    let guild_id = serenity::GuildId::new(ban.guild_id as u64);
                    let user_id = serenity::UserId::new(ban.user_id as u64);

                    info!(
                        "Unbanning user {} in guild {} (ban expired)",
                        user_id, guild_id
                    );

                    match guild_id.unban(&http, user_id).await {
                        Ok(()) => {
                            if let Err(e) = logger
                                .log_action(
                                    &http,
                                    guild_id,
                                    LogLevel::Info,
                                    "Temporary ban expired",
                                    &format!("<@{user_id}> has been unbanned."),
                                    vec![(
                                        "Original reason",
                                        ban.reason
                                            .clone()
                                            .unwrap_or_else(|| "No reason provided".to_string()),
                                    )],
                                    Some(user_id),
                                )
                                .await
                            {
                                error!("Failed to log expired ban for {}: {:?}", user_id, e);
                            }
                        }
                        Err(e) => {
                            // Already unbanned by hand, most likely
                            error!("Failed to unban user {}: {:?}", user_id, e);
                        }
                    }

                    // Delete from DB after unbanning (or attempting to unban)
                    if let Err(e) = temp_bans::Entity::delete_by_id(ban.id).exec(&db).await {
                        error!("Failed to delete expired ban record {}: {:?}", ban.id, e);
                    }
                }
            }
        });
    }
}
