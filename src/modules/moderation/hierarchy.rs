use poise::serenity_prelude as serenity;

/// The hierarchy rule: a moderator may not act on a target whose top role is
/// equal to or higher than their own. The guild owner outranks everyone and
/// can never be targeted.
pub fn can_moderate(
    moderator_is_owner: bool,
    target_is_owner: bool,
    moderator_top: i64,
    target_top: i64,
) -> bool {
    if moderator_is_owner {
        return true;
    }
    if target_is_owner {
        return false;
    }
    moderator_top > target_top
}

/// Highest role position among `roles`. Members with no roles rank below
/// @everyone (position 0).
pub fn top_role_position(guild: &serenity::Guild, roles: &[serenity::RoleId]) -> i64 {
    roles
        .iter()
        .filter_map(|id| guild.roles.get(id))
        .map(|role| i64::from(role.position))
        .max()
        .unwrap_or(-1)
}

/// Checks the invoker outranks the target, reading role positions from the
/// cached guild. Synchronous so the cache guard never crosses an await.
pub fn check(
    ctx: &crate::Context<'_>,
    moderator: &serenity::Member,
    target: &serenity::Member,
) -> Result<bool, crate::Error> {
    let guild = ctx
        .guild()
        .ok_or_else(|| anyhow::anyhow!("Guild not available in cache"))?;

    Ok(can_moderate(
        moderator.user.id == guild.owner_id,
        target.user.id == guild.owner_id,
        top_role_position(&guild, &moderator.roles),
        top_role_position(&guild, &target.roles),
    ))
}

/// Command-side wrapper: verifies the invoker outranks the target and sends
/// the standard refusal when they do not. Returns false when the command
/// should bail out.
pub async fn ensure_can_moderate(
    ctx: &crate::Context<'_>,
    target: &serenity::Member,
    verb: &str,
) -> Result<bool, crate::Error> {
    let Some(moderator) = ctx.author_member().await else {
        crate::services::error::send_error(ctx, "Could not resolve your member entry.").await?;
        return Ok(false);
    };

    if !check(ctx, &moderator, target)? {
        crate::services::error::send_error(
            ctx,
            format!("You cannot {verb} someone with a role higher than or equal to yours."),
        )
        .await?;
        return Ok(false);
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_outranks_everyone() {
        assert!(can_moderate(true, false, 0, 100));
    }

    #[test]
    fn owner_cannot_be_targeted() {
        assert!(!can_moderate(false, true, 100, 0));
    }

    #[test]
    fn equal_rank_is_rejected() {
        assert!(!can_moderate(false, false, 5, 5));
    }

    #[test]
    fn higher_rank_wins() {
        assert!(can_moderate(false, false, 6, 5));
        assert!(!can_moderate(false, false, 4, 5));
    }

    #[test]
    fn roleless_members_rank_below_everyone_role() {
        // -1 (no roles) loses to 0 (@everyone-level role)
        assert!(can_moderate(false, false, 0, -1));
        assert!(!can_moderate(false, false, -1, -1));
    }
}
