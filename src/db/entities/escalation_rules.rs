use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Action applied automatically when a member's warning count reaches a
/// rule's threshold.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    poise::ChoiceParameter,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum EscalationAction {
    #[sea_orm(string_value = "timeout")]
    Timeout,
    #[sea_orm(string_value = "kick")]
    Kick,
    #[sea_orm(string_value = "ban")]
    Ban,
}

impl std::fmt::Display for EscalationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EscalationAction::Timeout => write!(f, "timeout"),
            EscalationAction::Kick => write!(f, "kick"),
            EscalationAction::Ban => write!(f, "ban"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Eq)]
#[sea_orm(table_name = "escalation_rules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub threshold: i32,
    pub action: EscalationAction,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
