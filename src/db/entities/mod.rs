pub mod escalation_rules;
pub mod guild_configs;
pub mod temp_bans;
pub mod warnings;
