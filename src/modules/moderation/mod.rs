pub mod commands;
pub mod duration;
pub mod hierarchy;

use crate::modules::{Module, ModuleDefinition};

pub fn module() -> Module {
    Module {
        definition: ModuleDefinition {
            id: "moderation",
            name: "Moderation",
            description: "Bans, kicks, timeouts and message cleanup",
        },
        commands: vec![
            commands::ban(),
            commands::unban(),
            commands::kick(),
            commands::timeout(),
            commands::clear(),
        ],
        event_handlers: vec![],
    }
}
