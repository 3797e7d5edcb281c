pub mod events;

use crate::modules::{Module, ModuleDefinition};

pub fn module() -> Module {
    Module {
        definition: ModuleDefinition {
            id: "logging",
            name: "Logging",
            description: "Member and message events in the log channel",
        },
        commands: vec![],
        event_handlers: vec![events::handler],
    }
}
