pub mod commands;

use crate::modules::{Module, ModuleDefinition};

pub fn module() -> Module {
    Module {
        definition: ModuleDefinition {
            id: "config",
            name: "Configuration",
            description: "Log channel and escalation settings",
        },
        commands: vec![commands::setup(), commands::escalation()],
        event_handlers: vec![],
    }
}
