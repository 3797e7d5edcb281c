pub mod commands;

use crate::modules::{Module, ModuleDefinition};

pub fn module() -> Module {
    Module {
        definition: ModuleDefinition {
            id: "warnings",
            name: "Warnings",
            description: "Warning history with automatic escalation",
        },
        commands: vec![
            commands::warn(),
            commands::warnings(),
            commands::clearwarnings(),
        ],
        event_handlers: vec![],
    }
}
