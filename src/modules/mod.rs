pub mod config;
pub mod logging;
pub mod moderation;
pub mod warnings;

use crate::{Data, Error};
use poise::serenity_prelude as serenity;

/// Gateway event handler registered by a module.
pub type EventHandlerFn = for<'a> fn(
    &'a serenity::Context,
    &'a serenity::FullEvent,
    &'a Data,
) -> poise::BoxFuture<'a, Result<(), Error>>;

#[derive(Debug, Clone, Copy)]
pub struct ModuleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub struct Module {
    pub definition: ModuleDefinition,
    pub commands: Vec<poise::Command<Data, Error>>,
    pub event_handlers: Vec<EventHandlerFn>,
}

pub fn get_modules() -> Vec<Module> {
    vec![
        moderation::module(),
        warnings::module(),
        config::module(),
        logging::module(),
    ]
}

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    let mut all_commands = vec![];

    for mut module in get_modules() {
        let category = module.definition.id;
        for command in &mut module.commands {
            command.category = Some(category.into());
        }
        all_commands.extend(module.commands);
    }

    all_commands.push(crate::services::help::help());
    all_commands
}

pub fn definitions() -> Vec<ModuleDefinition> {
    get_modules().into_iter().map(|m| m.definition).collect()
}

pub fn event_handlers() -> Vec<EventHandlerFn> {
    get_modules()
        .into_iter()
        .flat_map(|m| m.event_handlers)
        .collect()
}
