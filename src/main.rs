use anyhow::Context as _;
use clap::Parser as _;
use dotenvy::dotenv;
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{error, info};

mod db;
mod modules;
mod services;

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Publish commands. If no guild ID is provided, publish globally.
    #[arg(long, num_args = 0..)]
    publish: Option<Vec<u64>>,

    /// Clear all commands instead of publishing them.
    #[arg(long)]
    clear: bool,

    /// Rollback the specified number of migrations and run all migrations again.
    #[arg(long, num_args = 0..=1, default_missing_value = "1")]
    refresh_migrations: Option<u32>,
}

// Custom user data passed to all command functions
pub struct Data {
    pub db: DatabaseConnection,
    pub logger: Arc<services::logger::LoggerService>,
    pub escalation: Arc<services::escalation::EscalationService>,
    pub temp_ban: Arc<services::temp_ban::TempBanService>,
    pub module_definitions: Vec<modules::ModuleDefinition>,
    pub event_handlers: Vec<modules::EventHandlerFn>,
}

pub type Error = anyhow::Error;
pub type Context<'a> = poise::Context<'a, Data, Error>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting moderation bot...");

    // Establish database connection
    let db = db::establish_connection()
        .await
        .context("Failed to connect to database")?;

    // Run migrations
    use sea_orm_migration::MigratorTrait;
    if let Some(depth) = args.refresh_migrations {
        info!("Refreshing migrations (down {}, then up)...", depth);
        db::migrations::Migrator::down(&db, Some(depth))
            .await
            .context("Failed to rollback migration")?;
    }

    db::migrations::Migrator::up(&db, None)
        .await
        .context("Failed to run migrations")?;

    if args.refresh_migrations.is_some() {
        info!("Migrations refreshed successfully.");
        return Ok(());
    }

    let token = std::env::var("DISCORD_TOKEN").context("missing DISCORD_TOKEN")?;
    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILD_MODERATION
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_MEMBERS;

    // Initialize logger service
    let logger = Arc::new(services::logger::LoggerService::new(db.clone()));

    // Initialize escalation service
    let escalation = Arc::new(services::escalation::EscalationService::new(
        db.clone(),
        logger.clone(),
    ));

    // Initialize temp ban service
    let temp_ban = Arc::new(services::temp_ban::TempBanService::new(
        db.clone(),
        logger.clone(),
    ));

    let framework_options = poise::FrameworkOptions {
        commands: modules::commands(),
        event_handler: |ctx, event, framework, data| {
            Box::pin(services::event_manager::handle_event(
                ctx, event, framework, data,
            ))
        },
        on_error: |framework_error| Box::pin(services::error::on_error(framework_error)),
        ..Default::default()
    };

    // Handle command registration if requested
    if let Some(publish_args) = args.publish {
        let http = serenity::HttpBuilder::new(&token).build();
        let bot_user = http
            .get_current_user()
            .await
            .context("Failed to fetch bot user info")?;
        let application_id = serenity::ApplicationId::new(bot_user.id.get());

        info!("Fetched Application ID: {}", application_id);

        let http = serenity::HttpBuilder::new(&token)
            .application_id(application_id)
            .build();

        let empty_commands = vec![];
        let commands = if args.clear {
            &empty_commands
        } else {
            &framework_options.commands
        };

        if publish_args.is_empty() {
            if args.clear {
                info!("Clearing commands globally...");
            } else {
                info!("Registering commands globally...");
            }

            if let Err(e) = poise::builtins::register_globally(&http, commands).await {
                error!("Failed to register commands globally: {}", e);
            } else {
                info!("Global command operation successful");
            }
        } else {
            for guild_id in publish_args {
                if args.clear {
                    info!("Clearing commands in guild {}...", guild_id);
                } else {
                    info!("Registering commands in guild {}...", guild_id);
                }

                if let Err(e) = poise::builtins::register_in_guild(
                    &http,
                    commands,
                    serenity::GuildId::new(guild_id),
                )
                .await
                {
                    error!("Failed to register commands in guild {}: {}", guild_id, e);
                } else {
                    info!("Guild command operation successful for guild {}", guild_id);
                }
            }
        }
        return Ok(());
    }

    let data = Data {
        db: db.clone(),
        logger,
        escalation,
        temp_ban: temp_ban.clone(),
        module_definitions: modules::definitions(),
        event_handlers: modules::event_handlers(),
    };

    // Create the poise framework
    let framework = poise::Framework::builder()
        .options(framework_options)
        .setup(move |_ctx, _ready, _framework| Box::pin(async move { Ok(data) }))
        .build();

    // Message cache feeds the deleted-message log
    let mut cache_settings = serenity::Settings::default();
    cache_settings.max_messages = 2048;

    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .cache_settings(cache_settings)
        .await
        .context("Failed to create client")?;

    // Start unban runner
    temp_ban.start_unban_runner(client.http.clone());

    info!("Bot is ready!");
    client.start_autosharded().await.context("Client error")?;

    Ok(())
}
