//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use drupal_component_scaffold::config::ScaffoldConfig;
use drupal_component_scaffold::defaults::MANIFEST_FILE;
use drupal_component_scaffold::handler::Handler;
use drupal_component_scaffold::output::OutputConfig;
use drupal_component_scaffold::suggestions;

use crate::commands;

/// Drupal Component Scaffold - Develop a Drupal module or theme inside a local build
#[derive(Parser, Debug)]
#[command(name = "drupal-component-scaffold")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Path to the component's composer.json
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "DRUPAL_COMPONENT_SCAFFOLD_MANIFEST",
        default_value = MANIFEST_FILE
    )]
    manifest: PathBuf,

    /// Build root directory, overriding the manifest
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "DRUPAL_COMPONENT_SCAFFOLD_BUILD_ROOT"
    )]
    build_root: Option<PathBuf>,

    /// Directory with replacement template files
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "DRUPAL_COMPONENT_SCAFFOLD_TEMPLATES"
    )]
    templates_dir: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register hooks in composer.json and set up the development build
    Scaffold(commands::scaffold::ScaffoldArgs),

    /// Register installer paths and script hooks in composer.json only
    Init(commands::init::InitArgs),

    /// Handle a Composer script event (used by the registered hooks)
    Event(commands::event::EventArgs),

    /// Show the component, its build layout and hook registration
    Info(commands::info::InfoArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Everything a command needs besides its own arguments.
pub struct Context {
    pub manifest: PathBuf,
    pub config: ScaffoldConfig,
    pub output: OutputConfig,
}

impl Context {
    /// Load the manifest and construct the one handler for this run.
    pub fn handler(&self) -> Result<Handler> {
        if !self.manifest.exists() {
            return Err(suggestions::manifest_not_found(&self.manifest));
        }
        Handler::from_manifest_path(self.config.clone(), &self.manifest)
            .map_err(suggestions::explain)
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let context = Context {
            manifest: self.manifest,
            config: ScaffoldConfig {
                build_root: self.build_root,
                templates_dir: self.templates_dir,
                ..Default::default()
            },
            output: OutputConfig::from_env_and_flag(&self.color).quiet(self.quiet),
        };

        match self.command {
            Commands::Scaffold(args) => commands::scaffold::execute(args, &context),
            Commands::Init(args) => commands::init::execute(args, &context),
            Commands::Event(args) => commands::event::execute(args, &context),
            Commands::Info(args) => commands::info::execute(args, &context),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A second initialization only happens in tests; keep the first logger.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
