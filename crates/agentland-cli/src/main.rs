//! agentland-docs - Documentation templates for spec-driven development.

use agentland_cli::{commands, templates, Cli, Command, Config, Formatter, TerminalPrompter};
use agentland_core::DiskFs;
use clap::CommandFactory;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match agentland_cli::resolve(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    init_tracing();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    // Log to stderr so stdout stays clean for json/quiet output
    let filter = EnvFilter::try_from_env("AGENTLAND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> agentland_cli::Result<()> {
    // An explicit --config must load; the default location is best-effort
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring config file: {}", e);
            Config::default()
        }),
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
        }
        Some(Command::Init(args)) => {
            let source = templates::resolve_template_source(cli.templates.as_deref(), &config);
            let destination = std::env::current_dir()?;
            match &source {
                templates::TemplateSource::Embedded(_) => tracing::debug!("Using embedded templates"),
                templates::TemplateSource::Disk(path) => {
                    tracing::debug!("Template root: {}", path.display())
                }
            }

            let mut prompter = TerminalPrompter::new();
            commands::execute_init(
                args,
                &source,
                source.root(),
                &destination,
                &mut DiskFs,
                &mut prompter,
                &formatter,
            )?;
        }
    }

    Ok(())
}
