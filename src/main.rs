use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use boardkit::{
    board_from_config, draw_completion, init_logging, offset_from_config, shape_prompt,
    sketch_prompt, Config, LogFormat, Materializer, TemplateCategory, TemplateLibrary, BUILD_DATE,
    VERSION,
};
use clap::{Parser, Subcommand};

/// Turn AI completions into whiteboard shapes
#[derive(Parser, Debug)]
#[command(name = "boardkit", version, about, long_about = None)]
struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log output format: pretty or json
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpret a completion and print the resulting board as JSON
    Draw {
        /// File holding the completion text; reads stdin when omitted
        file: Option<PathBuf>,

        /// Print interpreter diagnostics to stderr
        #[arg(long)]
        diagnostics: bool,
    },
    /// Apply a built-in template to an empty board and print it as JSON
    Template {
        /// Template id, e.g. "kanban"
        id: String,
    },
    /// List built-in templates
    Templates {
        /// Only list templates in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the prompt to send to a model
    Prompt {
        /// What the user asked for
        request: Option<String>,

        /// Build the sketch-interpretation prompt instead
        #[arg(long)]
        sketch: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load default config".to_string(),
    })?;

    let log_format = cli.log_format.unwrap_or(config.logging.format);
    init_logging(log_format, &config.logging.level)?;
    tracing::debug!("boardkit {} (built {})", VERSION, BUILD_DATE);

    match cli.command {
        Command::Draw { file, diagnostics } => draw(&config, file, diagnostics),
        Command::Template { id } => template(&config, &id),
        Command::Templates { category } => list_templates(category.as_deref()),
        Command::Prompt { request, sketch } => {
            if sketch {
                println!("{}", sketch_prompt(request.as_deref()));
            } else {
                let Some(request) = request else {
                    bail!("A request is required unless --sketch is given");
                };
                println!("{}", shape_prompt(&request));
            }
            Ok(())
        }
    }
}

fn draw(config: &Config, file: Option<PathBuf>, show_diagnostics: bool) -> anyhow::Result<()> {
    let completion = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read completion from stdin")?;
            buffer
        }
    };

    let mut board = board_from_config(config);
    let outcome = draw_completion(&mut Materializer::new(), &mut board, &completion, config);

    if show_diagnostics {
        for diagnostic in &outcome.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }

    println!("{}", board.to_json_pretty()?);
    Ok(())
}

fn template(config: &Config, id: &str) -> anyhow::Result<()> {
    let library = TemplateLibrary::builtin();
    let Some(template) = library.get(id) else {
        bail!(
            "Unknown template '{}' (available: {})",
            id,
            library.ids().join(", ")
        );
    };

    let mut board = board_from_config(config);
    let created = template.apply(&mut Materializer::new(), &mut board, offset_from_config(config));
    tracing::info!("Applied template {} ({} shapes)", template.id, created);

    println!("{}", board.to_json_pretty()?);
    Ok(())
}

fn list_templates(category: Option<&str>) -> anyhow::Result<()> {
    let library = TemplateLibrary::builtin();
    let templates = match category {
        Some(name) => {
            let Some(category) = TemplateCategory::parse(name) else {
                bail!("Unknown template category '{}'", name);
            };
            library.by_category(category)
        }
        None => library.iter().collect(),
    };

    for template in templates {
        println!(
            "{:<16} {:<14} {}",
            template.id,
            template.category.as_str(),
            template.description
        );
    }
    Ok(())
}
