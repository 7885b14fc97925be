use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use print_code::{
    Config, PrintCodeError, RecipeTicket, RecipeTicketRenderer, encode_recipe_segments,
    generate_previews, load_preview_steps, load_recipe, load_step_types, logger,
};

#[derive(Parser)]
#[command(name = "print-code", about = "Recipe print codes for kitchen printers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a saved recipe into its print code
    Encode {
        /// Step type catalog (JSON array)
        #[arg(long)]
        catalog: PathBuf,
        /// Recipe steps (JSON array or {"name", "steps"} document)
        #[arg(long)]
        recipe: PathBuf,
        /// Print the full ticket instead of the bare code
        #[arg(long)]
        ticket: bool,
    },
    /// Preview unsaved editor rows (containment by row index)
    Preview {
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        steps: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let cli = Cli::parse();
    if let Err(e) = run(cli, &config) {
        tracing::error!("print-code failed: {e:#}");
        return Err(with_error_code(e));
    }
    Ok(())
}

/// One-line `[<code>] <message>` for errors that carry a shared error code
fn with_error_code(e: anyhow::Error) -> anyhow::Error {
    match e.downcast_ref::<PrintCodeError>() {
        Some(err) => anyhow!("[{}] {err}", err.error_code()),
        None => e,
    }
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    match cli.command {
        Command::Encode {
            catalog,
            recipe,
            ticket,
        } => {
            let catalog = load_step_types(&catalog)?;
            let document = load_recipe(&recipe)?;
            let segments = encode_recipe_segments(&document.steps, &catalog)?;

            if ticket {
                config.validate()?;
                let renderer = RecipeTicketRenderer::new(config.paper_width, config.tz()?);
                let ticket = RecipeTicket {
                    title: document.name.unwrap_or_default(),
                    reference: None,
                    printed_at: Some(chrono::Utc::now().timestamp_millis()),
                    segments,
                };
                for line in renderer.render(&ticket) {
                    println!("{line}");
                }
            } else {
                println!("{}", segments.join(" "));
            }
        }
        Command::Preview { catalog, steps } => {
            let catalog = load_step_types(&catalog)?;
            let inputs = load_preview_steps(&steps)?;
            let previews = generate_previews(&inputs, &catalog)?;
            let json = serde_json::to_string_pretty(&previews).context("serialize previews")?;
            println!("{json}");
        }
    }
    Ok(())
}
