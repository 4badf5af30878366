//! CLI Adapter.

mod build;
mod history;
mod template;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app::api;
use crate::domain::catalog;
use crate::domain::{AppError, ImageModel, OptimizeStyle, Parameter, TargetAi};

#[derive(Parser)]
#[command(name = "prompt-architect")]
#[command(version)]
#[command(
    about = "Compose cinematic prompts for image and video generators",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a prompt from a subject and cinematic parameters
    #[clap(visible_alias = "b")]
    Build(build::BuildArgs),
    /// List the selectable values for each parameter
    #[clap(visible_alias = "o")]
    Options {
        /// Parameter name (e.g. shotType or shot-type)
        parameter: Option<String>,
        /// List image aspect ratios instead
        #[arg(long, conflicts_with = "parameter")]
        aspect_ratios: bool,
    },
    /// Rewrite a subject as a vivid cinematic concept
    #[clap(visible_alias = "e")]
    Enhance {
        subject: String,
        /// Reference image file(s)
        #[arg(short, long = "image")]
        images: Vec<PathBuf>,
    },
    /// Let the model choose parameter values for a subject
    #[clap(visible_alias = "s")]
    Suggest {
        subject: String,
        /// Reference image file(s)
        #[arg(short, long = "image")]
        images: Vec<PathBuf>,
        /// Output format tag for the resulting prompt
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Generate images from a prompt (defaults to the latest prompt in history)
    #[clap(visible_alias = "img")]
    Image {
        prompt: Option<String>,
        #[arg(short, long, default_value = "1:1")]
        aspect_ratio: String,
        /// imagen-4.0-generate-001 or gemini-2.5-flash-image-preview
        #[arg(short, long, default_value = "imagen-4.0-generate-001")]
        model: String,
        /// Directory the images are written to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Generate a video from a prompt (defaults to the latest prompt in history)
    #[clap(visible_alias = "v")]
    Video {
        prompt: Option<String>,
        /// Reference image file
        #[arg(short, long)]
        image: Option<PathBuf>,
        /// Directory the video is written to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Optimize a rough prompt for a target AI
    #[clap(visible_alias = "opt")]
    Optimize {
        prompt: String,
        /// ChatGPT, Claude, Gemini or Other
        #[arg(short, long, default_value = "ChatGPT")]
        target: String,
        /// Produce the shorter BASIC rewrite instead of DETAIL
        #[arg(long)]
        basic: bool,
    },
    /// Built-in and custom prompt templates
    #[clap(visible_alias = "t")]
    Template {
        #[command(subcommand)]
        command: template::TemplateCommands,
    },
    /// Generated prompt, image and video history
    #[clap(visible_alias = "h")]
    History {
        #[command(subcommand)]
        command: history::HistoryCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Build(args) => build::run_build(args),
        Commands::Options { parameter, aspect_ratios } => run_options(parameter, aspect_ratios),
        Commands::Enhance { subject, images } => run_enhance(&subject, &images),
        Commands::Suggest { subject, images, format } => run_suggest(subject, &images, format),
        Commands::Image { prompt, aspect_ratio, model, output } => {
            run_image(prompt, &aspect_ratio, &model, output)
        }
        Commands::Video { prompt, image, output } => run_video(prompt, image, output),
        Commands::Optimize { prompt, target, basic } => run_optimize(&prompt, &target, basic),
        Commands::Template { command } => template::run_template(command),
        Commands::History { command } => history::run_history(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run_options(parameter: Option<String>, aspect_ratios: bool) -> Result<(), AppError> {
    if aspect_ratios {
        println!("Aspect ratios:");
        for option in api::aspect_ratios() {
            println!("  {} - {}", option.value, option.label);
        }
        return Ok(());
    }

    let parameter = parameter.map(|name| name.parse::<Parameter>()).transpose()?;
    for listing in api::options(parameter) {
        println!("{} ({}):", listing.parameter.label(), listing.parameter);
        for option in listing.options {
            let is_default = option.value == catalog::default_value(listing.parameter);
            let marker = if is_default { "*" } else { " " };
            println!(" {} {} - {}", marker, option.label, option.value);
        }
    }
    Ok(())
}

fn run_enhance(subject: &str, images: &[PathBuf]) -> Result<(), AppError> {
    let images = api::load_images(images)?;
    let enhanced = api::enhance(subject, &images)?;
    println!("{}", enhanced);
    Ok(())
}

fn run_suggest(
    subject: String,
    images: &[PathBuf],
    format: Option<String>,
) -> Result<(), AppError> {
    let images = api::load_images(images)?;
    let mut state = api::PromptState::with_subject(subject);
    let patch = api::suggest(&mut state, &images)?;

    for parameter in Parameter::ALL {
        if let Some(value) = patch.get(parameter) {
            println!("{}: {}", parameter.label(), value);
        }
    }
    println!();
    let format = build::resolve_format(format)?;
    println!("{}", crate::domain::build_prompt(&state, format));
    Ok(())
}

fn run_image(
    prompt: Option<String>,
    aspect_ratio: &str,
    model: &str,
    output: PathBuf,
) -> Result<(), AppError> {
    let model: ImageModel = model.parse()?;
    let outcome = api::image(prompt, aspect_ratio, model, output)?;
    for file in &outcome.files {
        println!("✅ Saved image to {}", file.display());
    }
    Ok(())
}

fn run_video(
    prompt: Option<String>,
    image: Option<PathBuf>,
    output: PathBuf,
) -> Result<(), AppError> {
    let reference = image.as_deref().map(api::ReferenceImage::load).transpose()?;
    println!("🎬 Generating video; this can take several minutes...");
    let outcome = api::video(prompt, reference, output)?;
    println!("✅ Saved video to {}", outcome.file.display());
    Ok(())
}

fn run_optimize(prompt: &str, target: &str, basic: bool) -> Result<(), AppError> {
    let target: TargetAi = target.parse()?;
    let style = if basic { OptimizeStyle::Basic } else { OptimizeStyle::Detail };
    let outcome = api::optimize(prompt, target, style)?;
    let output = &outcome.output;

    println!("Your Optimized Prompt:\n{}", output.optimized_prompt);
    let sections = [
        ("What Changed", &output.what_changed),
        ("Key Improvements", &output.key_improvements),
        ("Techniques Applied", &output.techniques_applied),
        ("Pro Tip", &output.pro_tip),
    ];
    for (header, body) in sections {
        if let Some(body) = body {
            println!("\n{}:\n{}", header, body);
        }
    }
    Ok(())
}
