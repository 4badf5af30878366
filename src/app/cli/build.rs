//! `build` command: flags, interactive selection and AI assistance.

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api::{self, BuildOptions};
use crate::domain::catalog;
use crate::domain::{AppError, OutputFormat, Parameter, PromptState};

#[derive(Args)]
pub struct BuildArgs {
    /// What the prompt is about
    subject: Option<String>,
    /// Output format: default, design-driven, json, yaml, xml or json-ld
    #[arg(short, long)]
    format: Option<String>,
    /// Choose parameters and format from menus
    #[arg(short, long)]
    interactive: bool,
    /// Rewrite the subject with the model before building
    #[arg(long)]
    enhance: bool,
    /// Let the model choose parameter values (applied after flags)
    #[arg(long)]
    suggest: bool,
    /// Reference image file(s) for --enhance and --suggest
    #[arg(long = "image")]
    images: Vec<PathBuf>,
    /// Record the prompt in history
    #[arg(long)]
    save: bool,

    #[arg(long)]
    shot_type: Option<String>,
    #[arg(long)]
    art_style: Option<String>,
    #[arg(long)]
    composition: Option<String>,
    #[arg(long)]
    camera_angle: Option<String>,
    #[arg(long)]
    camera_lens: Option<String>,
    #[arg(long)]
    camera_movement: Option<String>,
    #[arg(long)]
    lighting_style: Option<String>,
    #[arg(long)]
    time_of_day: Option<String>,
    #[arg(long)]
    weather: Option<String>,
    #[arg(long)]
    color_grade: Option<String>,
    #[arg(long)]
    render_style: Option<String>,
    #[arg(long)]
    film_stock: Option<String>,
    #[arg(long)]
    post_processing_effects: Option<String>,
}

impl BuildArgs {
    fn parameter_flags(&self) -> [(Parameter, &Option<String>); 13] {
        [
            (Parameter::ShotType, &self.shot_type),
            (Parameter::ArtStyle, &self.art_style),
            (Parameter::Composition, &self.composition),
            (Parameter::CameraAngle, &self.camera_angle),
            (Parameter::CameraLens, &self.camera_lens),
            (Parameter::CameraMovement, &self.camera_movement),
            (Parameter::LightingStyle, &self.lighting_style),
            (Parameter::TimeOfDay, &self.time_of_day),
            (Parameter::Weather, &self.weather),
            (Parameter::ColorGrade, &self.color_grade),
            (Parameter::RenderStyle, &self.render_style),
            (Parameter::FilmStock, &self.film_stock),
            (Parameter::PostProcessingEffects, &self.post_processing_effects),
        ]
    }
}

pub fn run_build(args: BuildArgs) -> Result<(), AppError> {
    let subject = match args.subject.clone() {
        Some(subject) => subject,
        None if args.interactive => match prompt_subject()? {
            Some(subject) => subject,
            None => return Ok(()),
        },
        None => String::new(),
    };

    let mut state = PromptState::with_subject(subject);
    for (parameter, value) in args.parameter_flags() {
        if let Some(value) = value {
            state.set(parameter, value.as_str());
        }
    }

    if args.interactive {
        for parameter in Parameter::ALL {
            match prompt_parameter(parameter, state.get(parameter))? {
                Some(value) => state.set(parameter, value),
                None => return Ok(()),
            }
        }
    }

    let images = api::load_images(&args.images)?;
    if args.enhance {
        state.subject = api::enhance(&state.subject, &images)?;
    }
    if args.suggest {
        api::suggest(&mut state, &images)?;
    }

    let format = match args.format {
        Some(tag) => OutputFormat::from_tag_or_default(&tag),
        None if args.interactive => match prompt_format()? {
            Some(format) => format,
            None => return Ok(()),
        },
        None => resolve_format(None)?,
    };

    let outcome = api::build(BuildOptions { state, format, save: args.save })?;
    println!("{}", outcome.prompt);
    if let Some(entry) = outcome.entry {
        eprintln!("✅ Saved to history ({})", entry.id);
    }
    Ok(())
}

/// Format from an explicit tag, else the configured default.
pub fn resolve_format(tag: Option<String>) -> Result<OutputFormat, AppError> {
    match tag {
        Some(tag) => Ok(OutputFormat::from_tag_or_default(&tag)),
        None => Ok(api::load_config()?.output.default_format),
    }
}

fn prompt_subject() -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt("Subject").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interaction(format!("Failed to read subject: {}", err))),
    }
}

fn prompt_parameter(parameter: Parameter, current: &str) -> Result<Option<String>, AppError> {
    let options = catalog::options(parameter);
    let mut values: Vec<&str> = options.iter().map(|option| option.value).collect();
    let mut items: Vec<String> = options.iter().map(|option| option.label.to_string()).collect();

    // Free-text values from flags stay selectable.
    if !current.is_empty() && catalog::find(parameter, current).is_none() {
        values.insert(0, current);
        items.insert(0, format!("{} (custom)", current));
    }
    let default = values.iter().position(|value| *value == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(parameter.label())
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| {
            AppError::Interaction(format!("Failed to select {}: {}", parameter.label(), err))
        })?;

    Ok(selection.map(|index| values[index].to_string()))
}

fn prompt_format() -> Result<Option<OutputFormat>, AppError> {
    let items: Vec<&str> = OutputFormat::ALL.iter().map(|format| format.label()).collect();
    let selection = Select::new()
        .with_prompt("Output format")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select format: {}", err)))?;

    Ok(selection.map(|index| OutputFormat::ALL[index]))
}
