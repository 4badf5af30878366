//! Instruction text sent to the generation model.
//!
//! Each instruction is an embedded minijinja template under
//! `src/assets/instructions`.

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::sanitize::wrap_user_prompt;
use crate::domain::{AppError, Parameter};

static INSTRUCTIONS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/instructions");

/// Generation settings attached to an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenerationSettings {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub thinking_budget: Option<u32>,
}

pub const ENHANCE_SETTINGS: GenerationSettings = GenerationSettings {
    temperature: Some(0.8),
    max_output_tokens: Some(100),
    thinking_budget: Some(50),
};

pub const OPTIMIZE_SETTINGS: GenerationSettings =
    GenerationSettings { temperature: Some(0.5), max_output_tokens: None, thinking_budget: None };

/// Instruction for turning a plain subject into a single cinematic sentence.
pub fn enhance(subject: &str, has_images: bool) -> Result<String, AppError> {
    let prefix = render("enhance.j2", context! { has_images })?;
    Ok(wrap_user_prompt(subject, &prefix))
}

/// Instruction for the parameter suggestion call.
pub fn suggest(subject: &str, has_images: bool) -> Result<String, AppError> {
    let prefix = render("suggest.j2", context! { has_images, keys => parameter_key_list() })?;
    Ok(wrap_user_prompt(subject, &prefix))
}

/// Instruction for filling a JSON prompt template around a subject.
pub fn fill_template(subject: &str, template: &str, has_images: bool) -> Result<String, AppError> {
    render("fill_template.j2", context! { has_images, subject, template })
}

/// Full optimizer request: system prompt followed by the user request line.
pub fn optimize(prompt: &str, target: &str, style: &str) -> Result<String, AppError> {
    let system_prompt = asset("optimizer_system.md")?.trim_end();
    render("optimize.j2", context! { system_prompt, target, style, prompt })
}

/// `"a, b, ... and z"` over every parameter field name.
fn parameter_key_list() -> String {
    let names: Vec<&str> = Parameter::ALL.iter().map(|p| p.field_name()).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, and {}", rest.join(", "), last),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}

fn asset(name: &str) -> Result<&'static str, AppError> {
    INSTRUCTIONS_DIR.get_file(name).and_then(|file| file.contents_utf8()).ok_or_else(|| {
        AppError::InstructionRender {
            name: name.to_string(),
            reason: "missing embedded asset".into(),
        }
    })
}

fn render(name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();

    let template = asset(name)?;
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(template, ctx).map_err(|err| AppError::InstructionRender {
        name: name.to_string(),
        reason: err.to_string(),
    })
}
