//! Template subcommands.

use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api::{self, ResolvedTemplate, TemplateDraft};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List built-in and custom templates
    #[clap(visible_alias = "ls")]
    List,
    /// Print a template's content
    Show { id: String },
    /// Fill a template around a subject
    #[clap(visible_alias = "f")]
    Fill {
        id: String,
        subject: String,
        /// Reference image file(s)
        #[arg(short, long = "image")]
        images: Vec<PathBuf>,
    },
    /// Create a custom template, or update one with --id
    Save {
        name: String,
        /// File holding the template content
        #[arg(short, long, conflicts_with = "content")]
        file: Option<PathBuf>,
        /// Template content given inline
        #[arg(short, long, required_unless_present = "file")]
        content: Option<String>,
        /// Existing template to update
        #[arg(long)]
        id: Option<String>,
    },
    /// Delete a custom template
    #[clap(visible_alias = "rm")]
    Delete { id: String },
}

pub fn run_template(command: TemplateCommands) -> Result<(), AppError> {
    match command {
        TemplateCommands::List => {
            let listing = api::template_list()?;
            println!("Built-in templates:");
            for template in &listing.builtin {
                println!(
                    "  {} - {} [{}, {}]",
                    template.id, template.name, template.kind, template.mode
                );
            }
            if !listing.custom.is_empty() {
                println!("\nCustom templates:");
                for template in &listing.custom {
                    println!("  {} - {}", template.id, template.name);
                }
            }
        }
        TemplateCommands::Show { id } => {
            let template = api::template_show(&id)?;
            if let ResolvedTemplate::Builtin(builtin) = &template {
                println!("# {} ({}, {})", builtin.name, builtin.kind, builtin.mode);
            } else {
                println!("# {} (custom)", template.name());
            }
            println!("{}", template.content());
        }
        TemplateCommands::Fill { id, subject, images } => {
            let images = api::load_images(&images)?;
            let outcome = api::template_fill(&id, &subject, &images)?;
            println!("{}", outcome.prompt);
        }
        TemplateCommands::Save { name, file, content, id } => {
            let content = match (file, content) {
                (Some(path), _) => std::fs::read_to_string(path)?,
                (None, Some(content)) => content,
                (None, None) => {
                    return Err(AppError::InvalidTemplate("content must not be empty".into()));
                }
            };
            let saved = api::template_save(TemplateDraft { id, name, content })?;
            println!("✅ Saved template '{}' ({})", saved.name, saved.id);
        }
        TemplateCommands::Delete { id } => {
            api::template_delete(&id)?;
            println!("✅ Deleted template {}", id);
        }
    }
    Ok(())
}
