//! Prompt optimizer options and response parsing.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub const MISSING_OPTIMIZED_PROMPT: &str = "Could not extract optimized prompt.";

/// Platform the optimized prompt is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetAi {
    #[default]
    ChatGpt,
    Claude,
    Gemini,
    Other,
}

impl TargetAi {
    pub const ALL: [TargetAi; 4] =
        [TargetAi::ChatGpt, TargetAi::Claude, TargetAi::Gemini, TargetAi::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetAi::ChatGpt => "ChatGPT",
            TargetAi::Claude => "Claude",
            TargetAi::Gemini => "Gemini",
            TargetAi::Other => "Other",
        }
    }
}

impl fmt::Display for TargetAi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetAi {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetAi::ALL
            .into_iter()
            .find(|target| target.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                AppError::InvalidConfig(format!(
                    "unknown target AI '{}': must be one of ChatGPT, Claude, Gemini, Other",
                    s
                ))
            })
    }
}

/// How thorough the optimization should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OptimizeStyle {
    #[default]
    Detail,
    Basic,
}

impl OptimizeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizeStyle::Detail => "DETAIL",
            OptimizeStyle::Basic => "BASIC",
        }
    }
}

impl fmt::Display for OptimizeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizeStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DETAIL" => Ok(OptimizeStyle::Detail),
            "BASIC" => Ok(OptimizeStyle::Basic),
            _ => Err(AppError::InvalidConfig(format!(
                "unknown optimize style '{}': must be DETAIL or BASIC",
                s
            ))),
        }
    }
}

/// Sections extracted from an optimizer reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerOutput {
    pub optimized_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_changed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_improvements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub techniques_applied: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro_tip: Option<String>,
}

/// Split an optimizer reply into its `<h4>` sections.
///
/// The optimized prompt is only recognised inside `<pre><code>`.
pub fn parse_optimizer_response(text: &str) -> OptimizerOutput {
    static PROMPT_RE: OnceLock<Regex> = OnceLock::new();
    let prompt_re = PROMPT_RE.get_or_init(|| {
        Regex::new(r"(?is)<h4>\s*Your Optimized Prompt:\s*</h4>\s*<pre><code>(.*?)</code></pre>")
            .expect("optimized prompt regex should compile")
    });

    let optimized_prompt = prompt_re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|prompt| !prompt.is_empty())
        .unwrap_or_else(|| MISSING_OPTIMIZED_PROMPT.to_string());

    OptimizerOutput {
        optimized_prompt,
        what_changed: section(text, "What Changed"),
        key_improvements: section(text, "Key Improvements"),
        techniques_applied: section(text, "Techniques Applied"),
        pro_tip: section(text, "Pro Tip"),
    }
}

/// Text after `<h4>{header}:</h4>` up to the next `<h4>` or the end.
fn section(text: &str, header: &str) -> Option<String> {
    static NEXT_HEADER_RE: OnceLock<Regex> = OnceLock::new();
    let next_header = NEXT_HEADER_RE
        .get_or_init(|| Regex::new(r"(?i)<h4>").expect("header regex should compile"));

    let header_re = Regex::new(&format!(r"(?i)<h4>\s*{}:\s*</h4>", regex::escape(header))).ok()?;
    let start = header_re.find(text)?.end();
    let rest = &text[start..];
    let end = next_header.find(rest).map(|m| m.start()).unwrap_or(rest.len());

    let body = rest[..end].trim();
    (!body.is_empty()).then(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = "<h4>Your Optimized Prompt:</h4>\n<pre><code>You are a senior copywriter. Write...</code></pre>\n\
        <h4>What Changed:</h4>\nAdded a role and constraints.\n\
        <h4>Key Improvements:</h4>\n<ul><li>Role</li></ul>\n\
        <h4>Pro Tip:</h4>\nIterate on tone.";

    #[test]
    fn extracts_all_present_sections() {
        let output = parse_optimizer_response(REPLY);
        assert_eq!(output.optimized_prompt, "You are a senior copywriter. Write...");
        assert_eq!(output.what_changed.as_deref(), Some("Added a role and constraints."));
        assert_eq!(output.key_improvements.as_deref(), Some("<ul><li>Role</li></ul>"));
        assert_eq!(output.techniques_applied, None);
        assert_eq!(output.pro_tip.as_deref(), Some("Iterate on tone."));
    }

    #[test]
    fn missing_code_block_yields_placeholder() {
        let output = parse_optimizer_response("<h4>Your Optimized Prompt:</h4>\nplain text only");
        assert_eq!(output.optimized_prompt, MISSING_OPTIMIZED_PROMPT);
    }

    #[test]
    fn headers_match_case_insensitively() {
        let output = parse_optimizer_response("<H4>pro tip:</H4> keep it short");
        assert_eq!(output.pro_tip.as_deref(), Some("keep it short"));
    }

    #[test]
    fn target_and_style_parse_case_insensitively() {
        assert_eq!("chatgpt".parse::<TargetAi>().unwrap(), TargetAi::ChatGpt);
        assert_eq!("basic".parse::<OptimizeStyle>().unwrap(), OptimizeStyle::Basic);
        assert!("bard".parse::<TargetAi>().is_err());
        assert_eq!(TargetAi::ChatGpt.to_string(), "ChatGPT");
    }
}
