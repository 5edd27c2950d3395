//! `slacknote-analyzer`: categorizes, tags, and summarizes message text with an LLM.

pub mod analyzer;
pub mod parse;
pub mod prompt;
pub mod providers;

pub use analyzer::{AnalyzerSettings, LlmAnalyzer};
pub use parse::{parse_analysis, strip_code_fences};
pub use prompt::{build_prompt, system_prompt};
