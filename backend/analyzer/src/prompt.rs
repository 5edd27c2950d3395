//! Instruction template sent to the LLM.

use slacknote_core::{Category, MAX_GLOSSARY_ENTRIES, MAX_TAGS};

/// Fixed instructions describing the JSON shape to return.
pub fn system_prompt() -> String {
    let categories = Category::ALL
        .iter()
        .map(Category::label)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are an IT curator. Analyze the text you are given and answer in JSON only.\n\
         Return pure JSON. Do not wrap it in markdown such as ```json.\n\
         \n\
         Fields:\n\
         1. category: exactly one of [{categories}]\n\
         2. tags: {MAX_TAGS} key keywords, each starting with #\n\
         3. summary: a one to two sentence summary of the whole text\n\
         4. glossary: explanations of key terms (at most {MAX_GLOSSARY_ENTRIES}), \
         each an object with 'term' and 'definition' keys\n"
    )
}

/// The per-message part of the request.
pub fn build_prompt(text: &str) -> String {
    format!("Text to analyze:\n{text}\n")
}
