//! Research prompt templates
//!
//! Pure text generation, no upstream access. Each template suggests a
//! workflow built on the search and document operations.

use crate::core::error::{EntscheidsucheError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct PromptArgumentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PromptSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [PromptArgumentSpec],
}

/// Filled-in template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub description: String,
    pub text: String,
}

const TOPIC: PromptArgumentSpec = PromptArgumentSpec {
    name: "topic",
    description: "Legal question or subject matter, e.g. 'Mietrecht Kündigung'",
    required: true,
};

const JURISDICTION: PromptArgumentSpec = PromptArgumentSpec {
    name: "jurisdiction",
    description: "Canton code or 'CH' for federal courts (optional)",
    required: false,
};

const TIMEFRAME: PromptArgumentSpec = PromptArgumentSpec {
    name: "timeframe",
    description: "Period of interest, e.g. 'since 2020' (optional)",
    required: false,
};

pub const PROMPTS: &[PromptSpec] = &[
    PromptSpec {
        name: "legal_research",
        description: "Structured research on a legal topic across Swiss court decisions",
        arguments: &[TOPIC, JURISDICTION],
    },
    PromptSpec {
        name: "court_practice",
        description: "Analyse the case law of one court",
        arguments: &[
            PromptArgumentSpec {
                name: "court",
                description: "Court name or collection, e.g. 'CH_BGer' or 'Obergericht Zürich'",
                required: true,
            },
            PromptArgumentSpec {
                name: "topic",
                description: "Restrict the analysis to a subject (optional)",
                required: false,
            },
            TIMEFRAME,
        ],
    },
    PromptSpec {
        name: "precedent_search",
        description: "Find leading decisions and precedents on a question",
        arguments: &[TOPIC, JURISDICTION, TIMEFRAME],
    },
];

pub fn find_prompt(name: &str) -> Option<&'static PromptSpec> {
    PROMPTS.iter().find(|p| p.name == name)
}

/// Render a template, checking required arguments
pub fn render_prompt(name: &str, args: &HashMap<String, String>) -> Result<RenderedPrompt> {
    let spec = find_prompt(name)
        .ok_or_else(|| EntscheidsucheError::InvalidParams(format!("Unknown prompt: {name}")))?;

    let value = |key: &str| {
        args.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    };

    for arg in spec.arguments.iter().filter(|a| a.required) {
        if value(arg.name).is_none() {
            return Err(EntscheidsucheError::InvalidParams(format!(
                "Prompt '{}' requires argument '{}'",
                spec.name, arg.name
            )));
        }
    }

    let text = match spec.name {
        "legal_research" => legal_research(value("topic").unwrap_or_default(), value("jurisdiction")),
        "court_practice" => court_practice(
            value("court").unwrap_or_default(),
            value("topic"),
            value("timeframe"),
        ),
        _ => precedent_search(
            value("topic").unwrap_or_default(),
            value("jurisdiction"),
            value("timeframe"),
        ),
    };

    Ok(RenderedPrompt {
        description: spec.description.to_string(),
        text,
    })
}

fn scope(jurisdiction: Option<&str>) -> String {
    match jurisdiction {
        Some(j) if j.eq_ignore_ascii_case("CH") => "Swiss federal courts".to_string(),
        Some(j) => format!("courts of {j}"),
        None => "federal and cantonal courts".to_string(),
    }
}

fn legal_research(topic: &str, jurisdiction: Option<&str>) -> String {
    format!(
        "Research the Swiss case law on \"{topic}\", focusing on {scope}.\n\n\
         1. Use `search` with German, French and Italian keywords for the topic \
         (the decisions are published in all three languages).\n\
         2. Narrow the query with Lucene syntax where useful, e.g. \
         `\"{topic}\" AND canton:<code>`, and sort by `date:desc` for recent practice.\n\
         3. Open the most relevant hits with `get_document` (format `text`) and \
         note the legal reasoning, cited statutes and outcome.\n\
         4. Summarise the prevailing view, open questions and any divergence \
         between courts, citing each decision by its signature.",
        scope = scope(jurisdiction)
    )
}

fn court_practice(court: &str, topic: Option<&str>, timeframe: Option<&str>) -> String {
    let subject = topic.map_or_else(String::new, |t| format!(" on \"{t}\""));
    let period = timeframe.map_or_else(String::new, |t| format!(" ({t})"));
    format!(
        "Analyse the practice of {court}{subject}{period}.\n\n\
         1. Use `list_courts` to confirm the court's exact name and canton, and \
         `get_collection_status` to check how current its collection is.\n\
         2. Use `search` restricted to this court, sorted by `date:desc`, to \
         collect representative decisions.\n\
         3. Read key decisions with `get_document` and record recurring \
         arguments and outcomes.\n\
         4. Describe the court's line of decisions and any changes over time, \
         citing signatures and dates."
    )
}

fn precedent_search(topic: &str, jurisdiction: Option<&str>, timeframe: Option<&str>) -> String {
    let period = timeframe.map_or_else(String::new, |t| format!(" in the period {t}"));
    format!(
        "Find leading decisions and precedents on \"{topic}\" from {scope}{period}.\n\n\
         1. Use `search` for the topic and look for decisions of the Federal \
         Supreme Court (BGer) and the highest cantonal courts.\n\
         2. For promising hits, use `get_document` to read the considerations \
         and identify which earlier decisions they cite.\n\
         3. Use `get_document_urls` to collect links to the original PDF and \
         HTML renditions.\n\
         4. Present the precedents in chronological order with signature, \
         court, date and the principle each one established.",
        scope = scope(jurisdiction)
    )
}
