//! Document commands - fetch a decision and list its URLs

use crate::cli::output::{colors, format_bytes, print_field, print_success};
use crate::cli::OutputFormat;
use crate::core::services::{DocumentContent, Services};
use crate::core::types::DocumentFormat;
use clap::{Args, ValueEnum};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

/// Rendition to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Rendition {
    /// Normalized metadata
    #[default]
    Json,
    /// Raw HTML
    Html,
    /// HTML reduced to plain text
    Text,
    /// Original PDF
    Pdf,
}

impl From<Rendition> for DocumentFormat {
    fn from(rendition: Rendition) -> Self {
        match rendition {
            Rendition::Json => DocumentFormat::Json,
            Rendition::Html => DocumentFormat::Html,
            Rendition::Text => DocumentFormat::Text,
            Rendition::Pdf => DocumentFormat::Pdf,
        }
    }
}

/// Arguments for the get-document command
#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// Document signature, e.g. CH_BGer_005_5A-1-2020_2020-06-01
    pub signature: String,

    /// Collection (spider) owning the document; looked up when omitted
    #[arg(long, short = 'c')]
    pub collection: Option<String>,

    /// Rendition to fetch
    #[arg(long = "as", value_enum, default_value = "json")]
    pub rendition: Rendition,

    /// Write the document to a file instead of stdout (required for PDF)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for the get-document-urls command
#[derive(Args, Debug)]
pub struct UrlsArgs {
    /// Document signature
    pub signature: String,
}

/// Execute the get-document command
pub async fn execute(
    args: DocumentArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.rendition == Rendition::Pdf && args.output.is_none() {
        return Err("PDF output is binary; pass --output <FILE>".into());
    }

    let document = services
        .get_document(
            &args.signature,
            args.collection.as_deref(),
            args.rendition.into(),
        )
        .await?;

    let rendered: Vec<u8> = match &document.content {
        DocumentContent::Metadata(metadata) => {
            if format == OutputFormat::Human && args.output.is_none() {
                println!("{}", colors::signature(&metadata.signature));
                print_field("Case number", Some(metadata.case_number.as_str()));
                print_field("Date", Some(metadata.date.as_str()));
                print_field("Court", Some(metadata.court.as_str()));
                print_field("Language", Some(metadata.language.as_str()));
                print_field("Collection", metadata.collection.as_deref());
                print_field("Title", metadata.title.as_deref());
                print_field("Abstract", metadata.abstract_text.as_deref());
                print_field("HTML", metadata.html_url.as_deref());
                print_field("PDF", metadata.pdf_url.as_deref());
                print_field("Source", metadata.source_url.as_deref());
                return Ok(());
            }
            serde_json::to_vec_pretty(metadata)?
        }
        DocumentContent::Html(text) | DocumentContent::Text(text) => {
            if format == OutputFormat::Json && args.output.is_none() {
                let wrapped = json!({
                    "signature": document.target.signature,
                    "collection": document.target.collection,
                    "url": document.url,
                    "content": text,
                });
                println!("{}", serde_json::to_string_pretty(&wrapped)?);
                return Ok(());
            }
            text.clone().into_bytes()
        }
        DocumentContent::Pdf(bytes) => bytes.clone(),
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &rendered)?;
            print_success(&format!(
                "Wrote {} to {}",
                format_bytes(rendered.len() as u64),
                path.display()
            ));
        }
        None => println!("{}", String::from_utf8_lossy(&rendered)),
    }

    Ok(())
}

/// Execute the get-document-urls command
pub async fn execute_urls(
    args: UrlsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let urls = services.get_document_urls(&args.signature).await?;

    match format {
        OutputFormat::Human => {
            println!("{}", colors::signature(&urls.signature));
            print_field("Collection", urls.collection.as_deref());
            for (label, url) in [
                ("JSON", &urls.json_url),
                ("HTML", &urls.html_url),
                ("PDF", &urls.pdf_url),
                ("Source", &urls.source_url),
            ] {
                let shown = url.as_deref().map(|u| colors::url(u).to_string());
                print_field(label, shown.as_deref());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&urls)?);
        }
    }

    Ok(())
}
