//! Implementation of `kwm analyze`.

use std::{collections::BTreeMap, process::ExitCode};

use kwm_extract::PageFields;
use kwm_page::{FetchedPage, PageDocument, PageError, fetch_page, read_page_file};
use tracing::info;

use crate::cli::{
    args::{AnalyzeCommand, PageSource},
    context::CommandContext,
    output::{PageAnalysis, print_json, render_text},
};

/// Fetches or reads a page, extracts keywords and prints the report.
pub fn run(ctx: &CommandContext, cmd: &AnalyzeCommand, verbose: u8) -> ExitCode {
    let page = match load_page(ctx, cmd) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let collected = match collect(&page.html) {
        Ok(collected) => collected,
        Err(e) => {
            eprintln!("error: failed to parse {}: {e}", page.location);
            return ExitCode::FAILURE;
        }
    };

    if collected.fields.is_empty() {
        info!(location = %page.location, "page has no keyword-bearing fields");
    }

    let report = ctx
        .analyzer()
        .analyze(&collected.fields, ctx.limit(cmd.limit));
    let analysis = PageAnalysis::new(
        &page.location,
        collected.title.as_deref(),
        &collected.meta_tags,
        &report,
    );

    if cmd.json {
        return print_json(&analysis);
    }
    print!("{}", render_text(&analysis, verbose));
    ExitCode::SUCCESS
}

/// What the report needs from a parsed page.
struct CollectedPage {
    /// Page title.
    title: Option<String>,
    /// Collected meta tags.
    meta_tags: BTreeMap<String, String>,
    /// Weighted text fields.
    fields: PageFields,
}

/// Parses a page and collects its title, meta tags and weighted fields.
fn collect(html: &str) -> Result<CollectedPage, PageError> {
    let document = PageDocument::parse(html);
    Ok(CollectedPage {
        title: document.title()?,
        meta_tags: document.meta_tags()?,
        fields: document.fields()?,
    })
}

/// Loads the page from whichever source was given.
fn load_page(ctx: &CommandContext, cmd: &AnalyzeCommand) -> Result<FetchedPage, PageError> {
    match &cmd.source {
        PageSource {
            file: Some(path), ..
        } => read_page_file(&ctx.cwd.join(path)),
        PageSource { url: Some(url), .. } => fetch_page(url, &ctx.fetch_settings(cmd.timeout)),
        PageSource {
            url: None,
            file: None,
        } => Err(PageError::InvalidUrl {
            url: String::new(),
            reason: "either --url or --file is required".to_string(),
        }),
    }
}
