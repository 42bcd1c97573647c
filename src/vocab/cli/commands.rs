//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, prompts)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{print_messages, render_text_list, render_topic_list, render_topic_words};
use super::setup::{print_grouped_help, print_help_for_command, Cli, Commands};
use clap::Parser;
use console::Term;
use log::{debug, warn};
use std::io::IsTerminal;
use std::path::Path;
use vocab::api::{ConfigAction, LoadMode, VocabApi};
use vocab::error::Result;
use vocab::init::initialize;
use vocab::logging::init_logging;
use vocab::store::fs::FileStore;

struct AppContext {
    api: VocabApi<FileStore>,
    words_per_row: usize,
    column_width: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    if let Some(Commands::Help { command }) = &cli.command {
        return handle_help(command.as_deref());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Topics) | None => handle_topics(&ctx),
        Some(Commands::Browse { topic }) => handle_browse(&ctx, &topic),
        Some(Commands::Insert {
            name,
            words,
            before,
            after,
        }) => handle_insert(&mut ctx, &name, &words, before, after),
        Some(Commands::Add { name, words }) => handle_add(&mut ctx, &name, &words),
        Some(Commands::Remove { topic }) => handle_remove(&mut ctx, &topic),
        Some(Commands::Rename { topic, name }) => handle_rename(&mut ctx, &topic, &name),
        Some(Commands::AddWord { topic, words }) => handle_add_words(&mut ctx, &topic, &words),
        Some(Commands::RemoveWord { topic, word }) => handle_remove_word(&mut ctx, &topic, &word),
        Some(Commands::ChangeWord { topic, old, new }) => {
            handle_change_word(&mut ctx, &topic, &old, &new)
        }
        Some(Commands::Search { word }) => handle_search(&ctx, &word),
        Some(Commands::Starting { letter }) => handle_starting(&ctx, &letter),
        Some(Commands::Load { path, replace }) => handle_load(&mut ctx, &path, replace),
        Some(Commands::Save { path, force }) => handle_save(&ctx, &path, force),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Help { command }) => handle_help(command.as_deref()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.file.as_deref())?;
    debug!(
        "event=cli_context registry={}",
        ctx.api.paths().registry.display()
    );

    Ok(AppContext {
        api: ctx.api,
        words_per_row: ctx.config.words_per_row,
        column_width: ctx.config.column_width,
    })
}

fn handle_topics(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_topics()?;
    print!("{}", render_topic_list(&result.listed_topics));
    print_messages(&result.messages);
    Ok(())
}

fn handle_browse(ctx: &AppContext, topic: &str) -> Result<()> {
    let result = ctx.api.browse_topic(topic)?;
    for dt in &result.listed_topics {
        print!(
            "{}",
            render_topic_words(dt, ctx.words_per_row, ctx.column_width)
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_insert(
    ctx: &mut AppContext,
    name: &str,
    words: &[String],
    before: Option<String>,
    after: Option<String>,
) -> Result<()> {
    let result = match (before, after) {
        (Some(anchor), _) => ctx.api.insert_topic_before(&anchor, name, words)?,
        (None, Some(anchor)) => ctx.api.insert_topic_after(&anchor, name, words)?,
        (None, None) => ctx.api.add_topic(name, words)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: &str, words: &[String]) -> Result<()> {
    let result = ctx.api.add_topic(name, words)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, topic: &str) -> Result<()> {
    let result = ctx.api.remove_topic(topic)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, topic: &str, name: &str) -> Result<()> {
    let result = ctx.api.rename_topic(topic, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_words(ctx: &mut AppContext, topic: &str, words: &[String]) -> Result<()> {
    let result = ctx.api.add_words(topic, words)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove_word(ctx: &mut AppContext, topic: &str, word: &str) -> Result<()> {
    let result = ctx.api.remove_word(topic, word)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_change_word(ctx: &mut AppContext, topic: &str, old: &str, new: &str) -> Result<()> {
    let result = ctx.api.change_word(topic, old, new)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, word: &str) -> Result<()> {
    let result = ctx.api.search_word(word)?;
    if !result.listed_topics.is_empty() {
        print!("{}", render_topic_list(&result.listed_topics));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_starting(ctx: &AppContext, letter: &str) -> Result<()> {
    let result = ctx.api.words_starting_with(letter)?;
    if !result.listed_words.is_empty() {
        print!("{}", render_text_list(&result.listed_words, ""));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_load(ctx: &mut AppContext, path: &Path, replace: bool) -> Result<()> {
    let mode = if replace {
        LoadMode::Replace
    } else {
        LoadMode::Append
    };
    let result = ctx.api.load_file(path, mode)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &AppContext, path: &Path, force: bool) -> Result<()> {
    let overwrite = force || (path.exists() && confirm_overwrite(path));
    let result = ctx.api.save_file(path, overwrite)?;
    print_messages(&result.messages);
    Ok(())
}

/// Asks `overwrite? (yes/no)` on an interactive terminal. Anything but a
/// yes, or a non-interactive session, counts as no.
fn confirm_overwrite(path: &Path) -> bool {
    if !std::io::stdin().is_terminal() {
        return false;
    }
    let term = Term::stdout();
    let prompt = format!("The file {} already exists, overwrite? (yes/no) ", path.display());
    if term.write_str(&prompt).is_err() {
        return false;
    }
    match term.read_line() {
        Ok(answer) => is_yes(&answer),
        Err(e) => {
            warn!("event=prompt_failed error={}", e);
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration values."));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
