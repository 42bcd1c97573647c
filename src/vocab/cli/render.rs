//! # Rendering Module
//!
//! Turns command results into terminal text. Every `render_*` function
//! returns a `String` so output can be tested without a terminal; the
//! `print_*` wrappers are the only ones that touch stdout.
//!
//! Layout (numbering, column padding) is computed on plain text with
//! Unicode-aware widths, then styled with `colored`, which drops the escape
//! codes on its own when stdout is not a terminal.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;
use vocab::api::{CmdMessage, MessageLevel};
use vocab::index::DisplayTopic;
use vocab::word_list::WordList;

pub const NO_TOPICS: &str = "No topics yet.";

/// Renders topics as ` N  name (k words)`, one per line.
pub fn render_topic_list(topics: &[DisplayTopic]) -> String {
    render_topic_list_internal(topics, None)
}

fn render_topic_list_internal(topics: &[DisplayTopic], use_color: Option<bool>) -> String {
    if topics.is_empty() {
        return format!("{}\n", NO_TOPICS);
    }

    let number_width = topics
        .iter()
        .map(|dt| dt.index.to_string().width())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for dt in topics {
        let number = format!("{:>width$}", dt.index.to_string(), width = number_width);
        let count = word_count(dt.topic.words().len());
        if use_color == Some(false) {
            output.push_str(&format!(" {}  {} ({})\n", number, dt.topic.name(), count));
        } else {
            output.push_str(&format!(
                " {}  {} {}\n",
                number.yellow(),
                dt.topic.name().bold(),
                format!("({})", count).dimmed()
            ));
        }
    }
    output
}

fn word_count(n: usize) -> String {
    if n == 1 {
        "1 word".to_string()
    } else {
        format!("{} words", n)
    }
}

/// Renders a topic heading followed by its words as a numbered grid,
/// `words_per_row` cells per line, each cell `N: word` padded to
/// `column_width`.
pub fn render_topic_words(dt: &DisplayTopic, words_per_row: usize, column_width: usize) -> String {
    render_topic_words_internal(dt, words_per_row, column_width, None)
}

fn render_topic_words_internal(
    dt: &DisplayTopic,
    words_per_row: usize,
    column_width: usize,
    use_color: Option<bool>,
) -> String {
    let heading = format!("{} {}", dt.index, dt.topic.name());
    let mut output = if use_color == Some(false) {
        heading
    } else {
        heading.bold().to_string()
    };
    output.push('\n');
    output.push_str(&render_word_grid(dt.topic.words(), words_per_row, column_width));
    output
}

/// Lays out words `N: word` with the word padded to `column_width` display
/// columns. Trailing padding is dropped at the end of each line.
pub fn render_word_grid(words: &WordList, words_per_row: usize, column_width: usize) -> String {
    let per_row = words_per_row.max(1);
    let mut output = String::new();
    let mut line = String::new();

    for (i, word) in words.iter().enumerate() {
        let number = i + 1;
        line.push_str(&format!("{}: {}", number, word));
        let padding = column_width.saturating_sub(word.width());
        line.push_str(&" ".repeat(padding));

        if number % per_row == 0 {
            output.push_str(line.trim_end());
            output.push('\n');
            line.clear();
        }
    }
    if !line.is_empty() {
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// One line per entry, or `empty_message` when there is nothing to show.
pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

/// Renders command messages, colored by level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    messages
        .iter()
        .map(|message| {
            if use_color == Some(false) {
                return format!("{}\n", message.content);
            }
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}
