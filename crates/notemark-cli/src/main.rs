//! notemark CLI - Convert, inspect and replay edits on notemark notes
//!
//! Usage:
//!   nmcli [OPTIONS] <COMMAND>
//!
//! Commands:
//!   parse   Parse note text and show its block structure
//!   render  Render a JSON document back to note text
//!   check   Report whether a note has content
//!   type    Replay keystrokes through an editing session
//!   stats   Show note statistics

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use notemark_core::{has_content, to_document, to_text, Block, Document, EditOutcome, Editor};
use thiserror::Error;
use tracing::{debug, info};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "nmcli")]
#[command(about = "Convert, inspect and replay edits on notemark notes")]
#[command(version)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse note text and show its block structure
    Parse {
        /// Print the document as JSON
        #[arg(short, long)]
        json: bool,
        /// Note file (reads stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Render a JSON document back to note text
    Render {
        /// JSON document file (reads stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Report whether a note has content; exits with 2 if it has none
    Check {
        /// Note file (reads stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Replay keystrokes through an editing session and print the result
    ///
    /// `\b` is backspace, `\n` splits the block, `\\` is a literal backslash.
    Type {
        /// Disable live shortcuts
        #[arg(long)]
        plain: bool,
        /// Note file to start from (starts from an empty note if omitted)
        #[arg(long, value_name = "FILE")]
        start: Option<PathBuf>,
        /// Keys to type at the end of the note
        keys: String,
    },
    /// Show note statistics
    Stats {
        /// Note file (reads stdin if omitted)
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("NOTEMARK_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("notemark_core=debug,nmcli=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Runs a command, returning the process exit code.
fn run(command: Command) -> Result<i32, CliError> {
    match command {
        Command::Parse { json, file } => {
            let input = read_input(file.as_deref())?;
            cmd_parse(&input, json)?;
        }
        Command::Render { file } => {
            let input = read_input(file.as_deref())?;
            cmd_render(&input)?;
        }
        Command::Check { file } => {
            let input = read_input(file.as_deref())?;
            return Ok(cmd_check(&input));
        }
        Command::Type { plain, start, keys } => {
            let input = match start {
                Some(path) => read_input(Some(&path))?,
                None => String::new(),
            };
            cmd_type(&input, &keys, plain);
        }
        Command::Stats { file } => {
            let input = read_input(file.as_deref())?;
            cmd_stats(&input);
        }
    }
    Ok(0)
}

fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(input: &str, json: bool) -> Result<(), CliError> {
    let doc = to_document(Some(input));
    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Blocks: {}", doc.blocks.len());
    for (i, block) in doc.blocks.iter().enumerate() {
        println!("  [{}] {}", i + 1, describe_block(block));
        if let Block::BulletedList(list) = block {
            for (j, item) in list.children.iter().enumerate() {
                let text: String = item.children.iter().map(|r| r.text.as_str()).collect();
                println!("      {}. {:?}", j + 1, text);
            }
        }
    }
    Ok(())
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Paragraph(_) => format!("Paragraph {:?}", block.text()),
        Block::Heading(h) => format!("Heading (level {}) {:?}", h.level, block.text()),
        Block::Quote(_) => format!("Quote {:?}", block.text()),
        Block::Todo(t) => {
            let mark = if t.done { "done" } else { "open" };
            format!("Todo ({}) {:?}", mark, block.text())
        }
        Block::BulletedList(l) => format!("BulletedList ({} items)", l.children.len()),
        Block::ListItem(_) => format!("ListItem {:?}", block.text()),
        Block::Raw(r) => format!("Raw {:?}", r.text.as_deref().unwrap_or("")),
    }
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(input: &str) -> Result<(), CliError> {
    let doc: Document = serde_json::from_str(input)?;
    debug!(blocks = doc.len(), "loaded JSON document");
    println!("{}", to_text(&doc));
    Ok(())
}

// =============================================================================
// Check Command
// =============================================================================

fn cmd_check(input: &str) -> i32 {
    let doc = to_document(Some(input));
    if has_content(&doc) {
        println!("has content");
        0
    } else {
        println!("empty");
        2
    }
}

// =============================================================================
// Type Command
// =============================================================================

/// A decoded keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Key {
    Text(char),
    Backspace,
    Break,
}

fn decode_keys(keys: &str) -> Vec<Key> {
    let mut out = Vec::with_capacity(keys.len());
    let mut chars = keys.chars();
    while let Some(c) = chars.next() {
        let key = match c {
            '\\' => match chars.next() {
                Some('b') => Key::Backspace,
                Some('n') => Key::Break,
                Some(other) if other != '\\' => {
                    out.push(Key::Text('\\'));
                    Key::Text(other)
                }
                _ => Key::Text('\\'),
            },
            '\u{8}' => Key::Backspace,
            '\n' => Key::Break,
            _ => Key::Text(c),
        };
        out.push(key);
    }
    out
}

fn cmd_type(input: &str, keys: &str, plain: bool) {
    let mut editor = Editor::from_markdown(input).with_shortcuts(!plain);
    editor.move_to_end();

    let mut rewrites = 0usize;
    for key in decode_keys(keys) {
        let outcome = match key {
            Key::Text(c) => editor.insert_text(c.encode_utf8(&mut [0; 4])),
            Key::Backspace => editor.delete_backward(),
            Key::Break => editor.insert_break(),
        };
        if matches!(outcome, EditOutcome::Rewritten(_) | EditOutcome::Demoted(_)) {
            rewrites += 1;
        }
    }

    info!(rewrites, "replayed keystrokes");
    println!("{}", editor.to_markdown());
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(input: &str) {
    let doc = to_document(Some(input));
    let stats = NoteStats::from_document(&doc, input);

    println!("Note Statistics");
    println!("---------------");
    println!("Has content:  {}", has_content(&doc));
    println!();
    println!("Blocks:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Headings:       {}", stats.headings);
    println!("  Quotes:         {}", stats.quotes);
    println!("  Lists:          {}", stats.lists);
    println!("  List items:     {}", stats.list_items);
    println!("  Todos:          {} ({} done)", stats.todos, stats.todos_done);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);
}

#[derive(Debug, Default, PartialEq, Eq)]
struct NoteStats {
    total_blocks: usize,
    paragraphs: usize,
    headings: usize,
    quotes: usize,
    lists: usize,
    list_items: usize,
    todos: usize,
    todos_done: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl NoteStats {
    fn from_document(doc: &Document, input: &str) -> Self {
        let mut stats = Self {
            chars: input.chars().count(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
            ..Self::default()
        };

        for block in &doc.blocks {
            stats.total_blocks += 1;
            match block {
                Block::Paragraph(_) => stats.paragraphs += 1,
                Block::Heading(_) => stats.headings += 1,
                Block::Quote(_) => stats.quotes += 1,
                Block::Todo(t) => {
                    stats.todos += 1;
                    if t.done {
                        stats.todos_done += 1;
                    }
                }
                Block::BulletedList(l) => {
                    stats.lists += 1;
                    stats.list_items += l.children.len();
                }
                Block::ListItem(_) => stats.list_items += 1,
                Block::Raw(_) => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_escapes() {
        assert_eq!(
            decode_keys("a\\bb\\nc"),
            vec![
                Key::Text('a'),
                Key::Backspace,
                Key::Text('b'),
                Key::Break,
                Key::Text('c'),
            ]
        );
    }

    #[test]
    fn test_decode_literal_backslashes() {
        assert_eq!(decode_keys("\\\\"), vec![Key::Text('\\')]);
        assert_eq!(decode_keys("\\x"), vec![Key::Text('\\'), Key::Text('x')]);
        assert_eq!(
            decode_keys("a\\"),
            vec![Key::Text('a'), Key::Text('\\')]
        );
    }

    #[test]
    fn test_decode_control_chars() {
        assert_eq!(decode_keys("\u{8}\n"), vec![Key::Backspace, Key::Break]);
    }

    #[test]
    fn test_stats_counts() {
        let input = "# Title\n- a\n- b\n[x] done\n[] open\n> quote\nplain";
        let doc = to_document(Some(input));
        let stats = NoteStats::from_document(&doc, input);
        assert_eq!(stats.total_blocks, 6);
        assert_eq!(stats.headings, 1);
        assert_eq!(stats.lists, 1);
        assert_eq!(stats.list_items, 2);
        assert_eq!(stats.todos, 2);
        assert_eq!(stats.todos_done, 1);
        assert_eq!(stats.quotes, 1);
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.lines, 7);
    }

    #[test]
    fn test_cli_parses_type_command() {
        let cli = Cli::parse_from(["nmcli", "-v", "type", "--plain", "# x"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Type { plain, start, keys } => {
                assert!(plain);
                assert!(start.is_none());
                assert_eq!(keys, "# x");
            }
            other => panic!("Expected type command, got {:?}", other),
        }
    }

    #[test]
    fn test_json_output_round_trips() {
        let doc = to_document(Some("# Plan\n- a\n[x] b"));
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
