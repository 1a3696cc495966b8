//! Chat command - line-oriented interactive session.

use super::load_responder;
use anyhow::Result;
use console::style;
use lawbot_core::HistoryEntry;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Read queries from stdin until EOF or `exit`/`quit`.
///
/// Collaborator failures are reported per turn and do not end the session.
pub fn run(config_path: &Path, lang: Option<&str>) -> Result<()> {
    let responder = load_responder(config_path, lang)?;
    let mut history: Vec<HistoryEntry> = Vec::new();

    println!(
        "{} Ask about an Indian consumer law problem. Type {} to leave.",
        style("→").cyan(),
        style("exit").cyan()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", style("you>").bold());
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let query = line.trim();

        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            break;
        }

        match responder.respond(query, &history) {
            Ok(reply) => {
                println!("{} {}", style("bot>").green().bold(), reply);
                history.push(HistoryEntry::user(query));
                history.push(HistoryEntry::assistant(reply));
            }
            Err(e) => {
                println!("{} {}", style("×").red(), e);
                if let Some(hint) = e.recovery_suggestion() {
                    println!("  {} {}", style("→").cyan(), hint);
                }
            }
        }
    }

    Ok(())
}
