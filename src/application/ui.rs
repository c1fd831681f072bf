use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::SlashCommand;
use crate::domain::services::ConversationSession;

pub fn help_text() -> String {
    return [
        "- /upload PATH - Upload a document for the assistant to analyze",
        "- /help - Show chat commands",
        "- /quit - Exit (alias /exit, /q)",
    ]
    .join("\n");
}

fn assistant_line(text: &str) -> String {
    if Config::get(ConfigKey::Theme) == "dark" {
        return Paint::cyan(text).to_string();
    }

    return Paint::blue(text).to_string();
}

fn error_line(text: &str) -> String {
    return Paint::red(text).to_string();
}

fn status_line(text: &str) -> String {
    return Paint::new(text).dimmed().to_string();
}

/// Line-based front end over the conversation session. Renders turns, a
/// thinking line while a request is outstanding, and a readable line for
/// every failure so the conversation never stalls silently.
pub async fn start(session: &mut ConversationSession) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let username = Config::get(ConfigKey::Username);

    println!(
        "{}",
        assistant_line("Hey there! I'm SATHI, your hospitality assistant. What can I do for you?")
    );

    loop {
        stdout.write_all(format!("{username} > ").as_bytes()).await?;
        stdout.flush().await?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        if let Some(cmd) = SlashCommand::parse(&line) {
            if cmd.is_quit() {
                break;
            }
            if cmd.is_help() {
                println!("{}", help_text());
                continue;
            }
            if cmd.is_upload() {
                upload(session, &cmd.args).await;
                continue;
            }
        }

        if line.trim().is_empty() {
            continue;
        }

        println!("{}", status_line("SATHI is thinking..."));
        match session.send(&line).await {
            Ok(reply) => println!("{}", assistant_line(&reply)),
            Err(err) => println!("{}", error_line(&format!("Error: {err}"))),
        }
    }

    return Ok(());
}

async fn upload(session: &mut ConversationSession, args: &[String]) {
    if args.is_empty() {
        println!("{}", error_line("Usage: /upload PATH"));
        return;
    }

    let file_path = path::PathBuf::from(&args[0]);
    let filename = file_path
        .file_name()
        .map(|e| return e.to_string_lossy().to_string())
        .unwrap_or_else(|| return args[0].to_string());

    let bytes = match fs::read(&file_path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            println!(
                "{}",
                error_line(&format!("Unable to read {path}: {err}", path = args[0]))
            );
            return;
        }
    };

    println!("{}", status_line("Uploading and analyzing document..."));
    match session.send_attachment(&filename, bytes).await {
        Ok(analysis) => {
            println!(
                "{}",
                assistant_line(&format!(
                    "I've analyzed the document \"{}\". Here's what I found:",
                    analysis.filename
                ))
            );
            println!("{}", assistant_line(&analysis.analysis));
        }
        Err(err) => {
            println!("{}", error_line(&format!("Error: {err}")));
        }
    };
}
