#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;

use anyhow::Error;
use domain::models::AssistantBackend;
use yansi::Paint;

use crate::application::cli;
use crate::application::ui;
use crate::domain::services::ConversationSession;
use crate::infrastructure::backends::sathi::Sathi;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        Paint::red(format!(
            "Oh no! SATHI has failed with the following app version and error.\n\nVersion: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            err
        ))
    );

    process::exit(1);
}

#[tokio::main]
async fn main() {
    let debug_log_dir = env::var("SATHI_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap()
            .join("sathi")
            .to_string_lossy()
            .to_string();
    });

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("sathi")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let ready_res = cli::parse().await;
    if let Err(ready_err) = ready_res {
        handle_error(ready_err);
        return;
    }
    if !ready_res.unwrap() {
        process::exit(0);
    }

    let backend = Box::<Sathi>::default();
    if let Err(err) = backend.health_check().await {
        println!(
            "{}",
            Paint::yellow(format!(
                "Hey, it looks like the SATHI server isn't running, I can't connect to it. You should double check that before we start talking, otherwise I may crash.\n\nError: {err}"
            ))
        );
    }

    let mut session = ConversationSession::new(backend);
    if let Err(err) = ui::start(&mut session).await {
        handle_error(err);
    }

    process::exit(0);
}
