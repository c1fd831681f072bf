use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Arg;
use clap::Command;

use crate::application::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout."),
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file."),
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    return Command::new("sathi")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(format!("CHAT COMMANDS:\n{}", ui::help_text()))
        .arg_required_else_help(false)
        .subcommand(subcommand_config())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("SATHI_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ServerUrl.to_string())
                .short('s')
                .long(ConfigKey::ServerUrl.to_string())
                .env("SATHI_SERVER_URL")
                .num_args(1)
                .help(format!(
                    "SATHI server URL. [default: {}]",
                    Config::default(ConfigKey::ServerUrl)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::RequestTimeout.to_string())
                .long(ConfigKey::RequestTimeout.to_string())
                .env("SATHI_REQUEST_TIMEOUT")
                .num_args(1)
                .help(format!(
                    "Time to wait in milliseconds before a request to the SATHI server times out. [default: {}]",
                    Config::default(ConfigKey::RequestTimeout)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Theme.to_string())
                .short('t')
                .long(ConfigKey::Theme.to_string())
                .env("SATHI_THEME")
                .num_args(1)
                .help(format!(
                    "Color theme for the terminal output. [default: {}]",
                    Config::default(ConfigKey::Theme)
                ))
                .value_parser(PossibleValuesParser::new(["light", "dark"]))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("SATHI_USERNAME")
                .num_args(1)
                .help("Your user name displayed in the chat prompt. Defaults to your system user name.")
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    if let Some(("config", config_matches)) = matches.subcommand() {
        match config_matches.subcommand() {
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
            }
            _ => {}
        }

        return Ok(false);
    }

    Config::load(build(), vec![&matches]).await?;

    return Ok(true);
}
