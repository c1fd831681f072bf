use anyhow::Result;

use super::Config;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    insta::assert_snapshot!(res, @r###"
    # Time to wait in milliseconds before a request to the SATHI server times out.
    request-timeout = 30000

    # SATHI server URL.
    server-url = "http://localhost:5000"

    # Color theme for the terminal output. [possible values: light, dark]
    theme = "light"

    # Your user name displayed in the chat prompt.
    # username = ""
    "###);
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["sathi", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["sathi", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
