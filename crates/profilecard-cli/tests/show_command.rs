//! `profilecard show` against a loopback API.

use anyhow::Result;
use profilecard_testing::fixtures::{ada_lovelace_body, ada_lovelace_record, record, response};
use profilecard_testing::{CannedResponse, LoopbackServer, TestWorld};
use profilecard_runtime::Config;

#[test]
fn test_show_plain_prints_card() -> Result<()> {
    let server = LoopbackServer::start(vec![CannedResponse::json(ada_lovelace_body())])?;
    let world = TestWorld::new();

    let result = world.run(&["show", "--endpoint", &server.url()])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "Ada Lovelace (@adalovelace)\n\
         \x20 email     adalovelace@example.com\n\
         \x20 phone     020 7946 0000\n\
         \x20 location  London, United Kingdom\n\
         \x20 born      1815-12-10\n\
         \x20 picture   https://randomuser.me/api/portraits/women/1.jpg\n"
    );
    assert_eq!(server.requests(), vec!["GET /api/ HTTP/1.1".to_string()]);
    Ok(())
}

#[test]
fn test_show_json_is_verbatim_first_record() -> Result<()> {
    let body = response(vec![ada_lovelace_record(), record("Grace", "Hopper")]).to_string();
    let server = LoopbackServer::start(vec![CannedResponse::json(body)])?;
    let world = TestWorld::new();

    let result = world.run(&["show", "--format", "json", "--endpoint", &server.url()])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.json()?, ada_lovelace_record());
    Ok(())
}

#[test]
fn test_show_uses_configured_date_format() -> Result<()> {
    let server = LoopbackServer::start(vec![CannedResponse::json(ada_lovelace_body())])?;
    let mut config = Config::default();
    config.source.endpoint = server.url();
    config.display.date_format = "%d %B %Y".to_string();
    let world = TestWorld::new().with_config(&config);

    let result = world.run(&["show"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("born      10 December 1815"));
    Ok(())
}

#[test]
fn test_show_failure_prints_nothing_and_logs() -> Result<()> {
    let server = LoopbackServer::start(vec![CannedResponse::status(503, "{}")])?;
    let world = TestWorld::new();

    let result = world.run(&["show", "--endpoint", &server.url()])?;

    assert!(result.success());
    assert_eq!(result.stdout(), "");
    assert!(
        result.stderr().contains("Error fetching user"),
        "stderr: {}",
        result.stderr()
    );
    Ok(())
}

#[test]
fn test_show_empty_results_prints_nothing() -> Result<()> {
    let body = response(Vec::new()).to_string();
    let server = LoopbackServer::start(vec![CannedResponse::json(body)])?;
    let world = TestWorld::new();

    let result = world.run(&["show", "--format", "json", "--endpoint", &server.url()])?;

    assert!(result.success());
    assert_eq!(result.stdout(), "");
    assert!(result.stderr().contains("empty_results"), "stderr: {}", result.stderr());
    Ok(())
}

#[test]
fn test_show_rejects_bad_date_format() -> Result<()> {
    let mut config = Config::default();
    config.display.date_format = "%Y-%".to_string();
    let world = TestWorld::new().with_config(&config);

    let result = world.run(&["show"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("date_format"), "stderr: {}", result.stderr());
    Ok(())
}
