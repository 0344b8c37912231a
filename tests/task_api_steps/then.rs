//! Then steps for task REST API scenarios.

use super::world::TaskApiWorld;
use rstest_bdd_macros::then;
use serde_json::Value;

fn returned_task(world: &TaskApiWorld) -> Result<Value, eyre::Report> {
    let body = world
        .last_body
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing response body in scenario world"))?;
    serde_json::from_slice(body).map_err(|err| eyre::eyre!("response is not JSON: {err}"))
}

#[then("the response status is {status:u64}")]
fn response_status(world: &TaskApiWorld, status: u64) -> Result<(), eyre::Report> {
    let actual = world
        .last_status
        .ok_or_else(|| eyre::eyre!("missing response status in scenario world"))?;
    if u64::from(actual.as_u16()) != status {
        return Err(eyre::eyre!("expected status {status}, got {actual}"));
    }
    Ok(())
}

#[then(r#"the returned task {id:u64} reads "{content}""#)]
fn returned_task_reads(
    world: &TaskApiWorld,
    id: u64,
    content: String,
) -> Result<(), eyre::Report> {
    let task = returned_task(world)?;
    if task["id"].as_u64() != Some(id) {
        return Err(eyre::eyre!("expected task id {id}, got {}", task["id"]));
    }
    if task["content"].as_str() != Some(content.as_str()) {
        return Err(eyre::eyre!(
            "expected content {content:?}, got {}",
            task["content"]
        ));
    }
    Ok(())
}

#[then("the returned task is open")]
fn returned_task_is_open(world: &TaskApiWorld) -> Result<(), eyre::Report> {
    expect_done(world, false)
}

#[then("the returned task is done")]
fn returned_task_is_done(world: &TaskApiWorld) -> Result<(), eyre::Report> {
    expect_done(world, true)
}

fn expect_done(world: &TaskApiWorld, expected: bool) -> Result<(), eyre::Report> {
    let task = returned_task(world)?;
    if task["done"].as_bool() != Some(expected) {
        return Err(eyre::eyre!(
            "expected done = {expected}, got {}",
            task["done"]
        ));
    }
    Ok(())
}
