//! When steps for task REST API scenarios.

use super::world::TaskApiWorld;
use axum::{
    body::Body,
    http::{Method, Request, header},
};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use serde_json::{Value, json};

fn request(
    method: Method,
    uri: &str,
    body: Option<&Value>,
) -> Result<Request<Body>, eyre::Report> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .wrap_err("build request")
}

#[when(r#"a client creates a task "{content}""#)]
fn create_task(world: &mut TaskApiWorld, content: String) -> Result<(), eyre::Report> {
    let body = json!({ "content": content, "done": false });
    world.dispatch(request(Method::POST, "/tasks", Some(&body))?)
}

#[when(r#"a client replaces task {id:u64} with "{content}" marked done"#)]
fn replace_task_done(
    world: &mut TaskApiWorld,
    id: u64,
    content: String,
) -> Result<(), eyre::Report> {
    let body = json!({ "content": content, "done": true });
    world.dispatch(request(Method::PUT, &format!("/tasks/{id}"), Some(&body))?)
}

#[when("a client fetches task {id:u64}")]
fn fetch_task(world: &mut TaskApiWorld, id: u64) -> Result<(), eyre::Report> {
    world.dispatch(request(Method::GET, &format!("/tasks/{id}"), None)?)
}

#[when("a client marks task {id:u64} as done")]
fn mark_task_done(world: &mut TaskApiWorld, id: u64) -> Result<(), eyre::Report> {
    world.dispatch(request(Method::PATCH, &format!("/tasks/{id}"), None)?)
}

#[when("a client deletes task {id:u64}")]
fn delete_task(world: &mut TaskApiWorld, id: u64) -> Result<(), eyre::Report> {
    world.dispatch(request(Method::DELETE, &format!("/tasks/{id}"), None)?)
}
