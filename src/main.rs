//! Clinic Admin - command-line client for the practice website admin API.
//!
//! Authenticates against the API's login endpoint, keeps the bearer token
//! in a local session file and exposes the content resources (hero, about,
//! education, work experience, services, locations, testimonials, news,
//! contact, submissions, settings) as commands.

mod api;
mod app;
mod auth;
mod config;
mod models;

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!(
        "Usage: clinic-admin <command>

Commands:
  login                      Sign in to the admin API
  logout                     Drop the local session
  status                     Show session state and verify it with the server
  dashboard                  Content counts across the main resources
  list <resource>            List services|locations|testimonials|news|submissions|experience
  show <section>             Show hero|about|education|contact|settings
  set <section>              Replace hero|about|education|contact|settings from JSON on stdin
  add <resource>             Create a service|location|testimonial|news|experience from JSON on stdin
  update <resource> <id>     Update a service|location|testimonial|news|experience from JSON on stdin
  read <submission-id>       Mark a contact submission as read
  delete <resource> <id>     Delete a service|location|testimonial|news|experience|submission
  export                     Dump all content resources as JSON

The API base URL comes from CLINIC_ADMIN_API_URL, the config file, or
defaults to http://localhost:5000/api."
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("Clinic admin client starting");

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        std::process::exit(2)
    };

    let mut app = App::new()?;

    match command.as_str() {
        "login" => app.login_interactive().await,
        "logout" => app.logout(),
        "status" => app.status().await,
        "dashboard" => app.dashboard().await,
        "list" => {
            let resource = args.get(2).context("list needs a resource")?;
            app.list(resource).await
        }
        "show" => {
            let section = args.get(2).context("show needs a section")?;
            app.show(section).await
        }
        "set" => {
            let section = args.get(2).context("set needs a section")?;
            app.set_section(section).await
        }
        "add" => {
            let resource = args.get(2).context("add needs a resource")?;
            app.add(resource).await
        }
        "update" => {
            let resource = args.get(2).context("update needs a resource")?;
            let id = args.get(3).context("update needs an id")?;
            app.update(resource, id).await
        }
        "read" => {
            let id = args.get(2).context("read needs a submission id")?;
            app.mark_submission_read(id).await
        }
        "delete" => {
            let resource = args.get(2).context("delete needs a resource")?;
            let id = args.get(3).context("delete needs an id")?;
            app.delete(resource, id).await
        }
        "export" => app.export().await,
        _ => {
            print_usage();
            std::process::exit(2)
        }
    }
}
