#[macro_use]
extern crate diesel;
#[macro_use]
extern crate error_chain;
#[cfg(test)]
#[macro_use]
extern crate lazy_static;

mod article;
mod comment;
mod db;
mod seed;
mod topic;
mod types;
mod utils;


use std::process;

use clap::{Parser, Subcommand};
use error_chain::ChainedError;
use log::info;
use rocket::{catch, catchers, routes, Build, Rocket};

use db::{Config, Db};
use types::{ApiError, BAD_REQUEST};

#[derive(Debug, Parser)]
#[command(name = "nc-news", about = "News articles, topics and comments over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Serve the API (default)
    Serve,
    /// Recreate the schema and load the bundled dataset
    Seed,
}

#[catch(400)]
fn bad_request() -> ApiError {
    ApiError::bad_request(BAD_REQUEST)
}

// Request bodies the JSON guard rejects.
#[catch(422)]
fn unprocessable_entity() -> ApiError {
    ApiError::bad_request(BAD_REQUEST)
}

#[catch(404)]
fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

#[catch(500)]
fn internal_error() -> ApiError {
    ApiError::Internal("request handler failed".into())
}

pub fn rocket(db: Db) -> Rocket<Build> {
    rocket::build()
        .manage(db)
        .mount(
            "/api",
            routes![
                topic::list_topics,
                article::list_articles,
                article::get_article,
                article::update_votes,
                comment::list_comments,
            ],
        )
        .register(
            "/",
            catchers![bad_request, unprocessable_entity, not_found, internal_error],
        )
}

fn run(cli: Cli) -> db::Result<()> {
    let command = cli.command.unwrap_or(Command::Serve);
    // Rocket installs its own logger when it launches.
    if let Command::Seed = command {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }
    let config = Config::from_env()?;
    let db = Db::open(&config)?;
    match command {
        Command::Seed => {
            let mut connection = db.get()?;
            seed::run(&mut connection)?;
            info!("database seeded");
        }
        Command::Serve => {
            rocket::execute(rocket(db).launch())
                .map_err(|e| db::Error::from(format!("server failed: {}", e)))?;
            info!("server stopped, database pool closed");
        }
    }
    Ok(())
}

fn main() {
    if let Err(ref e) = run(Cli::parse()) {
        eprintln!("{}", e.display_chain());
        process::exit(1);
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["nc-news"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["nc-news", "seed"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Seed)));

        assert!(Cli::try_parse_from(["nc-news", "migrate"]).is_err());
    }
}
