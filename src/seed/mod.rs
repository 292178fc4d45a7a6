use chrono::{DateTime, TimeZone, Utc};
use diesel::connection::SimpleConnection;
use diesel::insert_into;
use diesel::prelude::*;
use log::info;

use crate::db::schema::{articles, comments, topics, users};
use crate::db::{self, ResultExt};

mod data;

static SCHEMA: &str = "
DROP TABLE IF EXISTS comments;
DROP TABLE IF EXISTS articles;
DROP TABLE IF EXISTS users;
DROP TABLE IF EXISTS topics;

CREATE TABLE topics (
    slug VARCHAR PRIMARY KEY,
    description VARCHAR NOT NULL
);

CREATE TABLE users (
    username VARCHAR PRIMARY KEY,
    name VARCHAR NOT NULL,
    avatar_url VARCHAR NOT NULL
);

CREATE TABLE articles (
    article_id SERIAL PRIMARY KEY,
    title VARCHAR NOT NULL,
    body VARCHAR NOT NULL,
    votes INT NOT NULL DEFAULT 0,
    topic VARCHAR NOT NULL REFERENCES topics(slug),
    author VARCHAR NOT NULL REFERENCES users(username),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE comments (
    comment_id SERIAL PRIMARY KEY,
    author VARCHAR NOT NULL REFERENCES users(username),
    article_id INT NOT NULL REFERENCES articles(article_id) ON DELETE CASCADE,
    votes INT NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    body VARCHAR NOT NULL
);
";

#[derive(Insertable)]
#[diesel(table_name = topics)]
struct NewTopic<'a> {
    slug: &'a str,
    description: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
struct NewUser<'a> {
    username: &'a str,
    name: &'a str,
    avatar_url: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = articles)]
struct NewArticle<'a> {
    title: &'a str,
    body: &'a str,
    votes: i32,
    topic: &'a str,
    author: &'a str,
    created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
struct NewComment<'a> {
    author: &'a str,
    article_id: i32,
    votes: i32,
    created_at: DateTime<Utc>,
    body: &'a str,
}

fn timestamp(millis: i64) -> db::Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| format!("invalid seed timestamp: {}", millis).into())
}

/// Recreates the schema and loads the bundled dataset. Article ids are
/// assigned 1.. in the order of `data::ARTICLES`.
pub fn run(connection: &mut PgConnection) -> db::Result<()> {
    connection.transaction::<_, db::Error, _>(|connection| {
        connection
            .batch_execute(SCHEMA)
            .chain_err(|| "failed to recreate schema")?;

        let new_topics = data::TOPICS
            .iter()
            .map(|&(slug, description)| NewTopic { slug, description })
            .collect::<Vec<_>>();
        insert_into(topics::table).values(&new_topics).execute(connection)?;

        let new_users = data::USERS
            .iter()
            .map(|&(username, name, avatar_url)| NewUser {
                username,
                name,
                avatar_url,
            })
            .collect::<Vec<_>>();
        insert_into(users::table).values(&new_users).execute(connection)?;

        let new_articles = data::ARTICLES
            .iter()
            .map(|a| -> db::Result<NewArticle<'_>> {
                Ok(NewArticle {
                    title: a.title,
                    body: a.body,
                    votes: a.votes,
                    topic: a.topic,
                    author: a.author,
                    created_at: timestamp(a.created_at)?,
                })
            })
            .collect::<db::Result<Vec<_>>>()?;
        insert_into(articles::table)
            .values(&new_articles)
            .execute(connection)?;

        let new_comments = data::COMMENTS
            .iter()
            .map(|c| -> db::Result<NewComment<'_>> {
                Ok(NewComment {
                    author: c.author,
                    article_id: c.article_id,
                    votes: c.votes,
                    created_at: timestamp(c.created_at)?,
                    body: c.body,
                })
            })
            .collect::<db::Result<Vec<_>>>()?;
        insert_into(comments::table)
            .values(&new_comments)
            .execute(connection)?;

        info!(
            "seeded {} topics, {} users, {} articles, {} comments",
            new_topics.len(),
            new_users.len(),
            new_articles.len(),
            new_comments.len()
        );
        Ok(())
    })
}
