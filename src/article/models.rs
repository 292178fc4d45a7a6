use chrono::{DateTime, Utc};
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Nullable, Text, Timestamptz};
use diesel::{select, sql_query, update};
use serde::Serialize;

use super::query::ArticleQuery;
use crate::db;
use crate::db::schema::articles;
use crate::utils::serialize_date;

static SELECT_ARTICLE: &str = "SELECT articles.article_id,
       articles.title,
       articles.body,
       articles.topic,
       articles.author,
       articles.created_at,
       articles.votes,
       COUNT(comments.comment_id) AS comment_count
  FROM articles
  LEFT JOIN comments ON comments.article_id = articles.article_id";

/// An article row together with the number of comments that reference it.
#[derive(Debug, Serialize, QueryableByName)]
pub struct Article {
    #[diesel(sql_type = Integer)]
    pub article_id: i32,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Text)]
    pub body: String,
    #[diesel(sql_type = Text)]
    pub topic: String,
    #[diesel(sql_type = Text)]
    pub author: String,
    #[diesel(sql_type = Timestamptz)]
    #[serde(serialize_with = "serialize_date")]
    pub created_at: DateTime<Utc>,
    #[diesel(sql_type = Integer)]
    pub votes: i32,
    #[diesel(sql_type = BigInt)]
    pub comment_count: i64,
}

impl Article {
    pub fn load_by_id(id: i32, connection: &mut PgConnection) -> db::Result<Option<Article>> {
        let query = format!(
            "{} WHERE articles.article_id = $1 GROUP BY articles.article_id",
            SELECT_ARTICLE
        );
        let article = sql_query(query)
            .bind::<Integer, _>(id)
            .get_result::<Article>(connection)
            .optional()?;
        Ok(article)
    }

    pub fn list(query: &ArticleQuery, connection: &mut PgConnection) -> db::Result<Vec<Article>> {
        let sql = format!(
            "{} WHERE ($1::text IS NULL OR articles.topic = $1) GROUP BY articles.article_id {}",
            SELECT_ARTICLE,
            query.order_clause()
        );
        let articles = sql_query(sql)
            .bind::<Nullable<Text>, _>(query.topic.clone())
            .load::<Article>(connection)?;
        Ok(articles)
    }

    pub fn exists(id: i32, connection: &mut PgConnection) -> db::Result<bool> {
        let found = select(exists(articles::table.find(id))).get_result::<bool>(connection)?;
        Ok(found)
    }

    /// Adds `inc_votes` to the stored count in a single `UPDATE` and returns
    /// the updated row, or `None` when no article has that id.
    pub fn increment_votes(
        id: i32,
        inc_votes: i32,
        connection: &mut PgConnection,
    ) -> db::Result<Option<Article>> {
        connection.transaction::<_, db::Error, _>(|connection| {
            let updated = update(articles::table.find(id))
                .set(articles::votes.eq(articles::votes + inc_votes))
                .execute(connection)?;
            if updated == 0 {
                return Ok(None);
            }
            Article::load_by_id(id, connection)
        })
    }
}
