use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rocket::serde::json::Json;
use rocket::{get, State};
use serde::Serialize;

use crate::article::models::Article;
use crate::db::schema::comments;
use crate::db::{self, Db};
use crate::types::{ApiError, ApiResult};
use crate::utils::{parse_id, serialize_date};

#[derive(Debug, Serialize, Queryable)]
pub struct Comment {
    pub comment_id: i32,
    pub author: String,
    pub article_id: i32,
    pub votes: i32,
    #[serde(serialize_with = "serialize_date")]
    pub created_at: DateTime<Utc>,
    pub body: String,
}

impl Comment {
    /// Comments on one article, newest first.
    pub fn load_for_article(
        article_id: i32,
        connection: &mut PgConnection,
    ) -> db::Result<Vec<Comment>> {
        let found = comments::table
            .filter(comments::article_id.eq(article_id))
            .order((comments::created_at.desc(), comments::comment_id.desc()))
            .load::<Comment>(connection)?;
        Ok(found)
    }
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    comments: Vec<Comment>,
}

#[get("/articles/<article_id>/comments")]
pub async fn list_comments(db: &State<Db>, article_id: &str) -> ApiResult<CommentsResponse> {
    let id = parse_id(article_id)?;
    let comments = db
        .run(move |conn| {
            if !Article::exists(id, conn)? {
                return Ok(None);
            }
            Comment::load_for_article(id, conn).map(Some)
        })
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No article found for article_id: {}", id)))?;
    Ok(Json(CommentsResponse { comments }))
}
