use rocket::serde::json::{Error as JsonError, Json};
use rocket::{get, patch, State};
use serde::Serialize;
use serde_json::Value;

pub mod models;
pub mod query;

use self::models::Article;
use self::query::ArticleQuery;
use crate::db::Db;
use crate::topic::Topic;
use crate::types::{ApiError, ApiResult, BAD_REQUEST};
use crate::utils::parse_id;

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    article: Article,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    articles: Vec<Article>,
}

/// The part of a `PATCH /api/articles/<id>` body that is acted on. Any other
/// fields are ignored.
#[derive(Debug, PartialEq, Eq)]
pub struct VoteUpdate {
    pub inc_votes: i32,
}

impl VoteUpdate {
    pub fn from_body(body: &Value) -> Result<VoteUpdate, ApiError> {
        let inc_votes = body
            .get("inc_votes")
            .ok_or_else(|| ApiError::bad_request("Bad request, must have inc_votes"))?;
        inc_votes
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(|inc_votes| VoteUpdate { inc_votes })
            .ok_or_else(|| ApiError::bad_request(BAD_REQUEST))
    }
}

#[get("/articles?<sort_by>&<order>&<topic>")]
pub async fn list_articles(
    db: &State<Db>,
    sort_by: Option<&str>,
    order: Option<&str>,
    topic: Option<&str>,
) -> ApiResult<ArticlesResponse> {
    let query = ArticleQuery::parse(sort_by, order, topic)?;
    let articles = db
        .run(move |conn| {
            if let Some(ref slug) = query.topic {
                if !Topic::exists(slug, conn)? {
                    return Ok(None);
                }
            }
            Article::list(&query, conn).map(Some)
        })
        .await?
        .ok_or_else(|| ApiError::bad_request("Invalid topic query"))?;
    Ok(Json(ArticlesResponse { articles }))
}

#[get("/articles/<article_id>")]
pub async fn get_article(db: &State<Db>, article_id: &str) -> ApiResult<ArticleResponse> {
    let id = parse_id(article_id)?;
    let article = db
        .run(move |conn| Article::load_by_id(id, conn))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No article found for article_id: {}", id)))?;
    Ok(Json(ArticleResponse { article }))
}

#[patch("/articles/<article_id>", data = "<body>")]
pub async fn update_votes(
    db: &State<Db>,
    article_id: &str,
    body: Result<Json<Value>, JsonError<'_>>,
) -> ApiResult<ArticleResponse> {
    // An empty body is read as `{}`, which then lacks `inc_votes`.
    let body = match body {
        Ok(Json(value)) => value,
        Err(JsonError::Parse(raw, _)) if raw.trim().is_empty() => Value::Object(Default::default()),
        Err(_) => return Err(ApiError::bad_request(BAD_REQUEST)),
    };
    let update = VoteUpdate::from_body(&body)?;
    let id = parse_id(article_id)?;
    let article = db
        .run(move |conn| Article::increment_votes(id, update.inc_votes, conn))
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "No article found for article_id: {}, cannot update votes",
                id
            ))
        })?;
    Ok(Json(ArticleResponse { article }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_inc_votes_and_ignores_the_rest() {
        let body = json!({ "dont_use_this": "but still update votes", "inc_votes": -100 });
        assert_eq!(
            VoteUpdate::from_body(&body).unwrap(),
            VoteUpdate { inc_votes: -100 }
        );
    }

    #[test]
    fn missing_inc_votes() {
        for body in &[json!({ "name": "steve" }), json!({}), json!([1, 2]), json!(5)] {
            let err = VoteUpdate::from_body(body).unwrap_err();
            assert_eq!(err.message(), "Bad request, must have inc_votes");
        }
    }

    #[test]
    fn inc_votes_must_be_an_integer() {
        let bodies = [
            json!({ "inc_votes": "banana" }),
            json!({ "inc_votes": "1" }),
            json!({ "inc_votes": 1.5 }),
            json!({ "inc_votes": null }),
            json!({ "inc_votes": 3_000_000_000i64 }),
        ];
        for body in bodies.iter() {
            let err = VoteUpdate::from_body(body).unwrap_err();
            assert_eq!(err.message(), "Bad request");
        }
    }
}
