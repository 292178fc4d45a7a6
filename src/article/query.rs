//! Validation of the `GET /api/articles` query string.
//!
//! Sort columns and directions are closed enums, so the identifiers that end
//! up in the generated SQL always come from the static strings below. The
//! topic is only ever bound as a parameter.

use std::str::FromStr;

use crate::types::ApiError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    ArticleId,
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortBy {
    pub fn column(self) -> &'static str {
        match self {
            SortBy::ArticleId => "articles.article_id",
            SortBy::Title => "articles.title",
            SortBy::Topic => "articles.topic",
            SortBy::Author => "articles.author",
            SortBy::CreatedAt => "articles.created_at",
            SortBy::Votes => "articles.votes",
            SortBy::CommentCount => "comment_count",
        }
    }
}

impl FromStr for SortBy {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article_id" => Ok(SortBy::ArticleId),
            "title" => Ok(SortBy::Title),
            "topic" => Ok(SortBy::Topic),
            "author" => Ok(SortBy::Author),
            "created_at" => Ok(SortBy::CreatedAt),
            "votes" => Ok(SortBy::Votes),
            "comment_count" => Ok(SortBy::CommentCount),
            _ => Err(ApiError::bad_request("Invalid sort_by query")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl Order {
    pub fn keyword(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

impl FromStr for Order {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(ApiError::bad_request("Invalid order query")),
        }
    }
}

/// A validated listing request. The topic still has to be checked against
/// the `topics` table before the listing runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub sort_by: SortBy,
    pub order: Order,
    pub topic: Option<String>,
}

impl ArticleQuery {
    pub fn parse(
        sort_by: Option<&str>,
        order: Option<&str>,
        topic: Option<&str>,
    ) -> Result<ArticleQuery, ApiError> {
        let sort_by = match sort_by {
            Some(s) => s.parse()?,
            None => SortBy::default(),
        };
        let order = match order {
            Some(s) => s.parse()?,
            None => Order::default(),
        };
        Ok(ArticleQuery {
            sort_by,
            order,
            topic: topic.map(String::from),
        })
    }

    /// `ORDER BY` clause for the listing. Ties fall back to `article_id` in
    /// the same direction so pages are deterministic.
    pub fn order_clause(&self) -> String {
        let direction = self.order.keyword();
        format!(
            "ORDER BY {} {}, articles.article_id {}",
            self.sort_by.column(),
            direction,
            direction
        )
    }
}
