use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::select;
use rocket::get;
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

use crate::db::schema::topics;
use crate::db::{self, Db};
use crate::types::ApiResult;

#[derive(Debug, Serialize, Queryable)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

impl Topic {
    pub fn load_all(connection: &mut PgConnection) -> db::Result<Vec<Topic>> {
        Ok(topics::table.load::<Topic>(connection)?)
    }

    pub fn exists(slug: &str, connection: &mut PgConnection) -> db::Result<bool> {
        let found = select(exists(topics::table.find(slug))).get_result::<bool>(connection)?;
        Ok(found)
    }
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    topics: Vec<Topic>,
}

#[get("/topics")]
pub async fn list_topics(db: &State<Db>) -> ApiResult<TopicsResponse> {
    let topics = db.run(|conn| Topic::load_all(conn)).await?;
    Ok(Json(TopicsResponse { topics }))
}
