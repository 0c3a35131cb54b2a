use axum::{Router, middleware, routing::get};

use crate::db::PeopleStore;
use crate::handlers::people::{
    create_person, delete_person, get_person, list_people, update_person,
};
use crate::middleware::json_content_type;

/// Per-request context: the single store handle owned by the process.
#[derive(Clone)]
pub struct PeopleState {
    pub store: PeopleStore,
}

impl PeopleState {
    pub fn new(store: PeopleStore) -> Self {
        Self { store }
    }
}

pub fn people_router(state: PeopleState) -> Router {
    Router::new()
        .route("/people", get(list_people).post(create_person))
        .route(
            "/people/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .layer(middleware::from_fn(json_content_type))
        .with_state(state)
}
