pub mod catchers;
pub mod config;
pub mod error;
pub mod page;
pub mod processor;
pub mod routes;
pub mod store;
pub mod styles;

use rocket::{catchers, routes, Build, Rocket};

use crate::catchers::{fallback, internal_error, not_found};
use crate::routes::{ballot, cast_vote, static_asset, AppState};

pub fn rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![ballot, cast_vote, static_asset])
        .register("/", catchers![not_found, internal_error, fallback])
}
