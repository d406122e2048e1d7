use std::path::PathBuf;
use std::sync::Arc;

use include_dir::{include_dir, Dir};
use rocket::form::Form;
use rocket::http::ContentType;
use rocket::response::content::RawHtml;
use rocket::{get, post, FromForm, State};
use shared::{CandidateOptions, Voter};
use tracing::{error, instrument};

use crate::{
    config::Config,
    error::ApiError,
    page::BallotPage,
    processor::{AppendPolicy, Submission, VoteProcessor},
    store::VoteSink,
};

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

const STORE_FAILURE_MESSAGE: &str = "Your vote could not be recorded right now. Please try again.";

pub struct AppState {
    pub options: CandidateOptions,
    pub hostname: String,
    pub append: AppendPolicy,
    pub sink: Arc<dyn VoteSink>,
}

impl AppState {
    pub fn new(config: Config, sink: Arc<dyn VoteSink>) -> Self {
        Self {
            options: config.options,
            hostname: config.hostname,
            append: config.append,
            sink,
        }
    }

    fn page(&self) -> BallotPage<'_> {
        BallotPage::new(&self.options, &self.hostname)
    }
}

#[derive(Debug, FromForm)]
pub struct BallotForm {
    pub vote: Option<String>,
}

#[instrument(skip(state, voter), fields(voter_id = %voter.id))]
#[get("/")]
pub async fn ballot(state: &State<AppState>, voter: Voter) -> RawHtml<String> {
    RawHtml(state.page().render())
}

#[instrument(skip(state, voter, form), fields(voter_id = %voter.id))]
#[post("/", data = "<form>")]
pub async fn cast_vote(
    state: &State<AppState>,
    voter: Voter,
    form: Form<BallotForm>,
) -> Result<RawHtml<String>, ApiError> {
    let submission = VoteProcessor::submit(
        state.sink.as_ref(),
        &state.append,
        &state.options,
        &voter,
        form.vote.as_deref(),
    )
    .await;

    match submission {
        Ok(Submission::Recorded(record)) => Ok(RawHtml(state.page().with_vote(&record.vote).render())),
        Ok(Submission::Rejected(_)) => Ok(RawHtml(state.page().render())),
        Err(e) => {
            error!("Failed to record vote: {}", e);
            Err(ApiError::StoreUnavailable(state.page().with_error(STORE_FAILURE_MESSAGE).render()))
        }
    }
}

#[get("/static/<path..>")]
pub async fn static_asset(path: PathBuf) -> Option<(ContentType, &'static [u8])> {
    let file = STATIC_DIR.get_file(&path)?;
    let content_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Binary);

    Some((content_type, file.contents()))
}
