use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use ring::rand::SecureRandom;
use serde::{Serialize, Deserialize};

use crate::error::IdentityError;

pub const VOTER_COOKIE: &str = "voter_id";
pub const VOTER_ID_BYTES: usize = 16;
pub const MAX_VOTER_ID_LENGTH: usize = 128;

/// Opaque visitor token. Never stored server side, only read back from the cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    pub fn generate<R: SecureRandom>(rng: &R) -> Result<Self, IdentityError> {
        let mut bytes = [0u8; VOTER_ID_BYTES];
        rng.fill(&mut bytes).map_err(|_| IdentityError::RandomSource)?;
        Ok(Self(URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Accepts a presented token verbatim if it looks like one we could have issued.
    pub fn parse(raw: &str) -> Option<Self> {
        let recognized = !raw.is_empty()
            && raw.len() <= MAX_VOTER_ID_LENGTH
            && raw.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

        recognized.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voter {
    pub id: VoterId,
    /// Set when the id was minted for this request and the client still has to store it.
    pub issued: bool,
}

pub fn resolve<R: SecureRandom>(presented: Option<&str>, rng: &R) -> Result<Voter, IdentityError> {
    match presented.and_then(VoterId::parse) {
        Some(id) => Ok(Voter { id, issued: false }),
        None => Ok(Voter { id: VoterId::generate(rng)?, issued: true }),
    }
}

#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use ring::rand::SystemRandom;
    use rocket::http::{Cookie, SameSite, Status};
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for Voter {
        type Error = IdentityError;

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            let cookies = req.cookies();
            let presented = cookies.get(VOTER_COOKIE).map(|cookie| cookie.value());

            match resolve(presented, &SystemRandom::new()) {
                Ok(voter) => {
                    if voter.issued {
                        cookies.add(
                            Cookie::build((VOTER_COOKIE, voter.id.as_str().to_string()))
                                .path("/")
                                .same_site(SameSite::Lax)
                                .http_only(true),
                        );
                    }
                    Outcome::Success(voter)
                }
                Err(e) => Outcome::Error((Status::InternalServerError, e)),
            }
        }
    }
}
