pub mod error;
pub mod models;
pub mod validation;
pub mod voter;

pub use error::{IdentityError, ValidationError};
pub use models::*;
pub use validation::*;
pub use voter::{resolve, Voter, VoterId, VOTER_COOKIE};

#[cfg(test)]
mod tests;
