pub(crate) mod activities;
pub(crate) mod error;

pub(crate) use error::ApiError;
