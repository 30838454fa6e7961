use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("validation error: {0}")] Validation(String),
    #[error("backend unavailable: {0}")] BackendUnavailable(String),
    #[error("malformed response: {0}")] MalformedResponse(String),
    #[error("http error: {0}")] Http(String),
}
