//! Error types for the API client.

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required path parameter was empty at request-build time. Surfaced
    /// before any network I/O.
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: &'static str },
    /// An HTTP request failed (network error, timeout, or undecodable
    /// response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
