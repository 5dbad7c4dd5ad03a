use serde::{Deserialize, Serialize};

/// Envelope for endpoints returning a list of records.
///
/// Fields absent from the payload decode to their defaults; a missing
/// `results` array decodes as empty.
#[derive(Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Status string reported by the API, e.g. `"OK"`.
    #[serde(default)]
    pub status: String,

    /// Server-assigned identifier for the request.
    #[serde(default)]
    pub request_id: String,

    /// Number of results in this response.
    #[serde(default)]
    pub count: Option<i64>,

    /// Records matching the query.
    #[serde(default)]
    pub results: Vec<T>,
}

/// Envelope for endpoints returning a single record.
#[derive(Serialize, Deserialize)]
pub struct Response<T> {
    /// Status string reported by the API, e.g. `"OK"`.
    #[serde(default)]
    pub status: String,

    /// Server-assigned identifier for the request.
    #[serde(default)]
    pub request_id: String,

    /// The record, when the payload carries one.
    #[serde(default)]
    pub results: Option<T>,
}
