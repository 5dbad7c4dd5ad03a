//! Shared query infrastructure: the [`Query`] trait and [`Order`].

use url::Url;

use crate::Error;

/// Trait implemented by all query builders. Provides the endpoint path and
/// URL serialization.
pub trait Query {
    /// Returns the endpoint path with required path parameters substituted
    /// verbatim. Fails with [`Error::MissingParameter`] when a required
    /// parameter is empty; this surfaces before any URL is built or any
    /// request is sent.
    fn path(&self) -> Result<String, Error>;

    /// Appends this query's parameters to the given URL, returning the
    /// modified URL. Unset options contribute no key.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Sort order for list results.
#[derive(Clone, Copy)]
pub enum Order {
    /// Ascending order (oldest/smallest first).
    Asc,
    /// Descending order (newest/largest first).
    Desc,
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Order::Asc => "asc",
                Order::Desc => "desc",
            }
        )
    }
}
