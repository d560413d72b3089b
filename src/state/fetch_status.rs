use std::fmt;

/// Fetch outcome recorded for a URL in the visited table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    /// URL is known to the crawl but no fetch has classified it yet.
    ///
    /// This is also the terminal state for URLs that answered 4xx or
    /// exhausted their retry budget; they are simply never marked `Ok`.
    #[default]
    NotAsked,

    /// HTTP 200 observed
    Ok,

    /// HTTP >= 500 observed while retry budget remained
    ServerError,
}

impl FetchStatus {
    /// Returns true if this status makes the URL part of the crawl result
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotAsked => "not_asked",
            Self::Ok => "ok",
            Self::ServerError => "server_error",
        };
        write!(f, "{}", s)
    }
}
