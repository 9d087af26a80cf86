use crate::pipeline::Stage;
use thiserror::Error;

/// Result type alias for relaymap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Address field of a relay record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    /// The `ipv4_addr_in` field
    Ipv4,
    /// The `ipv6_addr_in` field
    Ipv6,
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ipv4 => write!(f, "ipv4"),
            Self::Ipv6 => write!(f, "ipv6"),
        }
    }
}

/// Errors that can occur while fetching or aggregating a relay inventory
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("HTTP status code {code} from {url}")]
    Status {
        /// HTTP status code
        code: u16,
        /// URL that was requested
        url: String,
    },

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// The caller cancelled the fetch before it completed
    #[error("fetch cancelled")]
    Cancelled,

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The inventory document is not a JSON array of relay objects
    #[error("cannot decode relay inventory: {0}")]
    Decode(#[from] serde_json::Error),

    /// An address field does not hold an address of the expected family
    #[error("cannot parse {field} address {value:?} of relay #{index}")]
    Validation {
        /// Position of the relay in the inventory document
        index: usize,
        /// Which address field failed
        field: AddressField,
        /// The literal value found in the document
        value: String,
    },
}

impl Error {
    /// Returns the pipeline stage that produced this error, if any
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        match self {
            Self::Decode(_) => Some(Stage::Decoding),
            Self::Validation { .. } => Some(Stage::Validating),
            _ => None,
        }
    }

    /// Returns true if the error came from retrieving the document
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::Status { .. }
                | Self::Timeout(_)
                | Self::Connection(_)
                | Self::Cancelled
                | Self::InvalidUrl(_)
        )
    }

    /// Returns the HTTP status code if the server rejected the request
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
