use thiserror::Error;

/// Errors returned by fallible graph operations and writers.
///
/// Structural no-ops (adding a present vertex, removing an absent edge, ...) are not
/// errors and are reported through `bool`/count return values instead.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A predicate-based operation was invoked without a predicate
    #[error("{operation} requires a predicate, but none was supplied")]
    MissingPredicate {
        /// Name of the operation that was called
        operation: &'static str,
    },

    /// A line of a textual graph format could not be parsed
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        message: String,
    },

    /// A vertex has no faithful textual form in the requested format
    #[error("vertex `{vertex}` cannot be written: {reason}")]
    UnwritableVertex {
        /// `Display` output of the vertex
        vertex: String,
        reason: &'static str,
    },

    /// A file format name was not recognized
    #[error("unknown file format `{0}`")]
    UnknownFormat(String),

    /// Reading or writing a graph failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand for results of graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Shorthand for creating a [`GraphError::MissingPredicate`]
macro_rules! missing_predicate {
    ($operation: expr) => {
        crate::error::GraphError::MissingPredicate {
            operation: $operation,
        }
    };
}

/// Shorthand for creating a [`GraphError::Parse`]
macro_rules! parse_error {
    ($line: expr, $($arg:tt)*) => {
        crate::error::GraphError::Parse {
            line: $line,
            message: format!($($arg)*),
        }
    };
}

pub(crate) use missing_predicate;
pub(crate) use parse_error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = missing_predicate!("remove_vertices_if");
        assert_eq!(
            err.to_string(),
            "remove_vertices_if requires a predicate, but none was supplied"
        );

        let err = parse_error!(3, "expected at most {} tokens", 2);
        assert_eq!(err.to_string(), "line 3: expected at most 2 tokens");

        let err = GraphError::UnknownFormat("metis".into());
        assert_eq!(err.to_string(), "unknown file format `metis`");

        let err: GraphError = std::io::Error::other("disk full").into();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
