use thiserror::Error as ThisError;

///
/// FilterError
///
/// Fatal input-contract violations raised while compiling a filter.
///
/// Value-level coercion misses are not errors: the offending token is
/// dropped and compilation continues.
///

#[derive(Debug, ThisError)]
pub enum FilterError {
    #[error("unknown combine type '{value}'; expected 'and' or 'or'")]
    UnknownCombineType { value: String },

    #[error("cannot resolve segment '{segment}' of path '{path}' on '{entity}'")]
    UnresolvedPath {
        entity: &'static str,
        path: String,
        segment: String,
    },

    #[error("path '{path}' on '{entity}' traverses non-record field '{segment}'")]
    NonRecordSegment {
        entity: &'static str,
        path: String,
        segment: String,
    },

    #[error("range token '{token}' must have exactly two '&'-separated parts, found {segments}")]
    RangeArity { token: String, segments: usize },

    #[error("negation nested deeper than {limit} levels")]
    NegationDepth { limit: usize },

    #[error("malformed query string: {0}")]
    QueryString(#[from] serde_urlencoded::de::Error),
}

impl FilterError {
    pub(crate) fn unresolved_path(entity: &'static str, path: &str, segment: &str) -> Self {
        Self::UnresolvedPath {
            entity,
            path: path.to_string(),
            segment: segment.to_string(),
        }
    }

    pub(crate) fn non_record_segment(entity: &'static str, path: &str, segment: &str) -> Self {
        Self::NonRecordSegment {
            entity,
            path: path.to_string(),
            segment: segment.to_string(),
        }
    }
}
