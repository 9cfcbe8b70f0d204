use rowsync_markup::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("row `{key}` has unparseable metadata: {source}")]
    Metadata {
        key: String,
        #[source]
        source: ParseError,
    },

    #[error("row `{0}` is missing the identifier field `{1}`")]
    MissingIdentifier(String, String),

    #[error("form has no control named `{0}` to hold the identifier")]
    MissingIdentifierControl(String),
}

pub type BindingResult<T> = Result<T, BindingError>;
