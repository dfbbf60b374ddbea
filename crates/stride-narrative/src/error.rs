use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned placeholder text: {0}")]
    Placeholder(String),

    #[error("AWS config error: {0}")]
    Config(String),
}
