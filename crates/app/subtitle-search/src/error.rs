use thiserror::Error;

/// Errors raised while parsing subtitle and offsets input.
///
/// These describe malformed *application* input (a line that doesn't
/// match the expected grammar, an episode with no offset entry); they
/// are distinct from [`kmismatch_engine::EngineError`], which covers
/// the kernel's own sentinel precondition.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("malformed subtitle line: {line:?}")]
    MalformedSubtitleLine { line: String },

    #[error("malformed timestamp: {text:?}")]
    MalformedTimestamp { text: String },

    #[error("malformed offsets line: {line:?}")]
    MalformedOffsetsLine { line: String },

    #[error("episode {name:?} has no entry in the offsets file")]
    UnknownEpisodeOffset { name: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
