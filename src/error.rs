use thiserror::Error;

/// Every fatal condition the pipeline can raise.
///
/// Policy: all errors are fatal at the pipeline level. Nothing here is
/// retried or degrades gracefully; a caller sees exactly one of these
/// and stops.
#[derive(Error, Debug)]
pub enum Error {
  /// The word list is unreadable, contains a disallowed character, or
  /// is not strictly ascending.
  #[error("invalid input at word {index}: {reason}")]
  InvalidInput { index: usize, reason: String },

  /// The linearized array would need more than 2^22 records to address.
  #[error("compressed array exceeds 2^22 nodes ({len} nodes)")]
  CapacityExceeded { len: usize },

  /// Stage 5 re-extraction disagreed with the input. Either a bug in
  /// the compression stages or a hash collision in stage 2.
  #[error("verifier disagreement: {detail}")]
  CorruptionDetected { detail: String },

  /// The output sink rejected a write.
  #[error("i/o failure: {0}")]
  IoFailure(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
