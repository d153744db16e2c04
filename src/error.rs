use thiserror::Error;

use crate::record::MAX_IDENTIFIER_LEN;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum GeoKnnError {
    /// A record identifier longer than [`MAX_IDENTIFIER_LEN`] bytes.
    #[error("identifier is {0} bytes, the maximum is {max}", max = MAX_IDENTIFIER_LEN)]
    IdentifierTooLong(usize),

    /// An insert was issued before any tree was initialized.
    #[error("no active tree; call initialize first")]
    Uninitialized,
}

pub type Result<T> = std::result::Result<T, GeoKnnError>;
