use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Product has no statistics row.
    ///
    /// Every product is created together with its statistics row, so a review landing on
    /// a product without one means the catalog was written around the service layer.
    /// Aborts the review transaction; results in a 500 Internal Server Error.
    #[error("Product {product_id} has no statistics row")]
    MissingProductStatistics {
        /// The product the review was written for
        product_id: i32,
    },

    /// Stored PBV option bytes could not be decoded.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned to client.
    #[error("Stored PBV options for user {user_id} are corrupt: {source}")]
    CorruptPbvOption {
        /// Owner of the corrupt row
        user_id: i32,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// PBV options could not be serialized for storage.
    #[error("Failed to encode PBV options for user {user_id}: {source}")]
    EncodePbvOption {
        user_id: i32,
        #[source]
        source: serde_json::Error,
    },
}
