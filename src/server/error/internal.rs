use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A JSON column could not be decoded into its expected shape.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to decode {column} of {table} {id}: {source}")]
    MalformedJson {
        table: &'static str,
        column: &'static str,
        id: i32,
        #[source]
        source: serde_json::Error,
    },

    /// A versioned row has neither stored versions nor legacy content.
    #[error("{table} {id} has no versions")]
    EmptyHistory { table: &'static str, id: i32 },
}
