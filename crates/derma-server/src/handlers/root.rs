//! GET / — plain-text liveness acknowledgment.

pub async fn root() -> &'static str {
    "Server is running successfully!"
}
