//! Handler for the console listing server: the same listing as the browser,
//! rendered as plain text and echoed to the process's stdout.

use crate::{
    errors::AppError,
    handlers::connect,
    render,
    services::storage_service::{ClientProvider, get_objects},
    state::AppState,
};
use axum::extract::State;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{error, warn};

/// `GET /` — list the bucket, write it to stdout and return it as text.
pub async fn console_listing<P: ClientProvider>(
    State(state): State<AppState<P>>,
) -> Result<String, AppError> {
    let client = connect(&state).await?;

    let entries = get_objects(&client, &state.bucket)
        .await
        .inspect_err(|err| {
            error!(bucket = %state.bucket, error = %err, "Got error retrieving list of objects")
        })?;

    let text = render::listing_text(&state.bucket, &entries);

    echo_listing(&mut tokio::io::stdout(), &text).await;

    Ok(text)
}

/// Write the listing to `out`; failures are logged and never fail the request.
async fn echo_listing<W: AsyncWrite + Unpin>(out: &mut W, text: &str) {
    if let Err(err) = out.write_all(text.as_bytes()).await {
        warn!(error = %err, "could not echo listing to stdout");
        return;
    }
    if let Err(err) = out.flush().await {
        warn!(error = %err, "could not flush listing to stdout");
    }
}

#[cfg(test)]
mod tests {
    use super::echo_listing;
    use crate::{
        models::listing::ListingEntry,
        routes::routes::console_routes,
        services::storage_service::testing::FakeStorage,
        state::AppState,
    };
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn root_lists_bucket_as_text() {
        let fake = FakeStorage::with_entries(vec![
            ListingEntry::new("one", 10),
            ListingEntry::new("two", 20),
        ]);
        let app = console_routes().with_state(AppState::new("logs", fake));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(body.matches("Name:").count(), 2);
        assert!(body.contains("Found 2 items in bucket logs"));
    }

    #[tokio::test]
    async fn failure_is_reported_with_status_not_listing() {
        let app = console_routes().with_state(AppState::new("logs", FakeStorage::failing()));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!String::from_utf8_lossy(&body).contains("Found"));
    }

    #[tokio::test]
    async fn listing_is_echoed_verbatim() {
        let mut out: Vec<u8> = Vec::new();

        echo_listing(&mut out, "Objects in logs:\nFound 0 items in bucket logs\n").await;

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Objects in logs:\nFound 0 items in bucket logs\n"
        );
    }

    #[tokio::test]
    async fn health_is_available() {
        let fake = FakeStorage::default();
        let app = console_routes().with_state(AppState::new("logs", fake.clone()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(fake.calls().is_empty());
    }
}
