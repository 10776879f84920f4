//! Handlers for the interactive bucket browser: list, add and delete the demo
//! object. Failures are logged with full detail and answered with a short
//! JSON error (500 for configuration, 502 for the remote call).

use crate::{
    errors::AppError,
    handlers::{connect, origin::SameOrigin},
    models::listing::{FIXED_OBJECT_BODY, FIXED_OBJECT_KEY},
    render,
    routes::routes::LIST_PATH,
    services::storage_service::{ClientProvider, delete_item, get_objects, put_file},
    state::AppState,
};
use axum::{
    extract::State,
    response::{Html, Redirect},
};
use bytes::Bytes;
use tracing::{error, info};

/// `GET /s3` — render the bucket listing as HTML.
pub async fn browse<P: ClientProvider>(
    State(state): State<AppState<P>>,
) -> Result<Html<String>, AppError> {
    let client = connect(&state).await?;

    let entries = get_objects(&client, &state.bucket)
        .await
        .inspect_err(|err| {
            error!(bucket = %state.bucket, error = %err, "Got error retrieving list of objects")
        })?;

    Ok(Html(render::listing_html(&state.bucket, &entries)))
}

/// `POST /s3/add` — upload the demo object, then go back to the listing.
pub async fn add_object<P: ClientProvider>(
    _origin: SameOrigin,
    State(state): State<AppState<P>>,
) -> Result<Redirect, AppError> {
    let client = connect(&state).await?;

    put_file(
        &client,
        &state.bucket,
        FIXED_OBJECT_KEY,
        Bytes::from_static(FIXED_OBJECT_BODY.as_bytes()),
    )
    .await
    .inspect_err(|err| {
        error!(bucket = %state.bucket, key = FIXED_OBJECT_KEY, error = %err, "Got error uploading file")
    })?;

    Ok(Redirect::to(LIST_PATH))
}

/// `POST /s3/delete` — remove the demo object, then go back to the listing.
pub async fn delete_object<P: ClientProvider>(
    _origin: SameOrigin,
    State(state): State<AppState<P>>,
) -> Result<Redirect, AppError> {
    let client = connect(&state).await?;

    delete_item(&client, &state.bucket, FIXED_OBJECT_KEY)
        .await
        .inspect_err(|err| {
            error!(bucket = %state.bucket, key = FIXED_OBJECT_KEY, error = %err, "Got an error deleting item")
        })?;

    info!("Deleted {} from {}", FIXED_OBJECT_KEY, state.bucket);
    Ok(Redirect::to(LIST_PATH))
}
