use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use resizer_lambda::event_handler::function_handler;
use resizer_shared::{logging, AppState};
use serde_json::Value;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_tracing();

    // Clients are built once here and reused across invocations.
    let state = Arc::new(AppState::from_env().await);

    run(service_fn(move |event: LambdaEvent<Value>| {
        let state = Arc::clone(&state);
        async move { function_handler(event, &state.s3_client, &state.config).await }
    }))
    .await
}
