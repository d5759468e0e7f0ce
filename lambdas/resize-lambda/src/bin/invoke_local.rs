//! Manual smoke test: resize one object from the real source bucket without
//! going through the Lambda runtime.
//!
//! `cargo run --bin invoke-local -- fotos/praia.jpg` (defaults to `imagem.jpg`).

use resizer_atoms::events::NotificationEvent;
use resizer_atoms::resize;
use resizer_shared::{logging, AppState};
use std::env;

const SAMPLE_KEY: &str = "imagem.jpg";

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    logging::init_tracing();

    let key = env::args().nth(1).unwrap_or_else(|| SAMPLE_KEY.to_string());
    let state = AppState::from_env().await;

    let event = NotificationEvent::for_key(&key);
    let summary = resize::handle_event(&state.s3_client, &state.config, &event).await;

    println!("Resultado: {}", serde_json::to_string(&summary)?);
    Ok(())
}
