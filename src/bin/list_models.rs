//! Print the models available to the configured LLM API key, one per line.

use cybertip::llm::LlmClient;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let client = match LlmClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "LLM client configuration failed");
            std::process::exit(1);
        }
    };

    eprintln!("Fetching available models...\n");
    match client.list_models().await {
        Ok(models) => {
            for name in models {
                println!("{name}");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "model listing failed");
            std::process::exit(1);
        }
    }
}
