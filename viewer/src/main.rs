use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use policy_viewer::client::PolicyClient;
use policy_viewer::render::Renderer;
use policy_viewer::view::{ViewIntent, ViewState};

/// Fetch policy content and render it as an HTML document.
#[derive(Parser)]
#[command(name = "policy-viewer", version)]
struct Cli {
    /// Navigation path deciding what to fetch: "/" lists all policies,
    /// "/<id>" fetches one document
    #[arg(value_name = "PATH", default_value = "/")]
    path: String,

    /// Base URL of the policy content service
    #[arg(
        long,
        env = "POLICY_API_URL",
        default_value = "http://127.0.0.1:3000"
    )]
    api_url: String,

    /// Write the rendered HTML to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<String>,
}

fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Intent is derived from the path exactly once per invocation.
    let intent = ViewIntent::from_path(&cli.path);
    let client = PolicyClient::new(&cli.api_url);
    let renderer = Renderer::new()?;

    // Fetch failures land in the Error state and still render a page;
    // they never abort the viewer.
    let state = ViewState::load(&client, &intent).await;
    let html = renderer.render(&state)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, html).with_context(|| format!("Failed to write {}", path))?
        }
        None => println!("{}", html),
    }

    Ok(())
}
