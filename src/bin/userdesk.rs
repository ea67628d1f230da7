#[cfg(not(target_arch = "wasm32"))]
use anyhow::Result;
#[cfg(not(target_arch = "wasm32"))]
use userdesk::cli::start;

// Main function
#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<()> {
    // Parse arguments, initialize logging, and build the action
    let action = start()?;

    // Handle the action
    action.execute().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
