//! Client credentials authentication example.
//!
//! Run with: cargo run --example client_credentials_auth
//!
//! Requires .env file with:
//! - AZURE_CLIENT_ID
//! - AZURE_CLIENT_SECRET
//! - AZURE_TENANT_ID
//! - SHAREPOINT_SITE_URL
//! - SHAREPOINT_TENANT_NAME

use sharepoint_lib::Config;
use sharepoint_lib::SharePointClient;
use sharepoint_lib::auth::ClientCredentialsFlow;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    println!("Authenticating...\n");

    let flow = ClientCredentialsFlow::from_config(&config);
    let token = flow.authenticate(&config.scope()).await?;

    println!("Authentication successful!");
    println!("Token expires at: {:?}", token.expires_at);

    let client = SharePointClient::from_config(&config)?;
    let site = client.get_site_info().await?;

    println!("\nSite: {}", site.display_name_or_default());
    println!("Id:   {}", site.id);

    Ok(())
}
