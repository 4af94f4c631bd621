//! Integration tests against a real tenant.
//!
//! These tests require a real app registration with Sites.Selected (or
//! Sites.Read.All) granted on the target site and are ignored by default.
//! To run them, create a `.env` file in the sharepoint-lib directory with:
//!
//! ```env
//! AZURE_CLIENT_ID=your-client-id
//! AZURE_CLIENT_SECRET=your-client-secret
//! AZURE_TENANT_ID=your-tenant-id
//! SHAREPOINT_SITE_URL=https://contoso.sharepoint.com/sites/Team
//! SHAREPOINT_TENANT_NAME=contoso
//! ```
//!
//! Then run: `cargo test -p sharepoint-lib --test live -- --ignored`

use sharepoint_lib::Config;
use sharepoint_lib::SharePointClient;
use sharepoint_lib::auth::ClientCredentialsFlow;

fn load_config() -> Config {
    let _ = dotenvy::dotenv();
    Config::from_env().expect("Missing required environment variables. See module docs.")
}

#[tokio::test]
#[ignore = "requires real credentials in .env file"]
async fn test_authenticate() {
    let config = load_config();
    let flow = ClientCredentialsFlow::from_config(&config);

    let token = flow
        .authenticate(&config.scope())
        .await
        .expect("Authentication failed");

    assert!(
        !token.access_token.is_empty(),
        "Access token should not be empty"
    );
    assert!(
        token.expires_at.is_some(),
        "Token should have expiration time"
    );

    println!("Token expires at: {:?}", token.expires_at);
}

#[tokio::test]
#[ignore = "requires real credentials in .env file"]
async fn test_invalid_secret() {
    let config = load_config();
    let flow = ClientCredentialsFlow::new(&config.client_id, "wrong-secret", config.authority());

    let result = flow.authenticate(&config.scope()).await;

    assert!(result.is_err(), "Should fail with invalid secret");
    println!("Got expected error: {}", result.unwrap_err());
}

#[tokio::test]
#[ignore = "requires real credentials in .env file"]
async fn test_connect_and_list() {
    let config = load_config();
    let client = SharePointClient::from_config(&config).expect("client");

    assert!(client.connect().await, "Connection failed");

    let site = client.get_site_info().await.expect("Site lookup failed");
    println!("Connected to: {}", site.display_name_or_default());

    let files = client.list_files("Documents").await.expect("Listing failed");
    println!("Found {} files", files.len());
}
