//! Contact Intake - Main entry point
//!
//! Reads one contact form as JSON from stdin, validates it, attempts
//! delivery to the configured collection endpoint, and prints the normalized
//! outcome as JSON on stdout. Validation failures and transport failures are
//! both ordinary outcomes, not process errors.

use anyhow::Result;
use contact_intake::client::{AsyncDeliveryClient, AsyncDeliveryClientImpl};
use contact_intake::services::{IntakeService, IntakeServiceImpl};
use contact_intake::{Config, ContactForm, DeliveryClient};
use std::io::Read;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only, stdout carries the outcome JSON)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Contact intake targeting endpoint: {}",
        config.endpoint_url
    );

    // Initialize the delivery client and service
    let sync_client = DeliveryClient::new(&config);
    let client = Arc::new(AsyncDeliveryClientImpl::new(sync_client)) as Arc<dyn AsyncDeliveryClient>;
    let service = IntakeServiceImpl::new(client);

    // Read one form from stdin
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let form: ContactForm = serde_json::from_str(&input)?;

    let outcome = service.submit(&form).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    info!("Contact intake complete");
    Ok(())
}
