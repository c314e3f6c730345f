//! Walks one envelope through its full lifecycle on a local ledger:
//! fund, lock, fail an early claim, claim with the secret, then show a
//! second envelope expiring back to its owner.
//!
//! ```bash
//! cargo run -p envelope-client --example lifecycle
//! ```

use std::sync::Arc;
use std::time::Duration;

use envelope_client::{
    tokens_to_base_units, ClientConfig, DevSigner, EnvelopeClient, InProcessGateway,
};
use envelope_protocol::{
    hash_secret, Address, EnvelopeService, ManualClock, ProtocolConfig, SecretPhrase,
};
use tracing::info;

const OWNER: Address = [0xA1; 20];
const BENEFICIARY: Address = [0xB2; 20];
const GENESIS_TIME: u64 = 1_700_000_000;
const SECRET: &str = "correct horse battery staple";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // A manual clock lets the demo cross the time window instantly.
    let clock = Arc::new(ManualClock::new(GENESIS_TIME));
    let service = Arc::new(EnvelopeService::new(
        clock.clone(),
        ProtocolConfig::default(),
    ));
    service.fund_account(OWNER, 1_000_000);

    let gateway = Arc::new(InProcessGateway::new(service.clone()));
    let config = ClientConfig {
        confirmation_timeout: Duration::from_secs(30),
        poll_interval: Duration::from_millis(50),
    };
    let owner = EnvelopeClient::new(
        Arc::new(DevSigner::new(OWNER)),
        gateway.clone(),
        config.clone(),
    );
    let beneficiary = EnvelopeClient::new(Arc::new(DevSigner::new(BENEFICIARY)), gateway, config);

    // Lock 100 base units, claimable from T+60, expiring at T+3600.
    let id = owner
        .create_envelope(
            BENEFICIARY,
            100,
            hash_secret(SECRET.as_bytes()),
            GENESIS_TIME + 60,
            GENESIS_TIME + 3600,
        )
        .await?;
    info!("locked envelope {id}");

    // Too early: the window has not opened.
    clock.set_time(GENESIS_TIME + 30);
    let early = beneficiary
        .claim(id, SecretPhrase::from_phrase(SECRET))
        .await;
    info!("claim at T+30: {}", early.unwrap_err());

    // Inside the window, the secret pays out.
    clock.set_time(GENESIS_TIME + 90);
    beneficiary
        .claim(id, SecretPhrase::from_phrase(SECRET))
        .await?;
    info!("claim at T+90 succeeded, envelope {id} is finalized");

    // A second envelope nobody claims comes back to the owner.
    let id = owner
        .create_envelope(
            BENEFICIARY,
            tokens_to_base_units("0.000025")?,
            hash_secret(b"never revealed"),
            GENESIS_TIME + 120,
            GENESIS_TIME + 3600,
        )
        .await?;
    clock.set_time(GENESIS_TIME + 3600);
    owner.reclaim(id).await?;
    info!("envelope {id} expired unclaimed and was reclaimed");

    info!(
        "final state: {} envelopes, custody {}",
        owner.envelope_count().await?,
        service.custody_total()
    );
    Ok(())
}
