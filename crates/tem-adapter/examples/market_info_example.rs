/*
[INPUT]:  Optional account address on the command line, TEM_* environment
[OUTPUT]: API status, market snapshot and account balance
[POS]:    Examples - public market queries
[UPDATE]: When adding new public endpoints
*/

use tem_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: query the market without any credentials
///
/// Run with `RUST_LOG=tem_adapter=debug` to see each request.
#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Failed to initialize tracing: {}", e);
    }

    println!("=== Tron Energy Market Info Example ===\n");

    let client = match ClientConfig::from_env().and_then(TemClient::with_config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    if !client.check_status().await {
        eprintln!("✗ API is not reachable");
        return;
    }
    println!("✓ API is up");

    println!("\nQuerying market info...");
    match client.get_market_info().await {
        Ok(info) => {
            println!("✓ Deposit address: {}", info.address);
            println!(
                "  Energy available: {} of {}",
                info.market.available_energy, info.market.total_energy
            );
            for tier in &info.price.open_energy {
                println!(
                    "  Open energy >= {}s: suggested {} SUN",
                    tier.min_duration, tier.suggested_price
                );
            }
            let payment = compute_order_payment(
                info.price
                    .open_energy
                    .first()
                    .map(|tier| tier.suggested_price)
                    .unwrap_or_default(),
                info.order.suggested_energy,
                info.order.open_suggested_duration,
            );
            match payment {
                Ok(sun) => println!(
                    "  Suggested order costs {} SUN ({} TRX)",
                    sun,
                    sun_to_trx(sun)
                ),
                Err(e) => println!("✗ Could not price suggested order: {}", e),
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    if let Some(account) = std::env::args().nth(1) {
        println!("\nQuerying balance for {}...", account);
        match client.get_balance(&account).await {
            Ok(sun) => println!("✓ Balance: {} SUN ({} TRX)", sun, sun_to_trx(sun)),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Market info example complete");
}
