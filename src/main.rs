use clap::Parser;
use tracing::{error, info, Instrument};

use printalma_resolver::app_system::{setup_tracing, ResolverConfig, ResolverSystem};

/// Resolve the vendor product for a base product and a design, creating it if needed.
#[derive(Debug, Parser)]
#[command(name = "printalma_resolver", version)]
struct Args {
    /// Id of the base product
    base_product_id: u64,
    /// Id of the design applied to it
    design_id: u64,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let args = Args::parse();

    let config = ResolverConfig::load().map_err(|e| e.to_string())?;
    let system = ResolverSystem::new(config);

    let span = tracing::info_span!("resolution", base_product_id = args.base_product_id, design_id = args.design_id);
    let result = async {
        info!("Resolving vendor product");
        system.resolver.resolve(args.base_product_id, args.design_id).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(id) => {
            info!(vendor_product_id = %id, "Vendor product resolved");
            println!("{}", id);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Resolution failed");
            Err(e.to_string())
        }
    }
}
