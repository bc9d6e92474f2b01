use addrlookup_client::AddressLookupClient;
use addrlookup_core::{load_app_config, SearchScope};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod lookup;

use lookup::FilterArgs;

#[derive(Debug, Parser)]
#[command(name = "addrlookup")]
#[command(about = "Look up addresses by postcode, UPRN, USRN or free text")]
struct Cli {
    /// Base address of the search service (overrides `ADDRLOOKUP_SERVICE_URL`)
    #[arg(long, global = true, value_name = "URL")]
    service_url: Option<String>,
    /// Print the resolved request URL without contacting the service
    #[arg(long, global = true)]
    dry_run: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Addresses in a postcode
    #[command(name = "postcode")]
    PostCode {
        post_code: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Addresses for a Unique Property Reference Number
    Uprn {
        uprn: u64,
        /// Include historical properties
        #[arg(long)]
        historical: bool,
        /// Search scope (local or national)
        #[arg(long)]
        scope: Option<SearchScope>,
    },
    /// Addresses on a street, by Unique Street Reference Number
    Usrn {
        usrn: u64,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Free-text address search
    Search {
        query: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_app_config(cli.service_url.as_deref())?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(service_url = %config.service_url, "configuration loaded");

    let client = AddressLookupClient::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build lookup client: {e}"))?;
    let path = lookup::request_path(&cli.command, config.default_scope);

    if cli.dry_run {
        println!("{}", client.gateway().resolve(&path)?);
        return Ok(());
    }

    lookup::run_lookup(&client, &path).await
}
