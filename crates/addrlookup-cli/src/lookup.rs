//! Lookup command handlers for the CLI.
//!
//! Turns parsed arguments into a relative request path, then runs it
//! through the client and prints the records as JSON on stdout.

use addrlookup_client::{build_by_uprn, build_by_uprn_extended, AddressLookupClient, LookupRequest};
use addrlookup_core::{ClassificationFilter, SearchScope};
use clap::Args;

use crate::Commands;

/// Filters shared by the postcode, USRN and free-text commands.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Include historical properties
    #[arg(long)]
    pub historical: bool,
    /// Search scope (local or national)
    #[arg(long)]
    pub scope: Option<SearchScope>,
    /// Classification tag to filter by (repeatable)
    #[arg(long = "classification", value_name = "TAG")]
    pub classification: Vec<String>,
    /// Predefined classification filter: residential, commercial,
    /// residential-and-commercial or all
    #[arg(long, conflicts_with = "classification")]
    pub classifications: Option<ClassificationFilter>,
    /// Include addresses that cannot receive post
    #[arg(long)]
    pub any_postal_status: bool,
}

impl FilterArgs {
    fn apply(&self, request: LookupRequest, default_scope: SearchScope) -> LookupRequest {
        let request = request
            .include_historical(self.historical)
            .scope(self.scope.unwrap_or(default_scope))
            .postally_addressable(!self.any_postal_status);

        match self.classifications {
            Some(filter) => request.classification_filter(filter),
            None => request.classifications(self.classification.iter().cloned()),
        }
    }
}

/// Relative request path for a parsed command.
///
/// `uprn` uses the extended endpoint only when `--historical` or `--scope`
/// was given.
pub(crate) fn request_path(command: &Commands, default_scope: SearchScope) -> String {
    match command {
        Commands::PostCode { post_code, filters } => filters
            .apply(LookupRequest::post_code(post_code.as_str()), default_scope)
            .path(),
        Commands::Uprn {
            uprn,
            historical,
            scope,
        } => {
            if *historical || scope.is_some() {
                build_by_uprn_extended(*uprn, *historical, scope.unwrap_or(default_scope))
            } else {
                build_by_uprn(*uprn)
            }
        }
        Commands::Usrn { usrn, filters } => filters
            .apply(LookupRequest::usrn(*usrn), default_scope)
            .path(),
        Commands::Search { query, filters } => filters
            .apply(LookupRequest::free_text(query.as_str()), default_scope)
            .path(),
    }
}

/// Runs one lookup and prints the records as pretty JSON.
///
/// # Errors
///
/// Returns an error if a successful response cannot be decoded or the
/// records cannot be serialized. Rejected or failed requests print `[]`.
pub(crate) async fn run_lookup(client: &AddressLookupClient, path: &str) -> anyhow::Result<()> {
    let records = client.lookup_path(path).await?;
    tracing::info!(count = records.len(), "lookup complete");
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
