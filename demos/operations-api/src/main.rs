//! Operations metrics demo.
//!
//! Shows the per-endpoint pattern: an endpoint enum, a model that decodes
//! from the envelope, and a typed call built from a date range. Point it at
//! a server with `OPERATIONS_BASE_URL` and set `RUST_LOG=courier=debug` to
//! see the request pipeline.

#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use std::borrow::Cow;
use std::collections::HashMap;
use std::time::Duration;

use courier::prelude::*;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Endpoints
// ============================================================================

pub enum Operations {
    Demo { base_url: String },
}

impl Endpoint for Operations {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Self::Demo { base_url } => format!("{base_url}api/operations/demo").into(),
        }
    }
}

// ============================================================================
// Models
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Utilize {
    pub label: Option<String>,
    pub value: Option<f64>,
}

/// Logged hours of one team in the organisation breakdown.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrgTeamBreakDown {
    pub name: Option<String>,
    pub logged_hours: Option<f64>,
    #[serde(default)]
    pub actual_values: Vec<Utilize>,
}

impl Decodable for OrgTeamBreakDown {}

/// Reporting period sent with every metrics call.
#[derive(Debug, Clone, Serialize)]
pub struct DateModel {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

fn custom_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Accept".to_string(), "application/json".to_string()),
        ("X-Client".to_string(), "operations-api-demo".to_string()),
    ])
}

impl OrgTeamBreakDown {
    /// Request the breakdown for `date_model`.
    pub fn breakdown<C, U>(
        transport: &Transport<C, U>,
        base_url: &str,
        date_model: &DateModel,
    ) -> Result<ApiRequest<Self, C, U>> {
        let endpoint = Operations::Demo {
            base_url: base_url.to_string(),
        };
        ApiRequest::get(transport, endpoint)
            .with_headers(custom_headers())
            .with_record(date_model)
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> courier::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_url = std::env::var("OPERATIONS_BASE_URL")
        .unwrap_or_else(|_| "https://metrics.example.com/".to_string());

    let client = HyperClient::builder()
        .timeout(Duration::from_secs(15))
        .build();
    let transport = Transport::new(client);

    let date_model = DateModel {
        from: "2019-01-01".to_string(),
        to: "2019-01-31".to_string(),
        team: None,
    };

    let request = OrgTeamBreakDown::breakdown(&transport, &base_url, &date_model)?;
    match request.fire_for_sequence().await {
        Ok(teams) => {
            for team in &teams {
                println!(
                    "{:<24} {:>8.1}h",
                    team.name.as_deref().unwrap_or("-"),
                    team.logged_hours.unwrap_or_default()
                );
            }
        }
        Err(err) => println!("{err}"),
    }

    // Refresh the single-team view every minute until interrupted.
    let mut polling = OrgTeamBreakDown::breakdown(&transport, &base_url, &date_model)?
        .with_loader(false);
    polling.fire_repeating(1, |result: Result<OrgTeamBreakDown>| match result {
        Ok(team) => tracing::info!(name = ?team.name, hours = ?team.logged_hours, "refreshed"),
        Err(err) => tracing::warn!(error = %err, "refresh produced no data"),
    })?;

    // A failed Ctrl-C handler just ends the demo.
    let _ = tokio::signal::ctrl_c().await;
    polling.stop_repeating();
    Ok(())
}

// ============================================================================
// Tests using wiremock
// ============================================================================
