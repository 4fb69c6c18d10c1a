//! picklist CLI — desktop client for the pick coordination core.

use clap::{Parser, Subcommand};
use picklist::catalog::PickCatalog;
use picklist::claims::ClaimCoordinator;
use picklist::config::Config;
use picklist::db::Db;
use picklist::envelope::{ErrorResponse, PickListResponse, TransitionResponse};
use picklist::error::Error;
use picklist::identity::PinDirectory;
use picklist::model::PickAction;
use picklist::telemetry::{TelemetryConfig, init_telemetry};
use secrecy::ExposeSecret;

#[derive(Parser)]
#[command(name = "picklist", about = "Warehouse pick coordination")]
struct Cli {
    /// Emit response envelopes as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List open picks in traversal order
    List {
        /// Only locations containing this text (case-insensitive)
        #[arg(long)]
        location: Option<String>,
    },
    /// Claim an open pick
    Pick {
        /// Stock row identifier
        id: String,
    },
    /// Release a claimed pick back to open
    Unpick {
        /// Stock row identifier
        id: String,
    },
    /// Verify a picker PIN
    VerifyPin {
        pin: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let _guard = init_telemetry(TelemetryConfig {
        endpoint: config.otel_endpoint.clone(),
        service_name: "picklist".to_string(),
    })?;

    let db = Db::connect(config.database_url.expose_secret()).await?;
    db.migrate().await?;

    match cli.command {
        Command::List { location } => cmd_list(&db, location.as_deref(), cli.json).await,
        Command::Pick { id } => cmd_transition(&db, &id, PickAction::Pick, cli.json).await,
        Command::Unpick { id } => cmd_transition(&db, &id, PickAction::Unpick, cli.json).await,
        Command::VerifyPin { pin } => cmd_verify_pin(&db, pin).await,
    }
}

async fn cmd_list(db: &Db, location: Option<&str>, json: bool) -> anyhow::Result<()> {
    let catalog = PickCatalog::new(db.clone());
    let picks = catalog.list_open(location).await?;

    if json {
        let resp = PickListResponse::new(picks);
        println!("{}", serde_json::to_string_pretty(&resp)?);
        return Ok(());
    }

    if picks.is_empty() {
        println!("No open picks.");
        return Ok(());
    }

    println!(
        "{:<20}  {:<14}  {:<12}  {:<4}  {:<16}  SUPPLIER",
        "LOCATION", "CODE", "ORDER", "ORD", "BRAND"
    );
    println!("{}", "-".repeat(90));

    for pick in &picks {
        println!(
            "{:<20}  {:<14}  {:<12}  {:<4}  {:<16}  {}",
            pick.location, pick.code, pick.ordernum, pick.pickorder, pick.brand, pick.supplier
        );
    }

    println!("\n{} pick(s)", picks.len());
    Ok(())
}

async fn cmd_transition(db: &Db, id: &str, action: PickAction, json: bool) -> anyhow::Result<()> {
    let coordinator = ClaimCoordinator::new(db.clone());

    match coordinator.transition(id, action).await {
        Ok(item) => {
            if json {
                let resp = TransitionResponse::new(action, item);
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                println!(
                    "{} {} at {} — now {}",
                    action.past_tense(),
                    item.code,
                    item.location,
                    item.status
                );
            }
            Ok(())
        }
        Err(err @ (Error::NotFound(_)
        | Error::InvalidTransition { .. }
        | Error::UpdateVerification(_)
        | Error::InvalidRequest(_))) => {
            // Expected outcomes: report the envelope and exit nonzero so
            // scripts can tell a lost race from success.
            let resp = ErrorResponse::from(&err);
            if json {
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                eprintln!("{}: {}", resp.return_code, resp.message);
            }
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

async fn cmd_verify_pin(db: &Db, pin: i32) -> anyhow::Result<()> {
    let directory = PinDirectory::new(db.clone());

    match directory.verify_pin(pin).await {
        Ok(identity) => {
            println!("{} (subject {})", identity.display_name, identity.subject_id);
            Ok(())
        }
        Err(Error::InvalidPin) => {
            eprintln!("INVALID_PIN: no picker with that pin");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
