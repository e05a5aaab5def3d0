//! Print Application detail and list views as JSON
//!
//! Usage:
//!   app-detail get -n default guestbook
//!   app-detail list -n default -n staging
//!   app-detail list --all-namespaces --policy policy.yaml

use clap::{Parser, Subcommand};
use kube_application_detail::{
    ApplicationDetail, DetailAssembler, ErrorPolicy, KubeClient, NamespaceQuery,
};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "app-detail")]
#[command(about = "Show kubernetes-sigs Application resources as dashboard views")]
struct Args {
    /// YAML file listing the error kinds to report as warnings instead of failing
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the detail view of one application
    Get {
        #[arg(short, long, default_value = "default")]
        namespace: String,

        name: String,
    },
    /// List applications
    List {
        /// Namespace to list; repeat for several
        #[arg(short, long = "namespace")]
        namespaces: Vec<String>,

        /// List across all namespaces
        #[arg(short = 'A', long, conflicts_with = "namespaces")]
        all_namespaces: bool,
    },
}

fn init_tracing() {
    let env = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let policy = match &args.policy {
        Some(path) => ErrorPolicy::from_path(path)?,
        None => ErrorPolicy::default(),
    };
    let assembler = DetailAssembler::new().with_policy(policy);
    let client = KubeClient::try_default().await?;

    let output = match args.command {
        Command::Get { namespace, name } => {
            let detail: ApplicationDetail = assembler.get_detail(&client, &namespace, &name).await?;
            serde_json::to_value(detail)?
        }
        Command::List {
            namespaces,
            all_namespaces,
        } => {
            let query = if all_namespaces {
                NamespaceQuery::all()
            } else if namespaces.is_empty() {
                NamespaceQuery::new(["default"])
            } else {
                NamespaceQuery::new(namespaces)
            };
            serde_json::to_value(assembler.get_application_list(&client, &query).await?)?
        }
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
