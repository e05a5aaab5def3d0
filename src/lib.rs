//! Presentation-layer views of kubernetes-sigs `Application` resources.
//!
//! A request fetches the raw resource through a narrow client capability,
//! classifies any lookup failure against an [`ErrorPolicy`], and projects
//! the result into a serializable view. Non-critical failures are reported
//! inside the view's `errors` list; fatal ones fail the call with no view.
//!
//! # Examples
//!
//! ## Application Detail
//!
//! ```rust,no_run
//! use kube_application_detail::{get_application_detail, KubeClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KubeClient::try_default().await?;
//! let detail = get_application_detail(&client, "default", "guestbook").await?;
//!
//! for warning in &detail.errors {
//!     eprintln!("warning: {}", warning.message);
//! }
//! println!("{}", serde_json::to_string_pretty(&detail)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Application List
//!
//! ```rust,no_run
//! use kube_application_detail::{get_application_list, KubeClient, NamespaceQuery};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KubeClient::try_default().await?;
//! let query = NamespaceQuery::new(["default", "staging"]);
//! let list = get_application_list(&client, &query).await?;
//!
//! println!("{} applications", list.list_meta.total_items);
//! # Ok(())
//! # }
//! ```

pub mod application;
mod client;
mod detail;
mod error;
mod list;
mod policy;
pub mod view;

#[cfg(test)]
mod mock_service;

#[cfg(test)]
mod client_test;

pub use application::{Application, ApplicationSpec, Descriptor, GroupKind, InfoItem};
pub use client::{KubeClient, ResourceClient, ResourceLister};
pub use detail::{get_application_detail, DetailAssembler, ResourceDetail};
pub use error::{Error, ErrorDescription, ErrorKind, Result};
pub use list::{get_application_list, NamespaceQuery};
pub use policy::{Criticality, ErrorClassification, ErrorPolicy};
pub use view::{ApplicationDetail, ApplicationList, ApplicationSummary};
