//! List assembly over one or more namespaces

use crate::application::Application;
use crate::client::ResourceLister;
use crate::detail::DetailAssembler;
use crate::error::{ErrorDescription, Result};
use crate::view::{ApplicationList, ApplicationSummary, ListMeta};
use futures::future::join_all;
use tracing::info;

/// Namespaces a list request covers.
///
/// An explicit set with no entries covers nothing; only [`NamespaceQuery::All`]
/// issues a cluster-wide list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceQuery {
    All,
    Namespaces(Vec<String>),
}

impl NamespaceQuery {
    /// Query every namespace with a single cluster-wide list.
    pub fn all() -> Self {
        NamespaceQuery::All
    }

    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for namespace in namespaces {
            let namespace = namespace.into();
            if !unique.contains(&namespace) {
                unique.push(namespace);
            }
        }
        NamespaceQuery::Namespaces(unique)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, NamespaceQuery::All)
    }

    /// Explicitly requested namespaces; empty for [`NamespaceQuery::All`].
    pub fn namespaces(&self) -> &[String] {
        match self {
            NamespaceQuery::All => &[],
            NamespaceQuery::Namespaces(namespaces) => namespaces,
        }
    }
}

impl Default for NamespaceQuery {
    fn default() -> Self {
        NamespaceQuery::All
    }
}

impl DetailAssembler {
    /// List applications covered by `query`.
    ///
    /// Each namespace is listed concurrently and its error classified on its
    /// own: non-critical failures leave the other namespaces' items in place
    /// and are reported in `errors`, while the first fatal failure (in query
    /// order) aborts the whole list.
    pub async fn get_application_list<L>(
        &self,
        lister: &L,
        query: &NamespaceQuery,
    ) -> Result<ApplicationList>
    where
        L: ResourceLister<Application> + ?Sized,
    {
        self.log(|| info!(query = ?query, "Getting list of applications"));

        let results = match query {
            NamespaceQuery::All => vec![lister.list(None).await],
            NamespaceQuery::Namespaces(namespaces) => {
                join_all(
                    namespaces
                        .iter()
                        .map(|namespace| lister.list(Some(namespace.as_str()))),
                )
                .await
            }
        };

        let mut applications = Vec::new();
        let mut errors: Vec<ErrorDescription> = Vec::new();
        for result in results {
            match result {
                Ok(items) => applications.extend(items.into_iter().map(ApplicationSummary::from)),
                Err(err) => self.policy().append_error(Some(err), &mut errors)?,
            }
        }
        self.log_downgraded(&errors);

        Ok(ApplicationList {
            list_meta: ListMeta {
                total_items: applications.len(),
            },
            applications,
            errors,
        })
    }
}

/// List applications using the default error policy.
pub async fn get_application_list<L>(lister: &L, query: &NamespaceQuery) -> Result<ApplicationList>
where
    L: ResourceLister<Application> + ?Sized,
{
    DetailAssembler::new()
        .get_application_list(lister, query)
        .await
}
