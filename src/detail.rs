//! Detail assembly: fetch a resource, classify the failure, project a view

use crate::application::Application;
use crate::client::ResourceClient;
use crate::error::{ErrorDescription, Result};
use crate::policy::ErrorPolicy;
use crate::view::{ApplicationDetail, ObjectMeta, ResourceKind, TypeMeta};
use tracing::{info, warn, Dispatch};

/// A presentation view built from one raw resource.
pub trait ResourceDetail: Sized {
    type Resource;

    const KIND: ResourceKind;

    /// Stand-in resource used when the lookup failed with a non-critical error.
    fn placeholder(namespace: &str, name: &str) -> Self::Resource;

    fn from_resource(resource: Self::Resource, errors: Vec<ErrorDescription>) -> Self;
}

impl ResourceDetail for ApplicationDetail {
    type Resource = Application;

    const KIND: ResourceKind = ResourceKind::Application;

    fn placeholder(namespace: &str, name: &str) -> Application {
        Application::empty(namespace, name)
    }

    fn from_resource(app: Application, errors: Vec<ErrorDescription>) -> Self {
        let object_meta = ObjectMeta::new(&app.metadata);
        let spec = app.spec;
        Self {
            object_meta,
            type_meta: TypeMeta::new(Self::KIND),
            selector: spec
                .selector
                .and_then(|s| s.match_labels)
                .unwrap_or_default(),
            descriptor: spec.descriptor,
            info: spec.info,
            component_group_kinds: spec.component_kinds,
            errors,
        }
    }
}

/// Runs the fetch → classify → project pipeline.
///
/// # Example
///
/// ```rust,no_run
/// use kube_application_detail::{ApplicationDetail, DetailAssembler, ErrorKind, ErrorPolicy, KubeClient};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = KubeClient::try_default().await?;
/// let assembler = DetailAssembler::new()
///     .with_policy(ErrorPolicy::new().with_non_critical(ErrorKind::Forbidden));
///
/// let detail: ApplicationDetail = assembler.get_detail(&client, "default", "guestbook").await?;
/// println!("{}", serde_json::to_string_pretty(&detail)?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct DetailAssembler {
    policy: ErrorPolicy,
    dispatch: Option<Dispatch>,
}

impl DetailAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Send this assembler's log events to `dispatch` instead of the global subscriber.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn policy(&self) -> &ErrorPolicy {
        &self.policy
    }

    pub(crate) fn log<F: FnOnce()>(&self, emit: F) {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, emit),
            None => emit(),
        }
    }

    pub(crate) fn log_downgraded(&self, errors: &[ErrorDescription]) {
        for error in errors {
            self.log(|| warn!(kind = ?error.kind, error = %error.message, "Downgraded non-critical error"));
        }
    }

    /// Fetch `namespace/name` through `client` and build its detail view.
    ///
    /// A fatal error is returned unchanged and no view is built. A
    /// non-critical error yields a view over an empty resource whose `errors`
    /// list describes what went wrong.
    pub async fn get_detail<D, C>(&self, client: &C, namespace: &str, name: &str) -> Result<D>
    where
        D: ResourceDetail,
        C: ResourceClient<D::Resource> + ?Sized,
    {
        let kind = D::KIND;
        self.log(|| {
            info!(
                kind = %kind,
                namespace,
                name,
                "Getting details of {} {} in {} namespace",
                kind,
                name,
                namespace
            )
        });

        let (resource, err) = match client.get(namespace, name).await {
            Ok(resource) => (Some(resource), None),
            Err(err) => (None, Some(err)),
        };

        let errors = self.policy.handle_error(err)?;
        self.log_downgraded(&errors);

        let resource = resource.unwrap_or_else(|| D::placeholder(namespace, name));
        Ok(D::from_resource(resource, errors))
    }
}

/// Fetch an application detail view using the default error policy.
pub async fn get_application_detail<C>(
    client: &C,
    namespace: &str,
    name: &str,
) -> Result<ApplicationDetail>
where
    C: ResourceClient<Application> + ?Sized,
{
    DetailAssembler::new()
        .get_detail(client, namespace, name)
        .await
}
