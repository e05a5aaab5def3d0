//! Narrow fetch capabilities consumed by the assemblers

use crate::error::{Error, Result};
use async_trait::async_trait;
use kube::api::{Api, ListParams};
use kube::core::NamespaceResourceScope;
use kube::{Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Fetch a single namespaced resource by identity.
#[async_trait]
pub trait ResourceClient<K>: Send + Sync {
    async fn get(&self, namespace: &str, name: &str) -> Result<K>;
}

/// List namespaced resources, across all namespaces when `namespace` is `None`.
#[async_trait]
pub trait ResourceLister<K>: Send + Sync {
    async fn list(&self, namespace: Option<&str>) -> Result<Vec<K>>;
}

#[async_trait]
impl<K, C> ResourceClient<K> for Arc<C>
where
    C: ResourceClient<K> + ?Sized,
    K: 'static,
{
    async fn get(&self, namespace: &str, name: &str) -> Result<K> {
        (**self).get(namespace, name).await
    }
}

#[async_trait]
impl<K, C> ResourceLister<K> for Arc<C>
where
    C: ResourceLister<K> + ?Sized,
    K: 'static,
{
    async fn list(&self, namespace: Option<&str>) -> Result<Vec<K>> {
        (**self).list(namespace).await
    }
}

/// Capabilities backed by a real [`kube::Client`].
#[derive(Clone)]
pub struct KubeClient {
    client: Client,
}

impl KubeClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient kubeconfig or in-cluster environment.
    pub async fn try_default() -> Result<Self> {
        let client = Client::try_default()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self::new(client))
    }
}

impl From<Client> for KubeClient {
    fn from(client: Client) -> Self {
        Self::new(client)
    }
}

#[async_trait]
impl<K> ResourceClient<K> for KubeClient
where
    K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + DeserializeOwned
        + Debug
        + Send
        + Sync
        + 'static,
{
    async fn get(&self, namespace: &str, name: &str) -> Result<K> {
        let kind = K::kind(&());
        debug!(kind = %kind, namespace, name, "get");
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        api.get(name)
            .await
            .map_err(|e| Error::from_kube(e, &kind, namespace, name))
    }
}

#[async_trait]
impl<K> ResourceLister<K> for KubeClient
where
    K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + DeserializeOwned
        + Debug
        + Send
        + Sync
        + 'static,
{
    async fn list(&self, namespace: Option<&str>) -> Result<Vec<K>> {
        let kind = K::kind(&());
        debug!(kind = %kind, namespace = ?namespace, "list");
        let api: Api<K> = match namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|e| Error::from_kube_list(e, &kind, namespace))?;
        Ok(list.items)
    }
}
