//! Presentation-layer records returned to callers
//!
//! Field names are camelCase on the wire. The `errors` array is always
//! serialized, even when empty, so consumers can detect partial results.

use crate::application::{Application, Descriptor, GroupKind, InfoItem};
use crate::error::ErrorDescription;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind tag attached to every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Application,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Application => "application",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMeta {
    pub kind: ResourceKind,
}

impl TypeMeta {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }
}

/// Subset of object metadata shown to users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
}

impl ObjectMeta {
    pub fn new(meta: &k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta) -> Self {
        Self {
            name: meta.name.clone().unwrap_or_default(),
            namespace: meta.namespace.clone().unwrap_or_default(),
            labels: meta.labels.clone().unwrap_or_default(),
            annotations: meta.annotations.clone().unwrap_or_default(),
            creation_timestamp: meta.creation_timestamp.as_ref().map(|t| t.0),
            uid: meta.uid.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub total_items: usize,
}

/// Detail view of an `Application`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetail {
    pub object_meta: ObjectMeta,
    pub type_meta: TypeMeta,

    /// Label selector of the application.
    pub selector: BTreeMap<String, String>,

    pub descriptor: Descriptor,
    pub info: Vec<InfoItem>,
    pub component_group_kinds: Vec<GroupKind>,

    /// Non-critical errors that occurred while retrieving the resource.
    pub errors: Vec<ErrorDescription>,
}

/// Row of an application list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub object_meta: ObjectMeta,
    pub type_meta: TypeMeta,
    pub descriptor: Descriptor,
    pub component_group_kinds: Vec<GroupKind>,
}

impl From<Application> for ApplicationSummary {
    fn from(app: Application) -> Self {
        Self {
            object_meta: ObjectMeta::new(&app.metadata),
            type_meta: TypeMeta::new(ResourceKind::Application),
            descriptor: app.spec.descriptor,
            component_group_kinds: app.spec.component_kinds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationList {
    pub list_meta: ListMeta,
    pub applications: Vec<ApplicationSummary>,

    /// Non-critical errors that occurred while retrieving the resources.
    pub errors: Vec<ErrorDescription>,
}
