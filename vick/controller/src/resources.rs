//! Everything the controller derives from a [`ServiceCrd`]: the labels and selector that bind the
//! generated objects to their `Service`, the names of those objects, and the objects themselves.
//!
//! All of it is computed from the current state of the `Service` on every call, nothing is cached.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Resource, ResourceExt};

use crate::crd::ServiceCrd;

pub mod deployment;
pub mod labels;
pub mod names;
pub mod service;

pub use self::{
    deployment::service_deployment,
    labels::{
        selector_matches, service_labels, service_labels_with_policy, service_selector,
        service_selector_with_policy, LabelSet,
    },
    names::{deployment_name, k8s_service_name, DerivedNames},
    service::service_k8s_service,
};

/// Metadata of an object generated for `service`, lives in the same namespace and is controlled by
/// it.
///
/// The owner reference is only set when `service` has been persisted (it has a `uid`).
fn child_metadata(service: &ServiceCrd, name: String, labels: LabelSet) -> ObjectMeta {
    ObjectMeta {
        name: Some(name),
        namespace: service.namespace(),
        labels: Some(labels),
        owner_references: service.controller_owner_ref(&()).map(|owner| vec![owner]),
        ..Default::default()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::BTreeMap;

    use crate::crd::{ServiceContainer, ServiceContainerPort, ServiceCrd, ServiceSpec};

    /// A persisted `Service` in the `shop` namespace.
    pub(crate) fn service(name: &str, cell: &str, labels: &[(&str, &str)]) -> ServiceCrd {
        let mut service = ServiceCrd::new(
            name,
            ServiceSpec {
                cell: cell.to_owned(),
                replicas: Some(2),
                container: ServiceContainer {
                    image: format!("example/{name}:1.0"),
                    ports: vec![ServiceContainerPort {
                        container_port: 8080,
                        name: Some("http".to_owned()),
                    }],
                    ..Default::default()
                },
                service_port: 80,
            },
        );

        service.metadata.namespace = Some("shop".to_owned());
        service.metadata.uid = Some(format!("{name}-uid"));
        service.metadata.labels = (!labels.is_empty()).then(|| {
            labels
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect::<BTreeMap<_, _>>()
        });

        service
    }
}
