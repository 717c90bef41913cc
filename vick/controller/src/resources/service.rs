use k8s_openapi::{
    api::core::v1::{Service, ServicePort, ServiceSpec},
    apimachinery::pkg::util::intstr::IntOrString,
};
use kube::ResourceExt;
use vick_config::ControllerConfig;

use super::{child_metadata, k8s_service_name, service_labels_with_policy};
use crate::crd::ServiceCrd;

const SERVICE_PORT_NAME: &str = "http";

/// Cluster-internal `Service` in front of the pods of [`super::service_deployment`].
///
/// Listens on `spec.servicePort` and forwards to the first container port, or to the same port
/// when the container declares none.
#[tracing::instrument(level = "debug", skip_all, fields(service = %service.name_any()))]
pub fn service_k8s_service(service: &ServiceCrd, config: &ControllerConfig) -> Service {
    let labels = service_labels_with_policy(service, config.label_override);

    let target_port = service
        .spec
        .container
        .ports
        .first()
        .map(|port| port.container_port)
        .unwrap_or(service.spec.service_port);

    Service {
        metadata: child_metadata(service, k8s_service_name(service), labels.clone()),
        spec: Some(ServiceSpec {
            type_: Some("ClusterIP".to_owned()),
            selector: Some(labels),
            ports: Some(vec![ServicePort {
                name: Some(SERVICE_PORT_NAME.to_owned()),
                protocol: Some("TCP".to_owned()),
                port: service.spec.service_port,
                target_port: Some(IntOrString::Int(target_port)),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
