use k8s_openapi::{
    api::{
        apps::v1::{Deployment, DeploymentSpec},
        core::v1::{Container, ContainerPort, EnvVar, PodSpec, PodTemplateSpec},
    },
    apimachinery::pkg::apis::meta::v1::ObjectMeta,
};
use kube::ResourceExt;
use vick_config::ControllerConfig;

use super::{
    child_metadata, deployment_name, service_labels_with_policy, service_selector_with_policy,
};
use crate::crd::ServiceCrd;

/// `Deployment` running the container of `service`.
///
/// The pods are labelled with [`service_labels_with_policy`] and selected with
/// [`service_selector_with_policy`], both computed with the configured override policy.
#[tracing::instrument(level = "debug", skip_all, fields(service = %service.name_any()))]
pub fn service_deployment(service: &ServiceCrd, config: &ControllerConfig) -> Deployment {
    let labels = service_labels_with_policy(service, config.label_override);
    let spec = &service.spec.container;

    let container = Container {
        name: service.name_any(),
        image: Some(spec.image.clone()),
        args: (!spec.args.is_empty()).then(|| spec.args.clone()),
        env: (!spec.env.is_empty()).then(|| {
            spec.env
                .iter()
                .map(|env| EnvVar {
                    name: env.name.clone(),
                    value: Some(env.value.clone()),
                    value_from: None,
                })
                .collect()
        }),
        ports: (!spec.ports.is_empty()).then(|| {
            spec.ports
                .iter()
                .map(|port| ContainerPort {
                    name: port.name.clone(),
                    container_port: port.container_port,
                    ..Default::default()
                })
                .collect()
        }),
        ..Default::default()
    };

    let deployment_spec = DeploymentSpec {
        replicas: service.spec.replicas,
        selector: service_selector_with_policy(service, config.label_override),
        template: PodTemplateSpec {
            metadata: Some(ObjectMeta {
                labels: Some(labels.clone()),
                ..Default::default()
            }),
            spec: Some(PodSpec {
                containers: vec![container],
                ..Default::default()
            }),
        },
        ..Default::default()
    };

    Deployment {
        metadata: child_metadata(service, deployment_name(service), labels),
        spec: Some(deployment_spec),
        ..Default::default()
    }
}
