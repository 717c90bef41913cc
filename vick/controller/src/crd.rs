use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One microservice of a cell.
///
/// The controller turns every `Service` into a `Deployment` running
/// [`ServiceSpec::container`] and a cluster-internal `Service` exposing it on
/// [`ServiceSpec::service_port`], see [`crate::resources`].
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "vick.wso2.com",
    version = "v1alpha1",
    kind = "Service",
    root = "ServiceCrd",
    namespaced,
    printcolumn = r#"{"name":"CELL", "type":"string", "description":"Cell the service belongs to.", "jsonPath":".spec.cell"}"#,
    printcolumn = r#"{"name":"REPLICAS", "type":"integer", "description":"Desired replicas.", "jsonPath":".spec.replicas"}"#,
    printcolumn = r#"{"name":"PORT", "type":"integer", "description":"Port of the service endpoint.", "jsonPath":".spec.servicePort"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    /// Name of the cell this service belongs to.
    pub cell: String,

    /// Left for the cluster to default when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    pub container: ServiceContainer,

    /// Port the generated endpoint listens on.
    pub service_port: i32,
}

/// The single container a service runs.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceContainer {
    pub image: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<ServiceEnvVar>,

    /// The first port is the one the endpoint forwards to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ServiceContainerPort>,
}

#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ServiceEnvVar {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceContainerPort {
    pub container_port: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use kube::{CustomResourceExt, Resource, ResourceExt};
    use rstest::rstest;

    use super::*;
    use crate::constants::GROUP_NAME;

    #[rstest]
    fn crd_definition() {
        let crd = ServiceCrd::crd();

        assert_eq!(crd.spec.group, GROUP_NAME);
        assert_eq!(crd.spec.names.kind, "Service");
        assert_eq!(crd.spec.names.plural, "services");
        assert_eq!(crd.spec.scope, "Namespaced");
        assert_eq!(ServiceCrd::api_version(&()), "vick.wso2.com/v1alpha1");
    }

    #[rstest]
    fn deserialize_manifest() {
        let manifest = r#"
apiVersion: vick.wso2.com/v1alpha1
kind: Service
metadata:
  name: orders
  namespace: shop
  labels:
    env: prod
spec:
  cell: cell-a
  replicas: 2
  servicePort: 80
  container:
    image: example/orders:1.0
    args: ["--verbose"]
    env:
      - name: LOG_LEVEL
        value: debug
    ports:
      - containerPort: 8080
        name: http
"#;

        let service: ServiceCrd = serde_yaml::from_str(manifest).unwrap();

        assert_eq!(service.name_any(), "orders");
        assert_eq!(service.namespace().as_deref(), Some("shop"));
        assert_eq!(service.labels().get("env").map(String::as_str), Some("prod"));
        assert_eq!(service.spec.cell, "cell-a");
        assert_eq!(service.spec.replicas, Some(2));
        assert_eq!(service.spec.service_port, 80);
        assert_eq!(
            service.spec.container,
            ServiceContainer {
                image: "example/orders:1.0".to_owned(),
                args: vec!["--verbose".to_owned()],
                env: vec![ServiceEnvVar {
                    name: "LOG_LEVEL".to_owned(),
                    value: "debug".to_owned(),
                }],
                ports: vec![ServiceContainerPort {
                    container_port: 8080,
                    name: Some("http".to_owned()),
                }],
            }
        );
    }

    #[rstest]
    fn deserialize_minimal_manifest() {
        let manifest = r#"{
            "apiVersion": "vick.wso2.com/v1alpha1",
            "kind": "Service",
            "metadata": { "name": "billing" },
            "spec": { "cell": "cell-b", "servicePort": 9000, "container": { "image": "billing" } }
        }"#;

        let service: ServiceCrd = serde_json::from_str(manifest).unwrap();

        assert!(service.metadata.labels.is_none());
        assert_eq!(service.spec.replicas, None);
        assert!(service.spec.container.ports.is_empty());
    }
}
