use kube::ResourceExt;
use serde::Serialize;

use crate::crd::ServiceCrd;

pub const DEPLOYMENT_NAME_SUFFIX: &str = "-deployment";

pub const K8S_SERVICE_NAME_SUFFIX: &str = "-service";

/// Names of the objects generated for a `Service`.
///
/// These are plain concatenations, length and charset are left for the cluster to validate when
/// the objects are created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DerivedNames {
    pub deployment: String,
    pub service: String,
}

impl DerivedNames {
    pub fn new(service: &ServiceCrd) -> Self {
        DerivedNames {
            deployment: deployment_name(service),
            service: k8s_service_name(service),
        }
    }
}

/// `<service name>-deployment`, falls back to `metadata.generateName` for unnamed services.
pub fn deployment_name(service: &ServiceCrd) -> String {
    service.name_any() + DEPLOYMENT_NAME_SUFFIX
}

/// `<service name>-service`, falls back to `metadata.generateName` for unnamed services.
pub fn k8s_service_name(service: &ServiceCrd) -> String {
    service.name_any() + K8S_SERVICE_NAME_SUFFIX
}
