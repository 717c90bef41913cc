//! Writing the objects generated for a `Service` as a multi-document YAML stream, ready for
//! `kubectl apply -f -`.

use std::io::Write;

use k8s_openapi::api::{apps::v1::Deployment, core::v1::Service};
use thiserror::Error;
use vick_config::ControllerConfig;

use crate::{
    crd::ServiceCrd,
    resources::{service_deployment, service_k8s_service},
};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(transparent)]
    Writer(#[from] std::io::Error),
    #[error(transparent)]
    YamlSerialization(#[from] serde_yaml::Error),
}

type Result<T, E = ManifestError> = std::result::Result<T, E>;

pub trait ManifestWriter {
    fn to_writer<W: Write>(&self, writer: W) -> Result<()>;
}

impl ManifestWriter for Deployment {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_yaml::to_writer(&mut writer, self).map_err(ManifestError::from)
    }
}

impl ManifestWriter for Service {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_yaml::to_writer(&mut writer, self).map_err(ManifestError::from)
    }
}

/// Every object the controller generates for one `Service`.
#[derive(Debug)]
pub struct ServiceManifests {
    pub deployment: Deployment,
    pub service: Service,
}

impl ServiceManifests {
    pub fn new(service: &ServiceCrd, config: &ControllerConfig) -> Self {
        ServiceManifests {
            deployment: service_deployment(service, config),
            service: service_k8s_service(service, config),
        }
    }
}

impl ManifestWriter for ServiceManifests {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        self.deployment.to_writer(&mut writer)?;

        writer.write_all(b"---\n")?;
        self.service.to_writer(&mut writer)?;

        Ok(())
    }
}
