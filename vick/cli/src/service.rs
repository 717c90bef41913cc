use std::{ffi::OsStr, fs::File, io::Write, path::Path};

use kube::ResourceExt;
use vick_config::ControllerConfig;
use vick_controller::{
    crd::ServiceCrd,
    manifest::{ManifestWriter, ServiceManifests},
    resources::{service_labels_with_policy, DerivedNames},
};

use crate::{
    config::{RenderArgs, ServiceArgs},
    error::{CliError, CliResult},
};

/// Reads a vick Service from a json or yaml manifest.
#[tracing::instrument(level = "debug", ret, err)]
fn read_service(path: &Path) -> CliResult<ServiceCrd> {
    let contents = std::fs::read_to_string(path)
        .map_err(|fail| CliError::ServiceManifestRead(path.to_owned(), fail))?;

    match path.extension().and_then(OsStr::to_str) {
        Some("json") => serde_json::from_str(&contents)
            .map_err(|fail| CliError::ServiceManifestJson(path.to_owned(), fail)),
        Some("yaml" | "yml") => serde_yaml::from_str(&contents)
            .map_err(|fail| CliError::ServiceManifestYaml(path.to_owned(), fail)),
        _ => Err(CliError::UnsupportedManifestFormat(path.to_owned())),
    }
}

/// Config file and env first, `--label-override` on top.
fn resolve_config(args: &ServiceArgs) -> CliResult<ControllerConfig> {
    let mut config = ControllerConfig::resolve(args.config_file.as_deref())?;

    if let Some(label_override) = args.label_override {
        config.label_override = label_override;
    }

    Ok(config)
}

fn load(args: &ServiceArgs) -> CliResult<(ServiceCrd, ControllerConfig)> {
    Ok((read_service(&args.file)?, resolve_config(args)?))
}

pub(crate) fn render_command(args: RenderArgs) -> CliResult<()> {
    let (service, config) = load(&args.service)?;

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|fail| CliError::OutputFile(path, fail))?;
            render(&service, &config, file)
        }
        None => render(&service, &config, std::io::stdout().lock()),
    }
}

pub(crate) fn labels_command(args: ServiceArgs) -> CliResult<()> {
    let (service, config) = load(&args)?;

    labels(&service, &config, std::io::stdout().lock())
}

pub(crate) fn names_command(args: ServiceArgs) -> CliResult<()> {
    let service = read_service(&args.file)?;

    names(&service, std::io::stdout().lock())
}

fn render<W: Write>(service: &ServiceCrd, config: &ControllerConfig, writer: W) -> CliResult<()> {
    tracing::info!(service = %service.name_any(), ?config, "rendering manifests");

    ServiceManifests::new(service, config)
        .to_writer(writer)
        .map_err(CliError::from)
}

fn labels<W: Write>(service: &ServiceCrd, config: &ControllerConfig, writer: W) -> CliResult<()> {
    serde_yaml::to_writer(
        writer,
        &service_labels_with_policy(service, config.label_override),
    )
    .map_err(CliError::from)
}

fn names<W: Write>(service: &ServiceCrd, writer: W) -> CliResult<()> {
    serde_yaml::to_writer(writer, &DerivedNames::new(service)).map_err(CliError::from)
}
