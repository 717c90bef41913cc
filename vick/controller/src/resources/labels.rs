use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::ResourceExt;
use vick_config::labels::LabelOverridePolicy;

use crate::{
    constants::{
        ReservedLabel, CELL_NAME_LABEL_KEY, CELL_SERVICE_TYPE_LABEL_KEY, CELL_SERVICE_TYPE_SERVICE,
        SERVICE_NAME_LABEL_KEY,
    },
    crd::ServiceCrd,
};

/// Labels of an object generated for a `Service`.
pub type LabelSet = BTreeMap<String, String>;

/// [`service_labels_with_policy`] with the default [`LabelOverridePolicy::UserWins`].
pub fn service_labels(service: &ServiceCrd) -> LabelSet {
    service_labels_with_policy(service, LabelOverridePolicy::default())
}

/// Labels every object generated for `service` carries.
///
/// Always contains the [`ReservedLabel`]s, followed by every label of the `Service` itself. When
/// the `Service` uses a reserved key, `policy` decides which value is kept.
#[tracing::instrument(level = "trace", skip(service), fields(service = %service.name_any()), ret)]
pub fn service_labels_with_policy(service: &ServiceCrd, policy: LabelOverridePolicy) -> LabelSet {
    let mut labels = LabelSet::from([
        (SERVICE_NAME_LABEL_KEY.to_owned(), service.name_any()),
        (CELL_NAME_LABEL_KEY.to_owned(), service.spec.cell.clone()),
        (
            CELL_SERVICE_TYPE_LABEL_KEY.to_owned(),
            CELL_SERVICE_TYPE_SERVICE.to_owned(),
        ),
    ]);

    for (key, value) in service.metadata.labels.iter().flatten() {
        if let Some(reserved) = ReservedLabel::from_key(key) {
            tracing::debug!(?reserved, %value, %policy, "service label uses a reserved key");

            if policy == LabelOverridePolicy::ReservedWins {
                continue;
            }
        }

        labels.insert(key.clone(), value.clone());
    }

    labels
}

/// [`service_selector_with_policy`] with the default [`LabelOverridePolicy::UserWins`].
pub fn service_selector(service: &ServiceCrd) -> LabelSelector {
    service_selector_with_policy(service, LabelOverridePolicy::default())
}

/// Selects exactly the objects labelled with [`service_labels_with_policy`] for the same
/// `service` and `policy`.
pub fn service_selector_with_policy(
    service: &ServiceCrd,
    policy: LabelOverridePolicy,
) -> LabelSelector {
    LabelSelector {
        match_labels: Some(service_labels_with_policy(service, policy)),
        ..Default::default()
    }
}

/// Whether an object with `labels` is selected by `selector`.
///
/// Only `matchLabels` is considered, selectors built here never have `matchExpressions`.
pub fn selector_matches(selector: &LabelSelector, labels: &LabelSet) -> bool {
    selector
        .match_labels
        .iter()
        .flatten()
        .all(|(key, value)| labels.get(key) == Some(value))
}
