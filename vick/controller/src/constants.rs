//! Label keys and values shared by everything that reads or writes the labels of objects owned by
//! a vick `Service`.

/// API group of the vick custom resources.
pub const GROUP_NAME: &str = "vick.wso2.com";

/// Name of the `Service` that owns the object.
pub const SERVICE_NAME_LABEL_KEY: &str = "vick.wso2.com/service";

/// Name of the cell the owning `Service` belongs to.
pub const CELL_NAME_LABEL_KEY: &str = "vick.wso2.com/cell";

/// Kind of the object within the cell model.
pub const CELL_SERVICE_TYPE_LABEL_KEY: &str = "vick.wso2.com/cell-service-type";

/// [`CELL_SERVICE_TYPE_LABEL_KEY`] value of objects generated for a `Service`.
pub const CELL_SERVICE_TYPE_SERVICE: &str = "Service";

/// The labels every object generated for a `Service` carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReservedLabel {
    ServiceName,
    CellName,
    CellServiceType,
}

impl ReservedLabel {
    pub const ALL: [ReservedLabel; 3] = [
        ReservedLabel::ServiceName,
        ReservedLabel::CellName,
        ReservedLabel::CellServiceType,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ReservedLabel::ServiceName => SERVICE_NAME_LABEL_KEY,
            ReservedLabel::CellName => CELL_NAME_LABEL_KEY,
            ReservedLabel::CellServiceType => CELL_SERVICE_TYPE_LABEL_KEY,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.key() == key)
    }
}
