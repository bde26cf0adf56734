use serde::{Serialize, Deserialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Direction to sort in.
#[derive(Default, Debug, Serialize, Deserialize, Display, EnumString, AsRefStr, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Descending. This is the default.
    #[default]
    Desc,
    /// Ascending.
    Asc,
}
