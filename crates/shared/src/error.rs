use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Products,
    Categories,
    ContactInfo,
}

impl Resource {
    pub const ALL: [Resource; 3] = [
        Resource::Products,
        Resource::Categories,
        Resource::ContactInfo,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Categories => "categories",
            Self::ContactInfo => "contact-info",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("network error loading {resource}: {message}")]
    Network { resource: Resource, message: String },
    #[error("failed to decode {resource}: {message}")]
    Decode { resource: Resource, message: String },
    #[error("partial catalog load ({} of 3 resources failed): {first}", .failed.len())]
    PartialLoad {
        first: Box<CatalogError>,
        failed: Vec<Resource>,
    },
}

impl CatalogError {
    pub fn network(resource: Resource, message: impl Into<String>) -> Self {
        Self::Network {
            resource,
            message: message.into(),
        }
    }

    pub fn decode(resource: Resource, message: impl Into<String>) -> Self {
        Self::Decode {
            resource,
            message: message.into(),
        }
    }

    /// The resource a gateway error concerns; `None` for aggregated errors.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Self::Network { resource, .. } | Self::Decode { resource, .. } => Some(*resource),
            Self::PartialLoad { .. } => None,
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Self::PartialLoad { .. })
    }
}
