use serde::{Deserialize, Serialize};

use crate::domain::{null_as_default, ContactGroups, ContactInfo};

/// Body of `GET /categories`. A missing or `null` `categories` key reads as
/// an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfoPayload {
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_line3: Option<String>,
    #[serde(default)]
    pub work_hours: Option<String>,
    #[serde(default)]
    pub company_description: Option<String>,
    #[serde(default)]
    pub contact_groups: Option<ContactGroups>,
}

impl From<ContactInfo> for ContactInfoPayload {
    fn from(info: ContactInfo) -> Self {
        let mut lines = info.address_lines.into_iter();
        Self {
            address_line1: lines.next(),
            address_line2: lines.next(),
            address_line3: lines.next(),
            work_hours: Some(info.work_hours),
            company_description: Some(info.company_description),
            contact_groups: Some(info.contact_groups),
        }
    }
}
