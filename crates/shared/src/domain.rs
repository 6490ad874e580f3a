use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use serde::{Deserialize, Deserializer, Serialize};

use crate::protocol::ContactInfoPayload;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(value) => ProductId(value),
            RawId::Signed(value) => ProductId(value.to_string()),
            RawId::Unsigned(value) => ProductId(value.to_string()),
        })
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub category: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactGroupKey {
    Whatsapp,
    Ustalar,
    Satis,
}

impl ContactGroupKey {
    pub const ALL: [ContactGroupKey; 3] = [
        ContactGroupKey::Whatsapp,
        ContactGroupKey::Ustalar,
        ContactGroupKey::Satis,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.as_str() == key)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Ustalar => "ustalar",
            Self::Satis => "satis",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Whatsapp => "WhatsApp",
            Self::Ustalar => "Ustalar",
            Self::Satis => "Satış",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
}

/// Contact entries keyed by group. A group that was never supplied reads as
/// an empty slice, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ContactGroups(BTreeMap<ContactGroupKey, Vec<ContactEntry>>);

impl ContactGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: ContactGroupKey) -> &[ContactEntry] {
        self.0.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn insert(&mut self, key: ContactGroupKey, entries: Vec<ContactEntry>) {
        self.0.insert(key, entries);
    }

    pub fn with(mut self, key: ContactGroupKey, entries: Vec<ContactEntry>) -> Self {
        self.insert(key, entries);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactGroupKey, &[ContactEntry])> + '_ {
        ContactGroupKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }
}

impl<'de> Deserialize<'de> for ContactGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, Option<Vec<ContactEntry>>>::deserialize(deserializer)?;
        let groups = raw
            .into_iter()
            .filter_map(|(key, entries)| {
                ContactGroupKey::from_key(&key).map(|key| (key, entries.unwrap_or_default()))
            })
            .collect();
        Ok(Self(groups))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ContactInfoPayload", into = "ContactInfoPayload")]
pub struct ContactInfo {
    pub address_lines: Vec<String>,
    pub work_hours: String,
    pub company_description: String,
    pub contact_groups: ContactGroups,
}

pub const MAX_ADDRESS_LINES: usize = 3;

impl From<ContactInfoPayload> for ContactInfo {
    fn from(payload: ContactInfoPayload) -> Self {
        let address_lines = [
            payload.address_line1,
            payload.address_line2,
            payload.address_line3,
        ]
        .into_iter()
        .flatten()
        .filter(|line| !line.trim().is_empty())
        .take(MAX_ADDRESS_LINES)
        .collect();

        Self {
            address_lines,
            work_hours: payload.work_hours.unwrap_or_default(),
            company_description: payload.company_description.unwrap_or_default(),
            contact_groups: payload.contact_groups.unwrap_or_default(),
        }
    }
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
