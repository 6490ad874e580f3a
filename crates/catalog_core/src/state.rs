use chrono::{DateTime, Utc};
use shared::{
    domain::{ContactInfo, Product},
    error::{CatalogError, Resource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceErrors {
    pub products: Option<CatalogError>,
    pub categories: Option<CatalogError>,
    pub contact_info: Option<CatalogError>,
}

impl ResourceErrors {
    pub fn get(&self, resource: Resource) -> Option<&CatalogError> {
        match resource {
            Resource::Products => self.products.as_ref(),
            Resource::Categories => self.categories.as_ref(),
            Resource::ContactInfo => self.contact_info.as_ref(),
        }
    }

    pub fn record(&mut self, resource: Resource, error: CatalogError) {
        let slot = match resource {
            Resource::Products => &mut self.products,
            Resource::Categories => &mut self.categories,
            Resource::ContactInfo => &mut self.contact_info,
        };
        *slot = Some(error);
    }

    pub fn failed(&self) -> Vec<Resource> {
        Resource::ALL
            .into_iter()
            .filter(|resource| self.get(*resource).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.failed().is_empty()
    }

    /// Aggregate error for the whole load: `None` when nothing failed, the
    /// first cause when every resource failed, `PartialLoad` otherwise.
    pub fn load_error(&self) -> Option<CatalogError> {
        let failed = self.failed();
        let first = failed.first().and_then(|resource| self.get(*resource))?.clone();
        if failed.len() == Resource::ALL.len() {
            return Some(first);
        }
        Some(CatalogError::PartialLoad {
            first: Box::new(first),
            failed,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub contact: Option<ContactInfo>,
    pub status: LoadStatus,
    pub error: Option<CatalogError>,
    pub resource_errors: ResourceErrors,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn has_data(&self) -> bool {
        !self.products.is_empty() || !self.categories.is_empty() || self.contact.is_some()
    }

    /// Installs the settled results of one load. Failed resources keep their
    /// previous value so earlier data stays renderable.
    pub(crate) fn settle(
        &mut self,
        products: Result<Vec<Product>, CatalogError>,
        categories: Result<Vec<String>, CatalogError>,
        contact: Result<ContactInfo, CatalogError>,
    ) -> Option<CatalogError> {
        let mut errors = ResourceErrors::default();

        match products {
            Ok(products) => self.products = products,
            Err(err) => errors.record(Resource::Products, err),
        }
        match categories {
            Ok(categories) => self.categories = categories,
            Err(err) => errors.record(Resource::Categories, err),
        }
        match contact {
            Ok(contact) => self.contact = Some(contact),
            Err(err) => errors.record(Resource::ContactInfo, err),
        }

        if errors.failed().len() < Resource::ALL.len() {
            self.loaded_at = Some(Utc::now());
        }

        let error = errors.load_error();
        self.status = if error.is_some() {
            LoadStatus::Failed
        } else {
            LoadStatus::Ready
        };
        self.error = error.clone();
        self.resource_errors = errors;
        error
    }
}
