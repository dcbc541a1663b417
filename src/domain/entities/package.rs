//! Package entity - a named group of designtime artifacts

use serde::{Deserialize, Serialize};

/// Package mode marking a configure-only package
pub const READ_ONLY_MODE: &str = "READ_ONLY";

/// Package record as held by the tenant and mirrored in Git
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PackageDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub short_text: String,
    pub version: String,
    pub vendor: String,
    pub mode: String,
    pub products: String,
    pub keywords: String,
    pub countries: String,
    pub industries: String,
    pub line_of_business: String,
}

impl PackageDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Read-only packages are never downloaded or written
    pub fn is_read_only(&self) -> bool {
        self.mode == READ_ONLY_MODE
    }

    /// Names of the fields that differ from `other`
    ///
    /// The id is the key and is not compared.
    pub fn changed_fields(&self, other: &PackageDescriptor) -> Vec<&'static str> {
        let fields: [(&'static str, &String, &String); 11] = [
            ("Name", &self.name, &other.name),
            ("Description", &self.description, &other.description),
            ("ShortText", &self.short_text, &other.short_text),
            ("Version", &self.version, &other.version),
            ("Vendor", &self.vendor, &other.vendor),
            ("Mode", &self.mode, &other.mode),
            ("Products", &self.products, &other.products),
            ("Keywords", &self.keywords, &other.keywords),
            ("Countries", &self.countries, &other.countries),
            ("Industries", &self.industries, &other.industries),
            ("LineOfBusiness", &self.line_of_business, &other.line_of_business),
        ];
        fields
            .into_iter()
            .filter(|(_, a, b)| a != b)
            .map(|(name, _, _)| name)
            .collect()
    }
}
