//! Business identity shared by every section that shows contact details.

use serde::Serialize;

/// Crate version, shown in the startup log line.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed identity of the business the page advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessConfig {
    /// Brand name, used in the nav bar, footer and copyright line
    pub name: &'static str,
    /// One-line positioning statement
    pub tagline: &'static str,
    /// Display phone number, also the target of every `tel:` link
    pub phone: &'static str,
    /// Contact address, target of the `mailto:` link
    pub email: &'static str,
    /// Service area shown in the contact panel
    pub city: &'static str,
}

/// The business this build of the page is for.
pub const BUSINESS: BusinessConfig = BusinessConfig {
    name: "AquaFlow Pro",
    tagline: "Premium Plumbing Solutions for Modern Living",
    phone: "(555) 123-4567",
    email: "contact@aquaflow.com",
    city: "Los Angeles, CA",
};

impl BusinessConfig {
    /// `tel:` URI handed to the host's dialer. The number is passed through verbatim.
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// `mailto:` URI handed to the host's mail client.
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Footer copyright line for the given year.
    pub fn copyright(&self, year: u32) -> String {
        format!("© {} {}. All rights reserved.", year, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn outbound_uris_use_config_values() {
        assert_eq!(BUSINESS.tel_href(), "tel:(555) 123-4567");
        assert_eq!(BUSINESS.mailto_href(), "mailto:contact@aquaflow.com");
    }

    #[test]
    fn copyright_names_the_business() {
        assert_eq!(
            BUSINESS.copyright(2025),
            "© 2025 AquaFlow Pro. All rights reserved."
        );
    }

    #[test]
    fn serializes_as_plain_object() {
        let json = serde_json::to_value(BUSINESS).unwrap();
        assert_eq!(json["name"], "AquaFlow Pro");
        assert_eq!(json["city"], "Los Angeles, CA");
    }
}
