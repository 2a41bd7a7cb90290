//! Navigation context - how the current dashboard route relates to brands

use serde::{Deserialize, Serialize};

/// Route prefix for brand-specific views
pub const BRAND_ROUTE_PREFIX: &str = "/company/brands/";

/// Path segment marking inventory views (company, brand or store level)
const INVENTORY_SEGMENT: &str = "inventory";

/// Classification of the current route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationContext {
    /// `/company/brands/{brand_id}[/rest]`
    BrandScoped {
        brand_id: String,
        /// Sub-route after the brand id, without leading slash
        #[serde(skip_serializing_if = "Option::is_none")]
        rest: Option<String>,
    },
    /// Any route with an `inventory` segment
    InventoryScoped,
    Other,
}

impl NavigationContext {
    /// Classify a path. Query strings and fragments are ignored.
    pub fn classify(path: &str) -> Self {
        let path = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();

        if let Some(tail) = path.strip_prefix(BRAND_ROUTE_PREFIX) {
            let tail = tail.trim_end_matches('/');
            let (brand_id, rest) = match tail.split_once('/') {
                Some((id, rest)) => (id, Some(rest.trim_start_matches('/'))),
                None => (tail, None),
            };
            if !brand_id.is_empty() {
                return Self::BrandScoped {
                    brand_id: brand_id.to_string(),
                    rest: rest.filter(|r| !r.is_empty()).map(str::to_string),
                };
            }
        }

        if path.split('/').any(|segment| segment == INVENTORY_SEGMENT) {
            return Self::InventoryScoped;
        }

        Self::Other
    }
}

/// Route of a brand's view, keeping the sub-route of the current context
pub fn brand_route(brand_id: &str, rest: Option<&str>) -> String {
    match rest {
        Some(rest) => format!("{}{}/{}", BRAND_ROUTE_PREFIX, brand_id, rest),
        None => format!("{}{}", BRAND_ROUTE_PREFIX, brand_id),
    }
}
