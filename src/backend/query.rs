use std::fmt::Display;

/// Builder for json-server query strings: `_page`/`_limit` pagination,
/// exact-match params and `field_gte`/`field_lte` range predicates.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pairs: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: i64) -> Self {
        self.pairs.push(("_page".into(), page.max(1).to_string()));
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.pairs
            .push(("_limit".into(), limit.clamp(1, 100).to_string()));
        self
    }

    pub fn eq(mut self, field: &str, value: impl Display) -> Self {
        self.pairs.push((field.to_string(), value.to_string()));
        self
    }

    pub fn gte(mut self, field: &str, value: impl Display) -> Self {
        self.pairs.push((format!("{field}_gte"), value.to_string()));
        self
    }

    pub fn lte(mut self, field: &str, value: impl Display) -> Self {
        self.pairs.push((format!("{field}_lte"), value.to_string()));
        self
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
