//! Capacity limits for member tables.

/// Bounds on field, parameter and result tables.
///
/// `None` drops a bound entirely. The defaults are the language limits:
/// 100 fields per struct or interface, 16 parameters and a single result per
/// signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub(crate) max_fields: Option<usize>,
    pub(crate) max_params: Option<usize>,
    pub(crate) max_results: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_fields: Some(100),
            max_params: Some(16),
            max_results: Some(1),
        }
    }
}

impl Limits {
    /// Create limits with the language defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// No bound on any table.
    pub fn unbounded() -> Self {
        Self {
            max_fields: None,
            max_params: None,
            max_results: None,
        }
    }

    /// Set the field (and interface method) bound.
    pub fn max_fields(mut self, value: Option<usize>) -> Self {
        self.max_fields = value;
        self
    }

    /// Set the parameter bound.
    pub fn max_params(mut self, value: Option<usize>) -> Self {
        self.max_params = value;
        self
    }

    /// Set the result bound.
    pub fn max_results(mut self, value: Option<usize>) -> Self {
        self.max_results = value;
        self
    }

    pub fn fields(&self) -> Option<usize> {
        self.max_fields
    }

    pub fn params(&self) -> Option<usize> {
        self.max_params
    }

    pub fn results(&self) -> Option<usize> {
        self.max_results
    }
}
