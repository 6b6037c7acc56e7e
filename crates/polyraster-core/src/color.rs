use serde::{Deserialize, Serialize};

/// A linear two-stop color scale mapping a numeric domain onto a pair of
/// colors. The render backend interpolates between the stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    domain: [f64; 2],
    range: [String; 2],
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            domain: [0.0, 1.0],
            range: ["blue".to_string(), "red".to_string()],
        }
    }
}

impl ColorScale {
    pub fn new(domain: [f64; 2], range: [String; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> &[String; 2] {
        &self.range
    }

    pub fn set_domain(&mut self, domain: [f64; 2]) -> &mut Self {
        self.domain = domain;
        self
    }

    pub fn set_range(&mut self, range: [String; 2]) -> &mut Self {
        self.range = range;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        let scale = ColorScale::default();
        assert_eq!(scale.domain(), [0.0, 1.0]);
        assert_eq!(scale.range()[0], "blue");
    }

    #[test]
    fn test_mutators_chain() {
        let mut scale = ColorScale::default();
        scale
            .set_domain([5.0, 500.0])
            .set_range(["#deebf7".to_string(), "#08306b".to_string()]);
        assert_eq!(scale.domain(), [5.0, 500.0]);
        assert_eq!(scale.range()[1], "#08306b");
    }
}
