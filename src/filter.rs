// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Filter configuration for selecting records from the catalog.
//!
//! Each numeric target is paired with a "random" flag. When the flag is
//! set the target is ignored and that feature is left unconstrained; when
//! it is clear the record must match the target exactly.
//!
//! The wire format is camelCase JSON, with every field optional:
//!
//! ```json
//! {
//!   "nodeCount": 9,
//!   "nodeRandom": false,
//!   "normalMode": true,
//!   "jumpCount": 2,
//!   "jumpRandom": false,
//!   "lineLengthOrder": "desc"
//! }
//! ```

use crate::classify::ClassifiedRecord;
use crate::error::Result;
use crate::shuffle::shuffle;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How selected records are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineLengthOrder {
    /// Longest line first; ties keep catalog order.
    Desc,
    /// Uniformly shuffled.
    #[default]
    Random,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub node_count: usize,
    pub node_random: bool,
    /// Keep only normal-style patterns.
    pub normal_mode: bool,
    pub jump_count: usize,
    pub jump_random: bool,
    pub line_length_order: LineLengthOrder,
    pub straight_lines: usize,
    pub straight_random: bool,
    pub oblique45_lines: usize,
    pub oblique45_random: bool,
    /// Target for the knight-like (1:2) diagonals.
    pub oblique12_lines: usize,
    pub oblique12_random: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            node_count: 9,
            node_random: false,
            normal_mode: false,
            jump_count: 5,
            jump_random: true,
            line_length_order: LineLengthOrder::Random,
            straight_lines: 7,
            straight_random: false,
            oblique45_lines: 3,
            oblique45_random: true,
            oblique12_lines: 3,
            oblique12_random: true,
        }
    }
}

/// Exact match unless the target is randomized.
fn target_matches(random: bool, target: usize, actual: usize) -> bool {
    random || target == actual
}

impl FilterConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::debug!("[FilterConfig] Loaded {}", path.display());
        Ok(config)
    }

    /// Whether a record passes every active constraint.
    pub fn matches(&self, record: &ClassifiedRecord) -> bool {
        target_matches(self.node_random, self.node_count, record.points)
            && (!self.normal_mode || record.normal_style)
            && target_matches(self.jump_random, self.jump_count, record.skip_point_nums)
            && target_matches(self.straight_random, self.straight_lines, record.straight_lines)
            && target_matches(
                self.oblique45_random,
                self.oblique45_lines,
                record.diagonal45_lines,
            )
            && target_matches(
                self.oblique12_random,
                self.oblique12_lines,
                record.diagonal_lines,
            )
    }

    /// Select matching records and order them.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        records: &[ClassifiedRecord],
        rng: &mut R,
    ) -> Vec<ClassifiedRecord> {
        let mut selected: Vec<ClassifiedRecord> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();
        match self.line_length_order {
            LineLengthOrder::Desc => {
                selected.sort_by(|a, b| b.line_length.total_cmp(&a.line_length));
            }
            LineLengthOrder::Random => shuffle(&mut selected, rng),
        }
        log::debug!(
            "[FilterConfig] Selected {} of {} records",
            selected.len(),
            records.len()
        );
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::error::PatternError;
    use crate::geometry::Pattern;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(values: &[u8]) -> ClassifiedRecord {
        classify(&Pattern::new(values).unwrap())
    }

    fn unconstrained() -> FilterConfig {
        FilterConfig {
            node_random: true,
            jump_random: true,
            straight_random: true,
            oblique45_random: true,
            oblique12_random: true,
            line_length_order: LineLengthOrder::Desc,
            ..FilterConfig::default()
        }
    }

    #[test]
    fn test_defaults_from_empty_json() {
        let config = FilterConfig::from_json("{}").unwrap();
        assert_eq!(config, FilterConfig::default());
        assert_eq!(config.node_count, 9);
        assert_eq!(config.line_length_order, LineLengthOrder::Random);
    }

    #[test]
    fn test_parse_camel_case() {
        let config = FilterConfig::from_json(
            r#"{"nodeCount": 4, "normalMode": true, "lineLengthOrder": "desc", "oblique12Random": false}"#,
        )
        .unwrap();
        assert_eq!(config.node_count, 4);
        assert!(config.normal_mode);
        assert_eq!(config.line_length_order, LineLengthOrder::Desc);
        assert!(!config.oblique12_random);
        assert_eq!(config.jump_count, 5);
    }

    #[test]
    fn test_parse_error() {
        let result = FilterConfig::from_json(r#"{"lineLengthOrder": "sideways"}"#);
        assert!(matches!(result, Err(PatternError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = FilterConfig::load(Path::new("/nonexistent/filter.json"));
        assert!(matches!(result, Err(PatternError::Io(_))));
    }

    #[test]
    fn test_exact_targets() {
        let config = FilterConfig {
            node_count: 4,
            jump_count: 3,
            jump_random: false,
            straight_lines: 2,
            oblique45_lines: 1,
            oblique45_random: false,
            oblique12_lines: 0,
            oblique12_random: false,
            ..FilterConfig::default()
        };
        assert!(config.matches(&record(&[1, 3, 7, 9])));
        assert!(!config.matches(&record(&[1, 2, 3, 4])));
        assert!(!config.matches(&record(&[1, 3, 7, 9, 8])));
    }

    #[test]
    fn test_normal_mode() {
        let config = FilterConfig {
            normal_mode: true,
            ..unconstrained()
        };
        assert!(!config.matches(&record(&[1, 3, 7, 9])));
        assert!(config.matches(&record(&[2, 1, 3, 6])));
    }

    #[test]
    fn test_desc_order() {
        let records = vec![
            record(&[1, 2, 3, 6]),
            record(&[1, 9, 3, 7]),
            record(&[1, 6, 7, 2]),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        let selected = unconstrained().apply(&records, &mut rng);
        let lengths: Vec<f64> = selected.iter().map(|r| r.line_length).collect();
        assert_eq!(selected.len(), 3);
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(selected[0].pattern, records[1].pattern);
    }

    #[test]
    fn test_random_order_keeps_members() {
        let records = vec![
            record(&[1, 2, 3, 6]),
            record(&[1, 9, 3, 7]),
            record(&[1, 6, 7, 2]),
            record(&[5, 4, 3, 2]),
        ];
        let config = FilterConfig {
            line_length_order: LineLengthOrder::Random,
            ..unconstrained()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let mut selected: Vec<String> = config
            .apply(&records, &mut rng)
            .iter()
            .map(|r| r.pattern.to_string())
            .collect();
        selected.sort();
        let mut expected: Vec<String> = records.iter().map(|r| r.pattern.to_string()).collect();
        expected.sort();
        assert_eq!(selected, expected);
    }
}
