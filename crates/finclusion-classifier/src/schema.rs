//! Column alignment between an encoded vector and a fitted model.
//!
//! Models are fit on named columns in a fixed order. Feeding them a row whose
//! columns differ by name or position silently produces garbage, so the
//! comparison here is strict: same names, same order.

use std::fmt;

/// First position at which two column lists disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDifference {
    pub position: usize,
    pub provided: String,
    pub expected: String,
}

/// The encoded columns do not match the columns the model was fit on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaMismatch {
    /// Columns the model expects that the vector lacks.
    pub missing: Vec<String>,
    /// Columns in the vector the model does not know.
    pub unexpected: Vec<String>,
    /// Set when both sides have the same columns in a different order.
    pub reordered: Option<ColumnDifference>,
    /// Column counts `(provided, expected)` when they differ.
    pub counts: Option<(usize, usize)>,
    /// Names listed more than once on either side.
    pub duplicated: Vec<String>,
}

impl SchemaMismatch {
    /// Compares provided column names against the model's expected names.
    ///
    /// Returns `None` when both lists are identical.
    pub fn compare<P, E>(provided: &[P], expected: &[E]) -> Option<Self>
    where
        P: AsRef<str>,
        E: AsRef<str>,
    {
        let provided: Vec<&str> = provided.iter().map(AsRef::as_ref).collect();
        let expected: Vec<&str> = expected.iter().map(AsRef::as_ref).collect();
        if provided == expected {
            return None;
        }

        let missing: Vec<String> = expected
            .iter()
            .filter(|name| !provided.contains(*name))
            .map(ToString::to_string)
            .collect();
        let unexpected: Vec<String> = provided
            .iter()
            .filter(|name| !expected.contains(*name))
            .map(ToString::to_string)
            .collect();
        let reordered = if missing.is_empty() && unexpected.is_empty() {
            provided
                .iter()
                .zip(expected.iter())
                .position(|(left, right)| left != right)
                .map(|position| ColumnDifference {
                    position,
                    provided: provided[position].to_string(),
                    expected: expected[position].to_string(),
                })
        } else {
            None
        };

        let counts =
            (provided.len() != expected.len()).then_some((provided.len(), expected.len()));
        let mut duplicated: Vec<String> = Vec::new();
        for side in [&provided, &expected] {
            for (index, name) in side.iter().enumerate() {
                if side[..index].contains(name) && !duplicated.iter().any(|seen| seen == name) {
                    duplicated.push((*name).to_string());
                }
            }
        }

        Some(Self {
            missing,
            unexpected,
            reordered,
            counts,
            duplicated,
        })
    }
}

impl fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feature schema mismatch")?;
        let mut separator = ": ";
        if !self.missing.is_empty() {
            write!(f, "{separator}missing [{}]", self.missing.join(", "))?;
            separator = "; ";
        }
        if !self.unexpected.is_empty() {
            write!(f, "{separator}unexpected [{}]", self.unexpected.join(", "))?;
            separator = "; ";
        }
        if let Some(diff) = &self.reordered {
            write!(
                f,
                "{separator}column {} is '{}' but the model expects '{}'",
                diff.position, diff.provided, diff.expected
            )?;
            separator = "; ";
        }
        if let Some((provided, expected)) = self.counts {
            write!(f, "{separator}{provided} columns given, the model expects {expected}")?;
            separator = "; ";
        }
        if !self.duplicated.is_empty() {
            write!(f, "{separator}duplicated [{}]", self.duplicated.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaMismatch {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_lists_match() {
        assert_eq!(SchemaMismatch::compare(&["a", "b"], &["a", "b"]), None);
    }

    #[test]
    fn reports_missing_and_unexpected() {
        let mismatch = SchemaMismatch::compare(&["a", "c"], &["a", "b"]).unwrap();
        assert_eq!(mismatch.missing, vec!["b".to_string()]);
        assert_eq!(mismatch.unexpected, vec!["c".to_string()]);
        assert_eq!(mismatch.reordered, None);
        assert_eq!(
            mismatch.to_string(),
            "feature schema mismatch: missing [b]; unexpected [c]"
        );
    }

    #[test]
    fn reports_first_reordered_column() {
        let mismatch = SchemaMismatch::compare(&["a", "c", "b"], &["a", "b", "c"]).unwrap();
        assert!(mismatch.missing.is_empty());
        assert!(mismatch.unexpected.is_empty());
        assert_eq!(
            mismatch.reordered,
            Some(ColumnDifference {
                position: 1,
                provided: "c".to_string(),
                expected: "b".to_string(),
            })
        );
    }

    #[test]
    fn shorter_list_reports_missing_tail() {
        let mismatch = SchemaMismatch::compare(&["a"], &["a", "b"]).unwrap();
        assert_eq!(mismatch.missing, vec!["b".to_string()]);
        assert_eq!(mismatch.counts, Some((1, 2)));
        assert_eq!(
            mismatch.to_string(),
            "feature schema mismatch: missing [b]; 1 columns given, the model expects 2"
        );
    }

    #[test]
    fn repeated_column_is_reported() {
        let mismatch = SchemaMismatch::compare(&["a", "b", "a"], &["a", "b"]).unwrap();
        assert!(mismatch.missing.is_empty());
        assert!(mismatch.unexpected.is_empty());
        assert_eq!(mismatch.reordered, None);
        assert_eq!(mismatch.counts, Some((3, 2)));
        assert_eq!(mismatch.duplicated, vec!["a".to_string()]);
        assert_eq!(
            mismatch.to_string(),
            "feature schema mismatch: 3 columns given, the model expects 2; duplicated [a]"
        );
    }
}
