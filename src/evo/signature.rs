//! Evaluation signatures.
//!
//! A [`Signature`] is the ordered list of `(objective name, score)` pairs a
//! candidate receives from the registered objectives. It is the population's
//! only notion of identity: two candidates with equal signatures occupy the
//! same population slot.
//!
//! # Score equality
//!
//! Scores are compared exactly. `-0.0` and `0.0` are treated as the same
//! score; non-finite values never reach a signature because evaluation
//! rejects them. Domains that can express their objectives as integer
//! penalties avoid near-duplicate entries altogether.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A single finite objective score.
#[derive(Debug, Clone, Copy)]
pub struct Score(f64);

impl Score {
    /// Wraps a finite value. Returns `None` for NaN or infinities.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() {
            // -0.0 + 0.0 == +0.0
            Some(Self(value + 0.0))
        } else {
            None
        }
    }

    /// The raw score.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Score {}

impl Hash for Score {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Ordered `(objective name, score)` pairs identifying a candidate's quality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    entries: Vec<(Arc<str>, Score)>,
}

impl Signature {
    pub(crate) fn from_entries(entries: Vec<(Arc<str>, Score)>) -> Self {
        Self { entries }
    }

    /// Builds a signature from name/value pairs.
    ///
    /// Returns `None` if any value is not finite.
    ///
    /// ```
    /// use u_evo::evo::Signature;
    ///
    /// let sig = Signature::from_pairs([("cost", 3.0), ("risk", 1.0)]).unwrap();
    /// assert_eq!(sig.score("risk"), Some(1.0));
    /// assert!(Signature::from_pairs([("cost", f64::NAN)]).is_none());
    /// ```
    pub fn from_pairs<N, I>(pairs: I) -> Option<Self>
    where
        N: Into<Arc<str>>,
        I: IntoIterator<Item = (N, f64)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, value)| Score::new(value).map(|s| (name.into(), s)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { entries })
    }

    /// Number of objectives in the signature.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, score)` pairs in objective order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(n, s)| (n.as_ref(), s.value()))
    }

    /// Objective names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_ref())
    }

    /// Raw scores in objective order.
    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, s)| s.value())
    }

    /// Score of the named objective, if present.
    pub fn score(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_ref() == name)
            .map(|(_, s)| s.value())
    }
}

impl fmt::Display for Signature {
    /// Formats as `{name: score, name: score}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, score)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {score}")?;
        }
        f.write_str("}")
    }
}
