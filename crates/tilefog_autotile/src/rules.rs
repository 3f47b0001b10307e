//! The fixed autotile rule table and signature matching

use crate::{decode_pattern, AutotileError, DirectionalSignature};

/// Named patterns for the 16 grass variants.
///
/// `c` is the interior, the eight compass names are edges and corners of a
/// region, `i` is an isolated tile, and the `*f` names are one-tile-wide
/// strips (`nf`/`ef`/`sf`/`wf` are strip ends, `hf`/`vf` run horizontally
/// and vertically).
pub const STANDARD_PATTERNS: [(&str, &str); 16] = [
    ("ne", " . |XX.| X "),
    ("n", " . |XXX| X "),
    ("i", " . |.X.| . "),
    ("nf", " . |.X.| X "),
    ("ef", " . |XX.| . "),
    ("sf", " X |.X.| . "),
    ("wf", " . |.XX| . "),
    ("vf", " X |.X.| X "),
    ("hf", " . |XXX| . "),
    ("nw", " . |.XX| X "),
    ("w", " X |.XX| X "),
    ("e", " X |XX.| X "),
    ("sw", " X |.XX| . "),
    ("s", " X |XXX| . "),
    ("c", " X |XXX| X "),
    ("se", " X |XX.| . "),
];

/// A named mapping from one signature to a sprite variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutotileRule {
    pub name: String,
    pub signature: DirectionalSignature,
}

/// Something wrong with a rule table's coverage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTableIssue {
    /// No rule covers this signature
    Missing(DirectionalSignature),
    /// More than one rule covers this signature
    Ambiguous {
        signature: DirectionalSignature,
        names: Vec<String>,
    },
    /// Two rules share a name
    DuplicateName(String),
}

/// Immutable rule table, built once and shared by reference.
///
/// Lookups go through a 16-slot index keyed by [`DirectionalSignature::index`],
/// which gives the same answer as scanning every rule for a field-by-field
/// equal signature.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<AutotileRule>,
    /// Rule indices per packed signature
    lookup: [Vec<usize>; DirectionalSignature::COUNT],
}

/// Build the standard table. Call once at startup and keep the result.
pub fn init_rule_table() -> Result<RuleTable, AutotileError> {
    RuleTable::standard()
}

impl RuleTable {
    /// Decode [`STANDARD_PATTERNS`] into a table
    pub fn standard() -> Result<Self, AutotileError> {
        Self::from_patterns(&STANDARD_PATTERNS)
    }

    /// Decode `(name, pattern)` pairs in order. Fails on the first malformed pattern.
    pub fn from_patterns(patterns: &[(&str, &str)]) -> Result<Self, AutotileError> {
        let rules = patterns
            .iter()
            .map(|(name, pattern)| {
                Ok(AutotileRule {
                    name: (*name).to_string(),
                    signature: decode_pattern(pattern)?,
                })
            })
            .collect::<Result<Vec<_>, AutotileError>>()?;
        let table = Self::from_rules(rules);
        tracing::debug!(rules = table.rules.len(), "built autotile rule table");
        Ok(table)
    }

    /// Wrap already-decoded rules, preserving their order
    pub fn from_rules(rules: Vec<AutotileRule>) -> Self {
        let mut lookup: [Vec<usize>; DirectionalSignature::COUNT] = Default::default();
        for (i, rule) in rules.iter().enumerate() {
            lookup[rule.signature.index()].push(i);
        }
        Self { rules, lookup }
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[AutotileRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&AutotileRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Name of the single rule whose signature equals `signature`.
    ///
    /// Zero or several candidates is a defect in the table and comes back as
    /// [`AutotileError::AmbiguousOrMissingRule`].
    pub fn match_signature(&self, signature: DirectionalSignature) -> Result<&str, AutotileError> {
        match self.lookup[signature.index()].as_slice() {
            [only] => Ok(self.rules[*only].name.as_str()),
            candidates => Err(AutotileError::AmbiguousOrMissingRule {
                signature,
                candidates: candidates.len(),
            }),
        }
    }

    /// Coverage problems: missing or ambiguous signatures and duplicate names
    pub fn issues(&self) -> Vec<RuleTableIssue> {
        let mut issues = Vec::new();
        for signature in DirectionalSignature::all() {
            match self.lookup[signature.index()].as_slice() {
                [] => issues.push(RuleTableIssue::Missing(signature)),
                [_] => {}
                many => issues.push(RuleTableIssue::Ambiguous {
                    signature,
                    names: many.iter().map(|&i| self.rules[i].name.clone()).collect(),
                }),
            }
        }
        for (i, rule) in self.rules.iter().enumerate() {
            if self.rules[..i].iter().any(|r| r.name == rule.name) {
                issues.push(RuleTableIssue::DuplicateName(rule.name.clone()));
            }
        }
        issues
    }
}
