use crate::error::AsmError;
use std::collections::HashMap;

/// A positional label name: pure digits, referenced only via `Nf`/`Nb`.
pub(crate) fn is_numeric(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// Splits `Nf`/`Nb` into the label digits and the search direction.
fn positional_reference(reference: &str) -> Option<(&str, char)> {
    let mut chars = reference.chars();
    let direction = chars.next_back()?;
    let name = chars.as_str();

    if (direction == 'f' || direction == 'b') && is_numeric(name) {
        Some((name, direction))
    } else {
        None
    }
}

/// Resolves code-label references against the per-position label lists.
///
/// Global (identifier) labels are collected into an eager map so lookup is
/// O(1) and duplicates are rejected up front; positional labels stay in
/// the positional lists and are searched directionally per reference.
pub(crate) struct LabelResolver<'a> {
    labels: &'a [Vec<String>],
    globals: HashMap<&'a str, u32>,
}

impl<'a> LabelResolver<'a> {
    pub fn new(labels: &'a [Vec<String>]) -> Result<LabelResolver<'a>, AsmError> {
        let mut globals = HashMap::new();

        for (position, names) in labels.iter().enumerate() {
            for name in names {
                if is_numeric(name) {
                    continue;
                }
                if globals.insert(name.as_str(), position as u32).is_some() {
                    return Err(AsmError::DuplicateLabel { name: name.clone() });
                }
            }
        }

        Ok(LabelResolver { labels, globals })
    }

    pub fn globals(&self) -> &HashMap<&'a str, u32> {
        &self.globals
    }

    /// Resolves `reference` for the instruction at index `from`.
    ///
    /// `Nf` searches forward from `from + 1`; `Nb` searches backward from
    /// `from` inclusive.
    pub fn resolve(&self, reference: &str, from: usize, line: usize) -> Result<u32, AsmError> {
        if is_numeric(reference) {
            return Err(AsmError::MissingDirection {
                line,
                label: reference.to_owned(),
            });
        }

        let not_found = || AsmError::LabelNotFound {
            line,
            label: reference.to_owned(),
        };

        if let Some((name, direction)) = positional_reference(reference) {
            let has_label = |i: &usize| self.labels[*i].iter().any(|l| l == name);
            let found = if direction == 'f' {
                (from + 1..self.labels.len()).find(has_label)
            } else {
                (0..=from.min(self.labels.len().saturating_sub(1)))
                    .rev()
                    .find(has_label)
            };
            return found.map(|i| i as u32).ok_or_else(not_found);
        }

        self.globals.get(reference).copied().ok_or_else(not_found)
    }
}

/// Builds the data-label map: name to byte offset, global lookup only.
pub(crate) fn data_label_map(labels: &[Vec<String>]) -> Result<HashMap<&str, u32>, AsmError> {
    let mut map = HashMap::new();

    for (offset, names) in labels.iter().enumerate() {
        for name in names {
            if map.insert(name.as_str(), offset as u32).is_some() {
                return Err(AsmError::DuplicateLabel { name: name.clone() });
            }
        }
    }

    Ok(map)
}
