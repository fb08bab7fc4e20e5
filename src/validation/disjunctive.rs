//! Boolean-OR composition of validators
//!
//! Members are kept in insertion order and addressed by index. Only the
//! active subset takes part in validation; a fresh group has no active
//! members and rejects everything.

use std::collections::BTreeSet;
use std::fmt;

use super::Validator;

pub struct DisjunctiveValidator<C: ?Sized, R: ?Sized> {
    group_name: String,
    validators: Vec<Box<dyn Validator<C, R>>>,
    active: BTreeSet<usize>,
}

impl<C: ?Sized, R: ?Sized> DisjunctiveValidator<C, R> {
    pub fn new(group_name: impl Into<String>, validators: Vec<Box<dyn Validator<C, R>>>) -> Self {
        Self {
            group_name: group_name.into(),
            validators,
            active: BTreeSet::new(),
        }
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.contains(&index)
    }

    /// Switch a member on or off
    ///
    /// Returns false (and changes nothing) if `index` names no member.
    pub fn toggle(&mut self, index: usize, active: bool) -> bool {
        if index >= self.validators.len() {
            log::warn!("Group '{}' has no validator at index {}", self.group_name, index);
            return false;
        }

        if active {
            self.active.insert(index);
        } else {
            self.active.remove(&index);
        }
        true
    }

    /// All members in insertion order, active or not
    pub fn validators(&self) -> impl Iterator<Item = &dyn Validator<C, R>> {
        self.validators.iter().map(|v| v.as_ref())
    }
}

impl<C: ?Sized, R: ?Sized> Validator<C, R> for DisjunctiveValidator<C, R> {
    fn validate(&self, candidate: &C, reference: &R) -> bool {
        self.active.iter().any(|&index| {
            let accepted = self.validators[index].validate(candidate, reference);
            log::trace!("Group '{}' member {} -> {}", self.group_name, index, accepted);
            accepted
        })
    }
}

impl<C: ?Sized, R: ?Sized> fmt::Display for DisjunctiveValidator<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.group_name)
    }
}

impl<C: ?Sized, R: ?Sized> fmt::Debug for DisjunctiveValidator<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisjunctiveValidator")
            .field("group_name", &self.group_name)
            .field("validators", &self.validators.len())
            .field("active", &self.active)
            .finish()
    }
}
