//! IdFilter value object - include or exclude artifacts by id

use crate::error::{CpiError, CpiResult};

/// Artifact id selection; include and exclude are mutually exclusive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdFilter {
    included: Vec<String>,
    excluded: Vec<String>,
}

impl IdFilter {
    /// Build a filter, rejecting one that both includes and excludes
    pub fn new(included: Vec<String>, excluded: Vec<String>) -> CpiResult<Self> {
        if !included.is_empty() && !excluded.is_empty() {
            return Err(CpiError::ConflictingFilters);
        }
        Ok(Self { included, excluded })
    }

    /// Keep only these ids, in this order
    pub fn include<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            included: ids.into_iter().map(Into::into).collect(),
            excluded: Vec::new(),
        }
    }

    /// Drop these ids
    pub fn exclude<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            included: Vec::new(),
            excluded: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse comma-separated id lists as supplied on a command line
    pub fn from_csv(included: &str, excluded: &str) -> CpiResult<Self> {
        Self::new(split_csv(included), split_csv(excluded))
    }

    pub fn included(&self) -> &[String] {
        &self.included
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
