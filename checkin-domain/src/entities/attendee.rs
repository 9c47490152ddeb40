// Attendee entity and the paged roster window

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::AttendeeId;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: AttendeeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default)]
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Attendee {
    pub fn is_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }

    /// Secondary line shown under the name: email, then document, then a dash.
    pub fn contact_line(&self) -> &str {
        non_blank(self.email.as_deref())
            .or_else(|| non_blank(self.document.as_deref()))
            .unwrap_or("—")
    }

    pub fn initial(&self) -> char {
        self.name
            .trim()
            .chars()
            .next()
            .and_then(|ch| ch.to_uppercase().next())
            .unwrap_or('?')
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendeePage {
    pub data: Vec<Attendee>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeQuery {
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl AttendeeQuery {
    pub fn first_page(search: impl Into<String>, limit: u32) -> Self {
        Self {
            search: search.into(),
            page: 1,
            limit,
        }
    }

    /// Query string pairs; an empty search term is left out entirely.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        let term = self.search.trim();
        if !term.is_empty() {
            params.push(("search", term.to_string()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.limit.to_string()));
        params
    }
}
