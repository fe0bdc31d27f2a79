//! Immutable capture of the contact form at submit time

use serde::{Deserialize, Serialize};

/// Kind of job the customer is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectType {
    Tak,
    Bad,
    Kjokken,
    Tilbygg,
    Vedlikehald,
    Anna,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Tak,
        ProjectType::Bad,
        ProjectType::Kjokken,
        ProjectType::Tilbygg,
        ProjectType::Vedlikehald,
        ProjectType::Anna,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tak => "Tak",
            Self::Bad => "Bad",
            Self::Kjokken => "Kjøkken",
            Self::Tilbygg => "Tilbygg",
            Self::Vedlikehald => "Vedlikehald",
            Self::Anna => "Anna",
        }
    }

    /// Next select option; the empty option sits before the first entry
    pub fn next_choice(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::ALL[0]),
            Some(kind) => {
                let idx = Self::ALL.iter().position(|k| *k == kind).unwrap_or(0);
                Self::ALL.get(idx + 1).copied()
            }
        }
    }

    pub fn prev_choice(current: Option<Self>) -> Option<Self> {
        match current {
            None => Self::ALL.last().copied(),
            Some(kind) => {
                let idx = Self::ALL.iter().position(|k| *k == kind).unwrap_or(0);
                idx.checked_sub(1).map(|i| Self::ALL[i])
            }
        }
    }
}

/// Field values captured when the form is submitted
///
/// Text values are trimmed on construction. There are no setters; a new
/// snapshot is taken for every submit gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    name: String,
    email: String,
    phone: String,
    address: String,
    project_type: Option<ProjectType>,
    description: String,
    want_site_visit: bool,
}

impl FormSnapshot {
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
        project_type: Option<ProjectType>,
        description: &str,
        want_site_visit: bool,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            address: address.trim().to_string(),
            project_type,
            description: description.trim().to_string(),
            want_site_visit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn project_type(&self) -> Option<ProjectType> {
        self.project_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn want_site_visit(&self) -> bool {
        self.want_site_visit
    }
}
