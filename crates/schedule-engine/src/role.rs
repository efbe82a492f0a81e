//! Dashboard roles.
//!
//! The API reports roles as strings such as `"ROLE_ADMIN"`, sometimes wrapped
//! in brackets (`"[ROLE_ADMIN]"`) or joined into one bracketed list. All of
//! that is normalized here so the rest of the code only sees [`Role`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Dean,
    Teacher,
}

impl Role {
    /// The API's spelling, e.g. `ROLE_ADMIN`.
    pub fn authority(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Dean => "ROLE_DEAN",
            Role::Teacher => "ROLE_TEACHER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.authority())
    }
}

impl FromStr for Role {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let bare = strip_brackets(s).to_ascii_uppercase();
        let name = bare.strip_prefix("ROLE_").unwrap_or(bare.as_str());
        match name {
            "ADMIN" => Ok(Role::Admin),
            "DEAN" => Ok(Role::Dean),
            "TEACHER" => Ok(Role::Teacher),
            _ => Err(ScheduleError::InvalidRole(s.to_string())),
        }
    }
}

/// Parse role strings as the API sends them. Each item may itself be a
/// bracketed, comma-separated list. Duplicates are dropped; order of first
/// appearance is kept.
pub fn parse_roles<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Role>> {
    let mut roles = Vec::new();
    for item in raw {
        for part in strip_brackets(item.as_ref()).split(',') {
            if part.trim().is_empty() {
                continue;
            }
            let role: Role = part.parse()?;
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
    }
    Ok(roles)
}

fn strip_brackets(s: &str) -> &str {
    s.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim()
}
