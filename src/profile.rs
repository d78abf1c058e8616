use serde::{Deserialize, Serialize};

use crate::ProfileId;

/// A directory record representing a person.
///
/// `photo` holds either an absolute URL or an embedded
/// `data:image/...;base64,` string produced by [`crate::image::ingest_bytes`];
/// the record itself does not distinguish the two.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub photo: String,
    pub description: String,
    pub address: String,
    pub contact: String,
    pub interests: Vec<String>,
}

/// Input for creating a new profile. The store assigns the id.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileDraft {
    pub name: String,
    pub photo: String,
    pub description: String,
    pub address: String,
    pub contact: String,
    pub interests: Vec<String>,
}

impl ProfileDraft {
    pub fn into_profile(self, id: ProfileId) -> Profile {
        Profile {
            id,
            name: self.name,
            photo: self.photo,
            description: self.description,
            address: self.address,
            contact: self.contact,
            interests: self.interests,
        }
    }
}

/// A partial update over a [`Profile`]. Fields left as `None` are preserved.
///
/// The id of a stored profile is never patched.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub interests: Option<Vec<String>>,
}

impl ProfilePatch {
    /// Overlay the patch onto `profile`, field by field.
    pub fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(photo) = self.photo {
            profile.photo = photo;
        }
        if let Some(description) = self.description {
            profile.description = description;
        }
        if let Some(address) = self.address {
            profile.address = address;
        }
        if let Some(contact) = self.contact {
            profile.contact = contact;
        }
        if let Some(interests) = self.interests {
            profile.interests = interests;
        }
    }
}

/// Split a comma-separated interests string into trimmed non-empty tokens.
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}
