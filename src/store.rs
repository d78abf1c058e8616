use crate::errors::Result;
use crate::location::Location;
use crate::profile::{Profile, ProfileDraft, ProfilePatch};
use crate::storage::KeyValueStorage;
use crate::{ProfileId, PROFILES_KEY, SELECTED_LOCATION_KEY, SELECTED_PROFILE_KEY};

/// The authoritative owner of the profile list and the two selection slots.
///
/// The store keeps the injected backend synchronized with its in-memory
/// state: every mutator rewrites the affected key in full before the
/// in-memory state is committed, so a failed write never leaves the two
/// diverging. Construct one store per session via [`ProfileStore::load`]
/// and pass it by reference to consumers.
pub struct ProfileStore<S: KeyValueStorage> {
    storage: S,
    profiles: Vec<Profile>,
    selected_profile: Option<Profile>,
    selected_location: Option<Location>,
    load_error: Option<String>,
}

impl<S: KeyValueStorage> ProfileStore<S> {
    /// Run the startup protocol against `storage` and return the loaded store.
    ///
    /// A persisted list is adopted verbatim; an absent one is replaced by
    /// the seed list, which is persisted immediately. Unparseable persisted
    /// data leaves the list empty and records a load error that is terminal
    /// for the session. Selection slots are restored independently and
    /// best-effort.
    pub fn load(storage: S) -> Self {
        let mut store = Self {
            storage,
            profiles: Vec::new(),
            selected_profile: None,
            selected_location: None,
            load_error: None,
        };

        if let Err(e) = store.restore_profiles() {
            log::warn!("profile list restore failed: {}", e);
            store.profiles.clear();
            store.load_error = Some(e.to_string());
        }
        store.restore_selection();

        store
    }

    fn restore_profiles(&mut self) -> Result<()> {
        match self.storage.get(PROFILES_KEY)? {
            Some(raw) => {
                self.profiles = serde_json::from_str(&raw)?;
                log::info!("{} profiles restored", self.profiles.len());
            }
            None => {
                let seed = seed_profiles();
                let raw = serde_json::to_string(&seed)?;
                self.storage.set(PROFILES_KEY, &raw)?;
                self.profiles = seed;
                log::info!("no persisted profiles, seeded {}", self.profiles.len());
            }
        }
        Ok(())
    }

    /// Selection slots are display conveniences; anything unreadable is
    /// simply left unset and never blocks the profile list.
    fn restore_selection(&mut self) {
        if let Ok(Some(raw)) = self.storage.get(SELECTED_PROFILE_KEY) {
            match serde_json::from_str(&raw) {
                Ok(profile) => self.selected_profile = Some(profile),
                Err(_) => log::warn!("ignoring unreadable selected profile"),
            }
        }
        if let Ok(Some(raw)) = self.storage.get(SELECTED_LOCATION_KEY) {
            match serde_json::from_str(&raw) {
                Ok(location) => self.selected_location = Some(location),
                Err(_) => log::warn!("ignoring unreadable selected location"),
            }
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn selected_profile(&self) -> Option<&Profile> {
        self.selected_profile.as_ref()
    }

    pub fn selected_location(&self) -> Option<&Location> {
        self.selected_location.as_ref()
    }

    /// The terminal load-failure state, if startup hit unparseable data.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Append a new profile. The id is the current list length plus one;
    /// after deletions this can collide with an id already in the list,
    /// which matches the numbering scheme the directory has always used.
    pub fn add_profile(&mut self, draft: ProfileDraft) -> Result<ProfileId> {
        let id = self.profiles.len() as ProfileId + 1;
        let mut next = self.profiles.clone();
        next.push(draft.into_profile(id));
        self.persist_profiles(&next)?;
        self.profiles = next;
        Ok(id)
    }

    /// Overlay `patch` onto the profile with the given id. An unknown id is
    /// a silent no-op; the list is re-persisted either way.
    pub fn update_profile(&mut self, id: ProfileId, patch: ProfilePatch) -> Result<()> {
        let mut next = self.profiles.clone();
        if let Some(profile) = next.iter_mut().find(|p| p.id == id) {
            patch.apply(profile);
        }
        self.persist_profiles(&next)?;
        self.profiles = next;
        Ok(())
    }

    /// Remove the profile with the given id. An unknown id is a silent no-op.
    pub fn delete_profile(&mut self, id: ProfileId) -> Result<()> {
        let mut next = self.profiles.clone();
        next.retain(|p| p.id != id);
        self.persist_profiles(&next)?;
        self.profiles = next;
        Ok(())
    }

    /// Replace the selected-profile slot and mirror it in the backend.
    /// Clearing the slot removes the persisted entry.
    pub fn set_selected_profile(&mut self, profile: Option<Profile>) -> Result<()> {
        match &profile {
            Some(p) => {
                let raw = serde_json::to_string(p)?;
                self.storage.set(SELECTED_PROFILE_KEY, &raw)?;
            }
            None => self.storage.remove(SELECTED_PROFILE_KEY)?,
        }
        self.selected_profile = profile;
        Ok(())
    }

    /// Same contract as [`Self::set_selected_profile`], for the location slot.
    pub fn set_selected_location(&mut self, location: Option<Location>) -> Result<()> {
        match &location {
            Some(l) => {
                let raw = serde_json::to_string(l)?;
                self.storage.set(SELECTED_LOCATION_KEY, &raw)?;
            }
            None => self.storage.remove(SELECTED_LOCATION_KEY)?,
        }
        self.selected_location = location;
        Ok(())
    }

    /// Select a profile and, when its address names a known city, the
    /// matching location along with it.
    pub fn select_profile(&mut self, profile: Profile) -> Result<()> {
        let city = crate::location::find_city(&profile.address).cloned();
        self.set_selected_profile(Some(profile))?;
        if let Some(city) = city {
            self.set_selected_location(Some(city))?;
        }
        Ok(())
    }

    fn persist_profiles(&mut self, profiles: &[Profile]) -> Result<()> {
        let raw = serde_json::to_string(profiles)?;
        self.storage.set(PROFILES_KEY, &raw)
    }
}

/// The default directory content, used only when the backend holds nothing.
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: 1,
            name: "Nityom Tikhe".to_string(),
            photo: "https://avatars.githubusercontent.com/u/112824495?v=4".to_string(),
            description: "Software Engineer with 3 years of experience".to_string(),
            address: "Pune".to_string(),
            contact: "nityomtikherr@gmail.com".to_string(),
            interests: vec![
                "Coding".to_string(),
                "Reading".to_string(),
                "Traveling".to_string(),
            ],
        },
        Profile {
            id: 2,
            name: "Atharva Joshi".to_string(),
            photo: "https://avatars.githubusercontent.com/u/114106490?v=4".to_string(),
            description: "UX Designer passionate about creating beautiful interfaces"
                .to_string(),
            address: "Delhi".to_string(),
            contact: "atharva@gmail.com".to_string(),
            interests: vec![
                "Design".to_string(),
                "Photography".to_string(),
                "Yoga".to_string(),
            ],
        },
    ]
}
