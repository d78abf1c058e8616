#[macro_use]
extern crate lazy_static;

pub mod errors;
pub mod filter;
pub mod image;
pub mod location;
pub mod profile;
pub mod storage;
pub mod store;

pub use errors::{DirlibError, Result};
pub use filter::filter_profiles;
pub use location::{find_city, Location, CITIES};
pub use profile::{Profile, ProfileDraft, ProfilePatch};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::ProfileStore;

pub type ProfileId = u32;

// Keys under which the store mirrors its state in the backend
pub const PROFILES_KEY: &str = "profiles";
pub const SELECTED_PROFILE_KEY: &str = "selectedProfile";
pub const SELECTED_LOCATION_KEY: &str = "selectedLocation";
