#[cfg(test)]
mod tests {
    use dirlib::profile::{parse_interests, ProfileDraft};
    use dirlib::{find_city, FileStorage, ProfileStore};
    use tempdir::TempDir;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn storage(dir: &TempDir) -> FileStorage {
        FileStorage::new("Directory".to_string(), dir.path())
    }

    #[test]
    fn test_store_survives_restart() {
        init_logging();
        let temp_dir =
            TempDir::new("dirlib_test").expect("Failed to create temporary directory");

        let first_session;
        {
            let mut store = ProfileStore::load(storage(&temp_dir));
            assert!(store.load_error().is_none());
            assert_eq!(store.profiles().len(), 2);

            let id = store
                .add_profile(ProfileDraft {
                    name: "Asha".to_string(),
                    photo: String::new(),
                    description: "Illustrator".to_string(),
                    address: "Pune".to_string(),
                    contact: "asha@example.com".to_string(),
                    interests: parse_interests("Art, Music"),
                })
                .expect("Failed to add profile");
            assert_eq!(id, 3);

            let selected = store.profiles()[2].clone();
            store
                .select_profile(selected)
                .expect("Failed to select profile");

            first_session = store.profiles().to_vec();
        }

        // Simulated reload: a fresh store over the same directory
        let store = ProfileStore::load(storage(&temp_dir));
        assert!(store.load_error().is_none());
        assert_eq!(store.profiles(), first_session.as_slice());
        assert_eq!(
            store.selected_profile().map(|p| p.name.as_str()),
            Some("Asha")
        );
        assert_eq!(store.selected_location(), Some(find_city("Pune").unwrap()));
    }

    #[test]
    fn test_id_collision_survives_restart() {
        init_logging();
        let temp_dir =
            TempDir::new("dirlib_test").expect("Failed to create temporary directory");

        {
            let mut store = ProfileStore::load(storage(&temp_dir));
            store.delete_profile(1).expect("Failed to delete profile");
            let id = store
                .add_profile(ProfileDraft {
                    name: "Asha".to_string(),
                    address: "Pune".to_string(),
                    ..Default::default()
                })
                .expect("Failed to add profile");
            assert_eq!(id, 2);
        }

        let store = ProfileStore::load(storage(&temp_dir));
        assert_eq!(store.profiles().len(), 2);
        assert!(store.profiles().iter().all(|p| p.id == 2));
    }

    #[test]
    fn test_cleared_selection_stays_cleared() {
        init_logging();
        let temp_dir =
            TempDir::new("dirlib_test").expect("Failed to create temporary directory");

        {
            let mut store = ProfileStore::load(storage(&temp_dir));
            let profile = store.profiles()[0].clone();
            store.select_profile(profile).unwrap();
            store.set_selected_profile(None).unwrap();
        }

        let store = ProfileStore::load(storage(&temp_dir));
        assert!(store.selected_profile().is_none());
        // the location slot is independent and was never cleared
        assert!(store.selected_location().is_some());
    }
}
