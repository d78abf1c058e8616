use crate::profile::Profile;

/// Narrow `profiles` down to the ones matching both criteria.
///
/// The search term matches case-insensitively as a substring of the name
/// or the description; the location filter matches case-insensitively but
/// exactly against the address. An empty criterion matches everything.
/// The input order is preserved and the input itself is never mutated.
pub fn filter_profiles(
    profiles: &[Profile],
    search_term: &str,
    location_filter: &str,
) -> Vec<Profile> {
    let term = search_term.to_lowercase();
    let location = location_filter.to_lowercase();

    profiles
        .iter()
        .filter(|profile| {
            term.is_empty()
                || profile.name.to_lowercase().contains(&term)
                || profile.description.to_lowercase().contains(&term)
        })
        .filter(|profile| {
            location.is_empty() || profile.address.to_lowercase() == location
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn profile(id: u32, name: &str, description: &str, address: &str) -> Profile {
        Profile {
            id,
            name: name.to_string(),
            photo: String::new(),
            description: description.to_string(),
            address: address.to_string(),
            contact: String::new(),
            interests: Vec::new(),
        }
    }

    fn sample() -> Vec<Profile> {
        vec![
            profile(1, "Rahul Sharma", "Backend engineer", "Mumbai"),
            profile(2, "Priya Patel", "UX Designer", "Delhi"),
            profile(3, "Asha Verma", "Graphic design and branding", "Delhi"),
            profile(4, "Vikram Rao", "Data analyst", "Pune"),
        ]
    }

    #[rstest]
    #[case("", "", vec![1, 2, 3, 4])]
    #[case("design", "", vec![2, 3])]
    #[case("DESIGN", "", vec![2, 3])]
    #[case("", "delhi", vec![2, 3])]
    #[case("design", "Delhi", vec![2, 3])]
    #[case("rahul", "Delhi", vec![])]
    #[case("analyst", "Pune", vec![4])]
    #[case("nobody", "", vec![])]
    fn filtering_as_expected(
        #[case] term: &str,
        #[case] location: &str,
        #[case] expected_ids: Vec<u32>,
    ) {
        let result = filter_profiles(&sample(), term, location);
        let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected_ids);
    }

    #[test]
    fn term_matches_name_or_description() {
        let result = filter_profiles(&sample(), "a", "");
        // every sample profile has an `a` somewhere in name or description
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn input_is_not_mutated_and_order_is_preserved() {
        let input = sample();
        let before = input.clone();
        let result = filter_profiles(&input, "", "delhi");
        assert_eq!(input, before);
        assert!(result.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn same_inputs_give_same_output() {
        let input = sample();
        assert_eq!(
            filter_profiles(&input, "design", "Delhi"),
            filter_profiles(&input, "design", "Delhi")
        );
    }
}
