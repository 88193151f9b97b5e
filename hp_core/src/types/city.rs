pub const DEFAULT_CITY: &str = "Delhi";

/// Cities the prediction model was trained on, alphabetically sorted.
const CITIES: [&str; 38] = [
    "Agra",
    "Ahmedabad",
    "Amritsar",
    "Bangalore",
    "Bhopal",
    "Bhubaneswar",
    "Chandigarh",
    "Chennai",
    "Coimbatore",
    "Dehradun",
    "Delhi",
    "Faridabad",
    "Ghaziabad",
    "Gurgaon",
    "Guwahati",
    "Hyderabad",
    "Indore",
    "Jaipur",
    "Jalandhar",
    "Jammu",
    "Kanpur",
    "Kochi",
    "Kolkata",
    "Lucknow",
    "Ludhiana",
    "Mumbai",
    "Mysore",
    "Nagpur",
    "Nashik",
    "Noida",
    "Patna",
    "Pune",
    "Raipur",
    "Rajkot",
    "Surat",
    "Thiruvananthapuram",
    "Vadodara",
    "Visakhapatnam",
];

pub fn all() -> &'static [&'static str] {
    &CITIES
}

pub fn is_known(name: &str) -> bool {
    CITIES.binary_search(&name).is_ok()
}

/// Position of the default city, used to preselect it in prompts.
pub fn default_index() -> usize {
    CITIES.binary_search(&DEFAULT_CITY).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_sorted_and_unique() {
        assert!(all().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_default_is_known() {
        assert!(is_known(DEFAULT_CITY));
        assert_eq!(all()[default_index()], DEFAULT_CITY);
    }

    #[test]
    fn test_every_catalogue_city_is_known() {
        for name in all() {
            assert!(is_known(name), "{name} should be known");
        }
        assert!(is_known("Gurgaon"));
        assert!(is_known("Guwahati"));
    }

    #[test]
    fn test_unknown_city() {
        assert!(!is_known("Atlantis"));
        assert!(!is_known("delhi"));
    }
}
