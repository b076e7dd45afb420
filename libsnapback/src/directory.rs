//! Sponsoring business directory
//!
//! A read-only lookup table. The rewards generator draws synthetic
//! transaction venues from it and the submit screen offers it as the
//! location picker. Order is presentation order; never mutated.

use rand::Rng;

/// Participating Old Ellicott City businesses, in display order.
pub const SPONSORING_BUSINESSES: &[&str] = &[
    "Bean Hollow Coffee",
    "Tiber River Tavern",
    "Main Street Books",
    "The Forget-Me-Not Factory",
    "Ellicott Mills Brewing",
    "Sweet Cascades Chocolatier",
    "Park Ridge Trading Co.",
    "Old Mill Bakery Cafe",
    "The Wine Bin",
    "Attic Antiques 'N Things",
];

/// Pick one business uniformly at random (with replacement across calls).
pub fn random_business() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..SPONSORING_BUSINESSES.len());
    SPONSORING_BUSINESSES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_is_not_empty() {
        assert!(!SPONSORING_BUSINESSES.is_empty());
    }

    #[test]
    fn test_directory_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for name in SPONSORING_BUSINESSES {
            assert!(seen.insert(name), "duplicate business: {}", name);
        }
    }

    #[test]
    fn test_random_business_is_from_directory() {
        for _ in 0..50 {
            let pick = random_business();
            assert!(SPONSORING_BUSINESSES.contains(&pick));
        }
    }
}
