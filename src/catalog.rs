use std::collections::HashSet;

/// A priced offering from one of the two fixed catalogs. Catalogs are
/// defined at load time and never mutated; entries are keyed by display
/// name.
#[derive(Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: u32,
}

pub const FULL_BUNDLE: &str = "Full Bundle";

pub const SERVICES: [CatalogEntry; 7] = [
    CatalogEntry { name: "Exterior Wash", description: "Complete airframe rinse + dry", price_cents: 15_000 },
    CatalogEntry { name: "Wax & Paint Protection", description: "Hand-applied aircraft-safe wax", price_cents: 20_000 },
    CatalogEntry { name: "Interior Detailing", description: "Seats, carpets, and cockpit touch-up", price_cents: 18_000 },
    CatalogEntry { name: "Leather Treatment", description: "Clean + condition leather surfaces", price_cents: 8_000 },
    CatalogEntry { name: "Carpet Shampoo", description: "Steam/deep clean high-wear areas", price_cents: 6_000 },
    CatalogEntry { name: "Disinfection", description: "Fogging + contact surface cleaning", price_cents: 5_000 },
    CatalogEntry { name: FULL_BUNDLE, description: "All-in-one interior + exterior package", price_cents: 45_000 },
];

pub const ADDONS: [CatalogEntry; 3] = [
    CatalogEntry { name: "Bug Removal (Heavy Use)", description: "", price_cents: 4_000 },
    CatalogEntry { name: "Tire Shine", description: "", price_cents: 2_000 },
    CatalogEntry { name: "Belly Degrease", description: "", price_cents: 3_000 },
];

fn is_addon(name: &str) -> bool {
    ADDONS.iter().any(|e| e.name == name)
}

/// Format whole-dollar catalog prices for display.
pub fn format_price(cents: u32) -> String {
    format!("${}", cents / 100)
}

/// The visitor's current pick of services and add-ons on the pricing page.
///
/// The bundle entry is priced as an all-inclusive alternative to buying
/// services one by one, so it can never be selected together with another
/// service. Add-ons are genuinely additive and stay out of that rule.
#[derive(Clone, PartialEq, Default)]
pub struct Selection {
    selected: HashSet<&'static str>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn toggle(&mut self, name: &str) {
        if name == FULL_BUNDLE {
            if self.selected.remove(FULL_BUNDLE) {
                return;
            }
            // Selecting the bundle clears every individual service but
            // keeps add-ons as they were.
            self.selected.retain(|n| is_addon(n));
            self.selected.insert(FULL_BUNDLE);
        } else if let Some(entry) = SERVICES.iter().find(|e| e.name == name) {
            if !self.selected.remove(entry.name) {
                self.selected.insert(entry.name);
            }
            // An individual service is incompatible with the all-inclusive
            // bundle.
            self.selected.remove(FULL_BUNDLE);
        } else if let Some(entry) = ADDONS.iter().find(|e| e.name == name) {
            if !self.selected.remove(entry.name) {
                self.selected.insert(entry.name);
            }
        }
        // Names outside both catalogs are a caller contract violation;
        // nothing to do for them.
    }

    /// Sum of selected prices across both catalogs.
    pub fn total_cents(&self) -> u32 {
        SERVICES
            .iter()
            .chain(ADDONS.iter())
            .filter(|e| self.selected.contains(e.name))
            .map(|e| e.price_cents)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggled(names: &[&str]) -> Selection {
        let mut sel = Selection::new();
        for name in names {
            sel.toggle(name);
        }
        sel
    }

    #[test]
    fn empty_selection_totals_zero() {
        assert_eq!(Selection::new().total_cents(), 0);
    }

    #[test]
    fn individual_services_sum() {
        let sel = toggled(&["Exterior Wash", "Wax & Paint Protection"]);
        assert_eq!(sel.total_cents(), 35_000);
    }

    #[test]
    fn selecting_bundle_clears_other_services() {
        let sel = toggled(&["Exterior Wash", "Wax & Paint Protection", FULL_BUNDLE]);
        assert!(sel.is_selected(FULL_BUNDLE));
        assert!(!sel.is_selected("Exterior Wash"));
        assert!(!sel.is_selected("Wax & Paint Protection"));
        assert_eq!(sel.total_cents(), 45_000);
    }

    #[test]
    fn deselecting_bundle_does_not_restore_cleared_services() {
        let sel = toggled(&["Exterior Wash", "Wax & Paint Protection", FULL_BUNDLE, FULL_BUNDLE]);
        assert_eq!(sel.total_cents(), 0);
    }

    #[test]
    fn selecting_a_service_evicts_the_bundle() {
        let sel = toggled(&[FULL_BUNDLE, "Interior Detailing"]);
        assert!(!sel.is_selected(FULL_BUNDLE));
        assert!(sel.is_selected("Interior Detailing"));
        assert_eq!(sel.total_cents(), 18_000);
    }

    #[test]
    fn bundle_and_services_never_coexist() {
        // Exhaustive-ish toggle sequences over service names only.
        let sequences: [&[&str]; 4] = [
            &[FULL_BUNDLE, "Exterior Wash", FULL_BUNDLE],
            &["Disinfection", FULL_BUNDLE, "Carpet Shampoo", "Leather Treatment"],
            &["Exterior Wash", "Exterior Wash", FULL_BUNDLE],
            &[FULL_BUNDLE, FULL_BUNDLE, "Wax & Paint Protection", FULL_BUNDLE],
        ];
        for seq in sequences {
            let sel = toggled(seq);
            let bundle = sel.is_selected(FULL_BUNDLE);
            let any_other = SERVICES
                .iter()
                .filter(|e| e.name != FULL_BUNDLE)
                .any(|e| sel.is_selected(e.name));
            assert!(!(bundle && any_other), "sequence {:?} broke exclusion", seq);
        }
    }

    #[test]
    fn addons_are_orthogonal_to_the_bundle() {
        let mut sel = toggled(&["Tire Shine", "Belly Degrease"]);
        sel.toggle(FULL_BUNDLE);
        assert!(sel.is_selected("Tire Shine"));
        assert!(sel.is_selected("Belly Degrease"));
        assert_eq!(sel.total_cents(), 45_000 + 2_000 + 3_000);

        // And the other way round: toggling an add-on leaves the bundle alone.
        sel.toggle("Bug Removal (Heavy Use)");
        assert!(sel.is_selected(FULL_BUNDLE));
    }

    #[test]
    fn double_toggle_is_identity_on_total() {
        let mut sel = toggled(&["Interior Detailing", "Tire Shine"]);
        let before = sel.total_cents();
        sel.toggle("Carpet Shampoo");
        sel.toggle("Carpet Shampoo");
        assert_eq!(sel.total_cents(), before);
    }

    #[test]
    fn unknown_name_is_a_no_op() {
        let mut sel = toggled(&["Exterior Wash"]);
        sel.toggle("Hull Polish");
        assert_eq!(sel.total_cents(), 15_000);
    }
}
