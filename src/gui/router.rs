use crate::core::Roster;

/// Every view of the roster, addressed by the same paths as the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Constitution,
    Profiles,
    PreferredTechniques,
    KnownTechniques,
    DiscordNames,
    GoogleDriveLinks,
    TimeIntervals,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Constitution,
        Route::Profiles,
        Route::PreferredTechniques,
        Route::KnownTechniques,
        Route::DiscordNames,
        Route::GoogleDriveLinks,
        Route::TimeIntervals,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Constitution => "/",
            Route::Profiles => "/profiles",
            Route::PreferredTechniques => "/preferred-techniques",
            Route::KnownTechniques => "/known-techniques",
            Route::DiscordNames => "/discord-names",
            Route::GoogleDriveLinks => "/google-drive-links",
            Route::TimeIntervals => "/time-intervals",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Constitution => "Constitution",
            Route::Profiles => "Ecoles / Profils",
            Route::PreferredTechniques => "Techniques souhaitées",
            Route::KnownTechniques => "Techniques maîtrisées",
            Route::DiscordNames => "Noms sur Discord",
            Route::GoogleDriveLinks => "Liens Google Drive",
            Route::TimeIntervals => "Intervalles de temps",
        }
    }

    /// Links after this one are set apart in the menu.
    pub fn starts_section(self) -> bool {
        self == Route::GoogleDriveLinks
    }

    pub fn is_available(self, roster: &Roster) -> bool {
        match self {
            Route::TimeIntervals => roster.time.is_some(),
            _ => true,
        }
    }

    pub fn available(roster: &Roster) -> Vec<Route> {
        Self::ALL.into_iter().filter(|route| route.is_available(roster)).collect()
    }

    /// Resolves a path against the loaded roster. Unknown paths and paths to
    /// views the roster cannot back give `None`.
    pub fn from_path(path: &str, roster: &Roster) -> Option<Route> {
        let trimmed = path.trim().trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .filter(|route| route.is_available(roster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::roster::tests::sample_roster;

    #[test]
    fn test_paths_round_trip() {
        let roster = sample_roster();
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path(), &roster), Some(route));
        }
    }

    #[test]
    fn test_time_intervals_need_time_data() {
        let mut roster = sample_roster();
        assert!(Route::available(&roster).contains(&Route::TimeIntervals));

        roster.time = None;
        let routes = Route::available(&roster);
        assert_eq!(routes.len(), 6);
        assert!(!routes.contains(&Route::TimeIntervals));
        assert_eq!(Route::from_path("/time-intervals", &roster), None);
    }

    #[test]
    fn test_path_normalization() {
        let roster = sample_roster();
        assert_eq!(Route::from_path("", &roster), Some(Route::Constitution));
        assert_eq!(Route::from_path("/profiles/", &roster), Some(Route::Profiles));
        assert_eq!(Route::from_path("/nowhere", &roster), None);
    }

    #[test]
    fn test_menu_order() {
        let roster = sample_roster();
        let labels: Vec<_> = Route::available(&roster).iter().map(|route| route.label()).collect();
        assert_eq!(labels.first(), Some(&"Constitution"));
        assert_eq!(labels.last(), Some(&"Intervalles de temps"));
        assert!(Route::GoogleDriveLinks.starts_section());
    }
}
