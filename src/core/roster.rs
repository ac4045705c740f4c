use std::collections::HashSet;

use super::{
    catalog::{
        Location,
        Technique,
    },
    models::{
        Data,
        GroupDatum,
        MemberDatum,
        TimeData,
        TimeInterval,
    },
    KaramoveError,
};

/// Position of a profile in [`Roster::profiles`], checked at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(usize);

impl ProfileId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub discord_name: Option<String>,
    pub profile: ProfileId,
    pub level: u32,
    pub preferred_techniques: Vec<Technique>,
    pub known_techniques: Vec<Technique>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub location: Location,
    pub link: String,
    pub time_interval: Option<TimeInterval>,
    pub members: Vec<Member>,
}

/// The whole payload after validation. Built once per load and shared
/// read-only with every view.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub groups: Vec<Group>,
    pub profiles: Vec<String>,
    pub time: Option<TimeData>,
    pub with_music: bool,
    pub year: u32,
}

impl Roster {
    pub fn from_data(data: Data) -> Result<Self, KaramoveError> {
        let profile_count = data.profiles.len();
        let mut seen = HashSet::new();

        let groups = data
            .groups
            .into_iter()
            .map(|group| {
                if !seen.insert(group.name.clone()) {
                    return Err(KaramoveError::DuplicateGroup(group.name));
                }
                Group::from_datum(group, profile_count)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            groups,
            profiles: data.profiles,
            time: data.time,
            with_music: data.with_music,
            year: data.year,
        })
    }

    pub fn profile_name(&self, profile: ProfileId) -> &str {
        self.profiles.get(profile.index()).map(String::as_str).unwrap_or_default()
    }

    pub fn profile_ids(&self) -> impl Iterator<Item = ProfileId> {
        (0..self.profiles.len()).map(ProfileId)
    }

    pub fn title(&self) -> String {
        format!("Groupes Karamove {}", self.year)
    }
}

impl Group {
    fn from_datum(group: GroupDatum, profile_count: usize) -> Result<Self, KaramoveError> {
        let location = Location::from_index(group.location).ok_or_else(|| {
            KaramoveError::UnknownLocation { group: group.name.clone(), index: group.location }
        })?;

        let members = group
            .members
            .into_iter()
            .map(|member| Member::from_datum(member, profile_count))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: group.name,
            location,
            link: group.link,
            time_interval: group.time_interval,
            members,
        })
    }
}

impl Member {
    fn from_datum(member: MemberDatum, profile_count: usize) -> Result<Self, KaramoveError> {
        if member.profile >= profile_count {
            return Err(KaramoveError::UnknownProfile {
                member: member.name,
                index: member.profile,
                count: profile_count,
            });
        }

        let preferred_techniques = techniques(&member.name, &member.preferred_techniques)?;
        let known_techniques = techniques(&member.name, &member.known_techniques)?;

        let discord_name = match member.discord_name.trim() {
            "" => None,
            name => Some(name.to_string()),
        };

        Ok(Self {
            id: member.id,
            name: member.name,
            discord_name,
            profile: ProfileId(member.profile),
            level: member.level,
            preferred_techniques,
            known_techniques,
        })
    }
}

fn techniques(member: &str, indices: &[usize]) -> Result<Vec<Technique>, KaramoveError> {
    indices
        .iter()
        .map(|&index| {
            Technique::from_index(index).ok_or_else(|| KaramoveError::UnknownTechnique {
                member: member.to_string(),
                index,
            })
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn member(id: u64, name: &str, profile: usize) -> MemberDatum {
        MemberDatum {
            id,
            name: name.to_string(),
            discord_name: format!("{}#0001", name.to_lowercase()),
            profile,
            level: 1,
            preferred_techniques: vec![5, 0],
            known_techniques: vec![2],
        }
    }

    pub fn group(name: &str, position: Option<usize>, members: Vec<MemberDatum>) -> GroupDatum {
        GroupDatum {
            name: name.to_string(),
            location: 0,
            link: format!("https://drive.example/{}", name.to_lowercase()),
            time_interval: position.map(|position| TimeInterval {
                position,
                start: 20.0 + 15.0 * (position as f64 - 1.0),
                end: 20.0 + 15.0 * position as f64,
            }),
            members,
        }
    }

    pub fn sample_data() -> Data {
        Data {
            groups: vec![
                group("Castors", Some(1), vec![member(0, "Ada", 0), member(1, "Grace", 1)]),
                group("Hiboux", Some(2), vec![member(2, "Linus", 2)]),
            ],
            profiles: vec!["ENSAD".to_string(), "Gobelins".to_string(), "Autodidacte".to_string()],
            time: Some(TimeData {
                intro_duration: 20.0,
                group_interval_duration: 15.0,
                music_duration: 75.0,
            }),
            with_music: true,
            year: 2024,
        }
    }

    pub fn sample_roster() -> Roster {
        Roster::from_data(sample_data()).unwrap()
    }

    #[test]
    fn test_valid_payload() {
        let roster = sample_roster();
        assert_eq!(roster.groups.len(), 2);
        assert_eq!(roster.title(), "Groupes Karamove 2024");

        let ada = &roster.groups[0].members[0];
        assert_eq!(roster.profile_name(ada.profile), "ENSAD");
        assert_eq!(ada.preferred_techniques, vec![Technique::Free, Technique::DigitalTwoDimensional]);
        assert_eq!(ada.known_techniques, vec![Technique::ThreeDimensional]);
        assert_eq!(ada.discord_name.as_deref(), Some("ada#0001"));
        assert_eq!(roster.groups[0].location, Location::OnSite);
    }

    #[test]
    fn test_empty_discord_name_is_none() {
        let mut data = sample_data();
        data.groups[0].members[0].discord_name = "  ".to_string();
        let roster = Roster::from_data(data).unwrap();
        assert!(roster.groups[0].members[0].discord_name.is_none());
    }

    #[test]
    fn test_profile_out_of_range() {
        let mut data = sample_data();
        data.groups[1].members[0].profile = 3;
        match Roster::from_data(data) {
            Err(KaramoveError::UnknownProfile { member, index, count }) => {
                assert_eq!(member, "Linus");
                assert_eq!(index, 3);
                assert_eq!(count, 3);
            }
            other => panic!("Expected UnknownProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_technique_out_of_range() {
        let mut data = sample_data();
        data.groups[0].members[1].known_techniques = vec![1, 6];
        match Roster::from_data(data) {
            Err(KaramoveError::UnknownTechnique { member, index }) => {
                assert_eq!(member, "Grace");
                assert_eq!(index, 6);
            }
            other => panic!("Expected UnknownTechnique, got {:?}", other),
        }
    }

    #[test]
    fn test_location_out_of_range() {
        let mut data = sample_data();
        data.groups[1].location = 2;
        match Roster::from_data(data) {
            Err(KaramoveError::UnknownLocation { group, index }) => {
                assert_eq!(group, "Hiboux");
                assert_eq!(index, 2);
            }
            other => panic!("Expected UnknownLocation, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_group_name() {
        let mut data = sample_data();
        data.groups[1].name = "Castors".to_string();
        assert!(matches!(
            Roster::from_data(data),
            Err(KaramoveError::DuplicateGroup(name)) if name == "Castors"
        ));
    }

    #[test]
    fn test_profile_ids_cover_catalog() {
        let roster = sample_roster();
        let names: Vec<_> = roster.profile_ids().map(|id| roster.profile_name(id)).collect();
        assert_eq!(names, vec!["ENSAD", "Gobelins", "Autodidacte"]);
    }
}
