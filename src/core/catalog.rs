/// Animation techniques a member can prefer or claim to know, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Technique {
    DigitalTwoDimensional,
    TraditionalTwoDimensional,
    ThreeDimensional,
    Rostrum,
    StopMotion,
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechniqueLabel {
    Long,
    Short,
}

impl Technique {
    pub const ALL: [Technique; 6] = [
        Technique::DigitalTwoDimensional,
        Technique::TraditionalTwoDimensional,
        Technique::ThreeDimensional,
        Technique::Rostrum,
        Technique::StopMotion,
        Technique::Free,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn long(self) -> &'static str {
        match self {
            Technique::DigitalTwoDimensional => "Animation 2D digitale (TVP, After...)",
            Technique::TraditionalTwoDimensional => {
                "Animation 2D traditionnelle (papier, table lumineuse...)"
            }
            Technique::ThreeDimensional => "Animation 3D (Maya, Blender...)",
            Technique::Rostrum => {
                "Animation banc-titre (sable, papier découpé, peinture animée...)"
            }
            Technique::StopMotion => "Stop-motion (marionnette, décor)",
            Technique::Free => "Libre en fonction du mood de mon groupe",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Technique::DigitalTwoDimensional => "2D digi",
            Technique::TraditionalTwoDimensional => "2D tradi",
            Technique::ThreeDimensional => "3D",
            Technique::Rostrum => "Banc-titre",
            Technique::StopMotion => "Stop-mo",
            Technique::Free => "Libre",
        }
    }

    /// "Free choice" is a wish, not a skill, so it never shows up as known.
    pub fn knowable(self) -> bool {
        !matches!(self, Technique::Free)
    }

    pub fn label(self, label: TechniqueLabel) -> &'static str {
        match label {
            TechniqueLabel::Long => self.long(),
            TechniqueLabel::Short => self.short(),
        }
    }

    pub fn knowable_techniques() -> impl Iterator<Item = Technique> {
        Self::ALL.into_iter().filter(|technique| technique.knowable())
    }
}

/// Returns the techniques in catalog order, whatever order the payload used.
pub fn sorted_techniques(techniques: &[Technique]) -> Vec<Technique> {
    let mut sorted = techniques.to_vec();
    sorted.sort();
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    OnSite,
    Remote,
}

impl Location {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Location::OnSite),
            1 => Some(Location::Remote),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Location::OnSite => "sur place",
            Location::Remote => "en ligne",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technique_indices() {
        for (index, technique) in Technique::ALL.iter().enumerate() {
            assert_eq!(technique.index(), index);
            assert_eq!(Technique::from_index(index), Some(*technique));
        }
        assert_eq!(Technique::from_index(6), None);
    }

    #[test]
    fn test_technique_labels() {
        assert_eq!(Technique::ThreeDimensional.label(TechniqueLabel::Short), "3D");
        assert_eq!(
            Technique::StopMotion.label(TechniqueLabel::Long),
            "Stop-motion (marionnette, décor)"
        );
        assert_eq!(Technique::Free.label(TechniqueLabel::Short), "Libre");
    }

    #[test]
    fn test_only_free_is_not_knowable() {
        let knowable: Vec<_> = Technique::knowable_techniques().collect();
        assert_eq!(knowable.len(), 5);
        assert!(!knowable.contains(&Technique::Free));
    }

    #[test]
    fn test_sorted_techniques() {
        let techniques = [
            Technique::Rostrum,
            Technique::DigitalTwoDimensional,
            Technique::ThreeDimensional,
        ];
        assert_eq!(
            sorted_techniques(&techniques),
            vec![
                Technique::DigitalTwoDimensional,
                Technique::ThreeDimensional,
                Technique::Rostrum
            ]
        );
        assert!(sorted_techniques(&[]).is_empty());
    }

    #[test]
    fn test_locations() {
        assert_eq!(Location::from_index(0).map(Location::label), Some("sur place"));
        assert_eq!(Location::from_index(1).map(Location::label), Some("en ligne"));
        assert_eq!(Location::from_index(2), None);
    }
}
