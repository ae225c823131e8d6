// ---------------------------------------------------------------------------
// Page – the views selectable from the navigation panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    ChallengeInfo,
    EffectsOfSpace,
    GeneralSpaceInfo,
    AnalyzeOsdr,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::ChallengeInfo,
        Page::EffectsOfSpace,
        Page::GeneralSpaceInfo,
        Page::AnalyzeOsdr,
    ];

    /// Label in the navigation combo box.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::ChallengeInfo => "Challenge Info",
            Page::EffectsOfSpace => "Effects of Space",
            Page::GeneralSpaceInfo => "General Space Info",
            Page::AnalyzeOsdr => "Analyze OSDR Data",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "OSDR Research Data Overview Tool",
            Page::ChallengeInfo => "Space Apps Challenge 2024",
            Page::EffectsOfSpace => "Effects of Space on the Human Body",
            Page::GeneralSpaceInfo => "Explore Space",
            Page::AnalyzeOsdr => "Analyze OSDR Research Data",
        }
    }

    pub fn paragraphs(self) -> &'static [&'static str] {
        match self {
            Page::Home => &[
                "Welcome to the OSDR Research Data Overview Tool! Explore experiments and the wonders of space.",
                "Use the navigation panel to analyze OSDR data or learn more about the challenges and effects of space. \
                 You can also upload data into the Analyze section to see what the experiments can be summarized into and see visualizations!",
            ],
            Page::ChallengeInfo => &[
                "The Space Apps Challenge is a global hackathon that brings together citizens to address challenges faced by NASA and other space agencies.",
            ],
            Page::EffectsOfSpace => &[
                "Space can significantly affect the human body in various ways, including muscle atrophy, bone density loss, and fluid redistribution.",
            ],
            Page::GeneralSpaceInfo => &["Information about the universe, solar system, and galaxies..."],
            Page::AnalyzeOsdr => &[],
        }
    }

    /// Optional `(label, url)` link shown under the text.
    pub fn link(self) -> Option<(&'static str, &'static str)> {
        match self {
            Page::ChallengeInfo => Some((
                "Space Apps Challenge",
                "https://www.spaceappschallenge.org/nasa-space-apps-2024/challenges/visualize-space-science/",
            )),
            _ => None,
        }
    }

    /// NASA image library query for the page gallery, if it has one.
    pub fn gallery_query(self) -> Option<&'static str> {
        match self {
            Page::ChallengeInfo => Some("space apps challenge"),
            Page::EffectsOfSpace => Some("effects of space on the human body"),
            Page::GeneralSpaceInfo => Some("galaxy"),
            Page::Home | Page::AnalyzeOsdr => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let labels: std::collections::BTreeSet<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels.len(), Page::ALL.len());
    }

    #[test]
    fn only_info_pages_have_galleries() {
        let with_gallery: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|p| p.gallery_query().is_some())
            .collect();
        assert_eq!(
            with_gallery,
            [Page::ChallengeInfo, Page::EffectsOfSpace, Page::GeneralSpaceInfo]
        );
        assert_eq!(Page::default(), Page::Home);
    }
}
