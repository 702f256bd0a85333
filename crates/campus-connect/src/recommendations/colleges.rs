use serde::Serialize;

/// Academic colleges, plus the `Any College` sentinel for majors outside the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum College {
    ArtsHumanitiesTechnology,
    BehavioralBrainSciences,
    EngineeringComputerScience,
    EconomicPoliticalPolicySciences,
    InterdisciplinaryStudies,
    Management,
    NaturalSciencesMathematics,
    AnyCollege,
}

/// Event category a college makes more relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventFocus {
    Social,
    Business,
    Stem,
}

impl EventFocus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Social => "Social",
            Self::Business => "Business",
            Self::Stem => "STEM",
        }
    }
}

impl College {
    /// Resolution order. Each major appears under exactly one college; if that ever changes the
    /// first college listed here wins.
    pub const fn ordered() -> [Self; 7] {
        [
            Self::ArtsHumanitiesTechnology,
            Self::BehavioralBrainSciences,
            Self::EngineeringComputerScience,
            Self::EconomicPoliticalPolicySciences,
            Self::InterdisciplinaryStudies,
            Self::Management,
            Self::NaturalSciencesMathematics,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ArtsHumanitiesTechnology => "School of Arts, Humanities, and Technology",
            Self::BehavioralBrainSciences => "School of Behavioral and Brain Sciences",
            Self::EngineeringComputerScience => {
                "Erik Jonsson School of Engineering and Computer Science"
            }
            Self::EconomicPoliticalPolicySciences => {
                "School of Economic, Political and Policy Sciences"
            }
            Self::InterdisciplinaryStudies => "School of Interdisciplinary Studies",
            Self::Management => "Naveen Jindal School of Management",
            Self::NaturalSciencesMathematics => "School of Natural Sciences and Mathematics",
            Self::AnyCollege => "Any College",
        }
    }

    pub const fn majors(self) -> &'static [&'static str] {
        match self {
            Self::ArtsHumanitiesTechnology => &[
                "Literature",
                "History",
                "Philosophy",
                "Art",
                "Communication",
                "Media",
                "Visual Arts",
                "Music",
                "Film",
                "Design",
                "Creative Writing",
                "Theater",
                "Humanities",
                "Cultural Studies",
                "Technology in Arts",
            ],
            Self::BehavioralBrainSciences => &[
                "Psychology",
                "Neuroscience",
                "Cognitive Science",
                "Speech-Language Pathology",
                "Communication Disorders",
                "Counseling",
                "Behavioral Sciences",
            ],
            Self::EngineeringComputerScience => &[
                "Computer Science",
                "Computer Engineering",
                "Electrical Engineering",
                "Mechanical Engineering",
                "Software Engineering",
                "Bioengineering",
                "Data Science",
                "Systems Engineering",
                "Cybersecurity",
                "Robotics",
            ],
            Self::EconomicPoliticalPolicySciences => &[
                "Economics",
                "Political Science",
                "Public Policy",
                "Criminology",
                "Sociology",
                "Policy Analysis",
                "Law",
                "Justice Studies",
                "Government",
                "Urban Planning",
                "International Relations",
                "Public Administration",
            ],
            Self::InterdisciplinaryStudies => &[
                "Interdisciplinary Studies",
                "General Studies",
                "Individualized Studies",
            ],
            Self::Management => &[
                "Accounting",
                "Finance",
                "Marketing",
                "Business Administration",
                "Entrepreneurship",
                "Management",
                "Supply Chain Management",
                "Business Analytics",
                "Operations Management",
                "Strategy",
                "Investment",
                "Organizational Behavior",
                "Consulting",
                "Leadership",
            ],
            Self::NaturalSciencesMathematics => &[
                "Biology",
                "Chemistry",
                "Biochemistry",
                "Mathematics",
                "Physics",
                "Geosciences",
                "Environmental Science",
                "Ecology",
                "Genetics",
                "Cell Biology",
                "Statistics",
                "Science Education",
            ],
            Self::AnyCollege => &[],
        }
    }

    /// Six of the seven colleges steer event scoring toward a category.
    pub const fn event_focus(self) -> Option<EventFocus> {
        match self {
            Self::ArtsHumanitiesTechnology => Some(EventFocus::Social),
            Self::Management | Self::EconomicPoliticalPolicySciences => {
                Some(EventFocus::Business)
            }
            Self::EngineeringComputerScience
            | Self::NaturalSciencesMathematics
            | Self::BehavioralBrainSciences => Some(EventFocus::Stem),
            Self::InterdisciplinaryStudies | Self::AnyCollege => None,
        }
    }

    pub const fn advising_link(self) -> &'static str {
        match self {
            Self::ArtsHumanitiesTechnology => "https://bass.utdallas.edu/undergraduate-advising/",
            Self::BehavioralBrainSciences => "https://bbs.utdallas.edu/advising/",
            Self::EngineeringComputerScience => {
                "https://engineering.utdallas.edu/academics/undergraduate-majors/undergrad-advising/"
            }
            Self::EconomicPoliticalPolicySciences => {
                "https://epps.utdallas.edu/current-students/undergraduate-advising/"
            }
            Self::InterdisciplinaryStudies => "https://is.utdallas.edu/contact/advisors/",
            Self::Management => "https://jindal.utdallas.edu/advising/",
            Self::NaturalSciencesMathematics => "https://nsm.utdallas.edu/advising/",
            Self::AnyCollege => "https://oue.utdallas.edu/undergraduate-advising/",
        }
    }
}

/// Maps an exact major name to its college, or [`College::AnyCollege`].
pub fn resolve_college(major: &str) -> College {
    College::ordered()
        .into_iter()
        .find(|college| college.majors().iter().any(|candidate| *candidate == major))
        .unwrap_or(College::AnyCollege)
}
