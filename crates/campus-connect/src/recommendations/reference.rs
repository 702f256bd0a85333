//! Static reference data served alongside recommendations.

use std::collections::BTreeMap;

/// Undergraduate majors offered in the sign-up form.
pub const OFFERED_MAJORS: &[&str] = &[
    "Accounting",
    "Actuarial Science",
    "American Studies",
    "Animation and Games",
    "Applied Cognition and Neuroscience",
    "Arts, Technology, and Emerging Communication",
    "Biochemistry",
    "Biology",
    "Biomedical Engineering",
    "Business Administration",
    "Business Analytics",
    "Chemistry",
    "Child Learning and Development",
    "Cognitive Science",
    "Computer Engineering",
    "Computer Science",
    "Criminology",
    "Data Science",
    "Economics",
    "Electrical Engineering",
    "Finance",
    "Geospatial Information Sciences",
    "Global Business",
    "Healthcare Management",
    "History",
    "Information Technology and Systems",
    "Interdisciplinary Studies",
    "International Political Economy",
    "Literature",
    "Marketing",
    "Mathematics",
    "Mechanical Engineering",
    "Molecular Biology",
    "Neuroscience",
    "Philosophy",
    "Physics",
    "Political Science",
    "Psychology",
    "Public Affairs",
    "Public Policy",
    "Sociology",
    "Software Engineering",
    "Speech, Language, and Hearing Sciences",
    "Supply Chain Management",
    "Visual and Performing Arts",
];

const MAJOR_COLORS: &[(&str, &str)] = &[
    ("Literature", "#f94144"),
    ("History", "#f3722c"),
    ("Philosophy", "#f8961e"),
    ("Art", "#f9844a"),
    ("Communication", "#f9c74f"),
    ("Media", "#90be6d"),
    ("Visual Arts", "#43aa8b"),
    ("Music", "#4d908e"),
    ("Film", "#577590"),
    ("Design", "#277da1"),
    ("Creative Writing", "#7209b7"),
    ("Theater", "#3a0ca3"),
    ("Humanities", "#4361ee"),
    ("Cultural Studies", "#4895ef"),
    ("Technology in Arts", "#4cc9f0"),
    ("Psychology", "#ef476f"),
    ("Neuroscience", "#ffd166"),
    ("Cognitive Science", "#06d6a0"),
    ("Speech-Language Pathology", "#118ab2"),
    ("Communication Disorders", "#073b4c"),
    ("Counseling", "#ff8c42"),
    ("Behavioral Sciences", "#56ab91"),
    ("Computer Science", "#f4a261"),
    ("Computer Engineering", "#2a9d8f"),
    ("Electrical Engineering", "#264653"),
    ("Mechanical Engineering", "#e76f51"),
    ("Software Engineering", "#ffa69e"),
    ("Bioengineering", "#ff6b6b"),
    ("Data Science", "#6a0572"),
    ("Systems Engineering", "#3c1874"),
    ("Cybersecurity", "#5d8233"),
    ("Robotics", "#27aeef"),
    ("Economics", "#1d3557"),
    ("Political Science", "#457b9d"),
    ("Public Policy", "#a8dadc"),
    ("Criminology", "#e63946"),
    ("Sociology", "#f1faee"),
    ("Policy Analysis", "#bc6c25"),
    ("Law", "#fefae0"),
    ("Justice Studies", "#606c38"),
    ("Government", "#283618"),
    ("Urban Planning", "#dda15e"),
    ("International Relations", "#a44a3f"),
    ("Public Administration", "#80b918"),
    ("Interdisciplinary Studies", "#1f4e5f"),
    ("General Studies", "#41b3a3"),
    ("Individualized Studies", "#85c7f2"),
    ("Accounting", "#ffbe0b"),
    ("Finance", "#fb5607"),
    ("Marketing", "#ff006e"),
    ("Business Administration", "#8338ec"),
    ("Entrepreneurship", "#3a86ff"),
    ("Management", "#02c39a"),
    ("Supply Chain Management", "#00a896"),
    ("Business Analytics", "#028090"),
    ("Operations Management", "#05668d"),
    ("Strategy", "#adc178"),
    ("Investment", "#ddbea9"),
    ("Organizational Behavior", "#ffe8d6"),
    ("Consulting", "#cb997e"),
    ("Leadership", "#a5a58d"),
    ("Biology", "#ff595e"),
    ("Chemistry", "#ffca3a"),
    ("Biochemistry", "#8ac926"),
    ("Mathematics", "#1982c4"),
    ("Physics", "#6a4c93"),
    ("Geosciences", "#6d597a"),
    ("Environmental Science", "#ffe066"),
    ("Ecology", "#dddf00"),
    ("Genetics", "#1b998b"),
    ("Cell Biology", "#c32f27"),
    ("Statistics", "#2d6a4f"),
    ("Science Education", "#a9def9"),
];

pub fn major_colors() -> BTreeMap<&'static str, &'static str> {
    MAJOR_COLORS.iter().copied().collect()
}

pub fn major_color(major: &str) -> Option<&'static str> {
    MAJOR_COLORS
        .iter()
        .find(|(name, _)| *name == major)
        .map(|(_, color)| *color)
}
