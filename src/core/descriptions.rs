use std::collections::HashMap;

/// Text shown when a result label has no stored description
pub const FALLBACK_DESCRIPTION: &str = "No description available for this career.";

const CAREERS: &[(&str, &str)] = &[
    ("Animation, Graphics and Multimedia", "A field focusing on creating visual content, animations, and multimedia presentations for entertainment, advertising, and education."),
    ("B.Arch- Bachelor of Architecture", "A professional degree in architecture that equips students with the skills to design buildings and structures."),
    ("B.Com- Bachelor of Commerce", "A foundational degree in commerce, focusing on accounting, finance, and business management."),
    ("B.Ed.", "A professional teaching degree for individuals aspiring to become educators in schools."),
    ("B.Sc- Applied Geology", "A science degree focused on the study of Earth's materials, processes, and history."),
    ("B.Sc- Nursing", "A healthcare degree focusing on patient care, clinical practices, and medical ethics."),
    ("B.Sc. Chemistry", "A degree exploring the properties, composition, and changes of matter at a molecular level."),
    ("B.Sc. Mathematics", "An advanced study in mathematical theories, computations, and problem-solving techniques."),
    ("B.Sc.- Information Technology", "A degree focusing on the application of IT in managing data, software, and systems."),
    ("B.Sc.- Physics", "An exploration of the fundamental laws of nature, including matter, energy, and their interactions."),
    ("B.Tech.-Civil Engineering", "An engineering degree focused on designing, constructing, and maintaining infrastructure projects."),
    ("B.Tech.-Computer Science and Engineering", "A technical degree in programming, software development, and computer systems."),
    ("B.Tech.-Electrical and Electronics Engineering", "A branch of engineering dealing with electrical systems, circuits, and power distribution."),
    ("B.Tech.-Electronics and Communication Engineering", "An engineering degree focused on electronic devices, circuits, and communication technologies."),
    ("B.Tech.-Mechanical Engineering", "A branch of engineering dealing with the design, construction, and operation of machinery."),
    ("BA in Economics", "A social science degree exploring economic theories, policies, and their applications in society."),
    ("BA in English", "A humanities degree focusing on English literature, language, and writing skills."),
    ("BA in Hindi", "A degree in the Hindi language and literature, exploring its cultural and linguistic significance."),
    ("BA in History", "A study of past events, civilizations, and their impact on the present and future."),
    ("BBA- Bachelor of Business Administration", "A management degree focusing on business operations, leadership, and entrepreneurship."),
    ("BBS- Bachelor of Business Studies", "A business-focused degree emphasizing strategic management and decision-making."),
    ("BCA- Bachelor of Computer Applications", "A technical degree specializing in computer programming and application development."),
    ("BDS- Bachelor of Dental Surgery", "A professional healthcare degree specializing in dental and oral health."),
    ("BEM- Bachelor of Event Management", "A professional degree focusing on planning and organizing events and functions."),
    ("BFD- Bachelor of Fashion Designing", "A creative degree focusing on designing clothing, accessories, and fashion trends."),
    ("BJMC- Bachelor of Journalism and Mass Communication", "A professional degree in media, journalism, and mass communication practices."),
    ("BPharma- Bachelor of Pharmacy", "A healthcare degree specializing in drug development, usage, and patient care."),
    ("BTTM- Bachelor of Travel and Tourism Management", "A professional degree in managing travel, tourism, and hospitality industries."),
    ("BVA- Bachelor of Visual Arts", "A creative degree focusing on painting, sculpture, and other visual arts."),
    ("CA- Chartered Accountancy", "A professional certification focusing on financial accounting, auditing, and taxation."),
    ("CS- Company Secretary", "A professional qualification in corporate law, governance, and compliance."),
    ("Civil Services", "A prestigious career in public administration, governance, and policy implementation."),
    ("Diploma in Dramatic Arts", "A professional course in acting, direction, and theatrical production."),
    ("Integrated Law Course- BA + LL.B", "A dual degree in law and humanities, preparing students for a career in legal practice."),
    ("MBBS", "A professional medical degree equipping students to become licensed doctors."),
];

// Keyed by the symbols the personality quiz redirects with.
const PERSONALITY_TYPES: &[(&str, &str)] = &[
    ("R", "Realistic: practical, hands-on people who like working with tools, machines, plants or animals."),
    ("I", "Investigative: analytical thinkers drawn to research, experiments and solving complex problems."),
    ("A", "Artistic: creative, expressive people who thrive in unstructured work such as art, writing and design."),
    ("S", "Social: helpers and teachers who enjoy working with people, informing and caring for others."),
    ("E", "Enterprising: persuasive leaders who like starting projects, selling ideas and making decisions."),
    ("C", "Conventional: organized, detail-oriented people who prefer clear procedures, data and records."),
];

/// Static lookup from result label to a human-readable paragraph
#[derive(Debug, Clone)]
pub struct DescriptionTable {
    entries: HashMap<&'static str, &'static str>,
}

impl DescriptionTable {
    pub fn new() -> Self {
        Self {
            entries: CAREERS.iter().chain(PERSONALITY_TYPES).copied().collect(),
        }
    }

    /// Exact-match lookup; unknown labels get [`FALLBACK_DESCRIPTION`]
    pub fn describe(&self, label: &str) -> &'static str {
        self.entries.get(label).copied().unwrap_or(FALLBACK_DESCRIPTION)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DescriptionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_career() {
        let table = DescriptionTable::new();
        assert_eq!(
            table.describe("MBBS"),
            "A professional medical degree equipping students to become licensed doctors."
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = DescriptionTable::new();
        assert_eq!(table.describe("mbbs"), FALLBACK_DESCRIPTION);
        assert_eq!(table.describe(" MBBS"), FALLBACK_DESCRIPTION);
        assert_eq!(table.describe("No result"), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_every_personality_type_described() {
        let table = DescriptionTable::new();
        for symbol in ["R", "I", "A", "S", "E", "C"] {
            assert!(table.contains(symbol), "missing description for {}", symbol);
        }
        assert_eq!(table.len(), CAREERS.len() + 6);
    }
}
