//! Mental health resource directory
//!
//! Static listing returned by the resources endpoint: crisis helplines,
//! professional help, self-help tools, and educational material.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ResourceEntry {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceCategory {
    pub category: &'static str,
    pub entries: Vec<ResourceEntry>,
}

/// Build the full resource directory
pub fn directory() -> Vec<ResourceCategory> {
    vec![
        ResourceCategory {
            category: "Crisis Helplines",
            entries: vec![
                ResourceEntry {
                    name: "National Suicide Prevention Lifeline",
                    description: "24/7 free and confidential support for people in distress",
                    contact: Some("988 or 1-800-273-8255"),
                    website: Some("https://suicidepreventionlifeline.org"),
                },
                ResourceEntry {
                    name: "Crisis Text Line",
                    description: "Free, 24/7 crisis support via text message",
                    contact: Some("Text HOME to 741741"),
                    website: Some("https://www.crisistextline.org"),
                },
                ResourceEntry {
                    name: "National Alliance on Mental Illness (NAMI)",
                    description: "Support and education for individuals and families",
                    contact: Some("1-800-950-NAMI (6264)"),
                    website: Some("https://www.nami.org"),
                },
            ],
        },
        ResourceCategory {
            category: "Professional Help",
            entries: vec![
                ResourceEntry {
                    name: "Psychology Today",
                    description: "Find mental health professionals in your area",
                    contact: None,
                    website: Some("https://www.psychologytoday.com"),
                },
                ResourceEntry {
                    name: "SAMHSA Treatment Locator",
                    description: "Find treatment facilities and programs",
                    contact: Some("1-800-662-4357"),
                    website: Some("https://findtreatment.samhsa.gov"),
                },
                ResourceEntry {
                    name: "Your Primary Care Doctor",
                    description: "Start with your family doctor for referrals and initial assessment",
                    contact: None,
                    website: None,
                },
            ],
        },
        ResourceCategory {
            category: "Self-Help Resources",
            entries: vec![
                ResourceEntry {
                    name: "Headspace",
                    description: "Meditation and mindfulness app",
                    contact: None,
                    website: Some("https://www.headspace.com"),
                },
                ResourceEntry {
                    name: "Calm",
                    description: "Sleep, meditation, and relaxation app",
                    contact: None,
                    website: Some("https://www.calm.com"),
                },
                ResourceEntry {
                    name: "7 Cups",
                    description: "Free emotional support and online therapy",
                    contact: None,
                    website: Some("https://www.7cups.com"),
                },
            ],
        },
        ResourceCategory {
            category: "Educational Resources",
            entries: vec![
                ResourceEntry {
                    name: "National Institute of Mental Health (NIMH)",
                    description: "Comprehensive information about mental health conditions",
                    contact: None,
                    website: Some("https://www.nimh.nih.gov"),
                },
                ResourceEntry {
                    name: "Mental Health America",
                    description: "Mental health screening tools and resources",
                    contact: None,
                    website: Some("https://www.mentalhealthamerica.net"),
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_has_crisis_lines() {
        let dir = directory();
        let crisis = dir.iter().find(|c| c.category == "Crisis Helplines").unwrap();
        assert!(!crisis.entries.is_empty());
        assert!(crisis.entries.iter().all(|e| e.contact.is_some()));
    }

    #[test]
    fn test_all_categories_nonempty() {
        for category in directory() {
            assert!(!category.entries.is_empty(), "{} empty", category.category);
        }
    }
}
