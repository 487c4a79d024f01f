//! Static résumé content, one dataset per supported language.
//!
//! Both datasets are `static` struct literals of [`ResumeData`], so a label
//! missing from one language is a compile error rather than a runtime lookup
//! miss. List lengths are free to differ between languages.

mod en;
mod links;
mod pt;

pub use en::DATA_EN;
pub use links::{mailto_url, profile_url, structured_data, whatsapp_digits, whatsapp_url};
pub use pt::DATA_PT;

use serde::Serialize;

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    /// Human formatted, e.g. `+55 11 91234-5678`.
    pub phone: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub location: &'static str,
    pub instagram: &'static str,
    pub github: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub summary: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    /// Details stay hidden until the visitor reveals them.
    pub is_locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationItem {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

/// One axis of the skills radar chart. `level` is a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillLevel {
    pub subject: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiLabels {
    pub greeting: &'static str,
    pub about: &'static str,
    pub experience: &'static str,
    pub skills: &'static str,
    pub education: &'static str,
    pub contact: &'static str,
    pub achievements: &'static str,
    pub philosophy_title: &'static str,
    pub philosophy_desc: &'static str,
    pub radar_title: &'static str,
    pub get_in_touch: &'static str,
    pub locked_notice: &'static str,
    pub unlock: &'static str,
    pub rights_reserved: &'static str,
    pub page_title: &'static str,
    pub not_found: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaLabels {
    pub skip_to_content: &'static str,
    pub navigate_to_section: &'static str,
    pub change_language: &'static str,
    pub current_language: &'static str,
    pub send_email: &'static str,
    pub open_whats_app: &'static str,
    pub open_linked_in: &'static str,
    pub open_instagram: &'static str,
    pub open_github: &'static str,
    pub contact_links: &'static str,
    pub location: &'static str,
    pub unlock_experiences: &'static str,
    pub experience_timeline: &'static str,
    pub technologies_used: &'static str,
    pub education_list: &'static str,
    pub social_links: &'static str,
    pub chart_description: &'static str,
    pub chart_data: &'static str,
    pub skills_categories: &'static str,
    pub skills_in_category: &'static str,
    pub main_navigation: &'static str,
    pub back_to_top: &'static str,
    pub open_menu: &'static str,
    pub close_menu: &'static str,
    pub mobile_navigation: &'static str,
    pub personal_presentation: &'static str,
    pub sr_chart_description: &'static str,
    pub category_label: &'static str,
    pub level_label: &'static str,
}

/// Everything the page displays for one language.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub name: &'static str,
    pub role: &'static str,
    pub summary: &'static [&'static str],
    pub contact: ContactInfo,
    pub experience: &'static [ExperienceItem],
    pub education: &'static [EducationItem],
    pub skill_categories: &'static [SkillCategory],
    pub radar: &'static [SkillLevel],
    pub ui: UiLabels,
    pub aria_labels: AriaLabels,
}

/// Handle to one of the static datasets.
///
/// Equality is identity of the underlying dataset, which keeps memoized
/// lookups cheap and only reports a change when the language really changed.
#[derive(Debug, Clone, Copy)]
pub struct Catalog(&'static ResumeData);

impl Catalog {
    pub fn for_language(language: Language) -> Self {
        Self(resolve_content(language))
    }

    pub fn data(self) -> &'static ResumeData {
        self.0
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for Catalog {}

pub fn resolve_content(language: Language) -> &'static ResumeData {
    match language {
        Language::Pt => &DATA_PT,
        Language::En => &DATA_EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    // Reduces a serialized catalog to its key skeleton: objects keep their keys,
    // arrays keep the distinct shapes of their elements, scalars keep their kind.
    fn shape(value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), shape(v)))
                    .collect::<Map<_, _>>(),
            ),
            Value::Array(items) => {
                let mut shapes: Vec<Value> = Vec::new();
                for item in items.iter().map(shape) {
                    if !shapes.contains(&item) {
                        shapes.push(item);
                    }
                }
                Value::Array(shapes)
            }
            Value::String(_) => Value::String("string".to_string()),
            Value::Bool(_) => Value::String("bool".to_string()),
            Value::Number(_) => Value::String("number".to_string()),
            Value::Null => Value::Null,
        }
    }

    #[test]
    fn test_both_languages_share_schema() {
        let pt = serde_json::to_value(resolve_content(Language::Pt)).unwrap();
        let en = serde_json::to_value(resolve_content(Language::En)).unwrap();
        assert_eq!(shape(&pt), shape(&en));
    }

    #[test]
    fn test_top_level_keys_match_schema() {
        let expected = [
            "ariaLabels",
            "contact",
            "education",
            "experience",
            "name",
            "radar",
            "role",
            "skillCategories",
            "summary",
            "ui",
        ];
        for language in Language::ALL {
            let value = serde_json::to_value(resolve_content(language)).unwrap();
            let mut keys = value
                .as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect::<Vec<_>>();
            keys.sort();
            assert_eq!(keys, expected, "unexpected keys for {language}");
        }
    }

    #[test]
    fn test_experience_entries_use_camel_case_keys() {
        let value = serde_json::to_value(DATA_EN.experience[0]).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("techStack"));
        assert!(obj.contains_key("isLocked"));
        assert!(!obj.contains_key("tech_stack"));
    }

    #[test]
    fn test_each_language_has_one_locked_entry() {
        for language in Language::ALL {
            let data = resolve_content(language);
            let locked = data.experience.iter().filter(|e| e.is_locked).count();
            assert_eq!(locked, 1, "{language} should have exactly one locked entry");
        }
    }

    #[test]
    fn test_catalog_identity() {
        assert_eq!(
            Catalog::for_language(Language::Pt),
            Catalog::for_language(Language::Pt)
        );
        assert_ne!(
            Catalog::for_language(Language::Pt),
            Catalog::for_language(Language::En)
        );
        assert_eq!(Catalog::for_language(Language::En).data().ui.skills, "Skills");
    }

    #[test]
    fn test_radar_levels_are_percentages() {
        for language in Language::ALL {
            let radar = resolve_content(language).radar;
            assert!(!radar.is_empty());
            assert!(radar.iter().all(|p| p.level <= 100));
        }
        assert_eq!(DATA_PT.radar.len(), DATA_EN.radar.len());
    }
}
