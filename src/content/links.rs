use serde_json::{json, Value};

use super::ResumeData;

static WHATSAPP_BASE: &str = "https://wa.me/";

/// Strips everything but ASCII digits from a human formatted phone number.
pub fn whatsapp_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

pub fn whatsapp_url(phone: &str) -> String {
    format!("{}{}", WHATSAPP_BASE, whatsapp_digits(phone))
}

pub fn mailto_url(email: &str) -> String {
    format!("mailto:{email}")
}

/// Profile links may be authored with or without a scheme.
pub fn profile_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with("https://") || raw.starts_with("http://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// schema.org `Person` document for the page head.
pub fn structured_data(data: &ResumeData) -> Value {
    let contact = &data.contact;
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": data.name,
        "jobTitle": data.role,
        "email": mailto_url(contact.email),
        "address": contact.location,
        "sameAs": [
            profile_url(contact.linkedin),
            profile_url(contact.github),
            profile_url(contact.instagram),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DATA_EN, DATA_PT};

    #[test]
    fn test_whatsapp_digits() {
        assert_eq!(whatsapp_digits("+55 11 91234-5678"), "5511912345678");
        assert_eq!(whatsapp_digits("(11) 1234.5678"), "1112345678");
        assert_eq!(whatsapp_digits("no digits"), "");
    }

    #[test]
    fn test_whatsapp_url_uses_digits_verbatim() {
        assert_eq!(
            whatsapp_url("+55 11 91234-5678"),
            "https://wa.me/5511912345678"
        );
        assert_eq!(whatsapp_url(DATA_PT.contact.phone), whatsapp_url(DATA_EN.contact.phone));
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto_url("me@example.com"), "mailto:me@example.com");
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(
            profile_url("linkedin.com/in/someone"),
            "https://linkedin.com/in/someone"
        );
        assert_eq!(
            profile_url("https://github.com/someone"),
            "https://github.com/someone"
        );
        assert_eq!(profile_url("http://old.example"), "http://old.example");
        assert_eq!(profile_url("  site.dev "), "https://site.dev");
    }

    #[test]
    fn test_structured_data() {
        let doc = structured_data(&DATA_EN);
        assert_eq!(doc["@type"], "Person");
        assert_eq!(doc["name"], DATA_EN.name);
        assert_eq!(doc["jobTitle"], DATA_EN.role);
        assert_eq!(doc["email"], format!("mailto:{}", DATA_EN.contact.email));
        let same_as = doc["sameAs"].as_array().unwrap();
        assert_eq!(same_as.len(), 3);
        assert!(same_as.iter().all(|v| v.as_str().unwrap().starts_with("https://")));
    }

    #[test]
    fn test_structured_data_follows_language() {
        assert_ne!(
            structured_data(&DATA_PT)["jobTitle"],
            structured_data(&DATA_EN)["jobTitle"]
        );
    }
}
