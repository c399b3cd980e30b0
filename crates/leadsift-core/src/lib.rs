use serde::{Deserialize, Serialize};

pub mod backend;
pub mod config_file;

// Re-export for convenience
pub use backend::{BackendError, DocumentBackend};
pub use config_file::ConfigFile;

/// Placeholder written into any lead field that could not be populated.
pub const NOT_AVAILABLE: &str = "N/A";

/// Qualitative priority of a lead, derived from keywords on its source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Hot,
    Warm,
    Cold,
}

impl Category {
    /// Numeric score that always accompanies this category.
    pub fn score(self) -> u8 {
        match self {
            Category::Hot => 90,
            Category::Warm => 50,
            Category::Cold => 20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Hot => "Hot",
            Category::Warm => "Warm",
            Category::Cold => "Cold",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate contact inferred from one line of document text.
///
/// Leads are built once by the extractor and are read-only afterwards, so
/// fields are reached through accessors. `phone` and `location` never occur
/// in source text and are always `"N/A"`. The `score` is not stored: it is a
/// function of `category`, so the two can never disagree. Serialization emits
/// every field, in the order
/// `name, email, company, title, phone, location, score, category`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    name: String,
    email: String,
    company: String,
    title: String,
    category: Category,
}

impl Lead {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        title: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            company: company.into(),
            title: title.into(),
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First email address found on the source line.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn phone(&self) -> &str {
        NOT_AVAILABLE
    }

    pub fn location(&self) -> &str {
        NOT_AVAILABLE
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn score(&self) -> u8 {
        self.category.score()
    }
}

/// Wire form of a [`Lead`]; field order here is the serialized key order.
#[derive(Serialize, Deserialize)]
struct LeadRecord {
    name: String,
    email: String,
    company: String,
    title: String,
    phone: String,
    location: String,
    score: u8,
    category: Category,
}

impl Serialize for Lead {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        LeadRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            title: self.title.clone(),
            phone: self.phone().to_string(),
            location: self.location().to_string(),
            score: self.score(),
            category: self.category,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Lead {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = LeadRecord::deserialize(deserializer)?;
        if record.score != record.category.score() {
            return Err(serde::de::Error::custom(format!(
                "score {} is inconsistent with category {}",
                record.score, record.category
            )));
        }
        for (field, value) in [("phone", &record.phone), ("location", &record.location)] {
            if value != NOT_AVAILABLE {
                return Err(serde::de::Error::custom(format!(
                    "{field} must be {NOT_AVAILABLE:?}, got {value:?}"
                )));
            }
        }
        Ok(Lead::new(
            record.name,
            record.email,
            record.company,
            record.title,
            record.category,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_scores() {
        assert_eq!(Category::Hot.score(), 90);
        assert_eq!(Category::Warm.score(), 50);
        assert_eq!(Category::Cold.score(), 20);
    }

    #[test]
    fn new_lead_fills_constant_fields() {
        let lead = Lead::new("Jane", "jane@acme.com", "Acme", "CEO", Category::Hot);
        assert_eq!(lead.phone(), "N/A");
        assert_eq!(lead.location(), "N/A");
        assert_eq!(lead.score(), 90);
    }

    #[test]
    fn serialized_key_order() {
        let lead = Lead::new("Jane", "jane@acme.com", "N/A", "N/A", Category::Warm);
        let json = serde_json::to_string(&lead).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Jane","email":"jane@acme.com","company":"N/A","title":"N/A","phone":"N/A","location":"N/A","score":50,"category":"Warm"}"#
        );
    }

    #[test]
    fn deserialize_rejects_inconsistent_score() {
        let json = r#"{"name":"Jane","email":"jane@acme.com","company":"N/A","title":"N/A","phone":"N/A","location":"N/A","score":90,"category":"Cold"}"#;
        let err = serde_json::from_str::<Lead>(json).unwrap_err();
        assert!(err.to_string().contains("inconsistent"), "{err}");
    }

    #[test]
    fn deserialize_accepts_consistent_record() {
        let json = r#"{"name":"Ops","email":"info@x.io","company":"N/A","title":"N/A","phone":"N/A","location":"N/A","score":20,"category":"Cold"}"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.category(), Category::Cold);
        assert_eq!(lead.email(), "info@x.io");
    }

    #[test]
    fn deserialize_rejects_populated_phone() {
        let json = r#"{"name":"Jane","email":"jane@acme.com","company":"N/A","title":"N/A","phone":"555-0100","location":"N/A","score":50,"category":"Warm"}"#;
        let err = serde_json::from_str::<Lead>(json).unwrap_err();
        assert!(err.to_string().contains("phone"), "{err}");
    }
}
