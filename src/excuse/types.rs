use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

pub const PLACEHOLDER_SUBJECT: &str = "Excuse Email";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Running Late", alias = "running_late")]
    RunningLate,
    #[serde(rename = "Missed Meeting", alias = "missed_meeting")]
    MissedMeeting,
    #[serde(rename = "Missed Deadline", alias = "missed_deadline")]
    MissedDeadline,
    #[serde(rename = "Sick Day", alias = "sick_day")]
    SickDay,
    #[serde(rename = "Family Emergency", alias = "family_emergency")]
    FamilyEmergency,
    #[serde(rename = "Technical Difficulties", alias = "technical_difficulties")]
    TechnicalDifficulties,
    #[serde(rename = "Other", alias = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "Professional", alias = "professional")]
    Professional,
    #[serde(rename = "Apologetic", alias = "apologetic")]
    Apologetic,
    #[serde(rename = "Casual", alias = "casual")]
    Casual,
    #[serde(rename = "Humorous", alias = "humorous")]
    Humorous,
    #[serde(rename = "Dramatic", alias = "dramatic")]
    Dramatic,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::RunningLate,
        Category::MissedMeeting,
        Category::MissedDeadline,
        Category::SickDay,
        Category::FamilyEmergency,
        Category::TechnicalDifficulties,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::RunningLate => "Running Late",
            Category::MissedMeeting => "Missed Meeting",
            Category::MissedDeadline => "Missed Deadline",
            Category::SickDay => "Sick Day",
            Category::FamilyEmergency => "Family Emergency",
            Category::TechnicalDifficulties => "Technical Difficulties",
            Category::Other => "Other",
        }
    }
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Apologetic,
        Tone::Casual,
        Tone::Humorous,
        Tone::Dramatic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Apologetic => "Apologetic",
            Tone::Casual => "Casual",
            Tone::Humorous => "Humorous",
            Tone::Dramatic => "Dramatic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Form submission for a single excuse email.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExcuseRequest {
    pub category: Category,
    pub tone: Tone,
    #[validate(range(min = 1, max = 5, message = "Seriousness must be between 1 and 5"))]
    pub seriousness: u8,
    #[validate(custom(function = "not_blank"))]
    pub recipient_name: String,
    #[validate(custom(function = "not_blank"))]
    pub sender_name: String,
    #[serde(alias = "timeframe")]
    #[validate(custom(function = "not_blank"))]
    pub eta_when: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000, message = "Context must be at most 2000 characters"))]
    pub context: Option<String>,
}

impl ExcuseRequest {
    /// Context with surrounding whitespace removed, or `None` when blank.
    pub fn context(&self) -> Option<&str> {
        self.context
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcuseEmail {
    pub subject: String,
    pub body: String,
}

impl ExcuseEmail {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Body of a successful generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcuseResponse {
    pub subject: String,
    pub body: String,
    pub success: bool,
    pub error: Option<String>,
}

impl From<ExcuseEmail> for ExcuseResponse {
    fn from(email: ExcuseEmail) -> Self {
        Self {
            subject: email.subject,
            body: email.body,
            success: true,
            error: None,
        }
    }
}
