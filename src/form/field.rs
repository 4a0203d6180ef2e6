//! Field registry.
//!
//! Every input on the assessment form is a [`Field`] variant. The registry
//! answers display questions about a field (label, widget, section,
//! placeholder, options, description) without any string-keyed lookup
//! tables; string keys are only parsed at the edges via [`Field::from_key`].

use serde::{Serialize, Serializer};
use std::fmt;

const YES_NO: &[&str] = &["Yes", "No"];
const GENDERS: &[&str] = &["Male", "Female"];
const RACES: &[&str] = &[
    "White",
    "Black",
    "Asian",
    "Hispanic",
    "American Indian/Alaskan Native",
    "MexAmerican",
];
const OCCUPATIONS: &[&str] = &[
    "Teacher",
    "Software Engineer",
    "Scientist",
    "Salesperson",
    "Nurse",
    "Manager",
    "Lawyer",
    "Engineer",
    "Doctor",
    "Accountant",
    "Student",
    "Other",
];
const GEN_HEALTH: &[&str] = &["Excellent", "Very good", "Good", "Fair", "Poor"];
const DIABETIC: &[&str] = &["Yes", "Pre-diabetic", "No"];
const NORMAL_LOW: &[&str] = &["Normal", "Low"];
const NORMAL_HIGH: &[&str] = &["Normal", "High"];

/// A single input on the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Age,
    Gender,
    Race,
    Occupation,
    Height,
    Weight,
    SystolicBp,
    DiastolicBp,
    HeartRate,
    SleepDuration,
    SleepQuality,
    DailySteps,
    PhysicalActivity,
    PhysicalActivityDuration,
    Smoking,
    AlcoholDrinking,
    PhysicalHealth,
    MentalHealth,
    StressLevel,
    GenHealth,
    DiffWalking,
    Stroke,
    Diabetic,
    Asthma,
    KidneyDisease,
    SkinCancer,
    GoodCholesterol,
    UricAcidCategory,
    Albuminuria,
    UrineAlbuminCreatinineRatio,
    TrigCategory,
}

/// How a field is presented for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Free numeric entry
    Number,
    /// Drop-down with a fixed option list
    Select,
    /// Radio group with a fixed option list
    Radio,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetKind::Number => write!(f, "number"),
            WidgetKind::Select => write!(f, "select"),
            WidgetKind::Radio => write!(f, "radio"),
        }
    }
}

/// Form section a field is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    PersonalDetails,
    BodyMeasurements,
    SleepAndRoutine,
    HabitsAndLifestyle,
    WellBeing,
    PastConditions,
    ClinicalRequired,
    ClinicalOptional,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 8] = [
        Section::PersonalDetails,
        Section::BodyMeasurements,
        Section::SleepAndRoutine,
        Section::HabitsAndLifestyle,
        Section::WellBeing,
        Section::PastConditions,
        Section::ClinicalRequired,
        Section::ClinicalOptional,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::PersonalDetails => "Personal Details",
            Section::BodyMeasurements => "Body & Basic Measurements",
            Section::SleepAndRoutine => "Sleep & Daily Routine",
            Section::HabitsAndLifestyle => "Habits & Lifestyle Choices",
            Section::WellBeing => "Mental & Physical Well-being",
            Section::PastConditions => "Past Diseases / Health Conditions",
            Section::ClinicalRequired => "Clinical & Lab-related Indicators (Required)",
            Section::ClinicalOptional => "Clinical & Lab-related Indicators (Optional)",
        }
    }

    /// Fields belonging to this section, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.iter().copied().filter(move |f| f.section() == *self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Aggregated registry entry for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub widget: String,
    pub section: &'static str,
    pub placeholder: Option<&'static str>,
    pub options: &'static [&'static str],
    pub description: Option<&'static str>,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Field; 31] = [
        Field::Age,
        Field::Gender,
        Field::Race,
        Field::Occupation,
        Field::Height,
        Field::Weight,
        Field::SystolicBp,
        Field::DiastolicBp,
        Field::HeartRate,
        Field::SleepDuration,
        Field::SleepQuality,
        Field::DailySteps,
        Field::PhysicalActivity,
        Field::PhysicalActivityDuration,
        Field::Smoking,
        Field::AlcoholDrinking,
        Field::PhysicalHealth,
        Field::MentalHealth,
        Field::StressLevel,
        Field::GenHealth,
        Field::DiffWalking,
        Field::Stroke,
        Field::Diabetic,
        Field::Asthma,
        Field::KidneyDisease,
        Field::SkinCancer,
        Field::GoodCholesterol,
        Field::UricAcidCategory,
        Field::Albuminuria,
        Field::UrineAlbuminCreatinineRatio,
        Field::TrigCategory,
    ];

    /// Wire name used in records and in the submission payload.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Race => "race",
            Field::Occupation => "occupation",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::SystolicBp => "systolicBP",
            Field::DiastolicBp => "diastolicBP",
            Field::HeartRate => "heartRate",
            Field::SleepDuration => "sleepDuration",
            Field::SleepQuality => "sleepQuality",
            Field::DailySteps => "dailySteps",
            Field::PhysicalActivity => "physicalActivity",
            Field::PhysicalActivityDuration => "physicalActivityDuration",
            Field::Smoking => "smoking",
            Field::AlcoholDrinking => "alcoholDrinking",
            Field::PhysicalHealth => "physicalHealth",
            Field::MentalHealth => "mentalHealth",
            Field::StressLevel => "stressLevel",
            Field::GenHealth => "genHealth",
            Field::DiffWalking => "diffWalking",
            Field::Stroke => "stroke",
            Field::Diabetic => "diabetic",
            Field::Asthma => "asthma",
            Field::KidneyDisease => "kidneyDisease",
            Field::SkinCancer => "skinCancer",
            Field::GoodCholesterol => "goodCholesterol",
            Field::UricAcidCategory => "uricAcidCategory",
            Field::Albuminuria => "albuminuria",
            Field::UrineAlbuminCreatinineRatio => "urineAlbuminCreatinineRatio",
            Field::TrigCategory => "trigCategory",
        }
    }

    /// Parse a wire key. Matching is exact.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Race => "Race",
            Field::Occupation => "Occupation",
            Field::Height => "Height (cm)",
            Field::Weight => "Weight (kg)",
            Field::SystolicBp => "Systolic BP (mmHg)",
            Field::DiastolicBp => "Diastolic BP (mmHg)",
            Field::HeartRate => "Heart Rate (bpm)",
            Field::SleepDuration => "Sleep Duration (hrs)",
            Field::SleepQuality => "Sleep Quality (1-10)",
            Field::DailySteps => "Daily Steps",
            Field::PhysicalActivity => "Physical Activity",
            Field::PhysicalActivityDuration => "Physical Activity Duration (min/day)",
            Field::Smoking => "Smoking",
            Field::AlcoholDrinking => "Alcohol Drinking",
            Field::PhysicalHealth => "Physical Health (days)",
            Field::MentalHealth => "Mental Health (days)",
            Field::StressLevel => "Stress Level (1-10)",
            Field::GenHealth => "General Health",
            Field::DiffWalking => "Difficulty Walking",
            Field::Stroke => "Stroke",
            Field::Diabetic => "Diabetic",
            Field::Asthma => "Asthma",
            Field::KidneyDisease => "Kidney Disease",
            Field::SkinCancer => "Skin Cancer",
            Field::GoodCholesterol => "Good Cholesterol",
            Field::UricAcidCategory => "Uric Acid Category",
            Field::Albuminuria => "Albuminuria",
            Field::UrineAlbuminCreatinineRatio => "Urine Albumin-Creatinine Ratio (mg/g)",
            Field::TrigCategory => "Triglyceride Category",
        }
    }

    pub fn widget(&self) -> WidgetKind {
        match self {
            Field::Age
            | Field::Height
            | Field::Weight
            | Field::SystolicBp
            | Field::DiastolicBp
            | Field::HeartRate
            | Field::SleepDuration
            | Field::SleepQuality
            | Field::DailySteps
            | Field::PhysicalActivityDuration
            | Field::PhysicalHealth
            | Field::MentalHealth
            | Field::StressLevel
            | Field::UrineAlbuminCreatinineRatio => WidgetKind::Number,
            Field::Stroke
            | Field::Diabetic
            | Field::Asthma
            | Field::KidneyDisease
            | Field::SkinCancer => WidgetKind::Radio,
            _ => WidgetKind::Select,
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Field::Age | Field::Gender | Field::Race | Field::Occupation => {
                Section::PersonalDetails
            }
            Field::Height
            | Field::Weight
            | Field::SystolicBp
            | Field::DiastolicBp
            | Field::HeartRate => Section::BodyMeasurements,
            Field::SleepDuration
            | Field::SleepQuality
            | Field::DailySteps
            | Field::PhysicalActivity
            | Field::PhysicalActivityDuration => Section::SleepAndRoutine,
            Field::Smoking | Field::AlcoholDrinking => Section::HabitsAndLifestyle,
            Field::PhysicalHealth
            | Field::MentalHealth
            | Field::StressLevel
            | Field::GenHealth
            | Field::DiffWalking => Section::WellBeing,
            Field::Stroke
            | Field::Diabetic
            | Field::Asthma
            | Field::KidneyDisease
            | Field::SkinCancer => Section::PastConditions,
            Field::GoodCholesterol | Field::UricAcidCategory => Section::ClinicalRequired,
            Field::Albuminuria | Field::UrineAlbuminCreatinineRatio | Field::TrigCategory => {
                Section::ClinicalOptional
            }
        }
    }

    /// Allowed values for select and radio fields. Empty for numeric fields.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Field::Gender => GENDERS,
            Field::Race => RACES,
            Field::Occupation => OCCUPATIONS,
            Field::GenHealth => GEN_HEALTH,
            Field::Diabetic => DIABETIC,
            Field::GoodCholesterol => NORMAL_LOW,
            Field::UricAcidCategory | Field::TrigCategory => NORMAL_HIGH,
            Field::PhysicalActivity
            | Field::Smoking
            | Field::AlcoholDrinking
            | Field::DiffWalking
            | Field::Stroke
            | Field::Asthma
            | Field::KidneyDisease
            | Field::SkinCancer
            | Field::Albuminuria => YES_NO,
            _ => &[],
        }
    }

    /// Input hint shown in an empty input.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::Age => Some("18-100"),
            Field::Gender => Some("Select Gender"),
            Field::Race => Some("Select Race"),
            Field::Occupation => Some("Select Occupation"),
            Field::Height => Some("100-200"),
            Field::Weight => Some("30-150"),
            Field::SystolicBp => Some("90-200"),
            Field::DiastolicBp => Some("60-130"),
            Field::HeartRate => Some("40-200"),
            Field::SleepDuration => Some("0-24"),
            Field::SleepQuality => Some("1 (poor) - 10 (excellent)"),
            Field::DailySteps => Some("0-50,000"),
            Field::PhysicalActivityDuration => Some("0-300"),
            Field::PhysicalHealth | Field::MentalHealth => Some("1-30 days"),
            Field::StressLevel => Some("1 (no stress) - 10 (extreme)"),
            Field::UrineAlbuminCreatinineRatio => Some("0-3000"),
            Field::Stroke
            | Field::Diabetic
            | Field::Asthma
            | Field::KidneyDisease
            | Field::SkinCancer => None,
            _ => Some("Select"),
        }
    }

    /// The "What's this?" explanation for the field.
    pub fn description(&self) -> &'static str {
        match self {
            Field::Age => "Your current age in years",
            Field::Gender => "Biological sex assigned at birth",
            Field::Race => "Your racial or ethnic background",
            Field::Occupation => "Your current job or profession",
            Field::Height => "Your height measured in centimeters",
            Field::Weight => "Your body weight in kilograms",
            Field::SystolicBp => "Top blood pressure reading measurement",
            Field::DiastolicBp => "Bottom blood pressure reading measurement",
            Field::HeartRate => "Resting heart beats per minute",
            Field::SleepDuration => "Average hours of sleep nightly",
            Field::SleepQuality => {
                "Rate your sleep quality subjectively on a scale of 1 (extremely poor) to 10 (excellent)"
            }
            Field::DailySteps => "Average steps walked per day",
            Field::PhysicalActivity => "Do you exercise regularly weekly",
            Field::PhysicalActivityDuration => "Minutes of daily physical activity",
            Field::Smoking => "Current or past smoking habits",
            Field::AlcoholDrinking => "Regular alcohol consumption status currently",
            Field::PhysicalHealth => "Number of days you were unwell in the past month",
            Field::MentalHealth => "Number of days you were unwell in the past month",
            Field::StressLevel => {
                "Current perceived stress level rating on a scale of 1 (no stress) to 10 (extremely high stress)"
            }
            Field::GenHealth => "Overall self-assessment of health status",
            Field::DiffWalking => "Difficulty walking or climbing stairs",
            Field::Stroke => "History of stroke or TIA",
            Field::Diabetic => "Diabetes or pre-diabetes diagnosis status",
            Field::Asthma => "Current or past asthma diagnosis",
            Field::KidneyDisease => "Chronic kidney disease diagnosis history",
            Field::SkinCancer => "History of skin cancer diagnosis",
            Field::GoodCholesterol => "HDL cholesterol level category status",
            Field::UricAcidCategory => "Uric acid blood level category",
            Field::Albuminuria => "Protein presence in urine test",
            Field::UrineAlbuminCreatinineRatio => "Kidney function indicator ratio measurement",
            Field::TrigCategory => "Triglyceride blood level category status",
        }
    }

    /// Case-insensitive match of user input against the option list,
    /// returning the canonical spelling.
    pub fn match_option(&self, input: &str) -> Option<&'static str> {
        let trimmed = input.trim();
        self.options()
            .iter()
            .copied()
            .find(|opt| opt.eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Look up the description for a raw field key.
///
/// Unknown keys yield `None`; callers display the bare label instead.
pub fn describe(key: &str) -> Option<&'static str> {
    Field::from_key(key).map(|f| f.description())
}

/// Full registry entry for a field.
pub fn descriptor(field: Field) -> FieldDescriptor {
    FieldDescriptor {
        key: field.key(),
        label: field.label(),
        widget: field.widget().to_string(),
        section: field.section().title(),
        placeholder: field.placeholder(),
        options: field.options(),
        description: Some(field.description()),
    }
}
