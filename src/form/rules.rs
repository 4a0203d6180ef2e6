//! Declarative validation rules, one per field.

use super::field::Field;
use super::record::FormRecord;

/// When a field must be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    /// Required (and validated) only while `field` holds exactly `equals`.
    /// Otherwise the field is exempt even when filled.
    RequiredWhen { field: Field, equals: &'static str },
}

/// What a filled value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Inclusive numeric range
    Range { min: f64, max: f64 },
    /// Exact match against one of the listed values
    OneOf(&'static [&'static str]),
}

impl Constraint {
    /// Check a non-empty raw value.
    pub fn accepts(&self, raw: &str) -> bool {
        match self {
            Constraint::Range { min, max } => match parse_number(raw) {
                Some(n) => n >= *min && n <= *max,
                None => false,
            },
            Constraint::OneOf(values) => values.contains(&raw),
        }
    }
}

/// Value a field takes in the payload when it is empty or exempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankDefault {
    Empty,
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: Field,
    pub requirement: Requirement,
    pub constraint: Constraint,
    pub message: &'static str,
    pub blank_default: BlankDefault,
}

impl FieldRule {
    /// Whether the rule is in force for this record.
    pub fn applies(&self, record: &FormRecord) -> bool {
        match self.requirement {
            Requirement::RequiredWhen { field, equals } => record.get(field) == equals,
            Requirement::Required | Requirement::Optional => true,
        }
    }

    pub fn is_required(&self, record: &FormRecord) -> bool {
        match self.requirement {
            Requirement::Required => true,
            Requirement::Optional => false,
            Requirement::RequiredWhen { .. } => self.applies(record),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.constraint, Constraint::Range { .. })
    }

    /// Short human summary, used by the `fields` listing.
    pub fn summary(&self) -> String {
        let presence = match self.requirement {
            Requirement::Required => "required".to_string(),
            Requirement::Optional => "optional".to_string(),
            Requirement::RequiredWhen { field, equals } => {
                format!("required when {} = {}", field.key(), equals)
            }
        };
        match self.constraint {
            Constraint::Range { min, max } => format!("{}, {}..={}", presence, min, max),
            Constraint::OneOf(values) => format!("{}, one of {}", presence, values.join(" | ")),
        }
    }
}

/// Trimmed finite `f64`, or `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn required(field: Field, min: f64, max: f64, message: &'static str) -> FieldRule {
    FieldRule {
        field,
        requirement: Requirement::Required,
        constraint: Constraint::Range { min, max },
        message,
        blank_default: BlankDefault::Empty,
    }
}

fn required_choice(field: Field, message: &'static str) -> FieldRule {
    FieldRule {
        field,
        requirement: Requirement::Required,
        constraint: Constraint::OneOf(field.options()),
        message,
        blank_default: BlankDefault::Empty,
    }
}

fn optional_choice(field: Field, message: &'static str) -> FieldRule {
    FieldRule {
        requirement: Requirement::Optional,
        ..required_choice(field, message)
    }
}

/// The rule governing `field`.
pub fn rule_for(field: Field) -> FieldRule {
    match field {
        Field::Age => required(field, 18.0, 100.0, "Age must be between 18 and 100"),
        Field::Gender => required_choice(field, "Gender is required"),
        Field::Race => required_choice(field, "Race is required"),
        Field::Occupation => required_choice(field, "Occupation is required"),
        Field::Height => required(field, 100.0, 200.0, "Height must be between 100 and 200 cm"),
        Field::Weight => required(field, 30.0, 150.0, "Weight must be between 30 and 150 kg"),
        Field::SystolicBp => required(
            field,
            90.0,
            200.0,
            "Systolic BP must be between 90 and 200 mmHg",
        ),
        Field::DiastolicBp => required(
            field,
            60.0,
            130.0,
            "Diastolic BP must be between 60 and 130 mmHg",
        ),
        Field::HeartRate => required(
            field,
            40.0,
            200.0,
            "Heart Rate must be between 40 and 200 bpm",
        ),
        Field::SleepDuration => required(
            field,
            0.0,
            24.0,
            "Sleep Duration must be between 0 and 24 hours",
        ),
        Field::SleepQuality => required(field, 1.0, 10.0, "Sleep Quality must be between 1 and 10"),
        Field::DailySteps => required(
            field,
            0.0,
            50_000.0,
            "Daily Steps must be between 0 and 50,000",
        ),
        Field::PhysicalActivity => required_choice(field, "Physical Activity is required"),
        Field::PhysicalActivityDuration => FieldRule {
            field,
            requirement: Requirement::RequiredWhen {
                field: Field::PhysicalActivity,
                equals: "Yes",
            },
            constraint: Constraint::Range { min: 0.0, max: 300.0 },
            message: "Duration must be between 0 and 300 minutes",
            blank_default: BlankDefault::Zero,
        },
        Field::Smoking => required_choice(field, "Smoking status is required"),
        Field::AlcoholDrinking => required_choice(field, "Alcohol drinking status is required"),
        Field::PhysicalHealth => required(
            field,
            1.0,
            30.0,
            "Physical Health must be between 1 and 30",
        ),
        Field::MentalHealth => required(field, 1.0, 30.0, "Mental Health must be between 1 and 30"),
        Field::StressLevel => required(field, 1.0, 10.0, "Stress Level must be between 1 and 10"),
        Field::GenHealth => required_choice(field, "General Health is required"),
        Field::DiffWalking => required_choice(field, "Difficulty Walking status is required"),
        Field::Stroke => required_choice(field, "Stroke status is required"),
        Field::Diabetic => required_choice(field, "Diabetic status is required"),
        Field::Asthma => required_choice(field, "Asthma status is required"),
        Field::KidneyDisease => required_choice(field, "Kidney Disease status is required"),
        Field::SkinCancer => required_choice(field, "Skin Cancer status is required"),
        Field::GoodCholesterol => required_choice(field, "Good Cholesterol is required"),
        Field::UricAcidCategory => required_choice(field, "Uric Acid Category is required"),
        Field::Albuminuria => optional_choice(field, "Albuminuria must be Yes or No"),
        Field::UrineAlbuminCreatinineRatio => FieldRule {
            requirement: Requirement::Optional,
            ..required(
                field,
                0.0,
                3000.0,
                "Urine Albumin-Creatinine Ratio must be between 0 and 3000 mg/g",
            )
        },
        Field::TrigCategory => {
            optional_choice(field, "Triglyceride Category must be Normal or High")
        }
    }
}
