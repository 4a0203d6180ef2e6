//! Canned records shared by unit and integration tests.

use super::field::Field;
use super::record::FormRecord;

/// A record that satisfies every rule, with all optional fields blank.
pub fn reference_record() -> FormRecord {
    [
        (Field::Age, "45"),
        (Field::Gender, "Male"),
        (Field::Race, "Asian"),
        (Field::Occupation, "Teacher"),
        (Field::Height, "170"),
        (Field::Weight, "70"),
        (Field::SystolicBp, "120"),
        (Field::DiastolicBp, "80"),
        (Field::HeartRate, "70"),
        (Field::SleepDuration, "7"),
        (Field::SleepQuality, "8"),
        (Field::DailySteps, "5000"),
        (Field::PhysicalActivity, "Yes"),
        (Field::PhysicalActivityDuration, "30"),
        (Field::Smoking, "No"),
        (Field::AlcoholDrinking, "No"),
        (Field::PhysicalHealth, "2"),
        (Field::MentalHealth, "2"),
        (Field::StressLevel, "3"),
        (Field::GenHealth, "Good"),
        (Field::DiffWalking, "No"),
        (Field::Stroke, "No"),
        (Field::Diabetic, "No"),
        (Field::Asthma, "No"),
        (Field::KidneyDisease, "No"),
        (Field::SkinCancer, "No"),
        (Field::GoodCholesterol, "Normal"),
        (Field::UricAcidCategory, "Normal"),
    ]
    .into_iter()
    .fold(FormRecord::new(), |record, (field, value)| {
        record.with_value(field, value)
    })
}
