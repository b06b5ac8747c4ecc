pub mod calculator;
pub mod constants;

pub use calculator::{
    calculate_safety_score, ContaminationRisk, FactorScores, Grade, HandlingReport, SafetyScore,
    StorageReport,
};
