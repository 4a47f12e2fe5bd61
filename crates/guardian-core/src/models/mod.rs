pub mod confidence;
pub mod features;
pub mod gap;
pub mod maturity;
pub mod pattern;
pub mod risk;
pub mod scores;
pub mod verification;

pub use confidence::Confidence;
pub use features::FeatureVector;
pub use gap::GapReport;
pub use maturity::{MaturityDistribution, MaturityLevel, MaturityObservation};
pub use pattern::{
    AuthorRule, CorrectionRule, LearnedPattern, OrganizationRule, PatternRecord, PatternType,
    PatternUpsert, TitleRule, TopicRule,
};
pub use risk::RiskAssessment;
pub use scores::ComprehensiveScores;
pub use verification::{
    CorrectionKind, CorrectionRequest, EventUpsert, FieldCorrection, Metadata, VerificationEvent,
};
