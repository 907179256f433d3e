mod speed_analysis_result;
mod speed_analyzer;

pub use speed_analysis_result::{LowSpeedAnalysis, SpeedAnalysisResult};
pub use speed_analyzer::SpeedAnalyzer;
