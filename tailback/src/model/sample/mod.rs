mod speed_sample;
mod speed_sample_extractor;

pub use speed_sample::SpeedSample;
pub use speed_sample_extractor::extract_speed_sample;
