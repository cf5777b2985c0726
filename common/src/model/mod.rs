pub mod payment;
pub mod plagiarism;
pub mod plan;
