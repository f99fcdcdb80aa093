pub mod github;
pub mod job;
pub mod linkedin;
