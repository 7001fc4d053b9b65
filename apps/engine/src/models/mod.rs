pub mod analysis;
pub mod answer;
pub mod profile;
pub mod question;
