pub mod activities;
pub mod awards;
pub mod categories;
pub mod certifications;
pub mod educations;
pub mod experiences;
pub mod home;
pub mod introduction;
pub mod json_error;
pub mod projects;
pub mod skills;
