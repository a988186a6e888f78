pub mod activity;
pub mod award;
pub mod category;
pub mod certification;
pub mod education;
pub mod introduction;
pub mod project;
pub mod skill;
pub mod sqlx_repo;
pub mod work_experience;
