mod domain;
mod infrastructure;
mod interfaces;
pub mod errors;
pub mod settings;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use infrastructure::{db, utils};
pub use interfaces::{handlers, middlewares, repositories, routes};

use repositories::sqlx_repo::{
    SqlxActivityRepo, SqlxAwardRepo, SqlxCategoryRepo, SqlxCertificationRepo, SqlxEducationRepo,
    SqlxIntroductionRepo, SqlxProjectRepo, SqlxSkillRepo, SqlxWorkExperienceRepo,
};
use use_cases::{
    activity::ActivityHandler, award::AwardHandler, category::CategoryHandler,
    certification::CertificationHandler, education::EducationHandler,
    introduction::IntroductionHandler, project::ProjectHandler, skill::SkillHandler,
    work_experience::WorkExperienceHandler,
};

pub struct AppState {
    pub activity_handler: AppActivityHandler,
    pub award_handler: AppAwardHandler,
    pub category_handler: AppCategoryHandler,
    pub certification_handler: AppCertificationHandler,
    pub education_handler: AppEducationHandler,
    pub introduction_handler: AppIntroductionHandler,
    pub project_handler: AppProjectHandler,
    pub skill_handler: AppSkillHandler,
    pub experience_handler: AppWorkExperienceHandler,
}

pub type AppActivityHandler = ActivityHandler<SqlxActivityRepo>;
pub type AppAwardHandler = AwardHandler<SqlxAwardRepo>;
pub type AppCategoryHandler = CategoryHandler<SqlxCategoryRepo, SqlxSkillRepo>;
pub type AppCertificationHandler = CertificationHandler<SqlxCertificationRepo>;
pub type AppEducationHandler = EducationHandler<SqlxEducationRepo>;
pub type AppIntroductionHandler = IntroductionHandler<SqlxIntroductionRepo>;
pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppSkillHandler = SkillHandler<SqlxSkillRepo, SqlxCategoryRepo>;
pub type AppWorkExperienceHandler = WorkExperienceHandler<SqlxWorkExperienceRepo>;

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        AppState {
            activity_handler: ActivityHandler::new(SqlxActivityRepo::new(pool.clone())),
            award_handler: AwardHandler::new(SqlxAwardRepo::new(pool.clone())),
            category_handler: CategoryHandler::new(
                SqlxCategoryRepo::new(pool.clone()),
                SqlxSkillRepo::new(pool.clone()),
            ),
            certification_handler: CertificationHandler::new(SqlxCertificationRepo::new(
                pool.clone(),
            )),
            education_handler: EducationHandler::new(SqlxEducationRepo::new(pool.clone())),
            introduction_handler: IntroductionHandler::new(SqlxIntroductionRepo::new(
                pool.clone(),
            )),
            project_handler: ProjectHandler::new(SqlxProjectRepo::new(pool.clone())),
            skill_handler: SkillHandler::new(
                SqlxSkillRepo::new(pool.clone()),
                SqlxCategoryRepo::new(pool.clone()),
            ),
            experience_handler: WorkExperienceHandler::new(SqlxWorkExperienceRepo::new(pool)),
        }
    }
}
