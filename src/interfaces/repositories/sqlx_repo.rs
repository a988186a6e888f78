use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxActivityRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxAwardRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCategoryRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCertificationRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEducationRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxIntroductionRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxWorkExperienceRepo {
    pub pool: PgPool,
}
