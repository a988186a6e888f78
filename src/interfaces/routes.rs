use actix_web::web;

use crate::handlers::{
    activities, awards, categories, certifications, educations, experiences, home, introduction,
    json_error, projects, skills,
};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::home);

    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/activities")
                    .service(activities::list_activities)
                    .service(activities::create_activity)
                    .service(activities::update_activity)
                    .service(activities::delete_activity),
            )
            .service(
                web::scope("/awards")
                    .service(awards::list_awards)
                    .service(awards::create_award)
                    .service(awards::update_award)
                    .service(awards::delete_award),
            )
            .service(
                web::scope("/categories")
                    .service(categories::list_categories)
                    .service(categories::create_category)
                    .service(categories::update_category)
                    .service(categories::delete_category),
            )
            .service(
                web::scope("/certifications")
                    .service(certifications::list_certifications)
                    .service(certifications::create_certification)
                    .service(certifications::update_certification)
                    .service(certifications::delete_certification),
            )
            .service(
                web::scope("/educations")
                    .service(educations::list_educations)
                    .service(educations::create_education)
                    .service(educations::update_education)
                    .service(educations::delete_education),
            )
            .service(
                web::scope("/introduction")
                    .service(introduction::get_introduction)
                    .service(introduction::update_introduction),
            )
            .service(
                web::scope("/projects")
                    .service(projects::list_projects)
                    .service(projects::create_project)
                    .service(projects::get_project)
                    .service(projects::update_project)
                    .service(projects::delete_project),
            )
            .service(
                web::scope("/skills")
                    .service(skills::list_skills)
                    .service(skills::create_skill)
                    .service(skills::update_skill)
                    .service(skills::delete_skill),
            )
            .service(
                web::scope("/experiences")
                    .service(experiences::list_experiences)
                    .service(experiences::create_experience)
                    .service(experiences::get_experience)
                    .service(experiences::update_experience)
                    .service(experiences::delete_experience),
            ),
    );

    cfg.configure(json_error::config_routes);
}
