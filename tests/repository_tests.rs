//! Store and end-to-end tests against a real Postgres.
//!
//! Run with `APP_TEST_DATABASE_URL=... cargo test -- --ignored --test-threads=1`.

mod test_utils;

use resume_profile_api::{
    db::seed::seed_profile,
    entities::{profile::UpdateProfileRequest, seed::SeedData, skill::SkillSummary},
    errors::AppError,
    repositories::profile::ProfileRepository,
};
use serde_json::json;
use test_utils::{TestApp, PROFILE_ID};

const REQUIRES_DB: &str = "requires Postgres at APP_TEST_DATABASE_URL";

#[actix_web::test]
#[ignore = "requires Postgres at APP_TEST_DATABASE_URL"]
async fn top_skills_are_sorted_stably_and_limited() {
    let app = TestApp::spawn().await;
    app.insert_profile("Alex Doe").await;
    for (name, proficiency) in [("C++", 4), ("Rust", 5), ("SQL", 4), ("Git", 5), ("Go", 3), ("Linux", 4), ("HTML", 2)] {
        app.insert_skill(name, proficiency).await;
    }

    let skills = app.repo().get_top_skills(PROFILE_ID, 5).await.expect(REQUIRES_DB);

    assert_eq!(
        skills,
        vec![
            SkillSummary::new("Rust", 5),
            SkillSummary::new("Git", 5),
            SkillSummary::new("C++", 4),
            SkillSummary::new("SQL", 4),
            SkillSummary::new("Linux", 4),
        ]
    );
}

#[actix_web::test]
#[ignore = "requires Postgres at APP_TEST_DATABASE_URL"]
async fn projects_by_skill_follow_the_association_exactly() {
    let app = TestApp::spawn().await;
    app.insert_profile("Alex Doe").await;
    let js = app.insert_skill("JavaScript", 5).await;
    app.insert_skill("SQL", 4).await;
    let forum = app.insert_project("Forum", "Discussion board", None).await;
    app.insert_project("Demo", "Unlinked project", None).await;
    app.link_project_skill(forum, js).await;

    let repo = app.repo();
    let linked = repo.get_projects_by_skill_name(PROFILE_ID, "JavaScript").await.unwrap();
    let wrong_case = repo.get_projects_by_skill_name(PROFILE_ID, "javascript").await.unwrap();
    let unlinked = repo.get_projects_by_skill_name(PROFILE_ID, "SQL").await.unwrap();

    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].title, "Forum");
    assert!(wrong_case.is_empty());
    assert!(unlinked.is_empty());
}

#[actix_web::test]
#[ignore = "requires Postgres at APP_TEST_DATABASE_URL"]
async fn substring_search_is_case_insensitive_and_literal() {
    let app = TestApp::spawn().await;
    app.insert_profile("Alex Doe").await;
    app.insert_skill("JavaScript", 5).await;
    app.insert_skill("SQL", 4).await;
    app.insert_project("Demo", "Coverage at 100% for the parser", None).await;
    app.insert_work("Example Software Ltd", "Intern", "Wrote TypeScript tooling").await;

    let repo = app.repo();
    let skills = repo.search_skills(PROFILE_ID, "script").await.unwrap();
    let work = repo.search_work(PROFILE_ID, "SCRIPT").await.unwrap();
    let percent = repo.search_projects(PROFILE_ID, "100%").await.unwrap();
    let wildcard = repo.search_projects(PROFILE_ID, "%").await.unwrap();
    let underscore = repo.search_skills(PROFILE_ID, "_").await.unwrap();

    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].name, "JavaScript");
    assert_eq!(work.len(), 1);
    assert_eq!(percent.len(), 1);
    assert_eq!(wildcard.len(), 1);
    assert!(underscore.is_empty());
}

#[actix_web::test]
#[ignore = "requires Postgres at APP_TEST_DATABASE_URL"]
async fn update_refreshes_timestamp_and_reports_missing_rows() {
    let app = TestApp::spawn().await;
    app.insert_profile("Alex Doe").await;
    let repo = app.repo();
    let before = repo.get_profile(PROFILE_ID).await.unwrap().unwrap();

    let missing = repo.update_profile(PROFILE_ID + 1, &UpdateProfileRequest::default()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
    let untouched = repo.get_profile(PROFILE_ID).await.unwrap().unwrap();
    assert_eq!(untouched.updated_at, before.updated_at);

    let update = UpdateProfileRequest {
        name: Some("Alex Q. Doe".into()),
        email: None,
        education: Some("M.Sc.".into()),
    };
    let updated_at = repo.update_profile(PROFILE_ID, &update).await.unwrap();
    let after = repo.get_profile(PROFILE_ID).await.unwrap().unwrap();

    assert!(updated_at >= before.updated_at);
    assert_eq!(after.updated_at, updated_at);
    assert_eq!(after.name.as_deref(), Some("Alex Q. Doe"));
    assert!(after.email.is_none());
}

#[actix_web::test]
#[ignore = "requires Postgres at APP_TEST_DATABASE_URL"]
async fn http_scenario_over_postgres() {
    let app = TestApp::spawn().await;
    app.insert_profile("Alex Doe").await;
    app.insert_skill("JavaScript", 5).await;
    app.insert_skill("SQL", 4).await;
    app.insert_project("Demo", "A demo", None).await;

    let (status, top) = app.get_json("/api/skills/top").await;
    assert!(status.is_success());
    assert_eq!(top, json!([{"name": "JavaScript", "proficiency": 5}, {"name": "SQL", "proficiency": 4}]));

    let (_, filtered) = app.get_json("/api/projects?skill=JavaScript").await;
    assert_eq!(filtered, json!([]));

    let (_, search) = app.get_json("/api/search?q=java").await;
    assert_eq!(search["projects"], json!([]));
    assert_eq!(search["work"], json!([]));
    assert_eq!(search["skills"][0]["name"], "JavaScript");

    let (_, profile) = app.get_json("/api/profile").await;
    assert_eq!(profile["links"], json!({}));
    assert_eq!(profile["projects"][0]["links"], json!([]));
}

#[actix_web::test]
#[ignore = "requires Postgres at APP_TEST_DATABASE_URL"]
async fn seeding_twice_replaces_instead_of_duplicating() {
    let app = TestApp::spawn().await;
    let data = SeedData::from_json(include_str!("../seed/profile.json")).unwrap();

    seed_profile(&app.db_pool, PROFILE_ID, &data).await.unwrap();
    let summary = seed_profile(&app.db_pool, PROFILE_ID, &data).await.unwrap();

    let repo = app.repo();
    assert_eq!(repo.get_skills(PROFILE_ID).await.unwrap().len(), data.skills.len());
    assert_eq!(repo.get_projects(PROFILE_ID).await.unwrap().len(), summary.projects);
    assert!(repo.get_links(PROFILE_ID).await.unwrap().is_some());

    let react = repo.get_projects_by_skill_name(PROFILE_ID, "React.js").await.unwrap();
    assert_eq!(react.len(), 2);
}
