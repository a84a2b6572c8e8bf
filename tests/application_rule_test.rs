use chrono::{DateTime, Duration, TimeZone, Utc};
use mongodb::bson::oid::ObjectId;

use jobboard_backend::error::Error;
use jobboard_backend::models::user::{Application, User};
use jobboard_backend::services::application_service::{check_application, DAILY_APPLICATION_LIMIT};

fn user_with_applications(applications: Vec<Application>) -> User {
    User {
        id: Some(ObjectId::new()),
        first_name: "Alice".into(),
        last_name: "Smith".into(),
        email: "alice@example.com".into(),
        password_hash: "$argon2id$test".into(),
        vacancies: applications,
        created_at: Utc::now(),
    }
}

fn applied(vacancy_id: ObjectId, at: DateTime<Utc>) -> Application {
    Application {
        vacancy_id,
        applied_at: at,
    }
}

fn conflict_message(err: Error) -> String {
    match err {
        Error::Conflict(msg) => msg,
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[test]
fn first_application_passes() {
    let user = user_with_applications(Vec::new());
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 9, 0, 0).unwrap();
    assert!(check_application(&user, &ObjectId::new(), now).is_ok());
}

#[test]
fn duplicate_vacancy_is_rejected() {
    let vacancy = ObjectId::new();
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 9, 5, 0).unwrap();
    let user = user_with_applications(vec![applied(vacancy, now - Duration::minutes(5))]);

    let err = check_application(&user, &vacancy, now).unwrap_err();
    assert_eq!(conflict_message(err), "User already apply to this vacancy");
}

#[test]
fn duplicate_wins_over_daily_cap() {
    // A re-application is reported as a duplicate even when the cap is also
    // reached.
    let vacancy = ObjectId::new();
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
    let mut applications = vec![applied(vacancy, now - Duration::hours(1))];
    for _ in 0..DAILY_APPLICATION_LIMIT {
        applications.push(applied(ObjectId::new(), now - Duration::hours(2)));
    }
    let user = user_with_applications(applications);

    let err = check_application(&user, &vacancy, now).unwrap_err();
    assert_eq!(conflict_message(err), "User already apply to this vacancy");
}

#[test]
fn fourth_application_today_hits_the_cap() {
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 17, 30, 0).unwrap();
    let applications = (0..DAILY_APPLICATION_LIMIT)
        .map(|i| applied(ObjectId::new(), now - Duration::hours(i as i64 + 1)))
        .collect();
    let user = user_with_applications(applications);

    let err = check_application(&user, &ObjectId::new(), now).unwrap_err();
    assert_eq!(
        conflict_message(err),
        "Candidates cannot apply for more than three jobs per day"
    );
}

#[test]
fn cap_resets_after_day_rollover() {
    let yesterday_evening = Utc.with_ymd_and_hms(2026, 8, 29, 21, 0, 0).unwrap();
    let applications = (0..DAILY_APPLICATION_LIMIT)
        .map(|i| applied(ObjectId::new(), yesterday_evening + Duration::minutes(i as i64)))
        .collect();
    let user = user_with_applications(applications);

    // A minute past midnight the same user may apply again.
    let shortly_after_midnight = Utc.with_ymd_and_hms(2026, 8, 30, 0, 1, 0).unwrap();
    assert!(check_application(&user, &ObjectId::new(), shortly_after_midnight).is_ok());
}

#[test]
fn old_applications_do_not_count_toward_the_cap() {
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 10, 0, 0).unwrap();
    let mut applications: Vec<Application> = (0..10)
        .map(|i| applied(ObjectId::new(), now - Duration::days(i + 1)))
        .collect();
    applications.push(applied(ObjectId::new(), now - Duration::hours(1)));
    let user = user_with_applications(applications);

    assert!(check_application(&user, &ObjectId::new(), now).is_ok());
}

#[test]
fn one_day_application_scenario() {
    // U applies to V1 at 09:00, V1 again at 09:05, then V2, V3, V4.
    let v1 = ObjectId::new();
    let v2 = ObjectId::new();
    let v3 = ObjectId::new();
    let v4 = ObjectId::new();
    let at = |h, m| Utc.with_ymd_and_hms(2026, 8, 30, h, m, 0).unwrap();

    let mut user = user_with_applications(Vec::new());

    check_application(&user, &v1, at(9, 0)).expect("V1 first application");
    user.vacancies.push(applied(v1, at(9, 0)));

    let err = check_application(&user, &v1, at(9, 5)).unwrap_err();
    assert_eq!(conflict_message(err), "User already apply to this vacancy");

    check_application(&user, &v2, at(10, 0)).expect("V2 application");
    user.vacancies.push(applied(v2, at(10, 0)));

    check_application(&user, &v3, at(11, 0)).expect("V3 application");
    user.vacancies.push(applied(v3, at(11, 0)));

    let err = check_application(&user, &v4, at(12, 0)).unwrap_err();
    assert_eq!(
        conflict_message(err),
        "Candidates cannot apply for more than three jobs per day"
    );
}
