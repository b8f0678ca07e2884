use generation_identifier::{
    BirthDateForm, FixedYear, Generation, Submission, SystemClock, current_year, is_valid_date,
};

fn submit(year: &str, month: &str, day: &str) -> Submission {
    BirthDateForm::new(year, month, day).submit(&SystemClock)
}

#[test]
fn gen_z_birth_date_shows_result() {
    let submission = submit("2005", "6", "15");
    let view = submission.result_view().expect("Gen Z result");
    assert_eq!(view.generation, Generation::GenZ);
    assert_eq!(view.headline, "You're Gen Z!");
    assert!(view.description.starts_with("Born between 1997 and 2012"));
    assert!(submission.notice().is_none());
}

#[test]
fn gen_alpha_birth_date_shows_result() {
    let submission = submit("2015", "1", "1");
    let view = submission.result_view().expect("Gen Alpha result");
    assert_eq!(view.generation, Generation::GenAlpha);
    assert_eq!(view.headline, "You're Gen Alpha!");
}

#[test]
fn older_birth_date_shows_notice_without_result() {
    let submission = submit("1990", "1", "1");
    assert!(submission.result_view().is_none());
    let notice = submission.notice().expect("notice");
    assert_eq!(notice.title, "Not Gen Z or Alpha");
    assert_eq!(
        notice.description,
        "Based on your birth date, you're not part of Generation Z or Alpha."
    );
}

#[test]
fn february_thirty_first_is_invalid() {
    for year in ["2005", "2020", "2021"] {
        let submission = submit(year, "2", "31");
        assert_eq!(
            submission.notice().map(|n| n.title),
            Some("Invalid Date"),
            "{year}-02-31"
        );
    }
}

#[test]
fn incomplete_or_garbled_input_is_invalid() {
    let cases = [
        ("", "6", "15"),
        ("2005", "", "15"),
        ("2005", "6", ""),
        ("two thousand", "6", "15"),
        ("2005", "June", "15"),
        ("1899", "12", "31"),
    ];
    for (year, month, day) in cases {
        let submission = submit(year, month, day);
        assert_eq!(
            submission.notice().map(|n| n.title),
            Some("Invalid Date"),
            "{year:?}/{month:?}/{day:?}"
        );
    }
}

#[test]
fn future_birth_year_is_invalid() {
    let next_year = (current_year() + 1).to_string();
    let submission = submit(&next_year, "1", "1");
    assert_eq!(submission.notice().map(|n| n.title), Some("Invalid Date"));
}

#[test]
fn boundary_years() {
    let now = FixedYear(2030);
    let cases = [
        ("1996", None),
        ("1997", Some(Generation::GenZ)),
        ("2012", Some(Generation::GenZ)),
        ("2013", Some(Generation::GenAlpha)),
        ("2030", Some(Generation::GenAlpha)),
    ];
    for (year, expected) in cases {
        let submission = BirthDateForm::new(year, "1", "1").submit(&now);
        assert_eq!(
            submission.result_view().map(|v| v.generation),
            expected,
            "{year}"
        );
    }
}

#[test]
fn validator_properties() {
    assert!(!is_valid_date(2021, 2, 29));
    assert!(is_valid_date(2020, 2, 29));
    assert!(!is_valid_date(2000, 4, 31));
    assert!(!is_valid_date(1899, 1, 1));
    assert!(!is_valid_date(i64::from(current_year()) + 1, 1, 1));
}
