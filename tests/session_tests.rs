mod common;
use common::{approx, station_a, station_b};
use std::io::Cursor;
use workpulse::cli::repl::{Repl, ReplCommand};
use workpulse::config::Config;
use workpulse::core::presenter::classify;
use workpulse::core::session::Session;
use workpulse::core::store::SessionStore;
use workpulse::errors::{AppError, ValidationError};
use workpulse::export::ExportFormat;
use workpulse::models::{Field, Tier};

#[test]
fn test_submit_commits_and_clears_draft() {
    let mut session = Session::new();
    session.load_draft(station_a());

    let id = session.submit().expect("accepted").id();

    assert_eq!(id, 1);
    assert!(session.draft().is_blank());
    assert_eq!(session.records().len(), 1);
}

#[test]
fn test_rejected_submit_keeps_draft_and_store() {
    let mut session = Session::new();
    session.load_draft(station_a());
    session.set_field(Field::Downtime, "9");

    let err = session.submit().unwrap_err();

    assert_eq!(err, ValidationError::DowntimeExceedsHours);
    assert_eq!(session.draft().get(Field::Downtime), "9");
    assert_eq!(session.draft().get(Field::Name), "Station A");
    assert!(session.records().is_empty());

    // Fix the one field and resubmit.
    session.set_field(Field::Downtime, "1");
    assert!(session.submit().is_ok());
}

#[test]
fn test_injected_store_is_used() {
    let mut session = Session::with_store(SessionStore::new());
    session.load_draft(station_b());
    session.submit().expect("accepted");

    assert_eq!(session.store().len(), 1);
    assert!(approx(session.average_efficiency(), 63.5));
}

#[test]
fn test_delete() {
    let mut session = Session::new();
    session.load_draft(station_a());
    let id = session.submit().expect("accepted").id();

    assert!(!session.delete(id + 1));
    assert!(session.delete(id));
    assert!(session.records().is_empty());
    assert_eq!(session.average_efficiency(), 0.0);
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(classify(0.0), Tier::Low);
    assert_eq!(classify(59.9), Tier::Low);
    assert_eq!(classify(60.0), Tier::Medium);
    assert_eq!(classify(79.9), Tier::Medium);
    assert_eq!(classify(80.0), Tier::High);
    assert_eq!(classify(100.0), Tier::High);
}

#[test]
fn test_parse_commands() {
    assert_eq!(
        ReplCommand::parse("set name Assembly Line 3").unwrap(),
        ReplCommand::Set(Field::Name, "Assembly Line 3".into())
    );
    assert_eq!(
        ReplCommand::parse("  SET quality 95 ").unwrap(),
        ReplCommand::Set(Field::QualityScore, "95".into())
    );
    assert_eq!(ReplCommand::parse("del #4").unwrap(), ReplCommand::Delete(4));
    assert_eq!(ReplCommand::parse("").unwrap(), ReplCommand::Empty);
    assert_eq!(ReplCommand::parse("exit").unwrap(), ReplCommand::Quit);
    assert_eq!(
        ReplCommand::parse("export json out.json -f").unwrap(),
        ReplCommand::Export {
            format: Some(ExportFormat::Json),
            file: "out.json".into(),
            force: true,
        }
    );
    assert_eq!(
        ReplCommand::parse("export out.csv").unwrap(),
        ReplCommand::Export {
            format: None,
            file: "out.csv".into(),
            force: false,
        }
    );
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        ReplCommand::parse("frobnicate"),
        Err(AppError::UnknownCommand(_))
    ));
    assert!(matches!(
        ReplCommand::parse("set colour red"),
        Err(AppError::InvalidField(_))
    ));
    assert!(matches!(
        ReplCommand::parse("del abc"),
        Err(AppError::InvalidId(_))
    ));
    assert!(matches!(ReplCommand::parse("del"), Err(AppError::Usage(_))));
    assert!(matches!(
        ReplCommand::parse("export xml out.xml"),
        Err(AppError::InvalidExportFormat(_))
    ));
}

#[test]
fn test_repl_runs_a_scripted_session() {
    let script = "\
set name Line 1
set tasks 8
set total 10
set hours 8
set downtime 9
set quality 90
submit
set downtime 1
submit
add
Line 2
5
10
8
2
70
del 1
bogus command
list
";
    let cfg = Config::default();
    let mut session = Session::new();
    Repl::new(Cursor::new(script), &mut session, &cfg, false, false)
        .run()
        .expect("session runs");

    let names: Vec<&str> = session.records().iter().map(|r| r.name()).collect();
    assert_eq!(names, ["Line 2"]);
    assert_eq!(session.records()[0].id(), 2);
    assert!(approx(session.average_efficiency(), 63.5));
}

#[test]
fn test_repl_stops_at_quit() {
    let script = "add\nA\n8\n10\n8\n1\n90\nquit\nadd\nB\n5\n10\n8\n2\n70\n";
    let cfg = Config::default();
    let mut session = Session::new();
    Repl::new(Cursor::new(script), &mut session, &cfg, false, false)
        .run()
        .expect("session runs");

    assert_eq!(session.records().len(), 1);
}

#[test]
fn test_repl_delete_confirmation() {
    let cfg = Config {
        confirm_delete: true,
        ..Config::default()
    };
    let script = "add\nA\n8\n10\n8\n1\n90\ndel 1\nn\ndel 1\ny\n";
    let mut session = Session::new();
    Repl::new(Cursor::new(script), &mut session, &cfg, false, false)
        .run()
        .expect("session runs");

    assert!(session.records().is_empty());
}

#[test]
fn test_add_with_early_end_of_input_keeps_partial_draft() {
    let cfg = Config::default();
    let mut session = Session::new();
    Repl::new(Cursor::new("add\nHalf\n3\n"), &mut session, &cfg, false, false)
        .run()
        .expect("session runs");

    assert!(session.records().is_empty());
    assert_eq!(session.draft().get(Field::Name), "Half");
    assert_eq!(session.draft().get(Field::TasksCompleted), "3");
}
