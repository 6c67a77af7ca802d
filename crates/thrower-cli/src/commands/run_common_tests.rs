use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use thrower_compiler::parse;
use thrower_core::{RunConfig, Value};
use indoc::indoc;
use thrower_vm::{Interpreter, ResolveError, StopClass};

use super::exit::Exit;
use super::run_common::{RunReport, execute, parse_program, run_program};
use super::selftest::SELFTEST_PROGRAM;

const TARGET: &str = "127.0.0.1:1053";

fn exec(source: &str, config: RunConfig) -> Exit {
    execute(source, "test.thr", TARGET, config, false, false)
}

#[test]
fn exit_codes() {
    let codes: Vec<_> = [
        Exit::Success,
        Exit::Failure,
        Exit::AssertionFailed,
        Exit::BudgetExceeded,
        Exit::Stopped,
        Exit::ParseError,
    ]
    .iter()
    .map(|e| e.code())
    .collect();

    assert_eq!(codes, vec![0, 1, 10, 11, 12, 13]);
}

#[test]
fn stop_classes_map_to_exits() {
    assert_eq!(Exit::from(StopClass::Budget), Exit::BudgetExceeded);
    assert_eq!(Exit::from(StopClass::Assertion), Exit::AssertionFailed);
    assert_eq!(Exit::from(StopClass::Stop), Exit::Stopped);
}

#[test]
fn panicking_command_exits_with_failure() {
    assert_eq!(Exit::guard(|| panic!("broken invariant")), Exit::Failure);
    assert_eq!(Exit::guard(|| Exit::Stopped), Exit::Stopped);
}

#[test]
fn successful_run() {
    assert_eq!(exec("sleep 1 store r0", RunConfig::new()), Exit::Success);
}

#[test]
fn json_report_run() {
    let exit = execute("sleep 2 store r4", "test.thr", TARGET, RunConfig::new(), true, false);
    assert_eq!(exit, Exit::Success);
}

#[test]
fn parse_error_exit() {
    assert_eq!(exec("load", RunConfig::new()), Exit::ParseError);
    assert_eq!(
        parse_program("repeat 1 {", "test.thr", false).unwrap_err(),
        Exit::ParseError
    );
}

#[test]
fn assertion_exit() {
    assert_eq!(
        exec("sleep 1 store r0 assert r0 == 2", RunConfig::new()),
        Exit::AssertionFailed
    );
}

#[test]
fn budget_exits() {
    assert_eq!(
        exec("sleep 1", RunConfig::new().compute(0)),
        Exit::BudgetExceeded
    );
    assert_eq!(
        exec("sleep 1", RunConfig::new().deadline(Duration::ZERO)),
        Exit::BudgetExceeded
    );
}

#[test]
fn stop_exits() {
    assert_eq!(exec("store r0", RunConfig::new()), Exit::Stopped);
    assert_eq!(exec("load r5", RunConfig::new()), Exit::Stopped);
    assert_eq!(exec("sleep -1", RunConfig::new()), Exit::Stopped);
}

#[test]
fn bad_target_is_checked_after_parse() {
    let run = |source| execute(source, "test.thr", "localhost", RunConfig::new(), false, false);

    assert_eq!(run("sleep 1"), Exit::Failure);
    assert_eq!(run("sleep"), Exit::ParseError);
}

#[test]
fn report_serializes_registers_in_order() {
    let one = Value::Int(1);
    let text = Value::from("a");
    let report = RunReport {
        result: Some(&one),
        last: Some(&one),
        registers: [("r2".to_owned(), &text), ("r10".to_owned(), &one)]
            .into_iter()
            .collect(),
        remaining_compute: 994,
    };

    insta::assert_snapshot!(serde_json::to_string(&report).unwrap(), @r#"{"result":1,"last":1,"registers":{"r10":1,"r2":"a"},"remaining_compute":994}"#);
}

#[test]
fn selftest_program_parses() {
    let program = parse(SELFTEST_PROGRAM).unwrap();

    insta::assert_snapshot!(program.printer().dump(), @r#"
    Program
      Sleep 500
      Repeat 2
        Resolve "foo"
        Store r1
        IfEq r1 "127.0.0.1"
          Resolve "bar"
          Store r2
          IfNe r2 "10.10.10.10"
            Sleep 10000
          IfEq r2 3
            Sleep 10000
          IfEq r2 r1
            Sleep 10000
          Resolve "bad"
          Store r2
          AssertEq r2 ""
        Load r1
        Store r2
    "#);
}

const SCENARIO: &str = indoc! {r#"
    sleep 500
    repeat 2 {
        resolve "foo"
        store r1
        if r1 == "127.0.0.1" {
            resolve "bar"
            store r2
            assert r2 == ""
        }
    }
"#};

/// Answers `foo` with loopback and `bar` with `bar_answer`; nothing else exists.
fn scenario_exit(bar_answer: Option<Ipv4Addr>) -> Exit {
    let resolver = move |qname: &str, _: Duration| -> Result<Ipv4Addr, ResolveError> {
        match qname {
            "foo.example.com." => Ok(Ipv4Addr::LOCALHOST),
            "bar.example.com." => bar_answer.ok_or(ResolveError::NoAnswer),
            _ => Err(ResolveError::NxDomain),
        }
    };
    let program = parse(SCENARIO).unwrap();

    run_program(
        Interpreter::builder(resolver),
        &program,
        SCENARIO,
        "scenario.thr",
        RunConfig::new().suffix(".example.com."),
        false,
        false,
    )
}

#[test]
fn scenario_with_empty_bar_succeeds_after_sleeping() {
    let start = Instant::now();

    assert_eq!(scenario_exit(None), Exit::Success);
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[test]
fn scenario_with_answering_bar_fails_assertion() {
    assert_eq!(
        scenario_exit(Some(Ipv4Addr::new(10, 10, 10, 10))),
        Exit::AssertionFailed
    );
}
