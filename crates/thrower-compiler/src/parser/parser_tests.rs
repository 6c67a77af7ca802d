use indoc::indoc;

use super::{Parser, lex, parse};
use crate::Error;
use crate::parser::ast::{InstructionKind, Operand};

fn dump(input: &str) -> String {
    parse(input).expect("parses").printer().dump()
}

fn errors(input: &str) -> String {
    let err = parse(input).expect_err("should fail");
    err.diagnostics().expect("has diagnostics").to_string()
}

#[test]
fn full_program() {
    let input = indoc! {r#"
        sleep 500
        repeat 2 {
          resolve "foo"
          store r0
          if r0 == "127.0.0.1" {
            resolve "bar"
          }
        }
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Program
      Sleep 500
      Repeat 2
        Resolve "foo"
        Store r0
        IfEq r0 "127.0.0.1"
          Resolve "bar"
    "#);
}

#[test]
fn every_instruction_kind() {
    let input = indoc! {r#"
        resolve r1
        resolve 42
        load r2
        if r2 != -7 { sleep 0 }
        assert r2 == "x"
        assert r2 != r3
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Program
      Resolve r1
      Resolve 42
      Load r2
      IfNe r2 -7
        Sleep 0
      AssertEq r2 "x"
      AssertNe r2 r3
    "#);
}

#[test]
fn lines_are_one_based() {
    let input = "resolve r1\n\n# comment\nassert r1 != 2";

    let program = parse(input).unwrap();
    insta::assert_snapshot!(program.printer().with_lines(true).dump(), @r"
    Program @1
      Resolve r1 @1
      AssertNe r1 2 @4
    ");
}

#[test]
fn spans_cover_operands() {
    let program = parse("load r0\nstore r12").unwrap();

    insta::assert_snapshot!(program.printer().with_spans(true).dump(), @r"
    Program [0..17]
      Load r0 [0..7]
      Store r12 [8..17]
    ");
}

#[test]
fn colored_dump_marks_roles() {
    let program = parse(r#"sleep 5 store r1 resolve "a""#).unwrap();

    let dump = program.printer().colored(true).with_lines(true).dump();
    let expected = concat!(
        "\x1b[1;34mProgram\x1b[0m \x1b[2m@1\x1b[0m\n",
        "  \x1b[1;34mSleep\x1b[0m \x1b[32m5\x1b[0m \x1b[2m@1\x1b[0m\n",
        "  \x1b[1;34mStore\x1b[0m \x1b[35mr1\x1b[0m \x1b[2m@1\x1b[0m\n",
        "  \x1b[1;34mResolve\x1b[0m \x1b[32m\"a\"\x1b[0m \x1b[2m@1\x1b[0m\n",
    );
    assert_eq!(dump, expected);
    assert_eq!(program.printer().colored(false).dump(), program.printer().dump());
}

#[test]
fn trivia_does_not_change_tree() {
    let compact = "repeat 3 { resolve \"a\" store r1 }";
    let spread = indoc! {r#"
        # leading comment
        repeat 3 {   # trailing comment
            resolve    "a"

            store r1
        }
    "#};

    assert_eq!(dump(compact), dump(spread));
}

#[test]
fn string_literal_stops_at_next_quote() {
    let program = parse(r#"resolve "a" resolve "b""#).unwrap();

    assert_eq!(program.body.instructions.len(), 2);
    let InstructionKind::Resolve(Operand::Str(lit)) = &program.body.instructions[0].kind else {
        panic!("expected a string operand");
    };
    assert_eq!(lit.value, "a");
}

#[test]
fn register_zero_and_max() {
    insta::assert_snapshot!(dump("load r0 store r4294967295"), @r"
    Program
      Load r0
      Store r4294967295
    ");
}

#[test]
fn error_empty_program() {
    insta::assert_snapshot!(errors(""), @"error at 0..0: program must contain at least one instruction");
}

#[test]
fn error_comment_only_program() {
    insta::assert_snapshot!(
        errors("# just a comment\n"),
        @"error at 17..17: program must contain at least one instruction"
    );
}

#[test]
fn error_empty_block() {
    insta::assert_snapshot!(
        errors("repeat 1 { }"),
        @"error at 9..12: block must contain at least one instruction"
    );
}

#[test]
fn error_unclosed_block() {
    insta::assert_snapshot!(
        errors(r#"repeat 2 { resolve "a""#),
        @"error at 22..22: missing closing `}` (related: block opened here at 9..10)"
    );
}

#[test]
fn error_unmatched_brace() {
    insta::assert_snapshot!(errors("sleep 1 }"), @"error at 8..9: unmatched `}`");
}

#[test]
fn error_expected_register() {
    insta::assert_snapshot!(
        errors("load q1"),
        @"error at 5..6: expected a register: found unrecognized input `q`"
    );
    insta::assert_snapshot!(errors("store"), @"error at 5..5: expected a register: found end of input");
}

#[test]
fn error_expected_register_index() {
    insta::assert_snapshot!(
        errors(r#"load r "x""#),
        @r#"error at 7..10: expected a register index: found string `"x"`"#
    );
}

#[test]
fn error_expected_integer() {
    insta::assert_snapshot!(
        errors("sleep"),
        @"error at 5..5: expected an integer: after `sleep`, found end of input"
    );
    insta::assert_snapshot!(
        errors("repeat r1 { sleep 1 }"),
        @"error at 7..8: expected an integer: after `repeat`, found `r`"
    );
}

#[test]
fn error_expected_operand() {
    insta::assert_snapshot!(
        errors("resolve sleep"),
        @"error at 8..13: expected a register or literal: found keyword `sleep`"
    );
}

#[test]
fn error_expected_comparison() {
    insta::assert_snapshot!(
        errors("if r0 < 1 { sleep 1 }"),
        @"error at 6..7: expected `==` or `!=`: found unrecognized input `<`"
    );
}

#[test]
fn error_expected_block() {
    insta::assert_snapshot!(
        errors(r#"if r0 == 1 resolve "x""#),
        @"error at 11..18: expected `{`: found keyword `resolve`"
    );
}

#[test]
fn error_expected_instruction() {
    insta::assert_snapshot!(
        errors("== 1"),
        @"error at 0..2: expected an instruction: found `==`"
    );
}

#[test]
fn error_unrecognized_input() {
    insta::assert_snapshot!(errors("xyz"), @"error at 0..3: unexpected token: unrecognized input `xyz`");
}

#[test]
fn error_register_index_out_of_range() {
    insta::assert_snapshot!(
        errors("load r4294967296"),
        @"error at 5..16: invalid register index: `4294967296` is not in 0..=4294967295"
    );
    insta::assert_snapshot!(
        errors("load r-1"),
        @"error at 5..8: invalid register index: `-1` is not in 0..=4294967295"
    );
}

#[test]
fn error_integer_out_of_range() {
    insta::assert_snapshot!(
        errors("sleep 99999999999999999999"),
        @"error at 6..26: integer literal out of range: `99999999999999999999` does not fit in 64 bits"
    );
}

#[test]
fn first_error_stops_parse() {
    let err = parse("load q1\nstore").unwrap_err();
    assert_eq!(err.diagnostics().unwrap().len(), 1);
}

#[test]
fn recursion_limit_is_fatal() {
    let input = "repeat 1 { repeat 1 { repeat 1 { sleep 1 } } }";

    let err = Parser::new(input, lex(input))
        .with_recursion_fuel(Some(2))
        .parse()
        .unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));
    assert!(err.diagnostics().is_none());

    let ok = Parser::new(input, lex(input)).with_recursion_fuel(Some(3)).parse();
    assert!(ok.is_ok());
}

#[test]
fn default_limit_allows_moderate_nesting() {
    let depth = 100;
    let input = format!(
        "{}sleep 1{}",
        "repeat 1 { ".repeat(depth),
        " }".repeat(depth)
    );

    assert!(parse(&input).is_ok());
}
