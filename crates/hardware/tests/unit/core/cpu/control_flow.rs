//! # Control Flow Tests
//!
//! CMP and the three jumps, including the sticky equal flag.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

/// `LDI R0,a; LDI R1,b; LDI R2,0x40; CMP R0,R1; <jump> R2` with the jump at address 12.
fn compare_then(a: u8, b: u8, jump: fn(ProgramBuilder) -> ProgramBuilder) -> TestContext {
    let program = ProgramBuilder::new().ldi(0, a).ldi(1, b).ldi(2, 0x40).cmp(0, 1);
    let mut ctx = TestContext::new().load_program(jump(program));
    let _ = ctx.step_n(5);
    ctx
}

#[rstest]
#[case::jeq_taken(5, 5, |p: ProgramBuilder| p.jeq(2), 0x40)]
#[case::jeq_not_taken(5, 6, |p: ProgramBuilder| p.jeq(2), 14)]
#[case::jne_taken(5, 6, |p: ProgramBuilder| p.jne(2), 0x40)]
#[case::jne_not_taken(5, 5, |p: ProgramBuilder| p.jne(2), 14)]
fn conditional_jumps(
    #[case] a: u8,
    #[case] b: u8,
    #[case] jump: fn(ProgramBuilder) -> ProgramBuilder,
    #[case] expected_pc: usize,
) {
    let ctx = compare_then(a, b, jump);
    assert_eq!(ctx.cpu.pc, expected_pc);
}

#[test]
fn cmp_sets_equal_bit_only() {
    let ctx = compare_then(9, 9, |p| p.hlt());
    assert_eq!(ctx.cpu.fl, 0b0000_0001);
    assert!(ctx.cpu.equal_flag());
}

#[test]
fn equal_flag_is_sticky_across_unequal_compare() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 1)
        .ldi(2, 2)
        .cmp(0, 1)
        .cmp(0, 2)
        .hlt();
    let mut ctx = TestContext::new().load_program(program);
    ctx.run().unwrap();
    assert!(ctx.cpu.equal_flag(), "unequal CMP must not clear the flag");
}

#[test]
fn jmp_is_unconditional() {
    // 0: LDI R0,8  3: JMP R0  5: PRN R0  7: HLT  8: LDI R1,1  11: PRN R1  13: HLT
    let program = ProgramBuilder::new()
        .ldi(0, 8)
        .jmp(0)
        .prn(0)
        .hlt()
        .ldi(1, 1)
        .prn(1)
        .hlt();
    let mut ctx = TestContext::new().load_program(program);
    ctx.run().unwrap();
    assert_eq!(ctx.output(), &[1]);
}

#[test]
fn countdown_loop_terminates() {
    // R0 counts from 0 up to 3, printing each value.
    // 0: LDI R1,1  3: LDI R2,3  6: LDI R3,loop(9)  9: ADD R0,R1  12: PRN R0
    // 14: CMP R0,R2  17: LDI R4,end(24)  20: JEQ R4  22: JMP R3  24: HLT
    let program = ProgramBuilder::new()
        .ldi(1, 1)
        .ldi(2, 3)
        .ldi(3, 9)
        .add(0, 1)
        .prn(0)
        .cmp(0, 2)
        .ldi(4, 24)
        .jeq(4)
        .jmp(3)
        .hlt();
    let mut ctx = TestContext::new().load_program(program);
    ctx.run().unwrap();
    assert_eq!(ctx.output(), &[1, 2, 3]);
    assert_eq!(ctx.cpu.pc, 25);
}
