//! # Fatal Error Tests
//!
//! Every runtime error stops the run at the failing step without mutating state.

use pretty_assertions::assert_eq;
use vcpu8_core::common::{AccessType, AddressError, DecodeError, RuntimeError};
use vcpu8_core::core::RunState;
use vcpu8_core::isa::opcodes::{HLT, LDI};

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn unknown_opcode_halts_run_without_mutation() {
    let program = ProgramBuilder::new().ldi(0, 5).raw(&[0b1111_1111, 1, 2]).ldi(0, 6);
    let mut ctx = TestContext::new().load_program(program);

    let err = ctx.run().unwrap_err();
    assert_eq!(
        err,
        RuntimeError::Decode(DecodeError::UnknownOpcode {
            opcode: 0xFF,
            pc: 3
        })
    );

    let regs = ctx.cpu.regs.clone();
    let ram = ctx.cpu.ram;
    assert_eq!(ctx.cpu.pc, 3);
    assert_eq!(ctx.get_reg(0), 5);
    assert_eq!(ctx.cpu.state, RunState::Running);

    // Stepping again reports the same error and still changes nothing.
    assert_eq!(ctx.cpu.step().unwrap_err(), err);
    assert_eq!(ctx.cpu.regs, regs);
    assert_eq!(ctx.cpu.ram, ram);
    assert_eq!(ctx.cpu.pc, 3);
}

#[test]
fn zeroed_memory_is_not_executable() {
    let mut ctx = TestContext::new();
    assert!(matches!(
        ctx.run(),
        Err(RuntimeError::Decode(DecodeError::UnknownOpcode { opcode: 0, pc: 0 }))
    ));
}

#[test]
fn register_operand_out_of_range() {
    let mut ctx = TestContext::new().load_program(ProgramBuilder::new().prn(8).hlt());
    assert_eq!(
        ctx.run().unwrap_err(),
        RuntimeError::Decode(DecodeError::InvalidRegister { index: 8, pc: 0 })
    );
    assert!(ctx.output().is_empty());
}

#[test]
fn running_off_the_end_of_memory() {
    let program = ProgramBuilder::new().org(253).ldi(0, 1);
    let mut ctx = TestContext::new().load_program(program);
    ctx.cpu.pc = 253;

    assert_eq!(
        ctx.run().unwrap_err(),
        RuntimeError::Address(AddressError {
            address: 256,
            access: AccessType::Fetch
        })
    );
    assert_eq!(ctx.get_reg(0), 1);
    assert_eq!(ctx.cpu.pc, 256);
}

#[test]
fn operand_fetch_past_memory_is_an_address_error() {
    let mut ctx = TestContext::new();
    ctx.cpu.ram[255] = HLT;
    ctx.cpu.pc = 255;
    assert_eq!(
        ctx.run().unwrap_err(),
        RuntimeError::Address(AddressError {
            address: 256,
            access: AccessType::Operand
        })
    );
    assert!(!ctx.cpu.is_halted());
}

#[test]
fn jump_target_with_truncated_instruction() {
    let mut ctx = TestContext::new().load_program(ProgramBuilder::new().ldi(0, 254).jmp(0));
    ctx.cpu.ram[254] = LDI;
    assert_eq!(
        ctx.run().unwrap_err(),
        RuntimeError::Address(AddressError {
            address: 256,
            access: AccessType::Operand
        })
    );
    assert_eq!(ctx.cpu.pc, 254);
}

#[test]
fn errors_render_readably() {
    let err = RuntimeError::from(DecodeError::UnknownOpcode { opcode: 3, pc: 16 });
    assert_eq!(err.to_string(), "unknown opcode 0b00000011 at 0x10");

    let err = RuntimeError::from(AddressError {
        address: 256,
        access: AccessType::Operand,
    });
    assert_eq!(err.to_string(), "operand fetch at address 0x100 is outside memory");
}
