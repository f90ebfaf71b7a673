//! # Output Sink Tests
//!
//! `PRN` output reaches the sink synchronously and in program order.

use mockall::Sequence;
use mockall::predicate::eq;
use vcpu8_core::core::Cpu;

use crate::common::builder::ProgramBuilder;
use crate::common::mocks::sink::MockSink;

#[test]
fn prn_values_arrive_in_execution_order() {
    let mut sink = MockSink::new();
    let mut seq = Sequence::new();
    for v in [3u8, 1, 2] {
        let _ = sink
            .expect_print_value()
            .with(eq(v))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }
    let _ = sink.expect_trace().never();

    let program = ProgramBuilder::new()
        .ldi(0, 3)
        .ldi(1, 1)
        .ldi(2, 2)
        .prn(0)
        .prn(1)
        .prn(2)
        .hlt();
    let mut cpu = Cpu::with_sink(sink);
    cpu.load_bytes(&program.build()).unwrap();
    cpu.run().unwrap();
    cpu.sink_mut().checkpoint();
}

#[test]
fn borrowed_sink_can_be_inspected_after_run() {
    let mut buffer = vcpu8_core::soc::BufferSink::new();
    {
        let mut cpu = Cpu::with_sink(&mut buffer);
        cpu.load_bytes(&ProgramBuilder::new().ldi(4, 9).prn(4).hlt().build())
            .unwrap();
        cpu.run().unwrap();
    }
    assert_eq!(buffer.values(), &[9]);
}
