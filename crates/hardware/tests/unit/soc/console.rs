//! # Console Tests
//!
//! `PRN` output is verified both through the capture console and through a
//! mock that asserts the exact sequence of device calls.

use crate::common::builder::ProgramBuilder;
use crate::common::mocks::MockConsole;
use ls8_core::Cpu;
use ls8_core::common::ExecError;
use ls8_core::config::Config;
use ls8_core::soc::{CaptureConsole, Console};
use mockall::Sequence;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use std::io;

#[test]
fn test_capture_console_output_format() {
    let mut console = CaptureConsole::new();
    console.print_value(0).unwrap();
    console.print_value(255).unwrap();
    assert_eq!(console.values(), &[0, 255]);
    assert_eq!(console.output(), "0\n255\n");

    console.clear();
    assert_eq!(console.output(), "");
}

#[test]
fn test_prn_values_reach_device_in_order() {
    let mut console = MockConsole::new();
    let mut seq = Sequence::new();
    let _ = console
        .expect_print_value()
        .with(eq(3))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    let _ = console
        .expect_print_value()
        .with(eq(4))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    let _ = console
        .expect_flush()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));

    let prog = ProgramBuilder::new()
        .ldi(0, 3)
        .ldi(1, 4)
        .prn(0)
        .prn(1)
        .hlt()
        .build();
    let mut cpu = Cpu::with_console(&Config::default(), console);
    cpu.load(&prog).unwrap();
    cpu.run().unwrap();
}

#[test]
fn test_console_failure_stops_execution() {
    let mut console = MockConsole::new();
    let _ = console
        .expect_print_value()
        .times(1)
        .returning(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")));
    let _ = console.expect_flush().returning(|| Ok(()));

    let prog = ProgramBuilder::new().prn(0).prn(0).hlt().build();
    let mut cpu = Cpu::with_console(&Config::default(), console);
    cpu.load(&prog).unwrap();

    let err = cpu.run().unwrap_err();
    assert!(matches!(err, ExecError::Console(_)));
    assert_eq!(cpu.pc, 0);
}

#[test]
fn test_into_console_returns_output() {
    let prog = ProgramBuilder::new().ldi(0, 9).prn(0).hlt().build();
    let mut cpu = Cpu::with_console(&Config::default(), CaptureConsole::new());
    cpu.load(&prog).unwrap();
    cpu.run().unwrap();

    assert_eq!(cpu.into_console().output(), "9\n");
}
