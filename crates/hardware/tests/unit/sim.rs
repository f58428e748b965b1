//! Loader and driver-loop tests.

use crate::common::{encode_i, run_words, SYSCALL_WORD};
use mips_core::config::Config;
use mips_core::sim::{loader, Simulator};
use mips_core::isa::opcodes::OP_ADDIU;
use std::io::Write;

/// A binary image on disk round-trips through the loader into RAM as
/// big-endian words.
#[test]
fn loader_reads_big_endian_image() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    // addiu r1, r0, 5 ; syscall
    file.write_all(&[0x24, 0x01, 0x00, 0x05, 0x00, 0x00, 0x00, 0x0C])
        .expect("write image");

    let image = loader::load_binary(file.path().to_str().expect("utf-8 path"));
    assert_eq!(image.len(), 8);

    let config = Config::default();
    let mut sim = Simulator::new(&config);
    sim.bus.load_image(&image, 0);
    let code = sim.run().expect("program faulted");

    assert_eq!(code, 0);
    assert_eq!(sim.cpu.regs.read(1), 5);
    assert_eq!(sim.cpu.stats.instructions, 2);
}

/// A trailing partial word is zero-padded.
#[test]
fn loader_pads_partial_word() {
    let config = Config::default();
    let mut sim = Simulator::new(&config);
    sim.bus.load_image(&[0x24, 0x01], 0);
    use mips_core::soc::memory::WordMemory;
    assert_eq!(sim.bus.read(0), 0x2401_0000);
}

/// The retirement limit stops an endless run of NOPs.
#[test]
fn retirement_limit_stops_run() {
    let mut config = Config::default();
    config.general.max_instructions = 50;
    let mut sim = Simulator::new(&config);

    let code = sim.run().expect("run faulted");
    assert_eq!(code, 0);
    assert_eq!(sim.cpu.stats.instructions, 50);
    assert_eq!(sim.cpu.stats.nops, 50, "zeroed RAM decodes as NOPs");
}

/// The stack pointer starts below the reserved top of RAM, one carve-out
/// per core index.
#[test]
fn stack_pointer_placement() {
    let config = Config::default();
    let sim = Simulator::new(&config);
    assert_eq!(
        sim.cpu.regs.read(29),
        config.ram_end() - 1024,
        "core 0 sits right under the reserved area"
    );

    let mut second = Config::default();
    second.general.core_index = 1;
    let sim = Simulator::new(&second);
    assert_eq!(sim.cpu.regs.read(29), second.ram_end() - 1024 - 256 * 1024);
}

/// A JSON config overrides the defaults it names and leaves the rest.
#[test]
fn json_config_round_trip() {
    let config: Config = serde_json::from_str(
        r#"{ "pipeline": { "forwarding": true }, "general": { "max_instructions": 9 } }"#,
    )
    .expect("parse config");

    assert!(config.pipeline.forwarding);
    assert_eq!(config.general.max_instructions, 9);
    assert_eq!(config.memory.ram_words, 4 * 1024 * 1024, "default kept");

    let sim = run_words(
        &[encode_i(OP_ADDIU, 0, 1, 1), SYSCALL_WORD],
        &config,
    );
    assert_eq!(sim.cpu.regs.read(1), 1);
}
