#![cfg(feature = "hardware")]

//! Dump SIM network files, ICCID, device info and phonebook from a Galaxy
//! handset.
//!
//! Usage:
//!   cargo run -p galaxy-at --example sim_dump --features hardware -- [/dev/ttyACM0]
//!
//! Set `RUST_LOG=debug` to see every AT line.

use anyhow::Context;
use galaxy_at::prelude::*;
use galaxy_at::sim::Derived;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = SessionConfig::default().with_progress(true);
    if let Some(port) = std::env::args().nth(1) {
        config = config.with_port(port);
    }
    let trace = std::env::var_os("GALAXY_AT_TRACE").is_some();
    config = config.with_trace_io(trace);

    let mut modem = ModemBuilder::new()
        .with_config(config)
        .connect()
        .context("could not bring up the AT interface")?;

    for ef in modem.dump_network_info().context("network dump failed")? {
        println!("Dumping {} ({})", ef.name, ef.file);
        for field in &ef.fields {
            println!("  {:<30} {}", field.name, field.octets().join(" "));
            match &field.derived {
                Some(Derived::Imsi(imsi)) => {
                    println!("  {:<30} {} (MCC {})", "", imsi, imsi.mcc())
                }
                Some(Derived::Lai(lai)) => println!("  {:<30} {}", "", lai),
                Some(Derived::Iccid(iccid)) => println!("  {:<30} {}", "", iccid),
                None => {}
            }
        }
        println!();
    }

    let iccid = modem.read_iccid().context("ICCID read failed")?;
    println!("{:<32} {}", "ICCID", iccid.raw());
    println!("{:<32} {}", "", iccid.number());
    println!();

    let info = modem.device_info().context("+DEVCONINFO failed")?;
    for (key, value) in info.entries() {
        println!("{:<32} {}", key, value);
    }
    println!();

    for entry in modem.phonebook().context("phonebook read failed")? {
        println!(
            "Index:{}\tNumber:{:<15}\tType:{:<6}\tName:{}",
            entry.index, entry.number, entry.number_type, entry.name
        );
    }

    Ok(())
}
