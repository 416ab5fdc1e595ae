use colored::Colorize;
use idiom_demos::config::DemoConfig;
use idiom_demos::{generate_serial_number, Result};
use std::collections::BTreeSet;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<()> {
    pretty_env_logger::try_init_timed().ok();
    let config = DemoConfig::load()?;
    let workers = config.serial_workers;

    println!(
        "{}",
        format!("Issuing serial numbers from {} threads", workers).bold()
    );

    let (tx, rx) = mpsc::channel();
    let handles: Vec<_> = (0..workers)
        .map(|worker| {
            let tx = tx.clone();
            thread::spawn(move || {
                let serial = generate_serial_number();
                println!("  worker {:>3} -> {}", worker, serial);
                // receiver outlives every worker
                tx.send(serial).ok();
            })
        })
        .collect();
    drop(tx);

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("{}", "a worker thread panicked".red());
        }
    }

    let issued: BTreeSet<u64> = rx.iter().collect();
    let expected: BTreeSet<u64> = (0..workers as u64).collect();

    if issued == expected {
        println!(
            "{}",
            format!("✓ {} unique serial numbers, no gaps", issued.len()).green()
        );
    } else {
        println!(
            "{}",
            format!("✗ expected 0..{}, got {:?}", workers, issued).red()
        );
    }

    Ok(())
}
