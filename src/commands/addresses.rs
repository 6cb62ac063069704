use crate::address::{random_addr, Alignment};
use colored::Colorize;
use std::thread;
use std::time::Duration;

/// Print regenerated address frames on an increasing interval. One frame
/// per tick, four addresses per frame (one per alignment); the next tick
/// is scheduled before the sleep, and the loop tears down once the tick
/// budget runs out.
pub fn addresses(ticks: u32, start_interval_ms: u64) {
    let mut rng = rand::thread_rng();
    let mut interval_ms = start_interval_ms as f64;

    for tick in 0..ticks {
        println!("{}", format!("tick {}", tick + 1).dimmed());
        for align in Alignment::ALL {
            println!(
                "  align {}: {}",
                align.bytes(),
                random_addr(&mut rng, align).bright_cyan()
            );
        }

        if tick + 1 < ticks {
            let next = Duration::from_millis(interval_ms as u64);
            interval_ms *= 1.1;
            thread::sleep(next);
        }
    }
}
