use std::num::NonZeroU64;

use anyhow::{Context, Result};
use log::info;
use rand::prelude::*;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use sched_sim::{
    Fcfs, Policy, PreemptivePriority, Process, ProcessSpec, RoundRobin, RunMetrics, Sjf, Srtf,
    Timeline, reset_all,
};

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let quantum = NonZeroU64::new(2).context("quantum must be positive")?;
    let policies: Vec<Box<dyn Policy>> = vec![
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(RoundRobin::new(quantum)),
        Box::new(PreemptivePriority),
        Box::new(Srtf),
    ];

    let mut batch = bernoulli_batch(40, 0.3, 0.3, 2, 6, 0)
        .into_iter()
        .map(Process::try_from)
        .collect::<Result<Vec<_>, _>>()
        .context("workload contains a degenerate process")?;

    let mut stream = String::new();
    for policy in &policies {
        let stats = policy
            .run(&mut batch)
            .with_context(|| format!("{} run failed", policy.name()))?;
        let metrics = RunMetrics::compute(&batch, &stats)?;

        info!("{}:", policy.name());
        info!("  average turnaround time: {:.2}", metrics.avg_turnaround);
        info!("  average wait time: {:.2}", metrics.avg_wait);
        info!("  average response time: {:.2}", metrics.avg_response);
        info!("  CPU utilization: {:.2}%", metrics.utilization);

        stream.push_str(&format!("{}\n{}", policy.name(), Timeline::drain(&mut batch)));
        reset_all(&mut batch);
    }
    print!("{stream}");

    Ok(())
}

// Coin-flip arrivals per tick, short or long burst, fixed seed so repeated
// runs stay comparable.
fn bernoulli_batch(
    ticks: u64,
    p_arrival: f64,
    p_short: f64,
    short_burst: i64,
    long_burst: i64,
    seed: u64,
) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut specs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_burst
            } else {
                long_burst
            };

            specs.push(ProcessSpec {
                id: specs.len() as u32 + 1,
                arrival_time: t as i64,
                burst_time: burst,
                priority: rng.random_range(0..5),
            });
        }
    }

    specs
}
