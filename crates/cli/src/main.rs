//! DDR5 controller simulator CLI.
//!
//! This binary provides a single entry point for driving the controller. It performs:
//! 1. **Interactive mode:** A prompt accepting read/write/step/auto/status commands (default).
//! 2. **Script mode:** Execute the same commands from a file, one per line.
//! 3. **Configuration:** Optional JSON config for phase timing and auto-run pacing.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::{fs, process, thread};

use ddr5_core::common::OpKind;
use ddr5_core::ctrl::{State, StepReport};
use ddr5_core::{AutoRun, Config, Controller};

#[derive(Parser, Debug)]
#[command(
    name = "ddr5sim",
    author,
    version,
    about = "Educational DDR5 memory-controller simulator",
    long_about = "Step a simplified DDR5 controller FSM through ACTIVATE/READ/WRITE/PRECHARGE\nagainst an in-memory store.\n\nConfiguration is JSON (timing + pacing); defaults apply when no file is given.\n\nExamples:\n  ddr5sim\n  ddr5sim --config timing.json\n  ddr5sim run demo.txt"
)]
struct Cli {
    /// JSON configuration file (phase timing and auto-run interval).
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a command script: one interactive command per line, `#` comments.
    Run {
        /// Script path (e.g. demos/write_read.txt).
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let mut session = Session::new(&config);

    match cli.command {
        Some(Commands::Run { path }) => session.run_script(&path),
        None => session.repl(),
    }
}

/// Loads the JSON config file, or the defaults when no path is given.
///
/// Exits the process with code 1 on a missing file or malformed JSON.
fn load_config(path: Option<&str>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path, e);
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {}", path, e);
        process::exit(1);
    })
}

/// One simulator session: the controller, its pacer, and the event log.
struct Session {
    ctrl: Controller,
    pacer: AutoRun,
    log: Vec<String>,
}

impl Session {
    fn new(config: &Config) -> Self {
        Self {
            ctrl: Controller::new(config),
            pacer: AutoRun::new(config.sim.auto_step_interval_ms),
            log: Vec::new(),
        }
    }

    /// Interactive prompt; returns on `quit` or end of input.
    fn repl(&mut self) {
        println!("DDR5 controller simulator — 'help' lists commands");
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("ddr5> ");
            if io::stdout().flush().is_err() {
                break;
            }
            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            if self.dispatch(line.trim()) {
                break;
            }
        }
    }

    /// Executes a command script; each line is echoed before it runs.
    fn run_script(&mut self, path: &str) {
        let text = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading script {}: {}", path, e);
            process::exit(1);
        });
        for raw in text.lines() {
            let cmd = raw.trim();
            if cmd.is_empty() || cmd.starts_with('#') {
                continue;
            }
            println!("ddr5> {cmd}");
            if self.dispatch(cmd) {
                break;
            }
        }
    }

    /// Runs one command line; returns true when the session should end.
    fn dispatch(&mut self, line: &str) -> bool {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = tokens.split_first() else {
            return false;
        };
        match cmd {
            "read" => self.cmd_request(args, OpKind::Read),
            "write" => self.cmd_request(args, OpKind::Write),
            "step" => self.cmd_step(args),
            "auto" => self.cmd_auto(),
            "status" => self.cmd_status(),
            "mem" => self.cmd_mem(),
            "trace" => self.cmd_trace(),
            "stats" => self.ctrl.stats().print(),
            "reset" => self.cmd_reset(),
            "export" => self.cmd_export(args),
            "help" => print_help(),
            "quit" | "exit" => return true,
            other => self.out(&format!("error: unknown command {other:?} (try 'help')")),
        }
        false
    }

    /// Logs an event line and echoes it to stdout.
    fn out(&mut self, line: &str) {
        println!("{line}");
        self.log.push(line.to_owned());
    }

    fn cmd_request(&mut self, args: &[&str], op: OpKind) {
        let Some(&addr) = args.first() else {
            self.out("error: usage: read <addr-hex> | write <addr-hex> <data-hex>");
            return;
        };
        let data = args.get(1).copied();
        match self.ctrl.start_request(addr, op, data) {
            Ok(()) => {
                let line = match op {
                    OpKind::Write => format!(
                        "starting WRITE request at address 0x{} with data 0x{}",
                        addr,
                        data.unwrap_or("0")
                    ),
                    OpKind::Read => format!("starting READ request at address 0x{addr}"),
                };
                self.out(&line);
            }
            Err(e) => self.out(&format!("error: {e}")),
        }
    }

    fn cmd_step(&mut self, args: &[&str]) {
        let count: u64 = match args.first().map(|s| s.parse::<u64>()) {
            None => 1,
            Some(Ok(n)) => n,
            Some(Err(_)) => {
                self.out("error: usage: step [count]");
                return;
            }
        };
        for _ in 0..count {
            let busy = self.ctrl.is_busy();
            let report = self.ctrl.step();
            self.report_line(busy, &report);
        }
    }

    fn cmd_auto(&mut self) {
        if !self.ctrl.is_busy() {
            self.out("error: start a request first");
            return;
        }
        self.pacer.arm();
        while let Some(report) = self.pacer.tick(&mut self.ctrl) {
            self.report_line(true, &report);
            if self.pacer.is_active() && self.ctrl.is_busy() {
                thread::sleep(self.pacer.interval());
            }
        }
    }

    fn cmd_status(&mut self) {
        let status = self.ctrl.status();
        println!("state       : {}", status.state);
        println!("timer       : {}", status.timer);
        println!("chip_select : {}", status.chip_select);
        println!("data_bus    : {}", status.data_bus);
        println!("strobe      : {}", status.strobe);
        println!("command     : {:#06x}", status.command);
        println!("output      : {:016x}", status.last_output);
        println!("completed   : {}", u8::from(status.completed));
        println!("ready       : {}", u8::from(status.ready));
    }

    fn cmd_mem(&mut self) {
        let entries = self.ctrl.store_snapshot();
        if entries.is_empty() {
            println!("(store empty)");
            return;
        }
        println!("store contents ({} entries):", entries.len());
        for (key, value) in entries {
            println!("  {key:<16} {value:#018x}");
        }
    }

    /// Renders the signal trace as a three-row waveform, one column per
    /// recorded sample: chip-select level, bus driven/released, strobe.
    fn cmd_trace(&mut self) {
        let trace = self.ctrl.signal_trace();
        if trace.is_empty() {
            println!("(no samples yet)");
            return;
        }
        let mut cs = String::new();
        let mut dq = String::new();
        let mut dqs = String::new();
        for sample in trace.iter() {
            cs.push(if sample.chip_select.is_asserted() { '_' } else { '-' });
            dq.push(if sample.data_bus.value().is_some() { '#' } else { 'Z' });
            dqs.push(if sample.strobe.is_toggling() { 'S' } else { 'Z' });
        }
        println!("cs  : {cs}");
        println!("dq  : {dq}");
        println!("dqs : {dqs}");
        println!("      ({} samples, oldest first)", trace.len());
    }

    fn cmd_reset(&mut self) {
        self.pacer.cancel();
        self.ctrl.reset();
        self.out("simulation reset");
    }

    fn cmd_export(&mut self, args: &[&str]) {
        let path = args.first().copied().unwrap_or("simulation_log.txt");
        let mut text = self.log.join("\n");
        text.push('\n');
        match fs::write(path, text) {
            Ok(()) => self.out(&format!("log exported to {path}")),
            Err(e) => self.out(&format!("error: writing {path}: {e}")),
        }
    }

    /// Formats one step outcome the way the event log reads.
    fn report_line(&mut self, was_busy: bool, report: &StepReport) {
        let line = if let Some(remaining) = report.cycles_remaining {
            format!(
                "state {}: waiting {} cycles for {}",
                report.state,
                remaining,
                latency_name(report.state)
            )
        } else if report.completed {
            let value = report.bus_value.unwrap_or(0);
            format!(
                "state {}: data {:#018x} on bus, request complete",
                report.state, value
            )
        } else if report.state == State::Idle {
            if was_busy {
                "state IDLE: bank precharged, controller ready".to_owned()
            } else {
                "state IDLE: waiting for a request".to_owned()
            }
        } else {
            format!("state {}: command issued", report.state)
        };
        self.out(&line);
    }
}

/// Timing-parameter name for each cycle-gated state.
fn latency_name(state: State) -> &'static str {
    match state {
        State::Activate => "tRCD",
        State::Read => "tCL",
        State::Write => "tWR",
        State::Precharge => "tRP",
        State::Idle => "-",
    }
}

fn print_help() {
    println!("commands:");
    println!("  read <addr-hex>               start a READ request (max 8 hex digits)");
    println!("  write <addr-hex> <data-hex>   start a WRITE request (max 16 data digits)");
    println!("  step [count]                  advance the controller by one or more cycles");
    println!("  auto                          step on the configured cadence until idle");
    println!("  status                        show state, timer, signals, and flags");
    println!("  mem                           show store contents in key order");
    println!("  trace                         show the recent signal waveform");
    println!("  stats                         show cycle and request counters");
    println!("  reset                         clear controller, store, trace, and stats");
    println!("  export [path]                 write the event log to a file");
    println!("  quit                          leave the simulator");
}
