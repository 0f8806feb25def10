//! snapstat - Main binary entry point

use snapstat::cli::args::{BackupArgs, Command, RestoreArgs, ShowArgs, parse_args};
use snapstat::cli::output::{format_backup_text, format_json, format_restore_text};
use snapstat::io::output::{read_backup_output, read_restore_output};
use snapstat::services::session::{BackupSession, RestoreSession};
use std::fs;
use std::process;

const DEFAULT_HOST: &str = "host-0";

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug snapstat backup ...
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            println!("snapstat {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let exit_code = match &cli_args.command {
        Command::Backup(backup_args) => handle_backup(backup_args),
        Command::Restore(restore_args) => handle_restore(restore_args),
        Command::Show(show_args) => handle_show(show_args),
    };

    process::exit(exit_code);
}

fn resolve_host(host: Option<&String>) -> String {
    host.cloned()
        .or_else(|| std::env::var("HOSTNAME").ok().filter(|h| !h.is_empty()))
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

fn read_capture(path: &str) -> Option<Vec<u8>> {
    match fs::read(path) {
        Ok(data) => Some(data),
        Err(e) => {
            eprintln!("Error: Failed to read {path}: {e}");
            None
        }
    }
}

fn handle_backup(args: &BackupArgs) -> i32 {
    let hostname = resolve_host(args.host.as_ref());
    let mut session = BackupSession::new();

    let mut outputs = Vec::with_capacity(args.snapshots.len());
    for capture in &args.snapshots {
        let Some(data) = read_capture(&capture.file) else {
            return 4;
        };
        outputs.push((capture.path.clone(), data));
    }

    if let Err(e) = session.add_host(&hostname, &outputs, args.duration_secs) {
        eprintln!("Error: Backup output for {hostname} could not be decoded: {e}");
    }

    if let Some(ref forget) = args.forget {
        let Some(data) = read_capture(forget) else {
            return 4;
        };
        if let Err(e) = session.apply_cleanup(&data) {
            eprintln!("Error: Invalid forget output in {forget}: {e}");
            return 4;
        }
    }

    if let Some(ref check) = args.check {
        let Some(data) = read_capture(check) else {
            return 4;
        };
        session.apply_check(&data);
    }

    if let Some(ref stats) = args.stats {
        let Some(data) = read_capture(stats) else {
            return 4;
        };
        if let Err(e) = session.apply_stats(&data) {
            eprintln!("Error: Invalid stats output in {stats}: {e}");
            return 4;
        }
    }

    let failed = session.has_failures();
    if let Err(e) = session.finish().write_output(&args.output) {
        eprintln!("Error: Failed to write {}: {e}", args.output);
        return 4;
    }

    if failed { 3 } else { 0 }
}

fn handle_restore(args: &RestoreArgs) -> i32 {
    let hostname = resolve_host(args.host.as_ref());
    let mut session = RestoreSession::new();

    match args.error.as_deref() {
        Some(error) => session.add_failed_host(&hostname, args.duration_secs, error),
        None => session.add_host(&hostname, args.duration_secs),
    }

    let failed = session.has_failures();
    if let Err(e) = session.finish().write_output(&args.output) {
        eprintln!("Error: Failed to write {}: {e}", args.output);
        return 4;
    }

    if failed { 3 } else { 0 }
}

fn handle_show(args: &ShowArgs) -> i32 {
    let rendered = if args.restore {
        read_restore_output(&args.file).map(|output| {
            if args.json {
                format_json(&output)
            } else {
                format_restore_text(&output)
            }
        })
    } else {
        read_backup_output(&args.file).map(|output| {
            if args.json {
                format_json(&output)
            } else {
                format_backup_text(&output)
            }
        })
    };

    match rendered {
        Ok(text) => {
            println!("{}", text.trim_end());
            0
        }
        Err(e) => {
            eprintln!("Error reading {}: {e}", args.file);
            4
        }
    }
}

fn print_help() {
    println!("snapstat - Extract statistics from backup tool output");
    println!();
    println!("USAGE:");
    println!("    snapstat backup --output <FILE> --snapshot <PATH>=<FILE>... [OPTIONS]");
    println!("    snapstat restore --output <FILE> [OPTIONS]");
    println!("    snapstat show <FILE> [--restore] [--json]");
    println!();
    println!("COMMANDS:");
    println!("    backup    Build a backup output file from captured command output");
    println!("    restore   Write a restore output file for one host");
    println!("    show      Print a previously written output file");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("BACKUP OPTIONS:");
    println!("    --output <FILE>           Where to write the JSON output (required)");
    println!("    --snapshot <PATH>=<FILE>  Backup output captured for a source path (repeatable)");
    println!("    --host <NAME>             Host name (default: $HOSTNAME or host-0)");
    println!("    --duration <SECS>         Total backup duration for the host");
    println!("    --forget <FILE>           Captured output of the forget command");
    println!("    --check <FILE>            Captured output of the check command");
    println!("    --stats <FILE>            Captured output of the stats command");
    println!();
    println!("RESTORE OPTIONS:");
    println!("    --output <FILE>           Where to write the JSON output (required)");
    println!("    --host <NAME>             Host name (default: $HOSTNAME or host-0)");
    println!("    --duration <SECS>         Restore duration");
    println!("    --error <MSG>             Mark the restore as failed with this message");
    println!();
    println!("EXIT CODES:");
    println!("    0  success    2  usage error    3  a host failed    4  I/O or decode error");
}
