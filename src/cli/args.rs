//! CLI argument parsing

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Backup(BackupArgs),
    Restore(RestoreArgs),
    Show(ShowArgs),
}

/// A source path and the file holding the captured backup output for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotCapture {
    pub path: String,
    pub file: String,
}

#[derive(Debug, Clone, Default)]
pub struct BackupArgs {
    pub output: String,
    pub host: Option<String>,
    pub snapshots: Vec<SnapshotCapture>,
    pub duration_secs: u64,
    pub forget: Option<String>,
    pub check: Option<String>,
    pub stats: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RestoreArgs {
    pub output: String,
    pub host: Option<String>,
    pub duration_secs: u64,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ShowArgs {
    pub file: String,
    pub restore: bool,
    pub json: bool,
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    let command = match args[1].as_str() {
        "backup" => Command::Backup(parse_backup_args(&args[2..])?),
        "restore" => Command::Restore(parse_restore_args(&args[2..])?),
        "show" => Command::Show(parse_show_args(&args[2..])?),
        _ => return Err(format!("Unknown command: {}", args[1])),
    };

    Ok(CliArgs { command })
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_duration(value: &str) -> Result<u64, String> {
    value
        .parse()
        .map_err(|_| "--duration must be a whole number of seconds".to_string())
}

fn parse_snapshot_capture(value: &str) -> Result<SnapshotCapture, String> {
    match value.split_once('=') {
        Some((path, file)) if !path.is_empty() && !file.is_empty() => Ok(SnapshotCapture {
            path: path.to_string(),
            file: file.to_string(),
        }),
        _ => Err(format!("--snapshot expects <PATH>=<FILE>, got: {value}")),
    }
}

fn parse_backup_args(args: &[String]) -> Result<BackupArgs, String> {
    let mut backup_args = BackupArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                backup_args.output = next_value(args, &mut i, "--output")?.to_string();
            }
            "--host" => {
                backup_args.host = Some(next_value(args, &mut i, "--host")?.to_string());
            }
            "--snapshot" => {
                let value = next_value(args, &mut i, "--snapshot")?;
                backup_args.snapshots.push(parse_snapshot_capture(value)?);
            }
            "--duration" => {
                backup_args.duration_secs = parse_duration(next_value(args, &mut i, "--duration")?)?;
            }
            "--forget" => {
                backup_args.forget = Some(next_value(args, &mut i, "--forget")?.to_string());
            }
            "--check" => {
                backup_args.check = Some(next_value(args, &mut i, "--check")?.to_string());
            }
            "--stats" => {
                backup_args.stats = Some(next_value(args, &mut i, "--stats")?.to_string());
            }
            arg if !arg.starts_with("--") => {
                return Err(format!("Unexpected argument: {arg}"));
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if backup_args.output.is_empty() {
        return Err("Missing required option: --output".to_string());
    }
    if backup_args.snapshots.is_empty() {
        return Err("At least one --snapshot <PATH>=<FILE> is required".to_string());
    }

    Ok(backup_args)
}

fn parse_restore_args(args: &[String]) -> Result<RestoreArgs, String> {
    let mut restore_args = RestoreArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                restore_args.output = next_value(args, &mut i, "--output")?.to_string();
            }
            "--host" => {
                restore_args.host = Some(next_value(args, &mut i, "--host")?.to_string());
            }
            "--duration" => {
                restore_args.duration_secs =
                    parse_duration(next_value(args, &mut i, "--duration")?)?;
            }
            "--error" => {
                restore_args.error = Some(next_value(args, &mut i, "--error")?.to_string());
            }
            arg if !arg.starts_with("--") => {
                return Err(format!("Unexpected argument: {arg}"));
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if restore_args.output.is_empty() {
        return Err("Missing required option: --output".to_string());
    }

    Ok(restore_args)
}

fn parse_show_args(args: &[String]) -> Result<ShowArgs, String> {
    let mut file = String::new();
    let mut restore = false;
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--restore" => restore = true,
            "--json" => json = true,
            arg if !arg.starts_with("--") => {
                if file.is_empty() {
                    file = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {arg}")),
        }
    }

    if file.is_empty() {
        return Err("Missing required argument: FILE".to_string());
    }

    Ok(ShowArgs {
        file,
        restore,
        json,
    })
}
