// Exit status and output of the programs for help, bad parameters,
// runtime errors and termination signals
use std::process::Command;

const PROGRAMS: [&str; 6] = [
    env!("CARGO_BIN_EXE_hello_world_publisher"),
    env!("CARGO_BIN_EXE_hello_world_subscriber"),
    env!("CARGO_BIN_EXE_temperature_publisher"),
    env!("CARGO_BIN_EXE_temperature_subscriber"),
    env!("CARGO_BIN_EXE_tempering_application"),
    env!("CARGO_BIN_EXE_monitoring_ctrl_application"),
];

#[test]
fn test_help_exits_successfully() {
    for program in PROGRAMS {
        let output = Command::new(program).arg("--help").output().unwrap();
        assert!(output.status.success(), "{} --help failed", program);
        let usage = String::from_utf8_lossy(&output.stdout);
        assert!(usage.contains("--domain"), "{}", usage);
        assert!(usage.contains("--sample-count"), "{}", usage);
        assert!(usage.contains("--verbosity"), "{}", usage);
    }
}

#[test]
fn test_bad_parameter_fails() {
    for program in PROGRAMS {
        let status = Command::new(program).arg("--no-such-flag").status().unwrap();
        assert_eq!(status.code(), Some(1), "{}", program);
    }
}

#[test]
fn test_verbosity_out_of_range_fails() {
    let status = Command::new(PROGRAMS[0]).args(["-v", "9"]).status().unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_sensor_programs_list_sensor_id() {
    for program in [PROGRAMS[2], PROGRAMS[4]] {
        let output = Command::new(program).arg("--help").output().unwrap();
        assert!(String::from_utf8_lossy(&output.stdout).contains("--sensor-id"), "{}", program);
    }
}

#[test]
fn test_missing_config_file_fails() {
    let status = Command::new(PROGRAMS[0])
        .args(["--config", "/nonexistent/hello_bus.toml", "-s", "1"])
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_failure_reported_on_stderr_with_logging_off() {
    let output = Command::new(PROGRAMS[5])
        .args(["--config", "/nonexistent/hello_bus.toml"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Exception in monitoring_ctrl_application"), "{}", stderr);
    assert!(stderr.contains("loading configuration"), "{}", stderr);
}

#[cfg(unix)]
#[test]
fn test_sigint_ends_unbounded_publisher() {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "listen = [\"tcp/127.0.0.1:0\"]").unwrap();
    writeln!(config, "multicast_scouting = false").unwrap();
    config.flush().unwrap();

    let mut child = Command::new(PROGRAMS[0])
        .args(["-s", "0", "--config"])
        .arg(config.path())
        .env("RUST_LOG", "off")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut first = String::new();
    stdout.read_line(&mut first).unwrap();
    assert_eq!(first.trim_end(), "Writing HelloMessage, count 0");

    // The publisher is now in its 4 s wait after the first sample
    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT).unwrap();

    let deadline = Instant::now() + Duration::from_secs(3);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().ok();
            panic!("publisher still running after SIGINT");
        }
        std::thread::sleep(Duration::from_millis(20));
    };

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    assert!(status.success(), "{:?}", status);
    assert!(rest.contains("preparing to shut down..."), "{}", rest);
}
