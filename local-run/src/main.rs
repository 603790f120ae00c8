use std::env;
use std::path::{Path, PathBuf};
use std::process::{self, Child, Command, Stdio};
use std::thread;
use std::time::Duration;

const USAGE: &str =
    "usage: cargo run -p local-run [--cpu] [--no-whisper] [--env=development|test|production]";

#[derive(Clone, Copy)]
struct ServiceSpec {
    name: &'static str,
    package: &'static str,
    bin: &'static str,
    working_dir: &'static str,
    port: u16,
    feature: Option<&'static str>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum WhisperBackend {
    Cuda,
    Cpu,
    Disabled,
}

impl WhisperBackend {
    fn feature(self) -> Option<&'static str> {
        match self {
            Self::Cuda => Some("whisper-cuda"),
            Self::Cpu => Some("whisper-runtime"),
            Self::Disabled => None,
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("local-run failed: {error}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut backend = WhisperBackend::Cuda;
    let mut run_env = "development".to_string();

    for arg in env::args().skip(1) {
        if arg == "--cpu" {
            if backend != WhisperBackend::Disabled {
                backend = WhisperBackend::Cpu;
            }
        } else if arg == "--no-whisper" {
            backend = WhisperBackend::Disabled;
        } else if let Some(value) = arg.strip_prefix("--env=") {
            run_env = value.to_string();
        } else {
            return Err(format!("unknown argument `{arg}`\n{USAGE}"));
        }
    }

    let repo_root = resolve_repo_root()?;
    let services = pipeline_services(backend);
    let names: Vec<&str> = services.iter().map(|service| service.bin).collect();
    kill_existing_processes(&names);

    let mut children = Vec::with_capacity(services.len());
    for service in services {
        let child = spawn_service(service, &repo_root, &run_env)?;
        println!(
            "started {} on :{} (pid={})",
            service.name,
            service.port,
            child.id()
        );
        children.push((service, child));
    }

    println!("pipeline started; press Ctrl+C to stop");
    monitor_children(&mut children)
}

// Downstream services first so the gateway finds them listening.
fn pipeline_services(backend: WhisperBackend) -> Vec<ServiceSpec> {
    vec![
        ServiceSpec {
            name: "media-processor",
            package: "media-setup",
            bin: "media-processor",
            working_dir: "media-processor",
            port: 8001,
            feature: backend.feature(),
        },
        ServiceSpec {
            name: "speech-synthesizer",
            package: "speech-setup",
            bin: "speech-synthesizer",
            working_dir: "speech-synthesizer",
            port: 8002,
            feature: None,
        },
        ServiceSpec {
            name: "gateway",
            package: "gateway-setup",
            bin: "gateway-service",
            working_dir: "gateway",
            port: 8000,
            feature: None,
        },
    ]
}

fn spawn_service(
    service: ServiceSpec,
    repo_root: &Path,
    run_env: &str,
) -> Result<Child, String> {
    let working_dir = repo_root.join(service.working_dir);
    let mut command = Command::new("cargo");
    command
        .arg("run")
        .arg("-p")
        .arg(service.package)
        .arg("--bin")
        .arg(service.bin);
    if let Some(feature) = service.feature {
        command.arg("--features").arg(feature);
    }
    command
        .current_dir(&working_dir)
        .env("RUN_ENV", run_env)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    command.spawn().map_err(|err| {
        format!(
            "could not start {} from `{}`: {err}",
            service.name,
            working_dir.display()
        )
    })
}

fn stop_all(children: &mut [(ServiceSpec, Child)], except: Option<usize>) {
    for (idx, (_, child)) in children.iter_mut().enumerate() {
        if Some(idx) != except {
            let _ = child.kill();
        }
    }
}

fn monitor_children(children: &mut [(ServiceSpec, Child)]) -> Result<(), String> {
    loop {
        for idx in 0..children.len() {
            let service_name = children[idx].0.name;
            let status = match children[idx].1.try_wait() {
                Ok(Some(status)) => status,
                Ok(None) => continue,
                Err(err) => {
                    stop_all(children, None);
                    return Err(format!("failed while monitoring {service_name}: {err}"));
                }
            };

            eprintln!("{service_name} exited with status {status}");
            stop_all(children, Some(idx));
            if status.success() {
                return Ok(());
            }
            return Err(format!("{service_name} exited unexpectedly"));
        }
        thread::sleep(Duration::from_millis(500));
    }
}

fn resolve_repo_root() -> Result<PathBuf, String> {
    let current_dir = env::current_dir().map_err(|err| format!("cannot read cwd: {err}"))?;
    if looks_like_repo_root(&current_dir) {
        return Ok(current_dir);
    }

    let manifest_parent = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(PathBuf::from)
        .ok_or_else(|| "could not infer repository root".to_string())?;
    if looks_like_repo_root(&manifest_parent) {
        return Ok(manifest_parent);
    }

    Err("local-run must be launched from the workspace root".to_string())
}

fn looks_like_repo_root(path: &Path) -> bool {
    path.join("Cargo.toml").is_file()
        && ["gateway", "media-processor", "speech-synthesizer"]
            .iter()
            .all(|dir| path.join(dir).is_dir())
}

#[cfg(target_os = "windows")]
fn kill_existing_processes(names: &[&str]) {
    for name in names {
        let exe_name = format!("{name}.exe");
        let _ = Command::new("taskkill")
            .arg("/IM")
            .arg(exe_name)
            .arg("/F")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    }
}

#[cfg(not(target_os = "windows"))]
fn kill_existing_processes(names: &[&str]) {
    for name in names {
        let _ = Command::new("pkill")
            .arg("-f")
            .arg(name)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    }
}
