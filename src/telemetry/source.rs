use std::{
    ffi::OsStr,
    fs::read_to_string,
    path::{Path, PathBuf},
    process::Command,
};

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, RefreshKind, System};

use crate::utils::{
    command::execute_command,
    env::{cpuinfo, daemon, hwmon, meminfo, pihole, thermalzone},
};

/// Raw OS reads behind the telemetry. Implementations return what the OS reports,
/// without interpretation; `None` means the source could not be read.
pub trait SystemSource {
    /// Content of the first temperature sensor source that exists.
    fn temperature_sensor(&self) -> Option<String>;
    fn load_average(&self) -> [f64; 3];
    /// Output of the logical processor count query.
    fn processor_count(&self) -> Option<String>;
    /// Processor listing used when the count query fails.
    fn cpu_info(&self) -> Option<String>;
    fn mem_info(&self) -> Option<String>;
    /// Process id of the daemon, 0 when not running.
    fn daemon_pid(&self) -> u32;
    /// First line printed by the daemon status query.
    fn service_status(&self) -> Option<String>;
    fn hostname(&self) -> Option<String>;
}

pub struct OsSource {
    pub sensors: Vec<PathBuf>,
    pub cpuinfo: PathBuf,
    pub meminfo: PathBuf,
    pub daemon: String,
    pub pihole: String,
}

impl Default for OsSource {
    fn default() -> Self {
        OsSource {
            sensors: vec![thermalzone(), hwmon()],
            cpuinfo: cpuinfo(),
            meminfo: meminfo(),
            daemon: daemon(),
            pihole: pihole(),
        }
    }
}

fn read_file(path: &Path) -> Option<String> {
    read_to_string(path)
        .inspect_err(|e| log::debug!("Could not read {}: {}", path.display(), e))
        .ok()
}

fn command_output(command: Command) -> Option<String> {
    execute_command(command)
        .inspect_err(|e| log::debug!("Command failed: {}", e))
        .ok()
}

impl SystemSource for OsSource {
    fn temperature_sensor(&self) -> Option<String> {
        self.sensors
            .iter()
            .find(|path| path.exists())
            .and_then(|path| read_file(path))
    }

    fn load_average(&self) -> [f64; 3] {
        let load = System::load_average();
        [load.one, load.five, load.fifteen]
    }

    fn processor_count(&self) -> Option<String> {
        command_output(Command::new("nproc"))
    }

    fn cpu_info(&self) -> Option<String> {
        read_file(&self.cpuinfo)
    }

    fn mem_info(&self) -> Option<String> {
        read_file(&self.meminfo)
    }

    fn daemon_pid(&self) -> u32 {
        let mut sys = System::new_with_specifics(
            RefreshKind::nothing().with_processes(ProcessRefreshKind::nothing()),
        );
        sys.refresh_processes(ProcessesToUpdate::All, true);
        let pid = sys
            .processes_by_exact_name(OsStr::new(&self.daemon))
            .map(|process| process.pid().as_u32())
            .next();
        pid.unwrap_or(0)
    }

    fn service_status(&self) -> Option<String> {
        let mut command = Command::new(&self.pihole);
        command.arg("status").arg("web");
        command_output(command).and_then(|output| output.lines().next().map(|s| s.to_string()))
    }

    fn hostname(&self) -> Option<String> {
        System::host_name()
    }
}
