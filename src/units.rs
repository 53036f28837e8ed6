//! Systemd unit file rendering
//!
//! Pure text generation: one service unit per standalone monitor and a
//! oneshot starter unit that starts and stops all of them.

use std::path::Path;

use crate::domain::merge::{
    EffectiveConfig, JAVA, JAVA_DEFAULTS, SPM_HOME, SPM_MONITOR_JAR, SPM_MONITOR_JMX_PARAMS,
    SPM_MONITOR_STANDALONE_CLASS, SPM_MONITOR_USER,
};

/// Unit pattern matching every generated monitor unit.
pub const MONITOR_UNIT_GLOB: &str = "spm-monitor*-config*";

pub fn monitor_unit(name: &str, properties_path: &Path, env: &EffectiveConfig) -> String {
    let properties_path = properties_path.display();
    format!(
        r#"[Unit]
Description=SPM Monitor for {name}
After=local-fs.target network-online.target
Requires=local-fs.target network-online.target
SourcePath={properties_path}

[Service]
EnvironmentFile={properties_path}
ExecStart={java} {jmx_params} {java_defaults} $JAVA_OPTIONS -Dspm.home={spm_home} -cp {jar} {class} {properties_path}
Nice=19
User={user}
StandardOutput=journal
StandardError=journal
SuccessExitStatus=143
Restart=always
RestartSec=30
StartLimitBurst=5
StartLimitInterval=5min
TimeoutStopSec=30

[Install]
WantedBy=multi-user.target
"#,
        java = env.value(JAVA),
        jmx_params = env.value(SPM_MONITOR_JMX_PARAMS),
        java_defaults = env.value(JAVA_DEFAULTS),
        spm_home = env.value(SPM_HOME),
        jar = env.value(SPM_MONITOR_JAR),
        class = env.value(SPM_MONITOR_STANDALONE_CLASS),
        user = env.value(SPM_MONITOR_USER),
    )
}

/// Start commands follow the order of `names`; stop runs the wildcard first, then each name.
pub fn starter_unit<S: AsRef<str>>(names: &[S]) -> String {
    let exec_stop: String = names
        .iter()
        .map(|name| format!("ExecStop=-/bin/systemctl stop {}\n", name.as_ref()))
        .collect();
    let exec_start: String = names
        .iter()
        .map(|name| format!("ExecStart=/bin/systemctl start {}\n", name.as_ref()))
        .collect();

    format!(
        r#"[Unit]
Description=SPM Monitor Starter
After=local-fs.target network-online.target
Requires=local-fs.target network-online.target

[Service]
Type=oneshot
RemainAfterExit=yes
ExecStop=-/bin/systemctl stop {MONITOR_UNIT_GLOB}
{exec_stop}{exec_start}
[Install]
WantedBy=multi-user.target
"#
    )
}
