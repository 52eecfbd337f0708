//! Static event corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of event file bodies shaped like
//! what ansible-runner writes into `job_events/`.

use std::path::{Path, PathBuf};

/// A short playbook run against two hosts. Includes events with no stdout,
/// no host and empty stdout, which must never reach a host log.
pub const CORPUS_PLAYBOOK: &[&str] = &[
    r#"{"uuid":"a1","counter":1,"event":"playbook_on_start","created":"2021-06-01T10:00:00.000001","event_data":{"playbook":"deploy.yml"}}"#,
    r#"{"uuid":"a2","counter":2,"event":"playbook_on_play_start","stdout":"\r\nPLAY [all] *********","created":"2021-06-01T10:00:00.100000","event_data":{"play":"all"}}"#,
    r#"{"uuid":"a3","counter":3,"event":"runner_on_start","stdout":"","created":"2021-06-01T10:00:01.000000","event_data":{"host":"host-0","task":"ping"}}"#,
    r#"{"uuid":"a4","counter":4,"event":"runner_on_ok","stdout":"ok: [host-1]","created":"2021-06-01T10:00:02.500000","event_data":{"host":"host-1","task":"ping"}}"#,
    r#"{"uuid":"a5","counter":5,"event":"runner_on_ok","stdout":"ok: [host-0]","created":"2021-06-01T10:00:02.000000","event_data":{"host":"host-0","task":"ping"}}"#,
    r#"{"uuid":"a6","counter":6,"event":"runner_on_failed","stdout":"fatal: [host-1]: FAILED! => {\"msg\": \"boom\"}","created":"2021-06-01T10:00:03.000000","event_data":{"host":"host-1","task":"fail"}}"#,
    r#"{"uuid":"a7","counter":7,"event":"verbose","stdout":"Using /etc/ansible/ansible.cfg as config file"}"#,
    r#"{"uuid":"a8","counter":8,"event":"runner_on_ok","stdout":"changed: [host-0]","created":"2021-06-01T10:00:01.500000","event_data":{"host":"host-0","task":"install"}}"#,
    r#"{"uuid":"a9","counter":9,"event":"playbook_on_stats","stdout":"\r\nPLAY RECAP *********","created":"2021-06-01T10:00:04.000000","event_data":{}}"#,
];

/// Expected `host-0` log for [`CORPUS_PLAYBOOK`].
pub const PLAYBOOK_HOST_0_LOG: &str = "changed: [host-0]\nok: [host-0]\n";

/// Expected `host-1` log for [`CORPUS_PLAYBOOK`].
pub const PLAYBOOK_HOST_1_LOG: &str =
    "ok: [host-1]\nfatal: [host-1]: FAILED! => {\"msg\": \"boom\"}\n";

/// Event bodies that are not valid JSON.
pub const CORPUS_MALFORMED: &[&str] = &[
    "not json at all",
    r#"{"stdout":"truncated","created":"#,
    "",
];

/// Lay out `<root>/artifacts/<ident>/job_events/` with one file per corpus
/// entry and return the written paths in the order written.
pub fn write_private_dir(root: &Path, ident: &str, corpus: &[&str]) -> Vec<PathBuf> {
    let job_events = root.join("artifacts").join(ident).join("job_events");
    std::fs::create_dir_all(&job_events).expect("create job_events");
    corpus
        .iter()
        .enumerate()
        .map(|(i, body)| {
            let path = job_events.join(format!("{}-{ident}.json", i + 1));
            std::fs::write(&path, body).expect("write job event");
            path
        })
        .collect()
}
