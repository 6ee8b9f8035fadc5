use std::env;
use std::path::PathBuf;

use job_search::config::{ClientConfig, Config, LogFormat};

// Environment variables are process-wide, so everything lives in one test.
#[test]
fn configuration_comes_from_the_environment() {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:9999");
    env::set_var("SEARCH_SCRIPT_PATH", "/opt/jobs/search_jobs.py");
    env::remove_var("PYTHON_BIN");
    env::set_var("STATIC_DIR", "  ");
    env::set_var("LOG_FORMAT", "JSON");

    let config = Config::from_env().expect("server config");
    assert_eq!(config.server_address, "127.0.0.1:9999");
    assert_eq!(
        config.search_script_path,
        Some(PathBuf::from("/opt/jobs/search_jobs.py"))
    );
    assert_eq!(config.python_bin, "python3");
    assert_eq!(config.static_dir, None);
    assert_eq!(config.log_format, LogFormat::Json);

    env::set_var("LOG_FORMAT", "xml");
    assert!(Config::from_env().is_err());
    env::remove_var("LOG_FORMAT");
    assert_eq!(Config::from_env().expect("defaults").log_format, LogFormat::Text);

    env::set_var("SEARCH_ENDPOINT", "http://jobs.local:8888/api/search_jobs");
    env::set_var("JOBS_PER_PAGE", "25");
    env::set_var("APPLIED_STORE_PATH", "/tmp/applied.json");

    let client = ClientConfig::from_env().expect("client config");
    assert_eq!(client.search_endpoint.host_str(), Some("jobs.local"));
    assert_eq!(client.jobs_per_page, 25);
    assert_eq!(client.applied_store_path, PathBuf::from("/tmp/applied.json"));

    env::set_var("JOBS_PER_PAGE", "0");
    assert!(ClientConfig::from_env().is_err());

    env::set_var("JOBS_PER_PAGE", "ten");
    assert!(ClientConfig::from_env().is_err());

    env::remove_var("JOBS_PER_PAGE");
    env::set_var("SEARCH_ENDPOINT", "not a url");
    assert!(ClientConfig::from_env().is_err());

    env::remove_var("SEARCH_ENDPOINT");
    let defaults = ClientConfig::from_env().expect("defaults");
    assert_eq!(defaults.jobs_per_page, 10);
    assert_eq!(defaults.search_endpoint.path(), "/api/search_jobs");
}
