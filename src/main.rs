use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use xsd_check::backend;
use xsd_check::config::{Args, Config};
use xsd_check::validation::{RunStatus, print_report};

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // exit code 2 is reserved for invalid documents
            let status = match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => RunStatus::EnvironmentError.exit_code(),
            };
            let _ = error.print();
            return ExitCode::from(status);
        }
    };

    let config = match Config::from_args_and_env(args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error:#}");
            return ExitCode::from(RunStatus::EnvironmentError.exit_code());
        }
    };

    ExitCode::from(run(&config).exit_code())
}

/// Try each compiled-in backend in preference order; the first one that
/// completes determines the outcome. A backend failure is surfaced with that
/// backend's marker before moving on to the next one.
fn run(config: &Config) -> RunStatus {
    let backends = backend::backends();
    if backends.is_empty() {
        print_install_guidance();
        return RunStatus::EnvironmentError;
    }

    let last = backends.len() - 1;
    for (index, strategy) in backends.iter().enumerate() {
        log::debug!("checking with backend {}", strategy.name());
        match strategy.validate(&config.xml_path, &config.xsd_path) {
            Ok(result) => {
                print_report(strategy.name(), &result);
                return if result.is_valid() {
                    RunStatus::Valid
                } else {
                    RunStatus::Invalid
                };
            }
            Err(error) => {
                println!("[{}] {error}", strategy.name());
                if index < last {
                    log::warn!("backend {} failed, trying the next one", strategy.name());
                }
            }
        }
    }

    println!("No backend completed the check.");
    RunStatus::EnvironmentError
}

fn print_install_guidance() {
    println!("No schema validation backend is compiled into this build.");
    println!("Rebuild with at least one of:");
    println!("  cargo build --features xmlschema    (pure Rust xmlschema port)");
    println!("  cargo build --features libxml2      (libxml2 bindings; needs the system libxml2)");
}

#[cfg(all(test, feature = "libxml2"))]
mod tests {
    use std::fs;

    use xsd_check::config::{Args, Config};
    use xsd_check::validation::RunStatus;

    use super::run;

    const SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="note" type="xs:string"/>
</xs:schema>
"#;

    #[test]
    fn run_classifies_valid_and_invalid_documents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let xsd = dir.path().join("note.xsd");
        fs::write(&xsd, SCHEMA).expect("write xsd");

        let valid = dir.path().join("valid.xml");
        fs::write(&valid, "<note>hello</note>").expect("write xml");
        let invalid = dir.path().join("invalid.xml");
        fs::write(&invalid, "<memo>hello</memo>").expect("write xml");

        let config = Config::from_args(
            Args {
                xml: Some(valid),
                xsd: Some(xsd.clone()),
            },
            dir.path(),
        )
        .expect("config");
        assert_eq!(run(&config), RunStatus::Valid);

        let config = Config::from_args(
            Args {
                xml: Some(invalid),
                xsd: Some(xsd),
            },
            dir.path(),
        )
        .expect("config");
        assert_eq!(run(&config), RunStatus::Invalid);
    }
}
