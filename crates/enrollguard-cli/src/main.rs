//! CLI entry point for enrollguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! The decision logic lives in the `enrollguard-domain` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use enrollguard_domain::catalog::SubjectCatalog;
use enrollguard_domain::enrollment::Enrollment;
use enrollguard_domain::model::{Student, Subject};
use enrollguard_scenario::{parse_scenario_toml, resolve_scenario};
use enrollguard_types::{EnrollmentStatus, SubjectId};

#[derive(Parser, Debug)]
#[command(
    name = "enrollguard",
    version,
    about = "Enrollment eligibility checks over subject prerequisite graphs"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one enrollment against a scenario file.
    Check {
        /// Path to the scenario TOML.
        #[arg(long, default_value = "scenario.toml")]
        scenario: Utf8PathBuf,

        /// Identifier of the subject to enroll in.
        #[arg(long)]
        subject: String,

        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Run the built-in math/physics demonstration scenario.
    Demo,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Commands::Check {
            scenario,
            subject,
            format,
        } => run_check(&scenario, &subject, format),
        Commands::Demo => run_demo(),
    }
}

fn run_check(scenario_path: &Utf8PathBuf, subject: &str, format: Format) -> anyhow::Result<i32> {
    let text = std::fs::read_to_string(scenario_path)
        .with_context(|| format!("read scenario file {scenario_path}"))?;
    let resolved = resolve_scenario(parse_scenario_toml(&text)?)
        .with_context(|| format!("resolve scenario {scenario_path}"))?;

    let id = SubjectId::new(subject).context("invalid --subject identifier")?;
    let target = resolved
        .catalog
        .get(&id)
        .with_context(|| format!("subject '{subject}' is not declared in the scenario"))?
        .clone();

    let enrollment = resolved.student.enroll(&target, &resolved.catalog);
    print_enrollment(&enrollment, format)?;
    Ok(status_exit_code(enrollment.status))
}

fn run_demo() -> anyhow::Result<i32> {
    let math1 = Subject::new(SubjectId::new("M1")?, "Math 1");
    let math2 = Subject::with_prerequisites(
        SubjectId::new("M2")?,
        "Math 2",
        vec![math1.id.clone()],
    );
    let physics1 = Subject::with_prerequisites(
        SubjectId::new("P1")?,
        "Physics 1",
        vec![math2.id.clone()],
    );

    let student = Student::new(vec![math1.id.clone()], vec![math2.id.clone()]);

    let mut catalog = SubjectCatalog::new();
    catalog.insert(math1);
    catalog.insert(math2.clone());
    catalog.insert(physics1.clone());

    for target in [&math2, &physics1] {
        let enrollment = student.enroll(target, &catalog);
        println!("{}", render_text(&enrollment));
    }
    Ok(0)
}

fn print_enrollment(enrollment: &Enrollment, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => println!("{}", render_text(enrollment)),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(enrollment).context("serialize enrollment")?
        ),
    }
    Ok(())
}

fn render_text(enrollment: &Enrollment) -> String {
    format!(
        "[{}] {}: {}",
        status_label(enrollment.status),
        enrollment.subject.name,
        enrollment.message
    )
}

fn status_label(status: EnrollmentStatus) -> &'static str {
    match status {
        EnrollmentStatus::Approved => "APPROVED",
        EnrollmentStatus::Conditional => "CONDITIONAL",
        EnrollmentStatus::Rejected => "REJECTED",
    }
}

/// Approved and conditional enrollments are actionable; only a rejection
/// fails the invocation. Runtime errors exit 1 from `main`.
fn status_exit_code(status: EnrollmentStatus) -> i32 {
    match status {
        EnrollmentStatus::Approved => 0,
        EnrollmentStatus::Conditional => 0,
        EnrollmentStatus::Rejected => 2,
    }
}
