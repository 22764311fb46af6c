use crate::report::{
    run_demo, run_diagnose, run_questionnaire, DemoArgs, DiagnoseArgs, QuestionnaireArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use maturity_diagnosis::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "AI Maturity Diagnosis",
    about = "Score AI-readiness questionnaires and serve the diagnosis engine over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Diagnose a respondent from a CSV or JSON responses file
    Diagnose(DiagnoseArgs),
    /// Print the blocks and questions of a questionnaire preset
    Questionnaire(QuestionnaireArgs),
    /// Run a canned respondent through the engine and print the report
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Diagnose(args) => run_diagnose(args),
        Command::Questionnaire(args) => run_questionnaire(args),
        Command::Demo(args) => run_demo(args),
    }
}
