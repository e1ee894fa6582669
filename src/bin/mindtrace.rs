//! MindTrace CLI - Command-line interface for MindTrace Core
//!
//! Commands:
//! - assess: Run the risk ensemble over upstream model outputs (batch mode)
//! - screen: Replay answers through the adaptive screening engine
//! - schema: Print schema information

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use mindtrace_core::pipeline::{RiskAssessment, RiskEngine};
use mindtrace_core::screening::{
    self, build_action_plan, summarize_screening, ActionPlan, ScreeningState, ScreeningSummary,
};
use mindtrace_core::types::{NlpPrediction, RiskTier};
use mindtrace_core::{effective_tier, EngineError, PhqInput, CORE_VERSION};

/// MindTrace - on-device risk tiering and adaptive screening
#[derive(Parser)]
#[command(name = "mindtrace")]
#[command(author = "MindTrace")]
#[command(version = CORE_VERSION)]
#[command(about = "Tier risk signals and replay adaptive screenings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the risk ensemble over upstream model outputs (batch mode)
    Assess {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "ndjson")]
        output_format: OutputFormat,

        /// Instance ID for provenance tracking
        #[arg(long)]
        instance_id: Option<String>,
    },

    /// Replay a sequence of option ids through the screening engine
    Screen {
        /// Comma-separated option ids (e.g. "poor,some,isolated,no")
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<String>>,

        /// Input file with one option id per line (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Ensemble tier (0-2) to merge into the effective tier
        #[arg(long)]
        ensemble_tier: Option<u8>,

        /// Output report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one request per line)
    Ndjson,
    /// JSON array of requests
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Newline-delimited JSON (one assessment per line)
    Ndjson,
    /// JSON array of assessments
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input schema (assess requests)
    Input,
    /// Output schema (assessment payloads)
    Output,
}

/// One assess request: whatever upstream signals are currently available
#[derive(serde::Deserialize)]
struct AssessRequest {
    #[serde(default)]
    phq: Option<PhqInput>,
    #[serde(default)]
    nlp: Option<NlpPrediction>,
    #[serde(default)]
    item9_positive: bool,
}

#[derive(serde::Serialize)]
struct ScreenReport {
    state: ScreeningState,
    summary: ScreeningSummary,
    effective_tier: RiskTier,
    action_plan: ActionPlan,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), MindtraceCliError> {
    match cli.command {
        Commands::Assess {
            input,
            output,
            input_format,
            output_format,
            instance_id,
        } => cmd_assess(&input, &output, input_format, output_format, instance_id),

        Commands::Screen {
            answers,
            input,
            ensemble_tier,
            json,
        } => cmd_screen(answers, input.as_deref(), ensemble_tier, json),

        Commands::Schema { schema_type } => cmd_schema(schema_type),
    }
}

fn cmd_assess(
    input: &PathBuf,
    output: &PathBuf,
    input_format: InputFormat,
    output_format: OutputFormat,
    instance_id: Option<String>,
) -> Result<(), MindtraceCliError> {
    let input_data = read_input(input)?;

    let requests: Vec<AssessRequest> = match input_format {
        InputFormat::Ndjson => {
            let mut requests = Vec::new();
            for (index, line) in input_data.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let request: AssessRequest = serde_json::from_str(trimmed).map_err(|e| {
                    MindtraceCliError::ParseError(format!("line {}: {}", index + 1, e))
                })?;
                requests.push(request);
            }
            requests
        }
        InputFormat::Json => serde_json::from_str(&input_data)?,
    };

    if requests.is_empty() {
        return Err(MindtraceCliError::NoRequests);
    }

    let engine = match instance_id {
        Some(id) => RiskEngine::with_instance_id(id),
        None => RiskEngine::new(),
    };

    let assessments: Vec<RiskAssessment> = requests
        .iter()
        .map(|request| {
            engine.assess(
                request.phq.as_ref(),
                request.nlp.as_ref(),
                request.item9_positive,
            )
        })
        .collect();

    let output_data = format_output(&assessments, &output_format)?;

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_screen(
    answers: Option<Vec<String>>,
    input: Option<&std::path::Path>,
    ensemble_tier: Option<u8>,
    json: bool,
) -> Result<(), MindtraceCliError> {
    let option_ids: Vec<String> = match (answers, input) {
        (Some(ids), _) => ids,
        (None, Some(path)) => {
            let data = if path.to_string_lossy() == "-" {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            } else {
                fs::read_to_string(path)?
            };
            data.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        }
        (None, None) => return Err(MindtraceCliError::NoAnswers),
    };

    // The engine itself treats bad input as a no-op; the CLI is strict so a
    // replay file with a typo fails loudly instead of silently skipping.
    let mut state = ScreeningState::initial();
    for option_id in &option_ids {
        if state.completed {
            return Err(EngineError::ScreeningCompleted(option_id.clone()).into());
        }
        let question_id = state
            .current_question_id
            .clone()
            .unwrap_or_else(|| screening::START_QUESTION.to_string());

        let next = state.answer(option_id);
        if next.answers.len() == state.answers.len() {
            return Err(EngineError::UnknownOption {
                question: question_id,
                option: option_id.clone(),
            }
            .into());
        }
        state = next;
    }

    let summary = summarize_screening(&state.answers);
    let ensemble = match ensemble_tier {
        Some(raw) => RiskTier::try_from(raw).map_err(MindtraceCliError::ParseError)?,
        None => RiskTier::Low,
    };
    let tier = effective_tier(ensemble, summary.tier);
    let action_plan = build_action_plan(&summary, tier);

    let report = ScreenReport {
        state,
        summary,
        effective_tier: tier,
        action_plan,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Screening Report");
        println!("================");
        println!("Answered:     {}", report.state.answers.len());
        println!("Completed:    {}", report.state.completed);
        println!("Total score:  {}", report.summary.total_score);
        println!("Safety flag:  {}", report.summary.safety_flag);
        println!("Tier:         {}", report.summary.label);
        println!("Effective:    {}", report.effective_tier);
        println!("\n{} ({})", report.action_plan.title, report.action_plan.window);
        for action in &report.action_plan.actions {
            println!("  - {}", action);
        }
    }

    Ok(())
}

fn cmd_schema(schema_type: SchemaType) -> Result<(), MindtraceCliError> {
    match schema_type {
        SchemaType::Input => {
            println!("Input Schema: assess request");
            println!();
            println!("One JSON object per request with three optional fields:");
            println!();
            println!("1. phq - PHQ model output in any wire shape:");
            println!("   - bare number:     21.5");
            println!("   - numeric string:  \"12\"");
            println!("   - payload object:  {{ \"score\": 11, \"severity\": \"Moderate\" }}");
            println!("     (or {{ \"prediction\": 11 }}; unparseable input coerces to 0)");
            println!();
            println!("2. nlp - NLP classification:");
            println!("   - predicted_class (the value \"suicide\" forces Critical)");
            println!("   - confidence (0-1), risk_tier (0-2)");
            println!("   - top_features: [{{ \"feature\", \"impact\" }}]");
            println!();
            println!("3. item9_positive - PHQ-9 Item 9 self-harm flag (default false)");
        }
        SchemaType::Output => {
            println!("Output Schema: risk assessment");
            println!();
            println!("Each assessment contains:");
            println!();
            println!("- assessment_version: Schema version (1.0.0)");
            println!("- producer: {{ name, version, instance_id }}");
            println!("- computed_at_utc: RFC 3339 timestamp");
            println!("- decision: {{ tier (0-2), reason (audit string) }}");
            println!("- plan: {{ tier, label, color, summary, reason,");
            println!("          interventions[3], predicted_class, confidence, phq_severity }}");
            println!("- explainability: up to 5 ranked {{ name, effect }} entries");
        }
    }

    Ok(())
}

// Helper functions

fn read_input(input: &PathBuf) -> Result<String, MindtraceCliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn format_output(
    assessments: &[RiskAssessment],
    format: &OutputFormat,
) -> Result<String, MindtraceCliError> {
    match format {
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for assessment in assessments {
                lines.push(serde_json::to_string(assessment)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => Ok(serde_json::to_string(assessments)?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(assessments)?),
    }
}

// Error types

#[derive(Debug)]
enum MindtraceCliError {
    Io(io::Error),
    Engine(EngineError),
    Json(serde_json::Error),
    NoRequests,
    NoAnswers,
    ParseError(String),
}

impl From<io::Error> for MindtraceCliError {
    fn from(e: io::Error) -> Self {
        MindtraceCliError::Io(e)
    }
}

impl From<EngineError> for MindtraceCliError {
    fn from(e: EngineError) -> Self {
        MindtraceCliError::Engine(e)
    }
}

impl From<serde_json::Error> for MindtraceCliError {
    fn from(e: serde_json::Error) -> Self {
        MindtraceCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<MindtraceCliError> for CliError {
    fn from(e: MindtraceCliError) -> Self {
        match e {
            MindtraceCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            MindtraceCliError::Engine(e) => CliError {
                code: "ENGINE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'mindtrace schema input' for the expected shapes".to_string()),
            },
            MindtraceCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            MindtraceCliError::NoRequests => CliError {
                code: "NO_REQUESTS".to_string(),
                message: "No assess requests found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            MindtraceCliError::NoAnswers => CliError {
                code: "NO_ANSWERS".to_string(),
                message: "No screening answers provided".to_string(),
                hint: Some("Pass --answers or --input".to_string()),
            },
            MindtraceCliError::ParseError(msg) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: msg,
                hint: Some("Check input format".to_string()),
            },
        }
    }
}
