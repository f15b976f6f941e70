use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use finclusion_classifier::{ModelArtifact, Predictor};
use finclusion_cli::answers::read_answers_file;
use finclusion_cli::config::{AppConfig, ModelSource};
use finclusion_cli::logging::redact_value;
use finclusion_cli::report::{ModelReport, PredictionReport};
use finclusion_encode::{education_note, encode};
use finclusion_model::{FeatureVector, RawAnswer};

use crate::cli::{AnswerArgs, EncodeArgs, ModelArgs, ModelSourceArgs, OutputFormatArg, PredictArgs};
use crate::summary::{print_features, print_model, print_prediction, print_schema};

pub fn run_encode(args: &EncodeArgs) -> Result<()> {
    let features = encode_answers(&args.answers)?;
    match args.output {
        OutputFormatArg::Text => print_features(&features),
        OutputFormatArg::Json => print_json(&PredictionReport::features_only(&features))?,
    }
    Ok(())
}

pub fn run_predict(args: &PredictArgs, config: &AppConfig) -> Result<()> {
    let features = encode_answers(&args.answers)?;
    if let OutputFormatArg::Text = args.output {
        print_features(&features);
    }
    let artifact = load_artifact(&args.model, config)?;

    let result = Predictor::new(&artifact)
        .predict(&features)
        .context("prediction failed")?;

    match args.output {
        OutputFormatArg::Text => print_prediction(&result),
        OutputFormatArg::Json => {
            print_json(&PredictionReport::with_prediction(&features, result))?;
        }
    }
    Ok(())
}

pub fn run_schema() -> Result<()> {
    print_schema();
    Ok(())
}

/// Prints the artifact summary. Returns false when its schema differs from the encoder's.
pub fn run_model(args: &ModelArgs, config: &AppConfig) -> Result<bool> {
    let source = model_source(&args.model, config);
    let artifact = load_source(&source)?;
    let report = ModelReport::new(&artifact, &source.path);
    if let Some(mismatch) = &report.mismatch {
        warn!(path = %source.path.display(), %mismatch, "model schema differs from encoder");
    }
    print_model(&report);
    Ok(report.is_compatible())
}

fn collect_answer(args: &AnswerArgs) -> Result<RawAnswer> {
    let base = match &args.answers_file {
        Some(path) => {
            info!(path = %path.display(), "reading answers file");
            read_answers_file(path)?
        }
        None => RawAnswer::default(),
    };
    let answer = args.overrides().apply(base);
    let rendered = format!("{answer:?}");
    debug!(answer = redact_value(&rendered), "collected answers");
    if let Some(note) = education_note(&answer.education) {
        warn!(%note, "education levels are independent toggles; encoding as ticked");
    }
    Ok(answer)
}

fn encode_answers(args: &AnswerArgs) -> Result<FeatureVector> {
    let answer = collect_answer(args)?;
    Ok(encode(&answer))
}

fn model_source(args: &ModelSourceArgs, config: &AppConfig) -> ModelSource {
    ModelSource::resolve(args.path.as_deref(), args.sha256.as_deref(), config)
}

fn load_artifact(args: &ModelSourceArgs, config: &AppConfig) -> Result<ModelArtifact> {
    load_source(&model_source(args, config))
}

fn load_source(source: &ModelSource) -> Result<ModelArtifact> {
    if source.sha256.is_none() {
        debug!(path = %source.path.display(), "no model digest configured");
    }
    ModelArtifact::load_verified(&source.path, source.sha256.as_deref())
        .with_context(|| format!("load model {}", source.path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
