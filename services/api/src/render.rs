use clap::Args;
use probate_docs::config::{AppConfig, DocumentConfig};
use probate_docs::document::{DocumentContent, DocumentKind};
use probate_docs::error::AppError;
use probate_docs::format::StyleProfile;
use probate_docs::forms;
use probate_docs::mapping::{CaseBundle, ScheduleImporter};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Document kind identifier, e.g. `p3-affidavit` or `p10`
    #[arg(long)]
    pub(crate) kind: String,
    /// JSON case bundle (case, intake, executors, beneficiaries, schedules, overrides)
    #[arg(long)]
    pub(crate) case: PathBuf,
    /// Optional asset schedule CSV appended to the bundle's schedule records
    #[arg(long)]
    pub(crate) schedule_csv: Option<PathBuf>,
    /// Write the document tree here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let RenderArgs {
        kind,
        case,
        schedule_csv,
        output,
    } = args;

    let kind: DocumentKind = kind.parse()?;
    let config = AppConfig::load()?;
    let bundle = load_bundle(case, schedule_csv)?;
    let document = render_bundle(kind, &bundle, &config.documents);
    let json = serde_json::to_string_pretty(&document)?;

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            info!(kind = %kind, path = %path.display(), "document written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

pub(crate) fn run_kinds() {
    for kind in DocumentKind::ordered() {
        println!("{:<26} {}", kind.id(), kind.label());
    }
}

pub(crate) fn load_bundle(
    case: PathBuf,
    schedule_csv: Option<PathBuf>,
) -> Result<CaseBundle, AppError> {
    let raw = fs::read_to_string(case)?;
    let mut bundle: CaseBundle = serde_json::from_str(&raw)?;
    if let Some(path) = schedule_csv {
        bundle.schedules.extend(ScheduleImporter::from_path(path)?);
    }
    Ok(bundle)
}

pub(crate) fn render_bundle(
    kind: DocumentKind,
    bundle: &CaseBundle,
    documents: &DocumentConfig,
) -> DocumentContent {
    let model = bundle.build(documents);
    forms::generate(kind, &model, &StyleProfile::from(documents))
}
