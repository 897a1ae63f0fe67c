//! Subcommand implementations.

use std::error::Error;
use std::path::{Path, PathBuf};

use querybind_application::matchers::{
    INVALID_BOUND_MESSAGE, RangeEditorConfig, field_placeholder, variable_suggestions,
};
use querybind_application::ports::{FileSystem, VariableRepository};
use querybind_application::{ResolveQueryFile, ResolveQueryFileInput};
use querybind_domain::matcher::{RangeField, RangeOptions};
use querybind_domain::settings::ResolverSettings;
use querybind_domain::variable::{ScopedVars, VariableStore};
use querybind_infrastructure::{
    DocumentFormat, FileQueryRepository, FileVariableRepository, SettingsRepository,
    TokioFileSystem, to_json_stable,
};
use serde_json::json;
use tracing::info;

type CommandResult = Result<(), Box<dyn Error>>;

/// Arguments of `querybind resolve`.
pub struct ResolveArgs {
    pub variables: PathBuf,
    pub queries: PathBuf,
    pub scoped: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

async fn load_settings(path: Option<&Path>) -> Result<ResolverSettings, Box<dyn Error>> {
    match path {
        Some(path) => Ok(SettingsRepository::new(path).load().await?),
        None => Ok(ResolverSettings::default()),
    }
}

async fn load_scoped(
    fs: &TokioFileSystem,
    path: Option<&Path>,
) -> Result<ScopedVars, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(ScopedVars::new());
    };
    let content = fs.read_file(path).await?;
    Ok(DocumentFormat::from_path(path).parse(&content)?)
}

/// Resolves a query batch and prints or writes the result.
pub async fn resolve(args: ResolveArgs) -> CommandResult {
    let fs = TokioFileSystem::new();
    let settings = load_settings(args.settings.as_deref()).await?;
    let scoped = load_scoped(&fs, args.scoped.as_deref()).await?;

    let use_case = ResolveQueryFile::new(
        FileVariableRepository::new(fs),
        FileQueryRepository::new(fs),
        settings,
    );
    let output = use_case
        .execute(ResolveQueryFileInput {
            variables_path: args.variables,
            queries_path: args.queries,
            scoped,
            output_path: args.output.clone(),
        })
        .await?;

    info!(
        queries = output.queries.len(),
        variables = output.variable_count,
        "resolved query batch"
    );

    if args.output.is_none() {
        print!("{}", to_json_stable(&output.queries)?);
    }
    Ok(())
}

/// Prints the validation state of a pair of range bounds.
pub fn validate_range(from: &str, to: &str) -> CommandResult {
    let options = RangeOptions::new(from, to);
    let validation = RangeEditorConfig::default().initial_validation(&options);

    let errors: Vec<String> = [RangeField::From, RangeField::To]
        .into_iter()
        .filter(|field| validation.is_invalid(*field))
        .map(|field| format!("{}: {INVALID_BOUND_MESSAGE}", field_placeholder(field)))
        .collect();

    let report = json!({
        "valid": validation.is_valid(),
        "invalid": validation,
        "errors": errors,
    });
    print!("{}", to_json_stable(&report)?);
    Ok(())
}

/// Prints the suggestion list for a variables document.
pub async fn suggest(variables: &Path) -> CommandResult {
    let loaded = FileVariableRepository::new(TokioFileSystem::new())
        .load(variables)
        .await?;
    let store = VariableStore::new(loaded)?;

    print!("{}", to_json_stable(&variable_suggestions(&store))?);
    Ok(())
}
