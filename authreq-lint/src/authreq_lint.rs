mod input;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use authreq::annotations::{ANNOTATION_PREFIX_ENV, AnnotationKeys};
use authreq::{AuthAnnotationParser, AuthDescriptor, ValidationError};
use clap::Parser;
use env_logger::WriteStyle;
use input::{AnnotationInput, AnnotationSource, parse_annotation_pair};
use log::{LevelFilter, info};
use serde::Serialize;

#[derive(Parser, Debug)]
#[clap(name = "authreq-lint")]
#[clap(
    about = "Checks the external authentication annotations of ingress resources",
    version
)]
struct Cli {
    /// JSON files holding a resource manifest or a flat annotation map (`-` for stdin)
    files: Vec<PathBuf>,

    /// Annotation given inline, repeatable; all pairs form one annotation set
    #[clap(
        short = 'a',
        long = "annotation",
        value_name = "KEY=VALUE",
        value_parser = parse_annotation_pair
    )]
    annotations: Vec<(String, String)>,

    /// Annotation prefix of the auth keys
    #[clap(long, env = ANNOTATION_PREFIX_ENV)]
    prefix: Option<String>,

    /// off, error, warn, info, debug or trace
    #[clap(long, env = "INGRESS_AUTHREQ_LOG_LEVEL", default_value = "warn")]
    log_level: LevelFilter,

    #[clap(long)]
    no_color: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth: Option<&'a AuthDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> Report<'a> {
    fn new(source: &'a str, result: &'a Result<AuthDescriptor, ValidationError>) -> Self {
        match result {
            Ok(auth) => Self {
                source,
                auth: Some(auth),
                key: None,
                error: None,
            },
            Err(e) => Self {
                source,
                auth: None,
                key: e.key(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Writes one report line for `source`, returns whether it was accepted
fn check(
    parser: &AuthAnnotationParser,
    source: &AnnotationSource,
    out: &mut impl Write,
) -> Result<bool> {
    let result = match &source.input {
        AnnotationInput::Resource(manifest) => parser.parse_resource(manifest),
        AnnotationInput::Annotations(annotations) => parser.parse(annotations),
    };
    writeln!(
        out,
        "{}",
        serde_json::to_string(&Report::new(&source.source, &result))?
    )?;
    Ok(result.is_ok())
}

fn run(
    parser: &AuthAnnotationParser,
    sources: &[AnnotationSource],
    out: &mut impl Write,
) -> Result<()> {
    let mut rejected = 0;
    for source in sources {
        if !check(parser, source, out)? {
            rejected += 1;
        }
    }
    if rejected > 0 {
        bail!("{rejected} of {} annotation sets rejected", sources.len());
    }
    Ok(())
}

fn init_logging(level: LevelFilter, colors: bool) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .write_style(if colors {
            WriteStyle::Auto
        } else {
            WriteStyle::Never
        })
        .try_init()
        .with_context(|| "installing logger")
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.log_level, !args.no_color)?;

    let parser = AuthAnnotationParser::new(AnnotationKeys::from_prefix(args.prefix.as_deref()));
    info!("auth url annotation: {}", parser.keys().url);

    let mut sources = Vec::new();
    for path in &args.files {
        sources.push(AnnotationSource::from_path(path)?);
    }
    if !args.annotations.is_empty() {
        sources.push(AnnotationSource::from_pairs(&args.annotations));
    }
    if sources.is_empty() {
        sources.push(AnnotationSource::from_path(&PathBuf::from("-"))?);
    }

    run(&parser, &sources, &mut std::io::stdout().lock())
}
