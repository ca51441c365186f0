//! tavnit CLI - gendered Hebrew legal template tool

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use tavnit::validate::Validator;
use tavnit::{Gender, JsonFormat, Lexicon, RenderOptions, Tavnit, ValidationOptions};

#[derive(Parser)]
#[command(name = "tavnit")]
#[command(author = "tavnit contributors")]
#[command(version)]
#[command(about = "Resolve, render and validate gendered Hebrew legal templates", long_about = None)]
struct Cli {
    /// Extra lexicon entries (JSON object of lemma -> forms)
    #[arg(long, global = true, env = "TAVNIT_LEXICON", value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Template library (JSON array of templates) instead of the built-in one
    #[arg(long, global = true, env = "TAVNIT_LIBRARY", value_name = "FILE")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve template text for a gender
    Resolve {
        /// Template text (read from --file if omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read template text from a file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Resolve a library template by id
    Section {
        /// Template id
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Render a JSON document
    Render {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// Emit only the block markup, without the <article> wrapper
        #[arg(long)]
        bare: bool,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Build a document from library templates
    Compose {
        /// Template ids, in order
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,

        /// Document title
        #[arg(short, long, default_value = "מסמך")]
        title: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: OutputFormat,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Validate every template for every gender
    Validate {
        /// Only check these genders
        #[arg(short, long, value_enum)]
        gender: Vec<GenderArg>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        /// Skip legacy gender marker detection
        #[arg(long)]
        no_legacy: bool,

        /// Skip stale placeholder detection
        #[arg(long)]
        no_stale: bool,
    },

    /// List library templates
    Templates {
        /// Only list one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show lexicon entries
    Lexicon {
        /// Show the forms of a single word
        #[arg(value_name = "WORD")]
        word: Option<String>,

        /// Export the whole lexicon as JSON
        #[arg(long)]
        export: bool,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct ContextArgs {
    /// Subject gender
    #[arg(short, long, value_enum, default_value = "male")]
    gender: GenderArg,

    /// Variable value (NAME=VALUE, repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,

    /// Override tag gender (TAG=GENDER, repeatable)
    #[arg(long = "override", value_name = "TAG=GENDER")]
    overrides: Vec<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum GenderArg {
    /// Masculine singular
    Male,
    /// Feminine singular
    Female,
    /// Plural
    Plural,
    /// Company or other legal entity
    Organization,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Plural => Gender::Plural,
            GenderArg::Organization => Gender::Organization,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Right-to-left HTML
    Html,
    /// Plain text
    Text,
    /// Document JSON (unresolved)
    Json,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let lexicon = cli.lexicon.as_deref();
    let library = cli.library.as_deref();

    let result = match cli.command {
        Some(Commands::Resolve {
            text,
            file,
            context,
        }) => cmd_resolve(lexicon, library, text, file.as_deref(), &context),
        Some(Commands::Section { id, context }) => cmd_section(lexicon, library, &id, &context),
        Some(Commands::Render {
            input,
            output,
            format,
            bare,
            context,
        }) => cmd_render(lexicon, library, &input, output.as_deref(), format, bare, &context),
        Some(Commands::Compose {
            ids,
            title,
            output,
            format,
            context,
        }) => cmd_compose(lexicon, library, &ids, &title, output.as_deref(), format, &context),
        Some(Commands::Validate {
            gender,
            json,
            no_legacy,
            no_stale,
        }) => cmd_validate(lexicon, library, &gender, json, no_legacy, no_stale),
        Some(Commands::Templates { category }) => {
            cmd_templates(lexicon, library, category.as_deref())
        }
        Some(Commands::Lexicon { word, export }) => cmd_lexicon(lexicon, word.as_deref(), export),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: tavnit <COMMAND>".yellow());
            println!("       tavnit --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Build the configured `Tavnit` from the global options.
fn load_tavnit(lexicon: Option<&Path>, library: Option<&Path>) -> CliResult<Tavnit> {
    let mut tavnit = Tavnit::new();
    if let Some(path) = lexicon {
        log::debug!("merging lexicon from {}", path.display());
        tavnit = tavnit.with_lexicon_file(path)?;
    }
    if let Some(path) = library {
        log::debug!("loading library from {}", path.display());
        tavnit = tavnit.with_library_file(path)?;
    }
    Ok(tavnit)
}

fn apply_context(mut tavnit: Tavnit, context: &ContextArgs) -> CliResult<Tavnit> {
    tavnit = tavnit.with_gender(context.gender.into());
    for (name, value) in parse_pairs(&context.vars)? {
        tavnit = tavnit.with_value(name, value);
    }
    for (tag, gender) in parse_pairs(&context.overrides)? {
        tavnit = tavnit.with_override(tag, gender.parse::<Gender>()?);
    }
    Ok(tavnit)
}

/// Split `NAME=VALUE` arguments.
fn parse_pairs(args: &[String]) -> CliResult<HashMap<String, String>> {
    let mut pairs = HashMap::new();
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("Expected NAME=VALUE, got '{}'", arg))?;
        if name.trim().is_empty() {
            return Err(format!("Empty name in '{}'", arg).into());
        }
        pairs.insert(name.trim().to_string(), value.to_string());
    }
    Ok(pairs)
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_resolve(
    lexicon: Option<&Path>,
    library: Option<&Path>,
    text: Option<String>,
    file: Option<&Path>,
    context: &ContextArgs,
) -> CliResult<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => return Err("Provide TEXT or --file".into()),
    };

    let tavnit = apply_context(load_tavnit(lexicon, library)?, context)?;
    println!("{}", tavnit.resolve(&text));
    Ok(())
}

fn cmd_section(
    lexicon: Option<&Path>,
    library: Option<&Path>,
    id: &str,
    context: &ContextArgs,
) -> CliResult<()> {
    let tavnit = apply_context(load_tavnit(lexicon, library)?, context)?;
    println!("{}", tavnit.resolve_section(id)?);
    Ok(())
}

fn cmd_render(
    lexicon: Option<&Path>,
    library: Option<&Path>,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    bare: bool,
    context: &ContextArgs,
) -> CliResult<()> {
    let tavnit = apply_context(load_tavnit(lexicon, library)?, context)?
        .with_render_options(RenderOptions::new().with_article(!bare));
    let doc = tavnit.load(input)?;

    let content = match format {
        OutputFormat::Html => doc.to_html()?,
        OutputFormat::Text => doc.to_text()?,
        OutputFormat::Json => doc.to_json(JsonFormat::Pretty)?,
    };
    write_output(output, &content)
}

fn cmd_compose(
    lexicon: Option<&Path>,
    library: Option<&Path>,
    ids: &[String],
    title: &str,
    output: Option<&Path>,
    format: OutputFormat,
    context: &ContextArgs,
) -> CliResult<()> {
    let tavnit = apply_context(load_tavnit(lexicon, library)?, context)?;
    let doc = tavnit.compose(title, ids)?;

    let content = match format {
        OutputFormat::Html => doc.to_html()?,
        OutputFormat::Text => doc.to_text()?,
        OutputFormat::Json => doc.to_json(JsonFormat::Pretty)?,
    };
    write_output(output, &content)
}

fn cmd_validate(
    lexicon: Option<&Path>,
    library: Option<&Path>,
    genders: &[GenderArg],
    json: bool,
    no_legacy: bool,
    no_stale: bool,
) -> CliResult<()> {
    let tavnit = load_tavnit(lexicon, library)?;

    let mut options = ValidationOptions::new()
        .with_legacy_detection(!no_legacy)
        .with_stale_detection(!no_stale);
    if !genders.is_empty() {
        options = options.with_genders(genders.iter().map(|&g| Gender::from(g)));
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Validating {} templates...", tavnit.library().len()));

    let report = Validator::new(options)
        .with_resolver(tavnit.resolver())
        .validate(tavnit.library());
    pb.finish_and_clear();

    if json {
        println!("{}", report.to_json(JsonFormat::Pretty)?);
    } else {
        for template in &report.templates {
            let status = if template.passed {
                "PASS".green().bold()
            } else {
                "FAIL".red().bold()
            };
            println!("[{}] {} {}", status, template.id, template.title.dimmed());
            for diagnostic in &template.diagnostics {
                let severity = if diagnostic.is_error() {
                    "error".red()
                } else {
                    "warning".yellow()
                };
                println!("    {}: {}", severity, diagnostic);
            }
        }
        println!(
            "\n{} templates: {} passed, {} failed ({} errors, {} warnings)",
            report.total,
            report.passed.to_string().green(),
            report.failed.to_string().red(),
            report.error_count,
            report.warning_count
        );
    }

    if !report.is_success() {
        return Err(format!("{} templates failed validation", report.failed).into());
    }
    Ok(())
}

fn cmd_templates(
    lexicon: Option<&Path>,
    library: Option<&Path>,
    category: Option<&str>,
) -> CliResult<()> {
    let tavnit = load_tavnit(lexicon, library)?;
    let library = tavnit.library();

    let categories: Vec<&str> = match category {
        Some(c) => vec![c],
        None => library.categories(),
    };

    for category in categories {
        println!("{}", category.cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for template in library.by_category(category) {
            println!("  {} {}", template.id.bold(), template.title);
            if !template.variables.is_empty() {
                println!("    {}: {}", "variables".dimmed(), template.variables.join(", "));
            }
        }
        println!();
    }

    Ok(())
}

fn cmd_lexicon(lexicon: Option<&Path>, word: Option<&str>, export: bool) -> CliResult<()> {
    let tavnit = load_tavnit(lexicon, None)?;
    let snapshot = tavnit.registry().snapshot();

    if export {
        println!("{}", snapshot.to_json()?);
        return Ok(());
    }

    if let Some(word) = word {
        let engine = tavnit.resolver();
        let mut found = false;
        for gender in Gender::ALL {
            if let Some(form) = engine.engine().inflect(word, gender) {
                println!("{:>14}: {}", gender.to_string().bold(), form);
                found = true;
            }
        }
        if !found {
            return Err(format!("'{}' is not in the lexicon", word).into());
        }
        return Ok(());
    }

    print_lexicon(&snapshot);
    Ok(())
}

fn print_lexicon(lexicon: &Lexicon) {
    println!(
        "{} (version {}, {} entries)",
        "Lexicon".cyan().bold(),
        lexicon.version(),
        lexicon.len()
    );
    println!("{}", "─".repeat(60).dimmed());
    for (lemma, entry) in lexicon.iter() {
        println!(
            "  {} → {} | {} | {}",
            lemma.bold(),
            entry.female,
            entry.plural,
            entry.form(Gender::Organization)
        );
    }
}

fn cmd_version() {
    println!("{} {}", "tavnit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Gendered Hebrew legal template tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs(&["name=דוד".to_string(), "share=a=b".to_string()]).unwrap();
        assert_eq!(pairs["name"], "דוד");
        assert_eq!(pairs["share"], "a=b");

        assert!(parse_pairs(&["broken".to_string()]).is_err());
        assert!(parse_pairs(&["=x".to_string()]).is_err());
    }

    #[test]
    fn test_load_tavnit_with_files() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = dir.path().join("lexicon.json");
        fs::write(
            &lexicon,
            r#"{"שומר": {"male": "שומר", "female": "שומרת", "plural": "שומרים"}}"#,
        )
        .unwrap();

        let tavnit = load_tavnit(Some(&lexicon), None)
            .unwrap()
            .with_gender(Gender::Female);
        assert_eq!(tavnit.resolve("השומר"), "השומרת");
    }

    #[test]
    fn test_load_tavnit_missing_library() {
        assert!(load_tavnit(None, Some(Path::new("/nonexistent/library.json"))).is_err());
    }
}
