//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::convert::{tag_counts, CsvConverter, MergeConverter};
use crate::decode::{CsvDecoder, JsonlDecoder, RecordDecoder, SourceRecord};
use crate::error::{Error, Result, ResultExt};
use crate::output::QuestionWriter;
use std::fs;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Csv {
                input,
                output,
                category,
                authored_by,
            } => self.convert_csv(input, output, category, authored_by),
            Commands::Merge {
                ai,
                human,
                output,
                category,
            } => self.merge(ai, human, output, category),
            Commands::Validate { input, ai, human } => {
                self.validate(input.as_deref(), ai.as_deref(), human.as_deref())
            }
        }
    }

    fn convert_csv(
        &self,
        input: &Path,
        output: &Path,
        category: &str,
        authored_by: &str,
    ) -> Result<()> {
        let rows = read_csv(input)?;
        info!("Read {} rows from {}", rows.len(), input.display());

        let questions = CsvConverter::new()
            .with_category(category)
            .with_authored_by(authored_by)
            .convert(&rows)?;

        QuestionWriter::new().write(&questions, output)?;
        println!(
            "Converted {} questions to {}",
            questions.len(),
            output.display()
        );
        Ok(())
    }

    fn merge(&self, ai: &Path, human: &Path, output: &Path, category: &str) -> Result<()> {
        let ai_records = read_jsonl(ai)?;
        info!("Read {} AI records from {}", ai_records.len(), ai.display());

        let human_records = read_jsonl(human)?;
        info!(
            "Read {} human records from {}",
            human_records.len(),
            human.display()
        );

        let questions = MergeConverter::new()
            .with_category(category)
            .convert(&ai_records, &human_records)?;

        QuestionWriter::new().write(&questions, output)?;
        println!(
            "Merged {} questions to {}",
            questions.len(),
            output.display()
        );
        for (tag, count) in tag_counts(&questions) {
            println!("  {tag}: {count}");
        }
        Ok(())
    }

    fn validate(
        &self,
        input: Option<&Path>,
        ai: Option<&Path>,
        human: Option<&Path>,
    ) -> Result<()> {
        let mut checked = false;

        if let Some(input) = input {
            let rows = read_csv(input)?;
            let questions = CsvConverter::new().convert(&rows)?;
            println!("OK: {} ({} questions)", input.display(), questions.len());
            checked = true;
        }

        if let (Some(ai), Some(human)) = (ai, human) {
            let ai_records = read_jsonl(ai)?;
            let human_records = read_jsonl(human)?;
            let questions = MergeConverter::new().convert(&ai_records, &human_records)?;
            println!(
                "OK: {} + {} ({} questions)",
                ai.display(),
                human.display(),
                questions.len()
            );
            checked = true;
        }

        if !checked {
            return Err(Error::Other(
                "Nothing to validate: pass --input, or both --ai and --human".to_string(),
            ));
        }

        Ok(())
    }
}

/// Read an input file, distinguishing a missing path from other IO errors
fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_csv(path: &Path) -> Result<Vec<SourceRecord>> {
    let body = read_input(path)?;
    CsvDecoder::new().decode(&body)
}

fn read_jsonl(path: &Path) -> Result<Vec<SourceRecord>> {
    let body = read_input(path)?;
    JsonlDecoder::new().decode(&body)
}
