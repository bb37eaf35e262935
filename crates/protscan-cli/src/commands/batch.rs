use crate::cli::{BatchArgs, SortField};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use protscan::core::io::records;
use protscan::core::models::protein::Protein;
use protscan::engine::config::AnalysisConfig;
use protscan::engine::filter::{ProteinFilter, SortKey};
use protscan::engine::progress::ProgressReporter;
use protscan::engine::service::ProteinService;
use protscan::engine::stats::ProteinStats;
use protscan::workflows::batch::{self, ProteinSummary};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Id => SortKey::Id,
            SortField::Name => SortKey::Name,
            SortField::Length => SortKey::Length,
            SortField::MolecularWeight => SortKey::MolecularWeight,
            SortField::IsoelectricPoint => SortKey::IsoelectricPoint,
            SortField::Hydrophobicity => SortKey::Hydrophobicity,
        }
    }
}

fn filter_from_args(args: &BatchArgs) -> ProteinFilter {
    ProteinFilter {
        gene: args.gene.clone(),
        family: args.family.clone(),
        min_length: args.min_length,
        max_length: args.max_length,
        min_molecular_weight: args.min_weight,
        max_molecular_weight: args.max_weight,
        sort_by: args.sort_by.into(),
        descending: args.descending,
        limit: args.limit.unwrap_or(0),
        offset: args.offset,
        ..Default::default()
    }
}

fn select_rows(proteins: &[Protein], args: &BatchArgs) -> Vec<ProteinSummary> {
    let filter = filter_from_args(args);
    let selected = match args.limit {
        Some(_) => filter.apply(proteins).items,
        None => filter.select(proteins),
    };
    selected.into_iter().map(ProteinSummary::from).collect()
}

fn render_stats(stats: &ProteinStats, skipped: usize) -> String {
    format!(
        "Scored {} protein(s), skipped {}.\n\
         Average length:            {:.1}\n\
         Average molecular weight:  {:.2} Da\n\
         Average isoelectric point: {:.2}\n\
         Average hydrophobicity:    {:.3}\n\
         Average interactors:       {:.1}\n\
         Distinct genes:            {}\n\
         Distinct families:         {}\n",
        stats.total_proteins,
        skipped,
        stats.avg_length,
        stats.avg_molecular_weight,
        stats.avg_isoelectric_point,
        stats.avg_hydrophobicity,
        stats.avg_interactors,
        stats.total_genes,
        stats.total_families,
    )
}

pub fn run(args: BatchArgs, config: AnalysisConfig, quiet: bool) -> Result<()> {
    info!("Loading protein dataset from {:?}", &args.input);
    let rows = records::read_records_from_path(&args.input).map_err(|e| {
        CliError::Unreadable {
            path: args.input.clone(),
            source: e.into(),
        }
    })?;
    if rows.is_empty() {
        warn!("Dataset {:?} contains no data rows.", &args.input);
    }

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let service = ProteinService::new(config);

    let result = batch::run(rows, &service, &reporter);
    for failure in &result.failures {
        warn!(
            "Row {} ({}) skipped: {}",
            failure.index + 1,
            failure.id.as_deref().unwrap_or("no id"),
            failure.error
        );
    }

    let summaries = select_rows(&result.proteins, &args);
    info!("Writing {} row(s).", summaries.len());
    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            records::write_rows(BufWriter::new(file), &summaries)?;
        }
        None => records::write_rows(io::stdout().lock(), &summaries)?,
    }

    if !quiet {
        let stats = ProteinStats::collect(&result.proteins);
        let mut stderr = io::stderr().lock();
        stderr.write_all(render_stats(&stats, result.failures.len()).as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const HEADER: &str = "ID,Name,Gene name,Taxonomic lineage,Cellular components,Domain,Family,\
Biological process,Function,Length,Molecular weight,Number of interactors,pI,Net_Charge_7_4,\
Hydrophobicity_GRAVY,Depth_Rank,Last_Rank,First_Rank,Sequence_Chunks\n";

    fn args(input: PathBuf, output: Option<PathBuf>) -> BatchArgs {
        BatchArgs {
            input,
            output,
            min_length: None,
            max_length: None,
            min_weight: None,
            max_weight: None,
            gene: None,
            family: None,
            sort_by: SortField::Id,
            descending: false,
            limit: None,
            offset: 0,
        }
    }

    fn write_dataset(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("proteins.csv");
        let body = format!(
            "{HEADER}\
P2,Beta,GB,,,,Kinases,,,,,3,,,,,,,\"MKVLLI\"\n\
P1,Alpha,GA,,,,Kinases,,,,,1,,,,,,,\"[\"\"GG\"\", \"\"A\"\"]\"\n\
P3,Gamma,,,,,,,,,,,,,,,,,\"MKB\"\n"
        );
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn batch_writes_valid_rows_and_skips_bad_ones() {
        let dir = tempdir().unwrap();
        let input = write_dataset(dir.path());
        let output = dir.path().join("out.csv");

        run(args(input, Some(output.clone())), AnalysisConfig::default(), true).unwrap();

        let text = fs::read_to_string(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,name,length,molecular_weight"));
        assert!(lines[1].starts_with("P1,Alpha,3,"));
        assert!(lines[2].starts_with("P2,Beta,6,"));
    }

    #[test]
    fn filter_and_sort_flags_shape_the_output() {
        let dir = tempdir().unwrap();
        let input = write_dataset(dir.path());
        let output = dir.path().join("out.csv");

        let mut batch_args = args(input, Some(output.clone()));
        batch_args.min_length = Some(4);
        batch_args.family = Some("kinase".into());
        run(batch_args, AnalysisConfig::default(), true).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let ids: Vec<_> = text
            .lines()
            .skip(1)
            .filter_map(|l| l.split(',').next())
            .collect();
        assert_eq!(ids, vec!["P2"]);
    }

    #[test]
    fn limit_selects_a_single_page() {
        let dir = tempdir().unwrap();
        let input = write_dataset(dir.path());
        let output = dir.path().join("out.csv");

        let mut batch_args = args(input, Some(output.clone()));
        batch_args.sort_by = SortField::Length;
        batch_args.descending = true;
        batch_args.limit = Some(1);
        run(batch_args, AnalysisConfig::default(), true).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().starts_with("P2,"));
    }

    #[test]
    fn missing_dataset_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let result = run(
            args(dir.path().join("absent.csv"), None),
            AnalysisConfig::default(),
            true,
        );
        assert!(matches!(result, Err(CliError::Unreadable { .. })));
    }

    #[test]
    fn stats_summary_mentions_skipped_rows() {
        let stats = ProteinStats {
            total_proteins: 2,
            total_families: 1,
            ..Default::default()
        };
        let text = render_stats(&stats, 1);
        assert!(text.starts_with("Scored 2 protein(s), skipped 1."));
        assert!(text.contains("Distinct families:         1"));
    }

    #[test]
    fn each_skipped_row_is_warned_once() {
        use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

        let dir = tempdir().unwrap();
        let input = write_dataset(dir.path());
        let log_path = dir.path().join("batch.log");
        let log_file = fs::File::create(&log_path).unwrap();
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::WARN)
            .with(fmt::layer().with_writer(std::sync::Mutex::new(log_file)).with_ansi(false));

        tracing::subscriber::with_default(subscriber, || {
            let output = dir.path().join("out.csv");
            run(args(input, Some(output)), AnalysisConfig::default(), true).unwrap();
        });

        let log = fs::read_to_string(&log_path).unwrap();
        let warnings: Vec<_> = log.lines().filter(|l| l.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1, "{log}");
        assert!(warnings[0].contains("Row 3 (P3) skipped"));
    }
}
