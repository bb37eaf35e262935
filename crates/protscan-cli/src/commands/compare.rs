use crate::cli::CompareArgs;
use crate::error::Result;
use protscan::core::models::protein::Protein;
use protscan::core::models::sequence::Sequence;
use protscan::core::similarity::CaseMode;
use protscan::engine::config::AnalysisConfig;
use protscan::engine::error::EngineError;
use protscan::engine::service::ProteinService;
use protscan::workflows::analyze;
use tracing::{debug, info};

fn protein_from_arg(id: &str, arg: &str) -> std::result::Result<Protein, EngineError> {
    let sequence = Sequence::parse_chunks(arg);
    Ok(Protein::new(id, id, sequence.fragments().iter().cloned())?)
}

pub fn run(args: CompareArgs, mut config: AnalysisConfig) -> Result<()> {
    if args.ignore_case {
        debug!("--ignore-case given; scoring case-insensitively.");
        config.similarity_case = CaseMode::Insensitive;
    }
    let service = ProteinService::new(config);

    let first = protein_from_arg("SEQ_A", &args.first)?;
    let second = protein_from_arg("SEQ_B", &args.second)?;

    info!(
        "Comparing sequences of length {} and {}.",
        first.sequence().len(),
        second.sequence().len()
    );
    let report = analyze::compare(&first, &second, &service)?;

    println!("Similarity: {:.4}", report.similarity);
    Ok(())
}
