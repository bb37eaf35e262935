use crate::cli::AnalyzeArgs;
use crate::error::Result;
use protscan::engine::config::AnalysisConfig;
use protscan::engine::service::ProteinService;
use protscan::workflows::analyze::{self, SequenceAnalysis};
use tracing::info;

pub fn run(args: AnalyzeArgs, config: AnalysisConfig) -> Result<()> {
    let service = ProteinService::new(config);

    info!("Analyzing a sequence of {} fragment(s).", args.fragments.len());
    let analysis = analyze::analyze(&args.fragments, &service)?;

    print!("{}", render(&analysis, config.charge_ph));
    Ok(())
}

fn render(analysis: &SequenceAnalysis, charge_ph: f64) -> String {
    let charge_label = format!("Net charge (pH {:.1}):", charge_ph);
    format!(
        "{:<22}{}\n{:<22}{:.2} Da\n{:<22}{:.2}\n{:<22}{:+.2}\n{:<22}{:.3}\n",
        "Length:",
        analysis.length,
        "Molecular weight:",
        analysis.molecular_weight,
        "Isoelectric point:",
        analysis.isoelectric_point,
        charge_label,
        analysis.net_charge_7_4,
        "Hydrophobicity:",
        analysis.hydrophobicity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_every_property() {
        let mut analysis =
            analyze::analyze(&["MKV".to_string(), "LLI".to_string()], &ProteinService::default())
                .unwrap();
        analysis.molecular_weight = 700.912;
        analysis.isoelectric_point = 8.6;
        analysis.net_charge_7_4 = 0.934;
        analysis.hydrophobicity = 2.3;

        let text = render(&analysis, 7.4);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Length:") && lines[0].ends_with('6'));
        assert!(lines[1].ends_with("700.91 Da"));
        assert!(lines[2].ends_with("8.60"));
        assert!(lines[3].starts_with("Net charge (pH 7.4):") && lines[3].ends_with("+0.93"));
        assert!(lines[4].ends_with("2.300"));
    }

    #[test]
    fn run_rejects_invalid_residues() {
        let args = AnalyzeArgs {
            fragments: vec!["MKZ".to_string()],
        };
        assert!(run(args, AnalysisConfig::default()).is_err());
    }
}
